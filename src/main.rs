//! Courtside CLI - work with saved designs from the command line.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use courtside::{init_logging, load_config, log_events, open_design, Config, EventBus, NoticeLevel};
use courtside_api::{HttpDesignApi, SaveCoordinator};

/// Courtside - merchandise design canvas tools
#[derive(Parser)]
#[command(name = "courtside", version)]
#[command(about = "Render, inspect and submit Courtside merchandise designs")]
struct Cli {
    /// Config file (default: platform config directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a design file to SVG
    Render {
        /// Design file to render
        file: PathBuf,

        /// Canvas width in pixels (default from config)
        #[arg(long)]
        width: Option<u32>,

        /// Canvas height in pixels (default from config)
        #[arg(long)]
        height: Option<u32>,

        /// Output file (default: stdout)
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// List the layers of a design, topmost first
    Layers {
        /// Design file to inspect
        file: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Submit a design to the save endpoint
    Save {
        /// Design file to submit
        file: PathBuf,
    },

    /// Show the effective configuration
    Config {
        /// Only print the config file location
        #[arg(long)]
        path: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.logging)?;
    tracing::debug!("courtside {} (built {})", courtside::VERSION, courtside::BUILD_DATE);

    match cli.command {
        Commands::Render {
            file,
            width,
            height,
            out,
        } => render(&file, &config, width, height, out.as_deref()),
        Commands::Layers { file, json } => layers(&file, &config, json),
        Commands::Save { file } => save(&file, &config),
        Commands::Config { path } => show_config(cli.config.as_deref(), &config, path),
    }
}

fn render(
    file: &Path,
    config: &Config,
    width: Option<u32>,
    height: Option<u32>,
    out: Option<&Path>,
) -> Result<()> {
    let width = width.unwrap_or(config.designer.render_width);
    let height = height.unwrap_or(config.designer.render_height);
    if width == 0 || height == 0 {
        bail!("Render size must be greater than zero");
    }

    let editor = open_design(file, config)?;
    let svg = editor.render(f64::from(width), f64::from(height)).to_svg();

    match out {
        Some(out) => {
            std::fs::write(out, svg)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            tracing::info!("Rendered {} to {}", file.display(), out.display());
        }
        None => print!("{}", svg),
    }
    Ok(())
}

fn layers(file: &Path, config: &Config, json: bool) -> Result<()> {
    let editor = open_design(file, config)?;
    let entries = editor.layers();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No layers.");
        return Ok(());
    }
    println!("{:>3}  {:>6}  {:<6}  {:<24}  FLAGS", "Z", "ID", "KIND", "LABEL");
    for entry in entries {
        let mut flags = Vec::new();
        if entry.selected {
            flags.push("selected");
        }
        if entry.locked {
            flags.push("locked");
        }
        if !entry.visible {
            flags.push("hidden");
        }
        let kind = match entry.kind {
            courtside::designer::ElementType::Image => "image",
            courtside::designer::ElementType::Text => "text",
        };
        println!(
            "{:>3}  {:>6}  {:<6}  {:<24}  {}",
            entry.z_index,
            entry.id,
            kind,
            entry.label,
            flags.join(",")
        );
    }
    Ok(())
}

fn save(file: &Path, config: &Config) -> Result<()> {
    let editor = open_design(file, config)?;
    let api = HttpDesignApi::from_settings(&config.api)?;
    let events = Arc::new(EventBus::new());
    log_events(&events);
    let coordinator = SaveCoordinator::new(Arc::new(api))
        .with_idempotency_keys(config.api.idempotency_keys)
        .with_events(events);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let notice = runtime.block_on(coordinator.save_state(editor.state()));

    println!("{}", notice);
    if notice.level == NoticeLevel::Success {
        Ok(())
    } else {
        bail!("{}", notice.message)
    }
}

fn show_config(path: Option<&Path>, config: &Config, path_only: bool) -> Result<()> {
    let location = path.map(Path::to_path_buf).unwrap_or_else(Config::default_path);
    if path_only {
        println!("{}", location.display());
        return Ok(());
    }
    println!("# {}", location.display());
    print!(
        "{}",
        toml::to_string_pretty(config).context("Failed to format config")?
    );
    Ok(())
}
