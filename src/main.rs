use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use usctitle::{
    config::Config,
    document::{load_document, resolve_target},
    export::{export, output_file_name},
    ExportFormat,
};

#[derive(Parser)]
#[command(
    name = "usctitle",
    version,
    about = "Extract Title/Chapter/Section structure from a U.S. Code .docx file"
)]
struct Cli {
    /// Document path or title number; omit to use the only `Title *.docx` in the directory
    target: Option<String>,

    /// Write output to this file instead of Title_<N>.<ext>
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (defaults to the configured format, xml otherwise)
    #[arg(short, long, value_enum)]
    format: Option<ExportFormat>,

    /// Directory searched for `Title *.docx` files
    #[arg(short = 'C', long, default_value = ".")]
    directory: PathBuf,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.init_config {
        match Config::init_default()? {
            Some(path) => println!("Wrote default config to {}", path.display()),
            None => println!("No config directory available on this system"),
        }
        return Ok(());
    }

    let config = Config::load().context("Failed to load config")?;
    let format = cli.format.unwrap_or(config.output.format);

    let target = resolve_target(cli.target.as_deref(), &cli.directory)?;
    let code = load_document(&target)?;
    let rendered = export(&code, format, config.output.indent)?;

    let out_path = match cli.output {
        Some(path) => path,
        None => {
            let name = output_file_name(&code, format);
            match &config.output.output_dir {
                Some(dir) => {
                    fs::create_dir_all(dir)
                        .with_context(|| format!("Failed to create {}", dir.display()))?;
                    dir.join(name)
                }
                None => PathBuf::from(name),
            }
        }
    };

    fs::write(&out_path, rendered)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;
    println!("Created {}", out_path.display());

    Ok(())
}
