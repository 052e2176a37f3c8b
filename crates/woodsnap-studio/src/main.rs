use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use woodsnap_engine::logging::{LoggingConfig, init_logging};
use woodsnap_studio::catalog;
use woodsnap_studio::{Generator, GeneratorConfig};

/// Render the WoodSnap App Store screenshots for every device size.
#[derive(Debug, Parser)]
#[command(name = "woodsnap-studio", version, about)]
struct Cli {
    /// Root directory for `<device>/<id>.png` files.
    #[arg(short, long, default_value = "screenshots")]
    output_dir: PathBuf,

    /// Only render this device profile (repeatable).
    #[arg(long = "device", value_name = "NAME")]
    devices: Vec<String>,

    /// Only render this screenshot id (repeatable).
    #[arg(long = "only", value_name = "ID")]
    only: Vec<String>,

    /// Regular font file, tried before the built-in candidates.
    #[arg(long, value_name = "PATH")]
    font: Option<PathBuf>,

    /// Rounded caption font file, tried before the built-in candidates.
    #[arg(long, value_name = "PATH")]
    rounded_font: Option<PathBuf>,

    /// Print the devices and screenshots, then exit.
    #[arg(long)]
    list: bool,

    /// Log filter, e.g. `debug` or `woodsnap_studio=trace`.
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(match &cli.log {
        Some(filter) => LoggingConfig::with_filter(filter),
        None => LoggingConfig::default(),
    });

    if cli.list {
        print_catalog();
        return Ok(());
    }

    let config = build_config(cli)?;
    log::info!(
        "rendering {} screenshots into {}",
        config.image_count(),
        config.output_dir.display()
    );

    let mut generator = Generator::from_fonts(&config.fonts).context("loading fonts")?;
    let report = generator
        .generate(&config, |file| println!("  ✓ {}", file.path.display()))
        .context("generating screenshots")?;

    println!(
        "\n✅ Generated {} screenshots in {}",
        report.files.len(),
        report.output_dir.display()
    );
    Ok(())
}

fn build_config(cli: Cli) -> Result<GeneratorConfig> {
    let mut config = GeneratorConfig { output_dir: cli.output_dir, ..GeneratorConfig::default() };
    config.select_devices(&cli.devices).context("invalid --device")?;
    config.select_screenshots(&cli.only).context("invalid --only")?;
    if let Some(path) = cli.font {
        config.fonts.regular.insert(0, path);
    }
    if let Some(path) = cli.rounded_font {
        config.fonts.rounded.insert(0, path);
    }
    Ok(config)
}

fn print_catalog() {
    println!("Devices:");
    for d in catalog::devices() {
        println!("  {:<12} {}x{}", d.name, d.width, d.height);
    }
    println!("\nScreenshots:");
    for s in catalog::screenshots() {
        println!("  {:<12} {:<14} {}", s.id, s.scene.name(), s.caption.replace('\n', " / "));
    }
}
