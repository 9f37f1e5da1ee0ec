use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use pnmkit::{EncoderConfig, Encoding, PnmEncoder, PnmFormat, Scene};

/// Render a JSON scene to a PBM/PGM/PPM file
#[derive(Parser, Debug)]
#[command(name = "pnmkit", version, about)]
struct Cli {
    /// Scene description (JSON)
    scene: PathBuf,

    /// Output file; defaults to the scene name with the format's extension
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the scene format (p1..p6 or e.g. `color-binary`)
    #[arg(short, long)]
    format: Option<PnmFormat>,

    /// Force the ASCII variant of the format
    #[arg(long, conflicts_with = "binary")]
    ascii: bool,

    /// Force the binary variant of the format
    #[arg(long)]
    binary: bool,

    /// Create missing directories for the output file
    #[arg(long)]
    create_dirs: bool,

    /// More logging (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let mut scene = Scene::load(&cli.scene)
        .with_context(|| format!("loading scene {}", cli.scene.display()))?;
    if let Some(format) = cli.format {
        scene.format = format;
    }
    if cli.ascii {
        scene.format = scene.format.with_encoding(Encoding::Ascii);
    } else if cli.binary {
        scene.format = scene.format.with_encoding(Encoding::Binary);
    }

    let image = scene.render().context("rendering scene")?;

    let output = cli
        .output
        .unwrap_or_else(|| cli.scene.with_extension(scene.format.extension()));
    let encoder = PnmEncoder::new(EncoderConfig {
        create_parent_dirs: cli.create_dirs,
        ..Default::default()
    });
    encoder
        .save(&image, &output)
        .with_context(|| format!("saving {}", output.display()))?;

    info!(
        "wrote {} ({}x{}, {})",
        output.display(),
        image.width(),
        image.height(),
        scene.format
    );
    Ok(())
}
