use std::path::Path;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use image::ImageFormat;
use lcd_render::{DisplayRenderer, DisplaySpec, GlyphTable};
use log::{info, warn};

/// Written to the working directory.
const OUTPUT_PATH: &str = "lcd.png";

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a message as a simulated 16x2 character LCD image")]
struct Cli {
    /// Message to display; each argument starts a new display row
    #[arg(value_name = "MESSAGE", required = true)]
    message: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            println!("{}", Cli::command().render_usage());
            std::process::exit(1);
        },
        Err(err) => err.exit(),
    };

    let table = GlyphTable::standard().context("built-in font table is invalid")?;
    let renderer = DisplayRenderer::new(DisplaySpec::standard_16x2(), table)
        .context("invalid display configuration")?;

    render_to_file(&renderer, &cli.message.join("\n"), Path::new(OUTPUT_PATH))
}

fn render_to_file(renderer: &DisplayRenderer, message: &str, path: &Path) -> Result<()> {
    let grid = renderer.layout(message);
    if grid.dropped() > 0 {
        let spec = renderer.spec();
        warn!(
            "{} character(s) did not fit on the {}x{} display and were dropped",
            grid.dropped(),
            spec.cols,
            spec.rows
        );
    }

    let image = renderer.render_layout(&grid);
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("failed to write {:?}", path))?;

    info!("wrote {}x{} image to {:?}", image.width(), image.height(), path);
    Ok(())
}
