//! Print complementary hover accents for colors or a palette file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use folio_accent::color::{Color, complementary_color, parse_color};
use folio_accent::palette::Palette;
use folio_accent::renderer::render_swatch;

#[derive(Debug, Parser)]
#[command(name = "folio-accent", version, about)]
struct Args {
    /// Colors to complement (six hex digits, `#` optional)
    colors: Vec<String>,

    /// Palette file (TOML) to read instead of the built-in palette
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Write a PNG preview of the palette accents
    #[arg(short, long, value_name = "OUT.png")]
    swatch: Option<PathBuf>,

    /// Card background for the preview, overriding the palette's
    #[arg(short, long)]
    background: Option<String>,
}

fn main() -> Result<()> {
    // stdout carries the results, logs go to stderr; RUST_LOG wins when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    run(Args::parse())
}

fn run(args: Args) -> Result<()> {
    // validate every color argument before producing any output
    let background: Option<Color> = args
        .background
        .as_deref()
        .map(|bg| parse_color(bg).with_context(|| format!("bad background {bg:?}")))
        .transpose()?;

    let accents: Vec<(&str, String)> = args
        .colors
        .iter()
        .map(|input| {
            complementary_color(input)
                .map(|accent| (input.as_str(), accent))
                .with_context(|| format!("bad color {input:?}"))
        })
        .collect::<Result<_>>()?;
    for (input, accent) in &accents {
        println!("{input} -> {accent}");
    }

    // positional colors alone don't need a palette
    if !args.colors.is_empty() && args.palette.is_none() && args.swatch.is_none() {
        return Ok(());
    }

    let mut palette = match &args.palette {
        Some(path) => Palette::load(path)?,
        None => {
            tracing::info!("using built-in palette");
            Palette::default()
        }
    };
    if let Some(bg) = background {
        palette.background = bg;
    }

    let accents = palette.accents()?;
    for entry in &accents {
        println!("{}: #{} -> {}", entry.name, entry.base.into_hex6(), entry.accent);
    }

    if let Some(out) = &args.swatch {
        render_swatch(&accents, palette.background)?
            .save_png(out)
            .with_context(|| format!("writing swatch to {}", out.display()))?;
        tracing::info!(path = %out.display(), entries = accents.len(), "swatch written");
    }

    Ok(())
}
