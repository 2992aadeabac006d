use anyhow::Context;
use clap::Parser;
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vibrant::{cli::Cli, decode, Palette};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_from(vibrant::cli::normalize_args(std::env::args_os()));

    // stdout carries the rendered palette, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vibrant=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let renderer = cli.renderer();
    let config = cli.render_config();
    let source = cli.source();
    tracing::debug!(?renderer, ?config, %source, "resolved options");

    let bytes = source.read()?;
    let image = decode(&bytes).with_context(|| format!("{source} is not a supported image"))?;
    let palette = Palette::from_image(image).generate()?;
    tracing::info!(swatches = palette.len(), "generated palette");

    let output = renderer.render(&palette, &config)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
