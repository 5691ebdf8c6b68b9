mod cli;
#[cfg(feature = "picker")]
mod picker;

use anyhow::{bail, Result};
use clap::Parser;
use md2reader::ConvertOptions;
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let Some(input) = resolve_input(&cli) else {
        bail!("No input file selected");
    };

    let options = ConvertOptions {
        input,
        output: cli.output,
        title: cli.title,
        lang: cli.lang,
        inline_images: !cli.no_images,
    };
    md2reader::convert(&options)?;
    Ok(())
}

fn resolve_input(cli: &cli::Cli) -> Option<PathBuf> {
    if let Some(ref input) = cli.input {
        return Some(input.clone());
    }

    #[cfg(feature = "picker")]
    {
        picker::pick_markdown_file()
    }

    #[cfg(not(feature = "picker"))]
    {
        log::warn!("choosing a file interactively needs the `picker` feature");
        None
    }
}
