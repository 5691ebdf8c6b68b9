use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Convert a Markdown file into one self-contained HTML reader page
#[derive(Parser, Debug)]
#[command(name = "md2reader", version, about)]
pub struct Cli {
    /// Path to the input Markdown file. Opens a file picker when omitted
    /// (requires the `picker` feature).
    pub input: Option<PathBuf>,

    /// Output HTML path. Defaults to `<name>_reader.html` next to the input.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Page title. Defaults to the input file name.
    #[arg(long)]
    pub title: Option<String>,

    /// Value of the page's `lang` attribute
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Leave local images as file references instead of embedding them
    #[arg(long, default_value_t = false)]
    pub no_images: bool,

    /// More log output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print warnings and errors
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Warn;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
