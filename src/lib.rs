pub mod converter;
pub mod front_matter;
pub mod headings;
pub mod image;
pub mod markdown;
pub mod outline;
pub mod page;

pub use converter::{convert, render_page, ConversionReport, ConvertOptions, PageStats};
