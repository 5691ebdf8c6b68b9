use std::path::PathBuf;

/// Ask for a Markdown file with the native file dialog.
///
/// Returns `None` if the user cancels.
pub fn pick_markdown_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Choose a Markdown file")
        .add_filter("Markdown", &["md", "markdown"])
        .pick_file()
}
