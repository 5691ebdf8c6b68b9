use pulldown_cmark::{html, Options, Parser};

/// Markdown extensions enabled for every document.
///
/// Heading attributes stay off: heading ids are assigned afterwards by
/// [`crate::headings`], which expects bare `<hN>` tags.
fn render_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_DEFINITION_LIST
}

pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, render_options());
    let mut body = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut body, parser);
    body
}
