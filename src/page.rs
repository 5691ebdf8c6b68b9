const STYLE: &str = include_str!("assets/reader.css");
const SCRIPT: &str = include_str!("assets/reader.js");

/// The pieces that go into one reader page.
pub struct Page<'a> {
    pub title: &'a str,
    pub lang: &'a str,
    pub outline: &'a str,
    pub body: &'a str,
}

impl Page<'_> {
    pub fn render(&self) -> String {
        format!(
            r#"<!doctype html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title}</title>
<style>
{style}</style>
</head>
<body>
<button id="toggle-toc" type="button" aria-controls="toc">&#9776; Contents</button>
<nav id="toc">{outline}</nav>
<main>{body}</main>
<script>
{script}</script>
</body>
</html>
"#,
            lang = escape_html(self.lang),
            title = escape_html(self.title),
            style = STYLE,
            outline = self.outline,
            body = self.body,
            script = SCRIPT,
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
