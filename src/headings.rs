use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `<h1>`..`<h4>` elements; deeper headings are not matched.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<(h[1-4])(\s[^>]*)?>(.*?)</h[1-4]>").expect("heading pattern")
});

static ID_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s+id\s*=\s*("[^"]*"|'[^']*'|[^\s>]+)"#).expect("id attribute pattern")
});

/// A heading that received an anchor id, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub id: String,
    /// Inner HTML of the heading, unchanged.
    pub text: String,
}

/// Per-level ordinals for one conversion.
#[derive(Debug, Default)]
pub struct HeadingCounter {
    counts: [usize; 4],
}

impl HeadingCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the counter for `level` (1..=4) and return the next anchor id.
    pub fn next_id(&mut self, level: u8) -> String {
        let slot = &mut self.counts[usize::from(level.clamp(1, 4)) - 1];
        *slot += 1;
        format!("h{}-{}", level, slot)
    }
}

/// Give every `h1`-`h4` element an `hN-K` id and collect the headings.
pub fn assign_heading_ids(body: &str) -> (String, Vec<Heading>) {
    let mut counter = HeadingCounter::new();
    let mut headings = Vec::new();

    let rewritten = HEADING_RE.replace_all(body, |caps: &Captures| {
        let tag = &caps[1];
        let level = tag.as_bytes()[1] - b'0';
        let attrs = caps
            .get(2)
            .map(|m| ID_ATTR_RE.replace_all(m.as_str(), "").into_owned())
            .unwrap_or_default();
        let text = &caps[3];

        let id = counter.next_id(level);
        let element = format!(r#"<{tag} id="{id}"{attrs}>{text}</{tag}>"#);

        headings.push(Heading {
            level,
            id,
            text: text.to_string(),
        });
        element
    });

    log::debug!("assigned ids to {} headings", headings.len());
    (rewritten.into_owned(), headings)
}
