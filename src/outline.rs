use crate::headings::Heading;
use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    /// `None` for an intermediate entry opened by a skipped level.
    pub heading: Option<Heading>,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    fn entry(heading: Heading) -> Self {
        Self {
            heading: Some(heading),
            children: Vec::new(),
        }
    }

    fn gap() -> Self {
        Self {
            heading: None,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    pub roots: Vec<OutlineNode>,
}

impl Outline {
    /// Nesting is relative to the first heading's level. Skipped levels get
    /// link-less entries; headings above the first one go to the top level.
    pub fn build(headings: &[Heading]) -> Self {
        let mut outline = Outline::default();
        let Some(first) = headings.first() else {
            return outline;
        };
        let baseline = first.level;

        for heading in headings {
            let depth = usize::from(heading.level.saturating_sub(baseline));
            let mut siblings = &mut outline.roots;
            for _ in 0..depth {
                if siblings.is_empty() {
                    siblings.push(OutlineNode::gap());
                }
                let last = siblings.len() - 1;
                siblings = &mut siblings[last].children;
            }
            siblings.push(OutlineNode::entry(heading.clone()));
        }

        outline
    }

    /// Render as `<ul class="toc">` with nested lists inside their parent `<li>`.
    pub fn to_html(&self) -> String {
        let mut html = String::from(r#"<ul class="toc">"#);
        push_nodes(&mut html, &self.roots);
        html.push_str("</ul>");
        html
    }
}

fn push_nodes(html: &mut String, nodes: &[OutlineNode]) {
    for node in nodes {
        html.push_str("<li>");
        if let Some(ref heading) = node.heading {
            let text = TAG_RE.replace_all(&heading.text, "");
            html.push_str(&format!(r##"<a href="#{}">{}</a>"##, heading.id, text.trim()));
        }
        if !node.children.is_empty() {
            html.push_str("<ul>");
            push_nodes(html, &node.children);
            html.push_str("</ul>");
        }
        html.push_str("</li>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headings::HeadingCounter;

    fn headings(levels: &[u8]) -> Vec<Heading> {
        let mut counter = HeadingCounter::new();
        levels
            .iter()
            .map(|&level| {
                let id = counter.next_id(level);
                Heading {
                    level,
                    text: id.to_uppercase(),
                    id,
                }
            })
            .collect()
    }

    fn depth(nodes: &[OutlineNode]) -> usize {
        nodes
            .iter()
            .map(|node| 1 + depth(&node.children))
            .max()
            .unwrap_or(0)
    }

    fn balanced(html: &str) -> bool {
        html.matches("<ul").count() == html.matches("</ul>").count()
            && html.matches("<li>").count() == html.matches("</li>").count()
    }

    #[test]
    fn empty_outline() {
        let outline = Outline::build(&[]);
        assert!(outline.roots.is_empty());
        assert_eq!(outline.to_html(), r#"<ul class="toc"></ul>"#);
    }

    #[test]
    fn nested_child() {
        let outline = Outline::build(&headings(&[1, 2]));
        assert_eq!(
            outline.to_html(),
            r##"<ul class="toc"><li><a href="#h1-1">H1-1</a><ul><li><a href="#h2-1">H2-1</a></li></ul></li></ul>"##
        );
    }

    #[test]
    fn siblings_and_returns() {
        let outline = Outline::build(&headings(&[1, 2, 2, 1, 2]));
        assert_eq!(outline.roots.len(), 2);
        assert_eq!(outline.roots[0].children.len(), 2);
        assert_eq!(outline.roots[1].children.len(), 1);
        assert_eq!(depth(&outline.roots), 2);
        assert!(balanced(&outline.to_html()));
    }

    #[test]
    fn skipped_levels_open_intermediate_entries() {
        let outline = Outline::build(&headings(&[1, 3, 2]));
        let top = &outline.roots[0];
        assert_eq!(top.children.len(), 2);
        assert!(top.children[0].heading.is_none());
        assert_eq!(top.children[0].children[0].heading.as_ref().map(|h| h.level), Some(3));
        assert_eq!(top.children[1].heading.as_ref().map(|h| h.level), Some(2));

        let html = outline.to_html();
        assert!(balanced(&html));
        assert!(html.contains(r##"<ul><li><ul><li><a href="#h3-1">"##));
    }

    #[test]
    fn first_heading_sets_the_baseline() {
        let outline = Outline::build(&headings(&[3, 3, 4]));
        assert_eq!(outline.roots.len(), 2);
        assert_eq!(outline.roots[1].children.len(), 1);
        assert_eq!(depth(&outline.roots), 2);
    }

    #[test]
    fn shallower_than_baseline_stays_top_level() {
        let outline = Outline::build(&headings(&[2, 3, 1, 2]));
        assert_eq!(outline.roots.len(), 3);
        assert_eq!(depth(&outline.roots), 2);
        assert!(balanced(&outline.to_html()));
    }

    #[test]
    fn link_text_drops_inline_markup() {
        let heading = Heading {
            level: 1,
            id: "h1-1".to_string(),
            text: r##"Intro <img src="logo.png" alt="logo" /><sup class="footnote-reference"><a href="#n">1</a></sup>"##
                .to_string(),
        };
        let html = Outline::build(&[heading]).to_html();
        assert_eq!(html, r##"<ul class="toc"><li><a href="#h1-1">Intro 1</a></li></ul>"##);
    }

    #[test]
    fn depth_never_exceeds_heading_level() {
        let levels = [1, 4, 2, 3, 4, 1, 3];
        let outline = Outline::build(&headings(&levels));
        assert_eq!(depth(&outline.roots), 4);
        assert!(balanced(&outline.to_html()));
    }
}
