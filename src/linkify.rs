//! Plain-text message rendering: bare URLs become anchors, newlines become
//! line breaks.
//!
//! Matching is greedy and whitespace-delimited: a link starts at `http://` or
//! `https://` and runs to the next whitespace character, so two URLs never
//! overlap.

use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Link(String),
    Break,
}

/// Splits message text into renderable segments.
pub fn segments(text: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push(Segment::Break);
        }
        line_segments(line, &mut out);
    }
    out
}

fn line_segments(line: &str, out: &mut Vec<Segment>) {
    let mut rest = line;
    while let Some(start) = url_start(rest) {
        if start > 0 {
            out.push(Segment::Text(rest[..start].to_string()));
        }
        let tail = &rest[start..];
        let end = tail
            .find(char::is_whitespace)
            .unwrap_or(tail.len());
        let token = &tail[..end];
        // a scheme with nothing after the slashes is not a link
        if token == "http://" || token == "https://" {
            out.push(Segment::Text(token.to_string()));
        } else {
            out.push(Segment::Link(token.to_string()));
        }
        rest = &tail[end..];
    }
    if !rest.is_empty() {
        out.push(Segment::Text(rest.to_string()));
    }
}

fn url_start(s: &str) -> Option<usize> {
    match (s.find("http://"), s.find("https://")) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// Renders message text as RSX, wrapping each URL in an anchor that opens in
/// a new tab.
pub fn linkify(text: &str) -> Element {
    let nodes: Vec<Element> = segments(text)
        .into_iter()
        .map(|seg| match seg {
            Segment::Text(t) => rsx! { "{t}" },
            Segment::Link(url) => rsx! {
                a {
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{url}"
                }
            },
            Segment::Break => rsx! { br {} },
        })
        .collect();
    rsx! {
        span { {nodes.into_iter()} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_exactly_the_url_token() {
        assert_eq!(
            segments("see http://x.io end"),
            vec![
                Segment::Text("see ".into()),
                Segment::Link("http://x.io".into()),
                Segment::Text(" end".into()),
            ]
        );
    }

    #[test]
    fn link_runs_to_next_whitespace() {
        assert_eq!(
            segments("https://a.b/c?d=1,e"),
            vec![Segment::Link("https://a.b/c?d=1,e".into())]
        );
    }

    #[test]
    fn multiple_urls_do_not_overlap() {
        assert_eq!(
            segments("http://a.io and https://b.io"),
            vec![
                Segment::Link("http://a.io".into()),
                Segment::Text(" and ".into()),
                Segment::Link("https://b.io".into()),
            ]
        );
    }

    #[test]
    fn newlines_become_breaks() {
        assert_eq!(
            segments("one\ntwo"),
            vec![
                Segment::Text("one".into()),
                Segment::Break,
                Segment::Text("two".into()),
            ]
        );
    }

    #[test]
    fn bare_scheme_is_not_a_link() {
        assert_eq!(
            segments("see http:// end"),
            vec![
                Segment::Text("see ".into()),
                Segment::Text("http://".into()),
                Segment::Text(" end".into()),
            ]
        );
        assert_eq!(segments("https://"), vec![Segment::Text("https://".into())]);
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(
            segments("no links here"),
            vec![Segment::Text("no links here".into())]
        );
    }
}
