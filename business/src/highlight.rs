//! Splits cell text into matched and unmatched runs for highlighting.

use log::warn;
use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

impl<'a> Segment<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self {
            text,
            matched: false,
        }
    }

    pub fn matched(text: &'a str) -> Self {
        Self {
            text,
            matched: true,
        }
    }
}

/// Case-insensitive literal matcher for one filter string.
///
/// Build it once per frame and reuse it for every cell of the column.
///
/// Case folding is the regex crate's simple Unicode folding, while
/// [`UserFilter`](crate::UserFilter) compares `to_lowercase` strings. They
/// agree on ordinary letters but not on characters whose lowercase form grows
/// (`İ` lowercases to `i̇`), so such a row can be kept with nothing marked.
#[derive(Debug, Clone)]
pub struct Highlighter {
    regex: Option<Regex>,
}

impl Highlighter {
    /// A blank (empty or whitespace only) needle highlights nothing.
    pub fn new(needle: &str) -> Self {
        if needle.trim().is_empty() {
            return Self { regex: None };
        }

        let regex = RegexBuilder::new(&regex::escape(needle))
            .case_insensitive(true)
            .build()
            .map_err(|err| warn!("Highlighter: cannot compile pattern for {needle:?}: {err}"))
            .ok();

        Self { regex }
    }

    pub fn is_active(&self) -> bool {
        self.regex.is_some()
    }

    /// Concatenating the returned segments gives back `text` exactly.
    pub fn segments<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let Some(regex) = &self.regex else {
            return vec![Segment::plain(text)];
        };

        let mut segments = Vec::new();
        let mut last = 0;
        for found in regex.find_iter(text) {
            if found.start() > last {
                segments.push(Segment::plain(&text[last..found.start()]));
            }
            segments.push(Segment::matched(found.as_str()));
            last = found.end();
        }
        if last < text.len() || segments.is_empty() {
            segments.push(Segment::plain(&text[last..]));
        }
        segments
    }
}

pub fn highlight<'a>(text: &'a str, needle: &str) -> Vec<Segment<'a>> {
    Highlighter::new(needle).segments(text)
}
