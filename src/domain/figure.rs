//! `{{<figure>}}` shortcode translation.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

fn figure_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r#"\{\{<\s*figure\s+src="(?P<src>[^"]+)"\s+alt="(?P<alt>[^"]*)"(?:\s+width="[^"]*")?\s*>\}\}"#,
        )
        .unwrap()
    })
}

/// Result of translating a document.
///
/// `content` borrows the input when nothing was replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateResult<'a> {
    pub content: Cow<'a, str>,
    pub replacements: usize,
}

impl TranslateResult<'_> {
    pub fn is_changed(&self) -> bool {
        self.replacements > 0
    }
}

/// Replace every figure shortcode with markdown image syntax.
pub fn translate(text: &str) -> String {
    translate_figures(text).content.into_owned()
}

/// Replace every figure shortcode and count the replacements.
///
/// `src` and `alt` are copied verbatim into `![alt](src)`; `width` is dropped.
/// Shortcodes missing `src` or `alt` are left as they are.
pub fn translate_figures(text: &str) -> TranslateResult<'_> {
    let mut replacements = 0usize;

    let content = figure_regex().replace_all(text, |captures: &Captures<'_>| {
        replacements += 1;
        format!("![{}]({})", &captures["alt"], &captures["src"])
    });

    TranslateResult {
        content,
        replacements,
    }
}
