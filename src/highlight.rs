use derive_new::new;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// A run of text that is either plain or emphasized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct HighlightSpan {
    pub text: String,
    pub is_highlighted: bool,
}

impl HighlightSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text.into(), false)
    }

    pub fn highlighted(text: impl Into<String>) -> Self {
        Self::new(text.into(), true)
    }
}

/// An occurrence of a phrase, `[start, end)` in bytes.
///
/// `phrase` is the text as it appears in the source, not as it was written in the phrase list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct MatchCandidate {
    pub start: usize,
    pub end: usize,
    pub phrase: String,
}

impl MatchCandidate {
    /// Whether `[start, end)` starts inside this match or straddles its start.
    fn overlaps(&self, start: usize, end: usize) -> bool {
        (start >= self.start && start < self.end) || (end > self.start && start < self.start)
    }
}

/// Case-insensitive phrase matcher.
///
/// Longer phrases are matched first so they claim their text before any
/// shorter phrase contained in them gets the chance.
#[derive(Debug, Clone)]
pub struct Highlighter {
    patterns: Vec<Regex>,
}

impl Highlighter {
    pub fn new<S: AsRef<str>>(phrases: &[S]) -> Self {
        let mut phrases = phrases
            .iter()
            .map(|phrase| phrase.as_ref())
            .filter(|phrase| !phrase.is_empty())
            .collect::<Vec<_>>();
        // stable, so phrases of equal length keep their list order
        phrases.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        let patterns = phrases
            .into_iter()
            .filter_map(|phrase| {
                RegexBuilder::new(&regex::escape(phrase))
                    .case_insensitive(true)
                    .build()
                    .inspect_err(|err| {
                        tracing::warn!(phrase, error = %err, "skipping phrase `{}`", phrase)
                    })
                    .ok()
            })
            .collect();

        Self { patterns }
    }

    /// Accepted matches, ordered by position.
    pub fn matches(&self, text: &str) -> Vec<MatchCandidate> {
        let mut accepted: Vec<MatchCandidate> = Vec::new();

        for pattern in &self.patterns {
            for found in pattern.find_iter(text) {
                let (start, end) = (found.start(), found.end());
                if accepted.iter().any(|m| m.overlaps(start, end)) {
                    continue;
                }
                accepted.push(MatchCandidate::new(start, end, found.as_str().to_string()));
            }
        }

        accepted.sort_by_key(|m| m.start);
        accepted
    }

    /// Split `text` into plain and highlighted spans that concatenate back to `text`.
    pub fn spans(&self, text: &str) -> Vec<HighlightSpan> {
        let mut spans = Vec::new();
        let mut last = 0;

        for found in self.matches(text) {
            if found.start > last {
                spans.push(HighlightSpan::plain(&text[last..found.start]));
            }
            spans.push(HighlightSpan::highlighted(found.phrase));
            last = found.end;
        }

        if last < text.len() {
            spans.push(HighlightSpan::plain(&text[last..]));
        }

        spans
    }
}

/// One-off version of [`Highlighter::spans`].
pub fn highlight<S: AsRef<str>>(text: &str, phrases: &[S]) -> Vec<HighlightSpan> {
    Highlighter::new(phrases).spans(text)
}
