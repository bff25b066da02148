//! Source resolution — picks the one text source a transform reads from.
//!
//! A record may carry flat `content`, structured `sections`, or a `script`
//! breakdown. Every transform branch goes through `SourceText::resolve`
//! instead of repeating its own fallback chain.

use crate::models::content::{ContentRecord, ScriptLine, Section};

/// Fragments shorter than this (in characters) are dropped by the splitter.
pub const MIN_SENTENCE_CHARS: usize = 10;

/// The resolved primary text source of a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourceText<'a> {
    Flat(&'a str),
    Sections(&'a [Section]),
    Script(&'a [ScriptLine]),
    Empty,
}

impl<'a> SourceText<'a> {
    /// Resolves the primary source.
    ///
    /// `prefer_flat = true` (long-form targets): content → script → sections.
    /// Otherwise: script → sections → content. Blank entries never count.
    pub fn resolve(record: &'a ContentRecord, prefer_flat: bool) -> Self {
        let flat = record
            .content
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .map(SourceText::Flat);

        let structured = || {
            if record.script.iter().any(|l| !l.text.trim().is_empty()) {
                Some(SourceText::Script(&record.script))
            } else if record.sections.iter().any(|s| !s.content.trim().is_empty()) {
                Some(SourceText::Sections(&record.sections))
            } else {
                None
            }
        };

        let resolved = if prefer_flat {
            flat.or_else(structured)
        } else {
            structured().or(flat)
        };

        resolved.unwrap_or(SourceText::Empty)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SourceText::Flat(_) => "flat",
            SourceText::Sections(_) => "sections",
            SourceText::Script(_) => "script",
            SourceText::Empty => "empty",
        }
    }

    /// Flattens the source into one string. Flat text is returned as is;
    /// structured entries are trimmed and joined with blank lines.
    pub fn joined(&self) -> String {
        match self {
            SourceText::Flat(text) => text.to_string(),
            SourceText::Sections(sections) => {
                join_paragraphs(sections.iter().map(|s| s.content.as_str()))
            }
            SourceText::Script(lines) => join_paragraphs(lines.iter().map(|l| l.text.as_str())),
            SourceText::Empty => String::new(),
        }
    }

    pub fn sentences(&self) -> Vec<String> {
        split_sentences(&self.joined())
    }
}

/// Joins non-blank texts with a blank-line separator.
pub fn join_paragraphs<'t>(texts: impl IntoIterator<Item = &'t str>) -> String {
    texts
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Splits text on period and newline boundaries. The period stays attached
/// to its sentence; fragments under `MIN_SENTENCE_CHARS` are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        match ch {
            '.' => {
                current.push(ch);
                flush_sentence(&mut current, &mut sentences);
            }
            '\n' | '\r' => flush_sentence(&mut current, &mut sentences),
            _ => current.push(ch),
        }
    }
    flush_sentence(&mut current, &mut sentences);

    sentences
}

fn flush_sentence(current: &mut String, sentences: &mut Vec<String>) {
    let sentence = current.trim();
    if sentence.chars().count() >= MIN_SENTENCE_CHARS {
        sentences.push(sentence.to_string());
    }
    current.clear();
}
