//! Humanize pass — randomized rewording that breaks up uniform generated text.
//!
//! Passes, in order: formal-ending substitution, paragraph filler variation,
//! emoji sprinkling. If none of them changed anything, a fixed marker is
//! prepended: for non-empty input the output never equals the input.
//!
//! The random source is injected so callers (and tests) can seed it.

use std::collections::HashMap;
use std::sync::LazyLock;

use rand::seq::SliceRandom;
use rand::Rng;
use regex::{Captures, Regex};

use crate::models::content::ContentRecord;
use crate::osmu::source::join_paragraphs;

pub mod handlers;
pub mod pools;

use pools::{EMOJIS, FILLERS, SUBSTITUTIONS};

/// Chance that a non-blank paragraph gains, loses or swaps a filler.
pub const PARAGRAPH_FILLER_PROBABILITY: f64 = 0.55;
/// Chance that a long-enough sentence gets an emoji.
pub const EMOJI_PROBABILITY: f64 = 0.7;
/// Sentences with fewer non-whitespace characters never get an emoji.
pub const MIN_EMOJI_SENTENCE_CHARS: usize = 10;
/// Prepended when every randomized pass left the text unchanged.
pub const HUMANIZED_MARKER: &str = "✍️ ";

static COMPILED_SUBSTITUTIONS: LazyLock<Vec<(Regex, &'static [&'static str])>> =
    LazyLock::new(|| {
        SUBSTITUTIONS
            .iter()
            .map(|s| {
                (
                    Regex::new(s.pattern).expect("valid substitution pattern"),
                    s.replacements,
                )
            })
            .collect()
    });

/// Humanizes `text` with an entropy-seeded random source.
pub fn humanize(text: &str) -> String {
    humanize_with(text, &mut rand::thread_rng())
}

/// `None` stays `None`.
pub fn humanize_opt(text: Option<&str>) -> Option<String> {
    text.map(humanize)
}

/// Humanizes `text` using `rng`. Empty input comes back empty.
pub fn humanize_with<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    if text.is_empty() {
        return String::new();
    }

    let substituted = substitute_formal_phrases(text, rng);
    let varied = vary_paragraph_fillers(&substituted, rng);
    let decorated = sprinkle_emoji(&varied, rng);

    if decorated == text {
        format!("{HUMANIZED_MARKER}{decorated}")
    } else {
        decorated
    }
}

/// Humanizes every text field of a transformed record.
///
/// Identical source strings (the `script`/`sections`/`threadPosts` mirrors)
/// get identical output, and `content` is rebuilt from the humanized script
/// when it was the join of the script texts.
pub fn humanize_record<R: Rng + ?Sized>(record: &ContentRecord, rng: &mut R) -> ContentRecord {
    let mut pass = MirroredPass {
        rng,
        seen: HashMap::new(),
    };

    let script_joined = join_paragraphs(record.script.iter().map(|l| l.text.as_str()));
    let mut out = record.clone();

    for line in &mut out.script {
        line.text = pass.apply(&line.text);
    }
    for section in &mut out.sections {
        section.content = pass.apply(&section.content);
    }
    for post in &mut out.thread_posts {
        post.text = pass.apply(&post.text);
    }

    out.content = match record.content.as_deref() {
        Some(content) if !out.script.is_empty() && content == script_joined => Some(
            join_paragraphs(out.script.iter().map(|l| l.text.as_str())),
        ),
        Some(content) => Some(pass.apply(content)),
        None => None,
    };

    out
}

struct MirroredPass<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    seen: HashMap<String, String>,
}

impl<R: Rng + ?Sized> MirroredPass<'_, R> {
    fn apply(&mut self, text: &str) -> String {
        if let Some(done) = self.seen.get(text) {
            return done.clone();
        }
        let humanized = humanize_with(text, &mut *self.rng);
        self.seen.insert(text.to_string(), humanized.clone());
        humanized
    }
}

fn substitute_formal_phrases<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let mut current = text.to_string();
    for (pattern, replacements) in COMPILED_SUBSTITUTIONS.iter() {
        let replaced = pattern
            .replace_all(&current, |caps: &Captures<'_>| {
                let mut expanded = String::new();
                if let Some(template) = replacements.choose(&mut *rng) {
                    caps.expand(template, &mut expanded);
                }
                expanded
            })
            .into_owned();
        current = replaced;
    }
    current
}

fn vary_paragraph_fillers<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    text.split('\n')
        .map(|paragraph| vary_filler(paragraph, rng))
        .collect::<Vec<_>>()
        .join("\n")
}

fn vary_filler<R: Rng + ?Sized>(paragraph: &str, rng: &mut R) -> String {
    if paragraph.trim().is_empty() || !rng.gen_bool(PARAGRAPH_FILLER_PROBABILITY) {
        return paragraph.to_string();
    }

    let body = paragraph.trim_start();
    let indent = &paragraph[..paragraph.len() - body.len()];

    let Some(filler) = leading_filler(body) else {
        let filler = FILLERS.choose(rng).copied().unwrap_or_default();
        return format!("{indent}{filler} {body}");
    };

    let rest = body[filler.len()..].trim_start();
    if rest.is_empty() {
        return paragraph.to_string();
    }

    if rng.gen_bool(0.5) {
        format!("{indent}{rest}")
    } else {
        let others: Vec<&str> = FILLERS.iter().copied().filter(|f| *f != filler).collect();
        let swapped = others.choose(rng).copied().unwrap_or(filler);
        format!("{indent}{swapped} {rest}")
    }
}

/// A filler only counts when followed by whitespace, so "사실상" is not "사실".
fn leading_filler(body: &str) -> Option<&'static str> {
    FILLERS.iter().copied().find(|filler| {
        body.strip_prefix(filler)
            .is_some_and(|rest| rest.starts_with(char::is_whitespace))
    })
}

fn sprinkle_emoji<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut sentence_chars = 0usize;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '.' | '!' | '?' => {
                out.push(ch);
                sentence_chars += 1;
                while let Some(&next) = chars.peek() {
                    if !matches!(next, '.' | '!' | '?') {
                        break;
                    }
                    out.push(next);
                    sentence_chars += 1;
                    chars.next();
                }
                // "1.5" and "naver.com" are not sentence ends.
                if chars.peek().map_or(true, |next| next.is_whitespace()) {
                    maybe_append_emoji(&mut out, sentence_chars, rng);
                    sentence_chars = 0;
                }
            }
            '\n' => {
                maybe_append_emoji(&mut out, sentence_chars, rng);
                sentence_chars = 0;
                out.push(ch);
            }
            _ => {
                out.push(ch);
                if !ch.is_whitespace() {
                    sentence_chars += 1;
                }
            }
        }
    }
    maybe_append_emoji(&mut out, sentence_chars, rng);

    out
}

fn maybe_append_emoji<R: Rng + ?Sized>(out: &mut String, sentence_chars: usize, rng: &mut R) {
    if sentence_chars < MIN_EMOJI_SENTENCE_CHARS || !rng.gen_bool(EMOJI_PROBABILITY) {
        return;
    }
    if let Some(emoji) = EMOJIS.choose(rng) {
        out.push(' ');
        out.push_str(emoji);
    }
}
