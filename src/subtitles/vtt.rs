//! WebVTT caption parsing.
//!
//! Auto-generated YouTube captions use rolling cues: each cue repeats the
//! tail of the previous one, so a naive join produces every line twice.
//! The parser collapses those adjacent repeats while keeping text that
//! legitimately recurs later in the video.

use regex::Regex;
use std::sync::LazyLock;

/// Inline cue markup like `<00:00:00.599>` and `<c>...</c>`.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Any run of whitespace in the joined output.
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Convert raw VTT caption content into deduplicated plain text.
///
/// Header, metadata, timing, and cue-settings lines are dropped; inline
/// tags are stripped; a cleaned line is skipped when it is empty or equal
/// to the previously emitted line. Returns an empty string when no cue
/// text survives.
pub fn parse_vtt(vtt_content: &str) -> String {
    let mut text_lines: Vec<String> = Vec::new();
    let mut last_text = String::new();

    for line in vtt_content.lines() {
        // Skip headers, timestamps, and empty lines
        if line.starts_with("WEBVTT")
            || line.starts_with("Kind:")
            || line.starts_with("Language:")
            || line.contains("-->")
            || line.starts_with("align:")
            || line.trim().is_empty()
        {
            continue;
        }

        // Remove inline formatting tags like <00:00:00.599><c>text</c>
        let cleaned = TAG_RE
            .replace_all(line, "")
            .replace("&nbsp;", " ")
            .trim()
            .to_string();

        // VTT often repeats the previous cue's text verbatim
        if !cleaned.is_empty() && cleaned != last_text {
            last_text = cleaned.clone();
            text_lines.push(cleaned);
        }
    }

    let joined = text_lines.join(" ");
    WS_RE.replace_all(&joined, " ").trim().to_string()
}
