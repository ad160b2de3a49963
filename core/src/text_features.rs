//! Pure text feature extractors.
//!
//! Every function here is side-effect-free and total: empty input gets
//! a documented default score instead of an error. Scores are clamped
//! into their documented ranges before anything downstream sees them.

use crate::lexicon;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static HOOK_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(lexicon::HOOK_PATTERNS));
static CTA_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(lexicon::CTA_PATTERNS));
static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([^\s#]+)").expect("hashtag pattern"));

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).expect("lexicon pattern"))
        .collect()
}

/// Fraction of characters with code point below 128. Empty input scores 0.
pub fn ascii_fraction(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let total = text.chars().count();
    let ascii = text.chars().filter(|c| (*c as u32) < 128).count();
    ascii as f64 / total as f64
}

/// True if any character falls in the CJK Unified Ideographs block.
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c))
}

/// True if the text matches any attention-hook pattern.
pub fn has_hook(text: &str) -> bool {
    HOOK_RES.iter().any(|re| re.is_match(text))
}

/// True if the text contains a comment/save/share/tag call to action.
pub fn has_call_to_action(text: &str) -> bool {
    CTA_RES.iter().any(|re| re.is_match(text))
}

/// Extract `#token` occurrences, strip the hashes, lowercase.
/// Order of appearance is preserved; duplicates are kept.
pub fn hashtag_tokens(text: &str) -> Vec<String> {
    HASHTAG_RE
        .captures_iter(text)
        .map(|cap| cap[1].trim_matches('#').trim().to_lowercase())
        .collect()
}

/// Mean coverage of the persona's interest categories by the tag set:
/// a category counts as covered when any of its alternate surface forms
/// appears among the (already lowercased) hashtag tokens.
pub fn interest_tag_overlap(interests: &[String], tags: &[String]) -> f64 {
    if interests.is_empty() {
        return 0.0;
    }
    let tagset: HashSet<&str> = tags.iter().map(String::as_str).collect();
    let mut covered = 0usize;
    for interest in interests {
        let alts = lexicon::INTEREST_TAG_MAP
            .iter()
            .find(|(category, _)| *category == interest.as_str())
            .map(|(_, alts)| *alts)
            .unwrap_or(&[]);
        if alts
            .iter()
            .any(|alt| tagset.contains(alt.to_lowercase().as_str()))
        {
            covered += 1;
        }
    }
    covered as f64 / interests.len() as f64
}

/// Thumbnail attractiveness in [0.05, 0.95]: 0.5 baseline, +0.08 per
/// positive keyword present, -0.10 per negative keyword present.
/// Empty description scores the 0.5 baseline.
pub fn thumbnail_attractiveness(desc: &str) -> f64 {
    if desc.is_empty() {
        return 0.5;
    }
    let pos = lexicon::THUMB_POSITIVE.iter().filter(|k| desc.contains(*k)).count();
    let neg = lexicon::THUMB_NEGATIVE.iter().filter(|k| desc.contains(*k)).count();
    let score = 0.5 + 0.08 * pos as f64 - 0.10 * neg as f64;
    score.clamp(0.05, 0.95)
}

/// Caption quality in [0.1, 0.95]: a length band score plus a language
/// mix score, with hook and CTA bonuses. Empty caption scores 0.4.
pub fn caption_quality(caption: &str) -> f64 {
    if caption.is_empty() {
        return 0.4;
    }
    let length = caption.chars().count();
    let len_score: f64 = if (30..=220).contains(&length) {
        0.6
    } else if length < 30 {
        0.5
    } else {
        0.45
    };
    let lang_score = if contains_cjk(caption) {
        0.6
    } else {
        let frac = ascii_fraction(caption);
        if frac > 0.3 && frac < 0.7 {
            0.55
        } else {
            0.5
        }
    };
    let hook_bonus = if has_hook(caption) { 0.12 } else { 0.0 };
    let cta_bonus = if has_call_to_action(caption) { 0.08 } else { 0.0 };
    (len_score + lang_score - 0.5 + hook_bonus + cta_bonus).clamp(0.1, 0.95)
}

/// Strength of the caption's visible prefix (first 125 characters):
/// 0.4 base, +0.15 for a hook in the prefix, +0.05 when the trimmed
/// prefix ends on an exclamation or question mark (full- or half-width).
pub fn early_line_strength(caption: &str) -> f64 {
    if caption.is_empty() {
        return 0.4;
    }
    let prefix: String = caption.chars().take(125).collect();
    let mut score: f64 = 0.4;
    if has_hook(&prefix) {
        score += 0.15;
    }
    if prefix.trim().ends_with(['!', '?', '！', '？']) {
        score += 0.05;
    }
    score.clamp(0.1, 0.95)
}

/// Scan the lowercased caption + hashtags for value-anchor cues.
/// Returns the capped bonus plus the (cue, weight) hits for reporting.
pub fn value_anchor_bonus(caption: &str, hashtags: &str) -> (f64, Vec<(String, f64)>) {
    let text = format!("{caption} {hashtags}").to_lowercase();
    let mut score = 0.0;
    let mut hits = Vec::new();
    for (cue, weight) in lexicon::VALUE_ANCHOR_CUES {
        if text.contains(cue) {
            score += weight;
            hits.push(((*cue).to_string(), *weight));
        }
    }
    (score.min(lexicon::VALUE_ANCHOR_CAP), hits)
}
