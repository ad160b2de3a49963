//! The interaction simulator: one (post, persona, platform) trial.
//!
//! Stateless apart from the run's RNG stream. The draw ORDER inside a
//! trial is fixed and part of the reproducibility contract:
//!   1. gaussian like-probability jitter (consumes two uniforms)
//!   2. comment / share jitter uniforms, then the save jitter uniform
//!      (IG only — Threads consumes no save draws at all)
//!   3. the four Bernoulli outcome draws (save draw IG only)
//! Reordering any draw silently changes every seeded run.

use crate::persona::Persona;
use crate::post::Post;
use crate::rng::RunRng;
use crate::text_features;
use crate::types::Platform;
use serde::Serialize;

/// Probabilities, outcome draws, vote score, and feature diagnostics
/// for a single simulated trial. Created fresh per trial; never reused.
#[derive(Debug, Clone, Serialize)]
pub struct InteractionResult {
    pub like_p:    f64,
    pub comment_p: f64,
    pub share_p:   f64,
    pub save_p:    f64,
    pub like:    bool,
    pub comment: bool,
    pub share:   bool,
    pub save:    bool,
    pub vote_score: f64,
    pub diagnostics: FeatureDiagnostics,
}

/// Intermediate feature scores exposed for downstream reporting.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureDiagnostics {
    pub thumb_quality:       f64,
    pub caption_quality:     f64,
    pub early_line_strength: f64,
    pub interest_overlap:    f64,
    pub value_anchor_bonus:  f64,
    /// (cue, weight) pairs that matched in caption + hashtags.
    pub value_anchor_hits:   Vec<(String, f64)>,
}

/// Simulate one persona's reaction to one post on one platform.
/// Never fails: missing text and empty interest sets degrade to the
/// documented default scores.
pub fn simulate(
    post: &Post,
    persona: &Persona,
    platform: Platform,
    rng: &mut RunRng,
) -> InteractionResult {
    let tags = text_features::hashtag_tokens(&post.hashtags);

    let q_thumb = text_features::thumbnail_attractiveness(&post.thumb_desc);
    let q_caption = text_features::caption_quality(&post.caption);
    let q_first = text_features::early_line_strength(&post.caption);
    let overlap = text_features::interest_tag_overlap(&persona.interests, &tags);
    let (v_bonus, v_hits) = text_features::value_anchor_bonus(&post.caption, &post.hashtags);

    let weights = platform.action_weights();
    let first_impression = platform.first_impression(q_thumb, q_first);

    let propensity = 0.30 * first_impression
        + 0.30 * q_caption
        + 0.20 * overlap
        + 0.10 * persona.base_engagement()
        + persona.emoji_bonus(&post.caption)
        + 0.10 * v_bonus;
    // The traffic modifier applies after the clamp, so peak-slot
    // propensity can sit slightly above 0.97.
    let propensity = propensity.clamp(0.03, 0.97) * persona.time_slot_modifier();

    let like_p = (propensity * (1.00 + 0.06 * rng.gauss(0.0, 0.6))).clamp(0.02, 0.98);
    let comment_p = (propensity * (0.55 + 0.10 * rng.next_f64())).clamp(0.01, 0.90);
    let share_p = (propensity * (0.40 + 0.15 * rng.next_f64())).clamp(0.005, 0.70);
    let save_p = if platform.supports_save() {
        (propensity * (0.65 + 0.10 * rng.next_f64())).clamp(0.01, 0.85)
    } else {
        0.0
    };

    let like = rng.chance(like_p);
    let comment = rng.chance(comment_p);
    let share = rng.chance(share_p);
    let save = platform.supports_save() && rng.chance(save_p);

    // Vote score is built from the probabilities, not the outcome
    // draws, to keep per-trial winners stable.
    let vote_score = weights.like * like_p
        + weights.comment * comment_p
        + weights.save * save_p
        + weights.share * share_p;

    InteractionResult {
        like_p,
        comment_p,
        share_p,
        save_p,
        like,
        comment,
        share,
        save,
        vote_score,
        diagnostics: FeatureDiagnostics {
            thumb_quality: q_thumb,
            caption_quality: q_caption,
            early_line_strength: q_first,
            interest_overlap: overlap,
            value_anchor_bonus: v_bonus,
            value_anchor_hits: v_hits,
        },
    }
}
