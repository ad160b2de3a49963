//! The simulation orchestrator — one call, one self-contained run.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Validate the configuration (rounds, persona floats).
//!   2. Seed a single RunRng from the caller's seed.
//!   3. Loop rounds × personas, round-major / persona-minor, simulating
//!      post A then post B for each pairing.
//!   4. Tally votes, average probability channels, rank value cues.
//!
//! RULES:
//!   - Ties in vote score go to post A, always. Downstream ratio
//!     statistics depend on this; do not change it.
//!   - Persona iteration order is input order — never sorted.
//!   - All randomness flows through the run's RunRng.
//!   - A run owns no shared state; concurrent runs need only their own
//!     RunRng instances to stay reproducible.

use crate::error::{SimError, SimResult};
use crate::persona::Persona;
use crate::post::Post;
use crate::rng::RunRng;
use crate::simulate::{self, InteractionResult};
use crate::stats;
use crate::types::{Platform, Vote};
use serde::Serialize;

pub const MIN_ROUNDS: u32 = 1;
pub const MAX_ROUNDS: u32 = 10;

/// z for the 95% Wilson interval on the A-win ratio.
pub const WILSON_Z: f64 = 1.96;

/// How many value-anchor cues the summary reports per post.
pub const TOP_CUE_LIMIT: usize = 5;

/// One persona × one round comparison. Field names match the original
/// dataset's export columns, so serialized rows are drop-in for the
/// presentation layer's table / CSV rendering.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationRow {
    pub persona_id: String,
    #[serde(rename = "年齡段")]
    pub age_band: String,
    /// Comma-joined interest tags, as rendered in the export.
    #[serde(rename = "興趣")]
    pub interests: String,
    pub round: u32,
    pub vote: Vote,
    #[serde(rename = "A_like_p")]
    pub a_like_p: f64,
    #[serde(rename = "A_comment_p")]
    pub a_comment_p: f64,
    #[serde(rename = "A_share_p")]
    pub a_share_p: f64,
    #[serde(rename = "A_save_p")]
    pub a_save_p: f64,
    #[serde(rename = "B_like_p")]
    pub b_like_p: f64,
    #[serde(rename = "B_comment_p")]
    pub b_comment_p: f64,
    #[serde(rename = "B_share_p")]
    pub b_share_p: f64,
    #[serde(rename = "B_save_p")]
    pub b_save_p: f64,
}

/// Per-post probability averages over every trial in a run.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ChannelAverages {
    pub like_p:    f64,
    pub comment_p: f64,
    pub share_p:   f64,
    pub save_p:    f64,
}

impl ChannelAverages {
    fn accumulate(&mut self, result: &InteractionResult) {
        self.like_p += result.like_p;
        self.comment_p += result.comment_p;
        self.share_p += result.share_p;
        self.save_p += result.save_p;
    }

    fn finish(&mut self, trials: u64) {
        let divisor = trials.max(1) as f64;
        self.like_p /= divisor;
        self.comment_p /= divisor;
        self.share_p /= divisor;
        self.save_p /= divisor;
    }
}

/// Totals and derived statistics for one full run.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateSummary {
    pub votes_a: u64,
    pub votes_b: u64,
    pub vote_ratio_a: f64,
    pub vote_ratio_b: f64,
    /// 95% Wilson interval on vote_ratio_a; (0.0, 1.0) for zero trials.
    pub wilson_95ci_a: (f64, f64),
    // Echoed run parameters.
    pub platform: Platform,
    pub rounds: u32,
    pub personas: usize,
    pub avg_a: ChannelAverages,
    pub avg_b: ChannelAverages,
    /// Top value-anchor cues per post: (cue, hit count), descending.
    pub top_cues_a: Vec<(String, u64)>,
    pub top_cues_b: Vec<(String, u64)>,
}

/// Full output of one run: the ordered row sequence plus the summary.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutput {
    pub rows: Vec<SimulationRow>,
    pub summary: AggregateSummary,
}

/// Run the full A/B comparison. Deterministic: identical inputs and
/// seed always produce identical rows and summary.
pub fn run_simulation(
    post_a: &Post,
    post_b: &Post,
    platform: Platform,
    personas: &[Persona],
    rounds: u32,
    seed: u64,
) -> SimResult<SimulationOutput> {
    if !(MIN_ROUNDS..=MAX_ROUNDS).contains(&rounds) {
        return Err(SimError::InvalidRounds { rounds });
    }
    for persona in personas {
        if !persona.emoji_acceptance.is_finite() {
            return Err(SimError::NonFinite {
                context: format!("emoji acceptance for persona '{}'", persona.id),
            });
        }
    }

    log::info!(
        "run start: platform={platform} personas={} rounds={rounds} seed={seed}",
        personas.len()
    );

    let mut rng = RunRng::new(seed);
    let mut rows = Vec::with_capacity(rounds as usize * personas.len());
    let mut votes_a = 0u64;
    let mut votes_b = 0u64;
    let mut avg_a = ChannelAverages::default();
    let mut avg_b = ChannelAverages::default();
    let mut cues_a: Vec<String> = Vec::new();
    let mut cues_b: Vec<String> = Vec::new();

    for round in 1..=rounds {
        for persona in personas {
            let result_a = simulate::simulate(post_a, persona, platform, &mut rng);
            let result_b = simulate::simulate(post_b, persona, platform, &mut rng);

            // Ties go to A.
            let vote = if result_a.vote_score >= result_b.vote_score {
                Vote::A
            } else {
                Vote::B
            };
            match vote {
                Vote::A => votes_a += 1,
                Vote::B => votes_b += 1,
            }

            avg_a.accumulate(&result_a);
            avg_b.accumulate(&result_b);
            cues_a.extend(result_a.diagnostics.value_anchor_hits.iter().map(|(cue, _)| cue.clone()));
            cues_b.extend(result_b.diagnostics.value_anchor_hits.iter().map(|(cue, _)| cue.clone()));

            rows.push(SimulationRow {
                persona_id: persona.id.clone(),
                age_band: persona.age_band.clone(),
                interests: persona.interests.join(","),
                round,
                vote,
                a_like_p: result_a.like_p,
                a_comment_p: result_a.comment_p,
                a_share_p: result_a.share_p,
                a_save_p: result_a.save_p,
                b_like_p: result_b.like_p,
                b_comment_p: result_b.comment_p,
                b_share_p: result_b.share_p,
                b_save_p: result_b.save_p,
            });
        }
        log::debug!("round {round}/{rounds} complete: votes A={votes_a} B={votes_b}");
    }

    let total = votes_a + votes_b;
    let vote_ratio_a = if total > 0 {
        votes_a as f64 / total as f64
    } else {
        0.5
    };
    let vote_ratio_b = 1.0 - vote_ratio_a;
    let wilson_95ci_a = stats::wilson_interval(vote_ratio_a, total, WILSON_Z);

    let trials = rows.len() as u64;
    avg_a.finish(trials);
    avg_b.finish(trials);

    let summary = AggregateSummary {
        votes_a,
        votes_b,
        vote_ratio_a,
        vote_ratio_b,
        wilson_95ci_a,
        platform,
        rounds,
        personas: personas.len(),
        avg_a,
        avg_b,
        top_cues_a: stats::top_cues(&cues_a, TOP_CUE_LIMIT),
        top_cues_b: stats::top_cues(&cues_b, TOP_CUE_LIMIT),
    };

    log::info!(
        "run complete: {} rows, votes A={votes_a} B={votes_b}, ratio_a={vote_ratio_a:.3}",
        rows.len()
    );

    Ok(SimulationOutput { rows, summary })
}
