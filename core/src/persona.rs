//! Synthetic audience personas and their engagement priors.
//!
//! Persona records keep the original dataset's Traditional-Chinese
//! field names through serde renames, so uploaded persona files parse
//! unchanged. Missing fields fall back to documented defaults instead
//! of failing: age band "19-25", emoji acceptance 0.5, active slot
//! "晚上9點後", empty interest set.

use crate::error::SimResult;
use crate::lexicon;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    #[serde(default)]
    pub id: String,
    /// One of "13-18", "19-25", "26-35", "36+". Unknown bands are
    /// tolerated and score the fallback engagement prior.
    #[serde(rename = "年齡段", default = "default_age_band")]
    pub age_band: String,
    /// Interest category tags, e.g. "卡牌", "美食".
    #[serde(rename = "興趣", default)]
    pub interests: Vec<String>,
    /// How well the persona tolerates emoji-heavy captions, in [0, 1].
    #[serde(rename = "emoji接受度", default = "default_emoji_acceptance")]
    pub emoji_acceptance: f64,
    #[serde(rename = "使用時間段", default = "default_time_slot")]
    pub active_time_slot: String,
}

fn default_age_band() -> String {
    "19-25".into()
}

fn default_emoji_acceptance() -> f64 {
    0.5
}

fn default_time_slot() -> String {
    "晚上9點後".into()
}

/// Parse a persona JSON array. Structural problems (not an array,
/// wrongly typed fields) surface as SimError::Serialization; missing
/// fields do not.
pub fn personas_from_json(json: &str) -> SimResult<Vec<Persona>> {
    Ok(serde_json::from_str(json)?)
}

impl Persona {
    /// Baseline engagement prior by age band. Unknown bands score 0.6.
    pub fn base_engagement(&self) -> f64 {
        match self.age_band.as_str() {
            "13-18" => 0.55,
            "19-25" => 0.70,
            "26-35" => 0.65,
            "36+" => 0.50,
            _ => 0.60,
        }
    }

    /// 1.05 when the persona is active in a high-traffic slot, else 1.0.
    pub fn time_slot_modifier(&self) -> f64 {
        if lexicon::HIGH_TRAFFIC_SLOTS.contains(&self.active_time_slot.as_str()) {
            1.05
        } else {
            1.0
        }
    }

    /// Emoji affinity bonus, symmetric around acceptance 0.5: emoji-rich
    /// captions reward accepting personas and penalise averse ones by
    /// the same magnitude. Caption with no emoji scores exactly 0.
    /// The emoji count saturates at five.
    pub fn emoji_bonus(&self, caption: &str) -> f64 {
        let count = caption
            .chars()
            .filter(|c| ('\u{1F300}'..='\u{1FAFF}').contains(c))
            .count();
        if count == 0 {
            return 0.0;
        }
        let count = count.min(5) as f64;
        (self.emoji_acceptance - 0.5) * 0.15 * (count / 3.0)
    }
}
