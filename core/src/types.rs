//! Shared simulation types: platforms, votes, action weights.

use crate::error::SimError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Per-channel vote weights for one platform.
#[derive(Debug, Clone, Copy)]
pub struct ActionWeights {
    pub like:    f64,
    pub comment: f64,
    pub save:    f64,
    pub share:   f64,
}

/// Target platform. Weighting and the first-impression blend differ:
/// IG is thumbnail-led, Threads is text-led and has no save feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "IG")]
    Ig,
    Threads,
}

impl Platform {
    /// Vote-score weights per interaction channel.
    pub fn action_weights(self) -> ActionWeights {
        match self {
            Platform::Ig => ActionWeights {
                like:    0.45,
                comment: 0.20,
                save:    0.25,
                share:   0.10,
            },
            Platform::Threads => ActionWeights {
                like:    0.50,
                comment: 0.30,
                save:    0.0,
                share:   0.20,
            },
        }
    }

    /// Blend thumbnail quality and first-line strength into one
    /// first-impression score.
    pub fn first_impression(self, q_thumb: f64, q_first: f64) -> f64 {
        match self {
            Platform::Ig => 0.60 * q_thumb + 0.40 * q_first,
            Platform::Threads => 0.30 * q_thumb + 0.70 * q_first,
        }
    }

    /// Threads has no save feature; save probability is forced to 0.
    pub fn supports_save(self) -> bool {
        matches!(self, Platform::Ig)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Ig => "IG",
            Platform::Threads => "Threads",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "IG" => Ok(Platform::Ig),
            "THREADS" => Ok(Platform::Threads),
            _ => Err(SimError::UnknownPlatform(s.to_string())),
        }
    }
}

/// Which post won one persona-round comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vote {
    A,
    B,
}

impl Vote {
    pub fn as_str(self) -> &'static str {
        match self {
            Vote::A => "A",
            Vote::B => "B",
        }
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
