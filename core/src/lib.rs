//! crowdtest-core — persona-driven A/B content-performance simulation.
//!
//! Given two candidate posts (thumbnail description, caption, hashtags)
//! and a target platform, the core estimates per-persona interaction
//! probabilities and aggregates them into a win-probability comparison.
//!
//! RULES:
//!   - The core is pure computation: no network, no files, no clocks.
//!   - All randomness flows through one `RunRng` per run, seeded once.
//!   - Identical inputs + seed always reproduce identical output.
//!   - Malformed-but-well-typed input never fails; missing fields fall
//!     back to documented defaults. Only structural problems (round
//!     count out of range, non-finite persona floats, unparseable
//!     persona JSON) surface as errors.

pub mod engine;
pub mod error;
pub mod lexicon;
pub mod persona;
pub mod post;
pub mod rng;
pub mod simulate;
pub mod stats;
pub mod text_features;
pub mod types;

pub use engine::{run_simulation, AggregateSummary, SimulationOutput, SimulationRow};
pub use error::{SimError, SimResult};
pub use persona::{personas_from_json, Persona};
pub use post::Post;
pub use types::{Platform, Vote};
