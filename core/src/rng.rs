//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! Each run owns exactly one RunRng, seeded once by the orchestrator,
//! and every simulate call draws from that single stream. Two runs
//! with the same seed therefore replay the exact same draw sequence.
//!
//! The draw ORDER inside a trial is part of the reproducibility
//! contract — see simulate.rs for the documented ordering.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// The single deterministic RNG stream for one simulation run.
pub struct RunRng {
    inner: Pcg64Mcg,
}

impl RunRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Sample N(mean, std) via Box-Muller. Consumes exactly two uniforms.
    pub fn gauss(&mut self, mean: f64, std: f64) -> f64 {
        let u1 = self.next_f64().max(1e-10);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        mean + std * z
    }
}
