//! Aggregation statistics: Wilson score interval and cue ranking.

/// Wilson score confidence interval for a binomial proportion.
/// Robust to small samples; returns (0.0, 1.0) when n == 0.
pub fn wilson_interval(phat: f64, n: u64, z: f64) -> (f64, f64) {
    if n == 0 {
        return (0.0, 1.0);
    }
    let n = n as f64;
    let z2 = z * z;
    let centre = phat + z2 / (2.0 * n);
    let spread = z * ((phat * (1.0 - phat) + z2 / (4.0 * n)) / n).sqrt();
    let denom = 1.0 + z2 / n;
    ((centre - spread) / denom, (centre + spread) / denom)
}

/// The `limit` most frequent cues, by descending count. Ties keep
/// first-encountered order (stable sort over first-seen insertion).
pub fn top_cues(cues: &[String], limit: usize) -> Vec<(String, u64)> {
    let mut counts: Vec<(String, u64)> = Vec::new();
    for cue in cues {
        match counts.iter().position(|(c, _)| c == cue) {
            Some(i) => counts[i].1 += 1,
            None => counts.push((cue.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}
