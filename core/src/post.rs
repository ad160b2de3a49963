//! Candidate post records.

use serde::{Deserialize, Serialize};

/// One candidate post. Immutable simulation input; posts have no
/// identity beyond their "A" / "B" position in a comparison.
/// Missing fields default to empty strings rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Post {
    /// One-line description of the thumbnail image.
    #[serde(default)]
    pub thumb_desc: String,
    #[serde(default)]
    pub caption: String,
    /// Raw hashtag string, e.g. "#寶可夢 #PSA10 #tcghk".
    #[serde(default)]
    pub hashtags: String,
}
