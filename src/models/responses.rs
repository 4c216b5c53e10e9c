use serde::{Deserialize, Serialize};
use crate::models::domain::Match;

/// Response envelope of `POST /match_all`
///
/// Only `matches` is read; other top-level fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchAllResponse {
    #[serde(default)]
    pub matches: Option<Vec<Match>>,
}

impl MatchAllResponse {
    /// Matches in backend order, empty when the field was missing or null
    pub fn into_matches(self) -> Vec<Match> {
        self.matches.unwrap_or_default()
    }
}

/// Response of the backend root route `GET /`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendStatus {
    pub message: String,
}
