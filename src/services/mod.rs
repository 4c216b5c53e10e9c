// Service exports
pub mod match_client;

pub use match_client::{fetch_matches, get_matches, ClientConfig, MatchClient, MatchClientError, Result};
