//! hackmatch - client for the hackathon teammate matchmaking backend
//!
//! Sends a participant [`Profile`] to the backend's `/match_all` route and
//! returns the ranked [`Match`] list it computes. Matching and scoring happen
//! entirely on the backend.

pub mod catalog;
pub mod config;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use catalog::{AVAILABILITY, HACKATHONS, INTERESTS, ROLES, SKILLS};
pub use models::{BackendStatus, Candidate, Match, MatchAllResponse, Profile};
pub use services::{fetch_matches, get_matches, ClientConfig, MatchClient, MatchClientError};
