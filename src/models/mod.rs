// Model exports
pub mod domain;
pub mod responses;

pub use domain::{Profile, Candidate, Match};
pub use responses::{MatchAllResponse, BackendStatus};
