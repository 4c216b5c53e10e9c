//! Static option lists offered to participants when building a [`Profile`].
//!
//! The backend accepts free-form strings, so these are suggestions only.
//!
//! [`Profile`]: crate::models::Profile

/// Events the backend pools participants by
pub const HACKATHONS: &[&str] = &["SCE 2025"];

/// Team roles; the backend compares them case-insensitively
pub const ROLES: &[&str] = &["FE", "BE", "ML/AI"];

pub const SKILLS: &[&str] = &["React", "Tailwind", "FastAPI", "Postgres", "Python", "PyTorch"];

pub const INTERESTS: &[&str] = &["AI", "Health", "Social Good"];

pub const AVAILABILITY: &[&str] = &["Full weekend", "Evenings only", "Flexible"];
