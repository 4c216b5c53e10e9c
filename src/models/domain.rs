use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Participant profile submitted as the matching query
///
/// Serialized verbatim as the `/match_all` request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Profile {
    pub hackathon: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub contact: String,
    pub roles: Vec<String>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub availability: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blurb: Option<String>,
}

impl Profile {
    /// Project this profile onto the candidate shape (drops `hackathon`)
    pub fn as_candidate(&self) -> Candidate {
        Candidate {
            name: self.name.clone(),
            contact: self.contact.clone(),
            roles: self.roles.clone(),
            skills: self.skills.clone(),
            interests: self.interests.clone(),
            availability: self.availability.clone(),
            blurb: self.blurb.clone(),
        }
    }
}

/// Another participant as returned by the backend
///
/// Pool records can be sparse, so missing or `null` fields decode as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub roles: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub availability: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blurb: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One ranked suggestion from the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub candidate: Candidate,
    /// Compatibility score as reported by the backend.
    ///
    /// Depending on the backend version this is on a 0–95 or a 0–100 scale.
    /// It is passed through unchanged; consumers comparing scores across
    /// backends must not assume either maximum.
    pub score: f64,
    pub explanation: String,
    /// Raw model output, kept for diagnostics
    #[serde(default)]
    pub ai_raw_response: Option<String>,
}
