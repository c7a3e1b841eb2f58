use serde::{Deserialize, Serialize};

use crate::domain::constants::{DEFAULT_BASE_CAP, DEFAULT_CITIZEN_CAP, DEFAULT_STANDARD_CAP};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// The three endorsement caps. Which one applies to a nation depends on
/// whether it endorses the delegate and whether it is a citizen.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct Caps {
    pub base: u32,
    pub standard: u32,
    pub citizen: u32,
}

impl Default for Caps {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_CAP,
            standard: DEFAULT_STANDARD_CAP,
            citizen: DEFAULT_CITIZEN_CAP,
        }
    }
}

/// One row of a census ranks page.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CensusEntry {
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "RANK")]
    pub rank: u32,
    #[serde(rename = "SCORE")]
    pub score: u32,
}

/// A nation over its applicable cap, and by how much.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Violator {
    pub name: String,
    pub over_by: u32,
}

/// A nation endorsing cap violators. `percentage` accumulates
/// `100 / violator_count` per endorsed violator and is truncated to an
/// integer only when written out.
#[derive(Debug, Clone, Serialize)]
pub struct Endorser {
    pub name: String,
    pub percentage: f64,
    pub endorsing: Vec<String>,
}
