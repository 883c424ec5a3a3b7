use std::fmt::Display;

use derive_more::{From, FromStr, Into};
use serde::{Deserialize, Serialize};

/// Numeric id of a recording on a live platform.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
    From,
    Into,
    FromStr,
    derive_more::Display,
    Serialize,
    Deserialize,
)]
pub struct VideoId(u64);
impl VideoId {
    pub fn get(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Sequential edition number of a stage.  Always displayed with two digits.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, From, Into, FromStr, Serialize, Deserialize,
)]
pub struct Perfnum(u32);
impl Perfnum {
    pub fn get(self) -> u32 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}
impl Display for Perfnum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}
