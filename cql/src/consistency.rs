//! CQL consistency tiers.

use std::fmt;
use std::str::FromStr;

use crate::error::{CqlError, CqlResult};

/// How many replicas must acknowledge a CQL operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsistencyLevel {
    /// One replica.
    One,
    /// Two replicas.
    Two,
    /// Three replicas.
    Three,
    /// Any replica, including hinted handoff.
    Any,
    /// Every replica.
    All,
    /// A majority of replicas.
    Quorum,
    /// A majority of replicas in the local datacenter.
    LocalQuorum,
    /// A majority of replicas in each datacenter.
    EachQuorum,
}

impl ConsistencyLevel {
    /// Parse a level from its canonical identifier, case-insensitively.
    pub fn parse(value: &str) -> CqlResult<Self> {
        match value.to_ascii_uppercase().as_str() {
            "ONE" => Ok(Self::One),
            "TWO" => Ok(Self::Two),
            "THREE" => Ok(Self::Three),
            "ANY" => Ok(Self::Any),
            "ALL" => Ok(Self::All),
            "QUORUM" => Ok(Self::Quorum),
            "LOCAL_QUORUM" => Ok(Self::LocalQuorum),
            "EACH_QUORUM" => Ok(Self::EachQuorum),
            _ => Err(CqlError::UnknownConsistencyLevel(value.to_string())),
        }
    }

    /// The canonical identifier for this level.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::One => "ONE",
            Self::Two => "TWO",
            Self::Three => "THREE",
            Self::Any => "ANY",
            Self::All => "ALL",
            Self::Quorum => "QUORUM",
            Self::LocalQuorum => "LOCAL_QUORUM",
            Self::EachQuorum => "EACH_QUORUM",
        }
    }
}

impl fmt::Display for ConsistencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsistencyLevel {
    type Err = CqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
