//! Algorithm definitions

use super::transforms;

/// CPU-bound algorithms known to the load generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Repeated SHA-256 digests
    Sha256,
    /// Repeated MD5 digests
    Md5,
    /// Repeated gzip compression of the buffer
    Gzip,
    /// Fixed delay, reserved for self-tests; excluded from "all"
    Test,
}

impl Algorithm {
    /// Algorithms selected by the "all" literal, in display order
    pub const PRODUCTION: [Algorithm; 3] = [Self::Gzip, Self::Md5, Self::Sha256];

    /// Parse an algorithm from its exact name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "sha256" => Some(Self::Sha256),
            "md5" => Some(Self::Md5),
            "gzip" => Some(Self::Gzip),
            "test" => Some(Self::Test),
            _ => None,
        }
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Md5 => "md5",
            Self::Gzip => "gzip",
            Self::Test => "test",
        }
    }

    /// Apply one work unit's worth of load to the buffer in place
    pub fn apply(&self, data: &mut [u8]) {
        match self {
            Self::Sha256 => transforms::sha256_rounds(data),
            Self::Md5 => transforms::md5_rounds(data),
            Self::Gzip => transforms::gzip_rounds(data),
            Self::Test => transforms::delay(data),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
