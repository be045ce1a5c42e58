use crate::shared::error::SbomError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use super::bom::HashAlgorithm;

/// Content digest in `<algorithm>:<hex>` form, e.g. `sha256:9f86d0...`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Digest {
    algorithm: HashAlgorithm,
    hex: String,
}

impl Digest {
    /// Lowercase hex part of the digest, without the algorithm prefix
    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }
}

impl FromStr for Digest {
    type Err = SbomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| SbomError::InvalidDigest {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let (algorithm, hex) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| invalid("expected <algorithm>:<hex>"))?;

        let algorithm = match algorithm {
            "sha256" => HashAlgorithm::Sha256,
            "sha384" => HashAlgorithm::Sha384,
            "sha512" => HashAlgorithm::Sha512,
            _ => return Err(invalid("unsupported digest algorithm")),
        };

        if hex.len() != algorithm.hex_len() {
            return Err(invalid(&format!(
                "expected {} hex characters, found {}",
                algorithm.hex_len(),
                hex.len()
            )));
        }

        if !hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)) {
            return Err(invalid("digest must be lowercase hex"));
        }

        Ok(Self {
            algorithm,
            hex: hex.to_string(),
        })
    }
}

impl TryFrom<String> for Digest {
    type Error = SbomError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm.oci_prefix(), self.hex)
    }
}
