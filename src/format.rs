//! The modular crypt string: `$<version>$<cost>$<salt><digest>`.

use std::fmt;
use std::str::FromStr;

use crate::error::{BCryptError, Result};
use crate::radix64;

pub const SALT_LEN: usize = 16;
pub const DIGEST_LEN: usize = 23;

pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;
pub const DEFAULT_COST: u32 = 10;

const SALT_CHARS: usize = radix64::encoded_len(SALT_LEN);
const DIGEST_CHARS: usize = radix64::encoded_len(DIGEST_LEN);

/// bcrypt version tag.
///
/// Only `$2x$` changes the computation; see [`Version::sign_extends_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Version {
    Two,
    TwoA,
    #[default]
    TwoB,
    TwoX,
    TwoY,
}

impl Version {
    pub fn as_str(self) -> &'static str {
        match self {
            Version::Two => "2",
            Version::TwoA => "2a",
            Version::TwoB => "2b",
            Version::TwoX => "2x",
            Version::TwoY => "2y",
        }
    }

    /// True for `$2x$`, which reproduces the sign-extension bug of the
    /// implementation that produced those hashes.
    pub fn sign_extends_key(self) -> bool {
        matches!(self, Version::TwoX)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Version {
    type Err = BCryptError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "2" => Ok(Version::Two),
            "2a" => Ok(Version::TwoA),
            "2b" => Ok(Version::TwoB),
            "2x" => Ok(Version::TwoX),
            "2y" => Ok(Version::TwoY),
            other => Err(BCryptError::UnsupportedVersion(other.to_string())),
        }
    }
}

/// A validated cost factor: log2 of the key-schedule repetitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cost(u32);

impl Cost {
    pub fn new(cost: u32) -> Result<Self> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(BCryptError::InvalidCost(cost));
        }
        Ok(Cost(cost))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Number of key-schedule repetitions, `2^cost`.
    pub fn rounds(self) -> u64 {
        1u64 << self.0
    }
}

impl Default for Cost {
    fn default() -> Self {
        Cost(DEFAULT_COST)
    }
}

impl TryFrom<u32> for Cost {
    type Error = BCryptError;

    fn try_from(cost: u32) -> Result<Self> {
        Cost::new(cost)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// A parsed bcrypt string.
///
/// The digest is absent for a bare settings string such as
/// `$2b$12$R9h/cIPz0gi.URNNX3kh2O`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashParts {
    version: Version,
    cost: Cost,
    salt: [u8; SALT_LEN],
    digest: Option<[u8; DIGEST_LEN]>,
}

impl HashParts {
    pub(crate) fn new(
        version: Version,
        cost: Cost,
        salt: [u8; SALT_LEN],
        digest: Option<[u8; DIGEST_LEN]>,
    ) -> Self {
        HashParts {
            version,
            cost,
            salt,
            digest,
        }
    }

    /// Parses a full hash or a settings string.
    ///
    /// Everything is validated here, before any key-schedule work happens.
    pub fn parse(s: &str) -> Result<Self> {
        let rest = s
            .strip_prefix('$')
            .ok_or_else(|| malformed("missing leading '$'"))?;

        let (version, rest) = rest
            .split_once('$')
            .ok_or_else(|| malformed("missing '$' after version"))?;
        let version: Version = version.parse()?;

        let (cost, encoded) = rest
            .split_once('$')
            .ok_or_else(|| malformed("missing '$' after cost"))?;
        if cost.len() != 2 || !cost.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed("cost must be two decimal digits"));
        }
        let cost = cost
            .parse::<u32>()
            .map_err(|_| malformed("cost must be two decimal digits"))
            .and_then(Cost::new)?;

        if !encoded.is_ascii() {
            return Err(malformed("salt and digest must be radix-64"));
        }
        let (salt, digest) = match encoded.len() {
            SALT_CHARS => (encoded, None),
            n if n == SALT_CHARS + DIGEST_CHARS => {
                let (salt, digest) = encoded.split_at(SALT_CHARS);
                (salt, Some(digest))
            }
            n => {
                return Err(BCryptError::MalformedHash(format!(
                    "expected {} or {} characters of salt and digest, found {}",
                    SALT_CHARS,
                    SALT_CHARS + DIGEST_CHARS,
                    n
                )))
            }
        };

        let salt = decode_exact::<SALT_LEN>(salt)?;
        let digest = digest.map(decode_exact::<DIGEST_LEN>).transpose()?;

        Ok(HashParts::new(version, cost, salt, digest))
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    pub fn digest(&self) -> Option<&[u8; DIGEST_LEN]> {
        self.digest.as_ref()
    }

    /// The `$<version>$<cost>$<salt>` prefix, without the digest.
    pub fn settings(&self) -> String {
        format!(
            "${}${}${}",
            self.version,
            self.cost,
            radix64::encode(&self.salt)
        )
    }
}

impl FromStr for HashParts {
    type Err = BCryptError;

    fn from_str(s: &str) -> Result<Self> {
        HashParts::parse(s)
    }
}

impl fmt::Display for HashParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.settings())?;
        if let Some(digest) = &self.digest {
            f.write_str(&radix64::encode(digest))?;
        }
        Ok(())
    }
}

fn decode_exact<const N: usize>(encoded: &str) -> Result<[u8; N]> {
    let bytes = radix64::decode(encoded, N)?;
    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| {
        BCryptError::MalformedHash(format!("expected {} decoded bytes, found {}", N, bytes.len()))
    })
}

fn malformed(msg: &str) -> BCryptError {
    BCryptError::MalformedHash(msg.to_string())
}
