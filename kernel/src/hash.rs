//! Content hashing with typed domain separation.
//!
//! Every hash computed in the workspace goes through [`canonical_hash`] with a
//! [`HashDomain`] prefix, so identical bytes hashed for different purposes
//! never collide.
//!
//! Algorithm: SHA-256. Display format: `"sha256:<hex_digest>"`.

use std::fmt;

use sha2::{Digest, Sha256};

/// Algorithm tag used in the display form of a [`ContentHash`].
pub const HASH_ALGORITHM: &str = "sha256";

/// Typed domain separator for [`canonical_hash`].
///
/// Each variant maps to a unique, null-terminated byte prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashDomain {
    /// Fingerprints of search states that have no cheaper natural key.
    StateFingerprint,
    /// Digest over a serialized search report.
    SearchReport,
    /// Free-form probing (brute-force hash searches, tests).
    Probe,
}

impl HashDomain {
    /// All domains in declaration order.
    pub const ALL: &'static [HashDomain] = &[
        HashDomain::StateFingerprint,
        HashDomain::SearchReport,
        HashDomain::Probe,
    ];

    /// The raw domain-separator bytes (null-terminated).
    #[must_use]
    pub const fn as_bytes(&self) -> &'static [u8] {
        match self {
            Self::StateFingerprint => b"ADVENT::STATE_FINGERPRINT::V1\0",
            Self::SearchReport => b"ADVENT::SEARCH_REPORT::V1\0",
            Self::Probe => b"ADVENT::PROBE::V1\0",
        }
    }
}

impl fmt::Display for HashDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::StateFingerprint => "StateFingerprint",
            Self::SearchReport => "SearchReport",
            Self::Probe => "Probe",
        };
        f.write_str(name)
    }
}

/// A SHA-256 content hash.
///
/// Cheap to clone, totally ordered and hashable, so it can be used directly as
/// a search-state fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    digest: [u8; 32],
}

impl ContentHash {
    /// Wrap a raw 32-byte digest.
    #[must_use]
    pub const fn from_digest(digest: [u8; 32]) -> Self {
        Self { digest }
    }

    /// Parse from `"sha256:<64 hex chars>"`.
    ///
    /// Returns `None` for any other algorithm tag, a missing separator, or a
    /// digest that is not exactly 32 bytes of hex.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (algorithm, hex_digest) = s.split_once(':')?;
        if algorithm != HASH_ALGORITHM {
            return None;
        }
        let bytes = hex::decode(hex_digest).ok()?;
        let digest: [u8; 32] = bytes.try_into().ok()?;
        Some(Self { digest })
    }

    /// The raw digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.digest
    }

    /// Lowercase hex digest without the algorithm tag.
    #[must_use]
    pub fn hex_digest(&self) -> String {
        hex::encode(self.digest)
    }

    /// Number of leading zero nibbles in the digest.
    #[must_use]
    pub fn leading_zero_nibbles(&self) -> u32 {
        let mut count = 0;
        for byte in self.digest {
            if byte == 0 {
                count += 2;
                continue;
            }
            if byte >> 4 == 0 {
                count += 1;
            }
            break;
        }
        count
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{HASH_ALGORITHM}:{}", self.hex_digest())
    }
}

/// Hash `data` under `domain`: `sha256(domain.as_bytes() || data)`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&hasher.finalize());
    ContentHash::from_digest(digest)
}
