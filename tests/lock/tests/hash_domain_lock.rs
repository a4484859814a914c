//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. Canonical domain set has the expected count
//! 2. All domain byte strings are unique and null-terminated
//! 3. All domains follow the `ADVENT::*::V1\0` naming convention
//! 4. `canonical_hash` is SHA-256 over `prefix || data`, recomputed here
//!    independently with `sha2` + `hex`

use std::collections::BTreeSet;

use advent_kernel::hash::{canonical_hash, ContentHash, HashDomain};
use sha2::{Digest, Sha256};

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        3,
        "expected 3 domain variants; if you added a new domain, update this count"
    );
}

#[test]
fn hash_domain_bytes_unique_and_null_terminated() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(
            seen.insert(domain.as_bytes()),
            "duplicate domain bytes: {domain}"
        );
        assert!(
            domain.as_bytes().ends_with(&[0]),
            "{domain} is not null-terminated"
        );
    }
}

#[test]
fn hash_domain_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(
            bytes.starts_with(b"ADVENT::"),
            "{domain} does not start with ADVENT::"
        );
        assert!(
            bytes.ends_with(b"::V1\0"),
            "{domain} does not end with ::V1\\0"
        );
    }
}

#[test]
fn canonical_hash_matches_independent_sha256() {
    let data = b"abcdef609043";
    for &domain in HashDomain::ALL {
        let mut hasher = Sha256::new();
        hasher.update(domain.as_bytes());
        hasher.update(data);
        let expected = format!("sha256:{}", hex::encode(hasher.finalize()));

        let actual = canonical_hash(domain, data);
        assert_eq!(actual.to_string(), expected, "{domain}");
        assert_eq!(ContentHash::parse(&expected), Some(actual));
    }
}

#[test]
fn same_data_differs_across_domains() {
    let digests: BTreeSet<String> = HashDomain::ALL
        .iter()
        .map(|&d| canonical_hash(d, b"same").to_string())
        .collect();
    assert_eq!(digests.len(), HashDomain::ALL.len());
}
