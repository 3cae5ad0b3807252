// Copyright (c) 2025 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Salted SHA1 ("SSHA") as understood by LDAP directory servers.
//!
//! ```text
//! {SSHA}base64( sha1(password || salt) || salt )
//! ```

use base64::{Engine as _, engine::general_purpose::STANDARD as B64};
use sha1::{Digest as _, Sha1};
use subtle::ConstantTimeEq as _;

use crate::SshaError;

/// Tag prepended to every SSHA hash.
pub const SSHA_PREFIX: &str = "{SSHA}";

/// Length in bytes of a SHA1 digest.
pub const SHA1_DIGEST_LEN: usize = 20;

fn salted_digest(password: &[u8], salt: &[u8]) -> [u8; SHA1_DIGEST_LEN] {
    let mut hasher = Sha1::new();
    hasher.update(password);
    hasher.update(salt);
    hasher.finalize().into()
}

/// Computes the SSHA hash of the password given the salt.
///
/// Both the password and the salt are treated as opaque bytes and may be empty.
pub fn ssha_hash(password: &[u8], salt: &[u8]) -> String {
    let digest = salted_digest(password, salt);

    let mut payload = Vec::with_capacity(SHA1_DIGEST_LEN + salt.len());
    payload.extend_from_slice(&digest);
    payload.extend_from_slice(salt);

    format!("{SSHA_PREFIX}{}", B64.encode(payload))
}

/// Splits a decoded SSHA hash into its digest and salt.
fn decode(hash: &str) -> Result<(Vec<u8>, Vec<u8>), SshaError> {
    let encoded = hash
        .strip_prefix(SSHA_PREFIX)
        .ok_or(SshaError::MissingPrefix)?;
    let mut digest = B64.decode(encoded)?;
    if digest.len() < SHA1_DIGEST_LEN {
        return Err(SshaError::DigestTooShort(digest.len()));
    }
    let salt = digest.split_off(SHA1_DIGEST_LEN);
    Ok((digest, salt))
}

/// Returns the salt embedded in an SSHA hash.
pub fn ssha_extract_salt(hash: &str) -> Result<Vec<u8>, SshaError> {
    decode(hash).map(|(_, salt)| salt)
}

/// Checks the password against an SSHA hash. The digests are compared in constant time.
pub fn ssha_verify(password: &[u8], hash: &str) -> Result<bool, SshaError> {
    let (expected, salt) = decode(hash)?;
    let actual = salted_digest(password, &salt);
    Ok(actual.as_slice().ct_eq(expected.as_slice()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    // (password, salt, hash)
    const GOLDEN: [(&[u8], &[u8], &str); 5] = [
        (b"secret", b"NaCl", "{SSHA}dj2lH1ocucmj5OQsjP6mQrVx6FhOYUNs"),
        (b"", b"", "{SSHA}2jmj7l5rSw0yVb/vlWAYkK/YBwk="),
        (b"arista", b"", "{SSHA}PKa7lH/tDh+5rSOJUNnLk2mzLbg="),
        (b"", b"NaCl", "{SSHA}k7pKvBZjf6d/4qynJdkfKIuQz7tOYUNs"),
        (
            "päss".as_bytes(),
            b"\x00\xff\x10",
            "{SSHA}8QJIoITNItiGZoO1YeDSMJTX7AAA/xA=",
        ),
    ];

    #[test]
    fn ssha_hash_golden_ok() {
        for (password, salt, expected) in GOLDEN {
            assert_eq!(ssha_hash(password, salt), expected);
        }
    }

    #[test]
    fn ssha_hash_layout() {
        let password = b"arista";
        let salt = b"some salt bytes";
        let hash = ssha_hash(password, salt);

        let encoded = hash.strip_prefix(SSHA_PREFIX).expect("missing prefix");
        let decoded = B64.decode(encoded).unwrap();
        assert_eq!(decoded.len(), SHA1_DIGEST_LEN + salt.len());

        let digest: [u8; SHA1_DIGEST_LEN] = Sha1::digest(b"aristasome salt bytes").into();
        assert_eq!(&decoded[..SHA1_DIGEST_LEN], digest.as_slice());
        assert_eq!(&decoded[SHA1_DIGEST_LEN..], salt);
    }

    #[test]
    fn ssha_hash_is_deterministic() {
        assert_eq!(ssha_hash(b"arista", b"salt"), ssha_hash(b"arista", b"salt"));
        assert_ne!(ssha_hash(b"arista", b"salt"), ssha_hash(b"arista", b"pepper"));
    }

    #[test]
    fn ssha_extract_salt_roundtrip() {
        for (password, salt, hash) in GOLDEN {
            let extracted = ssha_extract_salt(hash).expect("Extraction failed");
            assert_eq!(extracted, salt);
            assert_eq!(ssha_hash(password, &extracted), hash);
        }
    }

    #[test]
    fn ssha_verify_ok() {
        for (password, _, hash) in GOLDEN {
            assert!(ssha_verify(password, hash).unwrap());
        }
    }

    #[test]
    fn ssha_verify_wrong_password() {
        assert!(!ssha_verify(b"public", "{SSHA}dj2lH1ocucmj5OQsjP6mQrVx6FhOYUNs").unwrap());
    }

    #[test]
    fn ssha_verify_malformed_err() {
        assert!(matches!(
            ssha_verify(b"secret", "dj2lH1ocucmj5OQsjP6mQrVx6FhOYUNs"),
            Err(SshaError::MissingPrefix)
        ));
        assert!(matches!(
            ssha_verify(b"secret", "{SSHA}not base64!"),
            Err(SshaError::InvalidBase64(_))
        ));
        // "YWJjZA==" is "abcd", far shorter than a SHA1 digest.
        assert!(matches!(
            ssha_verify(b"secret", "{SSHA}YWJjZA=="),
            Err(SshaError::DigestTooShort(4))
        ));
    }
}
