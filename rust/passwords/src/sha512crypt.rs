// Copyright (c) 2025 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

use sha_crypt::{ROUNDS_DEFAULT, ROUNDS_MAX, ROUNDS_MIN, Sha512Params, sha512_crypt_b64};
use subtle::ConstantTimeEq as _;

use crate::{InvalidSaltError, Sha512CryptError};

/// Scheme identifier of SHA512 crypt.
pub const SHA512_PREFIX: &str = "$6$";

/// crypt(3) silently ignores salt bytes beyond this length.
pub const SALT_MAX_LEN: usize = 16;

const ROUNDS_PREFIX: &str = "rounds=";

/// Truncate the salt like crypt(3) and make sure it can be embedded between the `$` delimiters.
///
/// A multi-byte character straddling the 16 byte limit is dropped entirely.
fn validate_salt(salt: &[u8]) -> Result<&str, InvalidSaltError> {
    if salt.contains(&b'$') {
        return Err(InvalidSaltError::InvalidCharacter('$'));
    }
    if salt.starts_with(ROUNDS_PREFIX.as_bytes()) {
        return Err(InvalidSaltError::ReservedPrefix(ROUNDS_PREFIX));
    }
    let salt = &salt[..salt.len().min(SALT_MAX_LEN)];
    match std::str::from_utf8(salt) {
        Ok(salt) => Ok(salt),
        // Only the last character was cut by the truncation.
        Err(err) if err.error_len().is_none() => std::str::from_utf8(&salt[..err.valid_up_to()])
            .map_err(|_| InvalidSaltError::NotUtf8),
        Err(_) => Err(InvalidSaltError::NotUtf8),
    }
}

fn crypt_b64(password: &[u8], salt: &str, rounds: usize) -> Result<String, Sha512CryptError> {
    let params = Sha512Params::new(rounds)?;
    Ok(sha512_crypt_b64(password, salt.as_bytes(), &params)?)
}

/// Computes the SHA512 crypt value for the password given the salt.
///
/// The salt must not contain `$` nor start with `rounds=`. Only its first 16 bytes are used,
/// and those must be valid UTF-8.
/// Empty passwords and empty salts are accepted.
pub fn sha512_crypt_hash(password: &[u8], salt: &[u8]) -> Result<String, Sha512CryptError> {
    let salt = validate_salt(salt)?;
    let hash = crypt_b64(password, salt, ROUNDS_DEFAULT)?;
    Ok(format!("{SHA512_PREFIX}{salt}${hash}"))
}

/// Checks the password against a SHA512 crypt value, `$6$[rounds=<N>$]<salt>$<hash>`.
pub fn sha512_crypt_verify(password: &[u8], hash: &str) -> Result<bool, Sha512CryptError> {
    let rest = hash
        .strip_prefix(SHA512_PREFIX)
        .ok_or(Sha512CryptError::MalformedHash)?;

    let (rounds, rest) = match rest.strip_prefix(ROUNDS_PREFIX) {
        Some(rest) => {
            let (rounds, rest) = rest
                .split_once('$')
                .ok_or(Sha512CryptError::MalformedHash)?;
            let rounds = rounds
                .parse::<usize>()
                .map_err(|_| Sha512CryptError::MalformedHash)?;
            if !(ROUNDS_MIN..=ROUNDS_MAX).contains(&rounds) {
                return Err(Sha512CryptError::MalformedHash);
            }
            (rounds, rest)
        }
        None => (ROUNDS_DEFAULT, rest),
    };

    let (salt, expected) = rest
        .split_once('$')
        .ok_or(Sha512CryptError::MalformedHash)?;
    if expected.is_empty() || expected.contains('$') {
        return Err(Sha512CryptError::MalformedHash);
    }

    let actual = crypt_b64(password, validate_salt(salt.as_bytes())?, rounds)?;
    Ok(actual.as_bytes().ct_eq(expected.as_bytes()).into())
}
