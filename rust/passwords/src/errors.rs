// Copyright (c) 2025 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

#[cfg(feature = "sha512")]
#[derive(Debug, derive_more::Display)]
pub enum Sha512CryptError {
    // The errors from sha_crypt library should never happen with the default rounds.
    #[display("SHA crypt library error: {_0:?}")]
    ShaCrypt(sha_crypt::CryptError),
    #[display("Invalid Salt: {_0}")]
    InvalidSalt(InvalidSaltError),
    #[display("Malformed SHA512 crypt hash, expected '$6$<salt>$<hash>'")]
    MalformedHash,
}
#[cfg(feature = "sha512")]
impl std::error::Error for Sha512CryptError {}

#[cfg(feature = "sha512")]
impl From<sha_crypt::CryptError> for Sha512CryptError {
    fn from(value: sha_crypt::CryptError) -> Self {
        Self::ShaCrypt(value)
    }
}

#[cfg(feature = "sha512")]
impl From<InvalidSaltError> for Sha512CryptError {
    fn from(value: InvalidSaltError) -> Self {
        Self::InvalidSalt(value)
    }
}

#[derive(Debug, PartialEq, derive_more::Display)]
pub enum InvalidSaltError {
    #[display("Salt contains an invalid character: '{_0}'")]
    InvalidCharacter(char),
    #[display("Salt cannot start with '{_0}'.")]
    ReservedPrefix(&'static str),
    #[display("Salt is not valid UTF-8.")]
    NotUtf8,
}
impl std::error::Error for InvalidSaltError {}

#[cfg(feature = "ssha")]
#[derive(Debug, derive_more::Display)]
pub enum SshaError {
    #[display("SSHA hash must start with '{{SSHA}}'")]
    MissingPrefix,
    #[display("Invalid Base64 encoding in SSHA hash: {_0}")]
    InvalidBase64(base64::DecodeError),
    #[display("SSHA payload too short: expected at least 20 bytes, got {_0}")]
    DigestTooShort(usize),
}
#[cfg(feature = "ssha")]
impl std::error::Error for SshaError {}

#[cfg(feature = "ssha")]
impl From<base64::DecodeError> for SshaError {
    fn from(value: base64::DecodeError) -> Self {
        Self::InvalidBase64(value)
    }
}

#[derive(Debug, PartialEq, derive_more::Display)]
pub enum InvalidArgumentError {
    #[display("Expected {expected} positional arguments (password, salt), got {got}")]
    WrongArity { expected: usize, got: usize },
}
impl std::error::Error for InvalidArgumentError {}

/// Errors raised when a filter is applied through the [`crate::Filter`] table.
#[derive(Debug, derive_more::Display)]
pub enum FilterError {
    #[display("Invalid argument: {_0}")]
    InvalidArgument(InvalidArgumentError),
    #[cfg(feature = "sha512")]
    #[display("{_0}")]
    Sha512Crypt(Sha512CryptError),
}
impl std::error::Error for FilterError {}

impl From<InvalidArgumentError> for FilterError {
    fn from(value: InvalidArgumentError) -> Self {
        Self::InvalidArgument(value)
    }
}

#[cfg(feature = "sha512")]
impl From<Sha512CryptError> for FilterError {
    fn from(value: Sha512CryptError) -> Self {
        Self::Sha512Crypt(value)
    }
}
