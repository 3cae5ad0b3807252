// Copyright (c) 2025 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.
#![deny(unused_crate_dependencies)]

//! Password hashing filters for templating pipelines.
//!
//! - `ssha_password_hash`: `{SSHA}` salted SHA1.
//! - `sha512_password_hash`: `$6$` SHA512 crypt.
//!
//! The salt is always supplied by the caller.

mod errors;
mod filters;
#[cfg(feature = "sha512")]
mod sha512crypt;
#[cfg(feature = "ssha")]
mod ssha;

pub use errors::{FilterError, InvalidArgumentError, InvalidSaltError};
#[cfg(feature = "sha512")]
pub use errors::Sha512CryptError;
#[cfg(feature = "ssha")]
pub use errors::SshaError;
pub use filters::{FILTER_ARITY, Filter};
#[cfg(feature = "sha512")]
pub use sha512crypt::{SALT_MAX_LEN, SHA512_PREFIX, sha512_crypt_hash, sha512_crypt_verify};
#[cfg(feature = "ssha")]
pub use ssha::{SHA1_DIGEST_LEN, SSHA_PREFIX, ssha_extract_salt, ssha_hash, ssha_verify};
