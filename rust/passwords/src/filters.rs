// Copyright (c) 2025 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Name to function table consumed by the templating engine.

use log::debug;

use crate::{FilterError, InvalidArgumentError};

/// Number of positional arguments every filter takes: password and salt.
pub const FILTER_ARITY: usize = 2;

/// Password hashing filters, each registered under a fixed name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// `{SSHA}` salted SHA1.
    #[cfg(feature = "ssha")]
    SshaPasswordHash,
    /// `$6$` SHA512 crypt.
    #[cfg(feature = "sha512")]
    Sha512PasswordHash,
}

impl Filter {
    /// Every filter compiled into this build.
    pub const ALL: &[Filter] = &[
        #[cfg(feature = "ssha")]
        Filter::SshaPasswordHash,
        #[cfg(feature = "sha512")]
        Filter::Sha512PasswordHash,
    ];

    /// Name the filter is registered under.
    pub fn name(&self) -> &'static str {
        match self {
            #[cfg(feature = "ssha")]
            Self::SshaPasswordHash => "ssha_password_hash",
            #[cfg(feature = "sha512")]
            Self::Sha512PasswordHash => "sha512_password_hash",
        }
    }

    /// Run the filter on positional arguments `(password, salt)`.
    pub fn apply(&self, args: &[&[u8]]) -> Result<String, FilterError> {
        let [password, salt] = args else {
            return Err(InvalidArgumentError::WrongArity {
                expected: FILTER_ARITY,
                got: args.len(),
            }
            .into());
        };
        debug!("Applying password filter '{}'", self.name());
        match self {
            #[cfg(feature = "ssha")]
            Self::SshaPasswordHash => Ok(crate::ssha_hash(password, salt)),
            #[cfg(feature = "sha512")]
            Self::Sha512PasswordHash => Ok(crate::sha512_crypt_hash(password, salt)?),
        }
    }
}

impl TryFrom<&str> for Filter {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .find(|filter| filter.name() == value)
            .copied()
            .ok_or_else(|| format!("Unknown password filter: {value}"))
    }
}
