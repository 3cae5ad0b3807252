// Copyright (c) 2025 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

use pyo3::{FromPyObject, pymodule};

/// Password or salt as given by the templating engine.
/// `str` values are hashed as their UTF-8 encoding, `bytes` values as-is.
#[derive(FromPyObject)]
enum Secret {
    Text(String),
    Bytes(Vec<u8>),
}
impl Secret {
    fn as_bytes(&self) -> &[u8] {
        match self {
            Secret::Text(text) => text.as_bytes(),
            Secret::Bytes(bytes) => bytes,
        }
    }
}

#[pymodule]
#[pyo3(name = "passwords")]
mod passwords {
    use super::Secret;
    use log::debug;
    use ::passwords::{Filter, FilterError};
    use pyo3::{
        Bound, PyErr, PyResult, Python,
        exceptions::{PyRuntimeError, PyTypeError, PyValueError},
        pyfunction,
        types::{PyDict, PyDictMethods as _, PyModule},
        wrap_pyfunction,
    };

    #[pymodule_init]
    fn init(_m: &Bound<'_, PyModule>) -> PyResult<()> {
        pyo3_log::init();
        Ok(())
    }

    // Mapping our crates errors to Python errors.
    fn filter_err(err: FilterError) -> PyErr {
        match err {
            FilterError::InvalidArgument(_) => PyTypeError::new_err(format!("{err}")),
            #[cfg(feature = "sha512")]
            FilterError::Sha512Crypt(ref inner) => sha512_err(inner),
        }
    }

    #[cfg(feature = "sha512")]
    fn sha512_err(err: &passwords::Sha512CryptError) -> PyErr {
        match err {
            passwords::Sha512CryptError::InvalidSalt(_)
            | passwords::Sha512CryptError::MalformedHash => {
                PyValueError::new_err(format!("{err}"))
            }
            passwords::Sha512CryptError::ShaCrypt(_) => PyRuntimeError::new_err(format!("{err}")),
        }
    }

    fn apply(filter: Filter, password: Secret, salt: Secret) -> PyResult<String> {
        filter
            .apply(&[password.as_bytes(), salt.as_bytes()])
            .map_err(filter_err)
    }

    #[cfg(feature = "ssha")]
    #[pyfunction]
    /// Computes the `{SSHA}` salted SHA1 hash for the password given the salt
    pub fn ssha_password_hash(password: Secret, salt: Secret) -> PyResult<String> {
        apply(Filter::SshaPasswordHash, password, salt)
    }

    #[cfg(feature = "sha512")]
    #[pyfunction]
    /// Computes the SHA512 crypt value for the password given the salt
    pub fn sha512_password_hash(password: Secret, salt: Secret) -> PyResult<String> {
        apply(Filter::Sha512PasswordHash, password, salt)
    }

    #[cfg(feature = "ssha")]
    #[pyfunction]
    /// Returns True if the password matches the `{SSHA}` hash
    pub fn ssha_verify(password: Secret, hash: &str) -> PyResult<bool> {
        passwords::ssha_verify(password.as_bytes(), hash)
            .map_err(|err| PyValueError::new_err(format!("{err}")))
    }

    #[cfg(feature = "sha512")]
    #[pyfunction]
    /// Returns True if the password matches the SHA512 crypt value
    pub fn sha512_crypt_verify(password: Secret, hash: &str) -> PyResult<bool> {
        passwords::sha512_crypt_verify(password.as_bytes(), hash).map_err(|err| sha512_err(&err))
    }

    #[pyfunction]
    /// Returns the filters by their registered name, like an Ansible `FilterModule.filters()`
    pub fn filters(py: Python<'_>) -> PyResult<Bound<'_, PyDict>> {
        let filters = PyDict::new(py);
        for filter in Filter::ALL {
            let function = match filter {
                #[cfg(feature = "ssha")]
                Filter::SshaPasswordHash => wrap_pyfunction!(ssha_password_hash, py)?,
                #[cfg(feature = "sha512")]
                Filter::Sha512PasswordHash => wrap_pyfunction!(sha512_password_hash, py)?,
            };
            filters.set_item(filter.name(), function)?;
        }
        debug!("Registered {} password filters", filters.len());
        Ok(filters)
    }
}

// Implementation of the pytests but here using pyo3 wrappers in Rust, to ensure we get coverage data
// and that we can catch issues in Rust without building the Python first.
#[cfg(test)]
mod tests;
