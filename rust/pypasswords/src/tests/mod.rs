// Copyright (c) 2025 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

use super::passwords;

use pyo3::types::PyAnyMethods as _;

// Initializing python only once. Otherwise things may crash when running in multiple threads.
static INIT_PY: std::sync::Once = std::sync::Once::new();

fn setup() {
    INIT_PY.call_once(|| {
        pyo3::append_to_inittab!(passwords);
        pyo3::Python::initialize();
    })
}

fn with_passwords_module<F: FnOnce(pyo3::Python<'_>, pyo3::Bound<'_, pyo3::types::PyModule>)>(
    test_logic: F,
) {
    setup();

    pyo3::Python::attach(|py| {
        let module = py
            .import("passwords")
            .expect("Failed to import embedded passwords module");

        test_logic(py, module);
    });
}

/// Calls one of the hashing functions with text arguments and returns the hash.
fn hash_text(
    module: &pyo3::Bound<'_, pyo3::types::PyModule>,
    function: &str,
    password: &str,
    salt: &str,
) -> String {
    module
        .call_method1(function, (password, salt))
        .and_then(|hash| hash.extract())
        .unwrap_or_else(|err| panic!("{function}({password:?}, {salt:?}) failed: {err}"))
}

/// Calls one of the module functions with two text arguments and returns the raised error.
fn hash_text_err(
    module: &pyo3::Bound<'_, pyo3::types::PyModule>,
    function: &str,
    password: &str,
    salt: &str,
) -> pyo3::PyErr {
    match module.call_method1(function, (password, salt)) {
        Ok(hash) => panic!("{function}({password:?}, {salt:?}) unexpectedly returned {hash}"),
        Err(err) => err,
    }
}
