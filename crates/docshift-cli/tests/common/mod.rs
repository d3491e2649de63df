//! Shared fixtures for the docshift CLI tests
//!
//! The package builders live next to the crates that read them and are
//! pulled in by path so there is a single copy of each.

#![allow(dead_code)]

#[path = "../../../docshift-ooxml/src/test_utils.rs"]
mod docx;

#[path = "../../../docshift-data/tests/common/mod.rs"]
pub mod xlsx;

use std::path::Path;

/// Write a minimal DOCX whose body holds `body_xml`
pub fn write_docx(path: &Path, body_xml: &str) {
    std::fs::write(path, docx::docx_with_body(body_xml)).unwrap();
}

/// Progress values that never decrease
pub fn is_non_decreasing(values: &[u8]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}
