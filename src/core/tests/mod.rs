//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Secure input classification tests
//! - Shortcut notation parser tests
//! - Type tests (Key, ModifierSet, Shortcut)

#[cfg(test)]
mod types_tests;
