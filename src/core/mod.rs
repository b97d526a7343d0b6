// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the value types and the decision logic for
//! secure input shortcut checks:
//! - Type definitions for modifiers, keys and shortcuts
//! - Secure input classification and warning derivation
//! - Shortcut notation parsing
//!
//! Everything here is pure and free of UI or I/O concerns, so it can be
//! called from any thread and tested without a display server.

pub mod classifier;
pub mod parser;
pub mod types;

pub use classifier::{classify, classify_modifiers, is_valid_in_password_fields, warning_message};
pub use parser::{parse_optional_shortcut, parse_shortcut, ParseError};
pub use types::*;

#[cfg(test)]
mod tests;
