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

//! Shortcut Guard
//!
//! Finds global shortcuts that macOS will swallow while a password field
//! has focus, and produces the warning the settings screen shows for them.
//!
//! # Features
//!
//! - **Secure Input Classification:** Pure, thread-safe check of a shortcut's modifiers
//! - **Localised Warnings:** Display text through an injected lookup function
//! - **Settings Controller:** Per-slot warnings and popup monitor control, toolkit-free
//! - **Shortcut Notation:** Parses `cmd+shift+c` and `⌥⇧C` style text
//! - **Slot Files:** Audits a list of slot assignments from disk
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, classifier, notation parser)
//! - **`i18n`:** Message keys and the `Localizer` seam
//! - **`settings`:** Settings-screen controller and its collaborator traits
//! - **`config`:** Slot file reading
//! - **`report`:** CLI findings
//!
//! # Examples
//!
//! ## Classifying a shortcut
//!
//! ```
//! use shortcut_guard::core::{classify, parse_shortcut, Classification};
//!
//! let shortcut = parse_shortcut("opt+c")?;
//! assert_eq!(classify(Some(&shortcut)), Classification::Blocked);
//! # Ok::<(), shortcut_guard::core::ParseError>(())
//! ```
//!
//! ## Getting the warning text
//!
//! ```
//! use shortcut_guard::core::{parse_shortcut, warning_message};
//!
//! let lookup = |key: &str| format!("translated: {}", key);
//! let shortcut = parse_shortcut("⌥⇧V")?;
//!
//! let warning = warning_message(Some(&shortcut), &lookup);
//! assert_eq!(warning.as_deref(), Some("translated: ShortcutBlockedInPasswordFields"));
//! # Ok::<(), shortcut_guard::core::ParseError>(())
//! ```

pub mod config;
pub mod core;
pub mod i18n;
pub mod report;
pub mod settings;

// Re-export commonly used types for convenience
pub use crate::core::{Classification, Key, Modifier, ModifierSet, Shortcut};
