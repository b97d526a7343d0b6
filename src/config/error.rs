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

use std::path::PathBuf;
use thiserror::Error;

use crate::core::ParseError;
use crate::settings::ShortcutSlot;

/// Errors that can occur while reading a slot file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Slot file does not exist.
    #[error("Slot file not found: {0}")]
    NotFound(PathBuf),
    /// Path is not valid UTF-8 and cannot be tilde-expanded.
    #[error("Invalid path encoding: {0}")]
    InvalidPath(PathBuf),
    /// Line is not of the form `slot = shortcut`.
    #[error("Parse error on line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },
    /// Slot name is not one of the recordable slots.
    #[error("Unknown slot '{name}' on line {line}")]
    UnknownSlot { line: usize, name: String },
    /// Same slot assigned twice.
    #[error("Slot '{slot}' assigned again on line {line}")]
    DuplicateSlot { line: usize, slot: ShortcutSlot },
    /// Shortcut text could not be parsed.
    #[error("Invalid shortcut on line {line}: {source}")]
    InvalidShortcut {
        line: usize,
        #[source]
        source: ParseError,
    },
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
