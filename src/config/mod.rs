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

//! Slot files: which shortcut each recorder slot holds.
//!
//! A slot file lists one assignment per line. It is read-only input for
//! audits; the application's own preferences store is not touched.
//!
//! ```text
//! # Maccy shortcuts
//! popup = cmd+shift+c
//! pin = opt+p
//! delete = none
//! togglePreview = ⌥⇧Space
//! ```
//!
//! # Example
//!
//! ```no_run
//! use shortcut_guard::config::SlotAssignments;
//! use std::path::Path;
//!
//! let slots = SlotAssignments::load(Path::new("~/.config/maccy/shortcuts.conf"))?;
//! println!("{} slots assigned", slots.len());
//! # Ok::<(), shortcut_guard::config::ConfigError>(())
//! ```

mod error;

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, space0},
    IResult, Parser,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::{parse_optional_shortcut, Shortcut};
use crate::settings::{ShortcutSlot, ShortcutSource};

pub use error::ConfigError;

/// Where `audit` looks when no path is given
pub const DEFAULT_SLOT_FILE: &str = "~/.config/maccy/shortcuts.conf";

/// One `slot = shortcut` line
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SlotAssignment {
    pub slot: ShortcutSlot,
    /// `None` when the slot is explicitly unassigned
    pub shortcut: Option<Shortcut>,
    /// 1-based line number in the source file
    pub line: usize,
}

/// All assignments read from a slot file, in file order
#[derive(Clone, Debug, Default)]
pub struct SlotAssignments {
    assignments: Vec<SlotAssignment>,
}

impl SlotAssignments {
    /// Reads and parses a slot file
    ///
    /// A leading `~` is expanded to the home directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist, or the
    /// first syntax/slot/shortcut error with its line number.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let path = expand_path(path)?;
        if !path.exists() {
            return Err(ConfigError::NotFound(path));
        }

        debug!(path = %path.display(), "reading slot file");
        let content = fs::read_to_string(&path)?;
        parse_slot_file(&content)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlotAssignment> {
        self.assignments.iter()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Assignment for `slot`, if the file mentions it
    pub fn get(&self, slot: ShortcutSlot) -> Option<&SlotAssignment> {
        self.assignments.iter().find(|a| a.slot == slot)
    }
}

impl ShortcutSource for SlotAssignments {
    fn shortcut(&self, slot: ShortcutSlot) -> Option<Shortcut> {
        self.get(slot).and_then(|a| a.shortcut.clone())
    }
}

/// Expands `~` in a user-supplied path
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let raw = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath(path.to_path_buf()))?;
    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

/// Parse slot file content
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_slot_file(content: &str) -> Result<SlotAssignments, ConfigError> {
    let mut assignments: Vec<SlotAssignment> = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1; // Human-readable numbers start at 1

        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        let (name, value) = match parse_assignment_line(line_trimmed) {
            Ok((_, pair)) => pair,
            Err(e) => {
                return Err(ConfigError::InvalidSyntax {
                    line: line_num,
                    message: format!("{:?}", e),
                });
            }
        };

        let slot = ShortcutSlot::from_name(name).ok_or_else(|| ConfigError::UnknownSlot {
            line: line_num,
            name: name.to_string(),
        })?;

        if assignments.iter().any(|a| a.slot == slot) {
            return Err(ConfigError::DuplicateSlot { line: line_num, slot });
        }

        let shortcut = parse_optional_shortcut(value).map_err(|source| {
            ConfigError::InvalidShortcut {
                line: line_num,
                source,
            }
        })?;

        assignments.push(SlotAssignment {
            slot,
            shortcut,
            line: line_num,
        });
    }

    Ok(SlotAssignments { assignments })
}

/// Parse a single `name = value` line
///
/// The value is everything after `=`, trimmed; it may be empty.
pub fn parse_assignment_line(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, name) = take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)?;
    let (input, _) = (space0, char('='), space0).parse(input)?;

    Ok(("", (name, input.trim())))
}

#[cfg(test)]
mod tests;
