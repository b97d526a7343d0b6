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

//! Per-shortcut findings for the CLI
//!
//! A `ShortcutReport` bundles everything the `check` and `audit` commands
//! print about one shortcut, and serialises to JSON for `--json`.

use serde::Serialize;

use crate::core::{classify, warning_message, Classification, Shortcut};
use crate::i18n::Localizer;

/// Finding for one shortcut
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ShortcutReport {
    /// What was checked: the user's input text or a slot name
    pub label: String,
    /// Plain rendering, e.g. `Option+Shift+C`; absent when unassigned
    pub shortcut: Option<String>,
    /// Glyph rendering, e.g. `⌥⇧C`
    pub symbols: Option<String>,
    pub classification: Classification,
    /// Present only when blocked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl ShortcutReport {
    pub fn new<L: Localizer + ?Sized>(
        label: impl Into<String>,
        shortcut: Option<&Shortcut>,
        localizer: &L,
    ) -> Self {
        Self {
            label: label.into(),
            shortcut: shortcut.map(|s| s.to_string()),
            symbols: shortcut.map(Shortcut::symbols),
            classification: classify(shortcut),
            warning: warning_message(shortcut, localizer),
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.classification.is_blocked()
    }
}

/// Number of blocked shortcuts in `reports`
pub fn count_blocked(reports: &[ShortcutReport]) -> usize {
    reports.iter().filter(|r| r.is_blocked()).count()
}
