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

//! Toolkit-independent settings logic for the shortcut recorders
//!
//! # Architecture
//!
//! - **Model**: the preferences store, reached through `ShortcutSource`
//! - **View**: whatever toolkit renders the recorders, notified through `SettingsObserver`
//! - **Controller**: `ShortcutSettings` (in `controller.rs`)
//!
//! The popup key-event monitor is owned elsewhere; the controller gets a
//! handle to it (`EventsMonitor`) through its constructor.
//!
//! # Module Structure
//!
//! ```text
//! settings/
//! ├── mod.rs          // This file - slots and collaborator traits
//! └── controller.rs   // Per-slot warning state
//! ```

pub mod controller;

use std::collections::HashMap;
use std::fmt;

use crate::core::Shortcut;

pub use controller::ShortcutSettings;

/// The recordable application shortcuts
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ShortcutSlot {
    /// Opens the history popup
    Popup,
    /// Pins the selected history item
    Pin,
    /// Deletes the selected history item
    Delete,
    /// Shows or hides the item preview
    TogglePreview,
}

impl ShortcutSlot {
    /// All slots in settings-screen order
    pub const ALL: [ShortcutSlot; 4] = [
        ShortcutSlot::Popup,
        ShortcutSlot::Pin,
        ShortcutSlot::Delete,
        ShortcutSlot::TogglePreview,
    ];

    /// Stable identifier used in slot files
    pub const fn name(self) -> &'static str {
        match self {
            ShortcutSlot::Popup => "popup",
            ShortcutSlot::Pin => "pin",
            ShortcutSlot::Delete => "delete",
            ShortcutSlot::TogglePreview => "togglePreview",
        }
    }

    /// Label shown next to the recorder
    pub const fn label(self) -> &'static str {
        match self {
            ShortcutSlot::Popup => "Open",
            ShortcutSlot::Pin => "Pin",
            ShortcutSlot::Delete => "Delete",
            ShortcutSlot::TogglePreview => "Show Preview",
        }
    }

    /// Looks a slot up by identifier, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.name().eq_ignore_ascii_case(name.trim()))
    }

    const fn index(self) -> usize {
        match self {
            ShortcutSlot::Popup => 0,
            ShortcutSlot::Pin => 1,
            ShortcutSlot::Delete => 2,
            ShortcutSlot::TogglePreview => 3,
        }
    }
}

impl fmt::Display for ShortcutSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Handle to the key-event monitor backing the popup shortcut
///
/// The monitor only needs to run while a popup shortcut is assigned.
pub trait EventsMonitor {
    fn init_events_monitor(&mut self);
    fn deinit_events_monitor(&mut self);
}

/// Receives warning updates for the view layer
pub trait SettingsObserver {
    /// Called when a slot's warning appears, disappears or changes text
    fn warning_changed(&mut self, slot: ShortcutSlot, warning: Option<&str>);
}

impl<F> SettingsObserver for F
where
    F: FnMut(ShortcutSlot, Option<&str>),
{
    fn warning_changed(&mut self, slot: ShortcutSlot, warning: Option<&str>) {
        self(slot, warning)
    }
}

/// Read access to the currently assigned shortcuts
pub trait ShortcutSource {
    fn shortcut(&self, slot: ShortcutSlot) -> Option<Shortcut>;
}

impl ShortcutSource for HashMap<ShortcutSlot, Shortcut> {
    fn shortcut(&self, slot: ShortcutSlot) -> Option<Shortcut> {
        self.get(&slot).cloned()
    }
}

#[cfg(test)]
mod tests;
