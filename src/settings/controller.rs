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

//! Settings controller - per-slot secure input warnings
//!
//! # Responsibilities
//!
//! - Recompute a slot's warning when its recorder reports a change
//! - Validate every slot when the settings screen first appears
//! - Start/stop the popup events monitor as the popup shortcut comes and goes
//! - Tell observers when a warning appears, disappears or changes
//!
//! # Architecture
//!
//! The controller knows nothing about widgets. Its collaborators (monitor,
//! localizer, observers, shortcut source) are all injected.

use tracing::{debug, info};

use crate::core::{warning_message, Shortcut};
use crate::i18n::Localizer;
use crate::settings::{EventsMonitor, SettingsObserver, ShortcutSlot, ShortcutSource};

/// Warning state for the shortcut recorders
pub struct ShortcutSettings<M, L> {
    /// Popup key-event monitor
    monitor: M,
    /// Display text lookup
    localizer: L,
    /// View-side listeners
    observers: Vec<Box<dyn SettingsObserver>>,
    /// Current warning per slot, indexed by `ShortcutSlot::index`
    warnings: [Option<String>; 4],
}

impl<M: EventsMonitor, L: Localizer> ShortcutSettings<M, L> {
    /// Creates a controller with no warnings shown
    ///
    /// # Example
    ///
    /// ```
    /// use shortcut_guard::i18n::EnglishCatalog;
    /// use shortcut_guard::settings::{EventsMonitor, ShortcutSettings, ShortcutSlot};
    /// use shortcut_guard::core::parse_shortcut;
    ///
    /// struct NoMonitor;
    /// impl EventsMonitor for NoMonitor {
    ///     fn init_events_monitor(&mut self) {}
    ///     fn deinit_events_monitor(&mut self) {}
    /// }
    ///
    /// let mut settings = ShortcutSettings::new(NoMonitor, EnglishCatalog);
    /// let option_p = parse_shortcut("opt+p")?;
    /// settings.shortcut_changed(ShortcutSlot::Pin, Some(&option_p));
    ///
    /// assert!(settings.warning(ShortcutSlot::Pin).is_some());
    /// # Ok::<(), shortcut_guard::core::ParseError>(())
    /// ```
    pub fn new(monitor: M, localizer: L) -> Self {
        Self {
            monitor,
            localizer,
            observers: Vec::new(),
            warnings: Default::default(),
        }
    }

    /// Adds an observer, builder style
    pub fn with_observer(mut self, observer: impl SettingsObserver + 'static) -> Self {
        self.add_observer(observer);
        self
    }

    /// Adds an observer
    pub fn add_observer(&mut self, observer: impl SettingsObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Recomputes every slot from the stored shortcuts
    ///
    /// Call when the settings screen appears. The events monitor is left
    /// alone; it tracks recorder changes only.
    pub fn validate_all(&mut self, source: &(impl ShortcutSource + ?Sized)) {
        for slot in ShortcutSlot::ALL {
            let shortcut = source.shortcut(slot);
            self.refresh(slot, shortcut.as_ref());
        }
    }

    /// Handles a recorder change for `slot`
    ///
    /// For the popup slot, clearing the shortcut stops the events monitor
    /// and assigning one makes sure it is running.
    pub fn shortcut_changed(&mut self, slot: ShortcutSlot, shortcut: Option<&Shortcut>) {
        if slot == ShortcutSlot::Popup {
            match shortcut {
                None => {
                    info!("popup shortcut cleared, stopping events monitor");
                    self.monitor.deinit_events_monitor();
                }
                Some(s) => {
                    info!(shortcut = %s, "popup shortcut set, starting events monitor");
                    self.monitor.init_events_monitor();
                }
            }
        }

        self.refresh(slot, shortcut);
    }

    /// Current warning for `slot`
    pub fn warning(&self, slot: ShortcutSlot) -> Option<&str> {
        self.warnings[slot.index()].as_deref()
    }

    /// Slots that currently show a warning, in settings-screen order
    pub fn blocked_slots(&self) -> impl Iterator<Item = (ShortcutSlot, &str)> + '_ {
        ShortcutSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.warning(slot).map(|w| (slot, w)))
    }

    /// The injected events monitor
    pub fn monitor(&self) -> &M {
        &self.monitor
    }

    fn refresh(&mut self, slot: ShortcutSlot, shortcut: Option<&Shortcut>) {
        let warning = warning_message(shortcut, &self.localizer);
        let current = &mut self.warnings[slot.index()];

        if *current == warning {
            return;
        }

        debug!(%slot, blocked = warning.is_some(), "slot warning changed");
        *current = warning;

        for observer in &mut self.observers {
            observer.warning_changed(slot, current.as_deref());
        }
    }
}
