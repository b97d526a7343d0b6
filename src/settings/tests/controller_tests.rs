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

//! Controller tests
//!
//! Tests for the settings controller logic

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::core::{parse_shortcut, Shortcut};
use crate::i18n::EnglishCatalog;
use crate::settings::{EventsMonitor, ShortcutSettings, ShortcutSlot};

/// Records monitor calls
#[derive(Default)]
struct FakeMonitor {
    running: bool,
    inits: usize,
    deinits: usize,
}

impl EventsMonitor for FakeMonitor {
    fn init_events_monitor(&mut self) {
        self.running = true;
        self.inits += 1;
    }

    fn deinit_events_monitor(&mut self) {
        self.running = false;
        self.deinits += 1;
    }
}

type Events = Rc<RefCell<Vec<(ShortcutSlot, Option<String>)>>>;

/// Helper: Controller plus a log of observer notifications
fn create_settings() -> (ShortcutSettings<FakeMonitor, EnglishCatalog>, Events) {
    let events: Events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);

    let settings = ShortcutSettings::new(FakeMonitor::default(), EnglishCatalog).with_observer(
        move |slot: ShortcutSlot, warning: Option<&str>| {
            sink.borrow_mut().push((slot, warning.map(str::to_string)));
        },
    );

    (settings, events)
}

fn shortcut(text: &str) -> Shortcut {
    parse_shortcut(text).unwrap()
}

#[test]
fn test_starts_without_warnings() {
    let (settings, events) = create_settings();

    for slot in ShortcutSlot::ALL {
        assert!(settings.warning(slot).is_none());
    }
    assert!(events.borrow().is_empty());
}

#[test]
fn test_blocked_shortcut_sets_warning() {
    let (mut settings, events) = create_settings();

    settings.shortcut_changed(ShortcutSlot::Pin, Some(&shortcut("opt+p")));

    assert!(settings.warning(ShortcutSlot::Pin).is_some());
    assert!(settings.warning(ShortcutSlot::Delete).is_none());
    assert_eq!(events.borrow().len(), 1);
    assert_eq!(events.borrow()[0].0, ShortcutSlot::Pin);
}

#[test]
fn test_fixing_shortcut_clears_warning() {
    let (mut settings, events) = create_settings();

    settings.shortcut_changed(ShortcutSlot::Delete, Some(&shortcut("opt+delete")));
    settings.shortcut_changed(ShortcutSlot::Delete, Some(&shortcut("cmd+opt+delete")));

    assert!(settings.warning(ShortcutSlot::Delete).is_none());

    let events = events.borrow();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1], (ShortcutSlot::Delete, None));
}

#[test]
fn test_unchanged_warning_does_not_notify() {
    let (mut settings, events) = create_settings();

    settings.shortcut_changed(ShortcutSlot::Pin, Some(&shortcut("opt+p")));
    settings.shortcut_changed(ShortcutSlot::Pin, Some(&shortcut("opt+shift+p")));
    settings.shortcut_changed(ShortcutSlot::TogglePreview, Some(&shortcut("cmd+p")));

    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn test_popup_shortcut_drives_events_monitor() {
    let (mut settings, _events) = create_settings();

    settings.shortcut_changed(ShortcutSlot::Popup, Some(&shortcut("cmd+shift+c")));
    assert!(settings.monitor().running);
    assert_eq!(settings.monitor().inits, 1);

    settings.shortcut_changed(ShortcutSlot::Popup, None);
    assert!(!settings.monitor().running);
    assert_eq!(settings.monitor().deinits, 1);
}

#[test]
fn test_other_slots_leave_monitor_alone() {
    let (mut settings, _events) = create_settings();

    settings.shortcut_changed(ShortcutSlot::Pin, Some(&shortcut("cmd+p")));
    settings.shortcut_changed(ShortcutSlot::Delete, None);

    assert_eq!(settings.monitor().inits, 0);
    assert_eq!(settings.monitor().deinits, 0);
}

#[test]
fn test_blocked_popup_still_starts_monitor() {
    let (mut settings, _events) = create_settings();

    settings.shortcut_changed(ShortcutSlot::Popup, Some(&shortcut("opt+c")));

    assert!(settings.monitor().running);
    assert!(settings.warning(ShortcutSlot::Popup).is_some());
}

#[test]
fn test_validate_all() {
    let (mut settings, events) = create_settings();

    let mut stored = HashMap::new();
    stored.insert(ShortcutSlot::Popup, shortcut("cmd+shift+c"));
    stored.insert(ShortcutSlot::Pin, shortcut("opt+p"));
    stored.insert(ShortcutSlot::TogglePreview, shortcut("⌥⇧Space"));

    settings.validate_all(&stored);

    let blocked: Vec<ShortcutSlot> = settings.blocked_slots().map(|(slot, _)| slot).collect();
    assert_eq!(blocked, vec![ShortcutSlot::Pin, ShortcutSlot::TogglePreview]);
    assert_eq!(events.borrow().len(), 2);

    // Validation never touches the monitor
    assert_eq!(settings.monitor().inits, 0);
}

#[test]
fn test_slot_names() {
    assert_eq!(ShortcutSlot::from_name("togglepreview"), Some(ShortcutSlot::TogglePreview));
    assert_eq!(ShortcutSlot::from_name(" popup "), Some(ShortcutSlot::Popup));
    assert_eq!(ShortcutSlot::from_name("paste"), None);
    assert_eq!(ShortcutSlot::TogglePreview.to_string(), "togglePreview");
}
