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

use crate::core::types::{Classification, Key, Modifier, ModifierSet, Shortcut};

#[test]
fn test_modifier_display() {
    assert_eq!(format!("{}", Modifier::Command), "Command");
    assert_eq!(format!("{}", Modifier::Option), "Option");
    assert_eq!(Modifier::Control.symbol(), "⌃");
}

#[test]
fn test_modifier_set_ignores_order_and_duplicates() {
    let a: ModifierSet = [Modifier::Shift, Modifier::Command].into_iter().collect();
    let b: ModifierSet = [Modifier::Command, Modifier::Shift, Modifier::Shift]
        .into_iter()
        .collect();

    assert_eq!(a, b);
    assert_eq!(a.modifiers().count(), 2);
}

#[test]
fn test_modifier_set_display_order() {
    let set = ModifierSet::all();
    assert_eq!(set.symbols(), "⌃⌥⇧⌘fn");
    assert_eq!(set.to_string(), "Control+Option+Shift+Command+Function");
}

#[test]
fn test_key_normalisation() {
    assert_eq!(Key::from_name("c").unwrap().name(), "C");
    assert_eq!(Key::from_name("SPACE").unwrap().name(), "Space");
    assert_eq!(Key::from_name("backspace").unwrap().name(), "Delete");
    assert_eq!(Key::from_name("enter").unwrap().name(), "Return");
    assert_eq!(Key::from_name("f12").unwrap().name(), "F12");

    assert!(Key::from_name("F21").is_none());
    assert!(Key::from_name("").is_none());
    assert!(Key::from_name("+").is_none());
}

#[test]
fn test_minus_key_has_a_name() {
    assert_eq!(Key::from_name("-").unwrap().name(), "Minus");
    assert_eq!(Key::from_name("minus").unwrap().name(), "Minus");

    let s = Shortcut::new(Key::from_name("-").unwrap(), [Modifier::Option]);
    assert_eq!(s.to_string(), "Option+Minus");
}

#[test]
fn test_key_stays_single_character() {
    // Uppercase of ß is "SS"
    assert_eq!(Key::from_name("ß").unwrap().name(), "ß");
    assert_eq!(Key::from_name("é").unwrap().name(), "É");
}

#[test]
fn test_shortcut_display() {
    let s = Shortcut::new(Key::from_name("c").unwrap(), [Modifier::Option, Modifier::Shift]);
    assert_eq!(s.to_string(), "Option+Shift+C");
    assert_eq!(s.symbols(), "⌥⇧C");

    let bare = Shortcut::with_set(Key::from_name("F5").unwrap(), ModifierSet::empty());
    assert_eq!(bare.to_string(), "F5");
}

#[test]
fn test_classification_serialises_lowercase() {
    assert_eq!(serde_json::to_string(&Classification::Blocked).unwrap(), "\"blocked\"");
    assert_eq!(Classification::Valid.to_string(), "valid");
}

#[test]
fn test_shortcut_json_round_trip_with_sharp_s() {
    let s = Shortcut::new(Key::from_name("ß").unwrap(), [Modifier::Option]);

    let json = serde_json::to_string(&s).unwrap();
    let back: Shortcut = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
}

#[test]
fn test_key_deserialise_rejects_unknown() {
    let key: Key = serde_json::from_str("\"esc\"").unwrap();
    assert_eq!(key.name(), "Escape");
    assert!(serde_json::from_str::<Key>("\"hyper\"").is_err());
}
