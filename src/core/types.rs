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

//! src/core/types.rs
//!
//! Core type definitions for shortcut classification
//!
//! This module defines the value types the classifier works on:
//! - `Modifier`: A single macOS modifier key (Command, Control, Option, Shift, Function)
//! - `ModifierSet`: An unordered, duplicate-free set of modifiers
//! - `Key`: A normalised base key name
//! - `Shortcut`: A base key plus its modifier set
//! - `Classification`: Whether a shortcut survives secure input
//!
//! All types are plain immutable values. They are cheap to clone, `Send` and
//! `Sync`, and serialisable for JSON reports.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Keyboard modifier keys
///
/// The five modifier keys a macOS shortcut recorder can capture.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Modifier {
    /// Control key (⌃)
    Control,
    /// Option/Alt key (⌥)
    Option,
    /// Shift key (⇧)
    Shift,
    /// Command key (⌘)
    Command,
    /// Function/Globe key (fn)
    Function,
}

impl Modifier {
    /// All modifiers in the order macOS renders them (⌃⌥⇧⌘, then fn)
    pub const ALL: [Modifier; 5] = [
        Modifier::Control,
        Modifier::Option,
        Modifier::Shift,
        Modifier::Command,
        Modifier::Function,
    ];

    /// The single-flag set for this modifier
    pub const fn flag(self) -> ModifierSet {
        match self {
            Modifier::Control => ModifierSet::CONTROL,
            Modifier::Option => ModifierSet::OPTION,
            Modifier::Shift => ModifierSet::SHIFT,
            Modifier::Command => ModifierSet::COMMAND,
            Modifier::Function => ModifierSet::FUNCTION,
        }
    }

    /// macOS menu glyph
    pub const fn symbol(self) -> &'static str {
        match self {
            Modifier::Control => "⌃",
            Modifier::Option => "⌥",
            Modifier::Shift => "⇧",
            Modifier::Command => "⌘",
            Modifier::Function => "fn",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Control => write!(f, "Control"),
            Modifier::Option => write!(f, "Option"),
            Modifier::Shift => write!(f, "Shift"),
            Modifier::Command => write!(f, "Command"),
            Modifier::Function => write!(f, "Function"),
        }
    }
}

bitflags! {
    /// Set of modifier keys held together with the base key
    ///
    /// Backed by a bit mask, so ordering and duplicates cannot be expressed:
    /// `[Shift, Command]` and `[Command, Shift, Shift]` are the same value.
    #[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
    pub struct ModifierSet: u8 {
        const CONTROL = 1 << 0;
        const OPTION = 1 << 1;
        const SHIFT = 1 << 2;
        const COMMAND = 1 << 3;
        const FUNCTION = 1 << 4;
    }
}

impl ModifierSet {
    /// Returns true if `modifier` is part of this set
    pub fn has(self, modifier: Modifier) -> bool {
        self.contains(modifier.flag())
    }

    /// Iterates the contained modifiers in macOS display order
    pub fn modifiers(self) -> impl Iterator<Item = Modifier> {
        Modifier::ALL.into_iter().filter(move |m| self.has(*m))
    }

    /// Glyph rendering, e.g. `⌥⇧`
    pub fn symbols(self) -> String {
        self.modifiers().map(Modifier::symbol).collect()
    }
}

impl From<Modifier> for ModifierSet {
    fn from(modifier: Modifier) -> Self {
        modifier.flag()
    }
}

impl FromIterator<Modifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        iter.into_iter().fold(ModifierSet::empty(), |set, m| set | m.flag())
    }
}

impl fmt::Display for ModifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self
            .modifiers()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join("+");
        write!(f, "{}", names)
    }
}

/// Named keys and the aliases accepted for them
///
/// The first entry of each row is the canonical name.
const NAMED_KEYS: &[&[&str]] = &[
    &["Space"],
    &["Minus"],
    &["Return", "Enter"],
    &["Tab"],
    &["Delete", "Backspace"],
    &["ForwardDelete", "Del"],
    &["Escape", "Esc"],
    &["Home"],
    &["End"],
    &["PageUp", "PgUp"],
    &["PageDown", "PgDn"],
    &["LeftArrow", "Left"],
    &["RightArrow", "Right"],
    &["UpArrow", "Up"],
    &["DownArrow", "Down"],
];

/// A base key name
///
/// Always stored normalised: printable characters upper-cased when that
/// stays a single character, named keys in their canonical spelling
/// (`esc` → `Escape`, `-` → `Minus`), function keys as `F1`..`F20`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Key(String);

impl Key {
    /// Normalises a key name, returning `None` if it is not a known key
    ///
    /// # Example
    /// ```
    /// use shortcut_guard::core::Key;
    ///
    /// assert_eq!(Key::from_name("esc").unwrap().name(), "Escape");
    /// assert_eq!(Key::from_name("c").unwrap().name(), "C");
    /// assert!(Key::from_name("hyper").is_none());
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();

        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_whitespace() || c.is_control() || c == '+' {
                return None;
            }
            if c == '-' {
                return Some(Self("Minus".to_string()));
            }
            // Keep one char per key; ß would otherwise become "SS"
            let mut upper = c.to_uppercase();
            return match (upper.next(), upper.next()) {
                (Some(u), None) => Some(Self(u.to_string())),
                _ => Some(Self(c.to_string())),
            };
        }

        for row in NAMED_KEYS {
            if row.iter().any(|alias| alias.eq_ignore_ascii_case(name)) {
                return Some(Self(row[0].to_string()));
            }
        }

        if let Some(number) = name
            .strip_prefix('F')
            .or_else(|| name.strip_prefix('f'))
            .and_then(|n| n.parse::<u8>().ok())
        {
            if (1..=20).contains(&number) {
                return Some(Self(format!("F{}", number)));
            }
        }

        None
    }

    /// Canonical key name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Key {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Key::from_name(&value).ok_or_else(|| format!("unknown key '{}'", value))
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recorded global shortcut
///
/// # Example
/// ```
/// use shortcut_guard::core::{Key, Modifier, Shortcut};
///
/// let key = Key::from_name("c").unwrap();
/// let shortcut = Shortcut::new(key, [Modifier::Shift, Modifier::Command]);
/// assert_eq!(shortcut.to_string(), "Shift+Command+C");
/// assert_eq!(shortcut.symbols(), "⇧⌘C");
/// ```
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Shortcut {
    /// The base key
    pub key: Key,

    /// Modifiers held with the key
    pub modifiers: ModifierSet,
}

impl Shortcut {
    /// Creates a shortcut from a key and any collection of modifiers
    ///
    /// Repeated modifiers collapse into one.
    pub fn new(key: Key, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        Self {
            key,
            modifiers: modifiers.into_iter().collect(),
        }
    }

    /// Creates a shortcut from an already built modifier set
    pub fn with_set(key: Key, modifiers: ModifierSet) -> Self {
        Self { key, modifiers }
    }

    /// Glyph rendering as shown in macOS menus, e.g. `⌥⇧C`
    pub fn symbols(&self) -> String {
        format!("{}{}", self.modifiers.symbols(), self.key)
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifiers, self.key)
        }
    }
}

/// Whether a shortcut keeps working while a secure input field has focus
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Delivered everywhere, including password fields
    Valid,
    /// Swallowed by secure input; the shortcut silently does nothing
    Blocked,
}

impl Classification {
    pub fn is_valid(self) -> bool {
        self == Classification::Valid
    }

    pub fn is_blocked(self) -> bool {
        self == Classification::Blocked
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Valid => write!(f, "valid"),
            Classification::Blocked => write!(f, "blocked"),
        }
    }
}
