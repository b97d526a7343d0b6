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

//! Message lookup
//!
//! The classifier never talks to a resource bundle directly. Display text is
//! obtained through a `Localizer`, which the host application injects. Any
//! `Fn(&str) -> String` closure works, as does the built-in `EnglishCatalog`.

use std::borrow::Cow;

/// Table the settings messages live in
pub const GENERAL_SETTINGS_TABLE: &str = "GeneralSettings";

/// Message keys used by this crate
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MessageKey {
    /// Advisory shown under a shortcut recorder when secure input will swallow it
    ShortcutBlockedInPasswordFields,
}

impl MessageKey {
    /// Key string as it appears in the localisation table
    pub const fn as_str(self) -> &'static str {
        match self {
            MessageKey::ShortcutBlockedInPasswordFields => "ShortcutBlockedInPasswordFields",
        }
    }

    /// Table the key belongs to
    pub const fn table(self) -> &'static str {
        match self {
            MessageKey::ShortcutBlockedInPasswordFields => GENERAL_SETTINGS_TABLE,
        }
    }
}

/// Resolves message keys to display text
pub trait Localizer {
    fn lookup(&self, key: MessageKey) -> Cow<'_, str>;
}

impl<F> Localizer for F
where
    F: Fn(&str) -> String,
{
    fn lookup(&self, key: MessageKey) -> Cow<'_, str> {
        Cow::Owned(self(key.as_str()))
    }
}

/// Built-in English text, used when no translation is available
#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishCatalog;

impl EnglishCatalog {
    pub const fn text(key: MessageKey) -> &'static str {
        match key {
            MessageKey::ShortcutBlockedInPasswordFields => {
                "This shortcut uses only Option (or Option+Shift) as a modifier. \
                 macOS blocks such shortcuts while a password field is focused, \
                 so it won't work there. Add Command or Control to make it work everywhere."
            }
        }
    }
}

impl Localizer for EnglishCatalog {
    fn lookup(&self, key: MessageKey) -> Cow<'_, str> {
        Cow::Borrowed(Self::text(key))
    }
}

/// Looks up `key`, falling back to English when the injected lookup has nothing
///
/// Lookups that echo the key back (the usual "missing translation" result)
/// count as missing too.
pub fn resolve<L: Localizer + ?Sized>(localizer: &L, key: MessageKey) -> String {
    let text = localizer.lookup(key);
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == key.as_str() {
        EnglishCatalog::text(key).to_string()
    } else {
        text.into_owned()
    }
}
