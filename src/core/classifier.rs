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

//! Secure input classification
//!
//! macOS enables *secure event input* while a password field has focus.
//! In that mode key events that would type a visible character are withheld
//! from global hotkey monitors. Option (and Option+Shift) combinations type
//! characters on standard layouts (Option+C → "ç"), so a global shortcut
//! whose only qualifying modifier is Option never fires there.
//!
//! Command and Control combinations never type characters and are delivered
//! as usual, whatever else is held with them.

use tracing::debug;

use crate::core::types::{Classification, Modifier, ModifierSet, Shortcut};
use crate::i18n::{resolve, Localizer, MessageKey};

/// Classifies a modifier set
///
/// The base key never matters, so this is the whole decision.
pub fn classify_modifiers(modifiers: ModifierSet) -> Classification {
    if modifiers.has(Modifier::Command) || modifiers.has(Modifier::Control) {
        return Classification::Valid;
    }

    if modifiers.has(Modifier::Option) {
        return Classification::Blocked;
    }

    // No qualifying modifier: Shift alone, fn, or a bare key
    Classification::Valid
}

/// Classifies an optional shortcut
///
/// An unassigned shortcut is `Valid`.
///
/// # Example
/// ```
/// use shortcut_guard::core::{classify, Classification, Key, Modifier, Shortcut};
///
/// let c = Key::from_name("c").unwrap();
/// let option_c = Shortcut::new(c.clone(), [Modifier::Option]);
/// let command_option_c = Shortcut::new(c, [Modifier::Command, Modifier::Option]);
///
/// assert_eq!(classify(Some(&option_c)), Classification::Blocked);
/// assert_eq!(classify(Some(&command_option_c)), Classification::Valid);
/// assert_eq!(classify(None), Classification::Valid);
/// ```
pub fn classify(shortcut: Option<&Shortcut>) -> Classification {
    let Some(shortcut) = shortcut else {
        return Classification::Valid;
    };

    let classification = classify_modifiers(shortcut.modifiers);
    debug!(shortcut = %shortcut, %classification, "classified shortcut");
    classification
}

/// Returns true when the shortcut keeps working in password fields
pub fn is_valid_in_password_fields(shortcut: Option<&Shortcut>) -> bool {
    classify(shortcut).is_valid()
}

/// Warning to show for a shortcut that won't fire in password fields
///
/// `None` for valid or absent shortcuts. Blocked shortcuts always get
/// non-empty text: if `localizer` has no translation, English is used.
pub fn warning_message<L: Localizer + ?Sized>(
    shortcut: Option<&Shortcut>,
    localizer: &L,
) -> Option<String> {
    if classify(shortcut).is_valid() {
        return None;
    }

    Some(resolve(localizer, MessageKey::ShortcutBlockedInPasswordFields))
}
