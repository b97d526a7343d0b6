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

//! src/core/parser.rs
//!
//! Shortcut notation parser
//!
//! Turns user-typed shortcut text into a `Shortcut`. Two notations are
//! accepted:
//! - Token form: modifiers and key joined by `+` or `-`, case-insensitive
//!   (`cmd+shift+c`, `Control-Space`, `opt+delete`, `⌘+V`, `opt+-`)
//! - Glyph form: macOS menu glyphs followed by the key (`⌥⇧C`, `⌘Space`, `⌥fnC`)
//!
//! # Architecture
//! The parser uses nom combinators to split the input, then resolves each
//! piece against the modifier aliases and the key table in `types.rs`.
//! It never classifies; that happens in classifier.rs.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, one_of, space0},
    combinator::{all_consuming, map},
    multi::{many1, separated_list1},
    sequence::delimited,
    IResult, Parser,
};
use std::str::FromStr;
use thiserror::Error;

use crate::core::types::{Key, Modifier, ModifierSet, Shortcut};

/// Parse errors for shortcut text
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty shortcut")]
    Empty,

    #[error("Shortcut '{0}' has no key")]
    MissingKey(String),

    #[error("Unknown key '{0}'")]
    UnknownKey(String),

    #[error("Unknown modifier '{0}'")]
    UnknownModifier(String),

    #[error("Modifier {0} appears more than once")]
    DuplicateModifier(Modifier),

    #[error("Invalid shortcut syntax: '{0}'")]
    InvalidSyntax(String),
}

/// Parse a shortcut
///
/// # Example
/// ```
/// use shortcut_guard::core::parser::parse_shortcut;
/// use shortcut_guard::core::Modifier;
///
/// let shortcut = parse_shortcut("opt+shift+c")?;
/// assert!(shortcut.modifiers.has(Modifier::Option));
/// assert!(shortcut.modifiers.has(Modifier::Shift));
/// assert_eq!(shortcut.key.name(), "C");
///
/// assert_eq!(parse_shortcut("⌥⇧C")?, shortcut);
/// # Ok::<(), shortcut_guard::core::parser::ParseError>(())
/// ```
pub fn parse_shortcut(input: &str) -> Result<Shortcut, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    // Glyph form only applies when the glyphs run straight into the key
    if let Ok((_, (modifiers, key))) = all_consuming(parse_glyph_form).parse(input) {
        let key = key.trim();
        if key == "-" || !key.starts_with(['+', '-']) {
            return build_shortcut(input, modifiers, key);
        }
    }

    // A trailing "-" after a separator is the minus key, not another separator
    let (body, trailing_minus) = split_trailing_minus(input);
    if body.is_empty() {
        return build_shortcut(input, Vec::new(), "-");
    }

    let (_, tokens) = all_consuming(parse_tokens)
        .parse(body)
        .map_err(|_| ParseError::InvalidSyntax(input.to_string()))?;

    let (key, modifier_tokens) = match (trailing_minus, tokens.split_last()) {
        (true, _) => ("-", tokens.as_slice()),
        (false, Some((key, rest))) => (*key, rest),
        (false, None) => return Err(ParseError::MissingKey(input.to_string())),
    };

    let mut modifiers = Vec::with_capacity(modifier_tokens.len());
    for token in modifier_tokens {
        let modifier = modifier_from_token(token)
            .ok_or_else(|| ParseError::UnknownModifier(token.to_string()))?;
        modifiers.push(modifier);
    }

    // "cmd+shift" names only modifiers
    if modifier_from_token(key).is_some() && Key::from_name(key).is_none() {
        return Err(ParseError::MissingKey(input.to_string()));
    }

    build_shortcut(input, modifiers, key)
}

/// Splits `opt+-` into (`opt`, true)
///
/// A bare `-` yields an empty body.
fn split_trailing_minus(input: &str) -> (&str, bool) {
    let Some(prefix) = input.strip_suffix('-') else {
        return (input, false);
    };

    let prefix = prefix.trim_end();
    if prefix.is_empty() {
        return ("", true);
    }

    match prefix.strip_suffix(['+', '-']) {
        Some(body) => (body.trim_end(), true),
        None => (input, false),
    }
}

/// Parse a shortcut that may be unassigned
///
/// Empty text and `none` mean no shortcut.
pub fn parse_optional_shortcut(input: &str) -> Result<Option<Shortcut>, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    parse_shortcut(trimmed).map(Some)
}

/// Resolve a modifier alias
///
/// Handles:
/// - "cmd", "command", "⌘" → Command
/// - "ctrl", "control", "⌃" → Control
/// - "opt", "option", "alt", "⌥" → Option
/// - "shift", "⇧" → Shift
/// - "fn", "function", "globe" → Function
pub fn modifier_from_token(token: &str) -> Option<Modifier> {
    let modifier = match token.trim().to_lowercase().as_str() {
        "cmd" | "command" | "⌘" => Modifier::Command,
        "ctrl" | "control" | "⌃" => Modifier::Control,
        "opt" | "option" | "alt" | "⌥" => Modifier::Option,
        "shift" | "⇧" => Modifier::Shift,
        "fn" | "function" | "globe" => Modifier::Function,
        _ => return None,
    };
    Some(modifier)
}

fn build_shortcut(input: &str, modifiers: Vec<Modifier>, key: &str) -> Result<Shortcut, ParseError> {
    let mut set = ModifierSet::empty();
    for modifier in modifiers {
        if set.has(modifier) {
            return Err(ParseError::DuplicateModifier(modifier));
        }
        set |= modifier.flag();
    }

    if key.trim().is_empty() {
        return Err(ParseError::MissingKey(input.to_string()));
    }

    let key = Key::from_name(key).ok_or_else(|| ParseError::UnknownKey(key.trim().to_string()))?;
    Ok(Shortcut::with_set(key, set))
}

/// Parse a single modifier glyph
fn parse_glyph(input: &str) -> IResult<&str, Modifier> {
    alt((
        map(char('⌃'), |_| Modifier::Control),
        map(char('⌥'), |_| Modifier::Option),
        map(char('⇧'), |_| Modifier::Shift),
        map(char('⌘'), |_| Modifier::Command),
        map(tag("fn"), |_| Modifier::Function),
    ))
    .parse(input)
}

/// Parse glyphs followed by the key name
///
/// Function has no glyph of its own and is written `fn`, as in `⌥fnC`.
fn parse_glyph_form(input: &str) -> IResult<&str, (Vec<Modifier>, &str)> {
    let (input, modifiers) = many1(parse_glyph).parse(input)?;

    Ok(("", (modifiers, input)))
}

/// Parse `+`/`-` separated tokens
///
/// The minus key is split off beforehand by `split_trailing_minus`.
fn parse_tokens(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(
        delimited(space0, one_of("+-"), space0),
        take_while1(|c: char| c != '+' && c != '-' && !c.is_whitespace()),
    )
    .parse(input)
}

impl FromStr for Shortcut {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_shortcut(s)
    }
}
