// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use crate::action::Action;

/// Normalizes a pressed key to the symbol commands are bound to.
///
/// Only single-character keys can be command keys; named keys such as
/// `"Shift"` or `"ArrowUp"` return `None`. The character is upper-cased when
/// it has a single-character upper-case form.
#[must_use]
pub fn normalize_key(key: &str) -> Option<char> {
    let mut chars = key.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => Some(c),
    }
}

/// One key binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandSpec {
    /// Short, stable name used in diagnostics.
    pub name: &'static str,
    /// Bound key symbol, in upper-case form.
    pub key: char,
    /// What the key does.
    pub action: Action,
}

impl CommandSpec {
    /// Creates a binding, upper-casing ASCII `key`.
    #[must_use]
    pub const fn new(name: &'static str, key: char, action: Action) -> Self {
        Self {
            name,
            key: key.to_ascii_uppercase(),
            action,
        }
    }
}

const STANDARD: [CommandSpec; 11] = [
    CommandSpec::new("pan-up", 'W', Action::PanUp),
    CommandSpec::new("pan-down", 'S', Action::PanDown),
    CommandSpec::new("pan-left", 'A', Action::PanLeft),
    CommandSpec::new("pan-right", 'D', Action::PanRight),
    CommandSpec::new("zoom-in", 'E', Action::ZoomIn),
    CommandSpec::new("zoom-out", 'Q', Action::ZoomOut),
    CommandSpec::new("fast-zoom-in", '+', Action::FastZoomIn),
    CommandSpec::new("fast-zoom-out", '-', Action::FastZoomOut),
    CommandSpec::new("reset", 'R', Action::Reset),
    CommandSpec::new("toggle-border", 'B', Action::ToggleBorder),
    CommandSpec::new("toggle-fullscreen", 'F', Action::ToggleFullscreen),
];

/// Error describing a badly formed [`CommandTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableError {
    /// Two bindings share a key; only the first can ever fire.
    DuplicateKey {
        /// The shared key.
        key: char,
        /// Name of the binding that wins.
        first: &'static str,
        /// Name of the binding that is shadowed.
        shadowed: &'static str,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey {
                key,
                first,
                shadowed,
            } => write!(f, "key {key:?} is bound to {first:?} and shadows {shadowed:?}"),
        }
    }
}

impl core::error::Error for TableError {}

/// Ordered key bindings with first-match-wins lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandTable {
    specs: Vec<CommandSpec>,
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl CommandTable {
    /// Creates a table with no bindings.
    #[must_use]
    pub const fn empty() -> Self {
        Self { specs: Vec::new() }
    }

    /// Creates a table with the standard bindings.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            specs: STANDARD.to_vec(),
        }
    }

    /// Appends a binding. It only fires if no earlier binding uses its key.
    pub fn push(&mut self, spec: CommandSpec) {
        self.specs.push(spec);
    }

    /// Returns the bindings in declaration order.
    #[must_use]
    pub fn specs(&self) -> &[CommandSpec] {
        &self.specs
    }

    /// Returns the first binding for the pressed `key`, if any.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&CommandSpec> {
        let symbol = normalize_key(key)?;
        self.specs.iter().find(|spec| spec.key == symbol)
    }

    /// Returns the first binding for `action`, if any.
    #[must_use]
    pub fn binding_for(&self, action: Action) -> Option<&CommandSpec> {
        self.specs.iter().find(|spec| spec.action == action)
    }

    /// Checks that no key is bound twice.
    pub fn validate(&self) -> Result<(), TableError> {
        for (i, later) in self.specs.iter().enumerate() {
            if let Some(first) = self.specs[..i].iter().find(|s| s.key == later.key) {
                return Err(TableError::DuplicateKey {
                    key: later.key,
                    first: first.name,
                    shadowed: later.name,
                });
            }
        }
        Ok(())
    }
}
