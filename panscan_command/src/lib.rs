// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=panscan_command --heading-base-level=0

//! Panscan Command: which key does what.
//!
//! This crate owns the policy side of Panscan:
//!
//! - [`Config`]: the modifier gate, propagation policy, pan and zoom steps, and
//!   the runtime-toggleable border flag.
//! - [`Action`]: every operation a key can trigger, as a plain sum type.
//! - [`CommandTable`]: an ordered list of [`CommandSpec`]s binding one key
//!   symbol to one action. Lookups normalize the pressed key to its upper-case
//!   form and return the first match in declaration order.
//!
//! Executing the transform actions is done here too ([`Action::apply`]), since
//! it only needs a [`TransformStore`]. The two actions that reach outside the
//! store, [`Action::ToggleBorder`] and [`Action::ToggleFullscreen`], are left
//! to the dispatcher, which owns the document and the selection.
//!
//! ## Standard bindings
//!
//! | Key | Action | Refresh |
//! |---|---|---|
//! | `W` / `S` | [`Action::PanUp`] / [`Action::PanDown`] | yes |
//! | `A` / `D` | [`Action::PanLeft`] / [`Action::PanRight`] | yes |
//! | `E` / `Q` | [`Action::ZoomIn`] / [`Action::ZoomOut`] | yes |
//! | `+` / `-` | [`Action::FastZoomIn`] / [`Action::FastZoomOut`] | yes |
//! | `R` | [`Action::Reset`] | yes |
//! | `B` | [`Action::ToggleBorder`] | no |
//! | `F` | [`Action::ToggleFullscreen`] | no |
//!
//! ## Minimal example
//!
//! ```rust
//! use panscan_command::{Action, CommandTable};
//!
//! let table = CommandTable::standard();
//! let spec = table.lookup("e").unwrap();
//! assert_eq!(spec.action, Action::ZoomIn);
//! assert!(spec.action.requires_refresh());
//! assert!(table.lookup("Enter").is_none());
//! ```
//!
//! [`TransformStore`]: panscan_transform::TransformStore
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod action;
mod config;
mod table;

pub use action::Action;
pub use config::{Config, Modifiers};
pub use table::{CommandSpec, CommandTable, TableError, normalize_key};
