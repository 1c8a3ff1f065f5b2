// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Durable synthetic node identities.

use alloc::string::{String, ToString};
use core::fmt;

use panscan_dom::Document;
use uuid::Uuid;

/// Default marker attribute holding a node's identity.
pub const ID_ATTRIBUTE: &str = "data-panscan-id";

/// Opaque identity of a node.
///
/// Two nodes never share an identity unless the host copies the marker
/// attribute from one to the other.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(String);

impl Identity {
    /// Returns the identity as written to the marker attribute.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Assigns identities by writing a marker attribute on first use.
#[derive(Clone, Copy, Debug)]
pub struct Identities {
    attribute: &'static str,
}

impl Default for Identities {
    fn default() -> Self {
        Self::new(ID_ATTRIBUTE)
    }
}

impl Identities {
    /// Creates an assigner using `attribute` as the marker.
    #[must_use]
    pub const fn new(attribute: &'static str) -> Self {
        Self { attribute }
    }

    /// Returns the marker attribute name.
    #[must_use]
    pub const fn attribute(&self) -> &'static str {
        self.attribute
    }

    /// Returns the identity of `node`, assigning a fresh one if it has none.
    ///
    /// Fresh identities are random version 4 UUIDs drawn from the operating
    /// system's cryptographically secure generator. An empty marker attribute
    /// counts as missing.
    pub fn identity_of<D: Document + ?Sized>(&self, doc: &mut D, node: &D::Node) -> Identity {
        if let Some(existing) = self.existing(doc, node) {
            return existing;
        }
        let fresh = Uuid::new_v4().to_string();
        doc.set_attribute(node, self.attribute, &fresh);
        Identity(fresh)
    }

    /// Returns the identity of `node` if one was already assigned.
    pub fn existing<D: Document + ?Sized>(&self, doc: &D, node: &D::Node) -> Option<Identity> {
        doc.attribute(node, self.attribute)
            .filter(|value| !value.is_empty())
            .map(Identity)
    }
}
