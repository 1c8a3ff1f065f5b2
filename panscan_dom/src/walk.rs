// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree walks over a [`Document`].
//!
//! Both walks only follow parent/child/sibling links, so they never allocate
//! and always see the live tree.

use crate::document::Document;

/// Pre-order, depth-first walk of the subtree rooted at a node.
///
/// Created by [`subtree`].
#[derive(Debug)]
pub struct Subtree<'a, D: Document + ?Sized> {
    doc: &'a D,
    root: D::Node,
    next: Option<D::Node>,
}

/// Walks `root` and all of its descendants in document order.
///
/// `root` is yielded first. Siblings of `root` are never visited.
pub fn subtree<D: Document + ?Sized>(doc: &D, root: D::Node) -> Subtree<'_, D> {
    Subtree {
        doc,
        next: Some(root.clone()),
        root,
    }
}

impl<D: Document + ?Sized> Iterator for Subtree<'_, D> {
    type Item = D::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if let Some(child) = self.doc.first_child(&current) {
            self.next = Some(child);
            return Some(current);
        }

        let mut node = current.clone();
        while node != self.root {
            if let Some(sibling) = self.doc.next_sibling(&node) {
                self.next = Some(sibling);
                break;
            }
            match self.doc.parent(&node) {
                Some(parent) => node = parent,
                None => break,
            }
        }
        Some(current)
    }
}

/// Walk from a node up to the root element.
///
/// Created by [`ancestors`].
#[derive(Debug)]
pub struct Ancestors<'a, D: Document + ?Sized> {
    doc: &'a D,
    next: Option<D::Node>,
}

/// Walks `node` and then each of its ancestors, ending at the root element.
pub fn ancestors<D: Document + ?Sized>(doc: &D, node: D::Node) -> Ancestors<'_, D> {
    Ancestors {
        doc,
        next: Some(node),
    }
}

impl<D: Document + ?Sized> Iterator for Ancestors<'_, D> {
    type Item = D::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.doc.parent(&current);
        Some(current)
    }
}

/// Returns every node under `root` (inclusive) that carries attribute `name`.
pub fn nodes_with_attribute<'a, D: Document + ?Sized>(
    doc: &'a D,
    root: D::Node,
    name: &'a str,
) -> impl Iterator<Item = D::Node> {
    subtree(doc, root).filter(move |node| doc.attribute(node, name).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryDocument;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn subtree_is_preorder_and_stays_inside_root() {
        let mut doc = MemoryDocument::new();
        let root = doc.root().unwrap();
        let a = doc.append(root, "div");
        let a1 = doc.append(a, "div");
        let a2 = doc.append(a, "video");
        let a1x = doc.append(a1, "span");
        let b = doc.append(root, "div");

        let all: Vec<_> = subtree(&doc, root).collect();
        assert_eq!(all, vec![root, a, a1, a1x, a2, b]);

        // Walking from `a` must not escape into its sibling `b`.
        let under_a: Vec<_> = subtree(&doc, a).collect();
        assert_eq!(under_a, vec![a, a1, a1x, a2]);

        let leaf: Vec<_> = subtree(&doc, a2).collect();
        assert_eq!(leaf, vec![a2]);
    }

    #[test]
    fn ancestors_end_at_root_element() {
        let mut doc = MemoryDocument::new();
        let root = doc.root().unwrap();
        let a = doc.append(root, "div");
        let b = doc.append(a, "video");

        let chain: Vec<_> = ancestors(&doc, b).collect();
        assert_eq!(chain, vec![b, a, root]);
    }

    #[test]
    fn attribute_scan_finds_all_marked_nodes() {
        let mut doc = MemoryDocument::new();
        let root = doc.root().unwrap();
        let a = doc.append(root, "video");
        let b = doc.append(root, "video");
        let c = doc.append(b, "div");
        doc.set_attribute(&a, "data-mark", "");
        doc.set_attribute(&c, "data-mark", "1");

        let marked: Vec<_> = nodes_with_attribute(&doc, root, "data-mark").collect();
        assert_eq!(marked, vec![a, c]);
    }
}
