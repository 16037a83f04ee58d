//! Element arena mirrored from the document tree.
//!
//! Layout borrows elements from this arena and never creates or destroys
//! them mid-pass; the caller owns tree mutation and must not interleave it
//! with a running layout.

use anyhow::{Result, bail};
use std::collections::HashMap;
use style_model::ComputedStyle;

/// Opaque handle to one element in the arena.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ElementKey(pub u64);

impl ElementKey {
    pub const ROOT: Self = Self(0);
}

#[derive(Clone, Debug)]
struct ElementNode {
    style: ComputedStyle,
    children: Vec<ElementKey>,
}

/// Tree of elements with their computed styles and child order.
#[derive(Debug)]
pub struct ElementTree {
    nodes: HashMap<ElementKey, ElementNode>,
    next_key: u64,
}

impl ElementTree {
    /// Create a tree seeded with a root element carrying the initial style.
    pub fn new() -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(
            ElementKey::ROOT,
            ElementNode {
                style: ComputedStyle::default(),
                children: Vec::new(),
            },
        );
        Self { nodes, next_key: 1 }
    }

    pub fn root(&self) -> ElementKey {
        ElementKey::ROOT
    }

    /// Append a child under `parent` and return its key.
    ///
    /// # Errors
    /// Fails when `parent` is not part of the tree.
    pub fn insert(&mut self, parent: ElementKey, style: ComputedStyle) -> Result<ElementKey> {
        if !self.nodes.contains_key(&parent) {
            bail!("parent {parent:?} is not part of the tree");
        }
        let key = ElementKey(self.next_key);
        self.next_key += 1;
        self.nodes.insert(
            key,
            ElementNode {
                style,
                children: Vec::new(),
            },
        );
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.push(key);
        }
        Ok(key)
    }

    /// Replace the computed style of an existing element.
    ///
    /// # Errors
    /// Fails when `element` is not part of the tree.
    pub fn set_style(&mut self, element: ElementKey, style: ComputedStyle) -> Result<()> {
        match self.nodes.get_mut(&element) {
            Some(node) => {
                node.style = style;
                Ok(())
            }
            None => bail!("element {element:?} is not part of the tree"),
        }
    }

    /// The computed style of `element`, if it exists.
    pub fn style(&self, element: ElementKey) -> Option<&ComputedStyle> {
        self.nodes.get(&element).map(|node| &node.style)
    }

    /// Children of `element` in tree order; empty for unknown keys.
    pub fn children(&self, element: ElementKey) -> &[ElementKey] {
        self.nodes
            .get(&element)
            .map_or(&[], |node| node.children.as_slice())
    }
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if insertion does not preserve tree order or reports the
    /// wrong parentage errors.
    fn insert_preserves_order_and_validates_parent() {
        let mut tree = ElementTree::new();
        let root = tree.root();
        let first = tree.insert(root, ComputedStyle::default()).unwrap();
        let second = tree.insert(root, ComputedStyle::default()).unwrap();
        assert_eq!(tree.children(root), &[first, second]);
        assert!(tree.children(second).is_empty());

        let missing = ElementKey(999);
        assert!(tree.insert(missing, ComputedStyle::default()).is_err());
        assert!(tree.set_style(missing, ComputedStyle::default()).is_err());
        assert!(tree.style(missing).is_none());
    }
}
