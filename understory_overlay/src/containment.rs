// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subtree containment over a host-provided parent relation.
//!
//! Outside-interaction dismissal needs one question answered: is the event
//! target inside this subtree? Hosts answer it by implementing
//! [`ParentLookup`] over their node tree (or by using [`ParentMap`]).
//!
//! ```
//! use understory_overlay::containment::{ParentMap, is_within};
//!
//! let mut tree = ParentMap::new();
//! tree.insert("icon", "button");
//! tree.insert("button", "toolbar");
//!
//! assert!(is_within(&tree, "icon", "button"));
//! assert!(is_within(&tree, "button", "button"));
//! assert!(!is_within(&tree, "toolbar", "button"));
//! ```

use core::hash::Hash;

use hashbrown::HashMap;

/// Guards against cyclic parent links.
const MAX_DEPTH: usize = 1 << 16;

/// Resolve the parent of a node, if any.
pub trait ParentLookup<K> {
    /// Parent of `node`, or `None` for roots and unknown nodes.
    fn parent_of(&self, node: K) -> Option<K>;
}

impl<K, F> ParentLookup<K> for F
where
    F: Fn(K) -> Option<K>,
{
    fn parent_of(&self, node: K) -> Option<K> {
        self(node)
    }
}

/// Returns `true` if `node` is `root` or one of its descendants.
pub fn is_within<K, T>(tree: &T, node: K, root: K) -> bool
where
    K: Copy + Eq,
    T: ParentLookup<K> + ?Sized,
{
    let mut current = Some(node);
    let mut depth = 0;
    while let Some(n) = current {
        if n == root {
            return true;
        }
        depth += 1;
        if depth > MAX_DEPTH {
            return false;
        }
        current = tree.parent_of(n);
    }
    false
}

/// A child → parent table.
#[derive(Clone, Debug)]
pub struct ParentMap<K> {
    parents: HashMap<K, K>,
}

impl<K: Copy + Eq + Hash> ParentMap<K> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parents: HashMap::new(),
        }
    }

    /// Records `parent` as the parent of `child`, replacing any previous parent.
    pub fn insert(&mut self, child: K, parent: K) -> Option<K> {
        self.parents.insert(child, parent)
    }

    /// Detaches `child` from its parent.
    pub fn remove(&mut self, child: K) -> Option<K> {
        self.parents.remove(&child)
    }

    /// Number of recorded parent links.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns `true` if no links are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

impl<K: Copy + Eq + Hash> Default for ParentMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash> ParentLookup<K> for ParentMap<K> {
    fn parent_of(&self, node: K) -> Option<K> {
        self.parents.get(&node).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> ParentMap<u32> {
        // 1
        // ├── 2
        // │   └── 3
        // └── 4
        let mut t = ParentMap::new();
        t.insert(2, 1);
        t.insert(3, 2);
        t.insert(4, 1);
        t
    }

    #[test]
    fn node_is_within_itself() {
        assert!(is_within(&tree(), 3, 3));
    }

    #[test]
    fn descendants_are_within_ancestors() {
        let t = tree();
        assert!(is_within(&t, 3, 2));
        assert!(is_within(&t, 3, 1));
        assert!(is_within(&t, 4, 1));
    }

    #[test]
    fn siblings_and_ancestors_are_outside() {
        let t = tree();
        assert!(!is_within(&t, 4, 2));
        assert!(!is_within(&t, 1, 2));
        assert!(!is_within(&t, 99, 1));
    }

    #[test]
    fn closures_act_as_lookups() {
        let lookup = |n: u32| if n > 0 { Some(n - 1) } else { None };
        assert!(is_within(&lookup, 5, 0));
        assert!(!is_within(&lookup, 5, 6));
    }

    #[test]
    fn cycles_terminate() {
        let mut t = ParentMap::new();
        t.insert(1_u32, 2);
        t.insert(2, 1);
        assert!(!is_within(&t, 1, 3));
    }

    #[test]
    fn remove_detaches_subtree() {
        let mut t = tree();
        assert_eq!(t.remove(2), Some(1));
        assert!(!is_within(&t, 3, 1));
        assert_eq!(t.len(), 2);
    }
}
