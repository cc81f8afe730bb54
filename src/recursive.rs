//! A BST of owned nodes, mutated in place. Every operation recurses down
//! the tree; the mutating ones hand each child slot to the recursive call
//! by value and reassign the slot to whatever comes back. This is how new
//! nodes get attached and removed nodes get spliced out without any
//! parent pointers.
//!
//! # Examples
//!
//! ```
//! use ordtree::recursive::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.insert(1);
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Inserting the same key again changes nothing.
//! tree.insert(1);
//! assert_eq!(tree.in_order(), [&1]);
//!
//! tree.delete(&1);
//! assert_eq!(tree.find(&1), None);
//! ```

use std::cmp::Ordering;

/// An owning, possibly empty child slot.
type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree storing a set of keys. This can be used for
/// inserting, finding, and deleting keys and for walking all keys in
/// ascending order. Keys are unique: inserting a key that is already
/// present leaves the tree unchanged.
///
/// The tree does no rebalancing, so its height (and with it the cost of
/// every operation) depends on the insertion order. See the [crate
/// docs](crate) for details.
#[derive(Clone, Debug)]
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree stores no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl<K> Tree<K>
where
    K: Ord,
{
    /// Inserts the given key into the tree. Inserting a key that is
    /// already present leaves the tree unchanged; this is not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.find(&1), Some(&1));
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.in_order(), [&1]);
    /// ```
    pub fn insert(&mut self, key: K) {
        self.root = Node::insert(self.root.take(), key);
    }

    /// Potentially finds the stored key equal to the given key. If no
    /// node has the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&K> {
        self.root.as_deref().and_then(|n| n.find(key))
    }

    /// Deletes the node containing the given key from the tree. If the
    /// tree does not contain a node with the key, nothing happens.
    ///
    /// When the deleted node has two children, its in-order successor
    /// (the smallest key in its right subtree) takes its place. The
    /// successor, never the predecessor.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.delete(&1);
    ///
    /// assert_eq!(tree.find(&1), None);
    ///
    /// // Deleting a key that isn't there is fine too.
    /// tree.delete(&42);
    /// ```
    pub fn delete(&mut self, key: &K) {
        self.root = Node::delete(self.root.take(), key);
    }

    /// Returns references to all stored keys in ascending order. The
    /// whole tree is walked before this returns; an empty tree gives an
    /// empty `Vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 3, 1] {
    ///     tree.insert(key);
    /// }
    ///
    /// assert_eq!(tree.in_order(), [&1, &2, &3]);
    /// ```
    pub fn in_order(&self) -> Vec<&K> {
        let mut keys = Vec::new();
        if let Some(root) = self.root.as_deref() {
            root.push_in_order(&mut keys);
        }
        keys
    }
}

/// A stored key and its two child subtrees. Every key in `left` is less
/// than `key` and every key in `right` is greater.
#[derive(Clone, Debug)]
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// In-order walk: left subtree, this key, right subtree.
    fn push_in_order<'a>(&'a self, keys: &mut Vec<&'a K>) {
        if let Some(left) = self.left.as_deref() {
            left.push_in_order(keys);
        }
        keys.push(&self.key);
        if let Some(right) = self.right.as_deref() {
            right.push_in_order(keys);
        }
    }
}

impl<K> Node<K>
where
    K: Ord,
{
    /// Inserts `key` into the subtree rooted at `link` and returns the new
    /// subtree root. An absent slot becomes a fresh leaf; a key that is
    /// already present is left alone.
    fn insert(link: Link<K>, key: K) -> Link<K> {
        let mut node = match link {
            None => return Some(Self::new(key)),
            Some(node) => node,
        };
        match key.cmp(&node.key) {
            Ordering::Less => node.left = Self::insert(node.left.take(), key),
            Ordering::Equal => {}
            Ordering::Greater => node.right = Self::insert(node.right.take(), key),
        }
        Some(node)
    }

    fn find(&self, key: &K) -> Option<&K> {
        match key.cmp(&self.key) {
            Ordering::Less => self.left.as_deref().and_then(|n| n.find(key)),
            Ordering::Equal => Some(&self.key),
            Ordering::Greater => self.right.as_deref().and_then(|n| n.find(key)),
        }
    }

    /// Deletes `key` from the subtree rooted at `link` and returns the new
    /// subtree root. Exactly one node is dropped when the key is present;
    /// none when it isn't.
    fn delete(link: Link<K>, key: &K) -> Link<K> {
        let mut node = link?;
        match key.cmp(&node.key) {
            Ordering::Less => node.left = Self::delete(node.left.take(), key),
            Ordering::Greater => node.right = Self::delete(node.right.take(), key),
            Ordering::Equal => {
                return match (node.left.take(), node.right.take()) {
                    // At most one child: that child (or nothing) takes
                    // this node's place.
                    (None, right) => right,
                    (left, None) => left,
                    // Two children: the in-order successor's key moves
                    // into this node and the node that held it is the one
                    // that actually goes away.
                    (left, Some(right)) => {
                        let (successor, rest) = Self::delete_smallest(right);
                        node.key = successor;
                        node.left = left;
                        node.right = rest;
                        Some(node)
                    }
                };
            }
        }
        Some(node)
    }

    /// Unlinks the smallest node of the subtree and returns its key along
    /// with whatever remains of the subtree.
    fn delete_smallest(mut node: Box<Self>) -> (K, Link<K>) {
        match node.left.take() {
            None => {
                let node = *node;
                (node.key, node.right)
            }
            Some(left) => {
                let (smallest, rest) = Self::delete_smallest(left);
                node.left = rest;
                (smallest, Some(node))
            }
        }
    }
}
