//! Pickup-distance-keyed binary search tree.

use crate::models::Load;

type Link = Option<Box<Node>>;

#[derive(Debug)]
struct Node {
    key: f64,
    load: usize,
    left: Link,
    right: Link,
}

/// An ordered index over loads, keyed by depot-to-pickup distance.
///
/// Stores indices into the caller's load slice. The tree is unbalanced by
/// design: insertion order dictates shape, and worst-case depth is linear.
/// Equal keys route to the left subtree.
///
/// `search` is a best-effort approximation, not a metric nearest-neighbor
/// query: when the key is absent it returns the last node visited on the
/// descent path.
///
/// # Examples
///
/// ```
/// use load_dispatch::index::LoadIndex;
/// use load_dispatch::models::{Load, Point};
///
/// let loads = vec![
///     Load::new("1", Point::new(5.0, 0.0), Point::new(6.0, 0.0)),
///     Load::new("2", Point::new(1.0, 0.0), Point::new(2.0, 0.0)),
/// ];
/// let mut index = LoadIndex::from_loads(&loads);
/// assert_eq!(index.min(), Some(1));
/// assert!(index.remove(loads[1].distance_to_pickup(), 1));
/// assert_eq!(index.min(), Some(0));
/// ```
#[derive(Debug, Default)]
pub struct LoadIndex {
    root: Link,
    len: usize,
}

impl LoadIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds an index over all loads, inserting in slice order.
    pub fn from_loads(loads: &[Load]) -> Self {
        let mut index = Self::new();
        for (i, load) in loads.iter().enumerate() {
            index.insert(load.distance_to_pickup(), i);
        }
        index
    }

    /// Number of loads in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the index holds no loads.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a load index under the given key. Ties route left.
    pub fn insert(&mut self, key: f64, load: usize) {
        insert_link(&mut self.root, key, load);
        self.len += 1;
    }

    /// Load with the globally smallest key, or `None` if the index is empty.
    pub fn min(&self) -> Option<usize> {
        let mut current = self.root.as_deref()?;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        Some(current.load)
    }

    /// Descends comparing the query key against node keys.
    ///
    /// An exact key match returns that node's load. Otherwise the last node
    /// visited before falling off the tree is returned — the structural
    /// neighbor along the search path. `None` only when the index is empty.
    pub fn search(&self, key: f64) -> Option<usize> {
        let mut current = self.root.as_deref();
        let mut previous = None;
        while let Some(node) = current {
            previous = Some(node.load);
            if node.key < key {
                current = node.right.as_deref();
            } else if key < node.key {
                current = node.left.as_deref();
            } else {
                return Some(node.load);
            }
        }
        previous
    }

    /// Removes the given load from the index.
    ///
    /// Standard BST deletion: a node with two children is replaced by its
    /// in-order successor. Among equal keys the load index disambiguates,
    /// so exactly the requested load leaves the tree. Returns `false` if
    /// the load was not present.
    pub fn remove(&mut self, key: f64, load: usize) -> bool {
        let removed = remove_link(&mut self.root, key, load);
        if removed {
            self.len -= 1;
        }
        removed
    }
}

fn insert_link(link: &mut Link, key: f64, load: usize) {
    match link {
        None => {
            *link = Some(Box::new(Node {
                key,
                load,
                left: None,
                right: None,
            }));
        }
        Some(node) => {
            if node.key < key {
                insert_link(&mut node.right, key, load);
            } else {
                insert_link(&mut node.left, key, load);
            }
        }
    }
}

fn min_entry(mut node: &Node) -> (f64, usize) {
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    (node.key, node.load)
}

fn remove_link(link: &mut Link, key: f64, load: usize) -> bool {
    let Some(node) = link.as_mut() else {
        return false;
    };

    if node.key < key {
        return remove_link(&mut node.right, key, load);
    }
    if key < node.key {
        return remove_link(&mut node.left, key, load);
    }
    if node.load != load {
        // Ties insert left, but a successor splice can leave an equal key
        // in the right subtree; check both sides.
        if remove_link(&mut node.left, key, load) {
            return true;
        }
        return remove_link(&mut node.right, key, load);
    }

    if node.left.is_some() && node.right.is_some() {
        // Splice in the in-order successor, then remove its original slot.
        let (succ_key, succ_load) = min_entry(node.right.as_deref().expect("right child present"));
        node.key = succ_key;
        node.load = succ_load;
        return remove_link(&mut node.right, succ_key, succ_load);
    }

    let mut removed = link.take().expect("matched node present");
    *link = removed.left.take().or_else(|| removed.right.take());
    true
}
