use std::fmt::{Debug, Formatter};
use std::ops::Index;

use slab::Slab;

use crate::error::{IndexError, Result};
use crate::node::{Link, NodeId};
use crate::{Ids, Iter};

pub mod iterator;

mod algorithms;
mod index;

/// How the two ends of a [`LinkedList`] relate to each other.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// `first.tail` and `last.head` are absent.
    #[default]
    Linear,
    /// `last.head == first` and `first.tail == last`, and positional
    /// operations reduce their index modularly.
    Ring,
}

/// The `LinkedList` is a doubly-linked list whose nodes are stored in an arena
/// owned by the list, and whose relations are [`NodeId`]s kept inside the
/// nodes themselves (see [`Link`]).
///
/// It runs in one of two [`Mode`]s. In [`Mode::Linear`] the chain has two
/// open ends. In [`Mode::Ring`] the last node links back to the first one,
/// and positional operations wrap their index around the length of the list.
/// The mode is switched with [`set_connected`](LinkedList::set_connected).
///
/// Accessing a position walks the chain from whichever end is closer, so it
/// takes *O*(*n*) time with a worst case of *n* / 2 steps.
///
/// The `LinkedList` contains:
/// - the node arena;
/// - `first` and `last`, the ids of both ends of the chain (absent when empty);
/// - the length `len` of the chain;
/// - the current `mode`.
///
/// # Index Conventions
///
/// - `get`, `remove`, `set`: `0..len`, negative indices count from the end
///   (`-1` is the last node);
/// - `insert`: `0..=len`, negative indices count slots from the end (`-1` is
///   the slot after the last node, so it appends).
pub struct LinkedList<N> {
    nodes: Slab<Slot<N>>,
    /// the id of the head-most node
    pub(crate) first: Option<NodeId>,
    /// the id of the tail-most node
    pub(crate) last: Option<NodeId>,
    /// the length of the list
    pub(crate) len: usize,
    pub(crate) mode: Mode,
}

/// A [`LinkedList`] meant to be toggled into [`Mode::Ring`].
///
/// Both names refer to the same type: ring behaviour is a mode of the list,
/// not a separate container.
pub type CircularLinkedList<N> = LinkedList<N>;

/// An arena entry: the node and the stamp of the id it was inserted under.
struct Slot<N> {
    stamp: u64,
    node: N,
}

// private methods
impl<N: Link> LinkedList<N> {
    pub(crate) fn link(&self, id: NodeId) -> &N {
        &self.nodes[id.key].node
    }

    fn link_mut(&mut self, id: NodeId) -> &mut N {
        &mut self.nodes[id.key].node
    }

    fn connect(&mut self, prev: NodeId, next: NodeId) {
        self.link_mut(prev).set_head(Some(next));
        self.link_mut(next).set_tail(Some(prev));
    }

    /// Link `last` back to `first` if the list is in ring mode.
    fn close_ring(&mut self) {
        if let (Mode::Ring, Some(first), Some(last)) = (self.mode, self.first, self.last) {
            self.connect(last, first);
        }
    }

    /// Clear the wrap links between `last` and `first`.
    fn open_ring(&mut self) {
        if let (Some(first), Some(last)) = (self.first, self.last) {
            self.link_mut(last).set_head(None);
            self.link_mut(first).set_tail(None);
        }
    }

    /// Run a linear splicing step `f` on the opened chain, and close the ring
    /// again afterwards if the list is in ring mode.
    fn opened<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let ring = self.mode == Mode::Ring;
        if ring {
            self.open_ring();
        }
        let ret = f(self);
        if ring {
            self.close_ring();
        }
        self.check();
        ret
    }

    /// Attach `node` between `tail` and `head`, where `None` stands for the
    /// open end of the chain.
    ///
    /// The chain must be open, and `tail` and `head` must be adjacent (checked
    /// only in `#[cfg(debug_assertions)]`).
    fn attach(&mut self, tail: Option<NodeId>, mut node: N, head: Option<NodeId>) -> NodeId {
        #[cfg(debug_assertions)]
        if let (Some(tail), Some(head)) = (tail, head) {
            assert_adjacent(self, tail, head);
        }
        node.set_tail(tail);
        node.set_head(head);
        let entry = self.nodes.vacant_entry();
        let id = NodeId::fresh(entry.key());
        entry.insert(Slot {
            stamp: id.stamp,
            node,
        });
        match tail {
            Some(tail) => self.link_mut(tail).set_head(Some(id)),
            None => self.first = Some(id),
        }
        match head {
            Some(head) => self.link_mut(head).set_tail(Some(id)),
            None => self.last = Some(id),
        }
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            if let Some(tail) = tail {
                assert_adjacent(self, tail, id);
            }
            if let Some(head) = head {
                assert_adjacent(self, id, head);
            }
        }
        id
    }

    /// Detach the node `id` from the chain by linking its neighbours to each
    /// other, and move it out of the arena. Its own relations are left as
    /// they were.
    ///
    /// The chain must be open.
    fn detach(&mut self, id: NodeId) -> N {
        let (tail, head) = {
            let node = self.link(id);
            (node.tail(), node.head())
        };
        match tail {
            Some(tail) => self.link_mut(tail).set_head(head),
            None => self.first = head,
        }
        match head {
            Some(head) => self.link_mut(head).set_tail(tail),
            None => self.last = tail,
        }
        self.len -= 1;
        #[cfg(debug_assertions)]
        if let (Some(tail), Some(head)) = (tail, head) {
            assert_adjacent(self, tail, head);
        }
        self.nodes.remove(id.key).node
    }

    /// The neighbours a node inserted at `pos` will have, or `None` if `pos`
    /// is past the end of the list.
    fn insert_neighbours(&self, pos: usize) -> Option<(Option<NodeId>, Option<NodeId>)> {
        if pos == 0 {
            Some((None, self.first))
        } else if pos == self.len {
            Some((self.last, None))
        } else {
            let before = self.walk(pos - 1)?;
            Some((Some(before), self.link(before).head()))
        }
    }

    #[inline]
    fn check(&self) {
        #[cfg(feature = "check-invariants")]
        self.assert_invariants();
    }
}

impl<N> LinkedList<N> {
    /// Create an empty `LinkedList` in [`Mode::Linear`].
    ///
    /// # Examples
    /// ```
    /// use ring_list::{LinkedList, Node};
    /// let list: LinkedList<Node> = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty `LinkedList` with room for `capacity` nodes before the
    /// arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            first: None,
            last: None,
            len: 0,
            mode: Mode::Linear,
        }
    }

    /// Returns `true` if the `LinkedList` is empty.
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length of the `LinkedList`.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{DataNode, LinkedList};
    ///
    /// let mut list = LinkedList::new();
    /// list.append(DataNode::new('a'));
    /// list.prepend(DataNode::new('b'));
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The current mode of the list.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns `true` if the list is in [`Mode::Ring`].
    #[inline]
    pub fn connected(&self) -> bool {
        self.mode == Mode::Ring
    }

    /// Removes all nodes from the `LinkedList`, keeping its mode.
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn clear(&mut self) {
        tracing::trace!(len = self.len, "clearing list");
        self.nodes.clear();
        self.first = None;
        self.last = None;
        self.len = 0;
    }
}

impl<N: Link> LinkedList<N> {
    /// Switch the list between [`Mode::Linear`] and [`Mode::Ring`].
    ///
    /// Connecting a non-empty list links its last node to its first one
    /// (`last.head = first`, `first.tail = last`); disconnecting clears both
    /// of these links again. Every other relation is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{DataNode, Link, LinkedList, Mode};
    ///
    /// let mut list = LinkedList::new();
    /// let a = list.append(DataNode::new('A'));
    /// list.append(DataNode::new('B'));
    /// let c = list.append(DataNode::new('C'));
    ///
    /// list.set_connected(true);
    /// assert_eq!(list.mode(), Mode::Ring);
    /// assert_eq!(list.node(c).unwrap().head(), Some(a));
    /// assert_eq!(list.node(a).unwrap().tail(), Some(c));
    ///
    /// list.set_connected(false);
    /// assert_eq!(list.node(c).unwrap().head(), None);
    /// assert_eq!(list.node(a).unwrap().tail(), None);
    /// ```
    pub fn set_connected(&mut self, connected: bool) {
        if connected {
            self.mode = Mode::Ring;
            self.close_ring();
        } else {
            self.open_ring();
            self.mode = Mode::Linear;
        }
        tracing::trace!(connected, len = self.len, "switched list mode");
        self.check();
    }

    /// Provides a reference to the first node, or `None` if the list is empty.
    #[inline]
    pub fn first(&self) -> Option<&N> {
        self.first.map(|id| self.link(id))
    }

    /// Provides a reference to the last node, or `None` if the list is empty.
    #[inline]
    pub fn last(&self) -> Option<&N> {
        self.last.map(|id| self.link(id))
    }

    #[inline]
    pub fn first_id(&self) -> Option<NodeId> {
        self.first
    }

    #[inline]
    pub fn last_id(&self) -> Option<NodeId> {
        self.last
    }

    /// Look a linked node up by its id.
    ///
    /// Returns `None` if no node with this id is linked in the list, which
    /// includes ids of removed nodes and ids handed out by other lists.
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&N> {
        self.nodes
            .get(id.key)
            .filter(|slot| slot.stamp == id.stamp)
            .map(|slot| &slot.node)
    }

    /// Mutable counterpart of [`node`](LinkedList::node).
    ///
    /// The node's relations must not be rewritten through this reference.
    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut N> {
        self.nodes
            .get_mut(id.key)
            .filter(|slot| slot.stamp == id.stamp)
            .map(|slot| &mut slot.node)
    }

    /// Splice `node` into the list so that it ends up at position `index`,
    /// and return its id.
    ///
    /// In [`Mode::Linear`] the valid range of `index` is `0..=len`, and a
    /// negative `index` is normalized as `len + index + 1`: `-1` appends and
    /// `-(len + 1)` prepends. In [`Mode::Ring`] the index is first reduced
    /// by [`to_modular_index`](LinkedList::to_modular_index), so every index
    /// is valid.
    ///
    /// The relations `node` carried are overwritten.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] if `index` is out of range. The list is left
    /// unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{DataNode, LinkedList};
    ///
    /// let mut list: LinkedList<_> = (1..=3).map(DataNode::new).collect();
    ///
    /// list.insert(2, DataNode::new(4)).unwrap();
    /// list.insert(-1, DataNode::new(5)).unwrap();
    /// assert_eq!(list.to_string(), "1, 2, 4, 3, 5");
    ///
    /// assert!(list.insert(6, DataNode::new(6)).is_err());
    /// assert!(list.insert(-7, DataNode::new(6)).is_err());
    /// assert_eq!(list.len(), 5);
    /// ```
    pub fn insert(&mut self, index: isize, node: N) -> Result<NodeId> {
        let (tail, head) = self
            .insert_position(index)
            .and_then(|pos| self.insert_neighbours(pos))
            .ok_or_else(|| IndexError::new(index, self.len))?;
        Ok(self.opened(|list| list.attach(tail, node, head)))
    }

    /// Adds a node at the end of the list, as `insert(len, node)` does.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn append(&mut self, node: N) -> NodeId {
        let tail = self.last;
        self.opened(|list| list.attach(tail, node, None))
    }

    /// Adds a node at the front of the list, as `insert(0, node)` does.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn prepend(&mut self, node: N) -> NodeId {
        let head = self.first;
        self.opened(|list| list.attach(None, node, head))
    }

    /// Removes the node at position `index` and returns it.
    ///
    /// The position is resolved like [`get`](LinkedList::get) does, after the
    /// index has gone through [`to_modular_index`](LinkedList::to_modular_index).
    /// In [`Mode::Linear`] the valid range is `-len..len`.
    ///
    /// The returned node still carries its old relations.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] if the list is empty or `index` is out of
    /// range.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{DataNode, LinkedList};
    ///
    /// let mut list: LinkedList<_> = (0..3).map(DataNode::new).collect();
    ///
    /// assert_eq!(list.remove(1).unwrap().into_data(), 1);
    /// assert_eq!(list.remove(-1).unwrap().into_data(), 2);
    /// assert!(list.remove(1).is_err());
    /// assert_eq!(list.to_string(), "0");
    /// ```
    pub fn remove(&mut self, index: isize) -> Result<N> {
        let id = self
            .get_position(self.to_modular_index(index))
            .and_then(|pos| self.walk(pos))
            .ok_or_else(|| IndexError::new(index, self.len))?;
        Ok(self.opened(|list| list.detach(id)))
    }

    /// Removes the last node and returns it, as `remove(-1)` does.
    ///
    /// In [`Mode::Ring`], `-1` maps to the slot `len`, which wraps around to
    /// the first node, so that is the one removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{DataNode, LinkedList};
    ///
    /// let mut list: LinkedList<_> = (0..3).map(DataNode::new).collect();
    /// assert_eq!(list.pop().unwrap().into_data(), 2);
    ///
    /// list.set_connected(true);
    /// assert_eq!(list.pop().unwrap().into_data(), 0);
    /// ```
    pub fn pop(&mut self) -> Result<N> {
        self.remove(-1)
    }

    /// Returns the node at position `index`.
    ///
    /// A negative `index` counts from the end (`len + index`). In
    /// [`Mode::Linear`] the normalized index must lie in `0..len`; in
    /// [`Mode::Ring`] it is reduced modulo `len` and then passed through
    /// [`to_modular_index`](LinkedList::to_modular_index).
    ///
    /// The chain is walked from `first` if the position lies in the front
    /// half of the list, and from `last` otherwise.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] if the list is empty or `index` is out of
    /// range.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{DataNode, LinkedList};
    ///
    /// let mut list: LinkedList<_> = "abc".chars().map(DataNode::new).collect();
    ///
    /// assert_eq!(list.get(0).unwrap().data(), &'a');
    /// assert_eq!(list.get(-1).unwrap().data(), &'c');
    /// assert!(list.get(3).is_err());
    ///
    /// list.set_connected(true);
    /// assert_eq!(list.get(4).unwrap().data(), &'b');
    /// ```
    pub fn get(&self, index: isize) -> Result<&N> {
        let id = self.id_at(index)?;
        Ok(self.link(id))
    }

    /// Mutable counterpart of [`get`](LinkedList::get).
    ///
    /// The node's relations must not be rewritten through this reference.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut N> {
        let id = self.id_at(index)?;
        Ok(self.link_mut(id))
    }

    /// Returns the id of the node at position `index`, resolved the way
    /// [`get`](LinkedList::get) resolves it.
    pub fn id_at(&self, index: isize) -> Result<NodeId> {
        self.get_position(index)
            .and_then(|pos| self.walk(pos))
            .ok_or_else(|| IndexError::new(index, self.len))
    }

    /// Replaces the node at position `index` with `node`, returning the
    /// replaced one.
    ///
    /// This is a removal followed by an insertion at the same index, so
    /// `node` gets a fresh id.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] if there is no node at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{DataNode, LinkedList};
    ///
    /// let mut list: LinkedList<_> = (0..3).map(DataNode::new).collect();
    ///
    /// assert_eq!(list.set(1, DataNode::new(10)).unwrap().into_data(), 1);
    /// assert_eq!(list.set(-1, DataNode::new(20)).unwrap().into_data(), 2);
    /// assert_eq!(list.to_string(), "0, 10, 20");
    /// ```
    pub fn set(&mut self, index: isize, node: N) -> Result<N> {
        let index = self.to_modular_index(index);
        let replaced = self.remove(index)?;
        // After removing at `index`, the same index is an insertion slot of
        // the shorter list in both modes.
        let inserted = self.insert(index, node);
        debug_assert!(inserted.is_ok(), "no insertion slot at {}", index);
        Ok(replaced)
    }

    /// Returns an iterator over the nodes, from `first` to `last`.
    ///
    /// The iterator stops after `last` in both modes.
    #[inline]
    pub fn iter(&self) -> Iter<'_, N> {
        Iter::new(self)
    }

    /// Returns an iterator over the ids of the nodes, from `first` to `last`.
    #[inline]
    pub fn ids(&self) -> Ids<'_, N> {
        Ids::new(self)
    }
}

impl<N: Link> Index<isize> for LinkedList<N> {
    type Output = N;

    /// # Panics
    ///
    /// Panics if `index` is out of range (see [`LinkedList::get`]).
    fn index(&self, index: isize) -> &N {
        match self.get(index) {
            Ok(node) => node,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<N: Link + Debug> Debug for LinkedList<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<N> Default for LinkedList<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(debug_assertions)]
fn assert_adjacent<N: Link>(list: &LinkedList<N>, tail: NodeId, head: NodeId) {
    assert_eq!(list.link(tail).head(), Some(head));
    assert_eq!(list.link(head).tail(), Some(tail));
}
