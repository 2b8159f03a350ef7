//! This crate provides a doubly-linked list whose two ends can be linked to
//! each other, turning it into a ring.
//!
//! The [`LinkedList`] supports positional insertion, removal, lookup and
//! replacement, search by predicate or by identity, and iteration. Nodes are
//! supplied by the caller: any type implementing [`Link`] can be stored, and
//! [`DataNode`] is the ready-made one carrying a payload.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use ring_list::{DataNode, LinkedList};
//!
//! let mut list = LinkedList::new();
//! for i in 0..=6 {
//!     list.append(DataNode::new(f64::from(i)));
//! }
//! list.insert(2, DataNode::new(1.5)).unwrap();
//! list.append(DataNode::new(10.0));
//! list.prepend(DataNode::new(-1.0));
//! assert_eq!(list.to_string(), "-1, 0, 1, 1.5, 2, 3, 4, 5, 6, 10");
//!
//! list.set_connected(true); // link the last node back to the first one
//!
//! // 11 mod (10 + 1) = 0, so this goes to the front
//! list.insert(11, DataNode::new(11.0)).unwrap();
//! assert_eq!(list.to_string(), "11, -1, 0, 1, 1.5, 2, 3, 4, 5, 6, 10");
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!                          (only in ring mode)
//!      ┌┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┐
//!      ↓                                                              ┊
//! ╔═══════════╗           ╔═══════════╗                        ╔═══════════╗
//! ║   head    ║ ────────→ ║   head    ║ ────────→ ┄┄ ────────→ ║   head    ║
//! ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ╟───────────╢
//! ║   tail    ║ ←──────── ║   tail    ║ ←──────── ┄┄ ←──────── ║   tail    ║
//! ╟───────────╢           ╟───────────╢                        ╟───────────╢
//! ║ payload   ║           ║ payload   ║                        ║ payload   ║
//! ╚═══════════╝           ╚═══════════╝                        ╚═══════════╝
//!   Node 0 ┊                Node 1                                Node N-1 ↑
//!      ↑   └┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┘
//!      │                                                                   │
//! ╔═══════════╗                                                            │
//! ║   first   ║                                                            │
//! ╟───────────╢                                                            │
//! ║   last    ║ ───────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║ len, mode ║
//! ╚═══════════╝
//!     List
//! ```
//!
//! Nodes live in an arena owned by the list, and the `head`/`tail` relations
//! are [`NodeId`]s rather than pointers. Inserting a node moves it into the
//! arena and hands back its id; removing it moves it back out to the caller.
//!
//! In a list with length *n*, the nodes are indexed by 0, 1, ..., *n* - 1.
//! Negative indices count from the end.
//!
//! # Ring Mode
//!
//! [`LinkedList::set_connected`] switches between [`Mode::Linear`] and
//! [`Mode::Ring`]. In ring mode `last.head` is `first` and `first.tail` is
//! `last`, and positional operations wrap their index instead of rejecting
//! it (see [`LinkedList::to_modular_index`]).
//!
//! ## Examples
//!
//! ```
//! use ring_list::{DataNode, Link, LinkedList};
//!
//! let mut list: LinkedList<_> = ['A', 'B', 'C'].into_iter().map(DataNode::new).collect();
//! assert!(list.get(4).is_err());
//!
//! list.set_connected(true);
//! assert_eq!(list.get(4).unwrap().data(), &'B');
//!
//! let first = list.first_id();
//! assert_eq!(list.last().and_then(Link::head), first);
//! ```
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`Ids`] iterators. They are
//! double-ended and iterate the list like an array (fused and non-cyclic),
//! in both modes.
//!
//! ## Examples
//!
//! ```
//! use ring_list::{DataNode, LinkedList};
//!
//! let mut list: LinkedList<_> = (1..=3).map(DataNode::new).collect();
//! list.set_connected(true);
//!
//! let doubled: Vec<i32> = list.iter().map(|node| node.data() * 2).collect();
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```
//!
//! [`LinkedList`]: crate::LinkedList
//! [`Iter`]: crate::Iter
//! [`Ids`]: crate::Ids

#[doc(inline)]
pub use error::{IndexError, Result};
#[doc(inline)]
pub use list::iterator::{Ids, Iter};
#[doc(inline)]
pub use list::{CircularLinkedList, LinkedList, Mode};
#[doc(inline)]
pub use node::{DataNode, Link, Node, NodeId};

pub mod list;
pub mod node;

mod error;
