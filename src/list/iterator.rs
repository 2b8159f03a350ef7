use std::fmt;
use std::iter::FusedIterator;

use crate::list::LinkedList;
use crate::node::{Link, NodeId};

/// The not-yet-visited range `front..=back` of a list.
///
/// Iteration ends when `front` and `back` meet, never by running into an absent
/// relation, which is what keeps it finite when the list is a ring.
#[derive(Clone, Copy)]
struct Span {
    front: Option<NodeId>,
    back: Option<NodeId>,
    len: usize,
}

impl Span {
    fn new<N: Link>(list: &LinkedList<N>) -> Self {
        Self {
            front: list.first,
            back: list.last,
            len: list.len,
        }
    }

    fn finish(&mut self) {
        self.front = None;
        self.back = None;
        self.len = 0;
    }

    fn next<N: Link>(&mut self, list: &LinkedList<N>) -> Option<NodeId> {
        let current = self.front?;
        if Some(current) == self.back {
            self.finish();
        } else {
            self.front = list.link(current).head();
            self.len -= 1;
        }
        Some(current)
    }

    fn next_back<N: Link>(&mut self, list: &LinkedList<N>) -> Option<NodeId> {
        let current = self.back?;
        if Some(current) == self.front {
            self.finish();
        } else {
            self.back = list.link(current).tail();
            self.len -= 1;
        }
        Some(current)
    }
}

/// An iterator over the nodes of a `LinkedList`, from `first` to `last`.
///
/// The `Iter` borrows the list immutably, so the chain cannot be changed while
/// it is iterated.
///
/// # Examples
///
/// ```
/// use ring_list::{DataNode, LinkedList};
///
/// let mut list: LinkedList<_> = (1..=3).map(DataNode::new).collect();
/// list.set_connected(true);
///
/// let mut iter = list.iter();
/// assert_eq!(iter.next().map(DataNode::data), Some(&1));
/// assert_eq!(iter.next().map(DataNode::data), Some(&2));
/// assert_eq!(iter.next().map(DataNode::data), Some(&3));
/// assert!(iter.next().is_none()); // Fused, even in a ring
/// assert!(iter.next().is_none());
/// ```
///
/// ```compile_fail
/// use ring_list::{DataNode, LinkedList};
///
/// let mut list: LinkedList<_> = (1..=3).map(DataNode::new).collect();
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.append(DataNode::new(4));
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, N: 'a> {
    list: &'a LinkedList<N>,
    span: Span,
}

impl<'a, N: Link + 'a> Iter<'a, N> {
    pub(crate) fn new(list: &'a LinkedList<N>) -> Self {
        let span = Span::new(list);
        Self { list, span }
    }
}

impl<'a, N: 'a> Clone for Iter<'a, N> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            span: self.span,
        }
    }
}

impl<'a, N: Link + fmt::Debug + 'a> fmt::Debug for Iter<'a, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a, N: Link + 'a> Iterator for Iter<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list;
        self.span.next(list).map(|id| list.link(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.span.len, Some(self.span.len))
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a, N: Link + 'a> DoubleEndedIterator for Iter<'a, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let list = self.list;
        self.span.next_back(list).map(|id| list.link(id))
    }
}

impl<'a, N: Link + 'a> ExactSizeIterator for Iter<'a, N> {}

impl<'a, N: Link + 'a> FusedIterator for Iter<'a, N> {}

/// An iterator over the [`NodeId`]s of a `LinkedList`, from `first` to `last`.
///
/// # Examples
///
/// ```
/// use ring_list::{LinkedList, Node};
///
/// let mut list = LinkedList::new();
/// let a = list.append(Node::new());
/// let b = list.prepend(Node::new());
///
/// assert_eq!(list.ids().collect::<Vec<_>>(), vec![b, a]);
/// assert_eq!(list.ids().rev().collect::<Vec<_>>(), vec![a, b]);
/// ```
pub struct Ids<'a, N: 'a> {
    list: &'a LinkedList<N>,
    span: Span,
}

impl<'a, N: Link + 'a> Ids<'a, N> {
    pub(crate) fn new(list: &'a LinkedList<N>) -> Self {
        let span = Span::new(list);
        Self { list, span }
    }
}

impl<'a, N: 'a> Clone for Ids<'a, N> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            span: self.span,
        }
    }
}

impl<'a, N: Link + 'a> fmt::Debug for Ids<'a, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ids").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a, N: Link + 'a> Iterator for Ids<'a, N> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.span.next(self.list)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.span.len, Some(self.span.len))
    }
}

impl<'a, N: Link + 'a> DoubleEndedIterator for Ids<'a, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.span.next_back(self.list)
    }
}

impl<'a, N: Link + 'a> ExactSizeIterator for Ids<'a, N> {}

impl<'a, N: Link + 'a> FusedIterator for Ids<'a, N> {}

impl<'a, N: Link + 'a> IntoIterator for &'a LinkedList<N> {
    type Item = &'a N;
    type IntoIter = Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
