use crate::list::{LinkedList, Mode};
use crate::node::{Link, NodeId};

impl<N: Link> LinkedList<N> {
    /// Reduce `index` to the addressable span of a ring.
    ///
    /// In [`Mode::Ring`] this is `index` modulo `len + 1` (Euclidean, so the
    /// result always lies in `0..=len`): a ring of length *n* has the *n*
    /// node positions plus the slot after `last`. In [`Mode::Linear`] the
    /// index is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{DataNode, LinkedList};
    ///
    /// let mut list: LinkedList<_> = (0..3).map(DataNode::new).collect();
    /// assert_eq!(list.to_modular_index(5), 5);
    ///
    /// list.set_connected(true);
    /// assert_eq!(list.to_modular_index(5), 1);
    /// assert_eq!(list.to_modular_index(-1), 3);
    /// ```
    pub fn to_modular_index(&self, index: isize) -> isize {
        match self.mode {
            Mode::Ring => index.rem_euclid(self.len as isize + 1),
            Mode::Linear => index,
        }
    }

    /// Resolve the position `insert` splices at, in `0..=len`.
    pub(crate) fn insert_position(&self, index: isize) -> Option<usize> {
        let index = self.to_modular_index(index);
        let len = self.len as isize;
        let pos = if index < 0 { len + index + 1 } else { index };
        (0..=len).contains(&pos).then(|| pos as usize)
    }

    /// Resolve the position of an existing node, in `0..len`.
    ///
    /// A ring reduces `index` modulo `len` first, then passes it through
    /// [`to_modular_index`](LinkedList::to_modular_index).
    pub(crate) fn get_position(&self, index: isize) -> Option<usize> {
        let len = self.len as isize;
        let pos = match self.mode {
            Mode::Ring if len == 0 => return None,
            Mode::Ring => self.to_modular_index(index.rem_euclid(len)),
            Mode::Linear if index < 0 => len + index,
            Mode::Linear => index,
        };
        (0..len).contains(&pos).then(|| pos as usize)
    }

    /// Find the node at `pos`, walking from `first` if `pos` lies in the front
    /// half of the list and from `last` otherwise.
    pub(crate) fn walk(&self, pos: usize) -> Option<NodeId> {
        if pos >= self.len {
            return None;
        }
        if pos < self.len - pos {
            let mut id = self.first?;
            for _ in 0..pos {
                id = self.link(id).head()?;
            }
            Some(id)
        } else {
            let mut id = self.last?;
            for _ in 0..self.len - pos - 1 {
                id = self.link(id).tail()?;
            }
            Some(id)
        }
    }
}
