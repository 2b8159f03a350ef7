use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ring_list::{DataNode, LinkedList, Mode};

use crate::{assert_well_linked, values};

/// Where an index lands for each positional operation, or `None` when it is
/// rejected.
struct Expected {
    len: usize,
    mode: Mode,
}

impl Expected {
    fn insert(&self, index: isize) -> Option<usize> {
        let len = self.len as isize;
        let pos = match self.mode {
            Mode::Ring => index.rem_euclid(len + 1),
            Mode::Linear if index < 0 => len + index + 1,
            Mode::Linear => index,
        };
        (0..=len).contains(&pos).then(|| pos as usize)
    }

    fn get(&self, index: isize) -> Option<usize> {
        let len = self.len as isize;
        let pos = match self.mode {
            Mode::Ring if len == 0 => return None,
            Mode::Ring => index.rem_euclid(len),
            Mode::Linear if index < 0 => len + index,
            Mode::Linear => index,
        };
        (0..len).contains(&pos).then(|| pos as usize)
    }

    fn remove(&self, index: isize) -> Option<usize> {
        match self.mode {
            Mode::Ring => self.get(index.rem_euclid(self.len as isize + 1)),
            Mode::Linear => self.get(index),
        }
    }
}

fn expected(list: &LinkedList<DataNode<u32>>) -> Expected {
    Expected {
        len: list.len(),
        mode: list.mode(),
    }
}

#[test]
fn random_operations_match_a_vec() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..50 {
        let mut list = LinkedList::new();
        let mut model: Vec<u32> = Vec::new();
        for value in 0..200 {
            let index = rng.gen_range(-12..12_isize);
            match rng.gen_range(0..10) {
                0..=3 => match expected(&list).insert(index) {
                    Some(pos) => {
                        let id = list.insert(index, DataNode::new(value)).unwrap();
                        model.insert(pos, value);
                        assert_eq!(list.index_of(id), Some(pos));
                    }
                    None => assert!(list.insert(index, DataNode::new(value)).is_err()),
                },
                4..=5 => match expected(&list).remove(index) {
                    Some(pos) => {
                        let node = list.remove(index).unwrap();
                        assert_eq!(node.into_data(), model.remove(pos));
                    }
                    None => assert!(list.remove(index).is_err()),
                },
                6 => match expected(&list).remove(index) {
                    Some(pos) => {
                        // the new node goes in once the old one is out
                        let shorter = Expected {
                            len: list.len() - 1,
                            mode: list.mode(),
                        };
                        let placed = shorter.insert(list.to_modular_index(index)).unwrap();
                        let node = list.set(index, DataNode::new(value)).unwrap();
                        assert_eq!(node.into_data(), model.remove(pos));
                        model.insert(placed, value);
                    }
                    None => assert!(list.set(index, DataNode::new(value)).is_err()),
                },
                7 => match expected(&list).get(index) {
                    Some(pos) => assert_eq!(list.get(index).unwrap().data(), &model[pos]),
                    None => assert!(list.get(index).is_err()),
                },
                8 => {
                    if rng.gen_bool(0.5) {
                        list.append(DataNode::new(value));
                        model.push(value);
                    } else {
                        list.prepend(DataNode::new(value));
                        model.insert(0, value);
                    }
                }
                _ => list.set_connected(!list.connected()),
            }
            assert_well_linked(&list);
            assert_eq!(values(&list), model);
        }
    }
}

#[test]
fn iteration_and_index_of_agree() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut list = LinkedList::new();
    for value in 0..64 {
        let index = rng.gen_range(0..=list.len() as isize);
        list.insert(index, DataNode::new(value)).unwrap();
        if value % 16 == 0 {
            list.set_connected(!list.connected());
        }
    }
    assert_eq!(list.iter().count(), list.len());
    for (pos, id) in list.ids().enumerate() {
        assert_eq!(list.index_of(id), Some(pos));
    }
}

#[test]
fn insert_then_remove_restores_the_list() {
    for connected in [false, true] {
        let mut list: LinkedList<_> = (0..8).map(DataNode::new).collect();
        list.set_connected(connected);
        let before: Vec<_> = list.ids().collect();
        let links: Vec<_> = before
            .iter()
            .map(|id| {
                let node = list.node(*id).unwrap();
                (ring_list::Link::tail(node), ring_list::Link::head(node))
            })
            .collect();
        for index in 0..8 {
            list.insert(index, DataNode::new(100)).unwrap();
            assert_eq!(list.remove(index).unwrap().into_data(), 100);
            assert_eq!(list.ids().collect::<Vec<_>>(), before);
            let after: Vec<_> = before
                .iter()
                .map(|id| {
                    let node = list.node(*id).unwrap();
                    (ring_list::Link::tail(node), ring_list::Link::head(node))
                })
                .collect();
            assert_eq!(links, after);
        }
    }
}
