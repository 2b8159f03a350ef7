use ring_list::{CircularLinkedList, DataNode, IndexError, Link, LinkedList, Mode, Node};

use crate::{assert_well_linked, values};

#[test]
fn append_prepend_remove_pop() {
    let mut list = LinkedList::new();
    list.append(DataNode::new(1));
    list.append(DataNode::new(2));
    list.prepend(DataNode::new(0));
    assert_eq!(list.to_string(), "0, 1, 2");

    let removed = list.remove(1).unwrap();
    assert_eq!(removed.data(), &1);
    assert_eq!(list.to_string(), "0, 2");

    let popped = list.pop().unwrap();
    assert_eq!(popped.data(), &2);
    assert_eq!(list.to_string(), "0");
    assert_well_linked(&list);
}

#[test]
fn ring_of_three_closes_and_opens() {
    let mut list = CircularLinkedList::new();
    let a = list.append(Node::new());
    let b = list.append(Node::new());
    let c = list.append(Node::new());

    list.set_connected(true);
    assert_eq!(list.mode(), Mode::Ring);
    assert_eq!(list.node(c).unwrap().head(), Some(a));
    assert_eq!(list.node(a).unwrap().tail(), Some(c));
    assert_well_linked(&list);

    list.set_connected(false);
    assert_eq!(list.mode(), Mode::Linear);
    assert_eq!(list.node(c).unwrap().head(), None);
    assert_eq!(list.node(a).unwrap().tail(), None);
    assert_eq!(list.node(a).unwrap().head(), Some(b));
    assert_eq!(list.node(b).unwrap().head(), Some(c));
    assert_well_linked(&list);
}

#[test]
fn ring_get_reduces_twice() {
    let mut list: LinkedList<_> = ['A', 'B', 'C'].into_iter().map(DataNode::new).collect();
    list.set_connected(true);
    // 4 mod 3 = 1, then 1 mod 4 = 1
    assert_eq!(list.get(4).unwrap().data(), &'B');
    assert_eq!(list.index_of(list.id_at(4).unwrap()), Some(1));
}

#[test]
fn linear_get_boundaries() {
    for len in 1..6_isize {
        let list: LinkedList<_> = (0..len).map(DataNode::new).collect();
        assert_eq!(list.get(0).unwrap().data(), &0);
        assert_eq!(list.get(len - 1).unwrap().data(), &(len - 1));
        assert_eq!(list.get(len).unwrap_err(), IndexError { index: len, len: len as usize });
        assert!(list.get(-(len + 1)).is_err());
    }
}

#[test]
fn ring_keeps_closure_through_mutations() {
    let mut list: LinkedList<_> = (0..4).map(DataNode::new).collect();
    list.set_connected(true);

    list.insert(2, DataNode::new(10)).unwrap();
    assert_well_linked(&list);
    list.prepend(DataNode::new(11));
    assert_well_linked(&list);
    list.append(DataNode::new(12));
    assert_well_linked(&list);
    assert_eq!(values(&list), vec![11, 0, 1, 10, 2, 3, 12]);

    list.remove(0).unwrap();
    assert_well_linked(&list);
    list.set(3, DataNode::new(13)).unwrap();
    assert_well_linked(&list);
    assert_eq!(values(&list), vec![0, 1, 10, 13, 3, 12]);

    while !list.is_empty() {
        list.pop().unwrap();
        assert_well_linked(&list);
    }
    assert!(list.connected());
}

#[test]
fn ring_indices_past_the_end() {
    let mut list: LinkedList<_> = (0..3).map(DataNode::new).collect();
    list.set_connected(true);

    // 7 mod 4 = 3, the slot after `last`
    list.insert(7, DataNode::new(3)).unwrap();
    assert_eq!(values(&list), vec![0, 1, 2, 3]);

    // 9 mod 5 = 4, which wraps to `first` when resolving the node
    assert_eq!(list.remove(9).unwrap().into_data(), 0);
    assert_eq!(values(&list), vec![1, 2, 3]);

    assert_eq!(list[-1].data(), &3);
    assert_eq!(list[5].data(), &3);
}

#[test]
fn find_and_index_of() {
    let mut list = LinkedList::new();
    let ids: Vec<_> = ["a", "b", "a"]
        .into_iter()
        .map(|s| list.append(DataNode::new(s)))
        .collect();

    let found = list.find(|node| *node.data() == "a").unwrap();
    assert!(std::ptr::eq(found, list.node(ids[0]).unwrap()));
    assert_eq!(list.index_of(ids[2]), Some(2));
    assert!(list.find(|node| *node.data() == "c").is_none());
}

#[test]
fn mutate_payloads_in_place() {
    let mut list: LinkedList<_> = (0..3).map(DataNode::new).collect();
    *list.get_mut(1).unwrap().data_mut() = 7;
    let last = list.last_id().unwrap();
    *list.node_mut(last).unwrap().data_mut() = 9;
    assert_eq!(values(&list), vec![0, 7, 9]);
    assert_well_linked(&list);
}

#[test]
fn ring_set_at_len_replaces_first() {
    for len in 1..6_u32 {
        let mut list: LinkedList<_> = (0..len).map(DataNode::new).collect();
        list.set_connected(true);
        // slot `len` wraps to `first`, and the shorter ring puts the new
        // node back at its front
        assert_eq!(list.set(len as isize, DataNode::new(99)).unwrap().into_data(), 0);
        let mut expected: Vec<_> = (0..len).collect();
        expected[0] = 99;
        assert_eq!(values(&list), expected);
        assert_well_linked(&list);
    }
}

#[test]
fn ids_do_not_outlive_their_node() {
    let mut list: LinkedList<_> = (0..3).map(DataNode::new).collect();
    let removed = list.id_at(1).unwrap();
    list.remove(1).unwrap();
    let appended = list.append(DataNode::new(3));
    assert_eq!(list.index_of(removed), None);
    assert!(list.node(removed).is_none());
    assert_eq!(list.index_of(appended), Some(2));

    let other: LinkedList<_> = (0..3).map(DataNode::new).collect();
    for id in other.ids() {
        assert_eq!(list.index_of(id), None);
        assert!(!list.contains_id(id));
    }
}
