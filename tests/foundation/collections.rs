//! Integration tests for CfgVec and CfgSet

use typedini_foundation::{CfgSet, CfgVec};

#[test]
fn vec_keeps_order() {
    let mut v: CfgVec<i64> = [3, 1, 2].into_iter().collect();
    v.push(0);
    assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2, 0]);
    assert_eq!(v.replace(0, 7), Some(3));
    assert_eq!(v.get(0), Some(&7));
    assert_eq!(v.pop(), Some(0));
    assert_eq!(v.len(), 3);
}

#[test]
fn set_iterates_sorted_and_dedups() {
    let mut s: CfgSet<String> = ["root", "admin", "root"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(s.len(), 2);
    assert!(!s.insert("admin".to_string()));
    assert!(s.remove(&"root".to_string()));
    assert_eq!(s.iter().collect::<Vec<_>>(), vec!["admin"]);
}

#[test]
fn clones_are_independent() {
    let a: CfgSet<i64> = [1, 2].into_iter().collect();
    let mut b = a.clone();
    b.insert(3);
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 3);
    assert_eq!(a.union(&b), b);
}
