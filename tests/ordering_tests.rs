use std::cmp::Ordering;

use dynarray::{dynarray, DynArray};

#[test]
fn test_equal_arrays() {
    assert_eq!(dynarray![1, 2, 3], dynarray![1, 2, 3]);
    assert!(dynarray![1, 2, 3] <= dynarray![1, 2, 3]);
    assert!(dynarray![1, 2, 3] >= dynarray![1, 2, 3]);
    assert!(!(dynarray![1, 2, 3] < dynarray![1, 2, 3]));
    assert!(!(dynarray![1, 2, 3] > dynarray![1, 2, 3]));
}

#[test]
fn test_prefix_is_less() {
    assert!(dynarray![1, 2] < dynarray![1, 2, 3]);
    assert!(dynarray![1, 2, 3] > dynarray![1, 2]);
    assert_ne!(dynarray![1, 2], dynarray![1, 2, 3]);
}

#[test]
fn test_first_difference_dominates_length() {
    assert!(dynarray![1, 3] > dynarray![1, 2, 3]);
    assert!(dynarray![2] > dynarray![1, 2, 3]);
    assert!(dynarray![1, 2, 3] < dynarray![2]);
}

#[test]
fn test_empty_is_smallest() {
    let empty: DynArray<i32> = DynArray::new();
    assert!(empty < dynarray![i32::MIN]);
    assert_eq!(empty, DynArray::new());
}

#[test]
fn test_stale_slots_do_not_participate() {
    let mut a = dynarray![1, 2, 3];
    let b = dynarray![1, 2, 9];
    a.pop_back();

    let mut c = b.try_clone().unwrap();
    c.pop_back();

    assert_eq!(a, c);
    assert_eq!(a.capacity(), 3);
}

#[test]
fn test_equality_ignores_capacity() {
    let mut a = DynArray::new();
    for value in [1, 2, 3] {
        a.push_back(value).unwrap();
    }
    let b = dynarray![1, 2, 3];

    assert_ne!(a.capacity(), b.capacity());
    assert_eq!(a, b);
}

#[test]
fn test_ord_sorting() {
    let mut arrays = vec![
        dynarray![2],
        dynarray![1, 2, 3],
        dynarray![1, 2],
        dynarray![1, 3],
    ];
    arrays.sort();

    let sorted: Vec<Vec<i32>> = arrays.iter().map(|a| a.to_vec()).collect();
    assert_eq!(sorted, vec![vec![1, 2], vec![1, 2, 3], vec![1, 3], vec![2]]);
}

#[test]
fn test_cmp_is_three_way() {
    assert_eq!(dynarray![1, 2].cmp(&dynarray![1, 2, 3]), Ordering::Less);
    assert_eq!(dynarray![1, 2, 3].cmp(&dynarray![1, 2, 3]), Ordering::Equal);
    assert_eq!(dynarray![2].cmp(&dynarray![1, 2, 3]), Ordering::Greater);
}

#[test]
fn test_float_elements() {
    assert!(dynarray![1.0, 2.5] < dynarray![1.0, 3.0]);
    assert_eq!(
        dynarray![f64::NAN].partial_cmp(&dynarray![0.0]),
        Some(Ordering::Equal)
    );
}
