use core::cmp::Ordering;

use crate::array::DynArray;

/// Lexicographic three-way comparison of two element sequences.
///
/// Walks `0..max(lhs.len(), rhs.len())`. A side that runs out first is the
/// smaller one. Where both sides have an element, `<` and `>` decide; pairs
/// that are neither (incomparable values such as NaN) are skipped as ties.
pub(crate) fn compare<T: PartialOrd>(lhs: &[T], rhs: &[T]) -> Ordering {
    let longest = lhs.len().max(rhs.len());
    for index in 0..longest {
        match (lhs.get(index), rhs.get(index)) {
            (Some(left), Some(right)) => {
                if left < right {
                    return Ordering::Less;
                }
                if left > right {
                    return Ordering::Greater;
                }
            }
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => break,
        }
    }
    Ordering::Equal
}

impl<T: PartialOrd> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        compare(self.as_slice(), other.as_slice()) == Ordering::Equal
    }
}

impl<T: Ord> Eq for DynArray<T> {}

impl<T: PartialOrd> PartialOrd for DynArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(compare(self.as_slice(), other.as_slice()))
    }
}

impl<T: Ord> Ord for DynArray<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self.as_slice(), other.as_slice())
    }
}
