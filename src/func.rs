//! Operations driven by a caller supplied comparison.
//!
//! Useful where [`eq`](crate::eq) isn't, typically for types without `PartialEq`
//! or when comparing against a value of another type.
//!
//! Comparisons are expected to be pure. Their consistency is not checked.

/// Index of the first element for which `compare(element, val)` holds.
pub fn find_func<T, U: ?Sized>(
    slice: &[T],
    val: &U,
    mut compare: impl FnMut(&T, &U) -> bool,
) -> Option<usize> {
    slice.iter().position(|v| compare(v, val))
}

/// See [`find_func`].
pub fn contains_func<T, U: ?Sized>(
    slice: &[T],
    val: &U,
    compare: impl FnMut(&T, &U) -> bool,
) -> bool {
    find_func(slice, val, compare).is_some()
}

/// Ordered equality according to `compare`.
/// Slices of different length are never equal.
pub fn equal_func<T, U>(a: &[T], b: &[U], mut compare: impl FnMut(&T, &U) -> bool) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(a, b)| compare(a, b))
}

/// True if slices are of the same length and every element of `b` is contained in `a`,
/// according to `compare`.
///
/// Like [`equal_unordered`](crate::eq::equal_unordered), multiplicities are not compared.
pub fn equal_unordered_func<T, U>(
    a: &[T],
    b: &[U],
    mut compare: impl FnMut(&T, &U) -> bool,
) -> bool {
    if a.len() != b.len() {
        return false;
    }
    b.iter().all(|v| contains_func(a, v, &mut compare))
}

/// Splits slice into (unfiltered, filtered) values.
///
/// Values for which `filter` returns true are filtered. Both parts keep the original order.
pub fn filter_func<T: Clone>(slice: &[T], mut filter: impl FnMut(&T) -> bool) -> (Vec<T>, Vec<T>) {
    let mut unfiltered = Vec::new();
    let mut filtered = Vec::new();
    for v in slice {
        if filter(v) {
            filtered.push(v.clone());
        } else {
            unfiltered.push(v.clone());
        }
    }
    (unfiltered, filtered)
}
