//! Operations over elements with built-in equality.
//!
//! See [`func`](crate::func) for the same operations with a custom comparison.

/// Index of the first element equal to `val`.
pub fn find<T: PartialEq>(slice: &[T], val: &T) -> Option<usize> {
    slice.iter().position(|v| v == val)
}

/// True if some element is equal to `val`.
/// See [`find`].
pub fn contains<T: PartialEq>(slice: &[T], val: &T) -> bool {
    find(slice, val).is_some()
}

/// Ordered equality. Slices of different length are never equal.
pub fn equal<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(a, b)| a == b)
}

/// True if slices are of the same length and every element of `b` is contained in `a`.
///
/// Multiplicities are not compared, so `[1, 1, 2]` and `[1, 2, 2]` are equal.
pub fn equal_unordered<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    b.iter().all(|v| contains(a, v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::gen_slice;
    use rand::{seq::SliceRandom, thread_rng};

    const SIMPLE: [i32; 6] = [0, 1, 2, 3, 4, 5];

    #[test]
    fn find_simple() {
        for (i, v) in SIMPLE.iter().enumerate() {
            assert_eq!(find(&SIMPLE, v), Some(i));
        }
        for v in 6..12 {
            assert_eq!(find(&SIMPLE, &v), None);
        }
    }

    #[test]
    fn find_first() {
        let slice = [3, 1, 3, 1, 2];
        assert_eq!(find(&slice, &3), Some(0));
        assert_eq!(find(&slice, &1), Some(1));
        assert_eq!(find(&slice, &2), Some(4));
        assert_eq!(find::<i32>(&[], &2), None);
    }

    #[test]
    fn find_random() {
        for _ in 0..100 {
            let slice = gen_slice(20, vec![0u8, 1, 2, 3, 4], vec![9]).unwrap();
            for (i, v) in slice.iter().enumerate() {
                let j = find(&slice, v).unwrap();
                assert!(j <= i);
                assert_eq!(slice[j], *v);
                assert!(!slice[..j].contains(v));
            }
            assert!(contains(&slice, &9));
            assert!(!contains(&slice, &10));
        }
    }

    #[test]
    fn contains_simple() {
        for v in SIMPLE.iter() {
            assert!(contains(&SIMPLE, v));
        }
        for v in 6..12 {
            assert!(!contains(&SIMPLE, &v));
        }
    }

    #[test]
    fn equal_simple() {
        assert!(equal(&SIMPLE, &SIMPLE));
        assert!(equal::<i32>(&[], &[]));
        assert!(!equal(&SIMPLE, &[0, 1, 2, 3, 4, 6]));
        assert!(!equal(&SIMPLE, &[1, 0, 2, 3, 4, 5]));
    }

    #[test]
    fn equal_length_mismatch() {
        assert!(!equal(&SIMPLE, &SIMPLE[..5]));
        assert!(!equal(&[1, 1], &[1]));
        assert!(!equal(&[], &[1]));
    }

    #[test]
    fn equal_unordered_simple() {
        assert!(equal_unordered(&SIMPLE, &[1, 5, 3, 4, 2, 0]));
        assert!(!equal_unordered(&SIMPLE, &[1, 5, 3, 4, 2, 6]));
        assert!(!equal_unordered(&SIMPLE, &[1, 5, 3, 4, 2]));
        assert!(equal_unordered::<i32>(&[], &[]));
    }

    #[test]
    fn equal_unordered_shuffled() {
        let mut rng = thread_rng();
        for _ in 0..100 {
            let slice = gen_slice(16, (0..8).collect::<Vec<u32>>(), Vec::new()).unwrap();
            let mut shuffled = slice.clone();
            shuffled.shuffle(&mut rng);
            assert!(equal_unordered(&slice, &shuffled));
        }
    }

    #[test]
    fn equal_unordered_ignores_multiplicity() {
        assert!(equal_unordered(&[1, 1, 2], &[1, 2, 2]));
        assert!(equal_unordered(&[1, 2, 2], &[1, 1, 2]));
        // Only b is checked against a.
        assert!(equal_unordered(&[1, 2, 3], &[1, 1, 1]));
        assert!(!equal_unordered(&[1, 1, 1], &[1, 2, 3]));
    }
}
