//! Reshuffling key/object argument lists for dictionary construction.
//!
//! Dictionary literals are written key first (`k1, v1, k2, v2, ...`), while
//! [`CollectionFamily::dict_with_objects_for_keys`] takes the objects and the keys
//! as two parallel sequences. The helpers here do that split in a single pass,
//! keeping short argument lists on the stack.

use std::hash::Hash;

use log::{debug, trace};
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::family::CollectionFamily;

/// Number of pairs held inline before a [`Scratch`] buffer spills to the heap.
pub const INLINE_PAIRS: usize = 16;

/// Scratch buffer holding one side (keys or objects) of a split argument list.
pub type Scratch<T> = SmallVec<[T; INLINE_PAIRS]>;

/// Split `(key, object)` pairs into parallel key and object sequences.
///
/// # Examples
///
/// ```
/// # use im_literals::interleave::split_pairs;
/// let (keys, objects) = split_pairs([("x", 1), ("y", 2)]);
/// assert_eq!(keys.as_slice(), &["x", "y"]);
/// assert_eq!(objects.as_slice(), &[1, 2]);
/// ```
pub fn split_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> (Scratch<K>, Scratch<V>) {
    let (keys, objects): (Scratch<K>, Scratch<V>) = pairs.into_iter().unzip();
    trace!("split {} key/object pairs", keys.len());
    (keys, objects)
}

/// Split a flat `k1, v1, k2, v2, ...` sequence into keys (even positions) and
/// objects (odd positions).
///
/// Returns [`Error::OddLength`] if the sequence ends on a key.
///
/// # Examples
///
/// ```
/// # use im_literals::interleave::split_interleaved;
/// # use im_literals::error::Error;
/// let (keys, objects) = split_interleaved(["a", "1", "b", "2"]).unwrap();
/// assert_eq!(keys.as_slice(), &["a", "b"]);
/// assert_eq!(objects.as_slice(), &["1", "2"]);
///
/// assert_eq!(split_interleaved(["a", "1", "b"]), Err(Error::OddLength { len: 3 }));
/// ```
pub fn split_interleaved<T>(
    keys_and_objects: impl IntoIterator<Item = T>,
) -> Result<(Scratch<T>, Scratch<T>)> {
    let mut keys = Scratch::new();
    let mut objects = Scratch::new();

    for (index, item) in keys_and_objects.into_iter().enumerate() {
        if index % 2 == 0 {
            keys.push(item);
        } else {
            objects.push(item);
        }
    }

    if keys.len() != objects.len() {
        let len = keys.len() + objects.len();
        debug!("rejecting interleaved key/object sequence of odd length {}", len);
        return Err(Error::OddLength { len });
    }

    trace!("split {} interleaved key/object pairs", keys.len());
    Ok((keys, objects))
}

/// Build a dictionary from `(key, object)` pairs, transposing them into the
/// object-then-key order the family constructor expects.
///
/// This is what [`dict!`](crate::dict) and [`shared_dict!`](crate::shared_dict)
/// expand to.
pub fn dict_with_keys_and_objects<F, K, V, I>(keys_and_objects: I) -> F::Dict<K, V>
where
    F: CollectionFamily,
    K: Hash + Eq + Clone,
    V: Clone,
    I: IntoIterator<Item = (K, V)>,
{
    let (keys, objects) = split_pairs(keys_and_objects);
    F::dict_with_objects_for_keys(objects, keys)
}

/// Build a dictionary from a flat, runtime-length `k1, v1, k2, v2, ...` sequence.
///
/// Fails fast with [`Error::OddLength`] instead of building a partial
/// dictionary when the sequence has an odd number of elements.
///
/// # Examples
///
/// ```
/// # use im_literals::interleave::dict_from_interleaved;
/// # use im_literals::family::RcCollections;
/// let words = "apple red banana yellow".split(' ');
/// let colors = dict_from_interleaved::<RcCollections, _, _>(words).unwrap();
/// assert_eq!(colors.get("banana"), Some(&"yellow"));
///
/// let words = "apple red banana".split(' ');
/// assert!(dict_from_interleaved::<RcCollections, _, _>(words).is_err());
/// ```
pub fn dict_from_interleaved<F, T, I>(keys_and_objects: I) -> Result<F::Dict<T, T>>
where
    F: CollectionFamily,
    T: Hash + Eq + Clone,
    I: IntoIterator<Item = T>,
{
    let (keys, objects) = split_interleaved(keys_and_objects)?;
    Ok(F::dict_with_objects_for_keys(objects, keys))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::RcCollections;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn empty_sequence_splits_into_nothing() {
        init();
        let (keys, objects) = split_interleaved(Vec::<usize>::new()).unwrap();
        assert!(keys.is_empty());
        assert!(objects.is_empty());
    }

    #[test]
    fn single_key_is_rejected() {
        init();
        assert_eq!(split_interleaved([1]), Err(Error::OddLength { len: 1 }));
    }

    #[test]
    fn long_sequences_spill_to_the_heap() {
        init();
        let (keys, objects) = split_interleaved(0..(INLINE_PAIRS * 4)).unwrap();
        assert!(keys.spilled());
        assert!(objects.spilled());
        assert_eq!(keys.len(), INLINE_PAIRS * 2);
        assert!(keys.iter().all(|k| k % 2 == 0));
        assert!(objects.iter().all(|v| v % 2 == 1));
    }

    #[test]
    fn short_sequences_stay_inline() {
        init();
        let (keys, objects) = split_pairs([(1, 'a'), (2, 'b')]);
        assert!(!keys.spilled());
        assert!(!objects.spilled());
    }

    #[test]
    fn pairs_are_transposed() {
        init();
        let dict = dict_with_keys_and_objects::<RcCollections, _, _, _>([("x", 1), ("y", 2)]);
        assert_eq!(dict.get("x"), Some(&1));
        assert_eq!(dict.get("y"), Some(&2));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn interleaved_dict_from_runtime_sequence() {
        init();
        let flat: Vec<usize> = vec![1, 10, 2, 20, 3, 30];
        let dict = dict_from_interleaved::<RcCollections, _, _>(flat).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.get(&2), Some(&20));
    }

    #[test]
    fn odd_runtime_sequence_builds_nothing() {
        init();
        let flat: Vec<usize> = vec![1, 10, 2];
        let err = dict_from_interleaved::<RcCollections, _, _>(flat).unwrap_err();
        assert_eq!(err, Error::OddLength { len: 3 });
        assert_eq!(
            err.to_string(),
            "expected alternating keys and objects, got an odd number of elements (3)"
        );
    }
}
