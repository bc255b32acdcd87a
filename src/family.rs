//! Collection families the literal macros construct into.
//!
//! A family fixes the concrete array, set and dictionary types. [`RcCollections`]
//! builds the single threaded [`im_rc`] collections, while [`ArcCollections`] builds
//! the thread safe [`im`](https://docs.rs/im) collections.

use std::hash::Hash;

/// Persistent vector used by [`array!`](crate::array).
pub type Array<T> = im_rc::Vector<T>;
/// Persistent hash set used by [`set!`](crate::set).
pub type Set<T> = im_rc::HashSet<T>;
/// Persistent hash map used by [`dict!`](crate::dict).
pub type Dict<K, V> = im_rc::HashMap<K, V>;

/// Thread safe persistent vector used by [`shared_array!`](crate::shared_array).
#[cfg(feature = "sync")]
pub type SharedArray<T> = im::Vector<T>;
/// Thread safe persistent hash set used by [`shared_set!`](crate::shared_set).
#[cfg(feature = "sync")]
pub type SharedSet<T> = im::HashSet<T>;
/// Thread safe persistent hash map used by [`shared_dict!`](crate::shared_dict).
#[cfg(feature = "sync")]
pub type SharedDict<K, V> = im::HashMap<K, V>;

/// The constructors a family of immutable collections provides.
pub trait CollectionFamily {
    /// Ordered sequence, duplicates allowed.
    type Array<T: Clone>: Clone + FromIterator<T>;
    /// Unordered collection of unique members.
    type Set<T: Hash + Eq + Clone>: Clone + FromIterator<T>;
    /// Mapping from unique keys to objects.
    type Dict<K: Hash + Eq + Clone, V: Clone>: Clone + FromIterator<(K, V)>;

    /// Construct an empty array.
    fn empty_array<T: Clone>() -> Self::Array<T>;

    /// Construct an empty set.
    fn empty_set<T: Hash + Eq + Clone>() -> Self::Set<T>;

    /// Construct an empty dictionary.
    fn empty_dict<K: Hash + Eq + Clone, V: Clone>() -> Self::Dict<K, V>;

    /// Construct an array holding `objects` in order.
    fn array_with_objects<T: Clone>(objects: impl IntoIterator<Item = T>) -> Self::Array<T> {
        objects.into_iter().collect()
    }

    /// Construct a set from `objects`. Duplicates collapse into one member.
    fn set_with_objects<T: Hash + Eq + Clone>(objects: impl IntoIterator<Item = T>) -> Self::Set<T> {
        objects.into_iter().collect()
    }

    /// Construct a dictionary mapping the i-th key to the i-th object.
    ///
    /// Note the order: objects first, then keys. Both sequences must be the
    /// same length. When a key repeats, the object paired with its last
    /// occurrence wins.
    fn dict_with_objects_for_keys<K, V, O, Q>(objects: O, keys: Q) -> Self::Dict<K, V>
    where
        K: Hash + Eq + Clone,
        V: Clone,
        O: IntoIterator<Item = V>,
        O::IntoIter: ExactSizeIterator,
        Q: IntoIterator<Item = K>,
        Q::IntoIter: ExactSizeIterator,
    {
        let objects = objects.into_iter();
        let keys = keys.into_iter();

        debug_assert_eq!(
            objects.len(),
            keys.len(),
            "every key needs exactly one object"
        );

        keys.zip(objects).collect()
    }
}

/// Single threaded collections from [`im_rc`].
pub struct RcCollections;

impl CollectionFamily for RcCollections {
    type Array<T: Clone> = im_rc::Vector<T>;
    type Set<T: Hash + Eq + Clone> = im_rc::HashSet<T>;
    type Dict<K: Hash + Eq + Clone, V: Clone> = im_rc::HashMap<K, V>;

    fn empty_array<T: Clone>() -> Self::Array<T> {
        im_rc::Vector::new()
    }

    fn empty_set<T: Hash + Eq + Clone>() -> Self::Set<T> {
        im_rc::HashSet::new()
    }

    fn empty_dict<K: Hash + Eq + Clone, V: Clone>() -> Self::Dict<K, V> {
        im_rc::HashMap::new()
    }
}

/// Thread safe collections from `im`.
///
/// The resulting collections are [`Send`] + [`Sync`] whenever their elements are.
#[cfg(feature = "sync")]
pub struct ArcCollections;

#[cfg(feature = "sync")]
impl CollectionFamily for ArcCollections {
    type Array<T: Clone> = im::Vector<T>;
    type Set<T: Hash + Eq + Clone> = im::HashSet<T>;
    type Dict<K: Hash + Eq + Clone, V: Clone> = im::HashMap<K, V>;

    fn empty_array<T: Clone>() -> Self::Array<T> {
        im::Vector::new()
    }

    fn empty_set<T: Hash + Eq + Clone>() -> Self::Set<T> {
        im::HashSet::new()
    }

    fn empty_dict<K: Hash + Eq + Clone, V: Clone>() -> Self::Dict<K, V> {
        im::HashMap::new()
    }
}

#[cfg(test)]
mod proptests;
