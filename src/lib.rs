#![doc = include_str!("../README.md")]

#[macro_use]
mod macros;

pub mod error;
pub mod family;
pub mod interleave;

#[cfg(feature = "sync")]
pub use im;
pub use im_rc;

pub use error::{Error, Result};
pub use family::{Array, CollectionFamily, Dict, RcCollections, Set};
#[cfg(feature = "sync")]
pub use family::{ArcCollections, SharedArray, SharedDict, SharedSet};

#[doc(hidden)]
#[macro_export]
macro_rules! __array_in {
    ($family:ty;) => {
        <$family as $crate::family::CollectionFamily>::empty_array()
    };

    ($family:ty; $($x:expr),+ $(,)?) => {
        <$family as $crate::family::CollectionFamily>::array_with_objects([$($x),+])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __set_in {
    ($family:ty;) => {
        <$family as $crate::family::CollectionFamily>::empty_set()
    };

    ($family:ty; $($x:expr),+ $(,)?) => {
        <$family as $crate::family::CollectionFamily>::set_with_objects([$($x),+])
    };
}

// Arguments are key first. Pairs are materialized as tuples so that every
// argument is still evaluated left to right.
#[doc(hidden)]
#[macro_export]
macro_rules! __dict_in {
    ($family:ty;) => {
        <$family as $crate::family::CollectionFamily>::empty_dict()
    };

    ($family:ty; $($k:expr, $v:expr),+ $(,)?) => {
        $crate::interleave::dict_with_keys_and_objects::<$family, _, _, _>([$(($k, $v)),+])
    };

    ($family:ty; $($x:expr),+ $(,)?) => {
        compile_error!("dictionary literals take alternating keys and objects, but got an odd number of arguments")
    };
}

/// Construct an [`Array`](crate::family::Array) from a sequence of elements
///
/// Elements keep their order, duplicates included.
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate im_literals;
/// let letters = array!["a", "b", "c"];
/// assert_eq!(letters.len(), 3);
/// assert_eq!(letters[0], "a");
/// assert_eq!(letters[2], "c");
///
/// let nothing: im_literals::Array<usize> = array![];
/// assert!(nothing.is_empty());
/// ```
#[macro_export]
macro_rules! array {
    ($($x:tt)*) => {
        $crate::__array_in!($crate::family::RcCollections; $($x)*)
    };
}

/// Construct a [`Set`](crate::family::Set) from a sequence of elements
///
/// Duplicate elements collapse into a single member.
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate im_literals;
/// let letters = set!["a", "a", "b"];
/// assert_eq!(letters.len(), 2);
/// assert!(letters.contains("a"));
/// assert!(letters.contains("b"));
/// ```
#[macro_export]
macro_rules! set {
    ($($x:tt)*) => {
        $crate::__set_in!($crate::family::RcCollections; $($x)*)
    };
}

/// Construct a [`Dict`](crate::family::Dict) from alternating keys and objects
///
/// Arguments are written key first: `dict![k1, v1, k2, v2]`. If a key repeats,
/// the last object given for it wins.
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate im_literals;
/// let dict = dict!["x", 1, "y", 2];
/// assert_eq!(dict.len(), 2);
/// assert_eq!(dict.get("x"), Some(&1));
/// assert_eq!(dict.get("y"), Some(&2));
/// ```
///
/// An odd number of arguments is a compile error:
///
/// ```compile_fail
/// # #[macro_use] extern crate im_literals;
/// let dict = dict!["x", 1, "y"];
/// ```
#[macro_export]
macro_rules! dict {
    ($($x:tt)*) => {
        $crate::__dict_in!($crate::family::RcCollections; $($x)*)
    };
}

/// Construct a [`SharedArray`](crate::family::SharedArray) from a sequence of elements
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate im_literals;
/// let numbers = shared_array![1, 2, 3];
/// let total = std::thread::spawn(move || numbers.iter().sum::<i32>()).join().unwrap();
/// assert_eq!(total, 6);
/// ```
#[cfg(feature = "sync")]
#[macro_export]
macro_rules! shared_array {
    ($($x:tt)*) => {
        $crate::__array_in!($crate::family::ArcCollections; $($x)*)
    };
}

/// Construct a [`SharedSet`](crate::family::SharedSet) from a sequence of elements
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate im_literals;
/// let numbers = shared_set![1, 1, 2];
/// assert_eq!(numbers.len(), 2);
/// ```
#[cfg(feature = "sync")]
#[macro_export]
macro_rules! shared_set {
    ($($x:tt)*) => {
        $crate::__set_in!($crate::family::ArcCollections; $($x)*)
    };
}

/// Construct a [`SharedDict`](crate::family::SharedDict) from alternating keys and objects
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate im_literals;
/// let dict = shared_dict!["x", 1, "y", 2];
/// assert_eq!(dict.get("y"), Some(&2));
/// ```
///
/// ```compile_fail
/// # #[macro_use] extern crate im_literals;
/// let dict = shared_dict!["x"];
/// ```
#[cfg(feature = "sync")]
#[macro_export]
macro_rules! shared_dict {
    ($($x:tt)*) => {
        $crate::__dict_in!($crate::family::ArcCollections; $($x)*)
    };
}
