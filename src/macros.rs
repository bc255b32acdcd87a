// Code coverage doesn't pick up doc tests, duplicate these down here
// just to make sure no obvious regressions happen.
#[cfg(test)]
macro_rules! public_api_tests {
    ($mod_name:tt, $family:tt, $array:tt, $set:tt, $dict:tt) => {
        mod $mod_name {
            use super::*;
            use crate::family::CollectionFamily;
            use crate::{$array, $dict, $set};
            use std::cell::Cell;
            use std::fmt::Debug;
            use std::rc::Rc;

            #[test]
            fn array_keeps_order() {
                let array = $array!["a", "b", "c"];
                assert_eq!(array.len(), 3);
                assert!(array.iter().eq(["a", "b", "c"].iter()));
            }

            #[test]
            fn array_keeps_duplicates() {
                let array = $array![1, 1, 2, 1];
                assert_eq!(array.len(), 4);
                assert!(array.iter().eq([1, 1, 2, 1].iter()));
            }

            #[test]
            fn array_trailing_comma() {
                let array = $array![1, 2, 3,];
                assert_eq!(array.len(), 3);
            }

            #[test]
            fn empty_array() {
                let array = $array![];
                assert!(array.is_empty());
                assert_eq!(array, $family::empty_array::<usize>());
            }

            #[test]
            fn array_of_trait_objects() {
                let array = $array![
                    Rc::new(1) as Rc<dyn Debug>,
                    Rc::new("two") as Rc<dyn Debug>,
                    Rc::new(3.0) as Rc<dyn Debug>,
                ];
                assert_eq!(array.len(), 3);
                assert_eq!(format!("{:?}", array[1]), "\"two\"");
            }

            #[test]
            fn nested_arrays() {
                let array = $array![$array![1], $array![2, 3]];
                assert_eq!(array.len(), 2);
                assert_eq!(array[1].len(), 2);
            }

            #[test]
            fn array_is_persistent() {
                let array = $array![1, 2];
                let mut other = array.clone();
                other.push_back(3);
                assert_eq!(array.len(), 2);
                assert_eq!(other.len(), 3);
            }

            #[test]
            fn array_matches_family_constructor() {
                let array = $array![4, 5, 6];
                assert_eq!(array, $family::array_with_objects(vec![4, 5, 6]));
            }

            #[test]
            fn set_collapses_duplicates() {
                let set = $set!["a", "a", "b"];
                assert_eq!(set.len(), 2);
                assert!(set.contains("a"));
                assert!(set.contains("b"));
            }

            #[test]
            fn empty_set() {
                let set = $set![];
                assert!(set.is_empty());
                assert_eq!(set, $family::empty_set::<usize>());
            }

            #[test]
            fn dict_maps_keys_to_objects() {
                let dict = $dict!["x", 1, "y", 2];
                assert_eq!(dict.len(), 2);
                assert_eq!(dict.get("x"), Some(&1));
                assert_eq!(dict.get("y"), Some(&2));
                assert!(dict.get("z").is_none());
            }

            #[test]
            fn dict_trailing_comma() {
                let dict = $dict![1, "one", 2, "two",];
                assert_eq!(dict.get(&2), Some(&"two"));
            }

            #[test]
            fn empty_dict() {
                let dict = $dict![];
                assert!(dict.is_empty());
                assert_eq!(dict, $family::empty_dict::<usize, usize>());
            }

            #[test]
            fn dict_last_duplicate_key_wins() {
                let dict = $dict!["x", 1, "x", 2];
                assert_eq!(dict.len(), 1);
                assert_eq!(dict.get("x"), Some(&2));
            }

            #[test]
            fn dict_with_mixed_key_and_object_types() {
                let dict = $dict![1usize, "one", 2usize, "two"];
                assert_eq!(dict.get(&1), Some(&"one"));
                assert_eq!(dict.get(&2), Some(&"two"));
            }

            #[test]
            fn dict_evaluates_arguments_in_order() {
                let counter = Cell::new(0);
                let next = || {
                    counter.set(counter.get() + 1);
                    counter.get()
                };

                let dict = $dict![next(), next(), next(), next()];
                assert_eq!(dict.get(&1), Some(&2));
                assert_eq!(dict.get(&3), Some(&4));
            }
        }
    };
}
