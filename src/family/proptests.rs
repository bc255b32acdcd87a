use std::collections::{BTreeMap, HashSet as StdHashSet};

use proptest::prelude::*;

use super::*;
use crate::error::Error;
use crate::interleave::{dict_from_interleaved, dict_with_keys_and_objects};

// Arbitrary element lists, small value range so duplicates actually show up
fn elements() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-100..100i32, 0..512)
}

// Unique keys mapped to arbitrary objects
fn entries() -> impl Strategy<Value = BTreeMap<i32, i64>> {
    prop::collection::btree_map(any::<i32>(), any::<i64>(), 0..256)
}

macro_rules! family_properties {
    ($mod_name:ident, $family:ty) => {
        mod $mod_name {
            use super::*;
            use proptest::prelude::*;

            proptest! {
                #[test]
                fn array_preserves_elements_in_order(xs in elements()) {
                    let array = <$family>::array_with_objects(xs.clone());
                    prop_assert_eq!(array.len(), xs.len());
                    prop_assert!(array.iter().eq(xs.iter()));
                }

                #[test]
                fn set_holds_the_distinct_elements(xs in elements()) {
                    let set = <$family>::set_with_objects(xs.clone());
                    let distinct: StdHashSet<i32> = xs.iter().copied().collect();

                    prop_assert!(set.len() <= xs.len());
                    prop_assert_eq!(set.len(), distinct.len());
                    for x in &distinct {
                        prop_assert!(set.contains(x));
                    }
                }

                #[test]
                fn dict_looks_up_every_pair(expected in entries()) {
                    let dict = dict_with_keys_and_objects::<$family, _, _, _>(
                        expected.iter().map(|(k, v)| (*k, *v)),
                    );

                    prop_assert_eq!(dict.len(), expected.len());
                    for (k, v) in &expected {
                        prop_assert_eq!(dict.get(k), Some(v));
                    }
                }

                #[test]
                fn interleaved_dict_looks_up_every_pair(expected in entries()) {
                    let flat: Vec<i64> = expected
                        .iter()
                        .flat_map(|(k, v)| [*k as i64, *v])
                        .collect();

                    let dict = dict_from_interleaved::<$family, _, _>(flat).unwrap();

                    prop_assert_eq!(dict.len(), expected.len());
                    for (k, v) in &expected {
                        prop_assert_eq!(dict.get(&(*k as i64)), Some(v));
                    }
                }

                #[test]
                fn odd_interleaved_sequence_is_rejected(mut xs in elements()) {
                    if xs.len() % 2 == 0 {
                        xs.push(0);
                    }
                    let len = xs.len();

                    let result = dict_from_interleaved::<$family, _, _>(xs);
                    prop_assert_eq!(result.unwrap_err(), Error::OddLength { len });
                }
            }
        }
    };
}

family_properties!(rc_properties, RcCollections);

#[cfg(feature = "sync")]
family_properties!(arc_properties, ArcCollections);
