//! Set operations over membership lists.
//!
//! Both operations keep the order of their first argument and return an
//! empty vector, never an error, when nothing qualifies.

use std::{collections::HashSet, hash::Hash};

/// Elements of `a` that are not in `b`.
pub fn difference<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let b: HashSet<&T> = b.iter().collect();

    a.iter().filter(|it| !b.contains(it)).cloned().collect()
}

/// Elements of `a` that are also in `b`.
pub fn intersection<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let b: HashSet<&T> = b.iter().collect();

    a.iter().filter(|it| b.contains(it)).cloned().collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn members() -> impl Strategy<Value = Vec<u16>> {
        prop::collection::hash_set(0..200u16, 0..60).prop_map(|set| set.into_iter().collect())
    }

    proptest! {
        #[test]
        fn prop_partitions_the_union(a in members(), b in members()) {
            let both = intersection(&a, &b);
            let only_a = difference(&a, &b);
            let only_b = difference(&b, &a);

            let both_set: HashSet<_> = both.iter().collect();
            prop_assert!(only_a.iter().all(|it| !both_set.contains(it)));
            prop_assert!(only_b.iter().all(|it| !both_set.contains(it)));

            let union: HashSet<_> = a.iter().chain(&b).collect();
            let parts: Vec<_> = both.iter().chain(&only_a).chain(&only_b).collect();
            prop_assert_eq!(parts.len(), union.len());
            prop_assert_eq!(parts.into_iter().collect::<HashSet<_>>(), union);
        }

        #[test]
        fn prop_difference_is_idempotent(a in members(), b in members()) {
            let once = difference(&a, &b);
            prop_assert_eq!(difference(&once, &b), once.clone());
            prop_assert_eq!(difference(&a, &b), once);
        }

        #[test]
        fn prop_preserves_first_argument_order(a in members(), b in members()) {
            let position = |x: &u16| a.iter().position(|it| it == x);
            for result in [difference(&a, &b), intersection(&a, &b)].iter() {
                let positions: Vec<_> = result.iter().map(position).collect();
                prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }
}
