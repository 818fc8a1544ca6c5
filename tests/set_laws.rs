//! Property-based tests for HashSet.
//!
//! This module verifies the set-algebra laws and the mutation contract using
//! proptest. Element values are drawn from a small range so that generated
//! sets actually overlap.

use hashset::HashSet;
use proptest::prelude::*;

// =============================================================================
// Strategies for generating test data
// =============================================================================

fn arbitrary_elem() -> impl Strategy<Value = i32> {
    0i32..32
}

fn arbitrary_elems() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(arbitrary_elem(), 0..48)
}

fn arbitrary_set() -> impl Strategy<Value = HashSet<i32>> {
    arbitrary_elems().prop_map(|elems| elems.into_iter().collect())
}

// =============================================================================
// Self-Difference Law: s \ s == {}
// =============================================================================

proptest! {
    #[test]
    fn prop_self_difference_is_empty(set in arbitrary_set()) {
        prop_assert!((&set - &set).is_empty());
        prop_assert_eq!(set.difference(&set).count(), 0);
    }
}

// =============================================================================
// Commutativity Laws: a ∪ b == b ∪ a, a ∩ b == b ∩ a, a △ b == b △ a
// =============================================================================

proptest! {
    #[test]
    fn prop_union_commutes(a in arbitrary_set(), b in arbitrary_set()) {
        prop_assert_eq!(&a | &b, &b | &a);
    }

    #[test]
    fn prop_intersection_commutes(a in arbitrary_set(), b in arbitrary_set()) {
        prop_assert_eq!(&a & &b, &b & &a);
    }

    #[test]
    fn prop_symmetric_difference_commutes(a in arbitrary_set(), b in arbitrary_set()) {
        prop_assert_eq!(&a ^ &b, &b ^ &a);
    }
}

// =============================================================================
// Symmetric-Difference Decomposition: a △ b == (a \ b) ∪ (b \ a)
// =============================================================================

proptest! {
    #[test]
    fn prop_symmetric_difference_decomposes(a in arbitrary_set(), b in arbitrary_set()) {
        prop_assert_eq!(&a ^ &b, &(&a - &b) | &(&b - &a));
    }
}

// =============================================================================
// Inclusion-Exclusion Law: |a ∪ b| == |a| + |b| - |a ∩ b|
// =============================================================================

proptest! {
    #[test]
    fn prop_inclusion_exclusion(a in arbitrary_set(), b in arbitrary_set()) {
        prop_assert_eq!((&a | &b).len(), a.len() + b.len() - (&a & &b).len());
    }
}

// =============================================================================
// Mutual-Subset Law: a ⊆ b && b ⊆ a <=> a == b
// =============================================================================

proptest! {
    #[test]
    fn prop_mutual_subset_is_equality(a in arbitrary_set(), b in arbitrary_set()) {
        prop_assert_eq!(a.is_subset(&b) && b.is_subset(&a), a == b);
    }

    #[test]
    fn prop_subset_superset_duality(a in arbitrary_set(), b in arbitrary_set()) {
        prop_assert_eq!(a.is_subset(&b), b.is_superset(&a));
    }
}

// =============================================================================
// Insert Law: after insert, contains; a second insert is a rejected no-op
// =============================================================================

proptest! {
    #[test]
    fn prop_insert_then_contains(mut set in arbitrary_set(), elem in arbitrary_elem()) {
        let was_present = set.contains(&elem);
        let len_before = set.len();

        prop_assert_eq!(set.insert(elem), !was_present);
        prop_assert!(set.contains(&elem));
        prop_assert_eq!(set.len(), len_before + usize::from(!was_present));

        let len = set.len();
        prop_assert!(!set.insert(elem));
        prop_assert_eq!(set.len(), len);
    }
}

// =============================================================================
// Remove Law: after a successful remove, absent; a second remove fails
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_then_absent(mut set in arbitrary_set(), elem in arbitrary_elem()) {
        let was_present = set.contains(&elem);
        prop_assert_eq!(set.remove(&elem), was_present);
        prop_assert!(!set.contains(&elem));
        prop_assert!(!set.remove(&elem));
    }
}

// =============================================================================
// Merge Law: merge mutates only the receiver and yields the union
// =============================================================================

proptest! {
    #[test]
    fn prop_merge_is_left_mutating_union(a in arbitrary_set(), b in arbitrary_set()) {
        let union = &a | &b;
        let b_before = b.clone();

        let mut merged = a.clone();
        merged.merge(&b);

        prop_assert_eq!(merged, union);
        prop_assert_eq!(b, b_before);
    }
}

// =============================================================================
// Operand-Preservation Law: binary operations never mutate their operands
// =============================================================================

proptest! {
    #[test]
    fn prop_operations_preserve_operands(a in arbitrary_set(), b in arbitrary_set()) {
        let a_before = a.clone();
        let b_before = b.clone();

        let _ = &a | &b;
        let _ = &a & &b;
        let _ = &a - &b;
        let _ = &a ^ &b;
        let _ = a.is_disjoint(&b);
        let _ = a.is_subset(&b);
        let _ = a.is_superset(&b);

        prop_assert_eq!(&a, &a_before);
        prop_assert_eq!(&b, &b_before);
    }
}

// =============================================================================
// Rendering Law: Display lists exactly the elements, wrapped in braces
// =============================================================================

proptest! {
    #[test]
    fn prop_display_lists_all_elements(set in arbitrary_set()) {
        let rendered = set.to_string();
        prop_assert!(
            rendered.starts_with('{') && rendered.ends_with('}'),
            "rendered form not brace-wrapped: {}",
            rendered
        );

        let body = &rendered[1..rendered.len() - 1];
        let mut listed: Vec<i32> = if body.is_empty() {
            Vec::new()
        } else {
            body.split(',').map(|elem| elem.parse().expect("non-numeric element")).collect()
        };
        listed.sort_unstable();

        let mut elems: Vec<i32> = set.iter().copied().collect();
        elems.sort_unstable();
        prop_assert_eq!(listed, elems);
    }
}
