use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::Iter;
use crate::hash::set::{Difference, Intersection, SymmetricDifference, Union};

/// A hash set, stored as a map from elements to the unit type.
///
/// It is a logic error for elements to be manipulated in a way that changes
/// their hash while they are in the set. Because of this, the set's API never
/// hands out mutable references to its elements.
pub struct HashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    // Yay, we get to do the thing where the unit type evaluates to a no-op.
    pub(crate) inner: HashMap<T, (), B>,
}

impl<T: Hash + Eq, B: BuildHasher + Default> HashSet<T, B> {
    /// Creates an empty HashSet. Memory is allocated on first insertion.
    pub fn new() -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_hasher(B::default()),
        }
    }

    /// Creates an empty HashSet with room for at least `cap` elements,
    /// allowing that many insertions without reallocation.
    pub fn with_cap(cap: usize) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_capacity_and_hasher(cap, B::default()),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    /// Creates an empty HashSet which hashes elements with the provided
    /// `hasher`.
    pub fn with_hasher(hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates an empty HashSet with the provided capacity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_capacity_and_hasher(cap, hasher),
        }
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the current capacity of the set.
    pub fn cap(&self) -> usize {
        self.inner.capacity()
    }

    /// Adds `item` to the set. Returns true if the element is new to the set,
    /// false if an equal element was already present, in which case the set
    /// is left untouched.
    pub fn insert(&mut self, item: T) -> bool {
        self.inner.insert(item, ()).is_none()
    }

    /// Removes `item` from the set. Returns true if the element was present,
    /// false otherwise.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(item).is_some()
    }

    /// Returns true if the set contains an element equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(item)
    }

    /// Adds a copy of every element of `other` to this set, leaving `other`
    /// untouched. Elements already present are not replaced.
    pub fn merge(&mut self, other: &HashSet<T, B>)
    where
        T: Clone,
    {
        self.reserve(other.len());
        for item in other {
            if !self.contains(item) {
                self.insert(item.clone());
            }
        }
    }

    /// Removes every element, retaining the allocated capacity.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Increases the capacity of the set to ensure that `extra` additional
    /// elements will fit without reallocation.
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Returns an iterator over all elements of the set, as references. The
    /// order is unspecified.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Creates a borrowed iterator over all elements that are in `self` but
    /// not `other`. (`self \ other`)
    pub fn difference<'a>(&'a self, other: &'a HashSet<T, B>) -> Difference<'a, T, B> {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all elements that are in exactly one
    /// of `self` and `other`. (`self △ other`)
    pub fn symmetric_difference<'a>(
        &'a self,
        other: &'a HashSet<T, B>,
    ) -> SymmetricDifference<'a, T, B> {
        SymmetricDifference {
            inner: self.difference(other).chain(other.difference(self)),
        }
    }

    /// Creates a borrowed iterator over all elements that are in both `self`
    /// and `other`. (`self ∩ other`)
    pub fn intersection<'a>(&'a self, other: &'a HashSet<T, B>) -> Intersection<'a, T, B> {
        Intersection {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all elements that are in either
    /// `self` or `other`, without duplicates. (`self ∪ other`)
    pub fn union<'a>(&'a self, other: &'a HashSet<T, B>) -> Union<'a, T, B> {
        Union {
            inner: self.iter().chain(other.difference(self)),
        }
    }

    /// Returns true if the sets have no elements in common. Two empty sets
    /// are disjoint.
    pub fn is_disjoint(&self, other: &HashSet<T, B>) -> bool {
        // Membership checks run against the larger set.
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        for item in smaller {
            if larger.contains(item) {
                return false;
            }
        }
        true
    }

    /// Returns true if `other` contains every element of `self`.
    /// (`self ⊆ other`)
    pub fn is_subset(&self, other: &HashSet<T, B>) -> bool {
        // A set can never fit inside a smaller one.
        if self.len() > other.len() {
            return false;
        }

        for item in self {
            if !other.contains(item) {
                return false;
            }
        }
        true
    }

    /// Returns true if `self` contains every element of `other`.
    /// (`self ⊇ other`)
    pub fn is_superset(&self, other: &HashSet<T, B>) -> bool {
        other.is_subset(self)
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for HashSet<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for HashSet<T, B> {
    fn clone(&self) -> Self {
        HashSet {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for HashSet<T> {
    fn from(elems: [T; N]) -> Self {
        elems.into_iter().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for HashSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut set = HashSet::with_cap(iter.size_hint().0);

        for item in iter {
            set.insert(item);
        }

        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for HashSet<T, B> {
    fn eq(&self, other: &Self) -> bool {
        // Equal lengths make mutual inclusion redundant, one direction will
        // do.
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for HashSet<T, B> {}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitOr for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        // Seed the union with the larger operand and top it up with the
        // smaller operand's difference. Buffering the difference first means
        // the final size is known before any element lands in the new set,
        // so it is allocated exactly once.
        let (larger, smaller) = if self.len() >= rhs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let extra: Vec<&T> = smaller.difference(larger).collect();

        let mut union = HashSet::with_cap(larger.len() + extra.len());
        union.extend(larger.iter().cloned());
        union.extend(extra.into_iter().cloned());
        union
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitOrAssign for HashSet<T, B> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.extend(rhs);
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitAnd for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitAndAssign for HashSet<T, B> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.inner.retain(|item, _| rhs.contains(item));
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitXor for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitXorAssign for HashSet<T, B> {
    fn bitxor_assign(&mut self, rhs: Self) {
        for item in rhs {
            if !self.remove(&item) {
                self.insert(item);
            }
        }
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> Sub for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> SubAssign for HashSet<T, B> {
    fn sub_assign(&mut self, rhs: Self) {
        for item in rhs {
            self.remove(&item);
        }
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the set as `{e1,e2,...}` with the elements in unspecified order.
/// An empty set renders as `{}`.
impl<T: Hash + Eq + Display, B: BuildHasher> Display for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.iter()
                .map(|item| item.to_string())
                .collect::<Vec<String>>()
                .join(",")
        )
    }
}
