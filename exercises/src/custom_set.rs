//! A mathematical set backed by a vector.

use std::fmt;
use std::hash::{Hash, Hasher};

/// An unordered collection of distinct elements.
///
/// Elements keep their insertion order internally, but equality ignores
/// order: two sets are equal when they hold the same elements.
#[derive(Clone)]
pub struct CustomSet<T> {
    elements: Vec<T>,
}

impl<T: PartialEq + Clone> CustomSet<T> {
    /// Creates a set from `input`, dropping duplicates.
    pub fn new(input: &[T]) -> Self {
        let mut set = CustomSet {
            elements: Vec::with_capacity(input.len()),
        };
        for element in input {
            set.add(element.clone());
        }
        set
    }

    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns true if `element` is in the set.
    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    /// Adds `element` unless it is already present.
    pub fn add(&mut self, element: T) {
        if !self.contains(&element) {
            self.elements.push(element);
        }
    }

    /// Returns true if every element of `self` is in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.elements.iter().all(|e| other.contains(e))
    }

    /// Returns true if `self` and `other` share no element.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        !self.elements.iter().any(|e| other.contains(e))
    }

    /// Elements present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.filtered(|e| other.contains(e))
    }

    /// Elements of `self` that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.filtered(|e| !other.contains(e))
    }

    /// Elements present in either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for element in &other.elements {
            result.add(element.clone());
        }
        result
    }

    /// Iterates over the elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    fn filtered(&self, keep: impl Fn(&T) -> bool) -> Self {
        CustomSet {
            elements: self.elements.iter().filter(|e| keep(*e)).cloned().collect(),
        }
    }
}

impl<T: PartialEq + Clone> PartialEq for CustomSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Eq + Clone> Eq for CustomSet<T> {}

/// Hashes the sorted elements, so equal sets hash equally regardless of order.
impl<T: Ord + Hash + Clone> Hash for CustomSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut sorted: Vec<&T> = self.elements.iter().collect();
        sorted.sort();
        sorted.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for CustomSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: PartialEq + Clone> FromIterator<T> for CustomSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = CustomSet {
            elements: Vec::new(),
        };
        for element in iter {
            set.add(element);
        }
        set
    }
}
