//! # Immutable List
//!
//! File: lib/src/list.rs
//!
//! A fixed-size, read-only snapshot used to hand out directory listings.
//! The list owns a copy of its elements; nothing can be added, removed or
//! replaced after construction.
//!
use std::ops::Index;
use std::slice;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImmutableList<T> {
    values: Box<[T]>,
}

impl<T> ImmutableList<T> {
    /// An empty list.
    pub fn new() -> Self {
        ImmutableList {
            values: Box::new([]),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.values.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.values.last()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}

impl<T: Clone> ImmutableList<T> {
    /// Copies `values` into a new list.
    pub fn from_slice(values: &[T]) -> Self {
        ImmutableList {
            values: values.to_vec().into_boxed_slice(),
        }
    }
}

impl<T> Default for ImmutableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ImmutableList<T> {
    fn from(values: Vec<T>) -> Self {
        ImmutableList {
            values: values.into_boxed_slice(),
        }
    }
}

impl<T> FromIterator<T> for ImmutableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<T> Index<usize> for ImmutableList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<'a, T> IntoIterator for &'a ImmutableList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T> IntoIterator for ImmutableList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_vec().into_iter()
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_fixed_at_construction() {
        let list: ImmutableList<u32> = vec![1, 2, 3].into();
        assert_eq!(list.len(), 3);
        assert_eq!(list[1], 2);
        assert_eq!(list.get(3), None);
        assert_eq!(list.iter().sum::<u32>(), 6);
    }

    #[test]
    fn test_from_slice_copies_in() {
        let mut source = vec!["a".to_string(), "b".to_string()];
        let list = ImmutableList::from_slice(&source);
        source.push("c".to_string());
        source[0].push('!');
        assert_eq!(list.as_slice(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_empty_list() {
        let list: ImmutableList<String> = ImmutableList::default();
        assert!(list.is_empty());
        assert_eq!(list.first(), None);
        assert_eq!((&list).into_iter().count(), 0);
    }
}
