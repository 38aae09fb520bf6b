//! Growable sequence with optional element comparison and a discard hook.
//!
//! [`TrackedVec`] is a `Vec` that can be told how to compare its elements and
//! what to do with an element when the container itself throws it away
//! ([`TrackedVec::swap_discard`], [`TrackedVec::discard`], [`TrackedVec::clear`]
//! and drop). Elements handed back to the caller through `remove`,
//! `swap_remove` or `pop` skip the hook since the caller now owns them.
//!
//! There is no iteration cursor inside the container. Code that removes while
//! scanning must drive an explicit index: after `swap_remove(i)` the former last
//! element sits at `i` and has to be looked at again before moving on.

use std::cmp::Ordering;
use std::fmt;

pub const DEFAULT_CAPACITY: usize = 10;

pub type CompareFn<T> = fn(&T, &T) -> Ordering;

pub struct TrackedVec<T> {
    items: Vec<T>,
    compare: Option<CompareFn<T>>,
    on_discard: Option<Box<dyn FnMut(T)>>
}

impl<T> Default for TrackedVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for TrackedVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> TrackedVec<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            compare: None,
            on_discard: None
        }
    }

    pub fn with_compare(mut self, compare: CompareFn<T>) -> Self {
        self.compare = Some(compare);
        self
    }

    pub fn with_discard_hook(mut self, on_discard: impl FnMut(T) + 'static) -> Self {
        self.on_discard = Some(Box::new(on_discard));
        self
    }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn capacity(&self) -> usize { self.items.capacity() }

    pub fn as_slice(&self) -> &[T] { &self.items }

    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.items }

    pub fn get(&self, index: usize) -> Option<&T> { self.items.get(index) }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> { self.items.get_mut(index) }

    /// Two distinct elements borrowed mutably at once.
    ///
    /// # Panics
    /// If `i == j` or either index is out of bounds.
    pub fn pair_mut(&mut self, i: usize, j: usize) -> (&mut T, &mut T) {
        assert_ne!(i, j, "pair_mut needs two distinct indices");
        if i < j {
            let (head, tail) = self.items.split_at_mut(j);
            (&mut head[i], &mut tail[0])
        } else {
            let (head, tail) = self.items.split_at_mut(i);
            (&mut tail[0], &mut head[j])
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.items.iter() }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> { self.items.iter_mut() }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn insert(&mut self, index: usize, item: T) {
        self.items.insert(index, item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Order preserving removal, O(n).
    pub fn remove(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    /// O(1) removal; the last element takes the freed slot.
    pub fn swap_remove(&mut self, index: usize) -> T {
        self.items.swap_remove(index)
    }

    pub fn discard(&mut self, index: usize) {
        let item = self.items.remove(index);
        self.run_discard_hook(item);
    }

    pub fn swap_discard(&mut self, index: usize) {
        let item = self.items.swap_remove(index);
        self.run_discard_hook(item);
    }

    /// Discards every element matching the predicate, preserving the order of the rest.
    pub fn discard_where(&mut self, mut discard: impl FnMut(&T) -> bool) {
        let mut ix = 0;
        while ix < self.items.len() {
            if discard(&self.items[ix]) {
                self.discard(ix);
            } else {
                ix += 1;
            }
        }
    }

    pub fn clear(&mut self) {
        for item in std::mem::take(&mut self.items) {
            self.run_discard_hook(item);
        }
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
    }

    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    pub fn shrink_to_fit(&mut self) {
        self.items.shrink_to_fit();
    }

    /// Moves every element of `other` to the end of `self`.
    pub fn append(&mut self, other: &mut TrackedVec<T>) {
        self.items.append(&mut other.items);
    }

    /// # Panics
    /// If no comparison function was configured.
    pub fn sort(&mut self) {
        let compare = self.expect_compare();
        self.items.sort_by(compare);
    }

    /// # Panics
    /// If no comparison function was configured.
    pub fn find_index(&self, needle: &T) -> Option<usize> {
        let compare = self.expect_compare();
        self.items.iter().position(|it| compare(it, needle) == Ordering::Equal)
    }

    pub fn find(&self, needle: &T) -> Option<&T> {
        self.find_index(needle).map(|ix| &self.items[ix])
    }

    pub fn contains(&self, needle: &T) -> bool {
        self.find_index(needle).is_some()
    }

    fn expect_compare(&self) -> CompareFn<T> {
        match self.compare {
            Some(compare) => compare,
            None => panic!("TrackedVec has no comparison function")
        }
    }

    fn run_discard_hook(&mut self, item: T) {
        match self.on_discard.as_mut() {
            Some(hook) => hook(item),
            None => drop(item)
        }
    }
}

impl<T: Clone> TrackedVec<T> {
    /// Copies the elements and the comparison function. The discard hook is not
    /// carried over.
    pub fn to_untracked(&self) -> TrackedVec<T> {
        TrackedVec {
            items: self.items.clone(),
            compare: self.compare,
            on_discard: None
        }
    }
}

impl<T> Drop for TrackedVec<T> {
    fn drop(&mut self) {
        if self.on_discard.is_some() {
            self.clear();
        }
    }
}

impl<T> std::ops::Index<usize> for TrackedVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> std::ops::IndexMut<usize> for TrackedVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T> Extend<T> for TrackedVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> std::iter::FromIterator<T> for TrackedVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            compare: None,
            on_discard: None
        }
    }
}

impl<'a, T> IntoIterator for &'a TrackedVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use super::*;

    fn recording(log: &Rc<RefCell<Vec<i32>>>) -> TrackedVec<i32> {
        let log = Rc::clone(log);
        TrackedVec::new()
            .with_compare(|a: &i32, b: &i32| a.cmp(b))
            .with_discard_hook(move |it| log.borrow_mut().push(it))
    }

    #[test]
    fn swap_remove_moves_last_into_slot() {
        let mut vec: TrackedVec<i32> = (0..5).collect();
        assert_eq!(vec.swap_remove(1), 1);
        assert_eq!(vec.as_slice(), &[0, 4, 2, 3]);
        assert_eq!(vec.remove(0), 0);
        assert_eq!(vec.as_slice(), &[4, 2, 3]);
    }

    #[test]
    fn index_loop_with_swap_remove_visits_every_element_once() {
        let mut vec: TrackedVec<i32> = (0..8).collect();
        let mut visited = Vec::new();
        let mut ix = 0;
        while ix < vec.len() {
            let value = vec[ix];
            visited.push(value);
            if value % 2 == 0 {
                vec.swap_remove(ix);
            } else {
                ix += 1;
            }
        }
        visited.sort();
        assert_eq!(visited, (0..8).collect::<Vec<_>>());
        assert!(vec.iter().all(|it| it % 2 == 1));
        assert_eq!(vec.len(), 4);
    }

    #[test]
    fn hook_runs_on_discard_and_clear_only() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut vec = recording(&log);
        vec.extend(vec![10, 20, 30, 40, 50]);

        assert_eq!(vec.swap_remove(0), 10);
        assert_eq!(vec.pop(), Some(40));
        assert!(log.borrow().is_empty());

        vec.swap_discard(0);
        assert_eq!(*log.borrow(), vec![50]);
        assert_eq!(vec.as_slice(), &[30, 20]);

        vec.clear();
        assert_eq!(*log.borrow(), vec![50, 30, 20]);
        assert!(vec.is_empty());
    }

    #[test]
    fn hook_runs_on_drop() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let mut vec = recording(&log);
            vec.push(1);
            vec.push(2);
        }
        assert_eq!(*log.borrow(), vec![1, 2]);
    }

    #[test]
    fn discard_where_keeps_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut vec = recording(&log);
        vec.extend(1..=6);
        vec.discard_where(|it| it % 3 == 0);
        assert_eq!(vec.as_slice(), &[1, 2, 4, 5]);
        assert_eq!(*log.borrow(), vec![3, 6]);
    }

    #[test]
    fn find_and_sort_use_the_comparator() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut vec = recording(&log);
        vec.extend(vec![5, 3, 9, 1]);
        assert_eq!(vec.find_index(&9), Some(2));
        assert!(vec.contains(&1));
        assert!(vec.find(&7).is_none());
        vec.sort();
        assert_eq!(vec.as_slice(), &[1, 3, 5, 9]);
        vec.reverse();
        assert_eq!(vec.as_slice(), &[9, 5, 3, 1]);
    }

    #[test]
    #[should_panic(expected = "no comparison function")]
    fn find_without_comparator_panics() {
        let vec: TrackedVec<i32> = (0..3).collect();
        let _ = vec.find_index(&1);
    }

    #[test]
    fn pair_mut_borrows_both_sides() {
        let mut vec: TrackedVec<i32> = (0..4).collect();
        {
            let (a, b) = vec.pair_mut(3, 1);
            std::mem::swap(a, b);
        }
        assert_eq!(vec.as_slice(), &[0, 3, 2, 1]);
    }

    #[test]
    fn append_and_copy() {
        let mut a: TrackedVec<i32> = (0..2).collect();
        let mut b: TrackedVec<i32> = (2..4).collect();
        a.append(&mut b);
        assert!(b.is_empty());
        let copy = a.to_untracked();
        assert_eq!(copy.as_slice(), a.as_slice());
    }
}
