//! An indexed binary min-heap.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry<K, P> {
    key: K,
    priority: P,
}

/// A minimum priority queue over `(key, priority)` pairs.
///
/// The heap is a dense array; a parallel map from key to current array
/// slot is updated on every swap, so [`decrease_priority`](MinQueue::decrease_priority)
/// locates its target in O(1) before re-heapifying in O(log n). This is
/// what makes Dijkstra's relaxation step cheap — a naive re-scan queue
/// would pay O(n) per relaxation.
///
/// Keys are unique while resident. Ties on priority are broken
/// deterministically but in no specified order.
#[derive(Debug, Clone)]
pub struct MinQueue<K, P> {
    heap: Vec<Entry<K, P>>,
    slots: FxHashMap<K, usize>,
}

impl<K: Eq + Hash, P: PartialEq> PartialEq for MinQueue<K, P> {
    fn eq(&self, other: &Self) -> bool {
        self.heap == other.heap && self.slots == other.slots
    }
}

impl<K, P> Default for MinQueue<K, P>
where
    K: Copy + Eq + Hash,
    P: Ord + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> MinQueue<K, P>
where
    K: Copy + Eq + Hash,
    P: Ord + Copy,
{
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            slots: FxHashMap::default(),
        }
    }

    /// Create an empty queue with pre-allocated room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = FxHashMap::default();
        slots.reserve(capacity);
        Self {
            heap: Vec::with_capacity(capacity),
            slots,
        }
    }

    /// Number of resident keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue has no resident keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `key` is currently resident.
    #[inline]
    pub fn contains(&self, key: K) -> bool {
        self.slots.contains_key(&key)
    }

    /// The current priority of `key`, if resident.
    #[inline]
    pub fn priority_of(&self, key: K) -> Option<P> {
        self.slots.get(&key).map(|&i| self.heap[i].priority)
    }

    /// Add a new key with the given priority.
    ///
    /// Fails with [`Error::DuplicateKey`] if `key` is already resident.
    pub fn insert(&mut self, key: K, priority: P) -> Result<()> {
        if self.slots.contains_key(&key) {
            return Err(Error::DuplicateKey);
        }
        let idx = self.heap.len();
        self.heap.push(Entry { key, priority });
        self.slots.insert(key, idx);
        self.sift_up(idx);
        Ok(())
    }

    /// Lower the priority of a resident key.
    ///
    /// This is a decrease-only operation: fails with
    /// [`Error::KeyNotFound`] if `key` is absent and with
    /// [`Error::InvalidPriority`] if `new_priority` is not strictly lower
    /// than the current one. A failed call leaves the queue unchanged.
    pub fn decrease_priority(&mut self, key: K, new_priority: P) -> Result<()> {
        let &idx = self.slots.get(&key).ok_or(Error::KeyNotFound)?;
        if new_priority >= self.heap[idx].priority {
            return Err(Error::InvalidPriority);
        }
        self.heap[idx].priority = new_priority;
        self.sift_up(idx);
        Ok(())
    }

    /// Remove and return the key with the smallest priority.
    ///
    /// Fails with [`Error::EmptyQueue`] if no keys remain.
    pub fn extract_min(&mut self) -> Result<(K, P)> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let last = self.heap.len() - 1;
        self.swap_entries(0, last);
        let entry = self.heap.pop().ok_or(Error::EmptyQueue)?;
        self.slots.remove(&entry.key);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok((entry.key, entry.priority))
    }

    /// The minimum key/priority pair, without removing it.
    ///
    /// Fails with [`Error::EmptyQueue`] if no keys remain.
    pub fn peek(&self) -> Result<(K, P)> {
        self.heap
            .first()
            .map(|e| (e.key, e.priority))
            .ok_or(Error::EmptyQueue)
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.heap[idx].priority < self.heap[parent].priority {
                self.swap_entries(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut smallest = idx;
            if left < len && self.heap[left].priority < self.heap[smallest].priority {
                smallest = left;
            }
            if right < len && self.heap[right].priority < self.heap[smallest].priority {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.swap_entries(idx, smallest);
            idx = smallest;
        }
    }

    /// Swap two heap slots, keeping the key→slot map consistent.
    fn swap_entries(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.slots.insert(self.heap[a].key, a);
        self.slots.insert(self.heap[b].key, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_extract_in_priority_order() {
        let mut q = MinQueue::new();
        q.insert("a", 5).unwrap();
        q.insert("b", 2).unwrap();
        q.insert("c", 8).unwrap();
        q.decrease_priority("c", 1).unwrap();
        assert_eq!(q.extract_min().unwrap(), ("c", 1));
        assert_eq!(q.extract_min().unwrap(), ("b", 2));
        assert_eq!(q.extract_min().unwrap(), ("a", 5));
        assert_eq!(q.extract_min().unwrap_err(), Error::EmptyQueue);
    }

    #[test]
    fn duplicate_key_rejected() {
        let mut q = MinQueue::new();
        q.insert(7u32, 1).unwrap();
        assert_eq!(q.insert(7u32, 3).unwrap_err(), Error::DuplicateKey);
        // Extracted keys may be re-inserted.
        q.extract_min().unwrap();
        q.insert(7u32, 3).unwrap();
        assert_eq!(q.priority_of(7), Some(3));
    }

    #[test]
    fn decrease_priority_absent_key() {
        let mut q: MinQueue<u32, i32> = MinQueue::new();
        assert_eq!(q.decrease_priority(1, 0).unwrap_err(), Error::KeyNotFound);
    }

    #[test]
    fn failed_decrease_leaves_queue_unchanged() {
        let mut q = MinQueue::new();
        q.insert("a", 5).unwrap();
        q.insert("b", 2).unwrap();
        q.insert("c", 8).unwrap();
        let before = q.clone();
        assert_eq!(q.decrease_priority("a", 5).unwrap_err(), Error::InvalidPriority);
        assert_eq!(q.decrease_priority("a", 9).unwrap_err(), Error::InvalidPriority);
        assert_eq!(q, before);
    }

    #[test]
    fn peek_does_not_remove() {
        let mut q = MinQueue::new();
        assert_eq!(q.peek().unwrap_err(), Error::EmptyQueue);
        q.insert('x', 4).unwrap();
        q.insert('y', 2).unwrap();
        assert_eq!(q.peek().unwrap(), ('y', 2));
        assert_eq!(q.len(), 2);
        assert_eq!(q.extract_min().unwrap(), ('y', 2));
    }

    #[test]
    fn membership_tracking() {
        let mut q = MinQueue::new();
        q.insert(1u8, 10).unwrap();
        q.insert(2u8, 20).unwrap();
        assert!(q.contains(1));
        assert_eq!(q.priority_of(2), Some(20));
        assert_eq!(q.priority_of(3), None);
        q.extract_min().unwrap();
        assert!(!q.contains(1));
        assert!(!q.is_empty());
    }

    /// Cross-check the heap against a brute-force shadow list over a long
    /// scripted operation sequence.
    #[test]
    fn matches_brute_force_shadow() {
        let mut q: MinQueue<usize, u32> = MinQueue::new();
        let mut shadow: Vec<(usize, u32)> = Vec::new();
        // Deterministic pseudo-random sequence.
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 33) as u32
        };

        for step in 0..2000 {
            match next() % 4 {
                0 | 1 => {
                    let key = step; // unique keys
                    let pri = next() % 1000;
                    q.insert(key, pri).unwrap();
                    shadow.push((key, pri));
                }
                2 => {
                    if let Some(i) = shadow.len().checked_sub(1) {
                        let i = (next() as usize) % (i + 1);
                        let (key, pri) = shadow[i];
                        if pri > 0 {
                            let new = next() % pri;
                            q.decrease_priority(key, new).unwrap();
                            shadow[i].1 = new;
                        }
                    }
                }
                _ => {
                    if shadow.is_empty() {
                        assert_eq!(q.extract_min().unwrap_err(), Error::EmptyQueue);
                    } else {
                        let (key, got) = q.extract_min().unwrap();
                        let min = shadow.iter().map(|&(_, p)| p).min().unwrap();
                        assert_eq!(got, min);
                        // Tie order is unspecified, but whatever came out
                        // must carry the minimal priority.
                        let at = shadow.iter().position(|&(k, _)| k == key).unwrap();
                        assert_eq!(shadow[at].1, min);
                        shadow.swap_remove(at);
                    }
                }
            }
            assert_eq!(q.len(), shadow.len());
        }

        // Drain what remains; priorities must come out sorted.
        let mut prev = 0;
        while let Ok((_, p)) = q.extract_min() {
            assert!(p >= prev);
            prev = p;
        }
    }
}
