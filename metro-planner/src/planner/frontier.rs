//! Min-priority frontier shared by the weighted searches.
//!
//! Entries are never updated in place: a station may sit in the frontier
//! several times under different tentative distances, and callers discard
//! dominated entries when they pop them.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::domain::StationName;

/// A tentative distance to a station.
#[derive(Debug, Clone, Copy)]
pub(super) struct Entry<'a> {
    pub station: &'a StationName,
    pub distance: f64,
    /// Insertion order; equal distances pop first-in first-out.
    seq: u64,
}

impl PartialEq for Entry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry<'_> {}

impl Ord for Entry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of tentative distances, smallest first.
#[derive(Debug, Default)]
pub(super) struct Frontier<'a> {
    heap: BinaryHeap<Entry<'a>>,
    next_seq: u64,
    pops: usize,
}

impl<'a> Frontier<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, station: &'a StationName, distance: f64) {
        self.heap.push(Entry {
            station,
            distance,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    pub fn pop(&mut self) -> Option<Entry<'a>> {
        let entry = self.heap.pop()?;
        self.pops += 1;
        Some(entry)
    }

    /// Number of entries popped so far.
    pub fn pops(&self) -> usize {
        self.pops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_first() {
        let a = StationName::new("A").unwrap();
        let b = StationName::new("B").unwrap();
        let c = StationName::new("C").unwrap();

        let mut frontier = Frontier::new();
        frontier.push(&a, 5.0);
        frontier.push(&b, 1.0);
        frontier.push(&c, 3.0);

        let order: Vec<&str> = std::iter::from_fn(|| frontier.pop())
            .map(|e| e.station.as_str())
            .collect();
        assert_eq!(order, vec!["B", "C", "A"]);
        assert_eq!(frontier.pops(), 3);
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let a = StationName::new("A").unwrap();
        let b = StationName::new("B").unwrap();

        let mut frontier = Frontier::new();
        frontier.push(&b, 2.0);
        frontier.push(&a, 2.0);

        assert_eq!(frontier.pop().unwrap().station.as_str(), "B");
        assert_eq!(frontier.pop().unwrap().station.as_str(), "A");
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn same_station_may_appear_twice() {
        let a = StationName::new("A").unwrap();

        let mut frontier = Frontier::new();
        frontier.push(&a, 4.0);
        frontier.push(&a, 2.0);

        assert_eq!(frontier.pop().unwrap().distance, 2.0);
        assert_eq!(frontier.pop().unwrap().distance, 4.0);
    }
}
