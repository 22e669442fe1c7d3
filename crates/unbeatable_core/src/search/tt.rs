//! Transposition table for alpha-beta search.
//!
//! Positions reached through different move orders (or, with symmetric
//! keys, positions that are rotations and reflections of each other) share
//! one entry. A table lives for a single search; nothing is kept between
//! calls.

use super::Score;
use crate::types::Role;
use std::collections::HashMap;
use std::hash::Hash;

/// How a stored score relates to the true value of the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The search completed inside its window.
    Exact,
    /// True value is at least the stored score (cutoff on a maximizing node).
    Lower,
    /// True value is at most the stored score (cutoff on a minimizing node).
    Upper,
}

/// A stored search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Score found for the position.
    pub score: Score,
    /// How to interpret `score`.
    pub bound: Bound,
}

impl Entry {
    /// Classifies `score` against the window `(alpha, beta)` it was searched with.
    pub fn classify(score: Score, alpha: Score, beta: Score) -> Self {
        let bound = if score <= alpha {
            Bound::Upper
        } else if score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        Self { score, bound }
    }
}

/// Search results keyed by position and side to move.
#[derive(Debug, Clone)]
pub struct TranspositionTable<K> {
    entries: HashMap<(K, Role), Entry>,
    hits: u64,
}

impl<K: Eq + Hash> TranspositionTable<K> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
        }
    }

    /// Returns the entry for a position, counting the lookup as a hit if present.
    pub fn probe(&mut self, key: K, to_move: Role) -> Option<Entry> {
        let entry = self.entries.get(&(key, to_move)).copied();
        if entry.is_some() {
            self.hits += 1;
        }
        entry
    }

    /// Stores a result, replacing any older entry for the position.
    pub fn store(&mut self, key: K, to_move: Role, entry: Entry) {
        self.entries.insert((key, to_move), entry);
    }

    /// Number of positions stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Successful probes so far.
    pub fn hits(&self) -> u64 {
        self.hits
    }
}

impl<K: Eq + Hash> Default for TranspositionTable<K> {
    fn default() -> Self {
        Self::new()
    }
}
