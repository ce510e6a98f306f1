//! Depth-first beam search for keys within a bounded edit distance.
//!
//! A [`SearchFrame`] pairs a trie state with a cursor into the query, a
//! running edit count, and the candidate key spelled out so far. Expanding
//! a frame applies the Damerau-Levenshtein unit operations: a free match
//! when the next query byte labels a transition, and otherwise deletion,
//! substitution, insertion and adjacent transposition, each costing one
//! edit. The cutoff prunes the tree.
//!
//! Frames are immutable once pushed; the hit table is the only mutable
//! output. The same candidate may be reached along edit scripts of
//! different cost, so the table keeps the smallest distance seen per
//! candidate.

use ahash::AHashMap;

use super::{State, StateId};

/// One position in the joint (trie state, query cursor, edit budget,
/// candidate) search space.
#[derive(Debug, Clone)]
pub(crate) struct SearchFrame {
    /// Current automaton state.
    state: StateId,
    /// Edit operations spent to produce this frame.
    edits: u32,
    /// Byte offset of the next unconsumed query byte.
    cursor: usize,
    /// Candidate key spelled out by the transitions taken so far.
    candidate: Vec<u8>,
}

impl SearchFrame {
    /// The seed frame: start state, no edits, nothing consumed or produced.
    pub(crate) fn initial() -> Self {
        SearchFrame {
            state: 0,
            edits: 0,
            cursor: 0,
            candidate: Vec::new(),
        }
    }

    /// Successor frame with `append` added to the candidate.
    fn child(&self, state: StateId, edits: u32, cursor: usize, append: &[u8]) -> Self {
        let mut candidate = Vec::with_capacity(self.candidate.len() + append.len());
        candidate.extend_from_slice(&self.candidate);
        candidate.extend_from_slice(append);
        SearchFrame {
            state,
            edits,
            cursor,
            candidate,
        }
    }
}

/// A recorded hit: the candidate's terminal state and the best distance
/// witnessed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawHit {
    pub(crate) state: StateId,
    pub(crate) distance: u32,
}

/// Search context for one query: the query bytes, the edit cutoff, and the
/// accumulated hit table.
///
/// The context does not own the work stack; the caller maintains it and
/// calls [`expand`](CorrectionSearch::expand) with each popped frame until
/// the stack drains.
#[derive(Debug)]
pub(crate) struct CorrectionSearch<'a> {
    query: &'a [u8],
    max_edits: u32,
    hits: AHashMap<Vec<u8>, RawHit>,
}

impl<'a> CorrectionSearch<'a> {
    pub(crate) fn new(query: &'a [u8], max_edits: u32) -> Self {
        CorrectionSearch {
            query,
            max_edits,
            hits: AHashMap::new(),
        }
    }

    /// Record `top` in the hit table if it accepts, and push its successor
    /// frames onto `stack`.
    pub(crate) fn expand(&mut self, top: &SearchFrame, states: &[State], stack: &mut Vec<SearchFrame>) {
        let state = &states[top.state as usize];
        let len = self.query.len();

        // Accepting state with the whole query consumed: keep the smaller
        // distance when the candidate was already reached another way.
        if top.cursor == len && state.accepting {
            let hit = RawHit {
                state: top.state,
                distance: top.edits,
            };
            self.hits
                .entry(top.candidate.clone())
                .and_modify(|entry| {
                    if entry.distance > hit.distance {
                        *entry = hit;
                    }
                })
                .or_insert(hit);
        }

        // Free match on the next query byte.
        if let Some(&byte) = self.query.get(top.cursor) {
            if let Some(&next) = state.transitions.get(&byte) {
                stack.push(top.child(next, top.edits, top.cursor + 1, &[byte]));
            }
        }

        // Everything below spends one edit.
        if top.edits >= self.max_edits {
            return;
        }

        // Deletion: consume a query byte without moving in the trie.
        if top.cursor < len {
            stack.push(top.child(top.state, top.edits + 1, top.cursor + 1, &[]));
        }

        for (&byte, &next) in &state.transitions {
            // Transposition: this edge carries the byte after the cursor,
            // and the byte under the cursor has a transition from there.
            if top.cursor + 1 < len && self.query[top.cursor + 1] == byte {
                let swapped = self.query[top.cursor];
                if let Some(&after) = states[next as usize].transitions.get(&swapped) {
                    stack.push(top.child(after, top.edits + 1, top.cursor + 2, &[byte, swapped]));
                }
            }

            // Substitution: produce the edge byte in place of the query
            // byte under the cursor.
            if top.cursor < len {
                stack.push(top.child(next, top.edits + 1, top.cursor + 1, &[byte]));
            }

            // Insertion: produce the edge byte, consume nothing.
            stack.push(top.child(next, top.edits + 1, top.cursor, &[byte]));
        }
    }

    /// Consume the context and hand out the hit table.
    pub(crate) fn into_hits(self) -> AHashMap<Vec<u8>, RawHit> {
        self.hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::Trie;

    fn build(words: &[&str]) -> Trie<f64> {
        let mut trie = Trie::new();
        trie.insert_words(words.iter().copied(), 1.0).unwrap();
        trie
    }

    fn distances(trie: &Trie<f64>, query: &str, max_edits: u32) -> Vec<(String, u32)> {
        let mut hits: Vec<(String, u32)> = trie
            .tolerant_find(query, max_edits)
            .into_iter()
            .map(|hit| (String::from_utf8(hit.term).unwrap(), hit.distance))
            .collect();
        hits.sort();
        hits
    }

    #[test]
    fn test_single_edit_operations() {
        let trie = build(&["cat"]);

        // Substitution, deletion from the query, insertion, transposition.
        assert_eq!(distances(&trie, "cut", 1), vec![("cat".to_string(), 1)]);
        assert_eq!(distances(&trie, "cats", 1), vec![("cat".to_string(), 1)]);
        assert_eq!(distances(&trie, "ca", 1), vec![("cat".to_string(), 1)]);
        assert_eq!(distances(&trie, "act", 1), vec![("cat".to_string(), 1)]);
    }

    #[test]
    fn test_transposition_costs_one() {
        let trie = build(&["abc"]);

        assert_eq!(distances(&trie, "acb", 1), vec![("abc".to_string(), 1)]);
        // With the budget for it, plain substitution pairs find it too,
        // but the reported distance stays the transposition's.
        assert_eq!(distances(&trie, "acb", 2), vec![("abc".to_string(), 1)]);
    }

    #[test]
    fn test_swapped_pair_resolves_in_one_edit() {
        let trie = build(&["ab"]);
        assert_eq!(distances(&trie, "ba", 1), vec![("ab".to_string(), 1)]);
    }

    #[test]
    fn test_no_transposition_without_matching_pair() {
        // Swapping "yz" gives "zy", which is not a path in the trie, so
        // only two substitutions reach "xy".
        let trie = build(&["xy"]);
        assert_eq!(distances(&trie, "yz", 1), Vec::new());
        assert_eq!(distances(&trie, "yz", 2), vec![("xy".to_string(), 2)]);
    }

    #[test]
    fn test_best_distance_wins_per_candidate() {
        let trie = build(&["cat"]);

        // The exact word is also reachable through costlier edit scripts;
        // the hit table must keep distance 0.
        let hits = trie.tolerant_find("cat", 2);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].distance, 0);
    }

    #[test]
    fn test_cutoff_prunes() {
        let trie = build(&["hello"]);

        assert_eq!(distances(&trie, "hxlxo", 1), Vec::new());
        assert_eq!(distances(&trie, "hxlxo", 2), vec![("hello".to_string(), 2)]);
    }

    #[test]
    fn test_empty_query_reaches_words_by_insertion() {
        let trie = build(&["ab"]);

        assert_eq!(distances(&trie, "", 1), Vec::new());
        assert_eq!(distances(&trie, "", 2), vec![("ab".to_string(), 2)]);
    }

    #[test]
    fn test_multiple_candidates_with_distances() {
        let trie = build(&["cat", "car", "bat"]);

        assert_eq!(
            distances(&trie, "cat", 1),
            vec![
                ("bat".to_string(), 1),
                ("car".to_string(), 1),
                ("cat".to_string(), 0),
            ]
        );
        assert_eq!(distances(&trie, "cot", 1), vec![("cat".to_string(), 1)]);
    }
}
