//! Dijkstra's algorithm over a [`SearchSpace`], driven by the indexed
//! min-queue.

use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::Result;
use crate::queue::MinQueue;
use crate::traits::SearchSpace;

/// Sentinel distance meaning "not reached".
pub const UNREACHABLE: i32 = i32::MAX;

/// Compute single-source shortest distances to every state of `space`.
///
/// Every state is seeded into the queue at [`UNREACHABLE`] and the source
/// at 0; the source is seeded even if `space.states()` omits it (its
/// distance is 0 by definition). The main loop extracts the
/// minimum-distance state and relaxes its successors through
/// [`MinQueue::decrease_priority`]; a successor reached at exactly its
/// recorded distance gains an extra predecessor, so the result can
/// enumerate every state lying on *any* shortest path.
///
/// Queue errors propagate; they indicate a contract violation in the
/// [`SearchSpace`] impl (duplicate states, negative costs).
pub fn dijkstra<G: SearchSpace>(
    space: &G,
    source: G::State,
) -> Result<ShortestPaths<G::State>> {
    let mut states = Vec::new();
    space.states(&mut states);

    let mut queue = MinQueue::with_capacity(states.len() + 1);
    let mut dist: FxHashMap<G::State, i32> = FxHashMap::default();
    let mut preds: FxHashMap<G::State, Vec<G::State>> = FxHashMap::default();

    queue.insert(source, 0)?;
    dist.insert(source, 0);
    for &s in &states {
        if s != source {
            queue.insert(s, UNREACHABLE)?;
            dist.insert(s, UNREACHABLE);
        }
    }

    let mut succ = Vec::new();
    while !queue.is_empty() {
        let (u, du) = queue.extract_min()?;
        if du == UNREACHABLE {
            // Everything still resident is unreachable.
            break;
        }

        succ.clear();
        space.successors(u, &mut succ);
        for &(v, cost) in &succ {
            debug_assert!(cost >= 0, "negative edge cost");
            let Some(&dv) = dist.get(&v) else {
                // Successor outside the seeded state set.
                continue;
            };
            let alt = du.saturating_add(cost).min(UNREACHABLE);
            if alt < dv {
                queue.decrease_priority(v, alt)?;
                dist.insert(v, alt);
                preds.insert(v, vec![u]);
            } else if alt == dv && alt != UNREACHABLE {
                // Another shortest route into v.
                preds.entry(v).or_default().push(u);
            }
        }
    }

    Ok(ShortestPaths {
        source,
        dist,
        preds,
    })
}

/// The result of a [`dijkstra`] run: distances and predecessor links for
/// every seeded state.
#[derive(Debug, Clone)]
pub struct ShortestPaths<S> {
    source: S,
    dist: FxHashMap<S, i32>,
    preds: FxHashMap<S, Vec<S>>,
}

impl<S: Copy + Eq + Hash> ShortestPaths<S> {
    /// The source state the run started from.
    #[inline]
    pub fn source(&self) -> S {
        self.source
    }

    /// The minimal distance to `s`, or [`UNREACHABLE`] if `s` was never
    /// reached (or was not a state at all).
    #[inline]
    pub fn distance(&self, s: S) -> i32 {
        self.dist.get(&s).copied().unwrap_or(UNREACHABLE)
    }

    /// Whether `s` was reached.
    #[inline]
    pub fn reachable(&self, s: S) -> bool {
        self.distance(s) != UNREACHABLE
    }

    /// All recorded shortest-path predecessors of `s`. Empty for the
    /// source and for unreached states.
    pub fn predecessors(&self, s: S) -> &[S] {
        self.preds.get(&s).map_or(&[], Vec::as_slice)
    }

    /// Reconstruct one shortest path from the source to `target`,
    /// source first. Returns `None` if `target` is unreachable.
    pub fn path_to(&self, target: S) -> Option<Vec<S>> {
        if !self.reachable(target) {
            return None;
        }
        let mut path = vec![target];
        let mut cur = target;
        while cur != self.source {
            cur = *self.preds.get(&cur)?.first()?;
            path.push(cur);
        }
        path.reverse();
        Some(path)
    }

    /// The union of every state lying on any shortest path from the
    /// source to any reachable state in `targets`.
    pub fn all_path_states(&self, targets: &[S]) -> FxHashSet<S> {
        let mut on_path = FxHashSet::default();
        let mut stack = Vec::new();
        for &t in targets {
            if self.reachable(t) && on_path.insert(t) {
                stack.push(t);
            }
        }
        while let Some(s) = stack.pop() {
            for &p in self.predecessors(s) {
                if on_path.insert(p) {
                    stack.push(p);
                }
            }
        }
        on_path
    }

    /// Iterate over `(state, distance)` pairs of the reached states, in
    /// no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (S, i32)> + '_ {
        self.dist
            .iter()
            .filter(|&(_, &d)| d != UNREACHABLE)
            .map(|(&s, &d)| (s, d))
    }
}
