//! Hopcroft-style partition refinement (component H): minimizes a DFA
//! while preserving accept classes, states accepting different rule
//! IDs may never merge, even if their languages coincide.

use super::{Dfa, DfaState};
use crate::alphabet::NUM_SYMBOLS;
use std::collections::{HashMap, VecDeque};
use tracing::debug;

impl Dfa {
    /// Produces the minimal DFA recognizing the same per-rule
    /// language. Implements the refinement by repeatedly
    /// regrouping states by the tuple of partition blocks their
    /// transitions land in, the "obvious grouping-by-target-partition
    /// formulation" rather than comparing each state only to a block's
    /// first member.
    pub fn minimize(&self) -> Dfa {
        let n = self.states.len();
        let mut block_of = initial_partition(&self.states);
        let mut num_blocks = distinct_count(&block_of);

        loop {
            let (refined, refined_count) = refine(&self.states, &block_of);
            if refined_count == num_blocks {
                block_of = refined;
                break;
            }
            block_of = refined;
            num_blocks = refined_count;
        }

        debug!(before = n, after = num_blocks, "hopcroft minimization complete");
        reconstruct(self, &block_of)
    }
}

fn initial_partition(states: &[DfaState]) -> Vec<usize> {
    let mut block_ids: HashMap<Option<u32>, usize> = HashMap::new();
    states
        .iter()
        .map(|s| {
            let next = block_ids.len();
            *block_ids.entry(s.accepting).or_insert(next)
        })
        .collect()
}

fn distinct_count(block_of: &[usize]) -> usize {
    block_of.iter().copied().collect::<std::collections::HashSet<_>>().len()
}

/// One refinement pass: every state's new block is determined by the
/// tuple `(old block, [old block of target on σ for σ ∈ Σ])`. This can
/// only split existing blocks, never merge them, so block count is
/// monotone nondecreasing across passes.
fn refine(states: &[DfaState], block_of: &[usize]) -> (Vec<usize>, usize) {
    let mut signature_ids: HashMap<Vec<usize>, usize> = HashMap::new();
    let mut new_block_of = vec![0usize; states.len()];

    for (i, state) in states.iter().enumerate() {
        let mut signature = Vec::with_capacity(NUM_SYMBOLS + 1);
        signature.push(block_of[i]);
        for target in &state.transitions {
            signature.push(target.map(|t| block_of[t]).unwrap_or(usize::MAX));
        }
        let next = signature_ids.len();
        new_block_of[i] = *signature_ids.entry(signature).or_insert(next);
    }

    let count = signature_ids.len();
    (new_block_of, count)
}

/// Builds the minimized DFA: one state per final block, numbered by a
/// BFS from the block containing the original initial state so state 0
/// remains the initial state.
fn reconstruct(dfa: &Dfa, block_of: &[usize]) -> Dfa {
    let mut members: HashMap<usize, Vec<usize>> = HashMap::new();
    for (i, &b) in block_of.iter().enumerate() {
        members.entry(b).or_default().push(i);
    }

    let initial_block = block_of[dfa.initial_state()];
    let mut new_id: HashMap<usize, usize> = HashMap::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    new_id.insert(initial_block, 0);
    order.push(initial_block);
    queue.push_back(initial_block);

    while let Some(block) = queue.pop_front() {
        let representative = members[&block][0];
        for target in dfa.states()[representative].transitions.iter().flatten() {
            let target_block = block_of[*target];
            if let std::collections::hash_map::Entry::Vacant(e) = new_id.entry(target_block) {
                e.insert(order.len());
                order.push(target_block);
                queue.push_back(target_block);
            }
        }
    }

    let new_states = order
        .iter()
        .map(|block| {
            let representative = members[block][0];
            let old = &dfa.states()[representative];
            let transitions = old
                .transitions
                .iter()
                .map(|t| t.map(|target| new_id[&block_of[target]]))
                .collect();
            DfaState {
                accepting: old.accepting,
                transitions,
            }
        })
        .collect();

    Dfa::from_states(new_states, 0)
}
