//! Rabin–Scott subset construction (component F): NFA → DFA.

use super::Nfa;
use crate::alphabet::NUM_SYMBOLS;
use crate::dfa::{Dfa, DfaState};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

impl Nfa {
    /// Builds the equivalent DFA. Each DFA state corresponds to one
    /// epsilon-closed configuration of NFA states; accepting IDs
    /// collapse to the minimum rule ID among accepting members of the
    /// configuration (this is what implements rule priority).
    pub fn to_dfa(&self) -> Dfa {
        let mut config_id: HashMap<BTreeSet<usize>, usize> = HashMap::new();
        let mut states: Vec<DfaState> = Vec::new();

        let q0 = self.closure([self.initial_state()]);
        config_id.insert(q0.clone(), 0);
        states.push(DfaState {
            accepting: accepting_id(self, &q0),
            transitions: vec![None; NUM_SYMBOLS],
        });

        let mut worklist = vec![q0];
        while let Some(q) = worklist.pop() {
            let from = config_id[&q];
            for symbol in 0..NUM_SYMBOLS as u16 {
                let symbol = symbol as u8;
                let moved = self.mv(&q, symbol);
                if moved.is_empty() {
                    continue;
                }
                let t = self.closure(moved);
                let to = *config_id.entry(t.clone()).or_insert_with(|| {
                    let id = states.len();
                    states.push(DfaState {
                        accepting: accepting_id(self, &t),
                        transitions: vec![None; NUM_SYMBOLS],
                    });
                    worklist.push(t.clone());
                    id
                });
                states[from].transitions[symbol as usize] = Some(to);
            }
        }

        debug!(nfa_states = self.states().len(), dfa_states = states.len(), "subset construction complete");
        Dfa::from_states(states, 0)
    }
}

fn accepting_id(nfa: &Nfa, config: &BTreeSet<usize>) -> Option<u32> {
    config
        .iter()
        .filter_map(|&s| nfa.states()[s].accepting)
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nfa::asts_to_nfa;
    use crate::parser;

    fn dfa_for(src: &str) -> Dfa {
        let asts = parser::parse(src).unwrap();
        asts_to_nfa(&asts).to_dfa()
    }

    #[test]
    fn accepts_each_rule() {
        let dfa = dfa_for("ab|c");
        assert!(dfa.accepts(b"ab"));
        assert!(dfa.accepts(b"c"));
        assert!(!dfa.accepts(b"a"));
        assert!(!dfa.accepts(b"abc"));
    }

    #[test]
    fn smaller_rule_id_wins_on_same_final_state() {
        // Both "a*" (rule 1) and "aa" (rule 2) reach an accepting
        // configuration for input "aa"; rule 1 must win.
        let dfa = dfa_for("a*\naa");
        let mut state = dfa.initial_state();
        for &b in b"aa" {
            state = dfa.states()[state].transitions[b as usize].unwrap();
        }
        assert_eq!(dfa.states()[state].accepting, Some(1));
    }

    #[test]
    fn subset_closure_invariant() {
        let asts = parser::parse("a*b").unwrap();
        let nfa = asts_to_nfa(&asts);
        let q0 = nfa.closure([nfa.initial_state()]);
        assert_eq!(nfa.closure(q0.clone()), q0, "closure must be idempotent");
    }
}
