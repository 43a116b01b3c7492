//! Thompson construction (component D→E) and the resulting NFA
//! representation (component E): an arena of states indexed by
//! integer, since the graph is directed and possibly cyclic.

pub mod subset;

use crate::alphabet::NUM_SYMBOLS;
use crate::ast::Ast;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct NfaState {
    pub accepting: Option<u32>,
    pub epsilon: Vec<usize>,
    /// Dense, one entry per symbol of Σ; each entry lists every target
    /// reachable on that symbol (an NFA may be nondeterministic).
    pub transitions: Vec<Vec<usize>>,
}

impl NfaState {
    fn new() -> Self {
        NfaState {
            accepting: None,
            epsilon: Vec::new(),
            transitions: vec![Vec::new(); NUM_SYMBOLS],
        }
    }

    pub fn is_accepting(&self) -> bool {
        self.accepting.is_some()
    }
}

/// A directed graph of [`NfaState`]s. Numbering (and freezing) happens
/// once, at the end of [`asts_to_nfa`]; after that, any attempt to add
/// a state or transition panics (mutating a frozen automaton is a
/// programmer error, not a recoverable one).
#[derive(Debug, Clone)]
pub struct Nfa {
    states: Vec<NfaState>,
    initial: usize,
    frozen: bool,
}

/// A Thompson fragment: `entry` is the sole external entry point,
/// `exit` has no outgoing edges except those added by the enclosing
/// construction.
struct Fragment {
    entry: usize,
    exit: usize,
}

impl Nfa {
    fn new_state(&mut self) -> usize {
        assert!(!self.frozen, "cannot add a state to a frozen NFA");
        self.states.push(NfaState::new());
        self.states.len() - 1
    }

    fn add_epsilon(&mut self, from: usize, to: usize) {
        assert!(!self.frozen, "cannot mutate a frozen NFA");
        self.states[from].epsilon.push(to);
    }

    fn add_symbol(&mut self, from: usize, symbol: u8, to: usize) {
        assert!(!self.frozen, "cannot mutate a frozen NFA");
        self.states[from].transitions[symbol as usize].push(to);
    }

    /// Builds an `(entry, exit)` fragment for `ast` by structural
    /// recursion.
    fn thompson(&mut self, ast: &Ast) -> Fragment {
        match ast {
            Ast::Symbol(c) => {
                let entry = self.new_state();
                let exit = self.new_state();
                self.add_symbol(entry, *c, exit);
                Fragment { entry, exit }
            }
            Ast::CharClass(set) => {
                let entry = self.new_state();
                let exit = self.new_state();
                for c in set.iter() {
                    self.add_symbol(entry, c, exit);
                }
                Fragment { entry, exit }
            }
            Ast::Kleene(inner) => {
                let frag = self.thompson(inner);
                let entry = self.new_state();
                let exit = self.new_state();
                self.add_epsilon(entry, frag.entry);
                self.add_epsilon(frag.exit, exit);
                self.add_epsilon(frag.exit, frag.entry);
                self.add_epsilon(entry, exit);
                Fragment { entry, exit }
            }
            Ast::Plus(inner) => {
                // Same as Kleene, minus the entry->exit bypass: built
                // directly instead of desugaring to Concat(x, Kleene(x))
                // so the inner fragment is never cloned.
                let frag = self.thompson(inner);
                let entry = self.new_state();
                let exit = self.new_state();
                self.add_epsilon(entry, frag.entry);
                self.add_epsilon(frag.exit, exit);
                self.add_epsilon(frag.exit, frag.entry);
                Fragment { entry, exit }
            }
            Ast::Alt(l, r) => {
                let lf = self.thompson(l);
                let rf = self.thompson(r);
                let entry = self.new_state();
                let exit = self.new_state();
                self.add_epsilon(entry, lf.entry);
                self.add_epsilon(entry, rf.entry);
                self.add_epsilon(lf.exit, exit);
                self.add_epsilon(rf.exit, exit);
                Fragment { entry, exit }
            }
            Ast::Concat(l, r) => {
                let lf = self.thompson(l);
                let rf = self.thompson(r);
                self.add_epsilon(lf.exit, rf.entry);
                Fragment {
                    entry: lf.entry,
                    exit: rf.exit,
                }
            }
        }
    }

    /// `ε-closure(T)`: smallest superset of `states` closed under
    /// epsilon transitions.
    pub fn closure(&self, states: impl IntoIterator<Item = usize>) -> BTreeSet<usize> {
        let mut result: BTreeSet<usize> = states.into_iter().collect();
        let mut stack: Vec<usize> = result.iter().copied().collect();
        while let Some(s) = stack.pop() {
            for &t in &self.states[s].epsilon {
                if result.insert(t) {
                    stack.push(t);
                }
            }
        }
        result
    }

    /// `move(T, σ) = { t : ∃ s ∈ T, s -σ→ t }`
    pub fn mv(&self, states: &BTreeSet<usize>, symbol: u8) -> BTreeSet<usize> {
        let mut out = BTreeSet::new();
        for &s in states {
            out.extend(self.states[s].transitions[symbol as usize].iter().copied());
        }
        out
    }

    pub fn states(&self) -> &[NfaState] {
        &self.states
    }

    pub fn initial_state(&self) -> usize {
        self.initial
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

/// Top-level linker: creates a global start state, builds each
/// rule's Thompson fragment in input order, marks its exit with the
/// rule's 1-based accepting ID, and wires the start state to every
/// fragment's entry with an epsilon edge. Freezes the result.
pub fn asts_to_nfa(asts: &[Ast]) -> Nfa {
    let mut nfa = Nfa {
        states: Vec::new(),
        initial: 0,
        frozen: false,
    };
    let start = nfa.new_state();
    nfa.initial = start;

    for (i, ast) in asts.iter().enumerate() {
        let rule_id = (i + 1) as u32;
        let fragment = nfa.thompson(ast);
        nfa.states[fragment.exit].accepting = Some(rule_id);
        nfa.add_epsilon(start, fragment.entry);
    }

    nfa.frozen = true;
    nfa
}
