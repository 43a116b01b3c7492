//! Graphviz dot rendering for NFAs and DFAs, used by the CLI's
//! `-n`, `-d` and `-m` debug flags. Not part of the compilation
//! pipeline itself, just a rendering of an intermediate structure for
//! a human to look at.

use crate::dfa::Dfa;
use crate::nfa::Nfa;
use crate::token::printable_repr;
use std::fmt::Write as _;

fn state_label(index: usize, accepting: Option<u32>) -> String {
    match accepting {
        Some(id) => format!("s{index},{id}"),
        None => format!("s{index}"),
    }
}

fn state_shape(accepting: bool) -> &'static str {
    if accepting {
        "doublecircle"
    } else {
        "circle"
    }
}

pub fn nfa_dot(nfa: &Nfa) -> String {
    let mut out = String::new();
    writeln!(out, "digraph NFA {{").unwrap();
    writeln!(out, "    rankdir=LR;").unwrap();
    writeln!(out, "    I [style=invis];").unwrap();
    writeln!(out, "    I -> S{};", nfa.initial_state()).unwrap();

    for (i, state) in nfa.states().iter().enumerate() {
        writeln!(
            out,
            "    S{i} [label=\"{}\", shape={}];",
            state_label(i, state.accepting),
            state_shape(state.is_accepting())
        )
        .unwrap();
    }

    for (i, state) in nfa.states().iter().enumerate() {
        for &target in &state.epsilon {
            writeln!(out, "    S{i} -> S{target} [label=\"ε\"];").unwrap();
        }
        for (symbol, targets) in state.transitions.iter().enumerate() {
            for &target in targets {
                writeln!(
                    out,
                    "    S{i} -> S{target} [label=\"{}\"];",
                    printable_repr(symbol as u8)
                )
                .unwrap();
            }
        }
    }

    writeln!(out, "}}").unwrap();
    out
}

/// `type_name` distinguishes the plain subset-construction DFA from
/// the minimized one in the rendered digraph's identifier (e.g. `DFA`
/// vs `MinDFA`).
pub fn dfa_dot(dfa: &Dfa, type_name: &str) -> String {
    let mut out = String::new();
    writeln!(out, "digraph {type_name} {{").unwrap();
    writeln!(out, "    rankdir=LR;").unwrap();
    writeln!(out, "    I [style=invis];").unwrap();
    writeln!(out, "    I -> S{};", dfa.initial_state()).unwrap();

    for (i, state) in dfa.states().iter().enumerate() {
        writeln!(
            out,
            "    S{i} [label=\"{}\", shape={}];",
            state_label(i, state.accepting),
            state_shape(state.is_accepting())
        )
        .unwrap();
    }

    for (i, state) in dfa.states().iter().enumerate() {
        for (symbol, target) in state.transitions.iter().enumerate() {
            if let Some(target) = target {
                writeln!(
                    out,
                    "    S{i} -> S{target} [label=\"{}\"];",
                    printable_repr(symbol as u8)
                )
                .unwrap();
            }
        }
    }

    writeln!(out, "}}").unwrap();
    out
}
