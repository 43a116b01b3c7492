use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lazy_static::lazy_static;
use lexgen::dfa::Dfa;
use lexgen::nfa::asts_to_nfa;
use lexgen::parser;
use proptest::prelude::*;
use proptest::strategy::ValueTree;
use proptest::test_runner::TestRunner;
use regex::Regex as LibRegex;

lazy_static! {
    /// A ruleset broad enough to exercise every AST node kind and to
    /// produce a DFA with more than a handful of states once minimized.
    static ref RULESET: &'static str = "if\nwhile\nfor\n[a-z][a-z0-9]*\n[0-9]+\n[0-9]+\\.[0-9]+\n\\(\n\\)\n\\{\n\\}\n;\n,\n==|!=|<=|>=|<|>\n=\n\\+|-\n\\*|/\n[ ]+";
}

fn compile_pipeline(c: &mut Criterion) {
    c.bench_function("scan+parse", |b| {
        b.iter(|| parser::parse(black_box(*RULESET)).unwrap())
    });

    let asts = parser::parse(*RULESET).unwrap();
    c.bench_function("thompson construction", |b| {
        b.iter(|| asts_to_nfa(black_box(&asts)))
    });

    let nfa = asts_to_nfa(&asts);
    c.bench_function("subset construction", |b| b.iter(|| nfa.to_dfa()));

    let dfa = nfa.to_dfa();
    c.bench_function("hopcroft minimization", |b| b.iter(|| dfa.minimize()));

    c.bench_function("full pipeline", |b| {
        b.iter(|| {
            let asts = parser::parse(black_box(*RULESET)).unwrap();
            let nfa = asts_to_nfa(&asts);
            let dfa: Dfa = nfa.to_dfa();
            dfa.minimize()
        })
    });
}

fn scanning_throughput(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let identifiers = "[a-z]{1,32}".new_tree(&mut runner).unwrap();
    let minimized = asts_to_nfa(&parser::parse(*RULESET).unwrap())
        .to_dfa()
        .minimize();

    c.bench_function("lexgen accepts (identifier-shaped input)", |b| {
        b.iter(|| minimized.accepts(black_box(identifiers.current().as_bytes())))
    });

    // A single-rule comparison against the `regex` crate: not an
    // apples-to-apples measurement (that crate targets search over
    // Unicode text, this one whole-string membership over bytes) but
    // useful as a sanity check that the generated DFA isn't orders of
    // magnitude slower at the one thing both can do.
    let lib_regex = LibRegex::new("^[a-z]+$").unwrap();
    c.bench_function("regex crate is_match (identifier-shaped input)", |b| {
        b.iter(|| lib_regex.is_match(black_box(&identifiers.current())))
    });
}

criterion_group!(benches, compile_pipeline, scanning_throughput);
criterion_main!(benches);
