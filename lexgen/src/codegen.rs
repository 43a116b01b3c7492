//! Minimal DFA → C source (component I): a self-contained translation
//! unit exporting `char *pylex(FILE *file, int *category_out)`.
//!
//! The driver is a fixed template; only the two table
//! initializers vary per ruleset.

use crate::dfa::Dfa;
use std::fmt::Write as _;

const TEMPLATE_HEADER: &str = r#"/* Generated by lexgen. Do not edit by hand. */
#include <stdio.h>
#include <stdlib.h>
#include <string.h>

#define NUM_SYMBOLS {num_symbols}
#define INITIAL_CAPACITY 64
"#;

const TEMPLATE_DRIVER: &str = r#"
static void *grow(void *buf, size_t *capacity, size_t elem_size) {
    size_t new_capacity = *capacity * 2;
    void *grown = realloc(buf, new_capacity * elem_size);
    if (grown == NULL) {
        fprintf(stderr, "lexgen: out of memory while growing scanner buffer\n");
        exit(EXIT_FAILURE);
    }
    *capacity = new_capacity;
    return grown;
}

#define PUSH_STACK(s) \
    do { \
        if (stack_len == stack_capacity) { \
            stack = grow(stack, &stack_capacity, sizeof(int)); \
        } \
        stack[stack_len++] = (s); \
    } while (0)

#define APPEND_TO_LEXEME(c) \
    do { \
        if (lexeme_len + 1 == lexeme_capacity) { \
            lexeme = grow(lexeme, &lexeme_capacity, sizeof(char)); \
        } \
        lexeme[lexeme_len++] = (char)(c); \
    } while (0)

char *pylex(FILE *file, int *category_out) {
    size_t stack_capacity = INITIAL_CAPACITY;
    size_t stack_len = 0;
    int *stack = malloc(stack_capacity * sizeof(int));

    size_t lexeme_capacity = INITIAL_CAPACITY;
    size_t lexeme_len = 0;
    char *lexeme = malloc(lexeme_capacity * sizeof(char));

    if (stack == NULL || lexeme == NULL) {
        fprintf(stderr, "lexgen: out of memory while starting scanner\n");
        exit(EXIT_FAILURE);
    }

    int state = 0;

    for (;;) {
        int c = getc(file);
        if (c == EOF) {
            break;
        }
        APPEND_TO_LEXEME(c);
        if (accepting[state]) {
            stack_len = 0;
        }
        PUSH_STACK(state);
        state = transitions[state][c];
        if (state == -1) {
            break;
        }
    }

    while (!accepting[state] && stack_len > 0) {
        state = stack[--stack_len];
        lexeme_len--;
        if (ungetc((unsigned char)lexeme[lexeme_len], file) == EOF) {
            fprintf(stderr, "lexgen: ungetc failed during backtrack\n");
            exit(EXIT_FAILURE);
        }
    }

    free(stack);

    if (accepting[state]) {
        APPEND_TO_LEXEME('\0');
        *category_out = accepting[state];
        return lexeme;
    } else {
        free(lexeme);
        *category_out = -1;
        return NULL;
    }
}
"#;

/// Renders the minimized DFA's two tables and the fixed driver as one
/// C translation unit.
pub fn generate_c(dfa: &Dfa) -> String {
    let mut out = String::new();

    let num_symbols = dfa
        .states()
        .first()
        .map(|s| s.transitions.len())
        .unwrap_or(128);
    out.push_str(&TEMPLATE_HEADER.replace("{num_symbols}", &num_symbols.to_string()));

    out.push_str("\nstatic int accepting[] = {");
    for (i, state) in dfa.states().iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", state.accepting.unwrap_or(0));
    }
    out.push_str("};\n");

    let _ = writeln!(
        out,
        "static int transitions[][NUM_SYMBOLS] = {{"
    );
    for state in dfa.states() {
        out.push_str("    {");
        for (sym, target) in state.transitions.iter().enumerate() {
            if sym > 0 {
                out.push_str(", ");
            }
            match target {
                Some(t) => {
                    let _ = write!(out, "{t}");
                }
                None => out.push_str("-1"),
            }
        }
        out.push_str("},\n");
    }
    out.push_str("};\n");

    out.push_str(TEMPLATE_DRIVER);
    out
}
