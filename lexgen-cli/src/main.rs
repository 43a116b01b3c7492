use clap::Parser as ClapParser;
use lexgen::ast::Ast;
use lexgen::error::{CodegenError, CompileError};
use lexgen::{codegen, dot, nfa};
use std::fs::File;
use std::io::{self, Read, Write};
use std::process::ExitCode;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Compiles a regex ruleset read from stdin into a table-driven C
/// scanner, optionally dumping any intermediate stage for inspection.
#[derive(ClapParser, Debug)]
#[command(name = "lexgen", about = "Compile regex rulesets into C scanners")]
struct Args {
    /// Log of regex tokens lexed, one per line
    #[arg(short = 'l', value_name = "FILE")]
    token_log: Option<String>,

    /// One AST per line (debug form)
    #[arg(short = 'a', value_name = "FILE")]
    ast_dump: Option<String>,

    /// NFA in Graphviz dot format
    #[arg(short = 'n', value_name = "FILE")]
    nfa_dot: Option<String>,

    /// DFA in Graphviz dot format
    #[arg(short = 'd', value_name = "FILE")]
    dfa_dot: Option<String>,

    /// Minimized DFA in Graphviz dot format
    #[arg(short = 'm', value_name = "FILE")]
    min_dfa_dot: Option<String>,

    /// Generated C scanner (default: stdout)
    #[arg(short = 'c', value_name = "FILE")]
    c_out: Option<String>,
}

/// Everything `run` can fail with: either the ruleset itself doesn't
/// compile, or a requested sink couldn't be written.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("lexgen: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .expect("failed to read regex source from stdin");

    let scanner = lexgen::scanner::Scanner::new(source.into_bytes());
    let scanner = match &args.token_log {
        Some(path) => scanner.with_log_sink(Box::new(create_sink(path)?)),
        None => scanner,
    };

    let asts = lexgen::parser::Parser::new(scanner)?.parse()?;
    info!(rules = asts.len(), "parsed ruleset");

    if let Some(path) = &args.ast_dump {
        write_sink(path, &dump_asts(&asts))?;
    }

    let nfa = nfa::asts_to_nfa(&asts);
    if let Some(path) = &args.nfa_dot {
        write_sink(path, &dot::nfa_dot(&nfa))?;
    }

    let dfa = nfa.to_dfa();
    if let Some(path) = &args.dfa_dot {
        write_sink(path, &dot::dfa_dot(&dfa, "DFA"))?;
    }

    let minimized = dfa.minimize();
    if let Some(path) = &args.min_dfa_dot {
        write_sink(path, &dot::dfa_dot(&minimized, "MinDFA"))?;
    }

    let c_source = codegen::generate_c(&minimized);
    match &args.c_out {
        Some(path) => write_sink(path, &c_source)?,
        None => print!("{c_source}"),
    }

    Ok(())
}

fn dump_asts(asts: &[Ast]) -> String {
    let mut out = String::new();
    for (i, ast) in asts.iter().enumerate() {
        let _ = writeln!(out, "{}: {:?}", i + 1, ast);
    }
    out
}

fn create_sink(path: &str) -> Result<File, CodegenError> {
    File::create(path).map_err(|source| CodegenError::SinkWrite {
        path: path.to_string(),
        source,
    })
}

fn write_sink(path: &str, content: &str) -> Result<(), CodegenError> {
    let mut file = create_sink(path)?;
    file.write_all(content.as_bytes())
        .map_err(|source| CodegenError::SinkWrite {
            path: path.to_string(),
            source,
        })
}
