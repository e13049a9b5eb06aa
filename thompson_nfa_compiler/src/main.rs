use std::process::ExitCode;

use thompson_nfa_compiler::{syntax, Compiler, Matcher, NFA};

const USAGE: &str = "usage: thompson_nfa_compiler <pattern> [input...]";

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let pattern = match args.next() {
        Some(pattern) => pattern,
        None => {
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    println!("=== Pattern: '{}' ===", pattern);

    let postfix = match syntax::parse(&pattern) {
        Ok(postfix) => postfix,
        Err(e) => {
            eprintln!("Failed to parse pattern: {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("Postfix: {}", syntax::render(&postfix));

    let nfa = match Compiler::new().compile(&postfix) {
        Ok(nfa) => nfa,
        Err(e) => {
            eprintln!("Failed to compile: {}", e);
            return ExitCode::FAILURE;
        }
    };
    print_nfa(&nfa);

    let matcher = Matcher::new(&nfa);
    for input in args {
        let verdict = if matcher.is_match(&input) { "match" } else { "no match" };
        println!("{:?}: {}", input, verdict);
    }

    ExitCode::SUCCESS
}

fn print_nfa(nfa: &NFA) {
    println!("Start state: {}", nfa.start());
    println!(
        "Accepting states: {:?}",
        nfa.accepting_states().collect::<Vec<_>>()
    );
    println!("{:?}", nfa);
}
