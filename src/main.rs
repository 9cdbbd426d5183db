use std::{fs, io::Read, process};

use left_recursion_eliminator::Grammar;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_help() {
    println!("Usage: left-recursion-eliminator [actions] [options] [grammar file]");
    println!("actions:");
    println!("  elf: Eliminate left recursion");
    println!("options:");
    println!("  -h: Print this help");
    println!("  -o: Also print the original grammar");
    println!("  -l: Print in LaTeX format");
    println!("  -j: Print in JSON format");
    println!();
    println!("One production per line, alternatives separated by spaces or '|':");
    println!("  S -> Aa | b");
    println!("  A -> Ac Sd m");
    println!("Uppercase letters are non-terminals, a lone 'e' is the empty production.");
}

enum OutputFormat {
    Plain,
    LaTeX,
    JSON,
}

fn render(g: &Grammar, output_format: &OutputFormat) -> String {
    let t = g.to_production_output_vec();
    match output_format {
        OutputFormat::Plain => t.to_plaintext(),
        OutputFormat::LaTeX => t.to_latex(),
        OutputFormat::JSON => t.to_json(),
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", message);
    process::exit(1);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = std::env::args().skip(1).collect::<Vec<String>>();
    let mut i: usize = 0;
    let mut eliminate = false;
    while i < args.len() && args[i] == "elf" {
        eliminate = true;
        i += 1;
    }

    let mut output_format = OutputFormat::Plain;
    let mut show_original = false;

    while i < args.len() && ["-h", "--help", "-o", "-l", "-j"].contains(&args[i].as_str()) {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-o" => show_original = true,
            "-l" => output_format = OutputFormat::LaTeX,
            "-j" => output_format = OutputFormat::JSON,
            _ => {}
        }
        i += 1;
    }

    if i + 1 < args.len() {
        print_help();
        return;
    }

    let input: String = if i == args.len() {
        let mut buf = String::new();
        if let Err(e) = std::io::stdin().lock().read_to_string(&mut buf) {
            fail(e);
        }
        buf
    } else {
        fs::read_to_string(args[i].as_str())
            .unwrap_or_else(|e| fail(format!("failed to read {}: {}", args[i], e)))
    };

    let g = Grammar::parse(&input).unwrap_or_else(|e| fail(e));
    info!(non_terminals = g.ordered_non_terminals().len(), "grammar parsed");

    if !eliminate {
        println!("{}", render(&g, &output_format));
        return;
    }

    let result = g.eliminate_left_recursion().unwrap_or_else(|e| fail(e));
    info!(
        added = result.ordered_non_terminals().len() - g.ordered_non_terminals().len(),
        "left recursion eliminated"
    );

    if show_original {
        println!("{}", render(&g, &output_format));
        println!();
    }
    println!("{}", render(&result, &output_format));
}
