use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use predicate_rs::{evaluate, tokenize, Bindings, PredicateError};

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate an expression and print true or false
    Eval {
        /// The expression to evaluate
        #[arg(short, long)]
        expr: String,

        /// Variable binding as key=value, may be repeated
        #[arg(short, long = "var")]
        vars: Vec<String>,

        /// YAML or JSON file with variable bindings
        #[arg(short, long)]
        bindings: Option<PathBuf>,
    },
    /// Print the token stream of an expression
    ///
    /// Boolean tokens print their value, so a scanned word other than
    /// `true` (e.g. `ve`) prints as `false`.
    Tokens {
        /// The expression to tokenize
        #[arg(short, long)]
        expr: String,

        /// Print tokens as a JSON array
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Eval {
            expr,
            vars,
            bindings,
        } => {
            // Fall back to the configured bindings file
            let path = bindings
                .or_else(|| std::env::var("PREDICATE_BINDINGS").ok().map(PathBuf::from));

            let bindings = build_bindings(path.as_ref(), &vars).with_context(|| match &path {
                Some(p) => format!("Failed to load bindings from {}", p.display()),
                None => "Failed to parse --var bindings".to_string(),
            })?;
            log::info!("Loaded {} binding(s)", bindings.len());

            let result = evaluate(&expr, &bindings)
                .with_context(|| format!("Failed to evaluate '{}'", expr))?;
            println!("{}", result);
        }
        Commands::Tokens { expr, json } => {
            let tokens = tokenize(&expr);
            if json {
                println!("{}", serde_json::to_string_pretty(&tokens)?);
            } else {
                for token in tokens {
                    println!("{}", token);
                }
            }
        }
    }

    Ok(())
}

/// File bindings first, `--var` pairs override them
fn build_bindings(path: Option<&PathBuf>, vars: &[String]) -> Result<Bindings, PredicateError> {
    let mut bindings = match path {
        Some(path) => Bindings::load(path)?,
        None => Bindings::new(),
    };
    for pair in vars {
        bindings.extend_pairs(pair)?;
    }
    Ok(bindings)
}
