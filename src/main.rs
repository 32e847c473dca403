//! jsontree CLI.
//!
//! Small demo front end over the library: validate a document, re-render it
//! compact or indented, or pull a single node out by path.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use jsontree::{compact, indented, parse_file, write_file, JsonValue};

#[derive(Parser)]
#[command(name = "jsontree")]
#[command(about = "JSON tokenizer, parser, and pretty-printer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a file and report whether it is valid JSON
    Check {
        /// Path to the JSON document
        file: PathBuf,
    },

    /// Re-render a file, indented by default
    Fmt {
        /// Path to the JSON document
        file: PathBuf,

        /// Indent width for the indented form
        #[arg(long, default_value_t = 4, conflicts_with = "compact")]
        indent: usize,

        /// Render the single-line compact form instead
        #[arg(long)]
        compact: bool,

        /// Write to a file (parent directories are created) instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the node at a dot-separated path of keys and indices
    Get {
        /// Path to the JSON document
        file: PathBuf,

        /// Path such as `users.3.name`; digits address array elements
        path: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file } => match parse_file(&file) {
            Ok(_) => {
                println!("{}: valid JSON", file.display());
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{}: {}", file.display(), err);
                ExitCode::FAILURE
            }
        },
        Commands::Fmt {
            file,
            indent,
            compact: compact_form,
            output,
        } => {
            let tree = match parse_file(&file) {
                Ok(tree) => tree,
                Err(err) => {
                    eprintln!("{}: {}", file.display(), err);
                    return ExitCode::FAILURE;
                }
            };
            match output {
                Some(out_path) => {
                    // File output is always the indented form; write_file
                    // creates missing parent directories.
                    if let Err(err) = write_file(&tree, &out_path, indent) {
                        eprintln!("{}: {}", out_path.display(), err);
                        return ExitCode::FAILURE;
                    }
                }
                None if compact_form => println!("{}", compact(&tree)),
                None => println!("{}", indented(&tree, indent)),
            }
            ExitCode::SUCCESS
        }
        Commands::Get { file, path } => {
            let tree = match parse_file(&file) {
                Ok(tree) => tree,
                Err(err) => {
                    eprintln!("{}: {}", file.display(), err);
                    return ExitCode::FAILURE;
                }
            };
            match lookup(&tree, &path) {
                Some(node) => {
                    println!("{}", compact(node));
                    ExitCode::SUCCESS
                }
                None => {
                    eprintln!("no node at path {:?}", path);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

/// Walk a dot-separated path. All-digit segments address array elements,
/// anything else addresses object keys.
fn lookup<'a>(root: &'a JsonValue, path: &str) -> Option<&'a JsonValue> {
    let mut node = root;
    for segment in path.split('.') {
        node = match segment.parse::<usize>() {
            Ok(index) => node.get_index(index)?,
            Err(_) => node.get(segment)?,
        };
    }
    Some(node)
}
