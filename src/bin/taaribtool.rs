use std::fs;
use std::io::{BufWriter, Write};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use taarib::suggest::{suggestions, SuggestionMode};
use taarib::translit::{
    parse_tables_toml, transliterate_full, transliterate_partial, Tables, DEFAULT_TOML,
};

#[derive(Parser)]
#[command(name = "taaribtool", about = "Arabizi transliteration diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate a string and print the result
    Translit {
        /// Text to transliterate
        text: String,
        /// Convert digits and digraphs only, leaving plain letters Latin
        #[arg(long)]
        partial: bool,
        /// Path to a custom tables TOML file
        #[arg(long)]
        tables: Option<String>,
    },

    /// Look up dictionary suggestions for a string
    Suggest {
        /// Text to look up
        text: String,
        /// Processing mode: full, partial or strip
        #[arg(long, default_value = "strip")]
        mode: String,
        /// Path to a custom tables TOML file
        #[arg(long)]
        tables: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Transliterate each line of a file and write JSONL records
    Batch {
        /// Path to the input file (one string per line)
        input_file: String,
        /// Path to the output JSONL file
        output_file: String,
        /// Convert digits and digraphs only, leaving plain letters Latin
        #[arg(long)]
        partial: bool,
        /// Path to a custom tables TOML file
        #[arg(long)]
        tables: Option<String>,
    },

    /// Validate a tables TOML file
    CheckTables {
        /// Path to the tables TOML file
        tables_file: String,
    },
}

/// A single batch record (one per input line).
#[derive(Debug, Serialize)]
struct BatchEntry {
    input: String,
    output: String,
}

fn load_tables(path: Option<&str>) -> Tables {
    match path {
        Some(p) => {
            let content = fs::read_to_string(p).unwrap_or_else(|e| {
                eprintln!("Failed to read tables file {}: {}", p, e);
                process::exit(1);
            });
            parse_tables_toml(&content).unwrap_or_else(|e| {
                eprintln!("Failed to parse tables file {}: {}", p, e);
                process::exit(1);
            })
        }
        None => parse_tables_toml(DEFAULT_TOML).expect("embedded default tables must be valid"),
    }
}

fn read_lines(input_file: &str) -> Vec<String> {
    let content = fs::read_to_string(input_file).unwrap_or_else(|e| {
        eprintln!("Failed to read input file {}: {}", input_file, e);
        process::exit(1);
    });
    content
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect()
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Translit {
            text,
            partial,
            tables,
        } => {
            let tables = load_tables(tables.as_deref());
            let output = if partial {
                transliterate_partial(&tables, &text)
            } else {
                transliterate_full(&tables, &text)
            };
            println!("{}", output);
        }

        Command::Suggest {
            text,
            mode,
            tables,
            json,
        } => {
            let tables = load_tables(tables.as_deref());
            let matches = suggestions(&tables, &text, SuggestionMode::parse(&mode));

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&matches).expect("JSON serialization failed")
                );
            } else if matches.is_empty() {
                eprintln!("No matches");
            } else {
                for value in &matches {
                    println!("{}", value);
                }
            }
        }

        Command::Batch {
            input_file,
            output_file,
            partial,
            tables,
        } => {
            let tables = load_tables(tables.as_deref());
            let lines = read_lines(&input_file);

            let file = fs::File::create(&output_file).unwrap_or_else(|e| {
                eprintln!("Failed to create output file {}: {}", output_file, e);
                process::exit(1);
            });
            let mut writer = BufWriter::new(file);

            for input in &lines {
                let output = if partial {
                    transliterate_partial(&tables, input)
                } else {
                    transliterate_full(&tables, input)
                };
                let entry = BatchEntry {
                    input: input.clone(),
                    output,
                };
                let line = serde_json::to_string(&entry).expect("JSON serialization failed");
                writeln!(writer, "{}", line).unwrap_or_else(|e| {
                    eprintln!("Failed to write: {}", e);
                    process::exit(1);
                });
            }

            eprintln!("Batch written: {} lines -> {}", lines.len(), output_file);
        }

        Command::CheckTables { tables_file } => {
            let content = fs::read_to_string(&tables_file).unwrap_or_else(|e| {
                eprintln!("Failed to read tables file {}: {}", tables_file, e);
                process::exit(1);
            });
            match parse_tables_toml(&content) {
                Ok(tables) => {
                    println!(
                        "OK: {} digraphs, {} singles, {} prefixes, {} dictionary entries",
                        tables.digraphs().len(),
                        tables.singles().len(),
                        tables.prefixes().len(),
                        tables.dictionary().len()
                    );
                }
                Err(e) => {
                    eprintln!("Invalid tables file: {}", e);
                    process::exit(1);
                }
            }
        }
    }
}
