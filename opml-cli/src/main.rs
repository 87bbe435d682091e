// Command-line interface for opml-babel
//
// This binary converts OPML exports from outliner tools (Dynalist, WorkFlowy)
// into OPML that Treeify imports cleanly.
//
// Converting needs a source dialect. It can be given explicitly with --from,
// or guessed from the input: WorkFlowy spells its completion flag
// `_complete`, Dynalist spells it `complete`. Guessing is conservative; when
// in doubt the tool asks for an explicit --from rather than silently picking
// the wrong Markdown/HTML layer.
//
// Usage:
//  opml2treeify <input> --from <dialect> [--output <file>]          - Convert (default)
//  opml2treeify convert <input> --from <dialect> [--output <file>]  - Same as above (explicit)
//  opml2treeify inspect <input> [--from <dialect>]                  - Dump the parsed document as JSON
//  opml2treeify --list-dialects                                     - List supported source dialects
//
// The input path may be "-" to read from stdin. Output goes to stdout by
// default, or to a file with -o.

use clap::{Arg, ArgAction, Command, ValueHint};
use opml_babel::{convert, convert_document, Dialect};
use std::fs;
use std::io::Read;

fn build_cli() -> Command {
    Command::new("opml2treeify")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert outliner OPML exports into Treeify OPML")
        .long_about(
            "opml2treeify rewrites OPML exported by outliner tools into the OPML\n\
            dialect Treeify imports.\n\n\
            Commands:\n  \
            - convert: rewrite an export for Treeify (default)\n  \
            - inspect: dump the parsed outline tree as JSON\n\n\
            Examples:\n  \
            opml2treeify export.opml --from dynalist             # Convert to stdout\n  \
            opml2treeify export.opml --from workflowy -o out.opml\n  \
            cat export.opml | opml2treeify - --from dynalist     # Read from stdin\n  \
            opml2treeify inspect export.opml --from workflowy    # Converted tree as JSON",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-dialects")
                .long("list-dialects")
                .help("List supported source dialects")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert an OPML export for Treeify (default command)")
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source dialect (guessed from the input if not specified)")
                        .long_help(
                            "Source dialect to convert from.\n\n\
                            Available dialects: dynalist, workflowy.\n\
                            If not specified, the dialect is guessed from the attribute\n\
                            style of the input; guessing fails rather than pick wrong.",
                        )
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Dump the converted outline tree as JSON")
                .long_about(
                    "Parse and convert the input, then print the resulting outline tree\n\
                    as JSON instead of serializing it back to OPML. Useful for checking\n\
                    what a conversion did to a particular node.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source dialect (guessed from the input if not specified)")
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    // If no subcommand is provided, inject "convert" so the plain
    // `opml2treeify export.opml --from dynalist` form works.
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            if args.len() > 1
                && args[1] != "convert"
                && args[1] != "inspect"
                && args[1] != "help"
                && (args[1] == "-" || !args[1].starts_with('-'))
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-dialects") {
        handle_list_dialects_command();
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from = sub_matches.get_one::<String>("from").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, from, output);
        }
        Some(("inspect", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from = sub_matches.get_one::<String>("from").map(|s| s.as_str());
            handle_inspect_command(input, from);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn handle_convert_command(input: &str, from: Option<&str>, output: Option<&str>) {
    let source = read_input(input);
    let dialect = resolve_dialect(from, &source);

    let result = convert(dialect, &source).unwrap_or_else(|e| {
        eprintln!("Conversion error: {e}");
        std::process::exit(1);
    });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            print!("{result}");
        }
    }
}

fn handle_inspect_command(input: &str, from: Option<&str>) {
    let source = read_input(input);
    let dialect = resolve_dialect(from, &source);

    let mut document = opml_babel::opml::parser::parse(&source).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });
    convert_document(dialect, &mut document).unwrap_or_else(|e| {
        eprintln!("Conversion error: {e}");
        std::process::exit(1);
    });

    let json = serde_json::to_string_pretty(&document).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    println!("{json}");
}

fn handle_list_dialects_command() {
    println!("Supported source dialects:");
    for dialect in Dialect::ALL {
        println!("  {dialect}");
    }
}

fn read_input(input: &str) -> String {
    if input == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .unwrap_or_else(|e| {
                eprintln!("Error reading stdin: {e}");
                std::process::exit(1);
            });
        source
    } else {
        fs::read_to_string(input).unwrap_or_else(|e| {
            eprintln!("Error reading file '{input}': {e}");
            std::process::exit(1);
        })
    }
}

fn resolve_dialect(from: Option<&str>, source: &str) -> Dialect {
    if let Some(name) = from {
        return Dialect::from_name(name).unwrap_or_else(|| {
            eprintln!("Error: unknown dialect '{name}'");
            eprintln!("Use --list-dialects to see the supported dialects");
            std::process::exit(1);
        });
    }

    match guess_dialect(source) {
        Some(dialect) => dialect,
        None => {
            eprintln!("Error: could not guess the source dialect from the input");
            eprintln!("Please specify --from explicitly");
            std::process::exit(1);
        }
    }
}

/// Guess the dialect from the completion-flag spelling. WorkFlowy writes
/// `_complete`, Dynalist writes `complete`; the note attribute is `_note` in
/// both, so it cannot discriminate. Only guesses when one spelling is present
/// and the other absent.
fn guess_dialect(source: &str) -> Option<Dialect> {
    let workflowy = source.contains("_complete=");
    let dynalist = source.contains(" complete=");

    match (workflowy, dynalist) {
        (true, false) => Some(Dialect::Workflowy),
        (false, true) => Some(Dialect::Dynalist),
        _ => None,
    }
}
