// Command-line interface for chatdown
//
// This binary renders chat replies written in a restricted Markdown subset
// into HTML fragments ready for insertion into a message container.
//
// The render command is the default, so the subcommand name can be omitted.
// chatdown reads the reply from a file (or stdin with '-'), runs the
// substitution rules in order, and writes the fragment to stdout or a file.
// The core capabilities live in the chatdown crate; this binary is a thin
// shell over the library.
//
// Usage:
//  chatdown <input> [-o <file>]           - Render a reply (default)
//  chatdown render <input> [-o <file>]    - Same as above (explicit)
//  chatdown render <body.json> --json     - Render the reply field of a JSON body
//  chatdown render - < reply.md           - Read the reply from stdin
//  chatdown --list-rules                  - List the substitution rules
//
// Configuration:
//
// Settings are layered: embedded defaults, then an optional chatdown.toml in
// the working directory, then a --config file, then CLI flags. The --escape
// flag (or [render] escape_input) turns on input escaping for replies from
// untrusted producers.

use chatdown::{render_with, RenderOptions, RuleScope};
use chatdown_config::{ChatdownConfig, Loader};
use clap::{Arg, ArgAction, Command, ValueHint};
use std::fs;
use std::io::{self, Read};

fn build_cli() -> Command {
    Command::new("chatdown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for rendering chat-reply Markdown as HTML fragments")
        .long_about(
            "chatdown is a command-line tool for rendering the restricted Markdown\n\
            subset used in chat replies into HTML fragments.\n\n\
            Commands:\n  \
            - render: Render a reply to an HTML fragment (default)\n\n\
            Examples:\n  \
            chatdown reply.md                     # Render a reply to stdout\n  \
            chatdown reply.md -o fragment.html    # Render to a file\n  \
            chatdown render response.json --json  # Render the reply field of a JSON body\n  \
            cat reply.md | chatdown render -      # Read the reply from stdin\n  \
            chatdown --list-rules                 # Show the substitution rules",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-rules")
                .long("list-rules")
                .help("List the substitution rules in application order")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a chatdown.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Render a chat reply to an HTML fragment (default command)")
                .long_about(
                    "Render a reply written in the chat Markdown subset to an HTML fragment.\n\n\
                    The input is a plain text file, or '-' to read from stdin. With --json\n\
                    the input is treated as a JSON response body and the reply text is\n\
                    pulled out of the configured field ('reply' by default) first.\n\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    chatdown render reply.md              # Render to stdout\n  \
                    chatdown render reply.md -o out.html  # Render to a file\n  \
                    chatdown render response.json --json  # Render the reply field of a body\n  \
                    chatdown render reply.md --escape     # Escape the reply before rendering",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Treat the input as a JSON response body and render its reply field")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("escape")
                        .long("escape")
                        .help("Escape HTML-significant characters in the reply before rendering")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "render"
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the
            // first arg looks like an input path ('-' stands for stdin)
            if args.len() > 1
                && (!args[1].starts_with('-') || args[1] == "-")
                && args[1] != "render"
                && args[1] != "help"
            {
                // Inject "render" as the subcommand
                let mut new_args = vec![args[0].clone(), "render".to_string()];
                new_args.extend_from_slice(&args[1..]);

                // Try parsing again with "render" injected
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                // Not a case where we should inject render, show original error
                e.exit();
            }
        }
    };

    if matches.get_flag("list-rules") {
        handle_list_rules_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("render", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let as_json = sub_matches.get_flag("json");
            let escape = sub_matches.get_flag("escape");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_render_command(input, as_json, escape, output, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the render command
fn handle_render_command(
    input: &str,
    as_json: bool,
    escape: bool,
    output: Option<&str>,
    config: &ChatdownConfig,
) {
    let source = if input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).unwrap_or_else(|e| {
            eprintln!("Error reading stdin: {e}");
            std::process::exit(1);
        });
        buffer
    } else {
        fs::read_to_string(input).unwrap_or_else(|e| {
            eprintln!("Error reading file '{input}': {e}");
            std::process::exit(1);
        })
    };

    let reply = if as_json {
        extract_reply_field(&source, &config.reply.field).unwrap_or_else(|e| {
            eprintln!("Error extracting reply: {e}");
            std::process::exit(1);
        })
    } else {
        source
    };

    // CLI flag wins over the configured default
    let mut options = RenderOptions::from(&config.render);
    if escape {
        options.escape_input = true;
    }

    let html = render_with(&reply, options);

    match output {
        Some(path) => {
            fs::write(path, html).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            print!("{html}");
        }
    }
}

/// Handle the list-rules command
fn handle_list_rules_command() {
    println!("Substitution rules (applied in order):\n");
    for rule in chatdown::rules::pipeline() {
        let scope = match rule.scope() {
            RuleScope::Line => "line",
            RuleScope::Text => "text",
        };
        println!(
            "  {:<10} {:<5} {:<18} {}",
            rule.name(),
            scope,
            rule.pattern(),
            rule.replacement()
        );
    }
    println!();
    println!("Line rules are matched against each line of the reply; text rules are");
    println!("global and non-greedy. After the rules run, every line of a multi-line");
    println!("result is terminated with a single <br> and the newlines are dropped.");
}

/// Pull the reply text out of a JSON response body.
fn extract_reply_field(body: &str, field: &str) -> Result<String, String> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| format!("invalid JSON body: {e}"))?;

    match value.get(field) {
        Some(serde_json::Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(format!("field '{field}' is not a string (got {other})")),
        None => Err(format!("field '{field}' not found in response body")),
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> ChatdownConfig {
    let loader = Loader::new().with_optional_file("chatdown.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
