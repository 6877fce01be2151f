use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the CLI from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("chatdown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for rendering chat-reply Markdown as HTML fragments")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Input file path, or '-' for stdin")
                .required_unless_present("list-rules")
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
        )
        .arg(
            Arg::new("list-rules")
                .long("list-rules")
                .help("List the substitution rules in application order")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "chatdown", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "chatdown", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "chatdown", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
