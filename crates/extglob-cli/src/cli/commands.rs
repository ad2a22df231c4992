//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Add engine limit args (for commands that build a matcher).
fn with_limit_args(cmd: Command) -> Command {
    cmd.arg(size_limit_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("extglob")
        .about("Check, match and inspect extended glob patterns")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(check_command())
        .subcommand(match_command())
        .subcommand(dump_command())
        .subcommand(quote_command())
}

/// Compile a pattern and report errors.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Compile a pattern and report errors")
        .after_help(
            r#"EXAMPLES:
  extglob check '*.@(c|h)'
  extglob check 'src/**/*.rs' -s /"#,
        )
        .arg(pattern_arg())
        .arg(separator_arg());

    with_limit_args(cmd)
}

/// Match inputs against a pattern.
pub fn match_command() -> Command {
    let cmd = Command::new("match")
        .about("Match inputs against a pattern")
        .after_help(
            r#"EXAMPLES:
  extglob match '*.rs' main.rs lib.rs -s /
  extglob match '@(foo|bar)baz' foobaz --captures

Exits with status 1 if any input does not match."#,
        )
        .arg(pattern_arg())
        .arg(inputs_arg())
        .arg(separator_arg())
        .arg(captures_arg());

    with_limit_args(cmd)
}

/// Show tokens, syntax tree and compiled program.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the compiled program of a pattern")
        .after_help(
            r#"EXAMPLES:
  extglob dump '+(a|b)*'
  extglob dump '+(a|b)*' --tokens --ast -s /
  extglob dump '*.txt' --json"#,
        )
        .arg(pattern_arg())
        .arg(separator_arg())
        .arg(tokens_arg())
        .arg(ast_arg())
        .arg(json_arg())
}

/// Escape text into a literal pattern.
pub fn quote_command() -> Command {
    Command::new("quote")
        .about("Escape text into a pattern that matches it literally")
        .arg(text_arg())
}
