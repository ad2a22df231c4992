//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use clap::{Arg, ArgAction, value_parser};

/// Glob pattern (positional).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .value_name("PATTERN")
        .required(true)
        .help("Extended glob pattern")
}

/// Inputs to match against (positional, one or more).
pub fn inputs_arg() -> Arg {
    Arg::new("inputs")
        .value_name("INPUT")
        .required(true)
        .num_args(1..)
        .help("Strings to match against the pattern")
}

/// Path separator (-s/--separator, repeatable).
pub fn separator_arg() -> Arg {
    Arg::new("separators")
        .short('s')
        .long("separator")
        .value_name("CHAR")
        .value_parser(value_parser!(char))
        .action(ArgAction::Append)
        .help("Character that `*` and `?` never match (repeatable)")
}

/// Print capture groups instead of match status (--captures).
pub fn captures_arg() -> Arg {
    Arg::new("captures")
        .long("captures")
        .action(ArgAction::SetTrue)
        .help("Print the whole match and every group capture")
}

/// Automaton size cap of either engine (--size-limit).
pub fn size_limit_arg() -> Arg {
    Arg::new("size_limit")
        .long("size-limit")
        .value_name("BYTES")
        .value_parser(value_parser!(usize))
        .help("Size cap in bytes for the compiled automaton")
}

/// Show the token stream (--tokens).
pub fn tokens_arg() -> Arg {
    Arg::new("tokens")
        .long("tokens")
        .action(ArgAction::SetTrue)
        .help("Show scanned tokens")
}

/// Show the syntax tree (--ast).
pub fn ast_arg() -> Arg {
    Arg::new("ast")
        .long("ast")
        .action(ArgAction::SetTrue)
        .help("Show the syntax tree")
}

/// Emit the compiled program as JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the compiled program as JSON")
}

/// Text to escape (positional).
pub fn text_arg() -> Arg {
    Arg::new("text")
        .value_name("TEXT")
        .required(true)
        .allow_hyphen_values(true)
        .help("Text to turn into a literal pattern")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}
