use std::fmt::Write;

use extglob_lib::{Config, Glob};

use super::compile_or_exit;

pub struct MatchArgs {
    pub pattern: String,
    pub inputs: Vec<String>,
    pub captures: bool,
    pub config: Config,
}

pub fn run(args: MatchArgs) {
    let glob = compile_or_exit(&args.pattern, args.config);
    tracing::debug!(engine = %glob.engine_kind(), inputs = args.inputs.len(), "matching");
    let (report, all_matched) = report(&glob, &args.inputs, args.captures);
    print!("{report}");

    if !all_matched {
        std::process::exit(1);
    }
}

/// One line per input. Returns the report and whether every input matched.
pub fn report(glob: &Glob, inputs: &[String], captures: bool) -> (String, bool) {
    let mut out = String::new();
    let mut all_matched = true;

    for input in inputs {
        let groups = if captures {
            glob.captures(input)
        } else if glob.is_match(input) {
            vec![input.clone()]
        } else {
            Vec::new()
        };

        if groups.is_empty() {
            all_matched = false;
            let _ = writeln!(out, "{input}: no match");
        } else if captures {
            let _ = writeln!(out, "{input}: {groups:?}");
        } else {
            let _ = writeln!(out, "{input}: match");
        }
    }

    (out, all_matched)
}
