use std::fmt::Write;

use extglob_compiler::parser::token_text;
use extglob_compiler::{CompileError, compile, lex, parse};

pub struct DumpArgs {
    pub pattern: String,
    pub separators: Vec<char>,
    pub tokens: bool,
    pub ast: bool,
    pub json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error("failed to serialize program: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn run(args: DumpArgs) {
    match render(&args) {
        Ok(out) => print!("{out}"),
        Err(DumpError::Compile(err)) => {
            eprintln!("{}", err.render(&args.pattern));
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

pub fn render(args: &DumpArgs) -> Result<String, DumpError> {
    let pattern = args.pattern.as_str();
    let mut out = String::new();

    if args.tokens {
        out.push_str("[tokens]\n");
        for token in lex(pattern).map_err(CompileError::from)? {
            let _ = writeln!(out, "{:?} {:?}", token.kind, token_text(pattern, &token));
        }
        out.push('\n');
    }

    if args.ast {
        out.push_str("[ast]\n");
        out.push_str(&parse(pattern)?.dump());
        out.push('\n');
    }

    let program = compile(pattern, &args.separators)?;
    if args.json {
        out.push_str(&serde_json::to_string_pretty(&program)?);
        out.push('\n');
    } else {
        let _ = writeln!(out, "engine: {}", program.engine());
        let _ = writeln!(out, "program: {}", program.pattern());
    }

    Ok(out)
}
