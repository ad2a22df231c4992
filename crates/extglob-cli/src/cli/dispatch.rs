//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs are populated from clap
//! - `Into<*Args>` impls bridge dispatch to command handlers

use clap::ArgMatches;
use extglob_lib::Config;

use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::matching::MatchArgs;
use crate::commands::quote::QuoteArgs;

pub struct CheckParams {
    pub pattern: String,
    pub separators: Vec<char>,
    pub size_limit: Option<usize>,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: pattern(m),
            separators: separators(m),
            size_limit: m.get_one::<usize>("size_limit").copied(),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            pattern: p.pattern,
            config: Config {
                separators: p.separators,
                size_limit: p.size_limit,
            },
        }
    }
}

pub struct MatchParams {
    pub pattern: String,
    pub inputs: Vec<String>,
    pub separators: Vec<char>,
    pub captures: bool,
    pub size_limit: Option<usize>,
}

impl MatchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: pattern(m),
            inputs: m
                .get_many::<String>("inputs")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            separators: separators(m),
            captures: m.get_flag("captures"),
            size_limit: m.get_one::<usize>("size_limit").copied(),
        }
    }
}

impl From<MatchParams> for MatchArgs {
    fn from(p: MatchParams) -> Self {
        Self {
            pattern: p.pattern,
            inputs: p.inputs,
            captures: p.captures,
            config: Config {
                separators: p.separators,
                size_limit: p.size_limit,
            },
        }
    }
}

pub struct DumpParams {
    pub pattern: String,
    pub separators: Vec<char>,
    pub tokens: bool,
    pub ast: bool,
    pub json: bool,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: pattern(m),
            separators: separators(m),
            tokens: m.get_flag("tokens"),
            ast: m.get_flag("ast"),
            json: m.get_flag("json"),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            pattern: p.pattern,
            separators: p.separators,
            tokens: p.tokens,
            ast: p.ast,
            json: p.json,
        }
    }
}

pub struct QuoteParams {
    pub text: String,
}

impl QuoteParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            text: m.get_one::<String>("text").cloned().unwrap_or_default(),
        }
    }
}

impl From<QuoteParams> for QuoteArgs {
    fn from(p: QuoteParams) -> Self {
        Self { text: p.text }
    }
}

fn pattern(m: &ArgMatches) -> String {
    m.get_one::<String>("pattern").cloned().unwrap_or_default()
}

fn separators(m: &ArgMatches) -> Vec<char> {
    m.get_many::<char>("separators")
        .map(|values| values.copied().collect())
        .unwrap_or_default()
}
