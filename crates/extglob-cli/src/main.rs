mod cli;
mod commands;
mod logging;

use cli::{CheckParams, DumpParams, MatchParams, QuoteParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    logging::init(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("match", m)) => {
            let params = MatchParams::from_matches(m);
            commands::matching::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("quote", m)) => {
            let params = QuoteParams::from_matches(m);
            commands::quote::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
