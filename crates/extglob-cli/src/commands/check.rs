use extglob_lib::Config;

use super::compile_or_exit;

pub struct CheckArgs {
    pub pattern: String,
    pub config: Config,
}

pub fn run(args: CheckArgs) {
    compile_or_exit(&args.pattern, args.config);
    // Silent on success (like cargo check)
}
