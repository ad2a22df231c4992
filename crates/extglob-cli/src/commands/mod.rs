pub mod check;
pub mod dump;
pub mod matching;
pub mod quote;


use extglob_lib::{Config, Glob};

/// Compiles `pattern`, or prints the annotated error and exits with status 1.
fn compile_or_exit(pattern: &str, config: Config) -> Glob {
    match Glob::builder(pattern).config(config).build() {
        Ok(glob) => glob,
        Err(err) => {
            eprintln!("{}", err.render(pattern));
            std::process::exit(1);
        }
    }
}
