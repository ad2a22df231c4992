use extglob_lib::quote_meta;

pub struct QuoteArgs {
    pub text: String,
}

pub fn run(args: QuoteArgs) {
    println!("{}", quote_meta(&args.text));
}
