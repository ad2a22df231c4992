//! Extended glob patterns compiled to regular expressions.
//!
//! # Example
//!
//! ```
//! use extglob_lib::Glob;
//!
//! let glob = Glob::new("@(foo|bar)*.rs", &['/']).expect("valid pattern");
//! assert!(glob.is_match("foo_test.rs"));
//! assert!(!glob.is_match("foo/test.rs"));
//! assert_eq!(glob.captures("bar.rs"), vec!["bar.rs", "bar"]);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod config;
mod glob;
mod quote;


pub use config::Config;
pub use extglob_compiler::{CompileError, LexError, LexErrorKind, ParseError};
pub use extglob_core::{EngineKind, Program};
pub use glob::{Glob, GlobBuilder};
pub use quote::quote_meta;

/// Result type for glob compilation.
pub type Result<T> = std::result::Result<T, CompileError>;
