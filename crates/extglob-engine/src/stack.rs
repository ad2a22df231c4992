//! Stack headroom for building deeply nested programs.
//!
//! Regex parsing is iterative, but NFA compilation and literal extraction
//! recurse once per group level. Programs nested deeper than the calling
//! thread can afford are built on a scoped thread whose stack grows with
//! the nesting depth.

use std::io;
use std::thread;

/// Deepest nesting built on the caller's own stack.
const INLINE_DEPTH: usize = 64;

/// Stack reserved per nesting level, with headroom for unoptimized builds.
const STACK_PER_LEVEL: usize = 16 * 1024;

const BASE_STACK: usize = 8 * 1024 * 1024;

/// Maximum group nesting of a regex program.
///
/// Escaped characters are skipped; generated programs never hold an
/// unescaped parenthesis inside a class.
pub(crate) fn nesting_depth(pattern: &str) -> usize {
    let mut depth = 0usize;
    let mut max = 0usize;
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '(' => {
                depth += 1;
                max = max.max(depth);
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    max
}

/// Runs `build` with enough stack for the nesting depth of `pattern`.
///
/// Fails only if the helper thread cannot be spawned.
pub(crate) fn with_nesting_stack<T, F>(pattern: &str, build: F) -> io::Result<T>
where
    T: Send,
    F: FnOnce() -> T + Send,
{
    let depth = nesting_depth(pattern);
    if depth <= INLINE_DEPTH {
        return Ok(build());
    }

    let stack_size = BASE_STACK.saturating_add(depth.saturating_mul(STACK_PER_LEVEL));
    tracing::debug!(depth, stack_size, "building deeply nested program on a helper thread");

    thread::scope(|scope| -> io::Result<T> {
        let handle = thread::Builder::new()
            .name("extglob-build".into())
            .stack_size(stack_size)
            .spawn_scoped(scope, build)?;
        match handle.join() {
            Ok(value) => Ok(value),
            Err(panic) => std::panic::resume_unwind(panic),
        }
    })
}
