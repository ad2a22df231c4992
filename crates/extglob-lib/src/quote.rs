use extglob_compiler::is_meta_char;

/// Escapes every glob meta character in `text` with `\`.
///
/// The result is a pattern matching exactly `text`.
pub fn quote_meta(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if is_meta_char(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
