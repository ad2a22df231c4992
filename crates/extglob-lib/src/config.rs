use extglob_engine::Limits;

/// Compile-time settings of a [`Glob`](crate::Glob).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Characters `*` and `?` never match. `**` still crosses them.
    pub separators: Vec<char>,
    /// Heap cap of the compiled automaton in bytes (`None`: engine default).
    pub size_limit: Option<usize>,
}

impl Config {
    pub(crate) fn limits(&self) -> Limits {
        Limits::new().size_limit(self.size_limit)
    }
}
