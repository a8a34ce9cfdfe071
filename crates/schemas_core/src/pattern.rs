//! Regular expression compilation for `pattern` rules.

use regex::{Regex, RegexBuilder};

/// Upper bound on the compiled size of a single pattern.
pub const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Compiles a field pattern so that it only matches the whole value.
///
/// The `regex` engine matches in linear time, and the size limit keeps
/// oversized patterns from schema files out of memory.
pub fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!("^(?:{})$", pattern))
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()
}
