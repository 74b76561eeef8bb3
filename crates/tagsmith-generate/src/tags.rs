//! Per-field directive parsing.
//!
//! A directive is the comma-separated token list attached to a struct field.
//! The control tokens `keep` and `unique` are pulled out; everything else is
//! rejoined and handed to the registry or the extractors untouched.

/// Sentinel directive: leave the field as it is.
pub const SKIP: &str = "-";
pub const KEEP: &str = "keep";
pub const UNIQUE: &str = "unique";

pub const LENGTH: &str = "len";
pub const SLICE_LENGTH: &str = "slice_len";
pub const LANGUAGE: &str = "lang";
pub const BOUNDARY_START: &str = "boundary_start";
pub const BOUNDARY_END: &str = "boundary_end";
pub const ONE_OF: &str = "oneof";

/// Structured form of a field directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDirective {
    /// Registry name or extractor arguments; empty means structural default.
    pub generator: String,
    pub keep_original: bool,
    pub unique: bool,
}

impl FieldDirective {
    pub fn parse(raw: &str) -> Self {
        let mut directive = FieldDirective::default();
        let mut rest = Vec::new();
        for token in raw.split(',') {
            match token {
                KEEP => directive.keep_original = true,
                UNIQUE => directive.unique = true,
                other => rest.push(other),
            }
        }
        directive.generator = rest.join(",");
        directive
    }

    pub fn is_structural(&self) -> bool {
        self.generator.is_empty()
    }

    pub fn is_skip(&self) -> bool {
        self.generator == SKIP
    }
}
