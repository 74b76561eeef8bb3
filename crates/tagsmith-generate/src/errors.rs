use thiserror::Error;

/// Errors emitted by the synthesis engine.
#[derive(Debug, Error)]
pub enum FakerError {
    /// The type kind has no synthesis rule.
    #[error("unsupported kind: {0}")]
    UnsupportedKind(String),
    /// The directive is unknown to both the registry and the extractors.
    #[error("tag unsupported: {0}")]
    UnsupportedTag(String),
    /// The directive is recognised but cannot be parsed.
    #[error("tag \"{tag}\" is not written properly: {reason}")]
    MalformedTag { tag: String, reason: String },
    /// Directed assignment needs a pointer-backed target.
    #[error("not a pointer value: {0}")]
    NotAPointer(String),
    /// Map keys and values must use exported types.
    #[error("unexported kind {0} cannot be used as a map key or value")]
    UnexportedFieldKind(String),
    #[error("struct {name} has {count} fields; structs must have fewer than {}", crate::synth::MAX_STRUCT_FIELDS)]
    TooManyFields { name: String, count: usize },
    #[error("failed to generate a unique value for \"{0}\"")]
    UniqueGenerationFailed(String),
    /// A provider was asked for a type it cannot produce.
    #[error("type {ty} is not supported by tag \"{tag}\"")]
    TypeNotSupportedForTag { tag: String, ty: String },
    #[error("provider already exists: {0}")]
    ProviderExists(String),
    #[error("provider does not exist: {0}")]
    ProviderMissing(String),
    /// Built-in providers back the default tags and cannot be removed.
    #[error("provider {0} is built in and cannot be removed")]
    ProtectedProvider(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl FakerError {
    pub(crate) fn malformed(tag: &str, reason: impl Into<String>) -> Self {
        FakerError::MalformedTag {
            tag: tag.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias for engine results.
pub type FakerResult<T> = Result<T, FakerError>;
