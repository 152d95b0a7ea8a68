#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    #[error("Unknown type kind: {0}")]
    UnknownTypeKind(String),
    #[error("Unknown primitive type: {0}")]
    UnknownPrimitive(String),
}

pub type MirrorResult<T> = std::result::Result<T, MirrorError>;
