use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate class: {0}")]
    DuplicateClass(String),
    #[error("Unknown enclosing class {enclosing} for {class}")]
    UnknownEnclosingClass { class: String, enclosing: String },
    #[error("Cyclic enclosing classes at {0}")]
    CyclicEnclosingClass(String),
    #[error("Too many {0} for 32-bit ids")]
    CapacityExceeded(&'static str),
}

pub type Result<T> = std::result::Result<T, ModelError>;
