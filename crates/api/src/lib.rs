//! Canonical reflection taxonomy for program types.
//!
//! This crate only names things: kinds, annotations and the capability
//! traits a type representation exposes. Language crates provide the
//! representations themselves.

pub mod error;
pub mod mirror;
pub mod models;

pub use error::{MirrorError, MirrorResult};
pub use mirror::{AnnotatedConstruct, TypeMirror};
pub use models::*;
