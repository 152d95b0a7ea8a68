pub mod annotation;
pub mod kind;

pub use annotation::*;
pub use kind::*;
