//! Primitive numeric kinds and the iteration protocol shared by unboxed containers.

pub mod kind;
pub mod iter;
pub mod iterable;

// Re-export all public items from modules for convenience
pub use kind::*;
pub use iter::*;
pub use iterable::*;
