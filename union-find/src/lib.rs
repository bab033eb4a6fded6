pub mod error;
pub mod union_find;

pub use error::{OutOfRange, Result};
pub use union_find::UnionFind;
