pub mod algorithms;
pub mod core;
pub mod dot;
pub mod error;
pub mod generators;
pub mod interner;
pub mod layout;
pub mod storage;

pub use crate::core::*;
pub use algorithms::*;
pub use dot::*;
pub use error::*;
pub use generators::*;
pub use interner::*;
pub use layout::*;
pub use storage::*;
