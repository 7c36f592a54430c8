//! Numeric array helpers built on `ndarray`

pub mod hashable;
pub mod ops;

pub use hashable::{ByteRepr, HashableArray};
pub use ops::{is_training_data_empty, one_hot};
