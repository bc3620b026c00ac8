//! Specialized collections of object identifiers.

mod id_array;
mod id_map;

pub use id_array::IdArray;
pub use id_map::{BuildIdHasher, IdHasher, IdMap, IdSet};
