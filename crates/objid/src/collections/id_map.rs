use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasherDefault, Hasher};

use crate::ObjectId;

/// Pass-through hasher for [`ObjectId`] keys.
///
/// `ObjectId`'s `Hash` impl writes a single `u32` (its first digest word),
/// which is already uniformly distributed. The word is copied into both
/// halves of the output so the high bits used by the table's control bytes
/// are populated too.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdHasher(u64);

impl Hasher for IdHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write_u32(&mut self, n: u32) {
        let n = u64::from(n);
        self.0 = (n << 32) | n;
    }

    // Only reached for non-ObjectId keys; fold bytes FNV-style.
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (self.0 ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3);
        }
    }
}

pub type BuildIdHasher = BuildHasherDefault<IdHasher>;

/// Hash map keyed by ObjectId.
pub type IdMap<V> = HashMap<ObjectId, V, BuildIdHasher>;

/// Hash set of ObjectIds.
pub type IdSet = HashSet<ObjectId, BuildIdHasher>;
