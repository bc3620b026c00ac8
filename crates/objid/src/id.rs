use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use uuid::Uuid;

use crate::error::checked_range;
use crate::hasher::HashBuilder;
use crate::hex::{hex_decode, hex_encode};
use crate::ObjectIdError;

/// A 128-bit identifier for a piece of content.
///
/// Stored as four `u32` words. Word `i` is the little-endian reading of bytes
/// `4 * i .. 4 * i + 4`; [`to_bytes`](ObjectId::to_bytes) writes them back
/// the same way, so the 16 bytes round-trip exactly.
///
/// Ordering compares the words as unsigned integers in storage order, first
/// word most significant. Because each word is read little-endian this is
/// *not* the same as comparing the raw bytes lexicographically.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ObjectId {
    words: [u32; 4],
}

impl ObjectId {
    /// Size of an identifier in bytes.
    pub const SIZE: usize = 16;
    /// Length of the hex representation.
    pub const HEX_LEN: usize = Self::SIZE * 2;

    /// The empty (all-zeros) identifier.
    pub const EMPTY: Self = Self { words: [0; 4] };

    /// Create an ObjectId from its four words in storage order.
    pub const fn from_words(w0: u32, w1: u32, w2: u32, w3: u32) -> Self {
        Self {
            words: [w0, w1, w2, w3],
        }
    }

    /// Create an ObjectId from exactly 16 raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ObjectIdError> {
        let arr: [u8; Self::SIZE] = bytes.try_into().map_err(|_| ObjectIdError::InvalidSize {
            expected: Self::SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self::from(arr))
    }

    /// The four words in storage order.
    pub const fn words(&self) -> [u32; 4] {
        self.words
    }

    /// The 16 raw bytes, in the layout [`from_bytes`](ObjectId::from_bytes) accepts.
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.words) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }

    /// Check if this is the empty (all-zeros) identifier.
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Parse exactly 32 lowercase hex characters.
    ///
    /// Returns `None` for any other input; `unwrap_or_default()` then gives
    /// [`ObjectId::EMPTY`].
    pub fn try_parse_hex(input: &str) -> Option<Self> {
        let mut bytes = [0u8; Self::SIZE];
        hex_decode(input, &mut bytes).ok()?;
        Some(Self::from(bytes))
    }

    /// Get the hex string representation (lowercase).
    pub fn to_hex(&self) -> String {
        let mut buf = [0u8; Self::HEX_LEN];
        hex_encode(&self.to_bytes(), &mut buf);
        buf.iter().map(|&b| b as char).collect()
    }

    /// Fast placement hash for in-memory tables: the first word.
    ///
    /// The digest is already uniformly distributed so no further mixing is
    /// applied. [`Hash`] feeds exactly this value to the hasher.
    pub const fn hash_code(&self) -> u32 {
        self.words[0]
    }

    /// Compare as -1, 0 or 1 following [`Ord`].
    pub fn compare_to(&self, other: &Self) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// A fresh unpredictable identifier for content that has no bytes to hash.
    ///
    /// The bytes of a random (v4) UUID are run through [`HashBuilder`].
    pub fn new_random() -> Self {
        let seed = Uuid::new_v4();
        let id = Self::digest(seed.as_bytes());
        tracing::trace!(%id, "generated random object id");
        id
    }

    /// Hash `count` bytes of `buffer` starting at `offset`.
    pub fn from_content(buffer: &[u8], offset: usize, count: usize) -> Result<Self, ObjectIdError> {
        let range = checked_range(buffer.len(), offset, count)?;
        Ok(Self::digest(&buffer[range]))
    }

    /// Hash a whole buffer.
    pub fn digest(data: &[u8]) -> Self {
        HashBuilder::digest(data)
    }

    /// Hash everything `reader` yields.
    pub fn from_reader<R: std::io::Read>(reader: R) -> std::io::Result<Self> {
        let mut builder = HashBuilder::new();
        builder.update_from_reader(reader)?;
        Ok(builder.compute_hash())
    }

    /// Reinterpret the same 16 bytes as a UUID.
    pub fn to_uuid(&self) -> Uuid {
        Uuid::from_bytes(self.to_bytes())
    }

    /// Reinterpret a UUID's 16 bytes as an ObjectId.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self::from(*uuid.as_bytes())
    }
}

impl From<[u8; 16]> for ObjectId {
    fn from(bytes: [u8; 16]) -> Self {
        let mut words = [0u32; 4];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self { words }
    }
}

impl From<ObjectId> for [u8; 16] {
    fn from(id: ObjectId) -> Self {
        id.to_bytes()
    }
}

impl From<Uuid> for ObjectId {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl From<ObjectId> for Uuid {
    fn from(id: ObjectId) -> Self {
        id.to_uuid()
    }
}

impl TryFrom<&[u8]> for ObjectId {
    type Error = ObjectIdError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl Hash for ObjectId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", &self.to_hex()[..8])
    }
}

impl FromStr for ObjectId {
    type Err = ObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; Self::SIZE];
        hex_decode(s, &mut bytes)?;
        Ok(Self::from(bytes))
    }
}
