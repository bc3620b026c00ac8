use std::io::{self, Read};

use digest::Digest;
use sha2::Sha256;

use crate::error::checked_range;
use crate::{ObjectId, ObjectIdError};

/// Size of the read buffer used by [`HashBuilder::update_from_reader`].
const READ_CHUNK: usize = 64 * 1024;

/// Streaming digest computation for [`ObjectId`].
///
/// The digest is SHA-256 truncated to its first 16 bytes. This is part of
/// the identifier format: every producer writing into the same store must
/// compute ids the same way, so the algorithm is fixed and not configurable.
///
/// Data can be fed incrementally with [`update`](HashBuilder::update),
/// [`write_range`](HashBuilder::write_range), or through the [`std::io::Write`]
/// implementation, then finalised with [`compute_hash`](HashBuilder::compute_hash).
/// Finalising consumes the builder, so it cannot be written to afterwards.
#[derive(Clone, Default)]
pub struct HashBuilder {
    inner: Sha256,
    written: u64,
}

impl HashBuilder {
    /// Create a builder with an empty running state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a whole slice into the digest.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
        self.written += data.len() as u64;
    }

    /// Feed `count` bytes of `buffer` starting at `offset`.
    ///
    /// Named apart from [`std::io::Write::write`] so both stay callable with
    /// the trait in scope.
    pub fn write_range(
        &mut self,
        buffer: &[u8],
        offset: usize,
        count: usize,
    ) -> Result<(), ObjectIdError> {
        let range = checked_range(buffer.len(), offset, count)?;
        self.update(&buffer[range]);
        Ok(())
    }

    /// Drain `reader` into the digest. Returns the number of bytes read.
    pub fn update_from_reader<R: Read>(&mut self, mut reader: R) -> io::Result<u64> {
        let mut buf = vec![0u8; READ_CHUNK];
        let mut total = 0u64;
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            self.update(&buf[..n]);
            total += n as u64;
        }
        tracing::debug!(bytes = total, "hashed reader input");
        Ok(total)
    }

    /// Total number of bytes fed so far.
    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    /// Finalize and return the ObjectId.
    pub fn compute_hash(self) -> ObjectId {
        let digest = self.inner.finalize();
        let mut bytes = [0u8; ObjectId::SIZE];
        bytes.copy_from_slice(&digest[..ObjectId::SIZE]);
        let id = ObjectId::from(bytes);
        tracing::trace!(bytes = self.written, %id, "computed object id");
        id
    }

    /// Convenience: hash data in one call.
    pub fn digest(data: &[u8]) -> ObjectId {
        let mut builder = Self::new();
        builder.update(data);
        builder.compute_hash()
    }
}

impl io::Write for HashBuilder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl std::fmt::Debug for HashBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashBuilder")
            .field("written", &self.written)
            .finish_non_exhaustive()
    }
}
