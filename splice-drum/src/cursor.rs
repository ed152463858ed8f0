//! Bounded byte cursors
//!
//! [`ReadCursor`] walks a borrowed buffer and can carry a secondary limit
//! (the body limit) that no read may cross, even when the buffer has more
//! bytes behind it. [`WriteCursor`] appends to an owned buffer.

/// A read that could not be satisfied before the active limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("short read at offset {offset}: requested {requested} bytes, {available} available")]
pub struct ShortRead {
    /// Absolute position the read started at
    pub offset: usize,
    /// Bytes requested
    pub requested: usize,
    /// Bytes left before the active limit
    pub available: usize,
}

/// Read position over an in-memory buffer with an optional end limit
#[derive(Debug, Clone)]
pub struct ReadCursor<'a> {
    data: &'a [u8],
    pos: usize,
    limit: Option<usize>,
}

impl<'a> ReadCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            limit: None,
        }
    }

    /// Current absolute position
    pub fn position(&self) -> usize {
        self.pos
    }

    /// End of readable input: the active limit, or the buffer end
    fn end(&self) -> usize {
        self.limit.unwrap_or(self.data.len())
    }

    /// Bytes between the position and the active limit
    pub fn remaining_in_limit(&self) -> usize {
        self.end() - self.pos
    }

    /// Bytes between the position and the buffer end, ignoring any limit
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Whether a limit is installed
    pub fn has_limit(&self) -> bool {
        self.limit.is_some()
    }

    /// Install a limit `n` bytes past the current position.
    ///
    /// Fails if the buffer ends before the limit would.
    pub fn set_limit(&mut self, n: usize) -> Result<(), ShortRead> {
        let available = self.remaining();
        if n > available {
            return Err(ShortRead {
                offset: self.pos,
                requested: n,
                available,
            });
        }
        self.limit = Some(self.pos + n);
        Ok(())
    }

    /// Remove the limit; reads are bounded by the buffer end again
    pub fn clear_limit(&mut self) {
        self.limit = None;
    }

    /// Read exactly `n` bytes and advance past them
    pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8], ShortRead> {
        let available = self.remaining_in_limit();
        if n > available {
            return Err(ShortRead {
                offset: self.pos,
                requested: n,
                available,
            });
        }
        let start = self.pos;
        self.pos += n;
        Ok(&self.data[start..self.pos])
    }

    /// Read exactly `N` bytes into an array
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ShortRead> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.read_exact(N)?);
        Ok(buf)
    }

    /// Skip `n` bytes within the limit
    pub fn skip(&mut self, n: usize) -> Result<(), ShortRead> {
        self.read_exact(n).map(|_| ())
    }

    /// Take everything from the position to the buffer end.
    ///
    /// The active limit does not apply; this is how bytes after the body are
    /// captured.
    pub fn read_tail(&mut self) -> &'a [u8] {
        let tail = &self.data[self.pos..];
        self.pos = self.data.len();
        if let Some(limit) = self.limit.as_mut() {
            *limit = self.pos;
        }
        tail
    }
}

/// Append-only output buffer
#[derive(Debug, Default, Clone)]
pub struct WriteCursor {
    buf: Vec<u8>,
}

impl WriteCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Append bytes
    pub fn write(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Append `n` zero bytes
    pub fn write_zeros(&mut self, n: usize) {
        self.buf.resize(self.buf.len() + n, 0);
    }

    /// Bytes written so far
    pub fn position(&self) -> usize {
        self.buf.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}
