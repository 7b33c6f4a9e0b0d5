//! Stub stream codec for persisted type identity records.
//!
//! Names are framed with a little-endian `u32` header:
//!
//! | Header | Meaning |
//! |--------|---------|
//! | `0` | absent name (explicit null marker) |
//! | `n > 0` | `n - 1` bytes of UTF-8 follow |
//!
//! Stream faults are never retried or recovered: a corrupted record is fatal
//! for the query that reads it, so `StubError::Io` passes the underlying error
//! through untouched.

use std::io::{Read, Write};

use crate::limits::MAX_STUB_NAME_LEN;

#[derive(Debug, thiserror::Error)]
pub enum StubError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("stub name is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("stub name of {len} bytes exceeds the {max} byte limit")]
    NameTooLong { len: usize, max: u32 },
    #[error("required stub name `{field}` is absent")]
    MissingName { field: &'static str },
}

pub struct StubOutput<W: Write> {
    inner: W,
}

impl<W: Write> StubOutput<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write a name, or the null marker when `name` is `None`.
    pub fn write_name(&mut self, name: Option<&str>) -> Result<(), StubError> {
        match name {
            None => self.inner.write_all(&0u32.to_le_bytes())?,
            Some(name) => {
                if name.len() > MAX_STUB_NAME_LEN as usize {
                    return Err(StubError::NameTooLong {
                        len: name.len(),
                        max: MAX_STUB_NAME_LEN,
                    });
                }
                let len = name.len() as u32;
                self.inner.write_all(&(len + 1).to_le_bytes())?;
                self.inner.write_all(name.as_bytes())?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), StubError> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

pub struct StubInput<R: Read> {
    inner: R,
}

impl<R: Read> StubInput<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Read a name written by [`StubOutput::write_name`].
    pub fn read_name(&mut self) -> Result<Option<String>, StubError> {
        let mut header = [0u8; 4];
        self.inner.read_exact(&mut header)?;
        let header = u32::from_le_bytes(header);
        if header == 0 {
            return Ok(None);
        }

        let len = header - 1;
        if len > MAX_STUB_NAME_LEN {
            return Err(StubError::NameTooLong {
                len: len as usize,
                max: MAX_STUB_NAME_LEN,
            });
        }
        let mut bytes = vec![0u8; len as usize];
        self.inner.read_exact(&mut bytes)?;
        Ok(Some(String::from_utf8(bytes)?))
    }

    /// Read a name that must be present; the null marker is a corrupted record.
    pub fn read_required_name(&mut self, field: &'static str) -> Result<String, StubError> {
        self.read_name()?.ok_or(StubError::MissingName { field })
    }
}

#[cfg(test)]
#[path = "../tests/stub_tests.rs"]
mod tests;
