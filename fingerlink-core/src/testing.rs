//! In-memory transports for unit tests

use core::future::pending;

use embedded_io_async::{ErrorKind, ErrorType, Read, Write};

/// Receiver that yields a fixed script one byte per read, then EOF
pub struct ScriptedRx<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ScriptedRx<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

impl ErrorType for ScriptedRx<'_> {
    type Error = ErrorKind;
}

impl Read for ScriptedRx<'_> {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        match (buf.first_mut(), self.data.get(self.pos)) {
            (Some(slot), Some(&byte)) => {
                *slot = byte;
                self.pos += 1;
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

/// Receiver that never produces a byte
pub struct SilentRx;

impl ErrorType for SilentRx {
    type Error = ErrorKind;
}

impl Read for SilentRx {
    async fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> {
        pending().await
    }
}

/// Transmitter that records everything written to it
#[derive(Default)]
pub struct VecTx {
    written: Vec<u8>,
    writes: usize,
    fail: bool,
}

impl VecTx {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transmitter whose every write fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.written
    }

    /// Number of successful write calls
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Count non-overlapping occurrences of `needle`
    pub fn count(&self, needle: &[u8]) -> usize {
        if needle.is_empty() {
            return 0;
        }
        let mut count = 0;
        let mut rest = self.as_slice();
        while rest.len() >= needle.len() {
            if rest.starts_with(needle) {
                count += 1;
                rest = &rest[needle.len()..];
            } else {
                rest = &rest[1..];
            }
        }
        count
    }
}

impl VecTx {
    /// Everything written, with each occurrence of `needle` cut out
    pub fn without(&self, needle: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        let mut rest = self.as_slice();
        while !rest.is_empty() {
            if !needle.is_empty() && rest.starts_with(needle) {
                rest = &rest[needle.len()..];
            } else {
                out.push(rest[0]);
                rest = &rest[1..];
            }
        }
        out
    }
}

impl ErrorType for VecTx {
    type Error = ErrorKind;
}

impl Write for VecTx {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        self.written.extend_from_slice(buf);
        self.writes += 1;
        Ok(buf.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    #[test]
    fn test_count_non_overlapping() {
        let mut tx = VecTx::new();
        block_on(tx.write(b"aaaa-ab-aa")).unwrap();
        assert_eq!(tx.count(b"aa"), 3);
        assert_eq!(tx.count(b"ab"), 1);
        assert_eq!(tx.count(b"zz"), 0);
    }

    #[test]
    fn test_count_empty_needle() {
        let mut tx = VecTx::new();
        block_on(tx.write(b"abc")).unwrap();
        assert_eq!(tx.count(b""), 0);
        assert_eq!(tx.without(b""), b"abc");
    }
}
