//! Seekable, byte-order-aware buffer used by every message codec
//!
//! # Read errors
//!
//! Reads never fail individually. A read that would run past the written
//! range records a sticky [`ReadOverflow`] and returns the zero value for its
//! type; every later read returns zero values as well and leaves the cursor
//! alone until the caller looks at the error. A message decoder can therefore
//! read its fields in straight-line code and check the buffer once at the
//! end:
//!
//! ```rust
//! use hunterd_protocol::ByteFrame;
//!
//! let mut bf = ByteFrame::from_bytes(&[0x00, 0x2A]);
//! let a = bf.read_u16();
//! let b = bf.read_u32(); // runs dry
//! assert_eq!((a, b), (42, 0));
//! assert!(bf.check().is_err());
//! ```

use bytes::{Bytes, BytesMut};
use hunterd_core::{HunterError, Result};
use std::io::SeekFrom;

/// Byte order used for multi-byte reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    #[default]
    Big,
    Little,
}

/// Details of the first read that ran past the written range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOverflow {
    /// Cursor position when the read was attempted
    pub offset: usize,
    /// Bytes the read asked for
    pub requested: usize,
    /// Bytes that were left
    pub available: usize,
}

impl From<ReadOverflow> for HunterError {
    fn from(e: ReadOverflow) -> Self {
        HunterError::ReadOverflow {
            offset: e.offset,
            requested: e.requested,
            available: e.available,
        }
    }
}

/// Growable byte buffer with a cursor and a high-water mark
///
/// Invariant: `0 <= index <= len <= capacity`, where `len` is the number of
/// bytes actually written (the high-water mark).
#[derive(Debug, Clone, Default)]
pub struct ByteFrame {
    buf: BytesMut,
    index: usize,
    endian: Endian,
    error: Option<ReadOverflow>,
}

macro_rules! numeric_rw {
    ($($write:ident, $read:ident, $ty:ty;)*) => {
        $(
            #[inline]
            pub fn $write(&mut self, val: $ty) {
                let bytes = match self.endian {
                    Endian::Big => val.to_be_bytes(),
                    Endian::Little => val.to_le_bytes(),
                };
                self.put(&bytes);
            }

            #[inline]
            pub fn $read(&mut self) -> $ty {
                const N: usize = std::mem::size_of::<$ty>();
                let endian = self.endian;
                match self.take(N) {
                    Some(src) => {
                        let mut raw = [0u8; N];
                        raw.copy_from_slice(src);
                        match endian {
                            Endian::Big => <$ty>::from_be_bytes(raw),
                            Endian::Little => <$ty>::from_le_bytes(raw),
                        }
                    }
                    None => <$ty>::default(),
                }
            }
        )*
    };
}

impl ByteFrame {
    /// Create an empty big-endian buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Create a buffer holding a copy of `data`, cursor at the start
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            buf: BytesMut::from(data),
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------
    // Byte order
    // ------------------------------------------------------------------

    pub fn set_endian(&mut self, endian: Endian) {
        self.endian = endian;
    }

    pub fn set_be(&mut self) {
        self.endian = Endian::Big;
    }

    pub fn set_le(&mut self) {
        self.endian = Endian::Little;
    }

    pub fn endian(&self) -> Endian {
        self.endian
    }

    // ------------------------------------------------------------------
    // Position and views
    // ------------------------------------------------------------------

    /// Cursor position
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// High-water mark: number of bytes written
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes between the cursor and the high-water mark
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.index
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The full written range
    pub fn data(&self) -> &[u8] {
        &self.buf
    }

    /// From the cursor to the high-water mark
    pub fn data_from_current(&self) -> &[u8] {
        &self.buf[self.index..]
    }

    /// Hand the written range to the transport
    pub fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }

    /// Move the cursor within `[0, len]`
    ///
    /// On failure the cursor is left where it was.
    pub fn seek(&mut self, pos: SeekFrom) -> Result<usize> {
        let limit = self.buf.len();
        let target = match pos {
            SeekFrom::Start(k) => i64::try_from(k).unwrap_or(i64::MAX),
            SeekFrom::Current(k) => (self.index as i64).saturating_add(k),
            SeekFrom::End(k) => (limit as i64).saturating_add(k),
        };

        if target < 0 || target > limit as i64 {
            return Err(HunterError::SeekOutOfRange { target, limit });
        }

        self.index = target as usize;
        Ok(self.index)
    }

    // ------------------------------------------------------------------
    // Sticky read error
    // ------------------------------------------------------------------

    /// Peek at the sticky read error without clearing it
    pub fn error(&self) -> Option<ReadOverflow> {
        self.error
    }

    #[inline]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// `Err` while a read overflow is recorded; the state is kept
    pub fn check(&self) -> Result<()> {
        match self.error {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    /// Clear the sticky read error, returning it
    pub fn take_error(&mut self) -> Option<ReadOverflow> {
        self.error.take()
    }

    // ------------------------------------------------------------------
    // Raw access
    // ------------------------------------------------------------------

    /// Write `src` at the cursor, overwriting or extending the written range
    fn put(&mut self, src: &[u8]) {
        let end = self.index + src.len();
        if end > self.buf.len() {
            self.buf.resize(end, 0);
        }
        self.buf[self.index..end].copy_from_slice(src);
        self.index = end;
    }

    /// Consume `n` bytes, or record an overflow
    fn take(&mut self, n: usize) -> Option<&[u8]> {
        if self.error.is_some() {
            return None;
        }

        let available = self.remaining();
        if n > available {
            self.error = Some(ReadOverflow {
                offset: self.index,
                requested: n,
                available,
            });
            return None;
        }

        let start = self.index;
        self.index += n;
        Some(&self.buf[start..start + n])
    }

    numeric_rw! {
        write_u8, read_u8, u8;
        write_u16, read_u16, u16;
        write_u32, read_u32, u32;
        write_u64, read_u64, u64;
        write_i8, read_i8, i8;
        write_i16, read_i16, i16;
        write_i32, read_i32, i32;
        write_i64, read_i64, i64;
        write_f32, read_f32, f32;
        write_f64, read_f64, f64;
    }

    /// Write a boolean as a single 0/1 byte
    #[inline]
    pub fn write_bool(&mut self, val: bool) {
        self.write_u8(val as u8);
    }

    #[inline]
    pub fn read_bool(&mut self) -> bool {
        self.read_u8() != 0
    }

    pub fn write_bytes(&mut self, src: &[u8]) {
        self.put(src);
    }

    /// Read exactly `n` bytes; empty on overflow
    pub fn read_bytes(&mut self, n: usize) -> Vec<u8> {
        self.take(n).map(<[u8]>::to_vec).unwrap_or_default()
    }

    /// Write `src` followed by a NUL byte
    pub fn write_null_terminated_bytes(&mut self, src: &[u8]) {
        self.put(src);
        self.put(&[0]);
    }

    /// Read up to the next NUL byte, consuming the terminator
    ///
    /// A missing terminator counts as a read overflow.
    pub fn read_null_terminated_bytes(&mut self) -> Vec<u8> {
        if self.error.is_some() {
            return Vec::new();
        }

        match self.data_from_current().iter().position(|&b| b == 0) {
            Some(len) => {
                let out = self.read_bytes(len);
                self.index += 1;
                out
            }
            None => {
                let available = self.remaining();
                self.error = Some(ReadOverflow {
                    offset: self.index,
                    requested: available + 1,
                    available,
                });
                Vec::new()
            }
        }
    }

    /// Read `count` elements with `read`, stopping early once the buffer runs dry
    ///
    /// Keeps a corrupt count field from driving a long loop of zero reads.
    pub fn read_vec<T>(&mut self, count: usize, mut read: impl FnMut(&mut Self) -> T) -> Vec<T> {
        let mut out = Vec::with_capacity(count.min(self.remaining()));
        for _ in 0..count {
            let item = read(self);
            if self.has_error() {
                break;
            }
            out.push(item);
        }
        out
    }
}
