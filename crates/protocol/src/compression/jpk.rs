//! JPK decompressor
//!
//! Game data delivered by the client is wrapped in a small container:
//!
//! ```text
//! [4B magic "JKR\x1A"][2B reserved][2B LE type][4B LE token offset][4B LE output size][tokens]
//! ```
//!
//! Only type 3 (LZ with a 1-bit-at-a-time flag stream) is decoded. Anything
//! else, including data without the magic, is handed back unchanged, which is
//! how callers use this: every blob goes through [`decompress`] whether it is
//! packed or not.
//!
//! # Token shapes
//!
//! Flag bits are consumed MSB first from a flag byte refilled every 8 bits.
//!
//! | bits      | operands                         | action                                  |
//! |-----------|----------------------------------|-----------------------------------------|
//! | `0`       | 1 byte                           | literal                                 |
//! | `1 0 ll`  | 1 byte offset                    | copy `ll + 3`                           |
//! | `1 1`     | `lll ooooo` `oooooooo`           | `lll != 0`: copy `lll + 2`              |
//! | `1 1 .. 0 llll` | (same two bytes)           | copy `llll + 10`                        |
//! | `1 1 .. 1`| 1 byte `n`                       | `n == 0xFF`: `offset + 0x1B` literals, else copy `n + 0x1A` |
//!
//! A copy with offset `o` reads from `o + 1` bytes behind the write position
//! and may overlap the bytes it is producing.

use std::io::SeekFrom;
use tracing::{debug, warn};

use crate::byteframe::ByteFrame;

/// `"JKR\x1A"` read little-endian
pub const JPK_MAGIC: u32 = 0x1A52_4B4A;

/// The only container type with a decoder
pub const JPK_TYPE_LZ: u16 = 3;

/// Decompress a JPK container, or return `data` unchanged if it is not one
pub fn decompress(data: &[u8]) -> Vec<u8> {
    let mut bf = ByteFrame::from_bytes(data);
    bf.set_le();

    let magic = bf.read_u32();
    if bf.has_error() || magic != JPK_MAGIC {
        return data.to_vec();
    }

    bf.read_u16(); // reserved
    let kind = bf.read_u16();
    if kind != JPK_TYPE_LZ {
        debug!("JPK type {} has no decoder, passing through", kind);
        return data.to_vec();
    }

    let start = bf.read_u32();
    let out_size = bf.read_u32() as usize;
    if bf.has_error() {
        warn!("Truncated JPK header ({} bytes), passing through", data.len());
        return data.to_vec();
    }

    if bf.seek(SeekFrom::Start(start as u64)).is_err() {
        warn!("JPK token offset {} outside {} byte container, passing through", start, data.len());
        return data.to_vec();
    }

    let mut decoder = LzDecoder {
        src: bf,
        flag: 0,
        shift: 0,
        out: vec![0; out_size],
        pos: 0,
    };
    decoder.run();

    debug!("JPK: {} -> {} bytes", data.len(), out_size);
    decoder.out
}

/// Per-call decoder state
struct LzDecoder {
    src: ByteFrame,
    flag: u8,
    shift: u8,
    out: Vec<u8>,
    pos: usize,
}

impl LzDecoder {
    fn run(&mut self) {
        while self.src.remaining() > 0 && !self.src.has_error() && self.pos + 1 < self.out.len() {
            if !self.step() {
                warn!(
                    "Malformed JPK token stream at input offset {}, output {} of {}",
                    self.src.index(),
                    self.pos,
                    self.out.len()
                );
                return;
            }
        }
    }

    /// Decode one token; false if it would read or write outside the output
    fn step(&mut self) -> bool {
        if self.bit() == 0 {
            let b = self.src.read_u8();
            return self.literal(b);
        }

        if self.bit() == 0 {
            let len = (self.bit() << 1) | self.bit();
            let offset = self.src.read_u8() as usize;
            return self.copy(offset, len as usize + 3);
        }

        let hi = self.src.read_u8();
        let lo = self.src.read_u8();
        let len = ((hi & 0xE0) >> 5) as usize;
        let offset = (((hi & 0x1F) as usize) << 8) | lo as usize;

        if len != 0 {
            return self.copy(offset, len + 2);
        }

        if self.bit() == 0 {
            let len = (self.bit() << 3) | (self.bit() << 2) | (self.bit() << 1) | self.bit();
            return self.copy(offset, len as usize + 2 + 8);
        }

        let n = self.src.read_u8();
        if n == 0xFF {
            for _ in 0..offset + 0x1B {
                let b = self.src.read_u8();
                if !self.literal(b) {
                    return false;
                }
            }
            true
        } else {
            self.copy(offset, n as usize + 0x1A)
        }
    }

    fn bit(&mut self) -> u8 {
        if self.shift == 0 {
            self.flag = self.src.read_u8();
            self.shift = 8;
        }
        self.shift -= 1;
        (self.flag >> self.shift) & 1
    }

    fn literal(&mut self, b: u8) -> bool {
        match self.out.get_mut(self.pos) {
            Some(slot) => {
                *slot = b;
                self.pos += 1;
                true
            }
            None => false,
        }
    }

    /// Byte-by-byte back-reference; source and destination may overlap
    fn copy(&mut self, offset: usize, len: usize) -> bool {
        for _ in 0..len {
            if self.pos >= self.out.len() || self.pos < offset + 1 {
                return false;
            }
            self.out[self.pos] = self.out[self.pos - offset - 1];
            self.pos += 1;
        }
        true
    }
}
