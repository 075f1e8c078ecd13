//! Shift_JIS text fields
//!
//! Player-visible text (names, mail, guild boards) travels as Shift_JIS.
//! Identifiers such as stage and semaphore names are plain ASCII.
//!
//! String fields follow one pattern: a length prefix that counts the
//! terminator, the bytes, then a NUL. A string that cannot be transcoded, or
//! does not fit its prefix, is written as a zero-length field (prefix 0, no
//! bytes) rather than failing the whole message. [`PrefixedStr`] keeps the
//! zero-length form apart from an empty string so both re-encode as read.

use std::fmt;
use std::ops::Deref;

use encoding_rs::SHIFT_JIS;
use tracing::warn;

use crate::byteframe::ByteFrame;

/// Transcode UTF-8 to Shift_JIS; `None` if a character has no mapping
pub fn to_sjis(s: &str) -> Option<Vec<u8>> {
    let (bytes, _, had_errors) = SHIFT_JIS.encode(s);
    if had_errors {
        None
    } else {
        Some(bytes.into_owned())
    }
}

/// Transcode Shift_JIS to UTF-8, replacing invalid sequences
pub fn from_sjis(bytes: &[u8]) -> String {
    let (text, had_errors) = SHIFT_JIS.decode_without_bom_handling(bytes);
    if had_errors {
        warn!("Invalid Shift_JIS sequence in {} byte field", bytes.len());
    }
    text.into_owned()
}

/// Text encoding of a string field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Text {
    Ascii,
    Sjis,
}

impl Text {
    fn encode(self, s: &str) -> Option<Vec<u8>> {
        match self {
            Text::Ascii => Some(s.as_bytes().to_vec()),
            Text::Sjis => to_sjis(s),
        }
    }

    fn decode(self, bytes: &[u8]) -> String {
        match self {
            Text::Ascii => String::from_utf8_lossy(bytes).into_owned(),
            Text::Sjis => from_sjis(bytes),
        }
    }
}

/// Text of a length-prefixed string field
///
/// The wire has two empty forms: a zero length with no bytes, and a length
/// of one holding only the NUL. [`PrefixedStr::absent`] is the first; an
/// empty `PrefixedStr::default()` is the second.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PrefixedStr {
    text: String,
    absent: bool,
}

impl PrefixedStr {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            absent: false,
        }
    }

    /// Zero-length field
    pub const fn absent() -> Self {
        Self {
            text: String::new(),
            absent: true,
        }
    }

    pub fn is_absent(&self) -> bool {
        self.absent
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl Deref for PrefixedStr {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl From<&str> for PrefixedStr {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PrefixedStr {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl PartialEq<str> for PrefixedStr {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for PrefixedStr {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl fmt::Display for PrefixedStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Bytes of a fixed-length field up to its first NUL
fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

fn decode_field(raw: &[u8], text: Text) -> PrefixedStr {
    if raw.is_empty() {
        PrefixedStr::absent()
    } else {
        PrefixedStr::new(text.decode(until_nul(raw)))
    }
}

/// ASCII field whose length was read separately; no bytes reads as absent
pub fn ascii_field(raw: &[u8]) -> PrefixedStr {
    decode_field(raw, Text::Ascii)
}

/// Shift_JIS field whose length was read separately; no bytes reads as absent
pub fn sjis_field(raw: &[u8]) -> PrefixedStr {
    decode_field(raw, Text::Sjis)
}

fn encoded_or_empty(s: &str, text: Text, max: usize) -> Option<Vec<u8>> {
    match text.encode(s) {
        Some(bytes) if bytes.len() < max => Some(bytes),
        Some(bytes) => {
            warn!("String of {} bytes does not fit its length field, writing empty", bytes.len());
            None
        }
        None => {
            warn!("String {:?} has no Shift_JIS mapping, writing empty", s);
            None
        }
    }
}

fn field_bytes(s: &PrefixedStr, text: Text, max: usize) -> Option<Vec<u8>> {
    if s.absent {
        None
    } else {
        encoded_or_empty(&s.text, text, max)
    }
}

/// Wire bytes of an ASCII field whose prefix holds at most `max`;
/// `None` goes out as a zero-length field
pub fn ascii_field_bytes(s: &PrefixedStr, max: usize) -> Option<Vec<u8>> {
    field_bytes(s, Text::Ascii, max)
}

/// Wire bytes of a Shift_JIS field whose prefix holds at most `max`;
/// `None` goes out as a zero-length field
pub fn sjis_field_bytes(s: &PrefixedStr, max: usize) -> Option<Vec<u8>> {
    field_bytes(s, Text::Sjis, max)
}

/// Prefix value for bytes from [`ascii_field_bytes`] or [`sjis_field_bytes`]
pub fn field_len(bytes: Option<&[u8]>) -> usize {
    bytes.map_or(0, |b| b.len() + 1)
}

/// Body of a field from [`ascii_field_bytes`] or [`sjis_field_bytes`]
pub fn write_field_bytes(bf: &mut ByteFrame, bytes: Option<&[u8]>) {
    if let Some(bytes) = bytes {
        bf.write_null_terminated_bytes(bytes);
    }
}

/// Shift_JIS bytes of `s` if they fit under `max`, otherwise empty
pub fn fit_sjis(s: &str, max: usize) -> Vec<u8> {
    encoded_or_empty(s, Text::Sjis, max).unwrap_or_default()
}

fn write_prefixed(bf: &mut ByteFrame, s: &PrefixedStr, text: Text, wide: bool) {
    let max = if wide { u16::MAX as usize } else { u8::MAX as usize };
    let bytes = field_bytes(s, text, max);
    let len = field_len(bytes.as_deref());
    if wide {
        bf.write_u16(len as u16);
    } else {
        bf.write_u8(len as u8);
    }
    write_field_bytes(bf, bytes.as_deref());
}

fn read_prefixed(bf: &mut ByteFrame, text: Text, wide: bool) -> PrefixedStr {
    let len = if wide { bf.read_u16() as usize } else { bf.read_u8() as usize };
    let raw = bf.read_bytes(len);
    decode_field(&raw, text)
}

/// `u8` length (terminator included), ASCII bytes, NUL
pub fn write_str8(bf: &mut ByteFrame, s: &PrefixedStr) {
    write_prefixed(bf, s, Text::Ascii, false);
}

pub fn read_str8(bf: &mut ByteFrame) -> PrefixedStr {
    read_prefixed(bf, Text::Ascii, false)
}

/// `u16` length (terminator included), ASCII bytes, NUL
pub fn write_str16(bf: &mut ByteFrame, s: &PrefixedStr) {
    write_prefixed(bf, s, Text::Ascii, true);
}

pub fn read_str16(bf: &mut ByteFrame) -> PrefixedStr {
    read_prefixed(bf, Text::Ascii, true)
}

/// `u8` length (terminator included), Shift_JIS bytes, NUL
pub fn write_sjis8(bf: &mut ByteFrame, s: &PrefixedStr) {
    write_prefixed(bf, s, Text::Sjis, false);
}

pub fn read_sjis8(bf: &mut ByteFrame) -> PrefixedStr {
    read_prefixed(bf, Text::Sjis, false)
}

/// `u16` length (terminator included), Shift_JIS bytes, NUL
pub fn write_sjis16(bf: &mut ByteFrame, s: &PrefixedStr) {
    write_prefixed(bf, s, Text::Sjis, true);
}

pub fn read_sjis16(bf: &mut ByteFrame) -> PrefixedStr {
    read_prefixed(bf, Text::Sjis, true)
}

/// Shift_JIS text up to a NUL; any length lives elsewhere
pub fn read_sjis_nt(bf: &mut ByteFrame) -> String {
    let raw = bf.read_null_terminated_bytes();
    from_sjis(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sjis_roundtrip() {
        let name = "ハンター";
        let bytes = to_sjis(name).unwrap();
        assert_eq!(bytes.len(), 8);
        assert_eq!(from_sjis(&bytes), name);
    }

    #[test]
    fn test_unmappable_text() {
        assert!(to_sjis("🦖").is_none());
    }

    #[test]
    fn test_str8_layout() {
        let mut bf = ByteFrame::new();
        write_str8(&mut bf, &"sl1Ns200p0a0u0".into());
        assert_eq!(bf.data()[0], 15);
        assert_eq!(bf.data().len(), 16);
        assert_eq!(*bf.data().last().unwrap(), 0);

        let mut rd = ByteFrame::from_bytes(bf.data());
        assert_eq!(read_str8(&mut rd), "sl1Ns200p0a0u0");
        assert_eq!(rd.remaining(), 0);
    }

    #[test]
    fn test_empty_string_keeps_terminator() {
        let mut bf = ByteFrame::new();
        write_sjis16(&mut bf, &PrefixedStr::default());
        assert_eq!(bf.data(), &[0x00, 0x01, 0x00]);

        let mut rd = ByteFrame::from_bytes(bf.data());
        let back = read_sjis16(&mut rd);
        assert_eq!(back, "");
        assert!(!back.is_absent());
    }

    #[test]
    fn test_empty_forms_reencode_as_read() {
        for wire in [&[0x00, 0x00][..], &[0x00, 0x01, 0x00][..]] {
            let mut rd = ByteFrame::from_bytes(wire);
            let s = read_str16(&mut rd);
            assert_eq!(s, "");
            assert_eq!(s.is_absent(), wire.len() == 2);

            let mut bf = ByteFrame::new();
            write_str16(&mut bf, &s);
            assert_eq!(bf.data(), wire);
        }

        for wire in [&[0x00][..], &[0x01, 0x00][..]] {
            let mut rd = ByteFrame::from_bytes(wire);
            let s = read_sjis8(&mut rd);
            let mut bf = ByteFrame::new();
            write_sjis8(&mut bf, &s);
            assert_eq!(bf.data(), wire);
        }
    }

    #[test]
    fn test_transcode_failure_writes_zero_length() {
        let mut bf = ByteFrame::new();
        write_sjis8(&mut bf, &"🦖".into());
        bf.write_u8(0xEE);
        assert_eq!(bf.data(), &[0x00, 0xEE]);

        let mut rd = ByteFrame::from_bytes(bf.data());
        assert!(read_sjis8(&mut rd).is_absent());
        assert_eq!(rd.read_u8(), 0xEE);
    }

    #[test]
    fn test_overlong_str8_writes_zero_length() {
        let mut bf = ByteFrame::new();
        write_str8(&mut bf, &"x".repeat(300).into());
        assert_eq!(bf.data(), &[0x00]);

        let mut bf = ByteFrame::new();
        write_str8(&mut bf, &"x".repeat(254).into());
        assert_eq!(bf.data()[0], 0xFF);
        assert_eq!(bf.len(), 256);
    }

    #[test]
    fn test_separate_length_fields() {
        let bytes = ascii_field_bytes(&"abc".into(), u8::MAX as usize);
        assert_eq!(field_len(bytes.as_deref()), 4);
        assert_eq!(field_len(ascii_field_bytes(&PrefixedStr::absent(), 255).as_deref()), 0);
        assert!(ascii_field(&[]).is_absent());
        assert_eq!(ascii_field(b"abc\0"), "abc");
        assert_eq!(sjis_field(&[0x00]), "");
        assert!(!sjis_field(&[0x00]).is_absent());
    }

    #[test]
    fn test_fit_sjis() {
        assert_eq!(fit_sjis("狩人", 16).len(), 4);
        assert!(fit_sjis("狩人", 4).is_empty());
        assert!(fit_sjis("🦖", 16).is_empty());
    }

    #[test]
    fn test_null_terminated_sjis() {
        let mut bf = ByteFrame::new();
        bf.write_null_terminated_bytes(&fit_sjis("件名", 64));
        assert_eq!(bf.len(), 5);

        let mut rd = ByteFrame::from_bytes(bf.data());
        assert_eq!(read_sjis_nt(&mut rd), "件名");
    }
}
