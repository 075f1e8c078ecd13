//! Null-run-length codec used for save data
//!
//! ```text
//! ["cmp 20110113   \0"][body]
//! ```
//!
//! In the body a non-zero byte stands for itself, and `00 nn` stands for `nn`
//! zero bytes (`nn` may be 0). Character save blobs are mostly zero padding,
//! which this shrinks considerably.

use tracing::debug;

/// Literal container header
pub const NULLCOMP_HEADER: &[u8; 16] = b"cmp\x2020110113\x20\x20\x20\x00";

/// Longest zero run a single pair can describe
const MAX_RUN: usize = u8::MAX as usize;

/// Compress `data` into a nullcomp container
pub fn compress(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(NULLCOMP_HEADER.len() + data.len());
    out.extend_from_slice(NULLCOMP_HEADER);

    let mut i = 0;
    while i < data.len() {
        if data[i] != 0 {
            out.push(data[i]);
            i += 1;
            continue;
        }

        let run = data[i..].iter().take_while(|&&b| b == 0).count();
        let mut left = run;
        while left > 0 {
            let n = left.min(MAX_RUN);
            out.push(0x00);
            out.push(n as u8);
            left -= n;
        }
        i += run;
    }

    debug!("nullcomp: {} -> {} bytes", data.len(), out.len());
    out
}

/// Expand a nullcomp container
///
/// Input that is too short to carry the header, or does not start with it,
/// is returned unchanged so legacy uncompressed blobs still load.
pub fn decompress(data: &[u8]) -> Vec<u8> {
    let body = match data.strip_prefix(NULLCOMP_HEADER.as_slice()) {
        Some(body) => body,
        None => return data.to_vec(),
    };

    let mut out = Vec::with_capacity(body.len() * 2);
    let mut iter = body.iter();
    while let Some(&b) = iter.next() {
        if b != 0 {
            out.push(b);
            continue;
        }
        match iter.next() {
            Some(&n) => out.resize(out.len() + n as usize, 0),
            None => break,
        }
    }

    debug!("nullcomp: {} -> {} bytes", data.len(), out.len());
    out
}

/// True if `data` starts with the nullcomp header
pub fn is_compressed(data: &[u8]) -> bool {
    data.starts_with(NULLCOMP_HEADER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_sixteen_bytes() {
        assert_eq!(NULLCOMP_HEADER.len(), 16);
        assert_eq!(&NULLCOMP_HEADER[..], b"cmp 20110113   \0");
    }

    #[test]
    fn test_encoding_layout() {
        let packed = compress(&[0x11, 0, 0, 0, 0x22]);
        assert_eq!(&packed[16..], &[0x11, 0x00, 0x03, 0x22]);
    }

    #[test]
    fn test_long_run_is_split() {
        let data = vec![0u8; 600];
        let packed = compress(&data);
        assert_eq!(&packed[16..], &[0x00, 0xFF, 0x00, 0xFF, 0x00, 0x5A]);
        assert_eq!(decompress(&packed), data);
    }

    #[test]
    fn test_exact_max_run_has_no_empty_pair() {
        let packed = compress(&[0u8; 255]);
        assert_eq!(&packed[16..], &[0x00, 0xFF]);
    }

    #[test]
    fn test_no_zero_bytes() {
        let data: Vec<u8> = (1..=255).collect();
        let packed = compress(&data);
        assert_eq!(&packed[16..], &data[..]);
        assert_eq!(decompress(&packed), data);
    }

    #[test]
    fn test_empty_input() {
        let packed = compress(&[]);
        assert_eq!(packed, NULLCOMP_HEADER.to_vec());
        assert!(decompress(&packed).is_empty());
    }

    #[test]
    fn test_zero_count_is_noop() {
        let mut data = NULLCOMP_HEADER.to_vec();
        data.extend_from_slice(&[0x07, 0x00, 0x00, 0x08]);
        assert_eq!(decompress(&data), vec![0x07, 0x08]);
    }

    #[test]
    fn test_short_input_passes_through() {
        let data = b"cmp 2011".to_vec();
        assert_eq!(decompress(&data), data);
        assert!(decompress(&[]).is_empty());
    }

    #[test]
    fn test_legacy_blob_passes_through() {
        let data = vec![0u8; 64];
        assert!(!is_compressed(&data));
        assert_eq!(decompress(&data), data);
    }

    #[test]
    fn test_trailing_zero_without_count() {
        let mut data = NULLCOMP_HEADER.to_vec();
        data.extend_from_slice(&[0x05, 0x00]);
        assert_eq!(decompress(&data), vec![0x05]);
    }
}
