//! Property checks for the buffer, the compression codecs and message framing

use std::io::SeekFrom;

use hunterd_protocol::compression::{jpk, nullcomp};
use hunterd_protocol::messages::{MsgMhfOperateGuild, MsgSysLogin};
use hunterd_protocol::{decode_packet, encode_packet, ByteFrame, ClientContext, Endian, Message};
use proptest::prelude::*;

fn reencode<M: Message>(msg: &M) -> Box<M> {
    let ctx = ClientContext::default();
    let bytes = encode_packet(msg, &ctx).unwrap();
    let mut bf = ByteFrame::from_bytes(&bytes);
    let back = decode_packet(&mut bf, &ctx).unwrap().unwrap();
    assert_eq!(bf.remaining(), 0);
    back.downcast::<M>().unwrap()
}

fn endian() -> impl Strategy<Value = Endian> {
    prop_oneof![Just(Endian::Big), Just(Endian::Little)]
}

/// Byte strings dominated by zero runs, like character saves
fn sparse_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(0u8),
            1 => any::<u8>(),
        ],
        0..2048,
    )
}

proptest! {
    #[test]
    fn prop_nullcomp_roundtrip(data in sparse_bytes()) {
        let packed = nullcomp::compress(&data);
        prop_assert!(nullcomp::is_compressed(&packed));
        prop_assert_eq!(nullcomp::decompress(&packed), data);
    }

    #[test]
    fn prop_nullcomp_never_emits_empty_pair(data in sparse_bytes()) {
        let packed = nullcomp::compress(&data);
        let body = &packed[nullcomp::NULLCOMP_HEADER.len()..];
        let mut i = 0;
        while i < body.len() {
            if body[i] == 0 {
                prop_assert!(body[i + 1] != 0);
                i += 2;
            } else {
                i += 1;
            }
        }
    }

    #[test]
    fn prop_headerless_input_passes_through(data in prop::collection::vec(1u8..=255, 0..64)) {
        prop_assert_eq!(nullcomp::decompress(&data), data.clone());
        prop_assert_eq!(jpk::decompress(&data), data);
    }

    #[test]
    fn prop_integers_roundtrip(
        order in endian(),
        a in any::<u8>(),
        b in any::<i16>(),
        c in any::<u32>(),
        d in any::<i64>(),
        e in any::<f32>().prop_filter("nan", |v| !v.is_nan()),
        f in any::<f64>().prop_filter("nan", |v| !v.is_nan()),
    ) {
        let mut bf = ByteFrame::new();
        bf.set_endian(order);
        bf.write_u8(a);
        bf.write_i16(b);
        bf.write_u32(c);
        bf.write_i64(d);
        bf.write_f32(e);
        bf.write_f64(f);
        prop_assert_eq!(bf.len(), 1 + 2 + 4 + 8 + 4 + 8);

        bf.seek(SeekFrom::Start(0)).unwrap();
        prop_assert_eq!(bf.read_u8(), a);
        prop_assert_eq!(bf.read_i16(), b);
        prop_assert_eq!(bf.read_u32(), c);
        prop_assert_eq!(bf.read_i64(), d);
        prop_assert_eq!(bf.read_f32(), e);
        prop_assert_eq!(bf.read_f64(), f);
        prop_assert!(bf.check().is_ok());
    }

    #[test]
    fn prop_seek_stays_in_window(len in 0usize..64, start in 0usize..64, delta in -96i64..96) {
        let mut bf = ByteFrame::from_bytes(&vec![0u8; len]);
        let start = start.min(len);
        bf.seek(SeekFrom::Start(start as u64)).unwrap();

        let target = start as i64 + delta;
        match bf.seek(SeekFrom::Current(delta)) {
            Ok(pos) => {
                prop_assert!((0..=len as i64).contains(&target));
                prop_assert_eq!(pos as i64, target);
            }
            Err(_) => {
                prop_assert!(target < 0 || target > len as i64);
                prop_assert_eq!(bf.index(), start);
            }
        }

        let from_end = bf.seek(SeekFrom::End(delta));
        prop_assert_eq!(from_end.is_ok(), delta <= 0 && -delta <= len as i64);
    }

    #[test]
    fn prop_overflow_is_sticky(data in prop::collection::vec(any::<u8>(), 0..8), reads in 1usize..16) {
        let mut bf = ByteFrame::from_bytes(&data);
        let whole = data.len() / 4;
        for _ in 0..whole {
            bf.read_u32();
        }
        prop_assert!(!bf.has_error());

        let at = bf.index();
        for _ in 0..reads {
            prop_assert_eq!(bf.read_u32(), 0);
        }
        prop_assert!(bf.has_error());
        prop_assert_eq!(bf.index(), at);
        prop_assert_eq!(bf.read_u8(), 0);
    }

    #[test]
    fn prop_jpk_never_panics(out_size in 0u32..4096, tokens in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut data = Vec::with_capacity(16 + tokens.len());
        data.extend_from_slice(&jpk::JPK_MAGIC.to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());
        data.extend_from_slice(&jpk::JPK_TYPE_LZ.to_le_bytes());
        data.extend_from_slice(&16u32.to_le_bytes());
        data.extend_from_slice(&out_size.to_le_bytes());
        data.extend_from_slice(&tokens);

        prop_assert_eq!(jpk::decompress(&data).len(), out_size as usize);
    }

    #[test]
    fn prop_login_reencodes(
        ack_handle in any::<u32>(),
        char_id in any::<u32>(),
        token_number in any::<u32>(),
        request_version in any::<u16>(),
        token in "[0-9a-f]{0,64}",
    ) {
        let login = MsgSysLogin {
            ack_handle,
            char_id0: char_id,
            login_token_number: token_number,
            request_version,
            char_id1: char_id,
            login_token: token.into(),
            ..Default::default()
        };
        prop_assert_eq!(*reencode(&login), login);
    }

    #[test]
    fn prop_guild_data_is_capped(data1 in any::<u32>(), data2 in prop::collection::vec(any::<u8>(), 0..400)) {
        let msg = MsgMhfOperateGuild {
            ack_handle: u32::MAX,
            guild_id: u32::MAX,
            action: u8::MAX,
            data1,
            data2: data2.clone(),
        };
        let back = reencode(&msg);
        let kept = data2.len().min(u8::MAX as usize);
        prop_assert_eq!(&back.data2[..], &data2[..kept]);
        prop_assert_eq!(back.data1, data1);
    }
}
