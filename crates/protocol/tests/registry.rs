//! Registry-wide checks over every opcode slot

use std::fmt::Debug;

use hunterd_protocol::messages::{
    AckData, MsgMhfAcquireCafeItem, MsgMhfCreateGuild, MsgMhfPostTowerInfo, MsgMhfSavedata,
    MsgMhfSetUdTacticsFollower, MsgMhfUpdateBeatLevel, MsgMhfUpdateEtcPoint, MsgSysAck,
    MsgSysCastBinary, MsgSysLockGlobalSema, MsgSysLogin, MsgSysNop, MsgSysPing,
    MsgSysPositionObject, MsgSysSetStageBinary,
};
use hunterd_protocol::{
    decode_group, decode_packet, encode_packet, from_opcode, ByteFrame, ClientContext,
    ClientVersion, GroupStop, Message, Opcode, Placeholder, PrefixedStr,
};

/// Route library logs to the test harness; `RUST_LOG=trace` shows payloads
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const VERSIONS: [ClientVersion; 5] = [
    ClientVersion::S6,
    ClientVersion::FW5,
    ClientVersion::G1,
    ClientVersion::G10,
    ClientVersion::ZZ,
];

#[test]
fn test_every_slot_reports_its_opcode() {
    for id in 0..=Opcode::MAX {
        let msg = from_opcode(id).unwrap_or_else(|| panic!("slot 0x{id:04X} missing"));
        assert_eq!(msg.opcode().as_u16(), id);
    }
}

#[test]
fn test_ids_past_the_table_are_unregistered() {
    for id in [Opcode::MAX + 1, 0x0200, 0x8000, u16::MAX] {
        assert!(from_opcode(id).is_none(), "0x{id:04X}");
    }
}

#[test]
fn test_reserved_slots_are_not_implemented() {
    let ctx = ClientContext::default();
    let reserved: Vec<Opcode> = Opcode::ALL.iter().copied().filter(|op| op.is_reserved()).collect();
    assert!(!reserved.is_empty());

    for op in reserved {
        let mut msg = from_opcode(op.as_u16()).unwrap();
        assert_eq!(msg.opcode(), op);
        assert!(msg.is::<Placeholder>());

        let mut bf = ByteFrame::from_bytes(&[0xAA; 8]);
        assert!(msg.decode(&mut bf, &ctx).unwrap_err().is_not_implemented());
        assert_eq!(bf.index(), 0);

        let mut out = ByteFrame::new();
        assert!(msg.encode(&mut out, &ctx).unwrap_err().is_not_implemented());
        assert!(out.is_empty());
    }
}

#[test]
fn test_implemented_defaults_reencode_identically() {
    for ctx in VERSIONS.map(ClientContext::new) {
        for &op in Opcode::ALL {
            let msg = from_opcode(op.as_u16()).unwrap();
            if msg.is::<Placeholder>() {
                continue;
            }

            let first = encode_packet(msg.as_ref(), &ctx).unwrap();
            let mut bf = ByteFrame::from_bytes(&first);
            let back = decode_packet(&mut bf, &ctx)
                .unwrap_or_else(|e| panic!("{op} under {}: {e}", ctx.version))
                .unwrap();
            assert_eq!(bf.remaining(), 0, "{op} under {}", ctx.version);

            let second = encode_packet(back.as_ref(), &ctx).unwrap();
            assert_eq!(first, second, "{op} under {}", ctx.version);
        }
    }
}

/// Frame `msg`, decode the frame back and check nothing was left over
fn reencode<M: Message + Debug>(msg: &M, ctx: &ClientContext) -> Box<M> {
    let bytes = encode_packet(msg, ctx).unwrap();
    let mut bf = ByteFrame::from_bytes(&bytes);
    let back = decode_packet(&mut bf, ctx).unwrap().unwrap();
    assert_eq!(bf.remaining(), 0, "{} left bytes unread", msg.opcode());
    back.downcast::<M>().unwrap()
}

#[test]
fn test_boundary_values_survive_reencoding() {
    init_tracing();
    for ctx in VERSIONS.map(ClientContext::new) {
        let login = MsgSysLogin {
            ack_handle: u32::MAX,
            char_id0: u32::MAX,
            login_token_number: u32::MAX,
            hardcoded_zero0: u16::MAX,
            request_version: u16::MAX,
            char_id1: u32::MAX,
            hardcoded_zero1: u16::MAX,
            login_token: "t".repeat(u16::MAX as usize - 1).into(),
        };
        assert_eq!(*reencode(&login, &ctx), login);

        let cafe = MsgMhfAcquireCafeItem {
            ack_handle: u32::MAX,
            item_type: u16::MAX,
            item_id: u16::MAX,
            quant: u16::MAX,
            point_cost: u32::MAX,
            unk0: u16::MAX,
        };
        assert_eq!(*reencode(&cafe, &ctx), cafe);

        for delta in [i16::MIN, i16::MAX] {
            let etc = MsgMhfUpdateEtcPoint { ack_handle: 0, point_type: u8::MAX, delta };
            assert_eq!(*reencode(&etc, &ctx), etc);
        }

        let beat = MsgMhfUpdateBeatLevel {
            ack_handle: u32::MAX,
            unk0: u32::MAX,
            unk1: 0,
            data1: [i32::MIN; 16],
            data2: [i32::MAX; 16],
        };
        assert_eq!(*reencode(&beat, &ctx), beat);

        let position = MsgSysPositionObject {
            obj_id: u32::MAX,
            x: f32::MAX,
            y: f32::MIN,
            z: -0.0,
        };
        assert_eq!(*reencode(&position, &ctx), position);

        let ack = MsgSysAck {
            ack_handle: u32::MAX,
            error_code: u8::MAX,
            data: AckData::Buffer(vec![0xFF; u16::MAX as usize]),
        };
        assert_eq!(*reencode(&ack, &ctx), ack);
    }

    let zz = ClientContext::new(ClientVersion::ZZ);
    for unk9 in [i64::MIN, i64::MAX] {
        let tower = MsgMhfPostTowerInfo {
            ack_handle: u32::MAX,
            info_type: u32::MAX,
            skill: i32::MIN,
            cost: i32::MAX,
            unk9,
            block2: i32::MIN,
            ..Default::default()
        };
        assert_eq!(*reencode(&tower, &zz), tower);
    }

    let save = MsgMhfSavedata {
        ack_handle: u32::MAX,
        alloc_mem_size: u32::MAX,
        save_type: u8::MAX,
        unk1: u32::MAX,
        sized_by_alloc: false,
        raw_data_payload: vec![0xFF; 300],
    };
    assert_eq!(*reencode(&save, &zz), save);
}

#[test]
fn test_oversized_fields_stay_framed() {
    init_tracing();
    let ctx = ClientContext::default();

    let cast = MsgSysCastBinary {
        unk: u32::MAX,
        broadcast_type: u8::MAX,
        message_type: u8::MAX,
        raw_data_payload: vec![0x42; 70_000],
    };
    let back = reencode(&cast, &ctx);
    assert_eq!(back.raw_data_payload, vec![0x42; u16::MAX as usize]);
    assert_eq!((back.unk, back.message_type), (u32::MAX, u8::MAX));

    let follower = MsgMhfSetUdTacticsFollower {
        follower_ids: vec![u32::MAX; 70_000],
        unk0: u8::MAX,
        unk1: u8::MAX,
    };
    let back = reencode(&follower, &ctx);
    assert_eq!(back.follower_ids.len(), u16::MAX as usize);
    assert_eq!((back.unk0, back.unk1), (u8::MAX, u8::MAX));

    let guild = MsgMhfCreateGuild {
        ack_handle: 1,
        unk0: 2,
        name: "団".repeat(40_000).into(),
    };
    let back = reencode(&guild, &ctx);
    assert!(back.name.is_absent());
    assert_eq!(back.unk0, 2);

    let stage = MsgSysSetStageBinary {
        binary_type0: u8::MAX,
        binary_type1: u8::MAX,
        stage_id: "s".repeat(255).into(),
        raw_data_payload: vec![0xAB; 4],
    };
    let back = reencode(&stage, &ctx);
    assert!(back.stage_id.is_absent());
    assert_eq!(back.raw_data_payload, vec![0xAB; 4]);

    let sema = MsgSysLockGlobalSema {
        ack_handle: 1,
        user_id_string: PrefixedStr::absent(),
        server_channel_id_string: "c".repeat(70_000).into(),
    };
    let back = reencode(&sema, &ctx);
    assert!(back.user_id_string.is_absent());
    assert!(back.server_channel_id_string.is_absent());
}

#[test]
fn test_follower_ids_wire_image() {
    let ctx = ClientContext::default();
    let msg = MsgMhfSetUdTacticsFollower {
        follower_ids: vec![100, 200, 300],
        unk0: 0x01,
        unk1: 0x02,
    };

    let bytes = encode_packet(&msg, &ctx).unwrap();
    let mut expected = Opcode::MhfSetUdTacticsFollower.as_u16().to_be_bytes().to_vec();
    expected.extend_from_slice(&[0x00, 0x03]);
    expected.extend_from_slice(&100u32.to_be_bytes());
    expected.extend_from_slice(&200u32.to_be_bytes());
    expected.extend_from_slice(&300u32.to_be_bytes());
    expected.extend_from_slice(&[0x01, 0x02]);
    assert_eq!(&bytes[..], &expected[..]);

    let mut bf = ByteFrame::from_bytes(&bytes);
    let decoded = decode_packet(&mut bf, &ctx).unwrap().unwrap();
    let back = decoded.downcast::<MsgMhfSetUdTacticsFollower>().unwrap();
    assert_eq!(back.follower_ids, vec![100, 200, 300]);
    assert_eq!((back.unk0, back.unk1), (0x01, 0x02));
}

#[test]
fn test_group_decodes_until_frame_ends() {
    init_tracing();
    let ctx = ClientContext::default();
    let ping = encode_packet(&MsgSysPing { ack_handle: 9 }, &ctx).unwrap();
    let nop = encode_packet(&MsgSysNop, &ctx).unwrap();
    let ack = encode_packet(&MsgSysAck::simple(9, [1, 2, 3, 4]), &ctx).unwrap();

    let data = [&ping[..], &nop[..], &ack[..], &[0x00][..]].concat();
    let mut bf = ByteFrame::from_bytes(&data);
    let group = decode_group(&mut bf, &ctx);

    assert!(group.is_complete());
    assert_eq!(group.messages.len(), 3);
    assert!(group.messages[1].is::<MsgSysNop>());
    assert_eq!(group.messages[2].downcast_ref::<MsgSysAck>().unwrap().ack_handle, 9);
    assert_eq!(bf.remaining(), 1);
}

#[test]
fn test_group_stops_at_unknown_opcode() {
    init_tracing();
    let ctx = ClientContext::default();
    let nop = encode_packet(&MsgSysNop, &ctx).unwrap();
    let data = [&nop[..], &[0x7F, 0xFF][..], &nop[..]].concat();

    let mut bf = ByteFrame::from_bytes(&data);
    let group = decode_group(&mut bf, &ctx);
    assert_eq!(group.messages.len(), 1);
    assert!(matches!(group.stop, Some(GroupStop::UnknownOpcode(0x7FFF))));
}

#[test]
fn test_group_stops_at_unimplemented_layout() {
    init_tracing();
    let ctx = ClientContext::default();
    let nop = encode_packet(&MsgSysNop, &ctx).unwrap();
    let reserved = Opcode::SysReserve4A.as_u16().to_be_bytes();
    let data = [&nop[..], &reserved[..], &[1, 2, 3][..]].concat();

    let mut bf = ByteFrame::from_bytes(&data);
    let group = decode_group(&mut bf, &ctx);
    assert_eq!(group.messages.len(), 1);
    match group.stop {
        Some(GroupStop::Failed { opcode, source }) => {
            assert_eq!(opcode, Opcode::SysReserve4A);
            assert!(source.is_not_implemented());
        }
        other => panic!("unexpected stop: {other:?}"),
    }
}

#[test]
fn test_group_stops_at_truncated_message() {
    init_tracing();
    let ctx = ClientContext::default();
    let ping = encode_packet(&MsgSysPing { ack_handle: 1 }, &ctx).unwrap();
    let data = [&ping[..], &ping[..4]].concat();

    let mut bf = ByteFrame::from_bytes(&data);
    let group = decode_group(&mut bf, &ctx);
    assert_eq!(group.messages.len(), 1);
    match group.stop {
        Some(GroupStop::Failed { opcode, source }) => {
            assert_eq!(opcode, Opcode::SysPing);
            assert!(source.is_read_overflow());
        }
        other => panic!("unexpected stop: {other:?}"),
    }
}
