//! Stage lifecycle: creating, entering, locking and binary state of stages
//!
//! Stage identifiers are ASCII strings such as `sl1Ns200p0a0u0`, carried
//! with a `u8` length that counts the terminator.

use hunterd_core::ClientContext;

use crate::byteframe::ByteFrame;
use crate::sjis::{ascii_field, ascii_field_bytes, field_len, write_field_bytes, PrefixedStr};
use crate::wire::clamp_len;

empty_messages! {
    MsgSysLeaveStage => SysLeaveStage,
    MsgSysUnreserveStage => SysUnreserveStage,
}

wire_messages! {
    MsgSysCreateStage => SysCreateStage {
        ack_handle: u32,
        create_type: u8,
        player_count: u8,
        stage_id: PrefixedStr as str8,
    }

    MsgSysEnterStage => SysEnterStage {
        ack_handle: u32,
        is_quest: bool,
        stage_id: PrefixedStr as str8,
    }

    MsgSysBackStage => SysBackStage {
        ack_handle: u32,
    }

    MsgSysMoveStage => SysMoveStage {
        ack_handle: u32,
        unk_bool: u8,
        stage_id: PrefixedStr as str8,
    }

    MsgSysLockStage => SysLockStage {
        ack_handle: u32,
        unk0: u8,
        unk1: u8,
        stage_id: PrefixedStr as str8,
    }

    MsgSysUnlockStage => SysUnlockStage {
        unk0: u16,
    }

    MsgSysReserveStage => SysReserveStage {
        ack_handle: u32,
        ready: u8,
        stage_id: PrefixedStr as str8,
    }

    MsgSysSetStagePass => SysSetStagePass {
        unk0: u8,
        password: PrefixedStr as str8,
    }

    /// Wait until another client has published a stage binary
    MsgSysWaitStageBinary => SysWaitStageBinary {
        ack_handle: u32,
        binary_type0: u8,
        binary_type1: u8,
        unk0: u32,
        stage_id: PrefixedStr as str8,
    }

    MsgSysGetStageBinary => SysGetStageBinary {
        ack_handle: u32,
        binary_type0: u8,
        binary_type1: u8,
        unk0: u32,
        stage_id: PrefixedStr as str8,
    }

    MsgSysEnumerateClient => SysEnumerateClient {
        ack_handle: u32,
        unk0: u8,
        get: u8,
        stage_id: PrefixedStr as str8,
    }

    /// List stages whose id starts with `stage_prefix`
    MsgSysEnumerateStage => SysEnumerateStage {
        ack_handle: u32,
        unk0: u8,
        stage_prefix: PrefixedStr as str8,
    }
}

/// Publish a stage binary
///
/// # Packet Format
/// ```text
/// [u8 type0][u8 type1][u8 id_len][u16 data_len][stage_id\0][data]
/// ```
/// Both lengths come before either field they describe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsgSysSetStageBinary {
    pub binary_type0: u8,
    pub binary_type1: u8,
    pub stage_id: PrefixedStr,
    pub raw_data_payload: Vec<u8>,
}

impl MsgSysSetStageBinary {
    fn read_fields(&mut self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        self.binary_type0 = bf.read_u8();
        self.binary_type1 = bf.read_u8();
        let id_len = bf.read_u8() as usize;
        let data_len = bf.read_u16() as usize;
        self.stage_id = ascii_field(&bf.read_bytes(id_len));
        self.raw_data_payload = bf.read_bytes(data_len);
    }

    fn write_fields(&self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        bf.write_u8(self.binary_type0);
        bf.write_u8(self.binary_type1);
        let id = ascii_field_bytes(&self.stage_id, u8::MAX as usize);
        let data_len = clamp_len(self.raw_data_payload.len(), u16::MAX as usize, "stage binary");
        bf.write_u8(field_len(id.as_deref()) as u8);
        bf.write_u16(data_len as u16);
        write_field_bytes(bf, id.as_deref());
        bf.write_bytes(&self.raw_data_payload[..data_len]);
    }
}

impl_message! {
    MsgSysSetStageBinary => SysSetStageBinary,
}
