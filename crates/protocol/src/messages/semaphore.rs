//! Semaphores and registers
//!
//! Semaphores gate shared activities (quests, raids) across clients;
//! registers are small shared integer arrays attached to them.

use hunterd_core::ClientContext;

use crate::byteframe::ByteFrame;
use crate::sjis::{ascii_field, ascii_field_bytes, field_len, write_field_bytes, PrefixedStr};

wire_messages! {
    MsgSysCreateSemaphore => SysCreateSemaphore {
        ack_handle: u32,
        unk0: u16,
        semaphore_id: PrefixedStr as str8,
    }

    MsgSysCreateAcquireSemaphore => SysCreateAcquireSemaphore {
        ack_handle: u32,
        unk0: u16,
        player_count: u8,
        semaphore_id: PrefixedStr as str8,
    }

    MsgSysDeleteSemaphore => SysDeleteSemaphore {
        semaphore_id: u32,
    }

    MsgSysAcquireSemaphore => SysAcquireSemaphore {
        ack_handle: u32,
        semaphore_id: PrefixedStr as str8,
    }

    MsgSysCheckSemaphore => SysCheckSemaphore {
        ack_handle: u32,
        semaphore_id: PrefixedStr as str8,
    }

    MsgSysUnlockGlobalSema => SysUnlockGlobalSema {
        ack_handle: u32,
    }

    /// Write register values; the payload is a list of register operations
    MsgSysOperateRegister => SysOperateRegister {
        ack_handle: u32,
        semaphore_id: u32,
        unk0: u16,
        raw_data_payload: Vec<u8> as bytes16,
    }

    MsgSysLoadRegister => SysLoadRegister {
        ack_handle: u32,
        register_id: u32,
        values: u8,
        unk0: u8,
        unk1: u16,
    }

    MsgSysNotifyRegister => SysNotifyRegister {
        register_id: u32,
    }
}

/// Cross-server semaphore lock
///
/// # Packet Format
/// ```text
/// [u32 ack_handle][u16 user_len][u16 channel_len][user\0][channel\0]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsgSysLockGlobalSema {
    pub ack_handle: u32,
    pub user_id_string: PrefixedStr,
    pub server_channel_id_string: PrefixedStr,
}

impl MsgSysLockGlobalSema {
    fn read_fields(&mut self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        self.ack_handle = bf.read_u32();
        let user_len = bf.read_u16() as usize;
        let channel_len = bf.read_u16() as usize;
        self.user_id_string = ascii_field(&bf.read_bytes(user_len));
        self.server_channel_id_string = ascii_field(&bf.read_bytes(channel_len));
    }

    fn write_fields(&self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        bf.write_u32(self.ack_handle);
        let user = ascii_field_bytes(&self.user_id_string, u16::MAX as usize);
        let channel = ascii_field_bytes(&self.server_channel_id_string, u16::MAX as usize);
        bf.write_u16(field_len(user.as_deref()) as u16);
        bf.write_u16(field_len(channel.as_deref()) as u16);
        write_field_bytes(bf, user.as_deref());
        write_field_bytes(bf, channel.as_deref());
    }
}

impl_message! {
    MsgSysLockGlobalSema => SysLockGlobalSema,
}
