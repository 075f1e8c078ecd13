//! Session plumbing: acks, login, clock, logs and broadcast relays

use hunterd_core::{ClientContext, ClientVersion};

use crate::byteframe::ByteFrame;
use crate::sjis::{read_str16, read_str8, write_str16, write_str8, PrefixedStr};
use crate::wire::clamp_len;

/// Ack size escape: a `u16` of `0xFFFF` means a `u32` size follows
const ACK_SIZE_ESCAPE: u16 = 0xFFFF;

empty_messages! {
    /// Final message of a connection
    MsgSysEnd => SysEnd,
    /// Keep-alive filler
    MsgSysNop => SysNop,
    MsgSysExtendThreshold => SysExtendThreshold,
}

wire_messages! {
    MsgSysLogin => SysLogin {
        ack_handle: u32,
        char_id0: u32,
        login_token_number: u32,
        hardcoded_zero0: u16,
        request_version: u16,
        char_id1: u32,
        hardcoded_zero1: u16,
        login_token: PrefixedStr as str16,
    }

    MsgSysLogout => SysLogout {
        logout_type: u8,
    }

    MsgSysPing => SysPing {
        ack_handle: u32,
    }

    /// Client broadcast to be relayed to other players
    MsgSysCastBinary => SysCastBinary {
        unk: u32,
        broadcast_type: u8,
        message_type: u8,
        raw_data_payload: Vec<u8> as bytes16,
    }

    /// Relayed broadcast, stamped with the sender
    MsgSysCastedBinary => SysCastedBinary {
        char_id: u32,
        broadcast_type: u8,
        message_type: u8,
        raw_data_payload: Vec<u8> as bytes16,
    }

    MsgSysHideClient => SysHideClient {
        hide: bool,
        unk0: u16,
        unk1: u8,
    }

    MsgSysTime => SysTime {
        get_remote_time: bool,
        timestamp: u32,
    }

    MsgSysIssueLogkey => SysIssueLogkey {
        ack_handle: u32,
        unk0: u16,
        unk1: u16,
    }

    MsgSysRightsReload => SysRightsReload {
        ack_handle: u32,
        unk0: u8,
    }
}

/// Ack body: a sized buffer or a fixed four-byte value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AckData {
    Buffer(Vec<u8>),
    Simple([u8; 4]),
}

impl Default for AckData {
    fn default() -> Self {
        AckData::Simple([0; 4])
    }
}

/// Reply to any message carrying an ack handle
///
/// # Packet Format
/// ```text
/// [u32 ack_handle][bool is_buffer][u8 error_code]
///   buffer: [u16 size | 0xFFFF u32 size][bytes]
///   simple: [4 bytes]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsgSysAck {
    pub ack_handle: u32,
    pub error_code: u8,
    pub data: AckData,
}

impl MsgSysAck {
    pub fn buffer(ack_handle: u32, data: Vec<u8>) -> Self {
        Self { ack_handle, error_code: 0, data: AckData::Buffer(data) }
    }

    pub fn simple(ack_handle: u32, data: [u8; 4]) -> Self {
        Self { ack_handle, error_code: 0, data: AckData::Simple(data) }
    }

    /// Failed request; the client ignores the body
    pub fn failure(ack_handle: u32) -> Self {
        Self { ack_handle, error_code: 1, data: AckData::default() }
    }

    fn read_fields(&mut self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        self.ack_handle = bf.read_u32();
        let is_buffer = bf.read_bool();
        self.error_code = bf.read_u8();
        self.data = if is_buffer {
            let mut size = bf.read_u16() as usize;
            if size == ACK_SIZE_ESCAPE as usize {
                size = bf.read_u32() as usize;
            }
            AckData::Buffer(bf.read_bytes(size))
        } else {
            let mut simple = [0u8; 4];
            let raw = bf.read_bytes(4);
            if raw.len() == 4 {
                simple.copy_from_slice(&raw);
            }
            AckData::Simple(simple)
        };
    }

    fn write_fields(&self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        bf.write_u32(self.ack_handle);
        bf.write_bool(matches!(self.data, AckData::Buffer(_)));
        bf.write_u8(self.error_code);
        match &self.data {
            AckData::Buffer(data) => {
                let len = clamp_len(data.len(), u32::MAX as usize, "ack buffer");
                if len < ACK_SIZE_ESCAPE as usize {
                    bf.write_u16(len as u16);
                } else {
                    bf.write_u16(ACK_SIZE_ESCAPE);
                    bf.write_u32(len as u32);
                }
                bf.write_bytes(&data[..len]);
            }
            AckData::Simple(data) => bf.write_bytes(data),
        }
    }
}

/// One client-side log record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalLogEntry {
    pub index: u32,
    pub type1: u8,
    pub type2: u8,
    pub unk0: i16,
    pub unk1: i32,
    pub unk2: i32,
    pub unk3: i32,
    /// Only on the wire from G1 on
    pub unk4: [i32; 4],
}

/// Batched client log records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsgSysTerminalLog {
    pub ack_handle: u32,
    pub log_id: u32,
    pub unk0: u16,
    pub entries: Vec<TerminalLogEntry>,
}

impl MsgSysTerminalLog {
    fn read_fields(&mut self, bf: &mut ByteFrame, ctx: &ClientContext) {
        self.ack_handle = bf.read_u32();
        self.log_id = bf.read_u32();
        let count = bf.read_u16() as usize;
        self.unk0 = bf.read_u16();
        let extended = ctx.at_least(ClientVersion::G1);
        self.entries = bf.read_vec(count, |bf| {
            let mut e = TerminalLogEntry {
                index: bf.read_u32(),
                type1: bf.read_u8(),
                type2: bf.read_u8(),
                unk0: bf.read_i16(),
                unk1: bf.read_i32(),
                unk2: bf.read_i32(),
                unk3: bf.read_i32(),
                unk4: [0; 4],
            };
            if extended {
                for v in e.unk4.iter_mut() {
                    *v = bf.read_i32();
                }
            }
            e
        });
    }

    fn write_fields(&self, bf: &mut ByteFrame, ctx: &ClientContext) {
        bf.write_u32(self.ack_handle);
        bf.write_u32(self.log_id);
        let count = clamp_len(self.entries.len(), u16::MAX as usize, "terminal log");
        bf.write_u16(count as u16);
        bf.write_u16(self.unk0);
        for e in &self.entries[..count] {
            bf.write_u32(e.index);
            bf.write_u8(e.type1);
            bf.write_u8(e.type2);
            bf.write_i16(e.unk0);
            bf.write_i32(e.unk1);
            bf.write_i32(e.unk2);
            bf.write_i32(e.unk3);
            if ctx.at_least(ClientVersion::G1) {
                for v in e.unk4 {
                    bf.write_i32(v);
                }
            }
        }
    }
}

/// Quest scenario selector used instead of a file name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScenarioIdentifier {
    pub category_id: u8,
    pub main_id: u32,
    pub chapter_id: u8,
    pub flags: u8,
}

/// Request for a quest or scenario file
///
/// # Packet Format
/// ```text
/// [u32 ack_handle][bool is_scenario][u8 len][name\0 if len > 0]
/// [u8 category][u32 main][u8 chapter][u8 flags]   (scenario only)
/// ```
/// Scenario requests usually carry an absent name (`len` of 0).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsgSysGetFile {
    pub ack_handle: u32,
    pub filename: PrefixedStr,
    pub scenario: Option<ScenarioIdentifier>,
}

impl MsgSysGetFile {
    fn read_fields(&mut self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        self.ack_handle = bf.read_u32();
        let is_scenario = bf.read_bool();
        self.filename = read_str8(bf);
        self.scenario = is_scenario.then(|| ScenarioIdentifier {
            category_id: bf.read_u8(),
            main_id: bf.read_u32(),
            chapter_id: bf.read_u8(),
            flags: bf.read_u8(),
        });
    }

    fn write_fields(&self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        bf.write_u32(self.ack_handle);
        bf.write_bool(self.scenario.is_some());
        write_str8(bf, &self.filename);
        if let Some(s) = self.scenario {
            bf.write_u8(s.category_id);
            bf.write_u32(s.main_id);
            bf.write_u8(s.chapter_id);
            bf.write_u8(s.flags);
        }
    }
}

/// Client diagnostics blob; the size sits ahead of an unrelated field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsgSysRecordLog {
    pub ack_handle: u32,
    pub unk0: u32,
    pub unk1: u16,
    pub unk3: u32,
    pub data: Vec<u8>,
}

impl MsgSysRecordLog {
    fn read_fields(&mut self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        self.ack_handle = bf.read_u32();
        self.unk0 = bf.read_u32();
        self.unk1 = bf.read_u16();
        let size = bf.read_u16() as usize;
        self.unk3 = bf.read_u32();
        self.data = bf.read_bytes(size);
    }

    fn write_fields(&self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        bf.write_u32(self.ack_handle);
        bf.write_u32(self.unk0);
        bf.write_u16(self.unk1);
        let size = clamp_len(self.data.len(), u16::MAX as usize, "record log");
        bf.write_u16(size as u16);
        bf.write_u32(self.unk3);
        bf.write_bytes(&self.data[..size]);
    }
}

/// Subscription course granted to the account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CourseRight {
    pub id: u16,
    pub timestamp: u32,
}

/// Server push of account rights after login
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsgSysUpdateRight {
    pub client_resp_ack_handle: u32,
    pub bitfield: u32,
    pub unk0: u16,
    pub rights: Vec<CourseRight>,
    pub auth_token: PrefixedStr,
}

impl MsgSysUpdateRight {
    fn read_fields(&mut self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        self.client_resp_ack_handle = bf.read_u32();
        self.bitfield = bf.read_u32();
        let count = bf.read_u16() as usize;
        self.unk0 = bf.read_u16();
        self.rights = bf.read_vec(count, |bf| CourseRight {
            id: bf.read_u16(),
            timestamp: bf.read_u32(),
        });
        self.auth_token = read_str16(bf);
    }

    fn write_fields(&self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        bf.write_u32(self.client_resp_ack_handle);
        bf.write_u32(self.bitfield);
        let count = clamp_len(self.rights.len(), u16::MAX as usize, "course rights");
        bf.write_u16(count as u16);
        bf.write_u16(self.unk0);
        for r in &self.rights[..count] {
            bf.write_u16(r.id);
            bf.write_u32(r.timestamp);
        }
        write_str16(bf, &self.auth_token);
    }
}

impl_message! {
    MsgSysAck => SysAck,
    MsgSysTerminalLog => SysTerminalLog,
    MsgSysGetFile => SysGetFile,
    MsgSysRecordLog => SysRecordLog,
    MsgSysUpdateRight => SysUpdateRight,
}
