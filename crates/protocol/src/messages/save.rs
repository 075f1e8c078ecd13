//! Character save data and the save/load pairs for its side tables
//!
//! The main save blob arrives nullcomp-compressed in [`MsgMhfSavedata`];
//! the smaller tables (partner, navi, plates, ...) are sent raw.

use hunterd_core::{ClientContext, ClientVersion};

use crate::byteframe::ByteFrame;
use crate::compression::nullcomp;
use crate::wire::clamp_len;

/// Size of the enhanced minidata block
pub const MINIDATA_SIZE: usize = 0x400;

wire_messages! {
    MsgMhfLoaddata => MhfLoaddata { ack_handle: u32 }

    MsgMhfLoadPartner => MhfLoadPartner { ack_handle: u32 }
    MsgMhfSavePartner => MhfSavePartner {
        ack_handle: u32,
        raw_data_payload: Vec<u8> as bytes16,
    }

    MsgMhfLoadHunterNavi => MhfLoadHunterNavi { ack_handle: u32 }

    MsgMhfLoadScenarioData => MhfLoadScenarioData { ack_handle: u32 }
    MsgMhfSaveScenarioData => MhfSaveScenarioData {
        ack_handle: u32,
        raw_data_payload: Vec<u8> as bytes32,
    }

    MsgMhfLoadOtomoAirou => MhfLoadOtomoAirou { ack_handle: u32 }
    MsgMhfSaveOtomoAirou => MhfSaveOtomoAirou {
        ack_handle: u32,
        raw_data_payload: Vec<u8> as bytes16,
    }

    MsgMhfLoadDecoMyset => MhfLoadDecoMyset { ack_handle: u32 }
    MsgMhfSaveDecoMyset => MhfSaveDecoMyset {
        ack_handle: u32,
        raw_data_payload: Vec<u8> as bytes32,
    }

    MsgMhfLoadFavoriteQuest => MhfLoadFavoriteQuest { ack_handle: u32 }
    MsgMhfSaveFavoriteQuest => MhfSaveFavoriteQuest {
        ack_handle: u32,
        data: Vec<u8> as bytes16,
    }

    MsgMhfLoadPlateData => MhfLoadPlateData { ack_handle: u32 }
    MsgMhfLoadPlateBox => MhfLoadPlateBox { ack_handle: u32 }
    MsgMhfLoadPlateMyset => MhfLoadPlateMyset { ack_handle: u32 }
    MsgMhfSavePlateMyset => MhfSavePlateMyset {
        ack_handle: u32,
        raw_data_payload: Vec<u8> as bytes32,
    }

    MsgMhfLoadRengokuData => MhfLoadRengokuData { ack_handle: u32 }
    MsgMhfSaveRengokuData => MhfSaveRengokuData {
        ack_handle: u32,
        raw_data_payload: Vec<u8> as bytes32,
    }

    MsgMhfLoadMezfesData => MhfLoadMezfesData { ack_handle: u32 }
    MsgMhfSaveMezfesData => MhfSaveMezfesData {
        ack_handle: u32,
        unk0: u32,
        unk1: u8,
        values: Vec<u32> as list8,
    }

    MsgMhfGetEnhancedMinidata => MhfGetEnhancedMinidata {
        ack_handle: u32,
        char_id: u32,
    }
}

/// Full character save
///
/// # Packet Format
/// ```text
/// [u32 ack_handle][u32 alloc_mem_size][u8 save_type][u32 unk1]
/// [u32 data_size]      (G1 and later)
/// [payload]
/// ```
/// Older clients send no size of their own, and newer ones may send a
/// `data_size` of 0; either way the payload spans `alloc_mem_size` bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsgMhfSavedata {
    pub ack_handle: u32,
    pub alloc_mem_size: u32,
    pub save_type: u8,
    pub unk1: u32,
    /// G1 and later: `data_size` was 0 and `alloc_mem_size` gave the length
    pub sized_by_alloc: bool,
    pub raw_data_payload: Vec<u8>,
}

impl MsgMhfSavedata {
    /// Save blob with any nullcomp wrapping removed
    pub fn decompressed_payload(&self) -> Vec<u8> {
        nullcomp::decompress(&self.raw_data_payload)
    }

    /// Replace the payload with `data`, compressed the way the client sends it
    pub fn set_compressed_payload(&mut self, data: &[u8]) {
        self.raw_data_payload = nullcomp::compress(data);
        self.alloc_mem_size = self.raw_data_payload.len() as u32;
    }

    fn read_fields(&mut self, bf: &mut ByteFrame, ctx: &ClientContext) {
        self.ack_handle = bf.read_u32();
        self.alloc_mem_size = bf.read_u32();
        self.save_type = bf.read_u8();
        self.unk1 = bf.read_u32();
        let data_size = if ctx.at_least(ClientVersion::G1) {
            bf.read_u32()
        } else {
            0
        };
        self.sized_by_alloc = ctx.at_least(ClientVersion::G1) && data_size == 0;
        let size = if data_size == 0 { self.alloc_mem_size } else { data_size };
        self.raw_data_payload = bf.read_bytes(size as usize);
    }

    fn write_fields(&self, bf: &mut ByteFrame, ctx: &ClientContext) {
        let size = clamp_len(self.raw_data_payload.len(), u32::MAX as usize, "save payload") as u32;
        let modern = ctx.at_least(ClientVersion::G1);
        bf.write_u32(self.ack_handle);
        if modern && !self.sized_by_alloc {
            bf.write_u32(self.alloc_mem_size);
        } else {
            bf.write_u32(size);
        }
        bf.write_u8(self.save_type);
        bf.write_u32(self.unk1);
        if modern {
            bf.write_u32(if self.sized_by_alloc { 0 } else { size });
        }
        bf.write_bytes(&self.raw_data_payload[..size as usize]);
    }
}

/// Saves that may be a full table or a diff against the stored one
///
/// ```text
/// [u32 ack_handle][u32 data_size][bool is_data_diff][payload]
/// ```
macro_rules! diff_saves {
    ($($(#[$meta:meta])* $name:ident => $opcode:ident,)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq, Eq)]
            pub struct $name {
                pub ack_handle: u32,
                pub is_data_diff: bool,
                pub raw_data_payload: Vec<u8>,
            }

            impl $name {
                fn read_fields(&mut self, bf: &mut ByteFrame, _ctx: &ClientContext) {
                    self.ack_handle = bf.read_u32();
                    let size = bf.read_u32() as usize;
                    self.is_data_diff = bf.read_bool();
                    self.raw_data_payload = bf.read_bytes(size);
                }

                fn write_fields(&self, bf: &mut ByteFrame, _ctx: &ClientContext) {
                    bf.write_u32(self.ack_handle);
                    let size = $crate::wire::clamp_len(
                        self.raw_data_payload.len(),
                        u32::MAX as usize,
                        "save payload",
                    );
                    bf.write_u32(size as u32);
                    bf.write_bool(self.is_data_diff);
                    bf.write_bytes(&self.raw_data_payload[..size]);
                }
            }

            impl_message! {
                $name => $opcode,
            }
        )*
    };
}

diff_saves! {
    MsgMhfSaveHunterNavi => MhfSaveHunterNavi,
    MsgMhfSavePlateData => MhfSavePlateData,
    MsgMhfSavePlateBox => MhfSavePlateBox,
}

/// Fixed-size minidata upload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsgMhfSetEnhancedMinidata {
    pub ack_handle: u32,
    pub unk0: u16,
    /// Padded or cut to [`MINIDATA_SIZE`] on the wire
    pub raw_data_payload: Vec<u8>,
}

impl MsgMhfSetEnhancedMinidata {
    fn read_fields(&mut self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        self.ack_handle = bf.read_u32();
        self.unk0 = bf.read_u16();
        self.raw_data_payload = bf.read_bytes(MINIDATA_SIZE);
    }

    fn write_fields(&self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        bf.write_u32(self.ack_handle);
        bf.write_u16(self.unk0);
        let mut block = self.raw_data_payload.clone();
        block.resize(MINIDATA_SIZE, 0);
        bf.write_bytes(&block);
    }
}

impl_message! {
    MsgMhfSavedata => MhfSavedata,
    MsgMhfSetEnhancedMinidata => MhfSetEnhancedMinidata,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::test_util::roundtrip;

    fn sample_save() -> MsgMhfSavedata {
        let mut msg = MsgMhfSavedata {
            ack_handle: 0x44,
            save_type: 0,
            unk1: 0,
            ..Default::default()
        };
        let mut blob = vec![0u8; 0x200];
        blob[0x10..0x14].copy_from_slice(b"Hunt");
        msg.set_compressed_payload(&blob);
        msg
    }

    #[test]
    fn test_savedata_with_size_field() {
        let msg = sample_save();
        let (bytes, back) = roundtrip(&msg, &ClientContext::new(ClientVersion::ZZ));
        assert_eq!(bytes.len(), 17 + msg.raw_data_payload.len());
        assert_eq!(&bytes[13..17], &(msg.raw_data_payload.len() as u32).to_be_bytes());
        assert_eq!(back, msg);
    }

    #[test]
    fn test_savedata_without_size_field() {
        let msg = sample_save();
        let (bytes, back) = roundtrip(&msg, &ClientContext::new(ClientVersion::S6));
        assert_eq!(bytes.len(), 13 + msg.raw_data_payload.len());
        assert_eq!(back, msg);
    }

    #[test]
    fn test_zero_data_size_falls_back_to_alloc_size() {
        let zz = ClientContext::new(ClientVersion::ZZ);
        let wire = [
            &[0, 0, 0, 1][..],
            &[0, 0, 0, 3],
            &[2],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
            &[7, 8, 9],
        ]
        .concat();

        let mut rd = ByteFrame::from_bytes(&wire);
        let mut msg = MsgMhfSavedata::default();
        crate::message::Message::decode(&mut msg, &mut rd, &zz).unwrap();
        assert_eq!(rd.remaining(), 0);
        assert!(msg.sized_by_alloc);
        assert_eq!(msg.alloc_mem_size, 3);
        assert_eq!(msg.raw_data_payload, vec![7, 8, 9]);

        let mut bf = ByteFrame::new();
        crate::message::Message::encode(&msg, &mut bf, &zz).unwrap();
        assert_eq!(bf.data(), &wire[..]);
    }

    #[test]
    fn test_savedata_decompression() {
        let msg = sample_save();
        let blob = msg.decompressed_payload();
        assert_eq!(blob.len(), 0x200);
        assert_eq!(&blob[0x10..0x14], b"Hunt");
    }

    #[test]
    fn test_uncompressed_save_passes_through() {
        let msg = MsgMhfSavedata {
            raw_data_payload: vec![1, 2, 3],
            ..Default::default()
        };
        assert_eq!(msg.decompressed_payload(), vec![1, 2, 3]);
    }

    #[test]
    fn test_diff_save_layout() {
        let msg = MsgMhfSaveHunterNavi {
            ack_handle: 1,
            is_data_diff: true,
            raw_data_payload: vec![0xAA, 0xBB],
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(bytes, vec![0, 0, 0, 1, 0, 0, 0, 2, 1, 0xAA, 0xBB]);
        assert_eq!(back, msg);
    }

    #[test]
    fn test_minidata_is_fixed_size() {
        let msg = MsgMhfSetEnhancedMinidata {
            ack_handle: 1,
            unk0: 0,
            raw_data_payload: vec![0x55; MINIDATA_SIZE],
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(bytes.len(), 6 + MINIDATA_SIZE);
        assert_eq!(back, msg);
    }

    #[test]
    fn test_partner_roundtrip() {
        let msg = MsgMhfSavePartner {
            ack_handle: 8,
            raw_data_payload: b"legs".to_vec(),
        };
        let (_, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(back, msg);
    }
}
