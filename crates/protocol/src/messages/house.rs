//! My House: interior, visiting, and the item warehouse

use hunterd_core::ClientContext;

use crate::byteframe::ByteFrame;
use crate::sjis::{field_len, sjis_field, sjis_field_bytes, write_field_bytes, PrefixedStr};
use crate::wire::clamp_len;

wire_messages! {
    MsgMhfUpdateInterior => MhfUpdateInterior {
        ack_handle: u32,
        interior_data: [u8; 20],
    }

    /// Search houses by owner, friends list or name
    MsgMhfEnumerateHouse => MhfEnumerateHouse {
        ack_handle: u32,
        char_id: u32,
        method: u8,
        unk0: u16,
        name: PrefixedStr as sjis8,
    }

    MsgMhfUpdateHouse => MhfUpdateHouse {
        ack_handle: u32,
        state: u8,
        unk1: u8,
        unk2: u16,
        password: PrefixedStr as str8,
    }

    MsgMhfLoadHouse => MhfLoadHouse {
        ack_handle: u32,
        char_id: u32,
        destination: u8,
        check_pass: bool,
        unk0: u16,
        password: PrefixedStr as str8,
    }

    MsgMhfGetMyhouseInfo => MhfGetMyhouseInfo {
        ack_handle: u32,
        unk0: u32,
    }

    MsgMhfEnumerateWarehouse => MhfEnumerateWarehouse {
        ack_handle: u32,
        box_type: u8,
        box_index: u8,
    }
}

/// Warehouse box operation (rename, list, ...)
///
/// # Packet Format
/// ```text
/// [u32 ack_handle][u8 op][u8 box_type][u8 box_index][u8 name_len][u16 unk0][name\0]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsgMhfOperateWarehouse {
    pub ack_handle: u32,
    pub operation: u8,
    pub box_type: u8,
    pub box_index: u8,
    pub unk0: u16,
    pub name: PrefixedStr,
}

impl MsgMhfOperateWarehouse {
    fn read_fields(&mut self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        self.ack_handle = bf.read_u32();
        self.operation = bf.read_u8();
        self.box_type = bf.read_u8();
        self.box_index = bf.read_u8();
        let name_len = bf.read_u8() as usize;
        self.unk0 = bf.read_u16();
        self.name = if name_len > 0 {
            let mut raw = bf.read_null_terminated_bytes();
            raw.push(0);
            sjis_field(&raw)
        } else {
            PrefixedStr::absent()
        };
    }

    fn write_fields(&self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        bf.write_u32(self.ack_handle);
        bf.write_u8(self.operation);
        bf.write_u8(self.box_type);
        bf.write_u8(self.box_index);
        let name = sjis_field_bytes(&self.name, u8::MAX as usize);
        bf.write_u8(field_len(name.as_deref()) as u8);
        bf.write_u16(self.unk0);
        write_field_bytes(bf, name.as_deref());
    }
}

/// Item stack as stored in a warehouse box
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarehouseStack {
    pub warehouse_id: u32,
    pub item_id: u16,
    pub quantity: u16,
    pub unk0: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsgMhfUpdateWarehouse {
    pub ack_handle: u32,
    pub box_type: u8,
    pub box_index: u8,
    pub unk0: u16,
    pub stacks: Vec<WarehouseStack>,
}

impl MsgMhfUpdateWarehouse {
    fn read_fields(&mut self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        self.ack_handle = bf.read_u32();
        self.box_type = bf.read_u8();
        self.box_index = bf.read_u8();
        let count = bf.read_u16() as usize;
        self.unk0 = bf.read_u16();
        self.stacks = bf.read_vec(count, |bf| WarehouseStack {
            warehouse_id: bf.read_u32(),
            item_id: bf.read_u16(),
            quantity: bf.read_u16(),
            unk0: bf.read_u16(),
        });
    }

    fn write_fields(&self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        bf.write_u32(self.ack_handle);
        bf.write_u8(self.box_type);
        bf.write_u8(self.box_index);
        let count = clamp_len(self.stacks.len(), u16::MAX as usize, "warehouse stacks");
        bf.write_u16(count as u16);
        bf.write_u16(self.unk0);
        for s in &self.stacks[..count] {
            bf.write_u32(s.warehouse_id);
            bf.write_u16(s.item_id);
            bf.write_u16(s.quantity);
            bf.write_u16(s.unk0);
        }
    }
}

impl_message! {
    MsgMhfOperateWarehouse => MhfOperateWarehouse,
    MsgMhfUpdateWarehouse => MhfUpdateWarehouse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::test_util::roundtrip;

    #[test]
    fn test_interior_is_twenty_bytes() {
        let msg = MsgMhfUpdateInterior {
            ack_handle: 1,
            interior_data: [3; 20],
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(bytes.len(), 24);
        assert_eq!(back, msg);
    }

    #[test]
    fn test_enumerate_house_by_name() {
        let msg = MsgMhfEnumerateHouse {
            ack_handle: 2,
            char_id: 0,
            method: 4,
            unk0: 0,
            name: "ネコ".into(),
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(bytes[11], 5);
        assert_eq!(back, msg);
    }

    #[test]
    fn test_rename_warehouse_box() {
        let msg = MsgMhfOperateWarehouse {
            ack_handle: 1,
            operation: 2,
            box_type: 0,
            box_index: 3,
            unk0: 0,
            name: "素材".into(),
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(bytes[7], 5);
        assert_eq!(back, msg);
    }

    #[test]
    fn test_warehouse_operation_without_name() {
        let msg = MsgMhfOperateWarehouse {
            ack_handle: 1,
            operation: 0,
            name: PrefixedStr::absent(),
            ..Default::default()
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(bytes.len(), 10);
        assert_eq!(back, msg);

        let msg = MsgMhfOperateWarehouse { name: PrefixedStr::default(), ..msg };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(&bytes[7..], &[1, 0, 0, 0]);
        assert_eq!(back, msg);
    }

    #[test]
    fn test_update_warehouse_roundtrip() {
        let msg = MsgMhfUpdateWarehouse {
            ack_handle: 5,
            box_type: 1,
            box_index: 0,
            unk0: 0,
            stacks: vec![
                WarehouseStack { warehouse_id: 0, item_id: 0x0203, quantity: 10, unk0: 0 },
                WarehouseStack { warehouse_id: 17, item_id: 0x0011, quantity: 0, unk0: 0 },
            ],
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(bytes.len(), 10 + 2 * 10);
        assert_eq!(back, msg);
    }

    #[test]
    fn test_update_warehouse_caps_stack_count() {
        let msg = MsgMhfUpdateWarehouse {
            ack_handle: 1,
            stacks: vec![WarehouseStack { item_id: 7, ..Default::default() }; 70_000],
            ..Default::default()
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(&bytes[6..8], &[0xFF, 0xFF]);
        assert_eq!(back.stacks.len(), 65_535);
    }
}
