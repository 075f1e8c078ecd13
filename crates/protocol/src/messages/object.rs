//! Stage objects and per-user binaries
//!
//! Objects are the player avatars and props placed in a stage; positions
//! are big-endian `f32` triples. User binaries carry character appearance
//! and status that other clients fetch on demand.

empty_messages! {
    MsgSysCleanupObject => SysCleanupObject,
}

wire_messages! {
    MsgSysCreateObject => SysCreateObject {
        ack_handle: u32,
        x: f32,
        y: f32,
        z: f32,
        unk0: u32,
    }

    MsgSysDeleteObject => SysDeleteObject {
        obj_id: u32,
    }

    MsgSysPositionObject => SysPositionObject {
        obj_id: u32,
        x: f32,
        y: f32,
        z: f32,
    }

    MsgSysDuplicateObject => SysDuplicateObject {
        obj_id: u32,
        x: f32,
        y: f32,
        z: f32,
        unk0: u32,
        owner_char_id: u32,
    }

    MsgSysSetObjectBinary => SysSetObjectBinary {
        obj_id: u32,
        raw_data_payload: Vec<u8> as bytes16,
    }

    MsgSysGetObjectOwner => SysGetObjectOwner {
        ack_handle: u32,
        object_id: u32,
    }

    MsgSysUpdateObjectBinary => SysUpdateObjectBinary {
        object_handle_id: u32,
        unk0: u32,
    }

    MsgSysInsertUser => SysInsertUser {
        char_id: u32,
    }

    MsgSysDeleteUser => SysDeleteUser {
        char_id: u32,
    }

    /// Upload one of the caller's binaries
    MsgSysSetUserBinary => SysSetUserBinary {
        binary_type: u8,
        raw_data_payload: Vec<u8> as bytes16,
    }

    MsgSysGetUserBinary => SysGetUserBinary {
        ack_handle: u32,
        char_id: u32,
        binary_type: u8,
    }

    MsgSysNotifyUserBinary => SysNotifyUserBinary {
        char_id: u32,
        binary_type: u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::test_util::roundtrip;
    use hunterd_core::ClientContext;

    #[test]
    fn test_position_is_big_endian_f32() {
        let msg = MsgSysPositionObject {
            obj_id: 1,
            x: 1.0,
            y: -2.5,
            z: 0.0,
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(&bytes[4..8], &[0x3F, 0x80, 0x00, 0x00]);
        assert_eq!(&bytes[8..12], &[0xC0, 0x20, 0x00, 0x00]);
        assert_eq!(back, msg);
    }

    #[test]
    fn test_create_object_roundtrip() {
        let msg = MsgSysCreateObject {
            ack_handle: 3,
            x: 120.5,
            y: 0.25,
            z: -987.0,
            unk0: 0,
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(bytes.len(), 20);
        assert_eq!(back, msg);
    }

    #[test]
    fn test_user_binary_roundtrip() {
        let msg = MsgSysSetUserBinary {
            binary_type: 3,
            raw_data_payload: vec![0x10; 40],
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(&bytes[..3], &[3, 0, 40]);
        assert_eq!(back, msg);
    }
}
