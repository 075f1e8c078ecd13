//! In-game mail, hunter search, and the member lists (friends, blacklist)
//! used to address them

use hunterd_core::ClientContext;

use crate::byteframe::ByteFrame;
use crate::sjis::{fit_sjis, read_sjis_nt};

/// [`MsgMhfOprtMail`] operation that claims an attached item
pub const OPRT_MAIL_ACQUIRE_ITEM: u8 = 5;

wire_messages! {
    MsgMhfReadMail => MhfReadMail {
        ack_handle: u32,
        acc_index: u8,
        index: u8,
        unk0: u16,
    }

    MsgMhfListMail => MhfListMail {
        ack_handle: u32,
        unk0: u8,
        unk1: u8,
        unk2: u16,
    }

    MsgMhfListMember => MhfListMember { ack_handle: u32 }

    /// Add or remove friends or blacklist entries
    MsgMhfOprMember => MhfOprMember {
        ack_handle: u32,
        blacklist: bool,
        operation: bool,
        unk0: u8,
        char_ids: Vec<u32> as list8,
    }

    /// Hunter search; the query layout depends on `search_type`
    MsgMhfTransitMessage => MhfTransitMessage {
        ack_handle: u32,
        unk0: u8,
        search_type: u16,
        message_data: Vec<u8> as bytes16,
    }
}

/// Send a mail, optionally with an item attached
///
/// # Packet Format
/// ```text
/// [u32 ack_handle][u32 recipient_id][u16 subject_len][u16 body_len]
/// [u16 quantity][u16 item_id][subject\0][body\0]
/// ```
/// Lengths count the Shift_JIS bytes plus the terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsgMhfSendMail {
    pub ack_handle: u32,
    pub recipient_id: u32,
    pub quantity: u16,
    pub item_id: u16,
    pub subject: String,
    pub body: String,
}

impl MsgMhfSendMail {
    fn read_fields(&mut self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        self.ack_handle = bf.read_u32();
        self.recipient_id = bf.read_u32();
        let _subject_len = bf.read_u16();
        let _body_len = bf.read_u16();
        self.quantity = bf.read_u16();
        self.item_id = bf.read_u16();
        self.subject = read_sjis_nt(bf);
        self.body = read_sjis_nt(bf);
    }

    fn write_fields(&self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        bf.write_u32(self.ack_handle);
        bf.write_u32(self.recipient_id);
        let subject = fit_sjis(&self.subject, u16::MAX as usize);
        let body = fit_sjis(&self.body, u16::MAX as usize);
        bf.write_u16((subject.len() + 1) as u16);
        bf.write_u16((body.len() + 1) as u16);
        bf.write_u16(self.quantity);
        bf.write_u16(self.item_id);
        bf.write_null_terminated_bytes(&subject);
        bf.write_null_terminated_bytes(&body);
    }
}

/// Attachment claimed by [`OPRT_MAIL_ACQUIRE_ITEM`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MailItem {
    pub amount: u16,
    pub item_id: u16,
}

/// Delete, lock or claim the attachment of a mail
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MsgMhfOprtMail {
    pub ack_handle: u32,
    pub acc_index: u8,
    pub index: u8,
    pub operation: u8,
    pub unk0: u8,
    /// Present only for [`OPRT_MAIL_ACQUIRE_ITEM`]
    pub item: Option<MailItem>,
}

impl MsgMhfOprtMail {
    fn read_fields(&mut self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        self.ack_handle = bf.read_u32();
        self.acc_index = bf.read_u8();
        self.index = bf.read_u8();
        self.operation = bf.read_u8();
        self.unk0 = bf.read_u8();
        self.item = (self.operation == OPRT_MAIL_ACQUIRE_ITEM).then(|| MailItem {
            amount: bf.read_u16(),
            item_id: bf.read_u16(),
        });
    }

    fn write_fields(&self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        bf.write_u32(self.ack_handle);
        bf.write_u8(self.acc_index);
        bf.write_u8(self.index);
        bf.write_u8(self.operation);
        bf.write_u8(self.unk0);
        if self.operation == OPRT_MAIL_ACQUIRE_ITEM {
            let item = self.item.unwrap_or_default();
            bf.write_u16(item.amount);
            bf.write_u16(item.item_id);
        }
    }
}

impl_message! {
    MsgMhfSendMail => MhfSendMail,
    MsgMhfOprtMail => MhfOprtMail,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::test_util::roundtrip;

    #[test]
    fn test_send_mail_layout() {
        let msg = MsgMhfSendMail {
            ack_handle: 1,
            recipient_id: 0x0000_1234,
            quantity: 0,
            item_id: 0,
            subject: "件名".into(),
            body: "本文です".into(),
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(&bytes[8..12], &[0, 5, 0, 9]);
        assert_eq!(bytes.len(), 16 + 5 + 9);
        assert_eq!(back, msg);
    }

    #[test]
    fn test_mail_with_unmappable_subject() {
        let msg = MsgMhfSendMail {
            subject: "🦖".into(),
            body: "x".into(),
            ..Default::default()
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(&bytes[8..10], &[0, 1]);
        assert_eq!(back.subject, "");
        assert_eq!(back.body, "x");
    }

    #[test]
    fn test_mail_body_too_long_for_its_length() {
        let msg = MsgMhfSendMail {
            subject: "件名".into(),
            body: "x".repeat(70_000),
            ..Default::default()
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(&bytes[8..12], &[0, 5, 0, 1]);
        assert_eq!(bytes.len(), 16 + 5 + 1);
        assert_eq!(back.subject, "件名");
        assert_eq!(back.body, "");
    }

    #[test]
    fn test_oprt_mail_item_only_when_claiming() {
        let delete = MsgMhfOprtMail { ack_handle: 1, operation: 1, ..Default::default() };
        let (bytes, back) = roundtrip(&delete, &ClientContext::default());
        assert_eq!(bytes.len(), 8);
        assert_eq!(back, delete);

        let claim = MsgMhfOprtMail {
            ack_handle: 1,
            operation: OPRT_MAIL_ACQUIRE_ITEM,
            item: Some(MailItem { amount: 3, item_id: 0x0110 }),
            ..Default::default()
        };
        let (bytes, back) = roundtrip(&claim, &ClientContext::default());
        assert_eq!(bytes.len(), 12);
        assert_eq!(back, claim);
    }

    #[test]
    fn test_transit_message_query_is_opaque() {
        let msg = MsgMhfTransitMessage {
            ack_handle: 2,
            unk0: 1,
            search_type: 3,
            message_data: vec![0x00, 0x10, 0xFF],
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(&bytes[5..9], &[0x00, 0x03, 0x00, 0x03]);
        assert_eq!(back, msg);
    }

    #[test]
    fn test_opr_member_roundtrip() {
        let msg = MsgMhfOprMember {
            ack_handle: 4,
            blacklist: true,
            operation: false,
            unk0: 0,
            char_ids: vec![1, 2],
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(bytes.len(), 8 + 8);
        assert_eq!(back, msg);
    }
}
