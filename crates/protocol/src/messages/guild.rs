//! Guilds, alliances and everything hung off them
//!
//! Covers membership and scouting, the guild item box, icons, the message
//! board, missions, treasure hunts, cooking and adventures.

use hunterd_core::ClientContext;

use crate::byteframe::ByteFrame;
use crate::sjis::{fit_sjis, from_sjis, PrefixedStr};
use crate::wire::clamp_len;

wire_struct! {
    /// One layer of a guild emblem
    GuildIconPart {
        index: u16,
        id: u16,
        page: u8,
        size: u8,
        rotation: u8,
        red: u8,
        green: u8,
        blue: u8,
        pos_x: u16,
        pos_y: u16,
    }

    GuildItemStack {
        unk0: u32,
        item_id: u16,
        quantity: u16,
        unk1: u32,
    }

    UnionItem {
        item_id: u16,
        unk0: u16,
        amount: u16,
        unk1: u32,
    }
}

wire_messages! {
    MsgMhfCreateGuild => MhfCreateGuild {
        ack_handle: u32,
        unk0: u16,
        name: PrefixedStr as sjis16,
    }

    MsgMhfEnumerateGuild => MhfEnumerateGuild {
        ack_handle: u32,
        search_type: u8,
        page: u8,
        sorting: bool,
        unk0: u8,
        data1: u32,
        data2: Vec<u8> as bytes16,
    }

    MsgMhfOperateGuildMember => MhfOperateGuildMember {
        ack_handle: u32,
        guild_id: u32,
        char_id: u32,
        action: u8,
        unk0: u8,
        unk1: u16,
    }

    MsgMhfInfoGuild => MhfInfoGuild {
        ack_handle: u32,
        guild_id: u32,
    }

    MsgMhfEnumerateGuildMember => MhfEnumerateGuildMember {
        ack_handle: u32,
        unk0: u8,
        unk1: u8,
        guild_id: u32,
    }

    /// Reorder the member list
    MsgMhfArrangeGuildMember => MhfArrangeGuildMember {
        ack_handle: u32,
        guild_id: u32,
        unk0: u8,
        char_ids: Vec<u32> as list8,
    }

    MsgMhfEnumerateGuildItem => MhfEnumerateGuildItem {
        ack_handle: u32,
        guild_id: u32,
    }

    MsgMhfUpdateGuildItem => MhfUpdateGuildItem {
        ack_handle: u32,
        guild_id: u32,
        stacks: Vec<GuildItemStack> as list16,
    }

    MsgMhfEnumerateUnionItem => MhfEnumerateUnionItem { ack_handle: u32 }

    MsgMhfUpdateUnionItem => MhfUpdateUnionItem {
        ack_handle: u32,
        unk0: u16,
        items: Vec<UnionItem> as list16,
    }

    MsgMhfCreateJoint => MhfCreateJoint {
        ack_handle: u32,
        guild_id: u32,
        unk0: u32,
        name: PrefixedStr as sjis16,
    }

    MsgMhfOperateJoint => MhfOperateJoint {
        ack_handle: u32,
        alliance_id: u32,
        guild_id: u32,
        action: u8,
        unk0: u8,
        unk1: u16,
        target_guild_id: u32,
    }

    MsgMhfInfoJoint => MhfInfoJoint {
        ack_handle: u32,
        alliance_id: u32,
        unk0: u32,
    }

    MsgMhfUpdateGuildIcon => MhfUpdateGuildIcon {
        ack_handle: u32,
        guild_id: u32,
        icon_parts: Vec<GuildIconPart> as list16,
    }

    MsgMhfPostGuildScout => MhfPostGuildScout {
        ack_handle: u32,
        unk0: u32,
        char_id: u32,
    }

    MsgMhfCancelGuildScout => MhfCancelGuildScout {
        ack_handle: u32,
        invitation_id: u32,
    }

    MsgMhfAnswerGuildScout => MhfAnswerGuildScout {
        ack_handle: u32,
        leader_id: u32,
        answer: bool,
    }

    MsgMhfGetGuildScoutList => MhfGetGuildScoutList { ack_handle: u32 }
    MsgMhfGetGuildManageRight => MhfGetGuildManageRight { ack_handle: u32 }

    MsgMhfSetGuildManageRight => MhfSetGuildManageRight {
        ack_handle: u32,
        char_id: u32,
        allowed: bool,
        unk0: u8,
        unk1: u16,
    }

    MsgMhfGetRejectGuildScout => MhfGetRejectGuildScout { ack_handle: u32 }

    MsgMhfSetRejectGuildScout => MhfSetRejectGuildScout {
        ack_handle: u32,
        reject: bool,
    }

    MsgMhfEnumerateGuildMessageBoard => MhfEnumerateGuildMessageBoard {
        ack_handle: u32,
        unk0: u32,
        max_posts: u32,
        board_type: u32,
    }

    MsgMhfGetGuildMissionList => MhfGetGuildMissionList { ack_handle: u32 }
    MsgMhfGetGuildMissionRecord => MhfGetGuildMissionRecord { ack_handle: u32 }

    MsgMhfAddGuildMissionCount => MhfAddGuildMissionCount {
        ack_handle: u32,
        mission_id: u32,
        count: u32,
    }

    MsgMhfSetGuildMissionTarget => MhfSetGuildMissionTarget {
        ack_handle: u32,
        mission_id: u32,
    }

    MsgMhfCancelGuildMissionTarget => MhfCancelGuildMissionTarget {
        ack_handle: u32,
        mission_id: u32,
    }

    MsgMhfEnumerateGuildTresure => MhfEnumerateGuildTresure {
        ack_handle: u32,
        max_hunts: u16,
        unk0: u32,
    }

    MsgMhfRegistGuildTresure => MhfRegistGuildTresure {
        ack_handle: u32,
        data: Vec<u8> as bytes16,
    }

    MsgMhfAcquireGuildTresure => MhfAcquireGuildTresure {
        ack_handle: u32,
        hunt_id: u32,
        unk0: bool,
    }

    MsgMhfOperateGuildTresureReport => MhfOperateGuildTresureReport {
        ack_handle: u32,
        hunt_id: u32,
        state: u16,
    }

    MsgMhfGetGuildTresureSouvenir => MhfGetGuildTresureSouvenir {
        ack_handle: u32,
        unk0: u32,
    }

    MsgMhfAcquireGuildTresureSouvenir => MhfAcquireGuildTresureSouvenir {
        ack_handle: u32,
        unk0: u32,
    }

    MsgMhfEnumerateAiroulist => MhfEnumerateAiroulist {
        ack_handle: u32,
        unk0: u16,
        unk1: u16,
    }

    MsgMhfLoadGuildCooking => MhfLoadGuildCooking {
        ack_handle: u32,
        max_meals: u8,
    }

    MsgMhfRegistGuildCooking => MhfRegistGuildCooking {
        ack_handle: u32,
        overwrite_id: u32,
        meal_id: u16,
        success: u8,
    }

    MsgMhfLoadGuildAdventure => MhfLoadGuildAdventure { ack_handle: u32 }

    MsgMhfRegistGuildAdventure => MhfRegistGuildAdventure {
        ack_handle: u32,
        destination: u32,
    }

    MsgMhfAcquireGuildAdventure => MhfAcquireGuildAdventure {
        ack_handle: u32,
        id: u32,
    }

    MsgMhfChargeGuildAdventure => MhfChargeGuildAdventure {
        ack_handle: u32,
        id: u32,
        amount: u32,
    }

    MsgMhfLoadLegendDispatch => MhfLoadLegendDispatch { ack_handle: u32 }
    MsgMhfGetGuildWeeklyBonusMaster => MhfGetGuildWeeklyBonusMaster { ack_handle: u32 }
    MsgMhfGetGuildWeeklyBonusActiveCount => MhfGetGuildWeeklyBonusActiveCount { ack_handle: u32 }

    MsgMhfAddGuildWeeklyBonusExceptionalUser => MhfAddGuildWeeklyBonusExceptionalUser {
        ack_handle: u32,
        num_users: u8,
    }

    MsgMhfGetGuildTargetMemberNum => MhfGetGuildTargetMemberNum {
        ack_handle: u32,
        guild_id: u32,
    }

    MsgMhfUpdateForceGuildRank => MhfUpdateForceGuildRank {
        ack_handle: u32,
        guild_id: u32,
        unk0: u32,
    }

    MsgMhfReadGuildcard => MhfReadGuildcard { ack_handle: u32 }

    MsgMhfUpdateGuildcard => MhfUpdateGuildcard {
        ack_handle: u32,
        unk0: u32,
        unk1: u32,
        unk2: u32,
    }
}

/// Guild-level operation with a small argument block
///
/// # Packet Format
/// ```text
/// [u32 ack_handle][u32 guild_id][u8 action][u8 data2_len][u32 data1][data2]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsgMhfOperateGuild {
    pub ack_handle: u32,
    pub guild_id: u32,
    pub action: u8,
    pub data1: u32,
    pub data2: Vec<u8>,
}

impl MsgMhfOperateGuild {
    fn read_fields(&mut self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        self.ack_handle = bf.read_u32();
        self.guild_id = bf.read_u32();
        self.action = bf.read_u8();
        let len = bf.read_u8() as usize;
        self.data1 = bf.read_u32();
        self.data2 = bf.read_bytes(len);
    }

    fn write_fields(&self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        bf.write_u32(self.ack_handle);
        bf.write_u32(self.guild_id);
        bf.write_u8(self.action);
        let len = clamp_len(self.data2.len(), u8::MAX as usize, "guild operation data");
        bf.write_u8(len as u8);
        bf.write_u32(self.data1);
        bf.write_bytes(&self.data2[..len]);
    }
}

/// Guild hunt ledger request; the guild id is absent for operation 1
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MsgMhfGuildHuntdata {
    pub ack_handle: u32,
    pub operation: u8,
    pub unk0: u8,
    pub guild_id: Option<u32>,
}

impl MsgMhfGuildHuntdata {
    fn read_fields(&mut self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        self.ack_handle = bf.read_u32();
        self.operation = bf.read_u8();
        self.unk0 = bf.read_u8();
        self.guild_id = (self.operation != 1).then(|| bf.read_u32());
    }

    fn write_fields(&self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        bf.write_u32(self.ack_handle);
        bf.write_u8(self.operation);
        bf.write_u8(self.unk0);
        if self.operation != 1 {
            bf.write_u32(self.guild_id.unwrap_or_default());
        }
    }
}

/// Message board action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BoardOperation {
    Create { post_type: u32, stamp_id: u32, title: String, body: String },
    Delete { post_id: u32 },
    Update { post_id: u32, title: String, body: String },
    UpdateStamp { post_id: u32, stamp_id: u32 },
    Like { post_id: u32, like: bool },
    #[default]
    Check,
    /// Operation code with no known arguments
    Other(UnknownBoardCode),
}

/// Board operation code outside the known set, written with no arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownBoardCode(u32);

impl UnknownBoardCode {
    /// `None` for codes that have a [`BoardOperation`] variant of their own
    pub fn new(code: u32) -> Option<Self> {
        (code > BOARD_CHECK).then_some(Self(code))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

const BOARD_CHECK: u32 = 5;

impl BoardOperation {
    pub fn code(&self) -> u32 {
        match self {
            BoardOperation::Create { .. } => 0,
            BoardOperation::Delete { .. } => 1,
            BoardOperation::Update { .. } => 2,
            BoardOperation::UpdateStamp { .. } => 3,
            BoardOperation::Like { .. } => 4,
            BoardOperation::Check => BOARD_CHECK,
            BoardOperation::Other(code) => code.get(),
        }
    }
}

/// Post, edit or react on the guild message board
///
/// Titles and bodies are Shift_JIS with `u32` byte lengths and no terminator;
/// both lengths precede both texts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsgMhfUpdateGuildMessageBoard {
    pub ack_handle: u32,
    pub operation: BoardOperation,
}

fn read_board_texts(bf: &mut ByteFrame) -> (String, String) {
    let title_len = bf.read_u32() as usize;
    let body_len = bf.read_u32() as usize;
    let title = from_sjis(&bf.read_bytes(title_len));
    let body = from_sjis(&bf.read_bytes(body_len));
    (title, body)
}

fn write_board_texts(bf: &mut ByteFrame, title: &str, body: &str) {
    let title = fit_sjis(title, u32::MAX as usize);
    let body = fit_sjis(body, u32::MAX as usize);
    bf.write_u32(title.len() as u32);
    bf.write_u32(body.len() as u32);
    bf.write_bytes(&title);
    bf.write_bytes(&body);
}

impl MsgMhfUpdateGuildMessageBoard {
    fn read_fields(&mut self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        self.ack_handle = bf.read_u32();
        self.operation = match bf.read_u32() {
            0 => {
                let post_type = bf.read_u32();
                let stamp_id = bf.read_u32();
                let (title, body) = read_board_texts(bf);
                BoardOperation::Create { post_type, stamp_id, title, body }
            }
            1 => BoardOperation::Delete { post_id: bf.read_u32() },
            2 => {
                let post_id = bf.read_u32();
                let (title, body) = read_board_texts(bf);
                BoardOperation::Update { post_id, title, body }
            }
            3 => BoardOperation::UpdateStamp {
                post_id: bf.read_u32(),
                stamp_id: bf.read_u32(),
            },
            4 => BoardOperation::Like {
                post_id: bf.read_u32(),
                like: bf.read_bool(),
            },
            BOARD_CHECK => BoardOperation::Check,
            code => BoardOperation::Other(UnknownBoardCode(code)),
        };
    }

    fn write_fields(&self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        bf.write_u32(self.ack_handle);
        bf.write_u32(self.operation.code());
        match &self.operation {
            BoardOperation::Create { post_type, stamp_id, title, body } => {
                bf.write_u32(*post_type);
                bf.write_u32(*stamp_id);
                write_board_texts(bf, title, body);
            }
            BoardOperation::Delete { post_id } => bf.write_u32(*post_id),
            BoardOperation::Update { post_id, title, body } => {
                bf.write_u32(*post_id);
                write_board_texts(bf, title, body);
            }
            BoardOperation::UpdateStamp { post_id, stamp_id } => {
                bf.write_u32(*post_id);
                bf.write_u32(*stamp_id);
            }
            BoardOperation::Like { post_id, like } => {
                bf.write_u32(*post_id);
                bf.write_bool(*like);
            }
            BoardOperation::Check | BoardOperation::Other(_) => {}
        }
    }
}

impl_message! {
    MsgMhfOperateGuild => MhfOperateGuild,
    MsgMhfGuildHuntdata => MhfGuildHuntdata,
    MsgMhfUpdateGuildMessageBoard => MhfUpdateGuildMessageBoard,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::test_util::roundtrip;

    #[test]
    fn test_create_guild_sjis_name() {
        let msg = MsgMhfCreateGuild {
            ack_handle: 1,
            unk0: 0,
            name: "狩猟団".into(),
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(&bytes[6..8], &[0, 7]);
        assert_eq!(back, msg);
    }

    #[test]
    fn test_operate_guild_layout() {
        let msg = MsgMhfOperateGuild {
            ack_handle: 1,
            guild_id: 2,
            action: 0x0A,
            data1: 3,
            data2: vec![0xDE, 0xAD],
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(&bytes[8..10], &[0x0A, 2]);
        assert_eq!(&bytes[14..], &[0xDE, 0xAD]);
        assert_eq!(back, msg);
    }

    #[test]
    fn test_guild_icon_roundtrip() {
        let msg = MsgMhfUpdateGuildIcon {
            ack_handle: 1,
            guild_id: 7,
            icon_parts: vec![
                GuildIconPart { index: 0, id: 12, page: 1, size: 30, rotation: 0, red: 255, green: 0, blue: 0, pos_x: 100, pos_y: 120 },
                GuildIconPart { index: 1, id: 3, ..Default::default() },
            ],
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(bytes.len(), 10 + 2 * 14);
        assert_eq!(back, msg);
    }

    #[test]
    fn test_huntdata_guild_id_is_conditional() {
        let without = MsgMhfGuildHuntdata { ack_handle: 1, operation: 1, unk0: 0, guild_id: None };
        let (bytes, back) = roundtrip(&without, &ClientContext::default());
        assert_eq!(bytes.len(), 6);
        assert_eq!(back, without);

        let with = MsgMhfGuildHuntdata { ack_handle: 1, operation: 0, unk0: 0, guild_id: Some(99) };
        let (bytes, back) = roundtrip(&with, &ClientContext::default());
        assert_eq!(bytes.len(), 10);
        assert_eq!(back, with);
    }

    #[test]
    fn test_board_post() {
        let msg = MsgMhfUpdateGuildMessageBoard {
            ack_handle: 3,
            operation: BoardOperation::Create {
                post_type: 0,
                stamp_id: 2,
                title: "募集".into(),
                body: "古龍いきます".into(),
            },
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(&bytes[16..24], &[0, 0, 0, 4, 0, 0, 0, 12]);
        assert_eq!(back, msg);
    }

    #[test]
    fn test_board_like_and_other() {
        for op in [
            BoardOperation::Like { post_id: 5, like: true },
            BoardOperation::Delete { post_id: 5 },
            BoardOperation::Check,
            BoardOperation::Other(UnknownBoardCode::new(9).unwrap()),
        ] {
            let msg = MsgMhfUpdateGuildMessageBoard { ack_handle: 1, operation: op };
            let (_, back) = roundtrip(&msg, &ClientContext::default());
            assert_eq!(back, msg);
        }
    }

    #[test]
    fn test_known_board_codes_are_not_other() {
        for code in 0..=BOARD_CHECK {
            assert!(UnknownBoardCode::new(code).is_none());
        }
        assert_eq!(UnknownBoardCode::new(6).map(UnknownBoardCode::get), Some(6));
    }

    #[test]
    fn test_board_text_without_mapping_is_empty() {
        let msg = MsgMhfUpdateGuildMessageBoard {
            ack_handle: 3,
            operation: BoardOperation::Update {
                post_id: 1,
                title: "🦖".into(),
                body: "本文".into(),
            },
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(&bytes[12..20], &[0, 0, 0, 0, 0, 0, 0, 4]);
        match back.operation {
            BoardOperation::Update { title, body, .. } => {
                assert_eq!(title, "");
                assert_eq!(body, "本文");
            }
            other => panic!("unexpected operation: {other:?}"),
        }
    }

    #[test]
    fn test_operate_guild_oversized_data() {
        let msg = MsgMhfOperateGuild {
            ack_handle: 1,
            guild_id: 2,
            action: 3,
            data1: 4,
            data2: vec![0x11; 300],
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(bytes[9], 0xFF);
        assert_eq!(bytes.len(), 14 + 255);
        assert_eq!(back.data2, vec![0x11; 255]);
    }

    #[test]
    fn test_arrange_members() {
        let msg = MsgMhfArrangeGuildMember {
            ack_handle: 1,
            guild_id: 2,
            unk0: 0,
            char_ids: vec![10, 11, 12],
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(bytes[9], 3);
        assert_eq!(back, msg);
    }
}
