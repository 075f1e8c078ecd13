//! Quest lists, distributions, shops, rankings and event registration

use hunterd_core::{ClientContext, ClientVersion};

use crate::byteframe::ByteFrame;

wire_messages! {
    MsgMhfAcquireDistItem => MhfAcquireDistItem {
        ack_handle: u32,
        distribution_type: u8,
        distribution_id: u32,
    }

    MsgMhfGetDistDescription => MhfGetDistDescription {
        ack_handle: u32,
        unk0: u8,
        distribution_id: u32,
    }

    MsgMhfGetWeeklySchedule => MhfGetWeeklySchedule { ack_handle: u32 }

    /// Join a raid event (Raviente) in a given land
    MsgMhfRegisterEvent => MhfRegisterEvent {
        ack_handle: u32,
        unk0: u16,
        world_id: u16,
        land_id: u16,
        check_only: bool,
    }

    MsgMhfReleaseEvent => MhfReleaseEvent {
        ack_handle: u32,
        raviente_id: u32,
        unk0: u32,
    }

    MsgMhfEnumeratePrice => MhfEnumeratePrice {
        ack_handle: u32,
        unk0: u16,
        unk1: u16,
    }

    MsgMhfEnumerateRanking => MhfEnumerateRanking { ack_handle: u32 }

    MsgMhfEnumerateOrder => MhfEnumerateOrder {
        ack_handle: u32,
        event_id: u32,
        cup_id: u32,
    }

    MsgMhfAcquireExchangeShop => MhfAcquireExchangeShop {
        ack_handle: u32,
        raw_data_payload: Vec<u8> as bytes16,
    }

    MsgMhfInfoScenarioCounter => MhfInfoScenarioCounter { ack_handle: u32 }

    MsgMhfGetTrendWeapon => MhfGetTrendWeapon {
        ack_handle: u32,
        weapon_type: u8,
    }

    MsgMhfUpdateUseTrendWeaponLog => MhfUpdateUseTrendWeaponLog {
        ack_handle: u32,
        weapon_type: u8,
        weapon_id: u16,
    }

    MsgMhfGetRengokuBinary => MhfGetRengokuBinary { ack_handle: u32 }

    MsgMhfEnumerateRengokuRanking => MhfEnumerateRengokuRanking {
        ack_handle: u32,
        leaderboard: u32,
    }

    MsgMhfGetRengokuRankingRank => MhfGetRengokuRankingRank {
        ack_handle: u32,
        unk0: u32,
    }

    MsgMhfInfoTournament => MhfInfoTournament {
        ack_handle: u32,
        query_type: u8,
        tournament_id: u32,
    }

    MsgMhfEntryTournament => MhfEntryTournament {
        ack_handle: u32,
        tournament_id: u32,
        entry_id: u32,
    }

    MsgMhfAcquireTournament => MhfAcquireTournament {
        ack_handle: u32,
        tournament_id: u32,
    }

    MsgMhfGetSeibattle => MhfGetSeibattle {
        ack_handle: u32,
        unk0: u8,
        seibattle_type: u8,
        guild_id: u32,
        unk1: u8,
        unk2: u16,
    }

    MsgMhfGetRyoudama => MhfGetRyoudama {
        ack_handle: u32,
        request_type: u8,
        unk0: u8,
        guild_id: u32,
        unk1: u8,
    }

    MsgMhfGetTenrouirai => MhfGetTenrouirai {
        ack_handle: u32,
        unk0: u8,
        data_type: u8,
        guild_id: u32,
        mission_index: u8,
        unk1: u8,
    }

    /// Tower progress report for the guild
    MsgMhfPostTenrouirai => MhfPostTenrouirai {
        ack_handle: u32,
        unk0: u8,
        operation: u8,
        guild_id: u32,
        unk1: u8,
        floors: u16,
        antiques: u16,
        chests: u16,
        cats: u16,
        tokens: u16,
        deliveries: u16,
        unk2: u16,
    }

    MsgMhfSetRestrictionEvent => MhfSetRestrictionEvent {
        ack_handle: u32,
        unk0: u32,
        unk1: u32,
        unk2: u32,
        unk3: u8,
    }

    MsgMhfUnreserveSrg => MhfUnreserveSrg { ack_handle: u32 }
    MsgMhfGetBbsSnsStatus => MhfGetBbsSnsStatus { ack_handle: u32 }
    MsgMhfGetBbsUserStatus => MhfGetBbsUserStatus { ack_handle: u32 }

    MsgMhfGetPaperData => MhfGetPaperData {
        ack_handle: u32,
        unk0: u32,
        unk1: u32,
        data_type: u32,
    }

    MsgMhfGetNotice => MhfGetNotice {
        ack_handle: u32,
        unk0: u32,
        unk1: u32,
        unk2: i32,
    }

    MsgMhfPostNotice => MhfPostNotice {
        ack_handle: u32,
        unk0: u32,
        unk1: u32,
        unk2: i32,
        unk3: i32,
    }

    MsgMhfGetRandFromTable => MhfGetRandFromTable {
        ack_handle: u32,
        unk0: u32,
        results: u16,
    }

    MsgMhfGetTinyBin => MhfGetTinyBin {
        ack_handle: u32,
        unk0: u8,
        unk1: u8,
        unk2: u8,
    }

    MsgMhfPostTinyBin => MhfPostTinyBin {
        ack_handle: u32,
        unk0: u8,
        unk1: u8,
        unk2: u8,
        unk3: u8,
        data: Vec<u8> as bytes16,
    }

    MsgMhfGetSenyuDailyCount => MhfGetSenyuDailyCount { ack_handle: u32 }

    MsgMhfGetLobbyCrowd => MhfGetLobbyCrowd {
        ack_handle: u32,
        server: u32,
        room: u32,
    }
}

/// Page through the quest list
///
/// # Packet Format
/// ```text
/// [u32 ack_handle][u8 unk0][u8 world][u16 counter][offset][u8 unk1]
/// ```
/// `offset` is a `u8` before Z2 and a `u16` from Z2 on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MsgMhfEnumerateQuest {
    pub ack_handle: u32,
    pub unk0: u8,
    pub world: u8,
    pub counter: u16,
    pub offset: u16,
    pub unk1: u8,
}

impl MsgMhfEnumerateQuest {
    fn read_fields(&mut self, bf: &mut ByteFrame, ctx: &ClientContext) {
        self.ack_handle = bf.read_u32();
        self.unk0 = bf.read_u8();
        self.world = bf.read_u8();
        self.counter = bf.read_u16();
        self.offset = if ctx.at_least(ClientVersion::Z2) {
            bf.read_u16()
        } else {
            bf.read_u8() as u16
        };
        self.unk1 = bf.read_u8();
    }

    fn write_fields(&self, bf: &mut ByteFrame, ctx: &ClientContext) {
        bf.write_u32(self.ack_handle);
        bf.write_u8(self.unk0);
        bf.write_u8(self.world);
        bf.write_u16(self.counter);
        if ctx.at_least(ClientVersion::Z2) {
            bf.write_u16(self.offset);
        } else {
            bf.write_u8(self.offset as u8);
        }
        bf.write_u8(self.unk1);
    }
}

/// List pending distributions (login gifts, event rewards)
///
/// # Packet Format
/// ```text
/// [u32 ack_handle][u8 dist_type][u8 unk0]
/// [u16 unk1]            (G1 and later)
/// [u8 len][unk2]        (Z1 and later)
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsgMhfEnumerateDistItem {
    pub ack_handle: u32,
    pub dist_type: u8,
    pub unk0: u8,
    pub unk1: u16,
    pub unk2: Vec<u8>,
}

impl MsgMhfEnumerateDistItem {
    fn read_fields(&mut self, bf: &mut ByteFrame, ctx: &ClientContext) {
        self.ack_handle = bf.read_u32();
        self.dist_type = bf.read_u8();
        self.unk0 = bf.read_u8();
        if ctx.at_least(ClientVersion::G1) {
            self.unk1 = bf.read_u16();
        }
        if ctx.at_least(ClientVersion::Z1) {
            let len = bf.read_u8() as usize;
            self.unk2 = bf.read_bytes(len);
        }
    }

    fn write_fields(&self, bf: &mut ByteFrame, ctx: &ClientContext) {
        bf.write_u32(self.ack_handle);
        bf.write_u8(self.dist_type);
        bf.write_u8(self.unk0);
        if ctx.at_least(ClientVersion::G1) {
            bf.write_u16(self.unk1);
        }
        if ctx.at_least(ClientVersion::Z1) {
            crate::wire::bytes8::write(bf, &self.unk2);
        }
    }
}

/// Claim a distribution
///
/// Two trailing `u32` fields were added in G8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MsgMhfApplyDistItem {
    pub ack_handle: u32,
    pub distribution_type: u8,
    pub distribution_id: u32,
    pub unk2: u32,
    pub unk3: u32,
}

impl MsgMhfApplyDistItem {
    fn read_fields(&mut self, bf: &mut ByteFrame, ctx: &ClientContext) {
        self.ack_handle = bf.read_u32();
        self.distribution_type = bf.read_u8();
        self.distribution_id = bf.read_u32();
        if ctx.at_least(ClientVersion::G8) {
            self.unk2 = bf.read_u32();
            self.unk3 = bf.read_u32();
        }
    }

    fn write_fields(&self, bf: &mut ByteFrame, ctx: &ClientContext) {
        bf.write_u32(self.ack_handle);
        bf.write_u8(self.distribution_type);
        bf.write_u32(self.distribution_id);
        if ctx.at_least(ClientVersion::G8) {
            bf.write_u32(self.unk2);
            bf.write_u32(self.unk3);
        }
    }
}

/// Open a shop page
///
/// The trailing `u16` was added in G2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MsgMhfEnumerateShop {
    pub ack_handle: u32,
    pub shop_type: u8,
    pub shop_id: u32,
    pub limit: u16,
    pub unk0: u8,
    pub unk1: u8,
    pub unk2: u16,
}

impl MsgMhfEnumerateShop {
    fn read_fields(&mut self, bf: &mut ByteFrame, ctx: &ClientContext) {
        self.ack_handle = bf.read_u32();
        self.shop_type = bf.read_u8();
        self.shop_id = bf.read_u32();
        self.limit = bf.read_u16();
        self.unk0 = bf.read_u8();
        self.unk1 = bf.read_u8();
        if ctx.at_least(ClientVersion::G2) {
            self.unk2 = bf.read_u16();
        }
    }

    fn write_fields(&self, bf: &mut ByteFrame, ctx: &ClientContext) {
        bf.write_u32(self.ack_handle);
        bf.write_u8(self.shop_type);
        bf.write_u32(self.shop_id);
        bf.write_u16(self.limit);
        bf.write_u8(self.unk0);
        bf.write_u8(self.unk1);
        if ctx.at_least(ClientVersion::G2) {
            bf.write_u16(self.unk2);
        }
    }
}

impl_message! {
    MsgMhfEnumerateQuest => MhfEnumerateQuest,
    MsgMhfEnumerateDistItem => MhfEnumerateDistItem,
    MsgMhfApplyDistItem => MhfApplyDistItem,
    MsgMhfEnumerateShop => MhfEnumerateShop,
}
