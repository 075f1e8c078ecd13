//! Seasonal and server-wide events
//!
//! Festa (guild faction war), the Tower, the Earth/seibatu hunts, hunting
//! level rankings and Diva Defense (`Ud*`).

use hunterd_core::{ClientContext, ClientVersion};

use crate::byteframe::ByteFrame;

/// Monster slots carried by beat-level messages
pub const BEAT_LEVEL_SLOTS: usize = 16;

wire_messages! {
    //=== Festa ===//

    MsgMhfInfoFesta => MhfInfoFesta {
        ack_handle: u32,
        unk0: u32,
    }

    MsgMhfEntryFesta => MhfEntryFesta {
        ack_handle: u32,
        festa_id: u32,
        guild_id: u32,
    }

    /// Donate souls to the guild's festa team
    MsgMhfChargeFesta => MhfChargeFesta {
        ack_handle: u32,
        festa_id: u32,
        guild_id: u32,
        souls: Vec<u16> as list16,
        auto: bool,
    }

    MsgMhfAcquireFesta => MhfAcquireFesta {
        ack_handle: u32,
        festa_id: u32,
        guild_id: u32,
        unk0: u16,
    }

    MsgMhfStateFestaU => MhfStateFestaU {
        ack_handle: u32,
        festa_id: u32,
        guild_id: u32,
        unk0: u16,
    }

    MsgMhfStateFestaG => MhfStateFestaG {
        ack_handle: u32,
        festa_id: u32,
        guild_id: u32,
        unk0: u16,
    }

    MsgMhfEnumerateFestaMember => MhfEnumerateFestaMember {
        ack_handle: u32,
        festa_id: u32,
        guild_id: u32,
        unk0: u16,
    }

    MsgMhfVoteFesta => MhfVoteFesta {
        ack_handle: u32,
        festa_id: u32,
        guild_id: u32,
        trial_id: u32,
    }

    MsgMhfEnumerateFestaIntermediatePrize => MhfEnumerateFestaIntermediatePrize {
        ack_handle: u32,
        festa_id: u32,
    }

    MsgMhfAcquireFestaIntermediatePrize => MhfAcquireFestaIntermediatePrize {
        ack_handle: u32,
        prize_id: u32,
    }

    MsgMhfEnumerateFestaPersonalPrize => MhfEnumerateFestaPersonalPrize {
        ack_handle: u32,
        festa_id: u32,
    }

    MsgMhfAcquireFestaPersonalPrize => MhfAcquireFestaPersonalPrize {
        ack_handle: u32,
        prize_id: u32,
    }

    //=== Tower ===//

    MsgMhfGetTowerInfo => MhfGetTowerInfo {
        ack_handle: u32,
        info_type: u32,
        unk0: u32,
        unk1: u32,
    }

    MsgMhfGetGemInfo => MhfGetGemInfo {
        ack_handle: u32,
        query_type: u32,
        unk0: u32,
        unk1: [i32; 6],
    }

    MsgMhfPostGemInfo => MhfPostGemInfo {
        ack_handle: u32,
        operation: u32,
        unk0: u32,
        gem: i32,
        quantity: i32,
        char_id: i32,
        unk1: i32,
    }

    //=== Earth and seibatu ===//

    MsgMhfGetEarthStatus => MhfGetEarthStatus {
        ack_handle: u32,
        unk0: u32,
        unk1: u32,
    }

    MsgMhfGetEarthValue => MhfGetEarthValue {
        ack_handle: u32,
        req_type: u32,
        unk: [u32; 6],
    }

    MsgMhfUpdateBeatLevel => MhfUpdateBeatLevel {
        ack_handle: u32,
        unk0: u32,
        unk1: u32,
        data1: [i32; 16],
        data2: [i32; 16],
    }

    MsgMhfReadBeatLevelAllRanking => MhfReadBeatLevelAllRanking {
        ack_handle: u32,
        unk0: u32,
        monster_id: i32,
        unk1: i32,
    }

    MsgMhfReadBeatLevelMyRanking => MhfReadBeatLevelMyRanking {
        ack_handle: u32,
        unk0: u32,
        unk1: u32,
        unk2: [i32; 16],
    }

    MsgMhfReadLastWeekBeatRanking => MhfReadLastWeekBeatRanking {
        ack_handle: u32,
        unk0: u32,
        earth_monster: i32,
    }

    MsgMhfGetAdditionalBeatReward => MhfGetAdditionalBeatReward {
        ack_handle: u32,
        unk0: u32,
        unk1: u32,
        unk2: u32,
        unk3: u32,
    }

    MsgMhfGetFixedSeibatuRankingTable => MhfGetFixedSeibatuRankingTable {
        ack_handle: u32,
        unk0: u32,
        unk1: i32,
    }

    MsgMhfGetBreakSeibatuLevelReward => MhfGetBreakSeibatuLevelReward {
        ack_handle: u32,
        unk0: u32,
        unk1: i32,
        unk2: i32,
        unk3: i32,
    }

    MsgMhfGetWeeklySeibatuRankingReward => MhfGetWeeklySeibatuRankingReward {
        ack_handle: u32,
        unk0: u32,
        operation: u32,
        id: u32,
        unk1: u32,
    }

    //=== Diva Defense ===//

    MsgMhfGetUdSchedule => MhfGetUdSchedule { ack_handle: u32 }
    MsgMhfGetUdInfo => MhfGetUdInfo { ack_handle: u32 }
    MsgMhfGetKijuInfo => MhfGetKijuInfo { ack_handle: u32 }

    MsgMhfSetKiju => MhfSetKiju {
        ack_handle: u32,
        unk1: u16,
    }

    MsgMhfAddUdPoint => MhfAddUdPoint {
        ack_handle: u32,
        unk1: u32,
        unk2: u32,
    }

    MsgMhfGetUdMyPoint => MhfGetUdMyPoint { ack_handle: u32 }
    MsgMhfGetUdTotalPointInfo => MhfGetUdTotalPointInfo { ack_handle: u32 }
    MsgMhfGetUdBonusQuestInfo => MhfGetUdBonusQuestInfo { ack_handle: u32 }
    MsgMhfGetUdSelectedColorInfo => MhfGetUdSelectedColorInfo { ack_handle: u32 }
    MsgMhfGetUdMonsterPoint => MhfGetUdMonsterPoint { ack_handle: u32 }
    MsgMhfGetUdDailyPresentList => MhfGetUdDailyPresentList { ack_handle: u32 }
    MsgMhfGetUdNormaPresentList => MhfGetUdNormaPresentList { ack_handle: u32 }
    MsgMhfGetUdRankingRewardList => MhfGetUdRankingRewardList { ack_handle: u32 }

    MsgMhfAcquireUdItem => MhfAcquireUdItem {
        ack_handle: u32,
        unk0: u8,
        reward_type: u8,
        item_ids: Vec<u32> as list8,
    }

    MsgMhfGetRewardSong => MhfGetRewardSong { ack_handle: u32 }

    MsgMhfGetUdRanking => MhfGetUdRanking {
        ack_handle: u32,
        ranking_type: u8,
    }

    MsgMhfGetUdMyRanking => MhfGetUdMyRanking { ack_handle: u32 }
    MsgMhfGetUdGuildMapInfo => MhfGetUdGuildMapInfo { ack_handle: u32 }
    MsgMhfGenerateUdGuildMap => MhfGenerateUdGuildMap { ack_handle: u32 }
    MsgMhfGetUdTacticsPoint => MhfGetUdTacticsPoint { ack_handle: u32 }

    MsgMhfAddUdTacticsPoint => MhfAddUdTacticsPoint {
        ack_handle: u32,
        unk0: u16,
        unk1: u32,
    }

    MsgMhfGetUdTacticsRanking => MhfGetUdTacticsRanking { ack_handle: u32 }
    MsgMhfGetUdTacticsRewardList => MhfGetUdTacticsRewardList { ack_handle: u32 }
    MsgMhfGetUdTacticsLog => MhfGetUdTacticsLog { ack_handle: u32 }
    MsgMhfGetUdTacticsFollower => MhfGetUdTacticsFollower { ack_handle: u32 }

    /// Pick the characters that follow the caller in tactics mode
    MsgMhfSetUdTacticsFollower => MhfSetUdTacticsFollower {
        follower_ids: Vec<u32> as list16,
        unk0: u8,
        unk1: u8,
    }

    MsgMhfGetUdShopCoin => MhfGetUdShopCoin { ack_handle: u32 }

    MsgMhfUseUdShopCoin => MhfUseUdShopCoin {
        ack_handle: u32,
        amount: u32,
    }

    MsgMhfGetUdTacticsBonusQuest => MhfGetUdTacticsBonusQuest { ack_handle: u32 }
    MsgMhfGetUdTacticsFirstQuestBonus => MhfGetUdTacticsFirstQuestBonus { ack_handle: u32 }
    MsgMhfGetUdTacticsRemainingPoint => MhfGetUdTacticsRemainingPoint { ack_handle: u32 }
}

/// Tower progress upload
///
/// # Packet Format
/// ```text
/// [u32 ack_handle][u32 info_type][u32 unk1][i32 skill][i32 tr][i32 trp]
/// [i32 cost][i32 unk6][i32 unk7][i32 block1][i64 unk9]
/// [i32 block2]          (Z1 and later)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MsgMhfPostTowerInfo {
    pub ack_handle: u32,
    pub info_type: u32,
    pub unk1: u32,
    pub skill: i32,
    pub tr: i32,
    pub trp: i32,
    pub cost: i32,
    pub unk6: i32,
    pub unk7: i32,
    pub block1: i32,
    pub unk9: i64,
    pub block2: i32,
}

impl MsgMhfPostTowerInfo {
    fn read_fields(&mut self, bf: &mut ByteFrame, ctx: &ClientContext) {
        self.ack_handle = bf.read_u32();
        self.info_type = bf.read_u32();
        self.unk1 = bf.read_u32();
        self.skill = bf.read_i32();
        self.tr = bf.read_i32();
        self.trp = bf.read_i32();
        self.cost = bf.read_i32();
        self.unk6 = bf.read_i32();
        self.unk7 = bf.read_i32();
        self.block1 = bf.read_i32();
        self.unk9 = bf.read_i64();
        if ctx.at_least(ClientVersion::Z1) {
            self.block2 = bf.read_i32();
        }
    }

    fn write_fields(&self, bf: &mut ByteFrame, ctx: &ClientContext) {
        bf.write_u32(self.ack_handle);
        bf.write_u32(self.info_type);
        bf.write_u32(self.unk1);
        bf.write_i32(self.skill);
        bf.write_i32(self.tr);
        bf.write_i32(self.trp);
        bf.write_i32(self.cost);
        bf.write_i32(self.unk6);
        bf.write_i32(self.unk7);
        bf.write_i32(self.block1);
        bf.write_i64(self.unk9);
        if ctx.at_least(ClientVersion::Z1) {
            bf.write_i32(self.block2);
        }
    }
}

/// Hunting level lookup for up to [`BEAT_LEVEL_SLOTS`] monsters
///
/// The id array always spans every slot on the wire; the count says how
/// many are meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsgMhfReadBeatLevel {
    pub ack_handle: u32,
    pub unk0: u32,
    pub monster_ids: Vec<u32>,
}

impl MsgMhfReadBeatLevel {
    fn read_fields(&mut self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        self.ack_handle = bf.read_u32();
        self.unk0 = bf.read_u32();
        let count = (bf.read_u32() as usize).min(BEAT_LEVEL_SLOTS);
        let mut ids = bf.read_vec(BEAT_LEVEL_SLOTS, |bf| bf.read_u32());
        ids.truncate(count);
        self.monster_ids = ids;
    }

    fn write_fields(&self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        let count = self.monster_ids.len().min(BEAT_LEVEL_SLOTS);
        bf.write_u32(self.ack_handle);
        bf.write_u32(self.unk0);
        bf.write_u32(count as u32);
        for i in 0..BEAT_LEVEL_SLOTS {
            bf.write_u32(self.monster_ids.get(i).copied().unwrap_or(0));
        }
    }
}

impl_message! {
    MsgMhfPostTowerInfo => MhfPostTowerInfo,
    MsgMhfReadBeatLevel => MhfReadBeatLevel,
}
