//! Point currencies, gacha, stamp cards, achievements and other rewards

use hunterd_core::{ClientContext, ClientVersion};

use crate::byteframe::ByteFrame;
use crate::wire::clamp_len;

wire_struct! {
    /// One row of the achievement history upload
    CaAchievementHistEntry {
        unk0: u32,
        unk1: u32,
    }
}

wire_messages! {
    //=== Cafe ===//

    MsgMhfAcquireCafeItem => MhfAcquireCafeItem {
        ack_handle: u32,
        item_type: u16,
        item_id: u16,
        quant: u16,
        point_cost: u32,
        unk0: u16,
    }

    MsgMhfUpdateCafepoint => MhfUpdateCafepoint { ack_handle: u32 }

    MsgMhfCheckDailyCafepoint => MhfCheckDailyCafepoint {
        ack_handle: u32,
        unk0: u32,
    }

    MsgMhfGetCafeDuration => MhfGetCafeDuration { ack_handle: u32 }
    MsgMhfGetCafeDurationBonusInfo => MhfGetCafeDurationBonusInfo { ack_handle: u32 }
    MsgMhfReceiveCafeDurationBonus => MhfReceiveCafeDurationBonus { ack_handle: u32 }

    MsgMhfPostCafeDurationBonusReceived => MhfPostCafeDurationBonusReceived {
        ack_handle: u32,
        cafe_bonus_ids: Vec<u32> as list32,
    }

    //=== Weekly and monthly stamps ===//

    MsgMhfCheckWeeklyStamp => MhfCheckWeeklyStamp {
        ack_handle: u32,
        stamp_type: u8,
        unk0: bool,
        unk1: u16,
    }

    MsgMhfExchangeWeeklyStamp => MhfExchangeWeeklyStamp {
        ack_handle: u32,
        stamp_type: u8,
        unk0: u8,
        unk1: u16,
    }

    MsgMhfCheckMonthlyItem => MhfCheckMonthlyItem {
        ack_handle: u32,
        item_type: u8,
        unk0: u8,
        unk1: u16,
    }

    MsgMhfAcquireMonthlyItem => MhfAcquireMonthlyItem {
        ack_handle: u32,
        unk0: u8,
        unk1: u8,
        unk2: u16,
        unk3: u32,
    }

    MsgMhfAcquireMonthlyReward => MhfAcquireMonthlyReward {
        ack_handle: u32,
        unk0: u32,
    }

    //=== Gacha ===//

    MsgMhfGetGachaPoint => MhfGetGachaPoint { ack_handle: u32 }

    MsgMhfUseGachaPoint => MhfUseGachaPoint {
        ack_handle: u32,
        unk0: u16,
        trial_coins: u32,
        premium_coins: u32,
    }

    MsgMhfPlayNormalGacha => MhfPlayNormalGacha {
        ack_handle: u32,
        gacha_id: u32,
        roll_type: u8,
        gacha_type: u8,
    }

    MsgMhfPlayStepupGacha => MhfPlayStepupGacha {
        ack_handle: u32,
        gacha_id: u32,
        roll_type: u8,
        gacha_type: u8,
    }

    MsgMhfPlayBoxGacha => MhfPlayBoxGacha {
        ack_handle: u32,
        gacha_id: u32,
        roll_type: u8,
        gacha_type: u8,
    }

    MsgMhfPlayFreeGacha => MhfPlayFreeGacha {
        ack_handle: u32,
        gacha_id: u32,
    }

    MsgMhfReceiveGachaItem => MhfReceiveGachaItem {
        ack_handle: u32,
        max: u8,
        freeze: bool,
    }

    MsgMhfGetStepupStatus => MhfGetStepupStatus {
        ack_handle: u32,
        gacha_id: u32,
        unk0: u8,
    }

    MsgMhfGetBoxGachaInfo => MhfGetBoxGachaInfo {
        ack_handle: u32,
        gacha_id: u32,
    }

    MsgMhfResetBoxGachaInfo => MhfResetBoxGachaInfo {
        ack_handle: u32,
        gacha_id: u32,
    }

    MsgMhfGetGachaPlayHistory => MhfGetGachaPlayHistory {
        ack_handle: u32,
        gacha_id: u32,
    }

    //=== Frontier points and etc points ===//

    MsgMhfGetFpointExchangeList => MhfGetFpointExchangeList { ack_handle: u32 }

    MsgMhfExchangeFpoint2Item => MhfExchangeFpoint2Item {
        ack_handle: u32,
        trade_id: u32,
        item_type: u16,
        item_id: u16,
        quantity: u8,
    }

    MsgMhfExchangeItem2Fpoint => MhfExchangeItem2Fpoint {
        ack_handle: u32,
        trade_id: u32,
        item_type: u16,
        item_id: u16,
        quantity: u8,
    }

    MsgMhfGetEtcPoints => MhfGetEtcPoints { ack_handle: u32 }

    MsgMhfUpdateEtcPoint => MhfUpdateEtcPoint {
        ack_handle: u32,
        point_type: u8,
        delta: i16,
    }

    MsgMhfAddKouryouPoint => MhfAddKouryouPoint {
        ack_handle: u32,
        kouryou_points: u32,
    }

    MsgMhfGetKouryouPoint => MhfGetKouryouPoint { ack_handle: u32 }

    MsgMhfExchangeKouryouPoint => MhfExchangeKouryouPoint {
        ack_handle: u32,
        kouryou_points: u32,
    }

    //=== Achievements and titles ===//

    MsgMhfGetAchievement => MhfGetAchievement {
        ack_handle: u32,
        char_id: u32,
        unk0: u32,
    }

    /// Fire-and-forget; no ack
    MsgMhfAddAchievement => MhfAddAchievement {
        achievement_id: u8,
        unk0: u16,
        unk1: u16,
    }

    MsgMhfDisplayedAchievement => MhfDisplayedAchievement { unk0: u8 }

    MsgMhfGetCaAchievementHist => MhfGetCaAchievementHist {
        ack_handle: u32,
        unk0: u32,
        unk1: u32,
    }

    MsgMhfSetCaAchievementHist => MhfSetCaAchievementHist {
        ack_handle: u32,
        entries: Vec<CaAchievementHistEntry> as list16,
    }

    MsgMhfAcquireTitle => MhfAcquireTitle {
        ack_handle: u32,
        unk0: u16,
        title_ids: Vec<u16> as list16,
    }

    MsgMhfEnumerateTitle => MhfEnumerateTitle {
        ack_handle: u32,
        char_id: u32,
    }

    //=== Boosts ===//

    MsgMhfGetBoostTime => MhfGetBoostTime { ack_handle: u32 }
    MsgMhfPostBoostTime => MhfPostBoostTime {
        ack_handle: u32,
        boost_time: u32,
    }
    MsgMhfGetBoostTimeLimit => MhfGetBoostTimeLimit { ack_handle: u32 }
    MsgMhfPostBoostTimeLimit => MhfPostBoostTimeLimit {
        ack_handle: u32,
        boost_time_limit: u32,
    }
    MsgMhfGetBoostRight => MhfGetBoostRight { ack_handle: u32 }
    MsgMhfStartBoostTime => MhfStartBoostTime { ack_handle: u32 }
    MsgMhfPostBoostTimeQuestReturn => MhfPostBoostTimeQuestReturn { ack_handle: u32 }
    MsgMhfGetKeepLoginBoostStatus => MhfGetKeepLoginBoostStatus { ack_handle: u32 }

    MsgMhfUseKeepLoginBoost => MhfUseKeepLoginBoost {
        ack_handle: u32,
        boost_week_used: u8,
    }

    //=== Mercenaries ===//

    MsgMhfCreateMercenary => MhfCreateMercenary { ack_handle: u32 }

    MsgMhfReadMercenaryW => MhfReadMercenaryW {
        ack_handle: u32,
        op: u8,
        unk0: u8,
        unk1: u16,
    }

    MsgMhfReadMercenaryM => MhfReadMercenaryM {
        ack_handle: u32,
        char_id: u32,
        merc_id: u32,
        op: u32,
    }

    MsgMhfContractMercenary => MhfContractMercenary {
        ack_handle: u32,
        pact_merc_id: u32,
        companion_id: u32,
        op: u8,
    }

    MsgMhfEnumerateMercenaryLog => MhfEnumerateMercenaryLog { ack_handle: u32 }

    MsgMhfEnumerateGuacot => MhfEnumerateGuacot {
        ack_handle: u32,
        unk0: u16,
        unk1: u16,
    }

    //=== Misc ===//

    MsgMhfSexChanger => MhfSexChanger {
        ack_handle: u32,
        gender: u8,
        unk0: u8,
        unk1: u8,
        unk2: u8,
    }

    MsgMhfGetEquipSkinHist => MhfGetEquipSkinHist { ack_handle: u32 }

    MsgMhfUpdateEquipSkinHist => MhfUpdateEquipSkinHist {
        ack_handle: u32,
        armour_id: u16,
        mog_type: u8,
    }

    MsgMhfGetDailyMissionMaster => MhfGetDailyMissionMaster { ack_handle: u32 }
    MsgMhfGetDailyMissionPersonal => MhfGetDailyMissionPersonal { ack_handle: u32 }
}

/// Stamp a login card and claim any rewards it unlocks
///
/// # Packet Format
/// ```text
/// [u32 ack_handle][u16 hr][u16 gr (G1 and later)][u16 stamps][u16 unk0]
/// [u32 reward1][u32 reward2][u16 item1][u16 item2][u16 quantity1][u16 quantity2]
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MsgMhfStampcardStamp {
    pub ack_handle: u32,
    pub hr: u16,
    pub gr: u16,
    pub stamps: u16,
    pub unk0: u16,
    pub reward1: u32,
    pub reward2: u32,
    pub item1: u16,
    pub item2: u16,
    pub quantity1: u16,
    pub quantity2: u16,
}

impl MsgMhfStampcardStamp {
    fn read_fields(&mut self, bf: &mut ByteFrame, ctx: &ClientContext) {
        self.ack_handle = bf.read_u32();
        self.hr = bf.read_u16();
        if ctx.at_least(ClientVersion::G1) {
            self.gr = bf.read_u16();
        }
        self.stamps = bf.read_u16();
        self.unk0 = bf.read_u16();
        self.reward1 = bf.read_u32();
        self.reward2 = bf.read_u32();
        self.item1 = bf.read_u16();
        self.item2 = bf.read_u16();
        self.quantity1 = bf.read_u16();
        self.quantity2 = bf.read_u16();
    }

    fn write_fields(&self, bf: &mut ByteFrame, ctx: &ClientContext) {
        bf.write_u32(self.ack_handle);
        bf.write_u16(self.hr);
        if ctx.at_least(ClientVersion::G1) {
            bf.write_u16(self.gr);
        }
        bf.write_u16(self.stamps);
        bf.write_u16(self.unk0);
        bf.write_u32(self.reward1);
        bf.write_u32(self.reward2);
        bf.write_u16(self.item1);
        bf.write_u16(self.item2);
        bf.write_u16(self.quantity1);
        bf.write_u16(self.quantity2);
    }
}

/// Upload the player's mercenary (Rasta) data
///
/// # Packet Format
/// ```text
/// [u32 ack_handle][u32 gcp][u32 pact_merc_id][u32 data_size][u32 merc_id][data]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsgMhfSaveMercenary {
    pub ack_handle: u32,
    pub gcp: u32,
    pub pact_merc_id: u32,
    pub merc_id: u32,
    pub merc_data: Vec<u8>,
}

impl MsgMhfSaveMercenary {
    fn read_fields(&mut self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        self.ack_handle = bf.read_u32();
        self.gcp = bf.read_u32();
        self.pact_merc_id = bf.read_u32();
        let size = bf.read_u32() as usize;
        self.merc_id = bf.read_u32();
        self.merc_data = bf.read_bytes(size);
    }

    fn write_fields(&self, bf: &mut ByteFrame, _ctx: &ClientContext) {
        bf.write_u32(self.ack_handle);
        bf.write_u32(self.gcp);
        bf.write_u32(self.pact_merc_id);
        let size = clamp_len(self.merc_data.len(), u32::MAX as usize, "mercenary data");
        bf.write_u32(size as u32);
        bf.write_u32(self.merc_id);
        bf.write_bytes(&self.merc_data[..size]);
    }
}

impl_message! {
    MsgMhfStampcardStamp => MhfStampcardStamp,
    MsgMhfSaveMercenary => MhfSaveMercenary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::test_util::roundtrip;

    #[test]
    fn test_stampcard_gr_field() {
        let msg = MsgMhfStampcardStamp {
            ack_handle: 1,
            hr: 999,
            gr: 50,
            stamps: 3,
            ..Default::default()
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::new(ClientVersion::FW5));
        assert_eq!(bytes.len(), 26);
        assert_eq!(back.gr, 0);
        assert_eq!(back.stamps, 3);

        let (bytes, back) = roundtrip(&msg, &ClientContext::new(ClientVersion::G1));
        assert_eq!(bytes.len(), 28);
        assert_eq!(back, msg);
    }

    #[test]
    fn test_save_mercenary_size_before_id() {
        let msg = MsgMhfSaveMercenary {
            ack_handle: 1,
            gcp: 2,
            pact_merc_id: 3,
            merc_id: 4,
            merc_data: vec![0xAB; 5],
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(&bytes[12..20], &[0, 0, 0, 5, 0, 0, 0, 4]);
        assert_eq!(back, msg);
    }

    #[test]
    fn test_cafe_bonus_ids() {
        let msg = MsgMhfPostCafeDurationBonusReceived {
            ack_handle: 7,
            cafe_bonus_ids: vec![1, 2, 3],
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(&bytes[4..8], &[0, 0, 0, 3]);
        assert_eq!(bytes.len(), 8 + 12);
        assert_eq!(back, msg);
    }

    #[test]
    fn test_achievement_history_records() {
        let msg = MsgMhfSetCaAchievementHist {
            ack_handle: 1,
            entries: vec![CaAchievementHistEntry { unk0: 1, unk1: 2 }],
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(bytes.len(), 4 + 2 + 8);
        assert_eq!(back, msg);
    }

    #[test]
    fn test_negative_etc_point_delta() {
        let msg = MsgMhfUpdateEtcPoint {
            ack_handle: 1,
            point_type: 2,
            delta: -5,
        };
        let (bytes, back) = roundtrip(&msg, &ClientContext::default());
        assert_eq!(&bytes[5..], &[0xFF, 0xFB]);
        assert_eq!(back, msg);
    }
}
