//! # Opcode Registry
//!
//! Maps every opcode slot to an empty message ready for decoding, and wraps
//! the `[u16 BE opcode][payload]` framing the transport hands over.
//!
//! # Packet Format
//!
//! ```text
//! [u16 BE opcode][payload][u16 BE opcode][payload]...
//! ```
//!
//! A single frame normally holds one message. Some clients pack several
//! back to back; [`decode_group`] walks them until the frame runs dry or a
//! message cannot be decoded.

use bytes::Bytes;
use hunterd_core::{ClientContext, HunterError, ProtocolConfig, Result};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::byteframe::{ByteFrame, Endian};
use crate::message::{Message, Placeholder};
use crate::messages::*;
use crate::opcode::Opcode;

/// Create the empty message for `opcode`
///
/// Slots without a known layout, reserved ones included, get a
/// [`Placeholder`] that reports the requested opcode.
pub fn new_message(opcode: Opcode) -> Box<dyn Message> {
    match opcode {
        //=== Session ===//
        Opcode::SysEnd => Box::new(MsgSysEnd::default()),
        Opcode::SysNop => Box::new(MsgSysNop::default()),
        Opcode::SysExtendThreshold => Box::new(MsgSysExtendThreshold::default()),
        Opcode::SysLogin => Box::new(MsgSysLogin::default()),
        Opcode::SysLogout => Box::new(MsgSysLogout::default()),
        Opcode::SysPing => Box::new(MsgSysPing::default()),
        Opcode::SysCastBinary => Box::new(MsgSysCastBinary::default()),
        Opcode::SysCastedBinary => Box::new(MsgSysCastedBinary::default()),
        Opcode::SysHideClient => Box::new(MsgSysHideClient::default()),
        Opcode::SysTime => Box::new(MsgSysTime::default()),
        Opcode::SysIssueLogkey => Box::new(MsgSysIssueLogkey::default()),
        Opcode::SysRightsReload => Box::new(MsgSysRightsReload::default()),
        Opcode::SysAck => Box::new(MsgSysAck::default()),
        Opcode::SysTerminalLog => Box::new(MsgSysTerminalLog::default()),
        Opcode::SysGetFile => Box::new(MsgSysGetFile::default()),
        Opcode::SysRecordLog => Box::new(MsgSysRecordLog::default()),
        Opcode::SysUpdateRight => Box::new(MsgSysUpdateRight::default()),

        //=== Stages ===//
        Opcode::SysLeaveStage => Box::new(MsgSysLeaveStage::default()),
        Opcode::SysUnreserveStage => Box::new(MsgSysUnreserveStage::default()),
        Opcode::SysCreateStage => Box::new(MsgSysCreateStage::default()),
        Opcode::SysEnterStage => Box::new(MsgSysEnterStage::default()),
        Opcode::SysBackStage => Box::new(MsgSysBackStage::default()),
        Opcode::SysMoveStage => Box::new(MsgSysMoveStage::default()),
        Opcode::SysLockStage => Box::new(MsgSysLockStage::default()),
        Opcode::SysUnlockStage => Box::new(MsgSysUnlockStage::default()),
        Opcode::SysReserveStage => Box::new(MsgSysReserveStage::default()),
        Opcode::SysSetStagePass => Box::new(MsgSysSetStagePass::default()),
        Opcode::SysWaitStageBinary => Box::new(MsgSysWaitStageBinary::default()),
        Opcode::SysGetStageBinary => Box::new(MsgSysGetStageBinary::default()),
        Opcode::SysEnumerateClient => Box::new(MsgSysEnumerateClient::default()),
        Opcode::SysEnumerateStage => Box::new(MsgSysEnumerateStage::default()),
        Opcode::SysSetStageBinary => Box::new(MsgSysSetStageBinary::default()),

        //=== Semaphores and registers ===//
        Opcode::SysCreateSemaphore => Box::new(MsgSysCreateSemaphore::default()),
        Opcode::SysCreateAcquireSemaphore => Box::new(MsgSysCreateAcquireSemaphore::default()),
        Opcode::SysDeleteSemaphore => Box::new(MsgSysDeleteSemaphore::default()),
        Opcode::SysAcquireSemaphore => Box::new(MsgSysAcquireSemaphore::default()),
        Opcode::SysCheckSemaphore => Box::new(MsgSysCheckSemaphore::default()),
        Opcode::SysUnlockGlobalSema => Box::new(MsgSysUnlockGlobalSema::default()),
        Opcode::SysOperateRegister => Box::new(MsgSysOperateRegister::default()),
        Opcode::SysLoadRegister => Box::new(MsgSysLoadRegister::default()),
        Opcode::SysNotifyRegister => Box::new(MsgSysNotifyRegister::default()),
        Opcode::SysLockGlobalSema => Box::new(MsgSysLockGlobalSema::default()),

        //=== Objects and users ===//
        Opcode::SysCleanupObject => Box::new(MsgSysCleanupObject::default()),
        Opcode::SysCreateObject => Box::new(MsgSysCreateObject::default()),
        Opcode::SysDeleteObject => Box::new(MsgSysDeleteObject::default()),
        Opcode::SysPositionObject => Box::new(MsgSysPositionObject::default()),
        Opcode::SysDuplicateObject => Box::new(MsgSysDuplicateObject::default()),
        Opcode::SysSetObjectBinary => Box::new(MsgSysSetObjectBinary::default()),
        Opcode::SysGetObjectOwner => Box::new(MsgSysGetObjectOwner::default()),
        Opcode::SysUpdateObjectBinary => Box::new(MsgSysUpdateObjectBinary::default()),
        Opcode::SysInsertUser => Box::new(MsgSysInsertUser::default()),
        Opcode::SysDeleteUser => Box::new(MsgSysDeleteUser::default()),
        Opcode::SysSetUserBinary => Box::new(MsgSysSetUserBinary::default()),
        Opcode::SysGetUserBinary => Box::new(MsgSysGetUserBinary::default()),
        Opcode::SysNotifyUserBinary => Box::new(MsgSysNotifyUserBinary::default()),

        //=== Save data ===//
        Opcode::MhfLoaddata => Box::new(MsgMhfLoaddata::default()),
        Opcode::MhfLoadPartner => Box::new(MsgMhfLoadPartner::default()),
        Opcode::MhfSavePartner => Box::new(MsgMhfSavePartner::default()),
        Opcode::MhfLoadHunterNavi => Box::new(MsgMhfLoadHunterNavi::default()),
        Opcode::MhfLoadScenarioData => Box::new(MsgMhfLoadScenarioData::default()),
        Opcode::MhfSaveScenarioData => Box::new(MsgMhfSaveScenarioData::default()),
        Opcode::MhfLoadOtomoAirou => Box::new(MsgMhfLoadOtomoAirou::default()),
        Opcode::MhfSaveOtomoAirou => Box::new(MsgMhfSaveOtomoAirou::default()),
        Opcode::MhfLoadDecoMyset => Box::new(MsgMhfLoadDecoMyset::default()),
        Opcode::MhfSaveDecoMyset => Box::new(MsgMhfSaveDecoMyset::default()),
        Opcode::MhfLoadFavoriteQuest => Box::new(MsgMhfLoadFavoriteQuest::default()),
        Opcode::MhfSaveFavoriteQuest => Box::new(MsgMhfSaveFavoriteQuest::default()),
        Opcode::MhfLoadPlateData => Box::new(MsgMhfLoadPlateData::default()),
        Opcode::MhfLoadPlateBox => Box::new(MsgMhfLoadPlateBox::default()),
        Opcode::MhfLoadPlateMyset => Box::new(MsgMhfLoadPlateMyset::default()),
        Opcode::MhfSavePlateMyset => Box::new(MsgMhfSavePlateMyset::default()),
        Opcode::MhfLoadRengokuData => Box::new(MsgMhfLoadRengokuData::default()),
        Opcode::MhfSaveRengokuData => Box::new(MsgMhfSaveRengokuData::default()),
        Opcode::MhfLoadMezfesData => Box::new(MsgMhfLoadMezfesData::default()),
        Opcode::MhfSaveMezfesData => Box::new(MsgMhfSaveMezfesData::default()),
        Opcode::MhfGetEnhancedMinidata => Box::new(MsgMhfGetEnhancedMinidata::default()),
        Opcode::MhfSaveHunterNavi => Box::new(MsgMhfSaveHunterNavi::default()),
        Opcode::MhfSavePlateData => Box::new(MsgMhfSavePlateData::default()),
        Opcode::MhfSavePlateBox => Box::new(MsgMhfSavePlateBox::default()),
        Opcode::MhfSavedata => Box::new(MsgMhfSavedata::default()),
        Opcode::MhfSetEnhancedMinidata => Box::new(MsgMhfSetEnhancedMinidata::default()),

        //=== Houses and warehouses ===//
        Opcode::MhfUpdateInterior => Box::new(MsgMhfUpdateInterior::default()),
        Opcode::MhfEnumerateHouse => Box::new(MsgMhfEnumerateHouse::default()),
        Opcode::MhfUpdateHouse => Box::new(MsgMhfUpdateHouse::default()),
        Opcode::MhfLoadHouse => Box::new(MsgMhfLoadHouse::default()),
        Opcode::MhfGetMyhouseInfo => Box::new(MsgMhfGetMyhouseInfo::default()),
        Opcode::MhfEnumerateWarehouse => Box::new(MsgMhfEnumerateWarehouse::default()),
        Opcode::MhfOperateWarehouse => Box::new(MsgMhfOperateWarehouse::default()),
        Opcode::MhfUpdateWarehouse => Box::new(MsgMhfUpdateWarehouse::default()),

        //=== Mail and member lists ===//
        Opcode::MhfReadMail => Box::new(MsgMhfReadMail::default()),
        Opcode::MhfListMail => Box::new(MsgMhfListMail::default()),
        Opcode::MhfListMember => Box::new(MsgMhfListMember::default()),
        Opcode::MhfOprMember => Box::new(MsgMhfOprMember::default()),
        Opcode::MhfTransitMessage => Box::new(MsgMhfTransitMessage::default()),
        Opcode::MhfSendMail => Box::new(MsgMhfSendMail::default()),
        Opcode::MhfOprtMail => Box::new(MsgMhfOprtMail::default()),

        //=== Guilds ===//
        Opcode::MhfCreateGuild => Box::new(MsgMhfCreateGuild::default()),
        Opcode::MhfEnumerateGuild => Box::new(MsgMhfEnumerateGuild::default()),
        Opcode::MhfOperateGuildMember => Box::new(MsgMhfOperateGuildMember::default()),
        Opcode::MhfInfoGuild => Box::new(MsgMhfInfoGuild::default()),
        Opcode::MhfEnumerateGuildMember => Box::new(MsgMhfEnumerateGuildMember::default()),
        Opcode::MhfArrangeGuildMember => Box::new(MsgMhfArrangeGuildMember::default()),
        Opcode::MhfEnumerateGuildItem => Box::new(MsgMhfEnumerateGuildItem::default()),
        Opcode::MhfUpdateGuildItem => Box::new(MsgMhfUpdateGuildItem::default()),
        Opcode::MhfEnumerateUnionItem => Box::new(MsgMhfEnumerateUnionItem::default()),
        Opcode::MhfUpdateUnionItem => Box::new(MsgMhfUpdateUnionItem::default()),
        Opcode::MhfCreateJoint => Box::new(MsgMhfCreateJoint::default()),
        Opcode::MhfOperateJoint => Box::new(MsgMhfOperateJoint::default()),
        Opcode::MhfInfoJoint => Box::new(MsgMhfInfoJoint::default()),
        Opcode::MhfUpdateGuildIcon => Box::new(MsgMhfUpdateGuildIcon::default()),
        Opcode::MhfPostGuildScout => Box::new(MsgMhfPostGuildScout::default()),
        Opcode::MhfCancelGuildScout => Box::new(MsgMhfCancelGuildScout::default()),
        Opcode::MhfAnswerGuildScout => Box::new(MsgMhfAnswerGuildScout::default()),
        Opcode::MhfGetGuildScoutList => Box::new(MsgMhfGetGuildScoutList::default()),
        Opcode::MhfGetGuildManageRight => Box::new(MsgMhfGetGuildManageRight::default()),
        Opcode::MhfSetGuildManageRight => Box::new(MsgMhfSetGuildManageRight::default()),
        Opcode::MhfGetRejectGuildScout => Box::new(MsgMhfGetRejectGuildScout::default()),
        Opcode::MhfSetRejectGuildScout => Box::new(MsgMhfSetRejectGuildScout::default()),
        Opcode::MhfEnumerateGuildMessageBoard => Box::new(MsgMhfEnumerateGuildMessageBoard::default()),
        Opcode::MhfGetGuildMissionList => Box::new(MsgMhfGetGuildMissionList::default()),
        Opcode::MhfGetGuildMissionRecord => Box::new(MsgMhfGetGuildMissionRecord::default()),
        Opcode::MhfAddGuildMissionCount => Box::new(MsgMhfAddGuildMissionCount::default()),
        Opcode::MhfSetGuildMissionTarget => Box::new(MsgMhfSetGuildMissionTarget::default()),
        Opcode::MhfCancelGuildMissionTarget => Box::new(MsgMhfCancelGuildMissionTarget::default()),
        Opcode::MhfEnumerateGuildTresure => Box::new(MsgMhfEnumerateGuildTresure::default()),
        Opcode::MhfRegistGuildTresure => Box::new(MsgMhfRegistGuildTresure::default()),
        Opcode::MhfAcquireGuildTresure => Box::new(MsgMhfAcquireGuildTresure::default()),
        Opcode::MhfOperateGuildTresureReport => Box::new(MsgMhfOperateGuildTresureReport::default()),
        Opcode::MhfGetGuildTresureSouvenir => Box::new(MsgMhfGetGuildTresureSouvenir::default()),
        Opcode::MhfAcquireGuildTresureSouvenir => Box::new(MsgMhfAcquireGuildTresureSouvenir::default()),
        Opcode::MhfEnumerateAiroulist => Box::new(MsgMhfEnumerateAiroulist::default()),
        Opcode::MhfLoadGuildCooking => Box::new(MsgMhfLoadGuildCooking::default()),
        Opcode::MhfRegistGuildCooking => Box::new(MsgMhfRegistGuildCooking::default()),
        Opcode::MhfLoadGuildAdventure => Box::new(MsgMhfLoadGuildAdventure::default()),
        Opcode::MhfRegistGuildAdventure => Box::new(MsgMhfRegistGuildAdventure::default()),
        Opcode::MhfAcquireGuildAdventure => Box::new(MsgMhfAcquireGuildAdventure::default()),
        Opcode::MhfChargeGuildAdventure => Box::new(MsgMhfChargeGuildAdventure::default()),
        Opcode::MhfLoadLegendDispatch => Box::new(MsgMhfLoadLegendDispatch::default()),
        Opcode::MhfGetGuildWeeklyBonusMaster => Box::new(MsgMhfGetGuildWeeklyBonusMaster::default()),
        Opcode::MhfGetGuildWeeklyBonusActiveCount => Box::new(MsgMhfGetGuildWeeklyBonusActiveCount::default()),
        Opcode::MhfAddGuildWeeklyBonusExceptionalUser => Box::new(MsgMhfAddGuildWeeklyBonusExceptionalUser::default()),
        Opcode::MhfGetGuildTargetMemberNum => Box::new(MsgMhfGetGuildTargetMemberNum::default()),
        Opcode::MhfUpdateForceGuildRank => Box::new(MsgMhfUpdateForceGuildRank::default()),
        Opcode::MhfReadGuildcard => Box::new(MsgMhfReadGuildcard::default()),
        Opcode::MhfUpdateGuildcard => Box::new(MsgMhfUpdateGuildcard::default()),
        Opcode::MhfOperateGuild => Box::new(MsgMhfOperateGuild::default()),
        Opcode::MhfGuildHuntdata => Box::new(MsgMhfGuildHuntdata::default()),
        Opcode::MhfUpdateGuildMessageBoard => Box::new(MsgMhfUpdateGuildMessageBoard::default()),

        //=== Quests, distributions and shops ===//
        Opcode::MhfAcquireDistItem => Box::new(MsgMhfAcquireDistItem::default()),
        Opcode::MhfGetDistDescription => Box::new(MsgMhfGetDistDescription::default()),
        Opcode::MhfGetWeeklySchedule => Box::new(MsgMhfGetWeeklySchedule::default()),
        Opcode::MhfRegisterEvent => Box::new(MsgMhfRegisterEvent::default()),
        Opcode::MhfReleaseEvent => Box::new(MsgMhfReleaseEvent::default()),
        Opcode::MhfEnumeratePrice => Box::new(MsgMhfEnumeratePrice::default()),
        Opcode::MhfEnumerateRanking => Box::new(MsgMhfEnumerateRanking::default()),
        Opcode::MhfEnumerateOrder => Box::new(MsgMhfEnumerateOrder::default()),
        Opcode::MhfAcquireExchangeShop => Box::new(MsgMhfAcquireExchangeShop::default()),
        Opcode::MhfInfoScenarioCounter => Box::new(MsgMhfInfoScenarioCounter::default()),
        Opcode::MhfGetTrendWeapon => Box::new(MsgMhfGetTrendWeapon::default()),
        Opcode::MhfUpdateUseTrendWeaponLog => Box::new(MsgMhfUpdateUseTrendWeaponLog::default()),
        Opcode::MhfGetRengokuBinary => Box::new(MsgMhfGetRengokuBinary::default()),
        Opcode::MhfEnumerateRengokuRanking => Box::new(MsgMhfEnumerateRengokuRanking::default()),
        Opcode::MhfGetRengokuRankingRank => Box::new(MsgMhfGetRengokuRankingRank::default()),
        Opcode::MhfInfoTournament => Box::new(MsgMhfInfoTournament::default()),
        Opcode::MhfEntryTournament => Box::new(MsgMhfEntryTournament::default()),
        Opcode::MhfAcquireTournament => Box::new(MsgMhfAcquireTournament::default()),
        Opcode::MhfGetSeibattle => Box::new(MsgMhfGetSeibattle::default()),
        Opcode::MhfGetRyoudama => Box::new(MsgMhfGetRyoudama::default()),
        Opcode::MhfGetTenrouirai => Box::new(MsgMhfGetTenrouirai::default()),
        Opcode::MhfPostTenrouirai => Box::new(MsgMhfPostTenrouirai::default()),
        Opcode::MhfSetRestrictionEvent => Box::new(MsgMhfSetRestrictionEvent::default()),
        Opcode::MhfUnreserveSrg => Box::new(MsgMhfUnreserveSrg::default()),
        Opcode::MhfGetBbsSnsStatus => Box::new(MsgMhfGetBbsSnsStatus::default()),
        Opcode::MhfGetBbsUserStatus => Box::new(MsgMhfGetBbsUserStatus::default()),
        Opcode::MhfGetPaperData => Box::new(MsgMhfGetPaperData::default()),
        Opcode::MhfGetNotice => Box::new(MsgMhfGetNotice::default()),
        Opcode::MhfPostNotice => Box::new(MsgMhfPostNotice::default()),
        Opcode::MhfGetRandFromTable => Box::new(MsgMhfGetRandFromTable::default()),
        Opcode::MhfGetTinyBin => Box::new(MsgMhfGetTinyBin::default()),
        Opcode::MhfPostTinyBin => Box::new(MsgMhfPostTinyBin::default()),
        Opcode::MhfGetSenyuDailyCount => Box::new(MsgMhfGetSenyuDailyCount::default()),
        Opcode::MhfGetLobbyCrowd => Box::new(MsgMhfGetLobbyCrowd::default()),
        Opcode::MhfEnumerateQuest => Box::new(MsgMhfEnumerateQuest::default()),
        Opcode::MhfEnumerateDistItem => Box::new(MsgMhfEnumerateDistItem::default()),
        Opcode::MhfApplyDistItem => Box::new(MsgMhfApplyDistItem::default()),
        Opcode::MhfEnumerateShop => Box::new(MsgMhfEnumerateShop::default()),

        //=== Festa, tower, earth and Diva ===//
        Opcode::MhfInfoFesta => Box::new(MsgMhfInfoFesta::default()),
        Opcode::MhfEntryFesta => Box::new(MsgMhfEntryFesta::default()),
        Opcode::MhfChargeFesta => Box::new(MsgMhfChargeFesta::default()),
        Opcode::MhfAcquireFesta => Box::new(MsgMhfAcquireFesta::default()),
        Opcode::MhfStateFestaU => Box::new(MsgMhfStateFestaU::default()),
        Opcode::MhfStateFestaG => Box::new(MsgMhfStateFestaG::default()),
        Opcode::MhfEnumerateFestaMember => Box::new(MsgMhfEnumerateFestaMember::default()),
        Opcode::MhfVoteFesta => Box::new(MsgMhfVoteFesta::default()),
        Opcode::MhfEnumerateFestaIntermediatePrize => Box::new(MsgMhfEnumerateFestaIntermediatePrize::default()),
        Opcode::MhfAcquireFestaIntermediatePrize => Box::new(MsgMhfAcquireFestaIntermediatePrize::default()),
        Opcode::MhfEnumerateFestaPersonalPrize => Box::new(MsgMhfEnumerateFestaPersonalPrize::default()),
        Opcode::MhfAcquireFestaPersonalPrize => Box::new(MsgMhfAcquireFestaPersonalPrize::default()),
        Opcode::MhfGetTowerInfo => Box::new(MsgMhfGetTowerInfo::default()),
        Opcode::MhfGetGemInfo => Box::new(MsgMhfGetGemInfo::default()),
        Opcode::MhfPostGemInfo => Box::new(MsgMhfPostGemInfo::default()),
        Opcode::MhfGetEarthStatus => Box::new(MsgMhfGetEarthStatus::default()),
        Opcode::MhfGetEarthValue => Box::new(MsgMhfGetEarthValue::default()),
        Opcode::MhfUpdateBeatLevel => Box::new(MsgMhfUpdateBeatLevel::default()),
        Opcode::MhfReadBeatLevelAllRanking => Box::new(MsgMhfReadBeatLevelAllRanking::default()),
        Opcode::MhfReadBeatLevelMyRanking => Box::new(MsgMhfReadBeatLevelMyRanking::default()),
        Opcode::MhfReadLastWeekBeatRanking => Box::new(MsgMhfReadLastWeekBeatRanking::default()),
        Opcode::MhfGetAdditionalBeatReward => Box::new(MsgMhfGetAdditionalBeatReward::default()),
        Opcode::MhfGetFixedSeibatuRankingTable => Box::new(MsgMhfGetFixedSeibatuRankingTable::default()),
        Opcode::MhfGetBreakSeibatuLevelReward => Box::new(MsgMhfGetBreakSeibatuLevelReward::default()),
        Opcode::MhfGetWeeklySeibatuRankingReward => Box::new(MsgMhfGetWeeklySeibatuRankingReward::default()),
        Opcode::MhfGetUdSchedule => Box::new(MsgMhfGetUdSchedule::default()),
        Opcode::MhfGetUdInfo => Box::new(MsgMhfGetUdInfo::default()),
        Opcode::MhfGetKijuInfo => Box::new(MsgMhfGetKijuInfo::default()),
        Opcode::MhfSetKiju => Box::new(MsgMhfSetKiju::default()),
        Opcode::MhfAddUdPoint => Box::new(MsgMhfAddUdPoint::default()),
        Opcode::MhfGetUdMyPoint => Box::new(MsgMhfGetUdMyPoint::default()),
        Opcode::MhfGetUdTotalPointInfo => Box::new(MsgMhfGetUdTotalPointInfo::default()),
        Opcode::MhfGetUdBonusQuestInfo => Box::new(MsgMhfGetUdBonusQuestInfo::default()),
        Opcode::MhfGetUdSelectedColorInfo => Box::new(MsgMhfGetUdSelectedColorInfo::default()),
        Opcode::MhfGetUdMonsterPoint => Box::new(MsgMhfGetUdMonsterPoint::default()),
        Opcode::MhfGetUdDailyPresentList => Box::new(MsgMhfGetUdDailyPresentList::default()),
        Opcode::MhfGetUdNormaPresentList => Box::new(MsgMhfGetUdNormaPresentList::default()),
        Opcode::MhfGetUdRankingRewardList => Box::new(MsgMhfGetUdRankingRewardList::default()),
        Opcode::MhfAcquireUdItem => Box::new(MsgMhfAcquireUdItem::default()),
        Opcode::MhfGetRewardSong => Box::new(MsgMhfGetRewardSong::default()),
        Opcode::MhfGetUdRanking => Box::new(MsgMhfGetUdRanking::default()),
        Opcode::MhfGetUdMyRanking => Box::new(MsgMhfGetUdMyRanking::default()),
        Opcode::MhfGetUdGuildMapInfo => Box::new(MsgMhfGetUdGuildMapInfo::default()),
        Opcode::MhfGenerateUdGuildMap => Box::new(MsgMhfGenerateUdGuildMap::default()),
        Opcode::MhfGetUdTacticsPoint => Box::new(MsgMhfGetUdTacticsPoint::default()),
        Opcode::MhfAddUdTacticsPoint => Box::new(MsgMhfAddUdTacticsPoint::default()),
        Opcode::MhfGetUdTacticsRanking => Box::new(MsgMhfGetUdTacticsRanking::default()),
        Opcode::MhfGetUdTacticsRewardList => Box::new(MsgMhfGetUdTacticsRewardList::default()),
        Opcode::MhfGetUdTacticsLog => Box::new(MsgMhfGetUdTacticsLog::default()),
        Opcode::MhfGetUdTacticsFollower => Box::new(MsgMhfGetUdTacticsFollower::default()),
        Opcode::MhfSetUdTacticsFollower => Box::new(MsgMhfSetUdTacticsFollower::default()),
        Opcode::MhfGetUdShopCoin => Box::new(MsgMhfGetUdShopCoin::default()),
        Opcode::MhfUseUdShopCoin => Box::new(MsgMhfUseUdShopCoin::default()),
        Opcode::MhfGetUdTacticsBonusQuest => Box::new(MsgMhfGetUdTacticsBonusQuest::default()),
        Opcode::MhfGetUdTacticsFirstQuestBonus => Box::new(MsgMhfGetUdTacticsFirstQuestBonus::default()),
        Opcode::MhfGetUdTacticsRemainingPoint => Box::new(MsgMhfGetUdTacticsRemainingPoint::default()),
        Opcode::MhfPostTowerInfo => Box::new(MsgMhfPostTowerInfo::default()),
        Opcode::MhfReadBeatLevel => Box::new(MsgMhfReadBeatLevel::default()),

        //=== Points, gacha and rewards ===//
        Opcode::MhfAcquireCafeItem => Box::new(MsgMhfAcquireCafeItem::default()),
        Opcode::MhfUpdateCafepoint => Box::new(MsgMhfUpdateCafepoint::default()),
        Opcode::MhfCheckDailyCafepoint => Box::new(MsgMhfCheckDailyCafepoint::default()),
        Opcode::MhfGetCafeDuration => Box::new(MsgMhfGetCafeDuration::default()),
        Opcode::MhfGetCafeDurationBonusInfo => Box::new(MsgMhfGetCafeDurationBonusInfo::default()),
        Opcode::MhfReceiveCafeDurationBonus => Box::new(MsgMhfReceiveCafeDurationBonus::default()),
        Opcode::MhfPostCafeDurationBonusReceived => Box::new(MsgMhfPostCafeDurationBonusReceived::default()),
        Opcode::MhfCheckWeeklyStamp => Box::new(MsgMhfCheckWeeklyStamp::default()),
        Opcode::MhfExchangeWeeklyStamp => Box::new(MsgMhfExchangeWeeklyStamp::default()),
        Opcode::MhfCheckMonthlyItem => Box::new(MsgMhfCheckMonthlyItem::default()),
        Opcode::MhfAcquireMonthlyItem => Box::new(MsgMhfAcquireMonthlyItem::default()),
        Opcode::MhfAcquireMonthlyReward => Box::new(MsgMhfAcquireMonthlyReward::default()),
        Opcode::MhfGetGachaPoint => Box::new(MsgMhfGetGachaPoint::default()),
        Opcode::MhfUseGachaPoint => Box::new(MsgMhfUseGachaPoint::default()),
        Opcode::MhfPlayNormalGacha => Box::new(MsgMhfPlayNormalGacha::default()),
        Opcode::MhfPlayStepupGacha => Box::new(MsgMhfPlayStepupGacha::default()),
        Opcode::MhfPlayBoxGacha => Box::new(MsgMhfPlayBoxGacha::default()),
        Opcode::MhfPlayFreeGacha => Box::new(MsgMhfPlayFreeGacha::default()),
        Opcode::MhfReceiveGachaItem => Box::new(MsgMhfReceiveGachaItem::default()),
        Opcode::MhfGetStepupStatus => Box::new(MsgMhfGetStepupStatus::default()),
        Opcode::MhfGetBoxGachaInfo => Box::new(MsgMhfGetBoxGachaInfo::default()),
        Opcode::MhfResetBoxGachaInfo => Box::new(MsgMhfResetBoxGachaInfo::default()),
        Opcode::MhfGetGachaPlayHistory => Box::new(MsgMhfGetGachaPlayHistory::default()),
        Opcode::MhfGetFpointExchangeList => Box::new(MsgMhfGetFpointExchangeList::default()),
        Opcode::MhfExchangeFpoint2Item => Box::new(MsgMhfExchangeFpoint2Item::default()),
        Opcode::MhfExchangeItem2Fpoint => Box::new(MsgMhfExchangeItem2Fpoint::default()),
        Opcode::MhfGetEtcPoints => Box::new(MsgMhfGetEtcPoints::default()),
        Opcode::MhfUpdateEtcPoint => Box::new(MsgMhfUpdateEtcPoint::default()),
        Opcode::MhfAddKouryouPoint => Box::new(MsgMhfAddKouryouPoint::default()),
        Opcode::MhfGetKouryouPoint => Box::new(MsgMhfGetKouryouPoint::default()),
        Opcode::MhfExchangeKouryouPoint => Box::new(MsgMhfExchangeKouryouPoint::default()),
        Opcode::MhfGetAchievement => Box::new(MsgMhfGetAchievement::default()),
        Opcode::MhfAddAchievement => Box::new(MsgMhfAddAchievement::default()),
        Opcode::MhfDisplayedAchievement => Box::new(MsgMhfDisplayedAchievement::default()),
        Opcode::MhfGetCaAchievementHist => Box::new(MsgMhfGetCaAchievementHist::default()),
        Opcode::MhfSetCaAchievementHist => Box::new(MsgMhfSetCaAchievementHist::default()),
        Opcode::MhfAcquireTitle => Box::new(MsgMhfAcquireTitle::default()),
        Opcode::MhfEnumerateTitle => Box::new(MsgMhfEnumerateTitle::default()),
        Opcode::MhfGetBoostTime => Box::new(MsgMhfGetBoostTime::default()),
        Opcode::MhfPostBoostTime => Box::new(MsgMhfPostBoostTime::default()),
        Opcode::MhfGetBoostTimeLimit => Box::new(MsgMhfGetBoostTimeLimit::default()),
        Opcode::MhfPostBoostTimeLimit => Box::new(MsgMhfPostBoostTimeLimit::default()),
        Opcode::MhfGetBoostRight => Box::new(MsgMhfGetBoostRight::default()),
        Opcode::MhfStartBoostTime => Box::new(MsgMhfStartBoostTime::default()),
        Opcode::MhfPostBoostTimeQuestReturn => Box::new(MsgMhfPostBoostTimeQuestReturn::default()),
        Opcode::MhfGetKeepLoginBoostStatus => Box::new(MsgMhfGetKeepLoginBoostStatus::default()),
        Opcode::MhfUseKeepLoginBoost => Box::new(MsgMhfUseKeepLoginBoost::default()),
        Opcode::MhfCreateMercenary => Box::new(MsgMhfCreateMercenary::default()),
        Opcode::MhfReadMercenaryW => Box::new(MsgMhfReadMercenaryW::default()),
        Opcode::MhfReadMercenaryM => Box::new(MsgMhfReadMercenaryM::default()),
        Opcode::MhfContractMercenary => Box::new(MsgMhfContractMercenary::default()),
        Opcode::MhfEnumerateMercenaryLog => Box::new(MsgMhfEnumerateMercenaryLog::default()),
        Opcode::MhfEnumerateGuacot => Box::new(MsgMhfEnumerateGuacot::default()),
        Opcode::MhfSexChanger => Box::new(MsgMhfSexChanger::default()),
        Opcode::MhfGetEquipSkinHist => Box::new(MsgMhfGetEquipSkinHist::default()),
        Opcode::MhfUpdateEquipSkinHist => Box::new(MsgMhfUpdateEquipSkinHist::default()),
        Opcode::MhfGetDailyMissionMaster => Box::new(MsgMhfGetDailyMissionMaster::default()),
        Opcode::MhfGetDailyMissionPersonal => Box::new(MsgMhfGetDailyMissionPersonal::default()),
        Opcode::MhfStampcardStamp => Box::new(MsgMhfStampcardStamp::default()),
        Opcode::MhfSaveMercenary => Box::new(MsgMhfSaveMercenary::default()),
        //=== Reserved or unknown layout ===//
        _ => Box::new(Placeholder::new(opcode)),
    }
}

/// Create the empty message for a raw opcode id
///
/// Returns `None` for ids past the end of the table.
pub fn from_opcode(id: u16) -> Option<Box<dyn Message>> {
    Opcode::from_u16(id).map(new_message)
}

/// Decode the payload of a message whose opcode has already been read
pub fn decode_message(
    opcode: Opcode,
    bf: &mut ByteFrame,
    ctx: &ClientContext,
) -> Result<Box<dyn Message>> {
    let mut msg = new_message(opcode);
    msg.decode(bf, ctx)?;
    bf.check()?;
    Ok(msg)
}

/// Read the big-endian opcode at the cursor, whatever the frame's byte order
fn read_opcode_id(bf: &mut ByteFrame) -> u16 {
    let endian = bf.endian();
    bf.set_endian(Endian::Big);
    let id = bf.read_u16();
    bf.set_endian(endian);
    id
}

/// Decode one `[opcode][payload]` message starting at the cursor
///
/// `Ok(None)` means the opcode is outside the table.
pub fn decode_packet(bf: &mut ByteFrame, ctx: &ClientContext) -> Result<Option<Box<dyn Message>>> {
    let id = read_opcode_id(bf);
    bf.check()?;
    match Opcode::from_u16(id) {
        Some(opcode) => decode_message(opcode, bf, ctx).map(Some),
        None => {
            debug!("Unknown opcode 0x{:04X}", id);
            Ok(None)
        }
    }
}

/// Encode `msg` with its opcode prefix
pub fn encode_packet(msg: &dyn Message, ctx: &ClientContext) -> Result<Bytes> {
    let mut bf = ByteFrame::new();
    bf.write_u16(msg.opcode().as_u16());
    msg.encode(&mut bf, ctx)?;
    Ok(bf.into_bytes())
}

/// Why a packet group stopped before the end of its frame
#[derive(Error, Debug)]
pub enum GroupStop {
    #[error("Unknown opcode 0x{0:04X}")]
    UnknownOpcode(u16),

    #[error("{opcode} failed to decode: {source}")]
    Failed {
        opcode: Opcode,
        #[source]
        source: HunterError,
    },
}

/// Messages decoded from one frame
#[derive(Debug, Default)]
pub struct PacketGroup {
    pub messages: Vec<Box<dyn Message>>,
    /// `None` when the whole frame was consumed
    pub stop: Option<GroupStop>,
}

impl PacketGroup {
    pub fn is_complete(&self) -> bool {
        self.stop.is_none()
    }
}

/// Decode consecutive messages until fewer than two bytes remain
///
/// Messages decoded before a failure are kept; the failure is reported in
/// [`PacketGroup::stop`].
pub fn decode_group(bf: &mut ByteFrame, ctx: &ClientContext) -> PacketGroup {
    let mut group = PacketGroup::default();

    while bf.remaining() >= 2 {
        let id = read_opcode_id(bf);
        let Some(opcode) = Opcode::from_u16(id) else {
            debug!("Unknown opcode 0x{:04X} in packet group, stopping", id);
            group.stop = Some(GroupStop::UnknownOpcode(id));
            break;
        };

        match decode_message(opcode, bf, ctx) {
            Ok(msg) => group.messages.push(msg),
            Err(source) => {
                if source.is_not_implemented() {
                    debug!("{} has no known layout, stopping packet group", opcode);
                } else {
                    warn!("Failed to decode {}: {}", opcode, source);
                }
                group.stop = Some(GroupStop::Failed { opcode, source });
                break;
            }
        }
    }

    group
}

/// Per-connection codec built from [`ProtocolConfig`]
///
/// Adds logging around the free functions in this module.
#[derive(Debug, Clone, Copy)]
pub struct PacketCodec {
    ctx: ClientContext,
    trace_payloads: bool,
}

impl PacketCodec {
    pub fn new(config: &ProtocolConfig) -> Self {
        Self {
            ctx: config.context(),
            trace_payloads: config.trace_payloads,
        }
    }

    pub fn context(&self) -> ClientContext {
        self.ctx
    }

    /// Decode a single-message frame
    pub fn decode(&self, frame: &[u8]) -> Result<Option<Box<dyn Message>>> {
        let mut bf = ByteFrame::from_bytes(frame);
        let msg = decode_packet(&mut bf, &self.ctx);

        match &msg {
            Ok(Some(m)) => self.trace_decoded(m.as_ref(), frame),
            Ok(None) => {}
            Err(e) if e.is_not_implemented() => debug!("{}", e),
            Err(e) => warn!("Dropping malformed frame of {} bytes: {}", frame.len(), e),
        }
        msg
    }

    /// Decode every message packed into `frame`
    pub fn decode_group(&self, frame: &[u8]) -> PacketGroup {
        let mut bf = ByteFrame::from_bytes(frame);
        let group = decode_group(&mut bf, &self.ctx);
        for m in &group.messages {
            self.trace_decoded(m.as_ref(), frame);
        }
        group
    }

    pub fn encode(&self, msg: &dyn Message) -> Result<Bytes> {
        let bytes = encode_packet(msg, &self.ctx)?;
        trace!("Encoded {} ({} bytes)", msg.opcode(), bytes.len());
        Ok(bytes)
    }

    fn trace_decoded(&self, msg: &dyn Message, frame: &[u8]) {
        if self.trace_payloads {
            trace!("Decoded {:?} from {:02x?}", msg, frame);
        } else {
            trace!("Decoded {}", msg.opcode());
        }
    }
}
