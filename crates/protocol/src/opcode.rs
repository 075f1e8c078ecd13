//! # Opcode Table
//!
//! Every message on the wire starts with a big-endian `u16` opcode. The
//! table is dense: every value from `0x0000` to [`Opcode::MAX`] names a slot,
//! including reserved slots the client never sends. Values past the end are
//! unknown and have no slot at all.
//!
//! Names follow the client's own grouping: `Sys*` for session plumbing
//! shared by every server, `Mhf*` for game features.

use std::fmt;

macro_rules! opcodes {
    ($($name:ident = $value:literal,)*) => {
        /// Message opcode
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum Opcode {
            $($name = $value,)*
        }

        impl Opcode {
            /// Every slot in ascending order
            pub const ALL: &'static [Opcode] = &[$(Opcode::$name,)*];

            /// Look up a slot; `None` past the end of the table
            pub fn from_u16(value: u16) -> Option<Self> {
                match value {
                    $($value => Some(Opcode::$name),)*
                    _ => None,
                }
            }

            /// Name of the slot as used in logs and errors
            pub fn name(self) -> &'static str {
                match self {
                    $(Opcode::$name => stringify!($name),)*
                }
            }
        }
    };
}

opcodes! {
    //=== Object visibility ===//
    Head = 0x0000,
    SysReserve01 = 0x0001,
    SysReserve02 = 0x0002,
    SysAddObject = 0x0003,
    SysDelObject = 0x0004,
    SysDispObject = 0x0005,
    SysHideObject = 0x0006,
    SysReserve07 = 0x0007,
    SysReserve08 = 0x0008,
    SysReserve09 = 0x0009,
    SysReserve0A = 0x000A,
    SysReserve0B = 0x000B,
    SysReserve0C = 0x000C,
    SysReserve0D = 0x000D,
    SysReserve0E = 0x000E,

    //=== Session ===//
    SysExtendThreshold = 0x000F,
    SysEnd = 0x0010,
    SysNop = 0x0011,
    SysAck = 0x0012,
    SysTerminalLog = 0x0013,
    SysLogin = 0x0014,
    SysLogout = 0x0015,
    SysSetStatus = 0x0016,
    SysPing = 0x0017,
    SysCastBinary = 0x0018,
    SysHideClient = 0x0019,
    SysTime = 0x001A,
    SysCastedBinary = 0x001B,
    SysGetFile = 0x001C,
    SysIssueLogkey = 0x001D,
    SysRecordLog = 0x001E,
    SysEcho = 0x001F,

    //=== Stages ===//
    SysCreateStage = 0x0020,
    SysStageDestruct = 0x0021,
    SysEnterStage = 0x0022,
    SysBackStage = 0x0023,
    SysMoveStage = 0x0024,
    SysLeaveStage = 0x0025,
    SysLockStage = 0x0026,
    SysUnlockStage = 0x0027,
    SysReserveStage = 0x0028,
    SysUnreserveStage = 0x0029,
    SysSetStagePass = 0x002A,
    SysWaitStageBinary = 0x002B,
    SysSetStageBinary = 0x002C,
    SysGetStageBinary = 0x002D,
    SysEnumerateClient = 0x002E,
    SysEnumerateStage = 0x002F,

    //=== Mutexes and semaphores ===//
    SysCreateMutex = 0x0030,
    SysCreateOpenMutex = 0x0031,
    SysDeleteMutex = 0x0032,
    SysOpenMutex = 0x0033,
    SysCloseMutex = 0x0034,
    SysCreateSemaphore = 0x0035,
    SysCreateAcquireSemaphore = 0x0036,
    SysDeleteSemaphore = 0x0037,
    SysAcquireSemaphore = 0x0038,
    SysReleaseSemaphore = 0x0039,
    SysLockGlobalSema = 0x003A,
    SysUnlockGlobalSema = 0x003B,
    SysCheckSemaphore = 0x003C,

    //=== Registers ===//
    SysOperateRegister = 0x003D,
    SysLoadRegister = 0x003E,
    SysNotifyRegister = 0x003F,

    //=== Objects ===//
    SysCreateObject = 0x0040,
    SysDeleteObject = 0x0041,
    SysPositionObject = 0x0042,
    SysRotateObject = 0x0043,
    SysDuplicateObject = 0x0044,
    SysSetObjectBinary = 0x0045,
    SysGetObjectBinary = 0x0046,
    SysGetObjectOwner = 0x0047,
    SysUpdateObjectBinary = 0x0048,
    SysCleanupObject = 0x0049,
    SysReserve4A = 0x004A,
    SysReserve4B = 0x004B,
    SysReserve4C = 0x004C,
    SysReserve4D = 0x004D,
    SysReserve4E = 0x004E,
    SysReserve4F = 0x004F,

    //=== Users ===//
    SysInsertUser = 0x0050,
    SysDeleteUser = 0x0051,
    SysSetUserBinary = 0x0052,
    SysGetUserBinary = 0x0053,
    SysNotifyUserBinary = 0x0054,
    SysReserve55 = 0x0055,
    SysReserve56 = 0x0056,
    SysReserve57 = 0x0057,
    SysReserve58 = 0x0058,
    SysReserve59 = 0x0059,
    SysReserve5A = 0x005A,
    SysReserve5B = 0x005B,
    SysReserve5C = 0x005C,
    SysReserve5D = 0x005D,
    SysReserve5E = 0x005E,
    SysReserve5F = 0x005F,

    //=== Rights and authentication ===//
    SysUpdateRight = 0x0060,
    SysAuthQuery = 0x0061,
    SysAuthData = 0x0062,
    SysAuthTerminal = 0x0063,
    SysReserve64 = 0x0064,
    SysRightsReload = 0x0065,
    SysReserve66 = 0x0066,
    SysReserve67 = 0x0067,
    SysReserve68 = 0x0068,
    SysReserve69 = 0x0069,
    SysReserve6A = 0x006A,
    SysReserve6B = 0x006B,
    SysReserve6C = 0x006C,
    SysReserve6D = 0x006D,
    SysReserve6E = 0x006E,
    SysReserve6F = 0x006F,

    //=== Save data and members ===//
    MhfSavedata = 0x0070,
    MhfLoaddata = 0x0071,
    MhfListMember = 0x0072,
    MhfOprMember = 0x0073,

    //=== Distribution and mail ===//
    MhfEnumerateDistItem = 0x0074,
    MhfApplyDistItem = 0x0075,
    MhfAcquireDistItem = 0x0076,
    MhfGetDistDescription = 0x0077,
    MhfSendMail = 0x0078,
    MhfReadMail = 0x0079,
    MhfListMail = 0x007A,
    MhfOprtMail = 0x007B,

    //=== Quests, events and shops ===//
    MhfLoadFavoriteQuest = 0x007C,
    MhfSaveFavoriteQuest = 0x007D,
    MhfRegisterEvent = 0x007E,
    MhfReleaseEvent = 0x007F,
    MhfTransferItem = 0x0080,
    MhfEnumeratePrice = 0x0081,
    MhfEnumerateRanking = 0x0082,
    MhfEnumerateOrder = 0x0083,
    MhfEnumerateShop = 0x0084,
    MhfGetExtraInfo = 0x0085,

    //=== Houses and warehouse ===//
    MhfUpdateInterior = 0x0086,
    MhfEnumerateHouse = 0x0087,
    MhfUpdateHouse = 0x0088,
    MhfLoadHouse = 0x0089,
    MhfOperateWarehouse = 0x008A,
    MhfEnumerateWarehouse = 0x008B,
    MhfUpdateWarehouse = 0x008C,

    //=== Titles ===//
    MhfAcquireTitle = 0x008D,
    MhfEnumerateTitle = 0x008E,

    //=== Guilds ===//
    MhfEnumerateGuild = 0x008F,
    MhfCreateGuild = 0x0090,
    MhfOperateGuild = 0x0091,
    MhfOperateGuildMember = 0x0092,
    MhfInfoGuild = 0x0093,
    MhfEnumerateGuildMember = 0x0094,
    MhfUpdateGuild = 0x0095,
    MhfArrangeGuildMember = 0x0096,
    MhfEnumerateGuildItem = 0x0097,
    MhfUpdateGuildItem = 0x0098,
    MhfEnumerateUnionItem = 0x0099,
    MhfUpdateUnionItem = 0x009A,
    MhfCreateJoint = 0x009B,
    MhfOperateJoint = 0x009C,
    MhfInfoJoint = 0x009D,
    MhfUpdateGuildIcon = 0x009E,

    //=== Festa ===//
    MhfInfoFesta = 0x009F,
    MhfEntryFesta = 0x00A0,
    MhfChargeFesta = 0x00A1,
    MhfAcquireFesta = 0x00A2,
    MhfStateFestaU = 0x00A3,
    MhfStateFestaG = 0x00A4,
    MhfEnumerateFestaMember = 0x00A5,
    MhfVoteFesta = 0x00A6,

    //=== Cafe, stamps and mercenaries ===//
    MhfAcquireCafeItem = 0x00A7,
    MhfUpdateCafepoint = 0x00A8,
    MhfCheckDailyCafepoint = 0x00A9,
    MhfGetCogInfo = 0x00AA,
    MhfCheckMonthlyItem = 0x00AB,
    MhfAcquireMonthlyItem = 0x00AC,
    MhfCheckWeeklyStamp = 0x00AD,
    MhfExchangeWeeklyStamp = 0x00AE,
    MhfCreateMercenary = 0x00AF,
    MhfSaveMercenary = 0x00B0,
    MhfReadMercenaryW = 0x00B1,
    MhfReadMercenaryM = 0x00B2,
    MhfContractMercenary = 0x00B3,
    MhfEnumerateMercenaryLog = 0x00B4,
    MhfEnumerateGuacot = 0x00B5,
    MhfUpdateGuacot = 0x00B6,

    //=== Tournaments and achievements ===//
    MhfInfoTournament = 0x00B7,
    MhfEntryTournament = 0x00B8,
    MhfEnterTournamentQuest = 0x00B9,
    MhfAcquireTournament = 0x00BA,
    MhfGetAchievement = 0x00BB,
    MhfResetAchievement = 0x00BC,
    MhfAddAchievement = 0x00BD,
    MhfPaymentAchievement = 0x00BE,
    MhfDisplayedAchievement = 0x00BF,

    //=== Scenario, boards and plates ===//
    MhfInfoScenarioCounter = 0x00C0,
    MhfSaveScenarioData = 0x00C1,
    MhfLoadScenarioData = 0x00C2,
    MhfGetBbsSnsStatus = 0x00C3,
    MhfApplyBbsArticle = 0x00C4,
    MhfGetEtcPoints = 0x00C5,
    MhfUpdateEtcPoint = 0x00C6,
    MhfGetMyhouseInfo = 0x00C7,
    MhfUpdateMyhouseInfo = 0x00C8,
    MhfGetWeeklySchedule = 0x00C9,
    MhfEnumerateInvGuild = 0x00CA,
    MhfOperationInvGuild = 0x00CB,
    MhfStampcardStamp = 0x00CC,
    MhfStampcardPrize = 0x00CD,
    MhfUnreserveSrg = 0x00CE,
    MhfLoadPlateData = 0x00CF,
    MhfSavePlateData = 0x00D0,
    MhfLoadPlateBox = 0x00D1,
    MhfSavePlateBox = 0x00D2,

    //=== Guild cards and hunting rankings ===//
    MhfReadGuildcard = 0x00D3,
    MhfUpdateGuildcard = 0x00D4,
    MhfReadBeatLevel = 0x00D5,
    MhfUpdateBeatLevel = 0x00D6,
    MhfReadBeatLevelAllRanking = 0x00D7,
    MhfReadBeatLevelMyRanking = 0x00D8,
    MhfReadLastWeekBeatRanking = 0x00D9,
    MhfAcceptReadReward = 0x00DA,
    MhfGetAdditionalBeatReward = 0x00DB,
    MhfGetFixedSeibatuRankingTable = 0x00DC,
    MhfGetBbsUserStatus = 0x00DD,
    MhfKickExportForce = 0x00DE,
    MhfGetBreakSeibatuLevelReward = 0x00DF,
    MhfGetWeeklySeibatuRankingReward = 0x00E0,
    MhfGetEarthStatus = 0x00E1,

    //=== Partner, missions and airou ===//
    MhfLoadPartner = 0x00E2,
    MhfSavePartner = 0x00E3,
    MhfGetGuildMissionList = 0x00E4,
    MhfGetGuildMissionRecord = 0x00E5,
    MhfAddGuildMissionCount = 0x00E6,
    MhfSetGuildMissionTarget = 0x00E7,
    MhfCancelGuildMissionTarget = 0x00E8,
    MhfLoadOtomoAirou = 0x00E9,
    MhfSaveOtomoAirou = 0x00EA,
    MhfEnumerateGuildTresure = 0x00EB,
    MhfEnumerateAiroulist = 0x00EC,
    MhfRegistGuildTresure = 0x00ED,
    MhfAcquireGuildTresure = 0x00EE,
    MhfOperateGuildTresureReport = 0x00EF,
    MhfGetGuildTresureSouvenir = 0x00F0,
    MhfAcquireGuildTresureSouvenir = 0x00F1,
    MhfEnumerateFestaIntermediatePrize = 0x00F2,
    MhfAcquireFestaIntermediatePrize = 0x00F3,

    //=== Decorations, cooking and navi ===//
    MhfLoadDecoMyset = 0x00F4,
    MhfSaveDecoMyset = 0x00F5,
    SysReserveF6 = 0x00F6,
    MhfLoadGuildCooking = 0x00F7,
    MhfRegistGuildCooking = 0x00F8,
    MhfLoadGuildAdventure = 0x00F9,
    MhfRegistGuildAdventure = 0x00FA,
    MhfAcquireGuildAdventure = 0x00FB,
    MhfChargeGuildAdventure = 0x00FC,
    MhfLoadLegendDispatch = 0x00FD,
    MhfLoadHunterNavi = 0x00FE,
    MhfSaveHunterNavi = 0x00FF,
    MhfRegistSpabiTime = 0x0100,

    //=== Guild bonuses, tower and notices ===//
    MhfGetGuildWeeklyBonusMaster = 0x0101,
    MhfGetGuildWeeklyBonusActiveCount = 0x0102,
    MhfAddGuildWeeklyBonusExceptionalUser = 0x0103,
    MhfGetTowerInfo = 0x0104,
    MhfPostTowerInfo = 0x0105,
    MhfGetGemInfo = 0x0106,
    MhfPostGemInfo = 0x0107,
    MhfGetEarthValue = 0x0108,
    MhfDebugPostValue = 0x0109,
    MhfGetPaperData = 0x010A,
    MhfGetNotice = 0x010B,
    MhfPostNotice = 0x010C,
    MhfGetBoostTime = 0x010D,
    MhfPostBoostTime = 0x010E,
    MhfGetBoostTimeLimit = 0x010F,
    MhfPostBoostTimeLimit = 0x0110,

    //=== Festa prizes, cafe and gacha ===//
    MhfEnumerateFestaPersonalPrize = 0x0111,
    MhfAcquireFestaPersonalPrize = 0x0112,
    MhfGetRandFromTable = 0x0113,
    MhfGetCafeDuration = 0x0114,
    MhfGetCafeDurationBonusInfo = 0x0115,
    MhfReceiveCafeDurationBonus = 0x0116,
    MhfPostCafeDurationBonusReceived = 0x0117,
    MhfGetGachaPoint = 0x0118,
    MhfUseGachaPoint = 0x0119,
    MhfExchangeFpoint2Item = 0x011A,
    MhfExchangeItem2Fpoint = 0x011B,
    MhfGetFpointExchangeList = 0x011C,
    MhfPlayStepupGacha = 0x011D,
    MhfReceiveGachaItem = 0x011E,
    MhfGetStepupStatus = 0x011F,
    MhfPlayFreeGacha = 0x0120,
    MhfGetTinyBin = 0x0121,
    MhfPostTinyBin = 0x0122,
    MhfGetSenyuDailyCount = 0x0123,
    MhfGetGuildTargetMemberNum = 0x0124,
    MhfGetBoostRight = 0x0125,
    MhfStartBoostTime = 0x0126,
    MhfPostBoostTimeQuestReturn = 0x0127,
    MhfGetBoxGachaInfo = 0x0128,
    MhfPlayBoxGacha = 0x0129,
    MhfResetBoxGachaInfo = 0x012A,

    //=== Sieges and guild scouting ===//
    MhfGetSeibattle = 0x012B,
    MhfPostSeibattle = 0x012C,
    MhfGetRyoudama = 0x012D,
    MhfPostRyoudama = 0x012E,
    MhfGetTenrouirai = 0x012F,
    MhfPostTenrouirai = 0x0130,
    MhfPostGuildScout = 0x0131,
    MhfCancelGuildScout = 0x0132,
    MhfAnswerGuildScout = 0x0133,
    MhfGetGuildScoutList = 0x0134,
    MhfGetGuildManageRight = 0x0135,
    MhfSetGuildManageRight = 0x0136,

    //=== Daily missions and history ===//
    MhfPlayNormalGacha = 0x0137,
    MhfGetDailyMissionMaster = 0x0138,
    MhfGetDailyMissionPersonal = 0x0139,
    MhfSetDailyMissionPersonal = 0x013A,
    MhfGetGachaPlayHistory = 0x013B,
    MhfGetRejectGuildScout = 0x013C,
    MhfSetRejectGuildScout = 0x013D,
    MhfGetCaAchievementHist = 0x013E,
    MhfSetCaAchievementHist = 0x013F,
    MhfGetKeepLoginBoostStatus = 0x0140,

    //=== Diva defense ===//
    MhfUseKeepLoginBoost = 0x0141,
    MhfGetUdSchedule = 0x0142,
    MhfGetUdInfo = 0x0143,
    MhfGetKijuInfo = 0x0144,
    MhfSetKiju = 0x0145,
    MhfAddUdPoint = 0x0146,
    MhfGetUdMyPoint = 0x0147,
    MhfGetUdTotalPointInfo = 0x0148,
    MhfGetUdBonusQuestInfo = 0x0149,
    MhfGetUdSelectedColorInfo = 0x014A,
    MhfGetUdMonsterPoint = 0x014B,
    MhfGetUdDailyPresentList = 0x014C,
    MhfGetUdNormaPresentList = 0x014D,
    MhfGetUdRankingRewardList = 0x014E,
    MhfAcquireUdItem = 0x014F,
    MhfGetRewardSong = 0x0150,
    MhfUseRewardSong = 0x0151,
    MhfAddRewardSongCount = 0x0152,
    MhfGetUdRanking = 0x0153,
    MhfGetUdMyRanking = 0x0154,
    MhfAcquireMonthlyReward = 0x0155,
    MhfGetUdGuildMapInfo = 0x0156,
    MhfGenerateUdGuildMap = 0x0157,
    MhfGetUdTacticsPoint = 0x0158,
    MhfAddUdTacticsPoint = 0x0159,
    MhfGetUdTacticsRanking = 0x015A,
    MhfGetUdTacticsRewardList = 0x015B,
    MhfGetUdTacticsLog = 0x015C,

    //=== Equipment, minidata and lobby ===//
    MhfGetEquipSkinHist = 0x015D,
    MhfUpdateEquipSkinHist = 0x015E,
    MhfGetUdTacticsFollower = 0x015F,
    MhfSetUdTacticsFollower = 0x0160,
    MhfGetUdShopCoin = 0x0161,
    MhfUseUdShopCoin = 0x0162,
    MhfGetEnhancedMinidata = 0x0163,
    MhfSetEnhancedMinidata = 0x0164,
    MhfSexChanger = 0x0165,
    MhfGetLobbyCrowd = 0x0166,
    SysReserve167 = 0x0167,

    //=== Late additions ===//
    MhfGuildHuntdata = 0x0168,
    MhfAddKouryouPoint = 0x0169,
    MhfGetKouryouPoint = 0x016A,
    MhfExchangeKouryouPoint = 0x016B,
    MhfGetUdTacticsBonusQuest = 0x016C,
    MhfGetUdTacticsFirstQuestBonus = 0x016D,
    MhfGetUdTacticsRemainingPoint = 0x016E,
    SysReserve16F = 0x016F,
    MhfLoadPlateMyset = 0x0170,
    MhfSavePlateMyset = 0x0171,
    SysReserve172 = 0x0172,
    MhfGetRestrictionEvent = 0x0173,
    MhfSetRestrictionEvent = 0x0174,
    // Provisional ids, not yet confirmed against a client capture; see
    // `Opcode::is_provisional`
    MhfEnumerateQuest = 0x0175,
    MhfTransitMessage = 0x0176,
    MhfGetTrendWeapon = 0x0177,
    MhfUpdateUseTrendWeaponLog = 0x0178,
    SysReserve179 = 0x0179,
    SysReserve17A = 0x017A,
    SysReserve17B = 0x017B,
    SysReserve17C = 0x017C,
    SysReserve17D = 0x017D,
    MhfSaveRengokuData = 0x017E,
    MhfLoadRengokuData = 0x017F,
    MhfGetRengokuBinary = 0x0180,
    MhfEnumerateRengokuRanking = 0x0181,
    MhfGetRengokuRankingRank = 0x0182,
    MhfAcquireExchangeShop = 0x0183,
    SysReserve184 = 0x0184,
    MhfSaveMezfesData = 0x0185,
    MhfLoadMezfesData = 0x0186,
    SysReserve187 = 0x0187,
    SysReserve188 = 0x0188,
    MhfUpdateForceGuildRank = 0x0189,
    MhfResetTitle = 0x018A,
    MhfEnumerateGuildMessageBoard = 0x018B,
    MhfUpdateGuildMessageBoard = 0x018C,
    SysReserve18D = 0x018D,
    SysReserve18E = 0x018E,
    SysReserve18F = 0x018F,
    SysReserve190 = 0x0190,
    SysReserve191 = 0x0191,
    SysReserve192 = 0x0192,
    SysReserve193 = 0x0193,
    SysReserve194 = 0x0194,
    SysReserve195 = 0x0195,
    SysReserve196 = 0x0196,
    SysReserve197 = 0x0197,
    SysReserve198 = 0x0198,
    SysReserve199 = 0x0199,
    SysReserve19A = 0x019A,
    SysReserve19B = 0x019B,
    SysReserve19C = 0x019C,
    SysReserve19D = 0x019D,
    SysReserve19E = 0x019E,
    SysReserve19F = 0x019F,
    SysReserve1A0 = 0x01A0,
    SysReserve1A1 = 0x01A1,
    SysReserve1A2 = 0x01A2,
    SysReserve1A3 = 0x01A3,
    SysReserve1A4 = 0x01A4,
    SysReserve1A5 = 0x01A5,
    SysReserve1A6 = 0x01A6,
    SysReserve1A7 = 0x01A7,
    SysReserve1A8 = 0x01A8,
    SysReserve1A9 = 0x01A9,
    SysReserve1AA = 0x01AA,
    SysReserve1AB = 0x01AB,
    SysReserve1AC = 0x01AC,
    SysReserve1AD = 0x01AD,
    SysReserve1AE = 0x01AE,
    SysReserve1AF = 0x01AF,
}

impl Opcode {
    /// Highest defined opcode
    pub const MAX: u16 = 0x01AF;

    #[inline]
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Slots kept as placeholders by the client
    pub fn is_reserved(self) -> bool {
        self.name().starts_with("SysReserve") && self != Opcode::SysReserveStage
    }

    /// Slots whose wire id is assumed rather than taken from a client
    /// capture; traffic for these may arrive under a different id
    pub fn is_provisional(self) -> bool {
        matches!(self, Opcode::MhfEnumerateQuest | Opcode::MhfTransitMessage)
    }
}

impl From<Opcode> for u16 {
    fn from(op: Opcode) -> u16 {
        op as u16
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_dense() {
        assert_eq!(Opcode::ALL.len(), Opcode::MAX as usize + 1);
        for (i, op) in Opcode::ALL.iter().enumerate() {
            assert_eq!(op.as_u16() as usize, i);
            assert_eq!(Opcode::from_u16(i as u16), Some(*op));
        }
    }

    #[test]
    fn test_past_the_end() {
        assert_eq!(Opcode::from_u16(Opcode::MAX + 1), None);
        assert_eq!(Opcode::from_u16(u16::MAX), None);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(Opcode::SysAck.as_u16(), 0x0012);
        assert_eq!(Opcode::SysLogin.as_u16(), 0x0014);
        assert_eq!(Opcode::MhfSavedata.as_u16(), 0x0070);
        assert_eq!(Opcode::MhfUpdateGuildMessageBoard.as_u16(), 0x018C);
    }

    #[test]
    fn test_provisional_slots() {
        let provisional: Vec<u16> = Opcode::ALL
            .iter()
            .filter(|op| op.is_provisional())
            .map(|op| op.as_u16())
            .collect();
        assert_eq!(provisional, vec![0x0175, 0x0176]);
        assert!(!Opcode::MhfEnumerateQuest.is_reserved());
    }

    #[test]
    fn test_names() {
        assert_eq!(Opcode::SysPing.to_string(), "SysPing");
        assert_eq!(Opcode::from_u16(0x0001).unwrap().name(), "SysReserve01");
        assert_eq!(Opcode::from_u16(0x01AF).unwrap().name(), "SysReserve1AF");
    }

    #[test]
    fn test_reserved_slots() {
        assert!(Opcode::SysReserve4A.is_reserved());
        assert!(Opcode::SysReserve167.is_reserved());
        assert!(!Opcode::SysReserveStage.is_reserved());
        assert!(!Opcode::SysAck.is_reserved());
    }
}
