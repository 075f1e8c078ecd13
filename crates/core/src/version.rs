//! Client release enumeration and the per-connection version context

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HunterError;

/// Known client releases, oldest first
///
/// Layout differences between releases are expressed as ordering checks
/// ("at or after `G1`"), so the declaration order here is wire contract.
/// New releases are appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClientVersion {
    S1,
    S15,
    S2,
    S25,
    S3,
    S35,
    S4,
    S45,
    S5,
    S55,
    S6,
    S7,
    S8,
    S85,
    S9,
    S10,
    FW1,
    FW2,
    FW3,
    FW4,
    FW5,
    G1,
    G2,
    G3,
    G31,
    G32,
    GG,
    G5,
    G51,
    G52,
    G6,
    G61,
    G7,
    G8,
    G81,
    G9,
    G91,
    G10,
    G101,
    Z1,
    Z2,
    ZZ,
}

impl ClientVersion {
    /// Every release in protocol order
    pub const ALL: [ClientVersion; 42] = [
        Self::S1, Self::S15, Self::S2, Self::S25, Self::S3, Self::S35, Self::S4,
        Self::S45, Self::S5, Self::S55, Self::S6, Self::S7, Self::S8, Self::S85,
        Self::S9, Self::S10, Self::FW1, Self::FW2, Self::FW3, Self::FW4, Self::FW5,
        Self::G1, Self::G2, Self::G3, Self::G31, Self::G32, Self::GG, Self::G5,
        Self::G51, Self::G52, Self::G6, Self::G61, Self::G7, Self::G8, Self::G81,
        Self::G9, Self::G91, Self::G10, Self::G101, Self::Z1, Self::Z2, Self::ZZ,
    ];

    /// The newest release this crate knows about
    pub const LATEST: ClientVersion = ClientVersion::ZZ;

    /// Short identifier, identical to the serde name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S1 => "S1",
            Self::S15 => "S15",
            Self::S2 => "S2",
            Self::S25 => "S25",
            Self::S3 => "S3",
            Self::S35 => "S35",
            Self::S4 => "S4",
            Self::S45 => "S45",
            Self::S5 => "S5",
            Self::S55 => "S55",
            Self::S6 => "S6",
            Self::S7 => "S7",
            Self::S8 => "S8",
            Self::S85 => "S85",
            Self::S9 => "S9",
            Self::S10 => "S10",
            Self::FW1 => "FW1",
            Self::FW2 => "FW2",
            Self::FW3 => "FW3",
            Self::FW4 => "FW4",
            Self::FW5 => "FW5",
            Self::G1 => "G1",
            Self::G2 => "G2",
            Self::G3 => "G3",
            Self::G31 => "G31",
            Self::G32 => "G32",
            Self::GG => "GG",
            Self::G5 => "G5",
            Self::G51 => "G51",
            Self::G52 => "G52",
            Self::G6 => "G6",
            Self::G61 => "G61",
            Self::G7 => "G7",
            Self::G8 => "G8",
            Self::G81 => "G81",
            Self::G9 => "G9",
            Self::G91 => "G91",
            Self::G10 => "G10",
            Self::G101 => "G101",
            Self::Z1 => "Z1",
            Self::Z2 => "Z2",
            Self::ZZ => "ZZ",
        }
    }

    /// Position in [`ClientVersion::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ClientVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientVersion {
    type Err = HunterError;

    /// Parse a release name, ignoring case ("zz", "G10.1" and "G101" are accepted)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '.')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| HunterError::Config(format!("unknown client version: {s:?}")))
    }
}

/// Per-connection protocol context
///
/// Created once at session negotiation and only ever read afterwards. It is
/// `Copy`, so concurrent decode/encode calls on one connection can each hold
/// their own reference without coordination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientContext {
    pub version: ClientVersion,
}

impl ClientContext {
    pub const fn new(version: ClientVersion) -> Self {
        Self { version }
    }

    /// True when the negotiated release is `version` or newer
    #[inline]
    pub fn at_least(&self, version: ClientVersion) -> bool {
        self.version >= version
    }

    /// True when the negotiated release is strictly older than `version`
    #[inline]
    pub fn before(&self, version: ClientVersion) -> bool {
        self.version < version
    }
}

impl Default for ClientContext {
    fn default() -> Self {
        Self::new(ClientVersion::LATEST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versions_are_ordered() {
        for pair in ClientVersion::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should precede {}", pair[0], pair[1]);
        }
        assert_eq!(ClientVersion::ALL.len(), ClientVersion::ZZ.index() + 1);
    }

    #[test]
    fn test_parse_version_names() {
        assert_eq!("ZZ".parse::<ClientVersion>().unwrap(), ClientVersion::ZZ);
        assert_eq!("g10.1".parse::<ClientVersion>().unwrap(), ClientVersion::G101);
        assert_eq!(" fw5 ".parse::<ClientVersion>().unwrap(), ClientVersion::FW5);
        assert!("H1".parse::<ClientVersion>().is_err());
    }

    #[test]
    fn test_context_comparisons() {
        let ctx = ClientContext::new(ClientVersion::G8);
        assert!(ctx.at_least(ClientVersion::G8));
        assert!(ctx.at_least(ClientVersion::S1));
        assert!(!ctx.at_least(ClientVersion::Z1));
        assert!(ctx.before(ClientVersion::G81));
        assert!(!ctx.before(ClientVersion::G8));
    }

    #[test]
    fn test_serde_uses_short_names() {
        let json = serde_json::to_string(&ClientVersion::G101).unwrap();
        assert_eq!(json, "\"G101\"");
        let back: ClientVersion = serde_json::from_str("\"FW3\"").unwrap();
        assert_eq!(back, ClientVersion::FW3);
    }
}
