//! Core error types for hunterd

#[derive(thiserror::Error, Debug)]
pub enum HunterError {
    /// A read asked for more bytes than remain before the high-water mark.
    #[error("Read overflow: {requested} bytes requested at offset {offset}, {available} available")]
    ReadOverflow {
        offset: usize,
        requested: usize,
        available: usize,
    },

    /// A seek resolved to a position outside `[0, limit]`.
    #[error("Seek out of range: target {target} outside [0, {limit}]")]
    SeekOutOfRange { target: i64, limit: usize },

    /// The wire layout of this opcode has not been reverse-engineered.
    #[error("{name} (0x{opcode:04X}) is not implemented")]
    NotImplemented { opcode: u16, name: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HunterError {
    /// True for the permanent "unknown shape" class, as opposed to truncation
    /// or I/O failures.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, HunterError::NotImplemented { .. })
    }

    pub fn is_read_overflow(&self) -> bool {
        matches!(self, HunterError::ReadOverflow { .. })
    }
}

pub type Result<T> = std::result::Result<T, HunterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_implemented_display() {
        let err = HunterError::NotImplemented { opcode: 0x0001, name: "SysReserve01" };
        assert_eq!(err.to_string(), "SysReserve01 (0x0001) is not implemented");
        assert!(err.is_not_implemented());
        assert!(!err.is_read_overflow());
    }

    #[test]
    fn test_read_overflow_classification() {
        let err = HunterError::ReadOverflow { offset: 4, requested: 4, available: 1 };
        assert!(err.is_read_overflow());
        assert!(!err.is_not_implemented());
    }
}
