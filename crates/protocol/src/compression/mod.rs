//! Compression codecs for blobs embedded in message payloads
//!
//! Both codecs are pure functions over byte slices and keep no state between
//! calls, so any number of connections may use them at once.
//!
//! - [`jpk`]: LZ-style container for client game data (decode only)
//! - [`nullcomp`]: zero-run-length container for save data (both directions)

pub mod jpk;
pub mod nullcomp;
