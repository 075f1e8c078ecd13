//! # hunterd Protocol Library
//!
//! Wire layer of the hunterd game server: everything between the raw bytes a
//! transport delivers and the typed messages game logic works with.
//!
//! ## Architecture
//!
//! ### 1. Buffer ([`byteframe`])
//! [`ByteFrame`], a seekable buffer with selectable byte order and a sticky
//! read-overflow state, so a decoder reads its fields in straight-line code
//! and checks once.
//!
//! ### 2. Compression ([`compression`])
//! The JPK decompressor for client game data and the nullcomp zero-run codec
//! used by save data.
//!
//! ### 3. Text ([`sjis`])
//! Shift_JIS and ASCII string fields. A string that cannot be transcoded is
//! sent as an empty field instead of failing the message.
//!
//! ### 4. Opcodes ([`opcode`])
//! The dense [`Opcode`] table, `0x0000..=0x01AF`.
//!
//! ### 5. Messages ([`message`], [`messages`])
//! The [`Message`] trait and one struct per known layout. Layouts may depend
//! on the client release, carried by [`ClientContext`].
//!
//! ### 6. Registry ([`registry`])
//! Opcode to message construction and `[opcode][payload]` framing.
//!
//! ## Usage Example
//!
//! ```rust
//! use hunterd_protocol::messages::MsgSysPing;
//! use hunterd_protocol::{decode_packet, encode_packet, ByteFrame, ClientContext};
//!
//! let ctx = ClientContext::default();
//! let bytes = encode_packet(&MsgSysPing { ack_handle: 7 }, &ctx).unwrap();
//!
//! let mut bf = ByteFrame::from_bytes(&bytes);
//! let msg = decode_packet(&mut bf, &ctx).unwrap().unwrap();
//! assert_eq!(msg.downcast_ref::<MsgSysPing>().unwrap().ack_handle, 7);
//! ```

pub mod byteframe;
pub mod compression;
pub mod opcode;
pub mod sjis;

#[macro_use]
pub mod wire;
#[macro_use]
pub mod message;

pub mod messages;
pub mod registry;

pub use byteframe::{ByteFrame, Endian, ReadOverflow};
pub use hunterd_core::{ClientContext, ClientVersion, HunterError, ProtocolConfig, Result};
pub use message::{Message, Placeholder};
pub use opcode::Opcode;
pub use sjis::PrefixedStr;
pub use registry::{
    decode_group, decode_message, decode_packet, encode_packet, from_opcode, new_message,
    GroupStop, PacketCodec, PacketGroup,
};
