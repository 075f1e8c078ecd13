//! # Message Trait
//!
//! Every opcode slot is backed by one type implementing [`Message`]. A value
//! is created empty by the registry, filled by [`Message::decode`], and
//! handed to the game layer as `Box<dyn Message>`, which recovers the
//! concrete type with [`downcast_ref`](trait.Message.html#method.downcast_ref).
//!
//! # Message Format
//!
//! ```text
//! [u16 BE opcode][fields...]
//! ```
//!
//! Decode and encode see only the fields; the opcode is handled by the
//! registry. Most messages open with a `u32` ack handle that the server
//! echoes back in its `SysAck`.
//!
//! Simple layouts are declared with `wire_messages!`, which derives both
//! directions from one ordered field list. Layouts that depend on the client
//! version or on earlier field values are written out by hand.

use std::any::Any;
use std::fmt;

use hunterd_core::{ClientContext, HunterError, Result};

use crate::byteframe::ByteFrame;
use crate::opcode::Opcode;

/// Upcast helper so trait objects can be downcast to their concrete type
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any + Send>;
}

impl<T: Any + Send> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send> {
        self
    }
}

/// A message that can be read from and written to the wire
pub trait Message: AsAny + Send + Sync + fmt::Debug {
    /// The slot this message occupies
    fn opcode(&self) -> Opcode;

    /// Fill `self` from `bf`, which is positioned just past the opcode
    ///
    /// Truncated input is reported through the frame's sticky read error;
    /// the caller checks it once decoding returns.
    fn decode(&mut self, bf: &mut ByteFrame, ctx: &ClientContext) -> Result<()>;

    /// Append the fields of `self` (not the opcode) to `bf`
    fn encode(&self, bf: &mut ByteFrame, ctx: &ClientContext) -> Result<()>;
}

impl dyn Message {
    pub fn is<T: Message>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Message>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Take ownership of the concrete message; `None` if it is another type
    pub fn downcast<T: Message>(self: Box<Self>) -> Option<Box<T>> {
        if self.is::<T>() {
            self.into_any().downcast::<T>().ok()
        } else {
            None
        }
    }
}

/// Error for a slot whose layout is unknown
pub fn not_implemented(opcode: Opcode) -> HunterError {
    HunterError::NotImplemented {
        opcode: opcode.as_u16(),
        name: opcode.name(),
    }
}

/// Stand-in for reserved slots and messages whose layout is unknown
///
/// Both directions fail with [`HunterError::NotImplemented`] and leave the
/// frame untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    opcode: Opcode,
}

impl Placeholder {
    pub fn new(opcode: Opcode) -> Self {
        Self { opcode }
    }
}

impl Message for Placeholder {
    fn opcode(&self) -> Opcode {
        self.opcode
    }

    fn decode(&mut self, _bf: &mut ByteFrame, _ctx: &ClientContext) -> Result<()> {
        Err(not_implemented(self.opcode))
    }

    fn encode(&self, _bf: &mut ByteFrame, _ctx: &ClientContext) -> Result<()> {
        Err(not_implemented(self.opcode))
    }
}

/// Declare messages that carry no fields
macro_rules! empty_messages {
    ($($(#[$meta:meta])* $name:ident => $opcode:ident,)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $name;

            impl $crate::message::Message for $name {
                fn opcode(&self) -> $crate::opcode::Opcode {
                    $crate::opcode::Opcode::$opcode
                }

                fn decode(
                    &mut self,
                    _bf: &mut $crate::byteframe::ByteFrame,
                    _ctx: &::hunterd_core::ClientContext,
                ) -> ::hunterd_core::Result<()> {
                    Ok(())
                }

                fn encode(
                    &self,
                    _bf: &mut $crate::byteframe::ByteFrame,
                    _ctx: &::hunterd_core::ClientContext,
                ) -> ::hunterd_core::Result<()> {
                    Ok(())
                }
            }
        )*
    };
}

/// Declare messages whose fields are read and written in a fixed order
///
/// A field is `name: Type`, using the type's [`Field`](crate::wire::Field)
/// impl, or `name: Type as codec` to pick a module from [`crate::wire`].
macro_rules! wire_messages {
    (@read $bf:ident, $ty:ty) => {
        <$ty as $crate::wire::Field>::read($bf)
    };
    (@read $bf:ident, $ty:ty, $codec:ident) => {
        $crate::wire::$codec::read($bf)
    };
    (@write $bf:ident, $val:expr, $ty:ty) => {
        $crate::wire::Field::write($val, $bf)
    };
    (@write $bf:ident, $val:expr, $ty:ty, $codec:ident) => {
        $crate::wire::$codec::write($bf, $val)
    };
    ($(
        $(#[$meta:meta])*
        $name:ident => $opcode:ident {
            $($(#[$fmeta:meta])* $field:ident: $ty:ty $(as $codec:ident)?),* $(,)?
        }
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq)]
            pub struct $name {
                $($(#[$fmeta])* pub $field: $ty,)*
            }

            impl $crate::message::Message for $name {
                fn opcode(&self) -> $crate::opcode::Opcode {
                    $crate::opcode::Opcode::$opcode
                }

                fn decode(
                    &mut self,
                    bf: &mut $crate::byteframe::ByteFrame,
                    _ctx: &::hunterd_core::ClientContext,
                ) -> ::hunterd_core::Result<()> {
                    $(self.$field = wire_messages!(@read bf, $ty $(, $codec)?);)*
                    Ok(())
                }

                fn encode(
                    &self,
                    bf: &mut $crate::byteframe::ByteFrame,
                    _ctx: &::hunterd_core::ClientContext,
                ) -> ::hunterd_core::Result<()> {
                    $(wire_messages!(@write bf, &self.$field, $ty $(, $codec)?);)*
                    Ok(())
                }
            }
        )*
    };
}

/// Implement the boilerplate half of [`Message`] for a hand-written layout
///
/// The type provides inherent `read_fields` and `write_fields` methods.
macro_rules! impl_message {
    ($($name:ident => $opcode:ident,)*) => {
        $(
            impl $crate::message::Message for $name {
                fn opcode(&self) -> $crate::opcode::Opcode {
                    $crate::opcode::Opcode::$opcode
                }

                fn decode(
                    &mut self,
                    bf: &mut $crate::byteframe::ByteFrame,
                    ctx: &::hunterd_core::ClientContext,
                ) -> ::hunterd_core::Result<()> {
                    self.read_fields(bf, ctx);
                    Ok(())
                }

                fn encode(
                    &self,
                    bf: &mut $crate::byteframe::ByteFrame,
                    ctx: &::hunterd_core::ClientContext,
                ) -> ::hunterd_core::Result<()> {
                    self.write_fields(bf, ctx);
                    Ok(())
                }
            }
        )*
    };
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::sjis::PrefixedStr;

    wire_messages! {
        Sample => SysPing {
            ack_handle: u32,
            name: PrefixedStr as str8,
            ids: Vec<u32> as list8,
        }
    }

    #[test]
    fn test_declared_layout() {
        let msg = Sample {
            ack_handle: 0x0102_0304,
            name: "ab".into(),
            ids: vec![9],
        };
        let (bytes, back) = test_util::roundtrip(&msg, &ClientContext::default());
        assert_eq!(
            bytes,
            vec![0x01, 0x02, 0x03, 0x04, 0x03, b'a', b'b', 0x00, 0x01, 0x00, 0x00, 0x00, 0x09]
        );
        assert_eq!(back, msg);
    }

    #[test]
    fn test_placeholder_fails_both_ways() {
        let ctx = ClientContext::default();
        let mut msg = Placeholder::new(Opcode::SysReserve4A);
        let mut bf = ByteFrame::from_bytes(&[1, 2, 3]);

        let err = msg.decode(&mut bf, &ctx).unwrap_err();
        assert!(err.is_not_implemented());
        assert_eq!(bf.index(), 0);
        assert!(msg.encode(&mut ByteFrame::new(), &ctx).unwrap_err().is_not_implemented());
    }

    #[test]
    fn test_downcast() {
        let boxed: Box<dyn Message> = Box::new(Sample::default());
        assert!(boxed.is::<Sample>());
        assert!(boxed.downcast_ref::<Placeholder>().is_none());
        assert_eq!(boxed.downcast_ref::<Sample>().unwrap().ack_handle, 0);

        let owned = boxed.downcast::<Sample>().unwrap();
        assert_eq!(owned.ids, Vec::<u32>::new());
    }
}
