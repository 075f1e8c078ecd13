//! Field codecs shared by message definitions
//!
//! Plain numeric fields implement [`Field`] and need no annotation in a
//! message definition. Fields whose wire shape is not implied by their Rust
//! type (length-prefixed strings, payloads, counted lists) name one of the
//! codec modules below, each exposing `read` and `write`.

use tracing::warn;

use crate::byteframe::ByteFrame;

/// A value with a single obvious wire form
pub trait Field: Sized {
    fn read(bf: &mut ByteFrame) -> Self;
    fn write(&self, bf: &mut ByteFrame);
}

macro_rules! numeric_fields {
    ($($ty:ty => $read:ident, $write:ident;)*) => {
        $(
            impl Field for $ty {
                #[inline]
                fn read(bf: &mut ByteFrame) -> Self {
                    bf.$read()
                }

                #[inline]
                fn write(&self, bf: &mut ByteFrame) {
                    bf.$write(*self)
                }
            }
        )*
    };
}

numeric_fields! {
    u8 => read_u8, write_u8;
    u16 => read_u16, write_u16;
    u32 => read_u32, write_u32;
    u64 => read_u64, write_u64;
    i8 => read_i8, write_i8;
    i16 => read_i16, write_i16;
    i32 => read_i32, write_i32;
    i64 => read_i64, write_i64;
    f32 => read_f32, write_f32;
    f64 => read_f64, write_f64;
    bool => read_bool, write_bool;
}

impl<T: Field, const N: usize> Field for [T; N] {
    fn read(bf: &mut ByteFrame) -> Self {
        std::array::from_fn(|_| T::read(bf))
    }

    fn write(&self, bf: &mut ByteFrame) {
        for v in self {
            v.write(bf);
        }
    }
}

/// Clamp a length to what its prefix can express
pub(crate) fn clamp_len(len: usize, max: usize, what: &str) -> usize {
    if len > max {
        warn!("{} of length {} exceeds its {} limit, truncating", what, len, max);
        max
    } else {
        len
    }
}

macro_rules! string_codecs {
    ($($name:ident => $read:ident, $write:ident;)*) => {
        $(
            pub mod $name {
                use crate::byteframe::ByteFrame;
                use crate::sjis::PrefixedStr;

                pub fn read(bf: &mut ByteFrame) -> PrefixedStr {
                    crate::sjis::$read(bf)
                }

                pub fn write(bf: &mut ByteFrame, v: &PrefixedStr) {
                    crate::sjis::$write(bf, v)
                }
            }
        )*
    };
}

string_codecs! {
    str8 => read_str8, write_str8;
    str16 => read_str16, write_str16;
    sjis8 => read_sjis8, write_sjis8;
    sjis16 => read_sjis16, write_sjis16;
}

macro_rules! payload_codecs {
    ($($name:ident: $len:ty => $read:ident, $write:ident;)*) => {
        $(
            /// Raw payload behind a length prefix
            pub mod $name {
                use crate::byteframe::ByteFrame;

                pub fn read(bf: &mut ByteFrame) -> Vec<u8> {
                    let n = bf.$read() as usize;
                    bf.read_bytes(n)
                }

                pub fn write(bf: &mut ByteFrame, v: &[u8]) {
                    let n = super::clamp_len(v.len(), <$len>::MAX as usize, "payload");
                    bf.$write(n as $len);
                    bf.write_bytes(&v[..n]);
                }
            }
        )*
    };
}

payload_codecs! {
    bytes8: u8 => read_u8, write_u8;
    bytes16: u16 => read_u16, write_u16;
    bytes32: u32 => read_u32, write_u32;
}

macro_rules! list_codecs {
    ($($name:ident: $len:ty => $read:ident, $write:ident;)*) => {
        $(
            /// Counted list of [`Field`](super::Field) values
            pub mod $name {
                use crate::byteframe::ByteFrame;
                use super::Field;

                pub fn read<T: Field>(bf: &mut ByteFrame) -> Vec<T> {
                    let n = bf.$read() as usize;
                    bf.read_vec(n, T::read)
                }

                pub fn write<T: Field>(bf: &mut ByteFrame, v: &[T]) {
                    let n = super::clamp_len(v.len(), <$len>::MAX as usize, "list");
                    bf.$write(n as $len);
                    for item in &v[..n] {
                        item.write(bf);
                    }
                }
            }
        )*
    };
}

list_codecs! {
    list8: u8 => read_u8, write_u8;
    list16: u16 => read_u16, write_u16;
    list32: u32 => read_u32, write_u32;
}

/// Declare a record that appears inside messages, with its [`Field`] impl
macro_rules! wire_struct {
    ($(
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$fmeta:meta])* $field:ident: $ty:ty),* $(,)?
        }
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq)]
            pub struct $name {
                $($(#[$fmeta])* pub $field: $ty,)*
            }

            impl $crate::wire::Field for $name {
                fn read(bf: &mut $crate::byteframe::ByteFrame) -> Self {
                    Self {
                        $($field: <$ty as $crate::wire::Field>::read(bf),)*
                    }
                }

                fn write(&self, bf: &mut $crate::byteframe::ByteFrame) {
                    $($crate::wire::Field::write(&self.$field, bf);)*
                }
            }
        )*
    };
}
