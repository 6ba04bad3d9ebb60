use paste::paste;

use crate::order::Order;

/// A fixed-width primitive with a bit-exact byte layout.
pub trait ByteCodec: Copy {
    const SIZEOF: usize;
    const SIGNED: bool;

    /// Encoded form; always exactly `SIZEOF` bytes long.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default + Copy;

    /// Reads from the first `SIZEOF` bytes of `buf`, which must be at least
    /// that long.
    fn from_bytes<O: Order>(buf: &[u8]) -> Self;

    /// Writes into the first `SIZEOF` bytes of `buf`, which must be at least
    /// that long.
    fn into_bytes<O: Order>(&self, buf: &mut [u8]);

    fn try_from_bytes<O: Order>(buf: &[u8]) -> Option<Self> {
        if buf.len() < Self::SIZEOF {
            None
        } else {
            Some(Self::from_bytes::<O>(buf))
        }
    }

    fn to_bytes<O: Order>(&self) -> Self::Bytes {
        let mut bytes = Self::Bytes::default();
        self.into_bytes::<O>(bytes.as_mut());
        bytes
    }
}

macro_rules! impl_for {
    ($t:ident, $read:ident, $write:ident, $signed:ident) => {
        impl ByteCodec for $t {
            const SIZEOF: usize = std::mem::size_of::<$t>();
            const SIGNED: bool = $signed;

            type Bytes = [u8; std::mem::size_of::<$t>()];

            fn from_bytes<O: Order>(buf: &[u8]) -> Self {
                O::$read(buf)
            }

            fn into_bytes<O: Order>(&self, buf: &mut [u8]) {
                O::$write(buf, *self)
            }
        }
    };
}

macro_rules! impls_for {
    ([$($tname:ident),*], $signed:ident) => {
        $(
            paste! {
                impl_for!($tname, [<read_ $tname>], [<write_ $tname>], $signed);
            }
        )*
    };
}

// floats go through the unsigned integer codec of the same width
macro_rules! impl_float_for {
    ($t:ident, $bits:ident) => {
        impl ByteCodec for $t {
            const SIZEOF: usize = <$bits as ByteCodec>::SIZEOF;
            const SIGNED: bool = true;

            type Bytes = <$bits as ByteCodec>::Bytes;

            fn from_bytes<O: Order>(buf: &[u8]) -> Self {
                $t::from_bits(<$bits as ByteCodec>::from_bytes::<O>(buf))
            }

            fn into_bytes<O: Order>(&self, buf: &mut [u8]) {
                self.to_bits().into_bytes::<O>(buf)
            }
        }
    };
}

impls_for! { [i16, i32, i64], true }
impls_for! { [u16, u32, u64], false }

impl_float_for!(f32, u32);
impl_float_for!(f64, u64);
