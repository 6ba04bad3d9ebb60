//! Runtime byte order dispatch over [`ByteCodec`].
//!
//! Encoding always produces exactly `T::SIZEOF` bytes. Decoding is total:
//! missing input, or input shorter than `T::SIZEOF`, yields the caller's
//! default rather than an error. Bytes past `T::SIZEOF` are ignored.

use paste::paste;

use crate::endian::Endian;
use crate::error::Error;
use crate::traits::ByteCodec;
use crate::{BE, LE};

pub fn encode<T: ByteCodec>(value: T, endian: Endian) -> T::Bytes {
    match endian {
        Endian::Big => value.to_bytes::<BE>(),
        Endian::Little => value.to_bytes::<LE>(),
    }
}

/// Writes `value` into the front of `buf`; `buf` is left untouched when it
/// is too small.
pub fn encode_into<T: ByteCodec>(value: T, buf: &mut [u8], endian: Endian) -> Result<(), Error> {
    if buf.len() < T::SIZEOF {
        return Err(Error::BufferTooSmall {
            needed: T::SIZEOF,
            actual: buf.len(),
        });
    }

    match endian {
        Endian::Big => value.into_bytes::<BE>(buf),
        Endian::Little => value.into_bytes::<LE>(buf),
    }

    Ok(())
}

pub fn decode<T: ByteCodec>(bytes: Option<&[u8]>, default: T, endian: Endian) -> T {
    let Some(bytes) = bytes else {
        return default;
    };

    let value = match endian {
        Endian::Big => T::try_from_bytes::<BE>(bytes),
        Endian::Little => T::try_from_bytes::<LE>(bytes),
    };

    value.unwrap_or_else(|| {
        log::debug!(
            "short input of {} bytes for a {} byte value; using default",
            bytes.len(),
            T::SIZEOF
        );
        default
    })
}

/// Decodes from `bytes[offset..]`; an offset past the end counts as empty
/// input.
pub fn decode_at<T: ByteCodec>(bytes: Option<&[u8]>, offset: usize, default: T, endian: Endian) -> T {
    decode(bytes.map(|b| b.get(offset..).unwrap_or_default()), default, endian)
}

/// [`encode`] for a byte order supplied as an unchecked value, e.g. a
/// string or numeric flag.
pub fn try_encode<T, E>(value: T, order: E) -> Result<T::Bytes, Error>
where T: ByteCodec,
      E: TryInto<Endian>,
      Error: From<E::Error> {
    let endian = order.try_into()?;
    Ok(encode(value, endian))
}

/// [`decode`] for a byte order supplied as an unchecked value. Fails only
/// when the order is not recognised.
pub fn try_decode<T, E>(bytes: Option<&[u8]>, default: T, order: E) -> Result<T, Error>
where T: ByteCodec,
      E: TryInto<Endian>,
      Error: From<E::Error> {
    let endian = order.try_into()?;
    Ok(decode(bytes, default, endian))
}

macro_rules! typed_codec {
    ($($t:ident),*) => {
        $(
            paste! {
                pub fn [<encode_ $t>](value: $t, endian: Endian) -> <$t as ByteCodec>::Bytes {
                    encode(value, endian)
                }

                pub fn [<decode_ $t>](bytes: Option<&[u8]>, default: $t, endian: Endian) -> $t {
                    decode(bytes, default, endian)
                }
            }
        )*
    };
}

typed_codec!(i16, i32, i64, u16, u32, u64, f32, f64);
