use chrono::{DateTime, Utc};
use paste::paste;
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::endian::Endian;
use crate::timestamp;

/// Fallback values handed to the decoders when input is missing or short.
///
/// Meant to be built once at the edge of an application (or loaded with
/// serde) and passed down, instead of each call site choosing its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub int16: i16,
    pub int32: i32,
    pub int64: i64,
    pub uint16: u16,
    pub uint32: u32,
    pub uint64: u64,
    pub float32: f32,
    pub float64: f64,
    pub timestamp: Option<DateTime<Utc>>,
}

macro_rules! decode_with_defaults {
    ($($t:ident => $field:ident),*) => {
        paste! {
            impl Defaults {
                $(
                    pub fn [<decode_ $t>](&self, bytes: Option<&[u8]>, endian: Endian) -> $t {
                        codec::decode(bytes, self.$field, endian)
                    }
                )*

                pub fn decode_timestamp(&self, bytes: Option<&[u8]>, endian: Endian) -> Option<DateTime<Utc>> {
                    timestamp::decode_timestamp(bytes, self.timestamp, endian)
                }
            }
        }
    };
}

decode_with_defaults! {
    i16 => int16,
    i32 => int32,
    i64 => int64,
    u16 => uint16,
    u32 => uint32,
    u64 => uint64,
    f32 => float32,
    f64 => float64
}
