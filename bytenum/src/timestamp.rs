//! Millisecond timestamps, carried as a 64-bit signed count of milliseconds
//! since the Unix epoch.

use chrono::{DateTime, Utc};

use crate::codec;
use crate::endian::Endian;
use crate::error::Error;

pub const SIZEOF: usize = 8;

/// Sub-millisecond precision is dropped.
pub fn encode_timestamp(value: &DateTime<Utc>, endian: Endian) -> [u8; SIZEOF] {
    codec::encode_i64(value.timestamp_millis(), endian)
}

pub fn encode_timestamp_into(value: &DateTime<Utc>, buf: &mut [u8], endian: Endian) -> Result<(), Error> {
    codec::encode_into(value.timestamp_millis(), buf, endian)
}

/// Returns `default` for missing or short input, and for millisecond
/// counts outside the range `DateTime<Utc>` can represent.
pub fn decode_timestamp(
    bytes: Option<&[u8]>,
    default: Option<DateTime<Utc>>,
    endian: Endian,
) -> Option<DateTime<Utc>> {
    let Some(bytes) = bytes.filter(|b| b.len() >= SIZEOF) else {
        return default;
    };

    let millis = codec::decode_i64(Some(bytes), 0, endian);

    DateTime::<Utc>::from_timestamp_millis(millis).or_else(|| {
        log::debug!("timestamp of {} ms is out of range; using default", millis);
        default
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    fn instant() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_123).unwrap()
    }

    #[test]
    fn test_encode_is_i64_millis() {
        let bytes = encode_timestamp(&instant(), Endian::Big);
        assert_eq!(bytes, 1_700_000_000_123i64.to_be_bytes());

        let bytes = encode_timestamp(&instant(), Endian::Little);
        assert_eq!(bytes, 1_700_000_000_123i64.to_le_bytes());
    }

    #[test]
    fn test_round_trip() {
        for endian in [Endian::Big, Endian::Little] {
            let bytes = encode_timestamp(&instant(), endian);
            assert_eq!(decode_timestamp(Some(&bytes), None, endian), Some(instant()));
        }
    }

    #[test]
    fn test_pre_epoch() {
        let then = Utc.timestamp_millis_opt(-86_400_001).unwrap();
        let bytes = encode_timestamp(&then, Endian::Little);
        assert_eq!(decode_timestamp(Some(&bytes), None, Endian::Little), Some(then));
    }

    #[test]
    fn test_sub_millisecond_truncated() {
        let precise = instant() + chrono::Duration::microseconds(456);
        let bytes = encode_timestamp(&precise, Endian::Big);
        assert_eq!(decode_timestamp(Some(&bytes), None, Endian::Big), Some(instant()));
    }

    #[test]
    fn test_missing_or_short() {
        let fallback = Utc.timestamp_millis_opt(0).single();
        assert_eq!(decode_timestamp(None, None, Endian::Big), None);
        assert_eq!(decode_timestamp(None, fallback, Endian::Big), fallback);
        assert_eq!(decode_timestamp(Some(&[0x00; 7]), fallback, Endian::Big), fallback);
        assert_eq!(decode_timestamp(Some(&[]), None, Endian::Little), None);
    }

    #[test]
    fn test_out_of_range() {
        let bytes = codec::encode_i64(i64::MAX, Endian::Big);
        let fallback = Some(instant());
        assert_eq!(decode_timestamp(Some(&bytes), fallback, Endian::Big), fallback);
    }

    #[test]
    fn test_encode_into() {
        let mut buf = [0u8; 10];
        encode_timestamp_into(&instant(), &mut buf, Endian::Big).unwrap();
        assert_eq!(decode_timestamp(Some(&buf), None, Endian::Big), Some(instant()));

        let mut small = [0u8; 4];
        assert!(encode_timestamp_into(&instant(), &mut small, Endian::Big).is_err());
    }
}
