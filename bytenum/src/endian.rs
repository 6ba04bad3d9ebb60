use std::fmt::Display;
use std::str::FromStr;

use crate::error::Error;

/// Byte order selector threaded through every encode and decode call.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Deserialize, serde::Serialize)]
pub enum Endian {
    Big,
    Little,
}

impl Endian {
    /// Network order; used whenever a caller does not pick one.
    pub const NETWORK: Self = Self::Big;

    /// Byte order of the host this crate was compiled for.
    pub const NATIVE: Self = if cfg!(target_endian = "big") {
        Self::Big
    } else {
        Self::Little
    };

    pub fn is_big(&self) -> bool {
        matches!(self, Self::Big)
    }

    pub fn is_little(&self) -> bool {
        matches!(self, Self::Little)
    }

    pub fn is_native(&self) -> bool {
        *self == Self::NATIVE
    }
}

impl Default for Endian {
    fn default() -> Self {
        Self::NETWORK
    }
}

impl Display for Endian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.is_big() { "BE" } else { "LE" })
    }
}

impl FromStr for Endian {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "big" | "be" | "big-endian" | "network" => Ok(Self::Big),
            "little" | "le" | "little-endian" => Ok(Self::Little),
            "native" => Ok(Self::NATIVE),
            _ => Err(Error::UnsupportedByteOrder(s.to_owned())),
        }
    }
}

impl TryFrom<&str> for Endian {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<u8> for Endian {
    type Error = Error;

    fn try_from(flag: u8) -> Result<Self, Self::Error> {
        match flag {
            0 => Ok(Self::Big),
            1 => Ok(Self::Little),
            n => Err(Error::UnsupportedByteOrder(n.to_string())),
        }
    }
}

impl From<Endian> for u8 {
    fn from(endian: Endian) -> Self {
        match endian {
            Endian::Big => 0,
            Endian::Little => 1,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_is_network() {
        assert_eq!(Endian::default(), Endian::Big);
        assert_eq!(Endian::NETWORK, Endian::Big);
    }

    #[test]
    fn test_native_matches_target() {
        assert_eq!(Endian::NATIVE.is_little(), cfg!(target_endian = "little"));
        assert!(Endian::NATIVE.is_native());
    }

    #[test]
    fn test_parse() {
        assert_eq!("BE".parse::<Endian>().unwrap(), Endian::Big);
        assert_eq!(" little-endian ".parse::<Endian>().unwrap(), Endian::Little);
        assert_eq!(Endian::try_from("network").unwrap(), Endian::Big);
        assert_eq!(Endian::try_from("native").unwrap(), Endian::NATIVE);

        assert_eq!(
            "middle".parse::<Endian>(),
            Err(Error::UnsupportedByteOrder("middle".to_owned()))
        );
    }

    #[test]
    fn test_flags() {
        assert_eq!(Endian::try_from(0u8).unwrap(), Endian::Big);
        assert_eq!(Endian::try_from(1u8).unwrap(), Endian::Little);
        assert_eq!(u8::from(Endian::Little), 1);
        assert!(matches!(Endian::try_from(7u8), Err(Error::UnsupportedByteOrder(s)) if s == "7"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Endian::Big.to_string(), "BE");
        assert_eq!(Endian::Little.to_string(), "LE");
    }
}
