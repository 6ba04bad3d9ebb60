use byteorder::ByteOrder;

use crate::{BE, LE};
use crate::endian::Endian;

/// Type-level byte order, for callers that fix the order at compile time.
pub trait Order: ByteOrder + Send + Sync + 'static {
    const ENDIAN: Endian;
    const NATIVE: bool;
}

impl Order for BE {
    const ENDIAN: Endian = Endian::Big;
    const NATIVE: bool = cfg!(target_endian = "big");
}

impl Order for LE {
    const ENDIAN: Endian = Endian::Little;
    const NATIVE: bool = cfg!(target_endian = "little");
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::NE;

    #[test]
    fn test_order_endian() {
        assert_eq!(BE::ENDIAN, Endian::Big);
        assert_eq!(LE::ENDIAN, Endian::Little);
        assert_eq!(NE::ENDIAN, Endian::NATIVE);
        assert!(NE::NATIVE);
        assert_ne!(BE::NATIVE, LE::NATIVE);
    }
}
