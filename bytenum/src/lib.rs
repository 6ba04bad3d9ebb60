pub use byteorder::{BE, LE};
pub use byteorder::NativeEndian as NE;

pub mod codec;
pub use codec::{decode, decode_at, encode, encode_into, try_decode, try_encode};

pub mod defaults;
pub use defaults::Defaults;

pub mod endian;
pub use endian::Endian;

pub mod error;
pub use error::Error;

pub mod order;
pub use order::Order;

pub mod timestamp;
pub use timestamp::{decode_timestamp, encode_timestamp};

pub mod traits;
pub use traits::ByteCodec;
