// Device payload codecs
pub mod traits;

// Codecs
pub mod zenner;

pub use traits::{DecodeError, DecodeResult, UplinkCodec};
pub use zenner::{decode, decode_payload, encode, EasyProtectCodec};
