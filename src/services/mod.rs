pub mod decoder;
pub mod zxing_decoder;

pub use decoder::{AttemptGate, ContinuousDecoder, DecodeCallback};
pub use zxing_decoder::{ScanError, VideoInputDevice, ZxingDecoder, ZxingResult};
