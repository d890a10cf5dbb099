pub mod constraints;
pub mod hints;
pub mod options;

pub use constraints::{FacingMode, MediaConstraints, VideoConstraints, VideoTrackConstraints};
pub use hints::{BarcodeFormat, DecodeHintType, DecodeHints, HintValue};
pub use options::{CameraSource, UseZxingOptions};
