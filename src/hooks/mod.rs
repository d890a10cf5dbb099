pub mod use_video_devices;
pub mod use_zxing;

pub use use_video_devices::{use_video_devices, UseVideoDevicesHandle};
pub use use_zxing::{use_zxing, UseZxingHandle};
