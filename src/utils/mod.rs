// Utils compartidos

pub mod zxing_ffi;

pub use zxing_ffi::*;
