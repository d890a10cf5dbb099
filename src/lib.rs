// ============================================================================
// ZXING SCANNER - Hook de Yew para escanear códigos con la cámara
// ============================================================================
// Capas:
// - Hooks: use_zxing (NodeRef del <video>) y use_video_devices
// - State: decoder memoizado por (hints, intervalo), sesión start/stop y
//   controlador que la sincroniza con el <video> en cada render
// - Services: contrato ContinuousDecoder y su implementación sobre ZXing
// - Models: opciones, pistas y constraints de cámara
// - Utils: FFI hacia window.ZXing
// ============================================================================

pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

pub use config::{ScannerConfig, CONFIG, DEFAULT_TIME_BETWEEN_SCANS_MS};
pub use hooks::{use_video_devices, use_zxing, UseVideoDevicesHandle, UseZxingHandle};
pub use models::{
    BarcodeFormat, CameraSource, DecodeHintType, DecodeHints, FacingMode, HintValue,
    MediaConstraints, UseZxingOptions,
};
pub use services::{ScanError, VideoInputDevice, ZxingResult};
