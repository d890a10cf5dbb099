// ============================================================================
// STATE MODULE - Decoder memoizado + sesión de escaneo + controlador
// ============================================================================

pub mod decoder_cache;
pub mod scan_controller;
pub mod scan_session;

#[cfg(test)]
pub(crate) mod fake_decoder;

pub use decoder_cache::*;
pub use scan_controller::*;
pub use scan_session::*;
