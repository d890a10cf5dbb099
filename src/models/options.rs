// ============================================================================
// USE ZXING OPTIONS - Configuración del hook
// ============================================================================

use yew::Callback;

use crate::config::CONFIG;
use crate::models::constraints::MediaConstraints;
use crate::models::hints::DecodeHints;
use crate::services::zxing_decoder::{ScanError, ZxingResult};

/// De dónde sale la cámara. Se resuelve una sola vez por render.
#[derive(Debug, Clone, PartialEq)]
pub enum CameraSource {
    ByDeviceId(String),
    ByConstraints(MediaConstraints),
}

impl CameraSource {
    /// `device_id` siempre gana sobre `constraints`
    pub fn resolve(device_id: Option<&str>, constraints: Option<&MediaConstraints>) -> Self {
        match (device_id, constraints) {
            (Some(device_id), _) => CameraSource::ByDeviceId(device_id.to_string()),
            (None, Some(constraints)) => CameraSource::ByConstraints(constraints.clone()),
            (None, None) => CameraSource::ByConstraints(MediaConstraints::default()),
        }
    }
}

#[derive(Clone)]
pub struct UseZxingOptions {
    pub hints: Option<DecodeHints>,
    pub time_between_decoding_attempts: u32,
    pub on_result: Option<Callback<ZxingResult>>,
    pub on_error: Option<Callback<ScanError>>,
    pub device_id: Option<String>,
    pub constraints: Option<MediaConstraints>,
}

impl Default for UseZxingOptions {
    fn default() -> Self {
        Self {
            hints: None,
            time_between_decoding_attempts: CONFIG.time_between_scans_ms,
            on_result: None,
            on_error: None,
            device_id: None,
            constraints: None,
        }
    }
}

impl UseZxingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hints(mut self, hints: DecodeHints) -> Self {
        self.hints = Some(hints);
        self
    }

    pub fn time_between_decoding_attempts(mut self, ms: u32) -> Self {
        self.time_between_decoding_attempts = ms;
        self
    }

    pub fn on_result(mut self, callback: Callback<ZxingResult>) -> Self {
        self.on_result = Some(callback);
        self
    }

    pub fn on_error(mut self, callback: Callback<ScanError>) -> Self {
        self.on_error = Some(callback);
        self
    }

    pub fn device_id(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    pub fn constraints(mut self, constraints: MediaConstraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    pub fn resolve_source(&self) -> CameraSource {
        CameraSource::resolve(self.device_id.as_deref(), self.constraints.as_ref())
    }
}
