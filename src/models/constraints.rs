// ============================================================================
// MEDIA CONSTRAINTS - Descriptor de cámara para getUserMedia
// ============================================================================
// Se serializa con la forma exacta de MediaStreamConstraints del navegador
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacingMode {
    User,
    Environment,
    Left,
    Right,
}

/// Restricciones de la pista de vídeo. Los campos `None` no se envían.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoTrackConstraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facing_mode: Option<FacingMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<f64>,
}

/// `video: true | false | { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VideoConstraints {
    Enabled(bool),
    Track(VideoTrackConstraints),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaConstraints {
    pub audio: bool,
    pub video: VideoConstraints,
}

impl Default for MediaConstraints {
    /// Sin audio, cámara trasera
    fn default() -> Self {
        Self::facing(FacingMode::Environment)
    }
}

impl MediaConstraints {
    pub fn facing(mode: FacingMode) -> Self {
        Self {
            audio: false,
            video: VideoConstraints::Track(VideoTrackConstraints {
                facing_mode: Some(mode),
                ..Default::default()
            }),
        }
    }

    /// Convierte al objeto JS que espera `decodeFromConstraints`
    pub fn to_js(&self) -> Result<web_sys::MediaStreamConstraints, JsValue> {
        let value = serde_wasm_bindgen::to_value(self)?;
        Ok(value.unchecked_into())
    }
}

impl fmt::Display for MediaConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{:?}", self),
        }
    }
}
