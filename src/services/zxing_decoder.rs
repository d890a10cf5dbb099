// ============================================================================
// ZXING DECODER - ContinuousDecoder sobre BrowserMultiFormatReader
// ============================================================================

use std::cell::RefCell;
use std::fmt;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlVideoElement, MediaDeviceInfo};

use crate::models::constraints::MediaConstraints;
use crate::models::hints::{BarcodeFormat, DecodeHints};
use crate::services::decoder::{AttemptGate, ContinuousDecoder, DecodeCallback};
use crate::utils::zxing_ffi::{BrowserMultiFormatReader, JsDecodeResult};

type AttemptClosure = Closure<dyn FnMut(JsValue, JsValue)>;

/// Resultado de ZXing tal cual; el adaptador no lo inspecciona
#[derive(Debug, Clone)]
pub struct ZxingResult(JsDecodeResult);

impl ZxingResult {
    pub fn text(&self) -> String {
        self.0.get_text()
    }

    pub fn barcode_format(&self) -> Option<BarcodeFormat> {
        BarcodeFormat::from_code(self.0.get_barcode_format())
    }

    pub fn timestamp(&self) -> f64 {
        self.0.get_timestamp()
    }

    pub fn as_js(&self) -> &JsValue {
        self.0.as_ref()
    }
}

/// Excepción de ZXing o rechazo de getUserMedia, sin distinguir
#[derive(Debug, Clone)]
pub struct ScanError(JsValue);

impl ScanError {
    /// `NotFoundException`, `NotAllowedError`, ...
    pub fn name(&self) -> Option<String> {
        js_sys::Reflect::get(&self.0, &JsValue::from_str("name"))
            .ok()
            .and_then(|v| v.as_string())
    }

    pub fn message(&self) -> Option<String> {
        js_sys::Reflect::get(&self.0, &JsValue::from_str("message"))
            .ok()
            .and_then(|v| v.as_string())
    }

    pub fn as_js(&self) -> &JsValue {
        &self.0
    }
}

impl From<JsValue> for ScanError {
    fn from(value: JsValue) -> Self {
        Self(value)
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.name(), self.message()) {
            (Some(name), Some(message)) if !message.is_empty() => write!(f, "{}: {}", name, message),
            (Some(name), _) => f.write_str(&name),
            (None, Some(message)) => f.write_str(&message),
            (None, None) => write!(f, "{:?}", self.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoInputDevice {
    pub device_id: String,
    pub label: String,
}

pub struct ZxingDecoder {
    reader: BrowserMultiFormatReader,
    gate: AttemptGate,
    // Vive hasta el siguiente arranque o hasta que se suelte el decoder
    attempt_closure: RefCell<Option<AttemptClosure>>,
}

impl ZxingDecoder {
    /// Cámaras disponibles. Las etiquetas vienen vacías hasta que hay permiso.
    pub async fn list_video_input_devices(&self) -> Result<Vec<VideoInputDevice>, JsValue> {
        let devices = JsFuture::from(self.reader.list_video_input_devices()).await?;
        let devices: js_sys::Array = devices.dyn_into()?;

        Ok(devices
            .iter()
            .map(|device| {
                let info: MediaDeviceInfo = device.unchecked_into();
                VideoInputDevice {
                    device_id: info.device_id(),
                    label: info.label(),
                }
            })
            .collect())
    }

    fn install_closure(&self, callback: DecodeCallback<ZxingResult, ScanError>) -> js_sys::Function {
        let closure = Closure::wrap(Box::new(move |result: JsValue, error: JsValue| {
            let result = is_present(&result).then(|| ZxingResult(result.unchecked_into()));
            let error = is_present(&error).then(|| ScanError(error));
            callback(result, error);
        }) as Box<dyn FnMut(JsValue, JsValue)>);

        let function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        *self.attempt_closure.borrow_mut() = Some(closure);
        function
    }
}

fn is_present(value: &JsValue) -> bool {
    !value.is_undefined() && !value.is_null()
}

/// La promesa de arranque rechaza si no se puede abrir la cámara
fn forward_rejection(promise: js_sys::Promise, callback: DecodeCallback<ZxingResult, ScanError>) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(error) = JsFuture::from(promise).await {
            let error = ScanError(error);
            log::debug!("📷 [ZXING] No se pudo abrir la cámara: {}", error);
            callback(None, Some(error));
        }
    });
}

impl ContinuousDecoder for ZxingDecoder {
    type Surface = HtmlVideoElement;
    type Output = ZxingResult;
    type Error = ScanError;

    fn build(hints: Option<&DecodeHints>, time_between_attempts_ms: u32) -> Self {
        let js_hints: JsValue = match hints {
            Some(hints) => hints.to_js().into(),
            None => JsValue::NULL,
        };

        let reader = BrowserMultiFormatReader::new(&js_hints);
        reader.set_time_between_decoding_attempts(time_between_attempts_ms as f64);

        Self {
            reader,
            gate: AttemptGate::new(),
            attempt_closure: RefCell::new(None),
        }
    }

    fn decode_from_device_continuously(
        &self,
        device_id: &str,
        surface: &HtmlVideoElement,
        callback: DecodeCallback<ZxingResult, ScanError>,
    ) {
        let callback = self.gate.open(callback);
        let function = self.install_closure(callback.clone());
        let promise = self
            .reader
            .decode_from_video_device(Some(device_id), surface, &function);
        forward_rejection(promise, callback);
    }

    fn decode_from_constraints_continuously(
        &self,
        constraints: &MediaConstraints,
        surface: &HtmlVideoElement,
        callback: DecodeCallback<ZxingResult, ScanError>,
    ) {
        let callback = self.gate.open(callback);
        let js_constraints = match constraints.to_js() {
            Ok(js_constraints) => js_constraints,
            Err(e) => {
                callback(None, Some(ScanError(e)));
                return;
            }
        };

        let function = self.install_closure(callback.clone());
        let promise = self
            .reader
            .decode_from_constraints(&js_constraints, surface, &function);
        forward_rejection(promise, callback);
    }

    fn stop(&self) {
        self.gate.close();
        self.reader.reset();
    }
}

impl Drop for ZxingDecoder {
    fn drop(&mut self) {
        // El closure no puede soltarse con el bucle de JS todavía vivo
        self.reader.reset();
    }
}
