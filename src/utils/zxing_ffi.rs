// ============================================================================
// ZXING FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Wrappers para la build UMD de @zxing/library (window.ZXing)
// Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{HtmlVideoElement, MediaStreamConstraints};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ZXing, js_name = BrowserMultiFormatReader)]
    pub type BrowserMultiFormatReader;

    #[wasm_bindgen(constructor, js_namespace = ZXing)]
    pub fn new(hints: &JsValue) -> BrowserMultiFormatReader;

    #[wasm_bindgen(method, setter = timeBetweenDecodingAttempts)]
    pub fn set_time_between_decoding_attempts(this: &BrowserMultiFormatReader, ms: f64);

    /// `device_id = None` deja que ZXing elija la cámara
    #[wasm_bindgen(method, js_name = decodeFromVideoDevice)]
    pub fn decode_from_video_device(
        this: &BrowserMultiFormatReader,
        device_id: Option<&str>,
        video: &HtmlVideoElement,
        callback: &js_sys::Function,
    ) -> js_sys::Promise;

    #[wasm_bindgen(method, js_name = decodeFromConstraints)]
    pub fn decode_from_constraints(
        this: &BrowserMultiFormatReader,
        constraints: &MediaStreamConstraints,
        video: &HtmlVideoElement,
        callback: &js_sys::Function,
    ) -> js_sys::Promise;

    /// Detiene el bucle, libera el stream y limpia `video.srcObject`
    #[wasm_bindgen(method)]
    pub fn reset(this: &BrowserMultiFormatReader);

    /// Resuelve a `MediaDeviceInfo[]` (solo `videoinput`)
    #[wasm_bindgen(method, js_name = listVideoInputDevices)]
    pub fn list_video_input_devices(this: &BrowserMultiFormatReader) -> js_sys::Promise;
}

#[wasm_bindgen]
extern "C" {
    /// `ZXing.Result`
    #[wasm_bindgen(js_namespace = ZXing, js_name = Result)]
    #[derive(Debug, Clone)]
    pub type JsDecodeResult;

    #[wasm_bindgen(method, js_name = getText)]
    pub fn get_text(this: &JsDecodeResult) -> String;

    #[wasm_bindgen(method, js_name = getBarcodeFormat)]
    pub fn get_barcode_format(this: &JsDecodeResult) -> u32;

    #[wasm_bindgen(method, js_name = getTimestamp)]
    pub fn get_timestamp(this: &JsDecodeResult) -> f64;
}
