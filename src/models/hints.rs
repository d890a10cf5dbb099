// ============================================================================
// DECODE HINTS - Pistas para el lector de ZXing
// ============================================================================
// Los discriminantes coinciden con los enums numéricos de ZXing
// (DecodeHintType y BarcodeFormat), que es como se pasan a JS.
// ============================================================================

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DecodeHintType {
    Other = 0,
    PureBarcode = 1,
    PossibleFormats = 2,
    TryHarder = 3,
    CharacterSet = 4,
    AllowedLengths = 5,
    AssumeCode39CheckDigit = 6,
    AssumeGs1 = 7,
    ReturnCodabarStartEnd = 8,
    NeedResultPointCallback = 9,
    AllowedEanExtensions = 10,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BarcodeFormat {
    Aztec = 0,
    Codabar = 1,
    Code39 = 2,
    Code93 = 3,
    Code128 = 4,
    DataMatrix = 5,
    Ean8 = 6,
    Ean13 = 7,
    Itf = 8,
    Maxicode = 9,
    Pdf417 = 10,
    QrCode = 11,
    Rss14 = 12,
    RssExpanded = 13,
    UpcA = 14,
    UpcE = 15,
    UpcEanExtension = 16,
}

impl BarcodeFormat {
    pub const ALL: [BarcodeFormat; 17] = [
        BarcodeFormat::Aztec,
        BarcodeFormat::Codabar,
        BarcodeFormat::Code39,
        BarcodeFormat::Code93,
        BarcodeFormat::Code128,
        BarcodeFormat::DataMatrix,
        BarcodeFormat::Ean8,
        BarcodeFormat::Ean13,
        BarcodeFormat::Itf,
        BarcodeFormat::Maxicode,
        BarcodeFormat::Pdf417,
        BarcodeFormat::QrCode,
        BarcodeFormat::Rss14,
        BarcodeFormat::RssExpanded,
        BarcodeFormat::UpcA,
        BarcodeFormat::UpcE,
        BarcodeFormat::UpcEanExtension,
    ];

    /// Inverso del valor numérico que devuelve `Result.getBarcodeFormat()`
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|format| *format as u32 == code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintValue {
    Flag(bool),
    Text(String),
    Formats(Vec<BarcodeFormat>),
    Lengths(Vec<i32>),
}

impl HintValue {
    fn to_js(&self) -> JsValue {
        match self {
            HintValue::Flag(flag) => JsValue::from_bool(*flag),
            HintValue::Text(text) => JsValue::from_str(text),
            HintValue::Formats(formats) => formats
                .iter()
                .map(|format| JsValue::from(*format as u32))
                .collect::<js_sys::Array>()
                .into(),
            HintValue::Lengths(lengths) => lengths
                .iter()
                .map(|length| JsValue::from(*length))
                .collect::<js_sys::Array>()
                .into(),
        }
    }
}

/// Mapa hint -> valor. Las claves son únicas; insertar de nuevo reemplaza.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeHints {
    entries: BTreeMap<DecodeHintType, HintValue>,
}

impl DecodeHints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(mut self, kind: DecodeHintType, value: HintValue) -> Self {
        self.entries.insert(kind, value);
        self
    }

    pub fn possible_formats(self, formats: impl IntoIterator<Item = BarcodeFormat>) -> Self {
        self.insert(
            DecodeHintType::PossibleFormats,
            HintValue::Formats(formats.into_iter().collect()),
        )
    }

    pub fn try_harder(self, enabled: bool) -> Self {
        self.insert(DecodeHintType::TryHarder, HintValue::Flag(enabled))
    }

    pub fn pure_barcode(self, enabled: bool) -> Self {
        self.insert(DecodeHintType::PureBarcode, HintValue::Flag(enabled))
    }

    pub fn character_set(self, charset: impl Into<String>) -> Self {
        self.insert(DecodeHintType::CharacterSet, HintValue::Text(charset.into()))
    }

    pub fn get(&self, kind: DecodeHintType) -> Option<&HintValue> {
        self.entries.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DecodeHintType, &HintValue)> {
        self.entries.iter()
    }

    /// `Map<DecodeHintType, any>` tal como lo recibe el constructor del lector
    pub fn to_js(&self) -> js_sys::Map {
        let map = js_sys::Map::new();
        for (kind, value) in &self.entries {
            map.set(&JsValue::from(*kind as u32), &value.to_js());
        }
        map
    }
}
