// ============================================================================
// SCANNER COMPONENT
// ============================================================================
// Modal con el <video> de use_zxing. Solo presenta; el ciclo de vida de la
// cámara lo lleva el hook (se libera al desmontar el componente).
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use zxing_scanner::{
    use_zxing, BarcodeFormat, DecodeHints, ScanError, UseZxingOptions, ZxingResult,
};

const RESULT_VISIBLE_MS: u32 = 3000;

// NotFoundException llega en cada frame sin código; no es un fallo real
const NOT_FOUND: &str = "NotFoundException";

#[derive(Properties, PartialEq)]
pub struct ScannerProps {
    #[prop_or_default]
    pub device_id: Option<String>,
    pub on_close: Callback<()>,
    pub on_barcode_detected: Callback<String>,
}

#[derive(Clone, Debug, PartialEq)]
struct ScanResult {
    text: String,
    format: Option<BarcodeFormat>,
}

#[function_component(Scanner)]
pub fn scanner(props: &ScannerProps) -> Html {
    let scan_result = use_state(|| None::<ScanResult>);
    let last_error = use_state(|| None::<String>);
    let hide_timeout = use_mut_ref(|| None::<Timeout>);

    let on_result = {
        let scan_result = scan_result.clone();
        let last_error = last_error.clone();
        let on_barcode_detected = props.on_barcode_detected.clone();

        Callback::from(move |result: ZxingResult| {
            let scan = ScanResult {
                text: result.text(),
                format: result.barcode_format(),
            };
            log::info!("📱 [SCANNER] Código detectado: {} ({:?})", scan.text, scan.format);

            on_barcode_detected.emit(scan.text.clone());
            last_error.set(None);
            scan_result.set(Some(scan));

            // Reemplazar el timeout anterior lo cancela
            let scan_result = scan_result.clone();
            *hide_timeout.borrow_mut() = Some(Timeout::new(RESULT_VISIBLE_MS, move || {
                scan_result.set(None);
            }));
        })
    };

    let on_error = {
        let last_error = last_error.clone();

        Callback::from(move |error: ScanError| {
            if error.name().as_deref() == Some(NOT_FOUND) {
                return;
            }
            log::error!("❌ [SCANNER] {}", error);
            last_error.set(Some(error.to_string()));
        })
    };

    let mut options = UseZxingOptions::new()
        .hints(
            DecodeHints::new()
                .possible_formats([
                    BarcodeFormat::QrCode,
                    BarcodeFormat::Code128,
                    BarcodeFormat::Ean13,
                    BarcodeFormat::Ean8,
                    BarcodeFormat::DataMatrix,
                ])
                .try_harder(true),
        )
        .on_result(on_result)
        .on_error(on_error);
    if let Some(device_id) = &props.device_id {
        options = options.device_id(device_id.clone());
    }

    let zxing = use_zxing(options);
    let close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="scanner-modal active">
            <div class="scanner-overlay" onclick={close.clone()}></div>
            <div class="scanner-content">
                <div class="scanner-header">
                    <h2>{"Escanear código"}</h2>
                    <button class="btn-close" onclick={close}>{"✕"}</button>
                </div>

                <video ref={zxing.node_ref.clone()} class="scanner-viewport" muted={true} playsinline={true} />

                {
                    match &*scan_result {
                        Some(result) => html! {
                            <div class="scan-result success">
                                <div class="result-icon">{"✅"}</div>
                                <div class="result-text">
                                    <div class="tracking">{&result.text}</div>
                                    <div class="format">
                                        {result.format.map(|f| format!("{:?}", f)).unwrap_or_default()}
                                    </div>
                                </div>
                            </div>
                        },
                        None => html! {},
                    }
                }

                {
                    match &*last_error {
                        Some(message) => html! {
                            <div class="scan-result error">
                                <div class="result-icon">{"❌"}</div>
                                <div class="result-text">{message}</div>
                            </div>
                        },
                        None => html! {},
                    }
                }
            </div>
        </div>
    }
}
