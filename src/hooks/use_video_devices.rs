// ============================================================================
// USE VIDEO DEVICES HOOK - Lista de cámaras para elegir deviceId
// ============================================================================

use yew::prelude::*;

use crate::config::CONFIG;
use crate::services::decoder::ContinuousDecoder;
use crate::services::zxing_decoder::{VideoInputDevice, ZxingDecoder};

#[derive(Clone)]
pub struct UseVideoDevicesHandle {
    pub devices: UseStateHandle<Vec<VideoInputDevice>>,
    pub loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_video_devices() -> UseVideoDevicesHandle {
    let devices = use_state(Vec::<VideoInputDevice>::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let refresh = {
        let devices = devices.clone();
        let loading = loading.clone();
        let error = error.clone();

        Callback::from(move |_| {
            let devices = devices.clone();
            let loading = loading.clone();
            let error = error.clone();

            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                // Lector temporal solo para enumerar; no abre la cámara
                let reader = ZxingDecoder::build(None, CONFIG.time_between_scans_ms);
                match reader.list_video_input_devices().await {
                    Ok(found) => {
                        log::info!("📷 [ZXING] {} cámaras disponibles", found.len());
                        error.set(None);
                        devices.set(found);
                    }
                    Err(e) => {
                        log::error!("❌ [ZXING] Error listando cámaras: {:?}", e);
                        error.set(Some("No se pudieron listar las cámaras".to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    // Cargar al montar
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    UseVideoDevicesHandle {
        devices,
        loading,
        error,
        refresh,
    }
}
