// ============================================================================
// USE ZXING HOOK - Cámara + <video> + lector continuo de ZXing
// ============================================================================
// Devuelve un NodeRef que hay que asignar a un único <video>. Tras cada
// render se compara el <video> montado, el decoder y la fuente con los del
// bucle vigente: si algo cambió se para y se rearranca solo si hay <video>.
// Al desmontar se para siempre.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::models::options::UseZxingOptions;
use crate::services::zxing_decoder::{ScanError, ZxingDecoder, ZxingResult};
use crate::state::{DecodeListener, DecoderCache, ScanController};

/// Callbacks del último render. Cambiarlos no reinicia la cámara.
#[derive(Default)]
struct LatestCallbacks {
    on_result: Option<Callback<ZxingResult>>,
    on_error: Option<Callback<ScanError>>,
}

impl DecodeListener<ZxingResult, ScanError> for RefCell<LatestCallbacks> {
    fn on_result(&self, result: ZxingResult) {
        // Clonar antes de emitir: el callback puede disparar otro render
        let callback = self.borrow().on_result.clone();
        if let Some(callback) = callback {
            callback.emit(result);
        }
    }

    fn on_error(&self, error: ScanError) {
        log::debug!("📷 [ZXING] Intento fallido: {}", error);
        let callback = self.borrow().on_error.clone();
        if let Some(callback) = callback {
            callback.emit(error);
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseZxingHandle {
    pub node_ref: NodeRef,
}

#[hook]
pub fn use_zxing(options: UseZxingOptions) -> UseZxingHandle {
    let node_ref = use_node_ref();
    let cache = use_mut_ref(DecoderCache::<ZxingDecoder>::new);
    let callbacks = use_mut_ref(LatestCallbacks::default);
    let controller = use_mut_ref(ScanController::<ZxingDecoder>::new);

    {
        let mut latest = callbacks.borrow_mut();
        latest.on_result = options.on_result.clone();
        latest.on_error = options.on_error.clone();
    }

    let decoder = cache
        .borrow_mut()
        .get_or_build(options.hints.as_ref(), options.time_between_decoding_attempts);
    let source = options.resolve_source();

    {
        let node_ref = node_ref.clone();
        let controller = controller.clone();
        let listener: Rc<dyn DecodeListener<ZxingResult, ScanError>> = callbacks;

        // Sin dependencias: el <video> puede montarse o desmontarse sin que
        // cambie ninguna opción
        use_effect(move || {
            let video = node_ref.cast::<HtmlVideoElement>();
            controller
                .borrow_mut()
                .sync(&decoder, &source, video.as_ref(), listener);
            || ()
        });
    }

    use_effect_with((), move |_| move || controller.borrow_mut().stop());

    UseZxingHandle { node_ref }
}
