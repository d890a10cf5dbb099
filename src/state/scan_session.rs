// ============================================================================
// SCAN SESSION - Bucle de decodificación ligado a una superficie
// ============================================================================
// Como mucho un bucle activo por sesión. `start` para el anterior antes de
// abrir la cámara otra vez y `stop` se ejecuta también al soltar la sesión.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::models::options::CameraSource;
use crate::services::decoder::{ContinuousDecoder, DecodeCallback};
use crate::state::decoder_cache::DecoderHandle;

/// Receptor único de los intentos de decodificación
pub trait DecodeListener<R, E> {
    fn on_result(&self, result: R);
    fn on_error(&self, error: E);
}

/// Reenvía un intento tal cual: primero el resultado, luego el error
pub fn forward<R, E>(listener: &dyn DecodeListener<R, E>, result: Option<R>, error: Option<E>) {
    if let Some(result) = result {
        listener.on_result(result);
    }
    if let Some(error) = error {
        listener.on_error(error);
    }
}

pub struct ScanSession<D: ContinuousDecoder> {
    decoder: DecoderHandle<D>,
    running: Cell<bool>,
}

impl<D> ScanSession<D>
where
    D: ContinuousDecoder,
    D::Output: 'static,
    D::Error: 'static,
{
    pub fn new(decoder: DecoderHandle<D>) -> Self {
        Self {
            decoder,
            running: Cell::new(false),
        }
    }

    pub fn decoder(&self) -> &DecoderHandle<D> {
        &self.decoder
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Arranca el bucle continuo. Sin superficie no hace nada y devuelve
    /// `false`: no se difiere hasta que la superficie aparezca.
    pub fn start(
        &self,
        source: &CameraSource,
        surface: Option<&D::Surface>,
        listener: Rc<dyn DecodeListener<D::Output, D::Error>>,
    ) -> bool {
        let Some(surface) = surface else {
            log::debug!("📷 [ZXING] Superficie no montada, no se arranca");
            return false;
        };

        if self.running.get() {
            self.stop();
        }

        let callback: DecodeCallback<D::Output, D::Error> =
            Rc::new(move |result: Option<D::Output>, error: Option<D::Error>| {
                forward(listener.as_ref(), result, error)
            });

        match source {
            CameraSource::ByDeviceId(device_id) => {
                log::info!("📷 [ZXING] Decodificando desde dispositivo {}", device_id);
                self.decoder
                    .decode_from_device_continuously(device_id, surface, callback);
            }
            CameraSource::ByConstraints(constraints) => {
                log::info!("📷 [ZXING] Decodificando con constraints {}", constraints);
                self.decoder
                    .decode_from_constraints_continuously(constraints, surface, callback);
            }
        }

        self.running.set(true);
        true
    }

    /// Idempotente: sin bucle activo no toca el decoder
    pub fn stop(&self) {
        if self.running.replace(false) {
            log::info!("🛑 [ZXING] Deteniendo decodificación");
            self.decoder.stop();
        }
    }
}

impl<D: ContinuousDecoder> Drop for ScanSession<D> {
    fn drop(&mut self) {
        if self.running.replace(false) {
            self.decoder.stop();
        }
    }
}
