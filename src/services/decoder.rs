// ============================================================================
// CONTINUOUS DECODER - Contrato con la librería de decodificación
// ============================================================================
// El adaptador no decodifica nada: solo arranca/para el bucle del decoder
// externo y reenvía lo que este reporta en cada intento.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::models::constraints::MediaConstraints;
use crate::models::hints::DecodeHints;

/// Un intento de decodificación: resultado, error, ambos o ninguno
pub type DecodeCallback<R, E> = Rc<dyn Fn(Option<R>, Option<E>)>;

/// Corta los intentos de un arranque ya parado. Cada `open` invalida los
/// callbacks anteriores y `close` invalida el vigente; así una promesa de
/// cámara que rechaza tarde no llega a un listener ya desmontado.
#[derive(Debug, Default)]
pub struct AttemptGate {
    generation: Rc<Cell<u64>>,
}

impl AttemptGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open<R: 'static, E: 'static>(&self, callback: DecodeCallback<R, E>) -> DecodeCallback<R, E> {
        let generation = self.generation.clone();
        let current = generation.get().wrapping_add(1);
        generation.set(current);

        Rc::new(move |result: Option<R>, error: Option<E>| {
            if generation.get() == current {
                callback(result, error);
            }
        })
    }

    pub fn close(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

pub trait ContinuousDecoder {
    /// Superficie de la que se leen los frames (el `<video>` en el navegador)
    type Surface;
    type Output;
    type Error;

    /// Instancia nueva con las pistas y el intervalo mínimo entre intentos
    fn build(hints: Option<&DecodeHints>, time_between_attempts_ms: u32) -> Self
    where
        Self: Sized;

    /// Los fallos al adquirir la cámara llegan por `callback` como error
    fn decode_from_device_continuously(
        &self,
        device_id: &str,
        surface: &Self::Surface,
        callback: DecodeCallback<Self::Output, Self::Error>,
    );

    fn decode_from_constraints_continuously(
        &self,
        constraints: &MediaConstraints,
        surface: &Self::Surface,
        callback: DecodeCallback<Self::Output, Self::Error>,
    );

    /// Para el bucle y libera la cámara. Debe tolerar llamadas repetidas.
    fn stop(&self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn recording() -> (Rc<RefCell<Vec<String>>>, DecodeCallback<String, String>) {
        let errors = Rc::new(RefCell::new(Vec::new()));
        let sink = errors.clone();
        let callback: DecodeCallback<String, String> = Rc::new(move |_: Option<String>, error: Option<String>| {
            if let Some(error) = error {
                sink.borrow_mut().push(error);
            }
        });
        (errors, callback)
    }

    #[test]
    fn test_open_callback_forwards_until_closed() {
        let gate = AttemptGate::new();
        let (errors, callback) = recording();
        let gated = gate.open(callback);

        gated(None, Some("E1".to_string()));
        gate.close();
        gated(None, Some("NotAllowedError".to_string()));

        assert_eq!(*errors.borrow(), vec!["E1"]);
    }

    #[test]
    fn test_reopen_invalidates_previous_start() {
        let gate = AttemptGate::new();
        let (old_errors, old_callback) = recording();
        let (new_errors, new_callback) = recording();

        let old = gate.open(old_callback);
        let new = gate.open(new_callback);

        old(None, Some("tarde".to_string()));
        new(None, Some("E2".to_string()));

        assert!(old_errors.borrow().is_empty());
        assert_eq!(*new_errors.borrow(), vec!["E2"]);
    }
}
