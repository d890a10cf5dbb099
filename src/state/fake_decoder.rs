// Decoder de pruebas: registra llamadas y permite simular intentos

use std::cell::{Cell, RefCell};

use crate::models::constraints::MediaConstraints;
use crate::models::hints::DecodeHints;
use crate::services::decoder::{AttemptGate, ContinuousDecoder, DecodeCallback};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Build(u32),
    FromDevice(u32, String),
    FromConstraints(u32, MediaConstraints),
    Stop(u32),
}

thread_local! {
    static CALLS: RefCell<Vec<Call>> = RefCell::new(Vec::new());
    static NEXT_ID: Cell<u32> = Cell::new(0);
    static ACQUISITIONS: Cell<u32> = Cell::new(0);
}

/// Los thread-locals pueden compartirse entre tests si corren en un solo hilo
pub fn reset() {
    CALLS.with(|calls| calls.borrow_mut().clear());
    NEXT_ID.with(|next| next.set(0));
    ACQUISITIONS.with(|count| count.set(0));
}

pub fn calls() -> Vec<Call> {
    CALLS.with(|calls| calls.borrow().clone())
}

pub fn built_count() -> usize {
    calls().iter().filter(|call| matches!(call, Call::Build(_))).count()
}

/// Cámaras abiertas ahora mismo entre todas las instancias del hilo
pub fn live_acquisitions() -> u32 {
    ACQUISITIONS.with(Cell::get)
}

fn record(call: Call) {
    CALLS.with(|calls| calls.borrow_mut().push(call));
}

pub struct FakeDecoder {
    id: u32,
    hints: Option<DecodeHints>,
    interval_ms: u32,
    running: Cell<bool>,
    surface: Cell<Option<&'static str>>,
    gate: AttemptGate,
    // Como la promesa de JS: sigue viva después de `stop`
    callback: RefCell<Option<DecodeCallback<String, String>>>,
}

impl FakeDecoder {
    pub fn hints(&self) -> Option<&DecodeHints> {
        self.hints.as_ref()
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Superficie del último arranque mientras el bucle sigue activo
    pub fn surface(&self) -> Option<&'static str> {
        self.surface.get()
    }

    /// Simula un intento de decodificación del bucle externo
    pub fn emit(&self, result: Option<&str>, error: Option<&str>) {
        let callback = self.callback.borrow().clone();
        if let Some(callback) = callback {
            callback(result.map(str::to_string), error.map(str::to_string));
        }
    }

    /// Simula el rechazo tardío de getUserMedia del último arranque
    pub fn fail_acquisition(&self, error: &str) {
        self.emit(None, Some(error));
    }

    fn acquire(&self, surface: &'static str, callback: DecodeCallback<String, String>) {
        assert!(!self.running.get(), "bucle ya activo en decoder {}", self.id);
        ACQUISITIONS.with(|count| {
            assert_eq!(count.get(), 0, "dos cámaras abiertas a la vez");
            count.set(count.get() + 1);
        });
        self.running.set(true);
        self.surface.set(Some(surface));
        *self.callback.borrow_mut() = Some(self.gate.open(callback));
    }
}

impl ContinuousDecoder for FakeDecoder {
    type Surface = &'static str;
    type Output = String;
    type Error = String;

    fn build(hints: Option<&DecodeHints>, time_between_attempts_ms: u32) -> Self {
        let id = NEXT_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        record(Call::Build(id));

        Self {
            id,
            hints: hints.cloned(),
            interval_ms: time_between_attempts_ms,
            running: Cell::new(false),
            surface: Cell::new(None),
            gate: AttemptGate::new(),
            callback: RefCell::new(None),
        }
    }

    fn decode_from_device_continuously(
        &self,
        device_id: &str,
        surface: &&'static str,
        callback: DecodeCallback<String, String>,
    ) {
        record(Call::FromDevice(self.id, device_id.to_string()));
        self.acquire(*surface, callback);
    }

    fn decode_from_constraints_continuously(
        &self,
        constraints: &MediaConstraints,
        surface: &&'static str,
        callback: DecodeCallback<String, String>,
    ) {
        record(Call::FromConstraints(self.id, constraints.clone()));
        self.acquire(*surface, callback);
    }

    fn stop(&self) {
        record(Call::Stop(self.id));
        if self.running.replace(false) {
            ACQUISITIONS.with(|count| count.set(count.get() - 1));
        }
        self.surface.set(None);
        self.gate.close();
    }
}
