// ============================================================================
// DECODER CACHE - Una instancia de decoder por (hints, intervalo)
// ============================================================================
// Si cambian las pistas o el intervalo se construye una instancia nueva;
// nunca se muta la anterior. Los callbacks no forman parte de la clave.
// ============================================================================

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::models::hints::DecodeHints;
use crate::services::decoder::ContinuousDecoder;

/// Referencia compartida a un decoder. Se compara por identidad, no por valor.
pub struct DecoderHandle<D>(Rc<D>);

impl<D> DecoderHandle<D> {
    pub fn new(decoder: D) -> Self {
        Self(Rc::new(decoder))
    }
}

impl<D> Clone for DecoderHandle<D> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<D> PartialEq for DecoderHandle<D> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<D> Deref for DecoderHandle<D> {
    type Target = D;

    fn deref(&self) -> &D {
        &self.0
    }
}

impl<D> fmt::Debug for DecoderHandle<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecoderHandle({:p})", Rc::as_ptr(&self.0))
    }
}

type CacheKey = (Option<DecodeHints>, u32);

pub struct DecoderCache<D> {
    current: Option<(CacheKey, DecoderHandle<D>)>,
}

impl<D> Default for DecoderCache<D> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<D: ContinuousDecoder> DecoderCache<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Devuelve la instancia vigente o construye una nueva si la clave cambió
    pub fn get_or_build(
        &mut self,
        hints: Option<&DecodeHints>,
        time_between_attempts_ms: u32,
    ) -> DecoderHandle<D> {
        if let Some(((cached_hints, cached_interval), decoder)) = &self.current {
            if cached_hints.as_ref() == hints && *cached_interval == time_between_attempts_ms {
                return decoder.clone();
            }
        }

        log::info!(
            "🔧 [ZXING] Creando decoder ({} pistas, {} ms entre intentos)",
            hints.map(DecodeHints::len).unwrap_or(0),
            time_between_attempts_ms
        );

        let decoder = DecoderHandle::new(D::build(hints, time_between_attempts_ms));
        self.current = Some(((hints.cloned(), time_between_attempts_ms), decoder.clone()));
        decoder
    }

    pub fn current(&self) -> Option<&DecoderHandle<D>> {
        self.current.as_ref().map(|(_, decoder)| decoder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::hints::BarcodeFormat;
    use crate::models::options::UseZxingOptions;
    use crate::state::fake_decoder::{self, built_count, FakeDecoder};
    use yew::Callback;

    #[test]
    fn test_same_key_reuses_instance() {
        fake_decoder::reset();
        let mut cache = DecoderCache::<FakeDecoder>::new();
        let hints = DecodeHints::new().try_harder(true);

        let first = cache.get_or_build(Some(&hints), 300);
        let second = cache.get_or_build(Some(&hints.clone()), 300);

        assert_eq!(first, second);
        assert_eq!(built_count(), 1);
    }

    #[test]
    fn test_hints_change_rebuilds() {
        fake_decoder::reset();
        let mut cache = DecoderCache::<FakeDecoder>::new();

        let first = cache.get_or_build(None, 300);
        let hints = DecodeHints::new().possible_formats([BarcodeFormat::QrCode]);
        let second = cache.get_or_build(Some(&hints), 300);

        assert_ne!(first, second);
        assert_eq!(second.hints(), Some(&hints));
        assert_eq!(built_count(), 2);
    }

    #[test]
    fn test_interval_change_rebuilds() {
        fake_decoder::reset();
        let mut cache = DecoderCache::<FakeDecoder>::new();

        let first = cache.get_or_build(None, 300);
        let second = cache.get_or_build(None, 500);

        assert_ne!(first, second);
        assert_eq!(second.interval_ms(), 500);
        assert_eq!(cache.current(), Some(&second));
    }

    #[test]
    fn test_callback_change_does_not_rebuild() {
        fake_decoder::reset();
        let mut cache = DecoderCache::<FakeDecoder>::new();

        let a = UseZxingOptions::new()
            .on_result(Callback::from(|_| ()))
            .on_error(Callback::from(|_| ()));
        let b = a
            .clone()
            .on_result(Callback::from(|_| ()))
            .on_error(Callback::from(|_| ()));

        let first = cache.get_or_build(a.hints.as_ref(), a.time_between_decoding_attempts);
        let second = cache.get_or_build(b.hints.as_ref(), b.time_between_decoding_attempts);

        assert_eq!(first, second);
        assert_eq!(built_count(), 1);
    }
}
