// ============================================================================
// SCAN CONTROLLER - Sincroniza la sesión con el estado de cada render
// ============================================================================
// Recuerda con qué decoder, fuente y superficie arrancó el bucle vigente.
// Si cualquiera cambia (o la superficie desaparece) se para primero y solo
// se vuelve a arrancar si hay superficie montada.
// ============================================================================

use std::rc::Rc;

use crate::models::options::CameraSource;
use crate::services::decoder::ContinuousDecoder;
use crate::state::decoder_cache::DecoderHandle;
use crate::state::scan_session::{DecodeListener, ScanSession};

struct ActiveScan<D: ContinuousDecoder> {
    session: ScanSession<D>,
    source: CameraSource,
    surface: D::Surface,
}

pub struct ScanController<D: ContinuousDecoder> {
    active: Option<ActiveScan<D>>,
}

impl<D: ContinuousDecoder> Default for ScanController<D> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<D> ScanController<D>
where
    D: ContinuousDecoder,
    D::Surface: PartialEq + Clone,
    D::Output: 'static,
    D::Error: 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Devuelve `true` si hubo que parar o arrancar algo
    pub fn sync(
        &mut self,
        decoder: &DecoderHandle<D>,
        source: &CameraSource,
        surface: Option<&D::Surface>,
        listener: Rc<dyn DecodeListener<D::Output, D::Error>>,
    ) -> bool {
        let unchanged = match (&self.active, surface) {
            (Some(active), Some(surface)) => {
                active.session.decoder() == decoder
                    && &active.source == source
                    && &active.surface == surface
            }
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return false;
        }

        self.stop();

        let Some(surface) = surface else {
            log::debug!("📷 [ZXING] <video> desmontado, cámara liberada");
            return true;
        };

        let session = ScanSession::new(decoder.clone());
        session.start(source, Some(surface), listener);
        self.active = Some(ActiveScan {
            session,
            source: source.clone(),
            surface: surface.clone(),
        });
        true
    }

    pub fn stop(&mut self) {
        if let Some(active) = self.active.take() {
            active.session.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::constraints::MediaConstraints;
    use crate::state::fake_decoder::{self, calls, live_acquisitions, Call, FakeDecoder};

    struct Silent;

    impl DecodeListener<String, String> for Silent {
        fn on_result(&self, _: String) {}
        fn on_error(&self, _: String) {}
    }

    fn setup() -> (ScanController<FakeDecoder>, DecoderHandle<FakeDecoder>) {
        fake_decoder::reset();
        let decoder = DecoderHandle::new(FakeDecoder::build(None, 300));
        (ScanController::new(), decoder)
    }

    fn listener() -> Rc<dyn DecodeListener<String, String>> {
        Rc::new(Silent)
    }

    fn device(id: &str) -> CameraSource {
        CameraSource::ByDeviceId(id.to_string())
    }

    #[test]
    fn test_surface_detach_stops_loop() {
        let (mut controller, decoder) = setup();

        assert!(controller.sync(&decoder, &device("cam"), Some(&"video-a"), listener()));
        assert_eq!(live_acquisitions(), 1);

        assert!(controller.sync(&decoder, &device("cam"), None, listener()));
        assert!(!controller.is_active());
        assert!(!decoder.is_running());
        assert_eq!(live_acquisitions(), 0);
        assert_eq!(calls().last(), Some(&Call::Stop(0)));
    }

    #[test]
    fn test_surface_attach_starts_loop() {
        let (mut controller, decoder) = setup();

        assert!(!controller.sync(&decoder, &device("cam"), None, listener()));
        assert_eq!(calls(), vec![Call::Build(0)]);

        assert!(controller.sync(&decoder, &device("cam"), Some(&"video-a"), listener()));
        assert!(controller.is_active());
        assert_eq!(decoder.surface(), Some("video-a"));
        assert_eq!(calls(), vec![Call::Build(0), Call::FromDevice(0, "cam".to_string())]);
    }

    #[test]
    fn test_source_change_stops_before_next_start() {
        let (mut controller, decoder) = setup();
        let constraints = CameraSource::ByConstraints(MediaConstraints::default());

        controller.sync(&decoder, &device("a"), Some(&"video-a"), listener());
        controller.sync(&decoder, &constraints, Some(&"video-a"), listener());

        assert_eq!(
            calls(),
            vec![
                Call::Build(0),
                Call::FromDevice(0, "a".to_string()),
                Call::Stop(0),
                Call::FromConstraints(0, MediaConstraints::default()),
            ]
        );
        assert_eq!(live_acquisitions(), 1);
    }

    #[test]
    fn test_unchanged_render_keeps_loop() {
        let (mut controller, decoder) = setup();

        controller.sync(&decoder, &device("cam"), Some(&"video-a"), listener());
        assert!(!controller.sync(&decoder, &device("cam"), Some(&"video-a"), listener()));
        assert!(!controller.sync(&decoder.clone(), &device("cam"), Some(&"video-a"), listener()));

        assert_eq!(calls().len(), 2);
        assert!(decoder.is_running());
    }

    #[test]
    fn test_new_surface_element_restarts_on_it() {
        let (mut controller, decoder) = setup();

        controller.sync(&decoder, &device("cam"), Some(&"video-a"), listener());
        assert!(controller.sync(&decoder, &device("cam"), Some(&"video-b"), listener()));

        assert_eq!(decoder.surface(), Some("video-b"));
        assert_eq!(calls()[2], Call::Stop(0));
        assert_eq!(live_acquisitions(), 1);
    }

    #[test]
    fn test_decoder_change_releases_old_instance_first() {
        let (mut controller, first) = setup();
        let second = DecoderHandle::new(FakeDecoder::build(None, 600));

        controller.sync(&first, &device("cam"), Some(&"video-a"), listener());
        controller.sync(&second, &device("cam"), Some(&"video-a"), listener());

        assert!(!first.is_running());
        assert!(second.is_running());
        assert_eq!(
            calls()[2..],
            [Call::FromDevice(0, "cam".to_string()), Call::Stop(0), Call::FromDevice(1, "cam".to_string())]
        );
    }

    #[test]
    fn test_stop_and_drop_release_camera() {
        let (mut controller, decoder) = setup();

        controller.sync(&decoder, &device("cam"), Some(&"video-a"), listener());
        controller.stop();
        controller.stop();
        assert_eq!(live_acquisitions(), 0);

        controller.sync(&decoder, &device("cam"), Some(&"video-a"), listener());
        drop(controller);
        assert_eq!(live_acquisitions(), 0);
        assert_eq!(calls().last(), Some(&Call::Stop(0)));
    }
}
