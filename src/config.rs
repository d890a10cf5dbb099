// ============================================================================
// CONFIG - Valores por defecto del scanner
// ============================================================================
// Se resuelven en tiempo de compilación (build.rs vuelca .env como rustc-env)
// ============================================================================

use serde::{Deserialize, Serialize};

/// Tiempo mínimo entre intentos de decodificación si el caller no lo indica
pub const DEFAULT_TIME_BETWEEN_SCANS_MS: u32 = 300;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannerConfig {
    pub time_between_scans_ms: u32,
    pub enable_logging: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            time_between_scans_ms: DEFAULT_TIME_BETWEEN_SCANS_MS,
            enable_logging: true,
        }
    }
}

impl ScannerConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("ZXING_TIME_BETWEEN_SCANS_MS"),
            option_env!("ZXING_ENABLE_LOGGING"),
        )
    }

    /// Valores inválidos o ausentes caen al default
    fn from_values(
        time_between_scans_ms: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        let defaults = Self::default();

        Self {
            time_between_scans_ms: time_between_scans_ms
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.time_between_scans_ms),
            enable_logging: enable_logging
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: ScannerConfig = ScannerConfig::from_env();
}
