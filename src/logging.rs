//! Inicialización del logging

use tracing_subscriber::EnvFilter;

/// Inicializa el logging. En builds de debug el nivel por defecto es
/// `debug` y en release `info`. La variable de entorno `RUST_LOG` puede
/// sobreescribir el nivel en ambos casos.
pub fn init() {
    let default_level = if cfg!(debug_assertions) { "debug" } else { "info" };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
