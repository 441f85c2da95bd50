//! LupaCursor - Lupa de pantalla que sigue el cursor
//!
//! Crea una ventana host transparente a pantalla completa con un control
//! Magnifier nativo dentro, re-centra la vista ampliada sobre el cursor a
//! ~60 Hz y ajusta el zoom mediante hotkeys globales:
//!
//! - Ctrl+Alt+Arriba: aumentar zoom
//! - Ctrl+Alt+Abajo: reducir zoom
//! - Ctrl+Alt+Espacio: salir

mod constants;
mod logging;
mod session;
mod types;
mod view;
mod zoom;

#[cfg(target_os = "windows")]
mod hotkeys;
#[cfg(target_os = "windows")]
mod magnifier;

#[cfg(target_os = "windows")]
fn main() -> anyhow::Result<()> {
    logging::init();
    magnifier::run()
}

#[cfg(not(target_os = "windows"))]
fn main() {
    eprintln!("lupa-cursor requiere Windows (API Magnification)");
    std::process::exit(1);
}
