//! Estado global de la sesión de ampliación
//!
//! Los callbacks `extern "system"` de Windows no pueden capturar estado
//! local, así que la sesión vive en estáticos detrás de esta fachada. Un
//! único hilo posee el bucle de mensajes y la entrega de eventos es
//! serial: el Mutex solo satisface los requisitos de `static`, nunca se
//! disputa.

use std::sync::{Mutex, MutexGuard, OnceLock};
use windows::Win32::Foundation::HWND;

use crate::session::MagnifierSession;
use crate::types::SafeHwnd;

/// Sesión lógica (zoom + fase del ciclo de vida)
static SESSION: Mutex<MagnifierSession> = Mutex::new(MagnifierSession::new());

/// Handle del control Magnifier hijo
static MAGNIFIER_HWND: OnceLock<SafeHwnd> = OnceLock::new();

/// Fachada de acceso al estado de la sesión
pub struct SessionState;

impl SessionState {
    /// Acceso exclusivo a la sesión lógica
    pub fn session() -> MutexGuard<'static, MagnifierSession> {
        SESSION.lock().unwrap()
    }

    /// Establece el handle del control Magnifier (solo una vez)
    pub fn set_magnifier_hwnd(hwnd: HWND) {
        let _ = MAGNIFIER_HWND.set(SafeHwnd(hwnd));
    }

    /// Obtiene el handle del control Magnifier
    pub fn magnifier_hwnd() -> Option<HWND> {
        MAGNIFIER_HWND.get().map(|h| h.get())
    }
}
