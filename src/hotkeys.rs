//! Registro de las hotkeys globales

use anyhow::{Context, Result};
use log::warn;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    RegisterHotKey, UnregisterHotKey, MOD_ALT, MOD_CONTROL, VK_DOWN, VK_SPACE, VK_UP,
};

use crate::constants::{HOTKEY_QUIT, HOTKEY_ZOOM_IN, HOTKEY_ZOOM_OUT};

/// Registra las tres hotkeys globales contra la ventana host
///
/// Ctrl+Alt+Arriba amplía, Ctrl+Alt+Abajo reduce, Ctrl+Alt+Espacio sale.
/// Cualquier fallo es fatal: sin hotkeys la lupa no se puede controlar.
pub unsafe fn register_hotkeys(hwnd: HWND) -> Result<()> {
    RegisterHotKey(hwnd, HOTKEY_ZOOM_IN, MOD_CONTROL | MOD_ALT, VK_UP.0 as u32)
        .context("registrar la hotkey de aumentar zoom (Ctrl+Alt+Arriba)")?;

    RegisterHotKey(hwnd, HOTKEY_ZOOM_OUT, MOD_CONTROL | MOD_ALT, VK_DOWN.0 as u32)
        .context("registrar la hotkey de reducir zoom (Ctrl+Alt+Abajo)")?;

    RegisterHotKey(hwnd, HOTKEY_QUIT, MOD_CONTROL | MOD_ALT, VK_SPACE.0 as u32)
        .context("registrar la hotkey de salida (Ctrl+Alt+Espacio)")?;

    Ok(())
}

/// Elimina el registro de las hotkeys al terminar
pub unsafe fn unregister_hotkeys(hwnd: HWND) {
    for id in [HOTKEY_ZOOM_IN, HOTKEY_ZOOM_OUT, HOTKEY_QUIT] {
        if UnregisterHotKey(hwnd, id).is_err() {
            warn!("No se pudo eliminar el registro de la hotkey {}", id);
        }
    }
}
