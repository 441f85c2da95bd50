//! Constantes de configuración y IDs de mensajes

/// Factor de zoom mínimo
pub const MIN_ZOOM: f32 = 1.0;

/// Factor de zoom máximo
pub const MAX_ZOOM: f32 = 20.0;

/// Incremento de zoom por pulsación de hotkey
pub const ZOOM_STEP: f32 = 0.5;

/// Factor de zoom al arrancar
pub const INITIAL_ZOOM: f32 = 2.0;

/// ID de hotkey: aumentar zoom (Ctrl+Alt+Arriba)
pub const HOTKEY_ZOOM_IN: i32 = 1;

/// ID de hotkey: reducir zoom (Ctrl+Alt+Abajo)
pub const HOTKEY_ZOOM_OUT: i32 = 2;

/// ID de hotkey: salir (Ctrl+Alt+Espacio)
pub const HOTKEY_QUIT: i32 = 3;

/// ID del timer de actualización
#[cfg(target_os = "windows")]
pub const TIMER_TICK: usize = 1;

/// Periodo del timer de actualización
#[cfg(target_os = "windows")]
pub const TICK_INTERVAL_MS: u32 = 16; // ~60 FPS

/// Opacidad de la ventana host; el click-through lo da WS_EX_TRANSPARENT
#[cfg(target_os = "windows")]
pub const HOST_OPACITY: u8 = 255;
