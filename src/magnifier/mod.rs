//! Bucle de control de la lupa
//!
//! Secuencia de arranque ordenada, bucle de mensajes bloqueante y
//! limpieza final. Cada paso del arranque es fatal si falla: sin el
//! subsistema de ampliación o sin las ventanas no hay nada que hacer.

mod state;
mod window;

use anyhow::{bail, Context, Result};
use log::{info, warn};
use windows::Win32::Foundation::HINSTANCE;
use windows::Win32::Graphics::Gdi::{InvalidateRect, UpdateWindow};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Magnification::{MagInitialize, MagUninitialize};
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetForegroundWindow, GetMessageW, KillTimer, SetForegroundWindow, SetTimer,
    ShowWindow, TranslateMessage, MSG, SW_SHOW,
};

use crate::constants::{TICK_INTERVAL_MS, TIMER_TICK};
use crate::hotkeys;
use crate::types::desktop_bounds;
use state::SessionState;

/// Arranca la lupa y bloquea en el bucle de mensajes hasta la salida
pub fn run() -> Result<()> {
    unsafe {
        // 1. Subsistema de ampliación
        if !MagInitialize().as_bool() {
            bail!("MagInitialize fallo: la API de ampliación no está disponible");
        }

        // La ventana con el foco ahora mismo; se restaura tras mostrar la
        // lupa para no robar el teclado a la aplicación en uso
        let foreground = GetForegroundWindow();

        let instance: HINSTANCE = GetModuleHandleW(None)
            .context("obtener el handle del módulo")?
            .into();
        let desktop = desktop_bounds();

        // 2. Ventana host transparente a pantalla completa
        window::register_window_class(instance)?;
        let host = window::create_host_window(instance, desktop)?;

        // 3. Control Magnifier hijo del mismo tamaño
        let magnifier = window::create_magnifier_control(instance, host, desktop)?;
        SessionState::set_magnifier_hwnd(magnifier);

        // 4. La host no debe aparecer en su propia captura
        window::exclude_host_from_capture(magnifier, host)?;

        // 5. Hotkeys globales contra la host
        hotkeys::register_hotkeys(host)?;

        // 6. Transformación inicial y origen 1:1 hasta el primer tick
        let transform = SessionState::session().current_transform();
        if !window::apply_transform(magnifier, &transform) {
            bail!("aplicar la transformación inicial fallo");
        }
        if !window::apply_source_rect(magnifier, desktop) {
            bail!("aplicar el rectángulo de origen inicial fallo");
        }
        let _ = InvalidateRect(magnifier, None, true);

        // 7. Mostrar sin quedarse con el foco del usuario
        let _ = ShowWindow(host, SW_SHOW);
        let _ = UpdateWindow(host);
        window::ensure_topmost(host);
        let _ = SetForegroundWindow(foreground);

        // 8. Timer de actualización
        if SetTimer(host, TIMER_TICK, TICK_INTERVAL_MS, None) == 0 {
            bail!("arrancar el timer de actualización fallo");
        }

        info!("Lupa activa: Ctrl+Alt+Arriba/Abajo ajusta el zoom, Ctrl+Alt+Espacio sale");

        // 9. Bucle de mensajes bloqueante
        run_message_loop();

        // Limpieza
        let _ = KillTimer(host, TIMER_TICK);
        hotkeys::unregister_hotkeys(host);
        if !MagUninitialize().as_bool() {
            warn!("MagUninitialize fallo");
        }

        info!("Lupa terminada");
    }

    Ok(())
}

/// Bucle de mensajes; vuelve con WM_QUIT o con error de GetMessage
unsafe fn run_message_loop() {
    let mut msg = MSG::default();
    loop {
        let ret = GetMessageW(&mut msg, None, 0, 0);
        if ret.0 == 0 || ret.0 == -1 {
            break;
        }
        let _ = TranslateMessage(&msg);
        let _ = DispatchMessageW(&msg);
    }
}
