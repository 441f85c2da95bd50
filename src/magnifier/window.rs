//! Gestión de ventanas: host por capas y control Magnifier

use anyhow::{bail, Context, Result};
use log::{debug, error, info, warn};
use windows::core::*;
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Gdi::*;
use windows::Win32::UI::Magnification::*;
use windows::Win32::UI::WindowsAndMessaging::*;

use super::state::SessionState;
use crate::constants::{HOST_OPACITY, TIMER_TICK};
use crate::session::{Command, HotkeyEvent};
use crate::types::{desktop_bounds, Position, Rect};
use crate::view::Transform;

// Estilo del control Magnifier (magnification.h) que windows-rs no
// expone como WINDOW_STYLE
const MS_SHOWMAGNIFIEDCURSOR: u32 = 0x0001;

/// Registra la clase de la ventana host
pub unsafe fn register_window_class(instance: HINSTANCE) -> Result<()> {
    let wc = WNDCLASSEXW {
        cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: Some(window_proc),
        hInstance: instance,
        hCursor: LoadCursorW(None, IDC_ARROW).context("cargar el cursor de la clase")?,
        hbrBackground: HBRUSH(GetStockObject(BLACK_BRUSH).0),
        lpszClassName: w!("LupaCursorHost"),
        ..Default::default()
    };

    if RegisterClassExW(&wc) == 0 {
        return Err(Error::from_win32()).context("registrar la clase de la ventana host");
    }

    Ok(())
}

/// Crea la ventana host a pantalla completa
///
/// WS_EX_TRANSPARENT la hace click-through: el ratón y el teclado van a
/// las aplicaciones de debajo; el contenido ampliado lo pinta el control
/// hijo que la cubre entera.
pub unsafe fn create_host_window(instance: HINSTANCE, desktop: Rect) -> Result<HWND> {
    let hwnd = CreateWindowExW(
        WS_EX_LAYERED | WS_EX_TOPMOST | WS_EX_TOOLWINDOW | WS_EX_TRANSPARENT,
        w!("LupaCursorHost"),
        w!("LupaCursor"),
        WS_POPUP | WS_CLIPCHILDREN,
        desktop.left,
        desktop.top,
        desktop.width(),
        desktop.height(),
        None,
        None,
        instance,
        None,
    )
    .context("crear la ventana host")?;

    SetLayeredWindowAttributes(hwnd, COLORREF(0), HOST_OPACITY, LWA_ALPHA)
        .context("configurar la ventana por capas")?;

    Ok(hwnd)
}

/// Crea el control Magnifier hijo cubriendo todo el escritorio
pub unsafe fn create_magnifier_control(
    instance: HINSTANCE,
    host: HWND,
    desktop: Rect,
) -> Result<HWND> {
    // La clase "Magnifier" la registra Magnification.dll en MagInitialize
    let hwnd = CreateWindowExW(
        WINDOW_EX_STYLE(0),
        w!("Magnifier"),
        w!("LupaCursorMagnifier"),
        WS_CHILD | WS_VISIBLE | WINDOW_STYLE(MS_SHOWMAGNIFIEDCURSOR),
        0,
        0,
        desktop.width(),
        desktop.height(),
        host,
        None,
        instance,
        None,
    )
    .context("crear el control Magnifier")?;

    Ok(hwnd)
}

/// Excluye la ventana host de las regiones que captura el control
///
/// Capturarse a sí misma recursaría visualmente
pub unsafe fn exclude_host_from_capture(magnifier: HWND, host: HWND) -> Result<()> {
    let mut filter = host;
    if !MagSetWindowFilterList(magnifier, MW_FILTERMODE_EXCLUDE, 1, &mut filter).as_bool() {
        bail!("excluir la ventana host de la captura fallo");
    }
    Ok(())
}

/// Aplica la transformación de ampliación al control
///
/// Devuelve `false` si la llamada falla; la API no deja código de error
pub unsafe fn apply_transform(magnifier: HWND, transform: &Transform) -> bool {
    let mut matrix = MAGTRANSFORM::default();
    // MAGTRANSFORM aplana la matriz 3x3 por filas
    matrix.v[0] = transform.0[0][0];
    matrix.v[4] = transform.0[1][1];
    matrix.v[8] = transform.0[2][2];

    MagSetWindowTransform(magnifier, &mut matrix).as_bool()
}

/// Aplica el rectángulo de origen al control
pub unsafe fn apply_source_rect(magnifier: HWND, rect: Rect) -> bool {
    MagSetWindowSource(magnifier, rect.to_win32()).as_bool()
}

/// Re-afirma el orden Z de la ventana host
///
/// Se repite en cada tick: si otra ventana topmost se colocara encima, la
/// lupa dejaría de verse sin ningún aviso
pub unsafe fn ensure_topmost(host: HWND) {
    if let Err(e) = SetWindowPos(
        host,
        HWND_TOPMOST,
        0,
        0,
        0,
        0,
        SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE | SWP_NOSENDCHANGING,
    ) {
        warn!("No se pudo re-afirmar el orden Z: {}", e);
    }
}

/// Procedimiento de ventana (maneja mensajes de Windows)
pub unsafe extern "system" fn window_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_HOTKEY => {
            if let Some(event) = HotkeyEvent::from_id(wparam.0 as i32) {
                handle_hotkey(event);
            }
            LRESULT(0)
        }
        WM_TIMER => {
            if wparam.0 == TIMER_TICK {
                on_tick(hwnd);
            }
            LRESULT(0)
        }
        WM_DESTROY => {
            PostQuitMessage(0);
            LRESULT(0)
        }
        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

/// Ejecuta la transición de estado de un hotkey y su comando resultante
unsafe fn handle_hotkey(event: HotkeyEvent) {
    // El lock se suelta antes de tocar la plataforma
    let command = SessionState::session().handle_hotkey(event);

    match command {
        Some(Command::ApplyTransform(transform)) => {
            debug!("Zoom ajustado, re-aplicando la transformación");
            if let Some(magnifier) = SessionState::magnifier_hwnd() {
                if !apply_transform(magnifier, &transform) {
                    error!("MagSetWindowTransform fallo al ajustar el zoom");
                }
            }
        }
        Some(Command::Quit) => {
            info!("Hotkey de salida recibida, terminando");
            PostQuitMessage(0);
        }
        None => {}
    }
}

/// Tick del timer: re-centra la vista en el cursor y re-afirma topmost
unsafe fn on_tick(host: HWND) {
    let mut point = POINT::default();
    if GetCursorPos(&mut point).is_err() {
        error!("GetCursorPos fallo, tick omitido");
        return;
    }

    let cursor = Position::from_point(point);
    let desktop = desktop_bounds();

    let rect = match SessionState::session().handle_tick(cursor, desktop) {
        Some(rect) => rect,
        // Sesión terminando: el tick se ignora
        None => return,
    };

    if let Some(magnifier) = SessionState::magnifier_hwnd() {
        // Un frame sin actualizar es recuperable: se registra y se omite
        // en lugar de abortar
        if !apply_source_rect(magnifier, rect) {
            error!("MagSetWindowSource fallo, frame omitido");
            return;
        }
    }

    ensure_topmost(host);
}
