//! Tipos personalizados y wrappers

/// Representa una posición en coordenadas de pantalla
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[cfg(target_os = "windows")]
    pub fn from_point(point: windows::Win32::Foundation::POINT) -> Self {
        Self::new(point.x, point.y)
    }
}

/// Rectángulo en coordenadas de pantalla
///
/// Invariante: `right >= left` y `bottom >= top` por construcción
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    #[cfg(target_os = "windows")]
    pub fn to_win32(&self) -> windows::Win32::Foundation::RECT {
        windows::Win32::Foundation::RECT {
            left: self.left,
            top: self.top,
            right: self.right,
            bottom: self.bottom,
        }
    }
}

/// Wrapper thread-safe para HWND
///
/// HWND es un handle opaco de Windows que puede compartirse entre threads
#[cfg(target_os = "windows")]
#[derive(Clone, Copy)]
pub struct SafeHwnd(pub windows::Win32::Foundation::HWND);

#[cfg(target_os = "windows")]
unsafe impl Send for SafeHwnd {}
#[cfg(target_os = "windows")]
unsafe impl Sync for SafeHwnd {}

#[cfg(target_os = "windows")]
impl SafeHwnd {
    /// Obtiene el HWND interno
    #[inline]
    pub fn get(&self) -> windows::Win32::Foundation::HWND {
        self.0
    }
}

/// Obtiene los límites actuales del escritorio (pantalla virtual completa)
///
/// Se re-consulta en cada tick: la geometría de los monitores puede
/// cambiar mientras la lupa está activa
#[cfg(target_os = "windows")]
pub fn desktop_bounds() -> Rect {
    use windows::Win32::UI::WindowsAndMessaging::{
        GetSystemMetrics, SM_CXVIRTUALSCREEN, SM_CYVIRTUALSCREEN, SM_XVIRTUALSCREEN,
        SM_YVIRTUALSCREEN,
    };

    unsafe {
        let x = GetSystemMetrics(SM_XVIRTUALSCREEN);
        let y = GetSystemMetrics(SM_YVIRTUALSCREEN);
        let w = GetSystemMetrics(SM_CXVIRTUALSCREEN);
        let h = GetSystemMetrics(SM_CYVIRTUALSCREEN);
        Rect::new(x, y, x + w, y + h)
    }
}
