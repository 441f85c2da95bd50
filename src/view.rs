//! Motor de transformación de vista
//!
//! Cálculos puros del núcleo: la matriz de ampliación a partir del factor
//! de zoom, y el rectángulo de origen a partir del cursor, los límites del
//! escritorio y el factor. Ambos se recalculan frescos en cada evento, sin
//! estado oculto ni suavizado entre muestras.

use crate::types::{Position, Rect};

/// Matriz afín 3x3 de ampliación
///
/// Este sistema solo produce escalas diagonales uniformes `(f, f, 1)`;
/// nunca hay rotación, cizalla ni componente de traslación.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform(pub [[f32; 3]; 3]);

impl Transform {
    /// Matriz de escala uniforme para el factor dado
    pub fn scale(factor: f32) -> Self {
        let mut m = [[0.0f32; 3]; 3];
        m[0][0] = factor;
        m[1][1] = factor;
        m[2][2] = 1.0;
        Self(m)
    }
}

/// Calcula el rectángulo de pantalla a ampliar
///
/// Produce un rectángulo de tamaño `(ancho/factor, alto/factor)` centrado
/// en el cursor. Los restos fraccionarios se truncan hacia cero, igual que
/// el direccionamiento de píxeles de la API de destino. `factor >= 1.0`
/// por el invariante de [`crate::zoom::ZoomState`], así que no hay
/// división por cero posible.
pub fn compute_source_rect(cursor: Position, desktop: Rect, factor: f32) -> Rect {
    let half_w = (desktop.width() / 2) as f32 / factor;
    let half_h = (desktop.height() / 2) as f32 / factor;

    Rect::new(
        (cursor.x as f32 - half_w) as i32,
        (cursor.y as f32 - half_h) as i32,
        (cursor.x as f32 + half_w) as i32,
        (cursor.y as f32 + half_h) as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_produces_diagonal_matrix() {
        for factor in [1.0f32, 2.0, 5.5, 20.0] {
            let m = Transform::scale(factor).0;
            assert_eq!(m[0][0], factor);
            assert_eq!(m[1][1], factor);
            assert_eq!(m[2][2], 1.0);
            // Todo lo demás exactamente cero
            for row in 0..3 {
                for col in 0..3 {
                    if row != col {
                        assert_eq!(m[row][col], 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn source_rect_at_factor_two_on_full_hd() {
        let desktop = Rect::new(0, 0, 1920, 1080);
        let cursor = Position::new(960, 540);

        let rect = compute_source_rect(cursor, desktop, 2.0);
        assert_eq!(rect, Rect::new(480, 270, 1440, 810));
    }

    #[test]
    fn source_rect_size_is_desktop_over_factor() {
        let desktop = Rect::new(0, 0, 1920, 1080);
        let cursor = Position::new(700, 300);

        let rect = compute_source_rect(cursor, desktop, 4.0);
        assert_eq!(rect.width(), 1920 / 4);
        assert_eq!(rect.height(), 1080 / 4);
    }

    #[test]
    fn source_rect_is_centered_on_cursor() {
        let desktop = Rect::new(0, 0, 1920, 1080);
        let cursor = Position::new(123, 456);

        let rect = compute_source_rect(cursor, desktop, 3.0);
        // Centrado con tolerancia de una unidad de redondeo
        assert!(((rect.left + rect.right) / 2 - cursor.x).abs() <= 1);
        assert!(((rect.top + rect.bottom) / 2 - cursor.y).abs() <= 1);
    }

    #[test]
    fn source_rect_is_idempotent() {
        let desktop = Rect::new(0, 0, 2560, 1440);
        let cursor = Position::new(1000, 700);

        let first = compute_source_rect(cursor, desktop, 2.5);
        let second = compute_source_rect(cursor, desktop, 2.5);
        assert_eq!(first, second);
    }

    #[test]
    fn area_shrinks_as_factor_grows() {
        let desktop = Rect::new(0, 0, 1920, 1080);
        let cursor = Position::new(960, 540);

        let mut last_area = i64::MAX;
        for factor in [1.0f32, 2.0, 4.0, 8.0, 16.0] {
            let rect = compute_source_rect(cursor, desktop, factor);
            let area = rect.width() as i64 * rect.height() as i64;
            assert!(area < last_area);
            last_area = area;
        }
    }

    #[test]
    fn handles_virtual_screen_with_negative_origin() {
        // Monitor secundario a la izquierda del primario
        let desktop = Rect::new(-1920, 0, 1920, 1080);
        let cursor = Position::new(-500, 400);

        let rect = compute_source_rect(cursor, desktop, 2.0);
        assert_eq!(rect.width(), desktop.width() / 2);
        assert_eq!(rect.height(), desktop.height() / 2);
        assert!(((rect.left + rect.right) / 2 - cursor.x).abs() <= 1);
    }
}
