//! Máquina de estados de la sesión de ampliación
//!
//! Traduce eventos crudos (IDs de hotkey, ticks del timer) a transiciones
//! de estado y comandos para la capa de plataforma. La entrega de eventos
//! ya está serializada por el bucle de mensajes, así que aquí no hay
//! concurrencia que gestionar: un único escritor muta la sesión.

use crate::constants::{HOTKEY_QUIT, HOTKEY_ZOOM_IN, HOTKEY_ZOOM_OUT};
use crate::types::{Position, Rect};
use crate::view::{compute_source_rect, Transform};
use crate::zoom::ZoomState;

/// Evento de hotkey ya clasificado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyEvent {
    ZoomIn,
    ZoomOut,
    Quit,
}

impl HotkeyEvent {
    /// Clasifica un ID de hotkey crudo; IDs desconocidos se ignoran
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            HOTKEY_ZOOM_IN => Some(Self::ZoomIn),
            HOTKEY_ZOOM_OUT => Some(Self::ZoomOut),
            HOTKEY_QUIT => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Fase del ciclo de vida de la sesión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// Terminal: todo evento posterior se ignora
    Terminating,
}

/// Comando resultante de procesar un hotkey
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Re-aplicar la transformación de ampliación al control
    ApplyTransform(Transform),
    /// Terminar el bucle de mensajes
    Quit,
}

/// Estado lógico de la sesión: zoom actual y fase del ciclo de vida
///
/// Lo posee el bucle de control; los handlers lo mutan por referencia.
#[derive(Debug)]
pub struct MagnifierSession {
    zoom: ZoomState,
    phase: Phase,
}

impl MagnifierSession {
    pub const fn new() -> Self {
        Self {
            zoom: ZoomState::new(),
            phase: Phase::Running,
        }
    }

    /// Procesa un hotkey y devuelve el comando a ejecutar, si lo hay
    pub fn handle_hotkey(&mut self, event: HotkeyEvent) -> Option<Command> {
        if self.phase == Phase::Terminating {
            return None;
        }

        match event {
            HotkeyEvent::ZoomIn => {
                self.zoom.zoom_in();
                Some(Command::ApplyTransform(self.current_transform()))
            }
            HotkeyEvent::ZoomOut => {
                self.zoom.zoom_out();
                Some(Command::ApplyTransform(self.current_transform()))
            }
            HotkeyEvent::Quit => {
                self.phase = Phase::Terminating;
                Some(Command::Quit)
            }
        }
    }

    /// Procesa un tick del timer: rectángulo de origen fresco centrado en
    /// el cursor, o `None` si la sesión está terminando
    pub fn handle_tick(&mut self, cursor: Position, desktop: Rect) -> Option<Rect> {
        if self.phase == Phase::Terminating {
            return None;
        }

        Some(compute_source_rect(cursor, desktop, self.zoom.current()))
    }

    /// Transformación para el factor de zoom actual
    pub fn current_transform(&self) -> Transform {
        Transform::scale(self.zoom.current())
    }

    #[allow(dead_code)]
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_hotkey_ids() {
        assert_eq!(HotkeyEvent::from_id(HOTKEY_ZOOM_IN), Some(HotkeyEvent::ZoomIn));
        assert_eq!(HotkeyEvent::from_id(HOTKEY_ZOOM_OUT), Some(HotkeyEvent::ZoomOut));
        assert_eq!(HotkeyEvent::from_id(HOTKEY_QUIT), Some(HotkeyEvent::Quit));
    }

    #[test]
    fn ignores_unknown_hotkey_ids() {
        assert_eq!(HotkeyEvent::from_id(0), None);
        assert_eq!(HotkeyEvent::from_id(99), None);
        assert_eq!(HotkeyEvent::from_id(-1), None);
    }

    #[test]
    fn zoom_hotkey_yields_updated_transform() {
        let mut session = MagnifierSession::new();

        match session.handle_hotkey(HotkeyEvent::ZoomIn) {
            Some(Command::ApplyTransform(t)) => assert_eq!(t.0[0][0], 2.5),
            other => panic!("comando inesperado: {:?}", other),
        }

        match session.handle_hotkey(HotkeyEvent::ZoomOut) {
            Some(Command::ApplyTransform(t)) => assert_eq!(t.0[0][0], 2.0),
            other => panic!("comando inesperado: {:?}", other),
        }
    }

    #[test]
    fn first_tick_uses_initial_factor() {
        let mut session = MagnifierSession::new();
        let desktop = Rect::new(0, 0, 1920, 1080);
        let cursor = Position::new(960, 540);

        let rect = session.handle_tick(cursor, desktop).unwrap();
        assert_eq!(rect, Rect::new(480, 270, 1440, 810));
    }

    #[test]
    fn quit_transitions_to_terminating() {
        let mut session = MagnifierSession::new();

        assert_eq!(session.phase(), Phase::Running);
        assert_eq!(session.handle_hotkey(HotkeyEvent::Quit), Some(Command::Quit));
        assert_eq!(session.phase(), Phase::Terminating);
    }

    #[test]
    fn terminating_ignores_all_further_events() {
        let mut session = MagnifierSession::new();
        let transform_before = session.current_transform();

        session.handle_hotkey(HotkeyEvent::Quit);

        // Ni hotkeys ni ticks producen mutación ni comando alguno
        assert_eq!(session.handle_hotkey(HotkeyEvent::ZoomIn), None);
        assert_eq!(session.handle_hotkey(HotkeyEvent::ZoomOut), None);
        assert_eq!(session.handle_hotkey(HotkeyEvent::Quit), None);

        let desktop = Rect::new(0, 0, 1920, 1080);
        assert_eq!(session.handle_tick(Position::new(10, 10), desktop), None);

        assert_eq!(session.current_transform(), transform_before);
        assert_eq!(session.phase(), Phase::Terminating);
    }
}
