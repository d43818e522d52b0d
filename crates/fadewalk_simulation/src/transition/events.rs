//! Transition events

use bevy::prelude::*;

/// Event: запрос перехода fade → swap → fade
///
/// Генерируется:
/// - advance_runs после последнего сегмента (HANDOFF_DURATION)
/// - программно (send_event) с произвольной длительностью
///
/// Отсутствующая камера делает свою половину swap no-op'ом.
/// duration <= 0 схлопывает fade-фазы (alpha всё равно проходит через
/// граничные 1.0 и 0.0), swap происходит в любом случае.
#[derive(Event, Debug, Clone)]
pub struct TransitionRequest {
    pub from: Option<Entity>,
    pub to: Option<Entity>,
    /// Полная длительность; каждая fade-фаза получает половину
    pub duration: f32,
}
