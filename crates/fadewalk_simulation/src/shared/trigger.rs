//! Trigger UI state component

use bevy::prelude::Component;

/// Состояние UI-триггера запуска (кнопка "Run" на host-стороне)
///
/// Host рисует кнопку по этим флагам и шлёт StartRunIntent по клику.
/// Core-системы только пишут флаги:
/// - start_runs: visible = false при старте run (и не возвращает обратно)
/// - apply_resets: interactable = true при reset
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTrigger {
    pub visible: bool,
    pub interactable: bool,
}

impl Default for RunTrigger {
    fn default() -> Self {
        Self {
            visible: true,
            interactable: true,
        }
    }
}
