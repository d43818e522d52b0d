//! Path domain — scripted walk актора по waypoints
//!
//! Содержит:
//! - PathMover (config: waypoints, speed, turn_rate, камеры hand-off)
//! - PathRun (FSM прогона: Idle / Active, busy-флаг)
//! - Segment (чистая геометрия одного отрезка пути)
//! - StartRunIntent / ResetIntent / RunCompleted (events)

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;


// Re-export all components and events
pub use components::*;
pub use events::*;

/// Path Plugin
///
/// Порядок выполнения (chained, один кадр = один шаг):
/// 1. start_runs — валидация intents, построение полного пути
/// 2. advance_runs — интерполяция по текущему сегменту, hand-off после последнего
/// 3. apply_resets — восстановление камер/UI (только когда не busy)
pub struct PathPlugin;

impl Plugin for PathPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<StartRunIntent>()
            .add_event::<ResetIntent>()
            .add_event::<RunCompleted>();

        app.add_systems(
            Update,
            (systems::start_runs, systems::advance_runs, systems::apply_resets)
                .chain()
                .in_set(crate::SimulationSet::Path),
        );
    }
}
