//! Transition domain — fade-out → camera swap → fade-in
//!
//! Содержит:
//! - FadeOverlay (единственный видимый side effect: alpha [0,1])
//! - TransitionSequence (FSM перехода: FadeIn → Swap → FadeOut)
//! - TransitionRequest (event, по одному spawn'у последовательности на запрос)
//!
//! Координатор — это plugin + единственный overlay entity, а не глобальный
//! singleton: "координатор не инициализирован" == "plugin не добавлен /
//! overlay отсутствует", оба случая деградируют в no-op без паники.

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;


// Re-export all components and events
pub use components::*;
pub use events::*;

/// Transition Plugin
///
/// Порядок выполнения (chained):
/// 1. begin_transitions — spawn TransitionSequence на каждый запрос
/// 2. advance_transitions — один шаг фазы на кадр
///
/// Overlap guard сознательно отсутствует: параллельные последовательности
/// делят один overlay, последняя запись побеждает (см. DESIGN.md).
pub struct TransitionPlugin;

impl Plugin for TransitionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TransitionRequest>();

        app.add_systems(
            Update,
            (systems::begin_transitions, systems::advance_transitions)
                .chain()
                .in_set(crate::SimulationSet::Transition),
        );
    }
}
