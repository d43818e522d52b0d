//! FADEWALK Simulation Core
//!
//! ECS-симуляция scripted cutscene на Bevy 0.16 (headless):
//! актор проходит waypoints с постоянной скоростью, после чего происходит
//! camera hand-off через двухфазный fade единственного overlay.
//!
//! Рендер, ввод и UI — внешние collaborators: они шлют intent-events и
//! читают наблюдаемые флаги (Transform актора, FadeOverlay.alpha,
//! SceneCamera.enabled, RunTrigger). Время продвигается только через
//! [`advance_frame`] — один вызов == один cooperative кадр.

use bevy::prelude::*;
use bevy::time::TimePlugin;
use std::time::Duration;

// Публичные модули
pub mod logger;
pub mod path;
pub mod shared;
pub mod transition;

// Re-export базовых типов для удобства
pub use path::{
    facing, next_segment, PathMover, PathPlugin, PathRun, ResetIntent, RunCompleted, Segment,
    StartRunIntent, HANDOFF_DURATION, SEGMENT_EPSILON,
};
pub use shared::{RunTrigger, SceneCamera};
pub use transition::{
    FadeOverlay, TransitionPhase, TransitionPlugin, TransitionRequest, TransitionSequence,
};

/// System sets симуляции: path-системы всегда раньше transition-систем,
/// чтобы hand-off, выписанный в этом кадре, был подхвачен в этом же кадре
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Path,
    Transition,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct CutscenePlugin;

impl Plugin for CutscenePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (SimulationSet::Path, SimulationSet::Transition).chain(),
        );
        app.add_plugins((PathPlugin, TransitionPlugin));
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// TimePlugin отключён: Time продвигается вручную в [`advance_frame`],
/// поэтому каждый кадр детерминирован (simulated delta вместо wall-clock).
pub fn create_headless_app() -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins.build().disable::<TimePlugin>());
    app.init_resource::<Time>();
    app.add_plugins(CutscenePlugin);

    app
}

/// Cooperative frame-tick: продвигает simulated время на delta_secs
/// и выполняет ровно один кадр симуляции
pub fn advance_frame(app: &mut App, delta_secs: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(delta_secs));
    app.update();
}
