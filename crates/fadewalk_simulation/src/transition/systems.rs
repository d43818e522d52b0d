//! Transition systems: spawn последовательностей и покадровое продвижение FSM

use bevy::prelude::*;

use crate::logger;
use crate::shared::SceneCamera;

use super::components::{FadeOverlay, TransitionPhase, TransitionSequence};
use super::events::TransitionRequest;

/// Система: spawn TransitionSequence на каждый запрос
///
/// Overlap guard отсутствует: второй запрос во время первого запустит
/// параллельную последовательность против того же overlay (last-write-wins,
/// задокументированная гонка, см. DESIGN.md).
pub fn begin_transitions(mut commands: Commands, mut requests: EventReader<TransitionRequest>) {
    for request in requests.read() {
        logger::log(&format!(
            "Начало camera transition ({:.2} s)",
            request.duration
        ));
        commands.spawn(TransitionSequence::new(
            request.from,
            request.to,
            request.duration,
        ));
    }
}

/// Система: один шаг фазы на кадр для каждой последовательности
///
/// FadeIn: alpha 0 → 1, elapsed насыщается на phase_duration (никогда не
/// перескакивает границу). Swap: ровно один кадр, строго между fade-фазами.
/// FadeOut: alpha 1 → 0, затем despawn последовательности.
pub fn advance_transitions(
    mut commands: Commands,
    time: Res<Time>,
    mut sequences: Query<(Entity, &mut TransitionSequence)>,
    mut overlays: Query<&mut FadeOverlay>,
    mut cameras: Query<&mut SceneCamera>,
) {
    let delta = time.delta_secs();

    for (entity, mut sequence) in sequences.iter_mut() {
        match sequence.phase {
            TransitionPhase::FadeIn => {
                if fade_step(&mut sequence, &mut overlays, delta, 0.0, 1.0) {
                    sequence.phase = TransitionPhase::Swap;
                }
            }
            TransitionPhase::Swap => {
                swap_cameras(sequence.from, sequence.to, &mut cameras);
                sequence.phase = TransitionPhase::FadeOut;
                sequence.elapsed = 0.0;
            }
            TransitionPhase::FadeOut => {
                if fade_step(&mut sequence, &mut overlays, delta, 1.0, 0.0) {
                    logger::log("Camera transition завершён");
                    commands.entity(entity).despawn();
                }
            }
        }
    }
}

/// Один кадр fade-фазы; true когда фаза закончена (alpha на точной границе)
///
/// Насыщение elapsed даёт точный кламп на границе даже при одном огромном шаге.
/// Вырожденный phase_duration <= 0 завершает фазу сразу, но граничное
/// значение alpha всё равно выставляется. Отсутствие overlay пропускает
/// fade целиком — swap между фазами обязан произойти в любом случае.
fn fade_step(
    sequence: &mut TransitionSequence,
    overlays: &mut Query<&mut FadeOverlay>,
    delta: f32,
    start_alpha: f32,
    end_alpha: f32,
) -> bool {
    let Ok(mut overlay) = overlays.single_mut() else {
        return true;
    };

    sequence.elapsed = (sequence.elapsed + delta).min(sequence.phase_duration);
    if sequence.elapsed >= sequence.phase_duration {
        overlay.alpha = end_alpha;
        return true;
    }

    let fraction = sequence.elapsed / sequence.phase_duration;
    overlay.alpha = start_alpha + (end_alpha - start_alpha) * fraction;
    false
}

/// Swap камер: from гаснет, to включается
///
/// Отсутствующая (или уже удалённая) камера — no-op для своей половины,
/// никогда не паника.
fn swap_cameras(
    from: Option<Entity>,
    to: Option<Entity>,
    cameras: &mut Query<&mut SceneCamera>,
) {
    if let Some(from) = from {
        if let Ok(mut camera) = cameras.get_mut(from) {
            camera.enabled = false;
        }
    }
    if let Some(to) = to {
        if let Ok(mut camera) = cameras.get_mut(to) {
            camera.enabled = true;
        }
    }
    logger::log("Камеры переключены");
}
