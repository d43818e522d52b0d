//! Path systems: запуск, покадровое продвижение, reset

use bevy::prelude::*;

use crate::logger;
use crate::shared::{RunTrigger, SceneCamera};
use crate::transition::TransitionRequest;

use super::components::{next_segment, PathMover, PathRun, HANDOFF_DURATION};
use super::events::{ResetIntent, RunCompleted, StartRunIntent};

/// Система: валидация StartRunIntent и запуск прогона
///
/// Отклоняет intent с warning когда прогон уже busy или waypoints пусты.
/// На успехе: полный путь = [текущая позиция] ++ waypoints, триггер прячется
/// (и обратно сам не возвращается), выбирается первый невырожденный сегмент.
pub fn start_runs(
    mut intents: EventReader<StartRunIntent>,
    mut movers: Query<(&PathMover, &mut PathRun, &Transform)>,
    mut triggers: Query<&mut RunTrigger>,
    mut handoffs: EventWriter<TransitionRequest>,
    mut completed: EventWriter<RunCompleted>,
) {
    for intent in intents.read() {
        let Ok((mover, mut run, transform)) = movers.get_mut(intent.entity) else {
            logger::log_warning(&format!(
                "Run отклонён: {:?} не является path mover",
                intent.entity
            ));
            continue;
        };

        if run.is_busy() {
            logger::log_warning(&format!("Run отклонён: {:?} уже в пути", intent.entity));
            continue;
        }

        if mover.waypoints.is_empty() {
            logger::log_warning(&format!(
                "Run отклонён: пустой список waypoints у {:?}",
                intent.entity
            ));
            continue;
        }

        // Полный путь: стартовая точка синтезируется из позиции актора
        let mut path = Vec::with_capacity(mover.waypoints.len() + 1);
        path.push(transform.translation);
        path.extend_from_slice(&mover.waypoints);

        // Кнопка прячется на весь остаток процесса
        if let Some(trigger) = mover.trigger {
            if let Ok(mut ui) = triggers.get_mut(trigger) {
                ui.visible = false;
            }
        }

        match next_segment(&path, 0, mover.speed) {
            Some((segment, plan)) => {
                logger::log_info(&format!(
                    "Run стартовал: {:?}, {} waypoints",
                    intent.entity,
                    mover.waypoints.len()
                ));
                *run = PathRun::Active {
                    path,
                    segment,
                    elapsed: 0.0,
                    plan,
                };
            }
            None => {
                // Все сегменты вырожденные: мгновенное завершение,
                // hand-off всё равно запрашивается
                logger::log(&format!(
                    "Run без движения (все сегменты < epsilon): {:?}",
                    intent.entity
                ));
                finish_run(intent.entity, mover, &mut handoffs, &mut completed);
            }
        }
    }
}

/// Система: покадровое продвижение активных прогонов
///
/// Позиция — линейная интерполяция по времени сегмента (elapsed насыщается
/// на duration, финальный кадр попадает ровно в end). Поворот — экспоненциально
/// демпфируется к target_rotation с фактором min(turn_rate * dt, 1) и НЕ
/// синхронизирован с позицией; остаточная ошибка снимается snap'ом на границе
/// сегмента. Остаток пересечённого кадра не переносится на следующий сегмент.
pub fn advance_runs(
    time: Res<Time>,
    mut movers: Query<(Entity, &PathMover, &mut PathRun, &mut Transform)>,
    mut handoffs: EventWriter<TransitionRequest>,
    mut completed: EventWriter<RunCompleted>,
) {
    let delta = time.delta_secs();

    for (entity, mover, mut run, mut transform) in movers.iter_mut() {
        let PathRun::Active {
            path,
            segment,
            elapsed,
            plan,
        } = &mut *run
        else {
            continue;
        };

        *elapsed = (*elapsed + delta).min(plan.duration);
        let fraction = *elapsed / plan.duration;
        transform.translation = plan.start.lerp(plan.end, fraction);

        let turn = (mover.turn_rate * delta).min(1.0);
        transform.rotation = transform.rotation.slerp(plan.target_rotation, turn);

        if *elapsed < plan.duration {
            continue;
        }

        // Сегмент завершён: точные значения вместо остатков интерполяции
        transform.translation = plan.end;
        transform.rotation = plan.target_rotation;

        match next_segment(path, *segment + 1, mover.speed) {
            Some((next, next_plan)) => {
                *segment = next;
                *elapsed = 0.0;
                *plan = next_plan;
            }
            None => {
                logger::log_info(&format!("Path пройден: {:?}", entity));
                *run = PathRun::Idle;
                finish_run(entity, mover, &mut handoffs, &mut completed);
            }
        }
    }
}

/// Система: reset камер и триггера
///
/// Пока прогон busy — игнорируется. Возвращает enable-флаги камер в состояние
/// "до hand-off" и interactable триггера. Позиция актора сознательно не
/// восстанавливается (переход односторонний, см. DESIGN.md).
pub fn apply_resets(
    mut intents: EventReader<ResetIntent>,
    movers: Query<(&PathMover, &PathRun)>,
    mut cameras: Query<&mut SceneCamera>,
    mut triggers: Query<&mut RunTrigger>,
) {
    for intent in intents.read() {
        let Ok((mover, run)) = movers.get(intent.entity) else {
            continue;
        };

        if run.is_busy() {
            continue;
        }

        if let Some(from) = mover.from_camera {
            if let Ok(mut camera) = cameras.get_mut(from) {
                camera.enabled = true;
            }
        }
        if let Some(to) = mover.to_camera {
            if let Ok(mut camera) = cameras.get_mut(to) {
                camera.enabled = false;
            }
        }
        if let Some(trigger) = mover.trigger {
            if let Ok(mut ui) = triggers.get_mut(trigger) {
                ui.interactable = true;
            }
        }

        logger::log(&format!(
            "Reset: камеры и триггер восстановлены для {:?}",
            intent.entity
        ));
    }
}

/// Завершение прогона: запрос hand-off + RunCompleted
///
/// Отсутствие любой из камер — не ошибка: hand-off становится no-op
/// с warning, прогон всё равно считается завершённым.
fn finish_run(
    entity: Entity,
    mover: &PathMover,
    handoffs: &mut EventWriter<TransitionRequest>,
    completed: &mut EventWriter<RunCompleted>,
) {
    match (mover.from_camera, mover.to_camera) {
        (Some(from), Some(to)) => {
            handoffs.write(TransitionRequest {
                from: Some(from),
                to: Some(to),
                duration: HANDOFF_DURATION,
            });
        }
        _ => {
            logger::log_warning(&format!(
                "Hand-off пропущен для {:?}: заданы не обе камеры",
                entity
            ));
        }
    }

    completed.write(RunCompleted { entity });
}
