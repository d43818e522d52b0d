//! Path events

use bevy::prelude::*;

/// Event: намерение запустить прогон пути
///
/// Генерируется:
/// - UI кнопка (host-слой, по клику)
/// - Key press (host-слой, клавиша R)
/// - Программный вызов (send_event)
///
/// Все три входа эквивалентны; валидация (busy, пустой список waypoints)
/// происходит в start_runs.
#[derive(Event, Debug, Clone)]
pub struct StartRunIntent {
    pub entity: Entity,
}

/// Event: намерение вернуть камеры/UI в состояние "до hand-off"
///
/// Игнорируется пока прогон busy. Позицию актора НЕ возвращает —
/// восстанавливаются только camera enable-флаги и interactable триггера.
#[derive(Event, Debug, Clone)]
pub struct ResetIntent {
    pub entity: Entity,
}

/// Event: прогон завершён (последний сегмент пройден или путь был пуст
/// геометрически). Hand-off к этому моменту уже запрошен.
#[derive(Event, Debug, Clone)]
pub struct RunCompleted {
    pub entity: Entity,
}
