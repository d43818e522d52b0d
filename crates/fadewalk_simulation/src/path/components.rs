//! Path компоненты: конфигурация прогона, FSM состояния, геометрия сегмента

use bevy::prelude::*;

/// Сегменты короче этого порога пропускаются (нет деления на ноль)
pub const SEGMENT_EPSILON: f32 = 0.1;

/// Длительность camera hand-off после прохождения пути (секунды).
/// Константа перехода, не связана со скоростью движения.
pub const HANDOFF_DURATION: f32 = 1.5;

/// Конфигурация scripted walk для актора
///
/// Waypoints задаются извне (markers уровня); стартовая точка пути
/// синтезируется из текущей позиции актора при запуске прогона.
#[derive(Component, Debug, Clone)]
pub struct PathMover {
    /// Упорядоченный список точек (без стартовой позиции актора)
    pub waypoints: Vec<Vec3>,
    /// Линейная скорость (м/с), постоянная на всём пути
    pub speed: f32,
    /// Скорость экспоненциального демпфирования поворота (1/с)
    pub turn_rate: f32,
    /// Камера "до" hand-off
    pub from_camera: Option<Entity>,
    /// Камера "после" hand-off
    pub to_camera: Option<Entity>,
    /// UI-триггер запуска (прячется при старте)
    pub trigger: Option<Entity>,
}

impl Default for PathMover {
    fn default() -> Self {
        Self {
            waypoints: Vec::new(),
            speed: 5.0,      // м/с — базовая скорость прогона
            turn_rate: 10.0, // достаточно быстро, чтобы доворот заканчивался внутри сегмента
            from_camera: None,
            to_camera: None,
            trigger: None,
        }
    }
}

/// FSM одного прогона пути
///
/// Active == busy-флаг: повторный StartRunIntent отклоняется пока прогон идёт.
/// Состояние мутируется in place (без deferred commands), поэтому два intent
/// в одном кадре не могут запустить два прогона.
#[derive(Component, Debug, Clone, PartialEq)]
pub enum PathRun {
    /// Прогона нет; актор стоит где остановился
    Idle,

    /// Прогон идёт
    Active {
        /// Полный путь: [стартовая позиция] ++ waypoints
        path: Vec<Vec3>,
        /// Индекс начальной точки текущего сегмента в path
        segment: usize,
        /// Время внутри сегмента (насыщается на plan.duration)
        elapsed: f32,
        /// Производные данные текущего сегмента
        plan: Segment,
    },
}

impl Default for PathRun {
    fn default() -> Self {
        Self::Idle
    }
}

impl PathRun {
    pub fn is_busy(&self) -> bool {
        matches!(self, PathRun::Active { .. })
    }
}

/// Производные данные одного отрезка пути
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec3,
    pub end: Vec3,
    /// length / speed
    pub duration: f32,
    /// Поворот лицом вдоль сегмента (up = +Y)
    pub target_rotation: Quat,
}

impl Segment {
    /// None для вырожденного сегмента (length < SEGMENT_EPSILON)
    pub fn between(start: Vec3, end: Vec3, speed: f32) -> Option<Self> {
        let length = start.distance(end);
        if length < SEGMENT_EPSILON {
            return None;
        }
        let direction = (end - start) / length;
        Some(Self {
            start,
            end,
            duration: length / speed,
            target_rotation: facing(direction),
        })
    }
}

/// Поворот, смотрящий вдоль direction (forward = -Z у Bevy, up = +Y)
pub fn facing(direction: Vec3) -> Quat {
    Transform::IDENTITY.looking_to(direction, Vec3::Y).rotation
}

/// Первый невырожденный сегмент начиная с точки from
///
/// Возвращает (индекс начальной точки, Segment). Вырожденные пары
/// пропускаются молча — это не ошибка.
pub fn next_segment(path: &[Vec3], from: usize, speed: f32) -> Option<(usize, Segment)> {
    for i in from..path.len().saturating_sub(1) {
        if let Some(plan) = Segment::between(path[i], path[i + 1], speed) {
            return Some((i, plan));
        }
    }
    None
}
