//! Transition компоненты: overlay и FSM одной последовательности

use bevy::prelude::*;

/// Полноэкранная подложка, маскирующая camera swap
///
/// Ровно одна на сцену; все последовательности пишут в неё. Core владеет
/// только color/alpha — рендер подложки принадлежит host-слою.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct FadeOverlay {
    /// RGB (alpha анимируется отдельно)
    pub color: Vec3,
    /// Текущая непрозрачность [0, 1]
    pub alpha: f32,
}

impl Default for FadeOverlay {
    fn default() -> Self {
        Self {
            color: Vec3::ONE, // белый
            alpha: 0.0,
        }
    }
}

/// Фаза перехода
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Overlay затемняется 0 → 1 за duration/2
    FadeIn,
    /// Мгновенный swap камер, ровно один кадр между fade-фазами
    Swap,
    /// Overlay растворяется 1 → 0 за duration/2
    FadeOut,
}

/// FSM одного перехода (entity спавнится на запрос, despawn по завершению)
///
/// Нет отмены: начатая последовательность всегда доходит до конца,
/// даже если камеры к моменту swap уже не существуют.
#[derive(Component, Debug, Clone)]
pub struct TransitionSequence {
    pub from: Option<Entity>,
    pub to: Option<Entity>,
    pub phase: TransitionPhase,
    /// Время внутри текущей fade-фазы (насыщается на phase_duration)
    pub elapsed: f32,
    /// duration / 2 — каждая fade-фаза занимает половину запроса
    pub phase_duration: f32,
}

impl TransitionSequence {
    pub fn new(from: Option<Entity>, to: Option<Entity>, duration: f32) -> Self {
        Self {
            from,
            to,
            phase: TransitionPhase::FadeIn,
            elapsed: 0.0,
            phase_duration: duration * 0.5,
        }
    }
}
