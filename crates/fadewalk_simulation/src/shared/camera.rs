//! Scene camera enable-flag component
//!
//! Симуляция владеет ТОЛЬКО флагом enabled. Остальные свойства камеры
//! (projection, transform, rendering) принадлежат host-слою.

use bevy::prelude::Component;

/// Камера сцены (точнее — её enable-флаг)
///
/// Ровно одна камера активна в нормальном состоянии. Camera swap внутри
/// transition — единственное место где core переключает флаги.
///
/// ВАЖНО: look-контроллер host-слоя может трогать тот же флаг. Контракт:
/// не переключать камеры пока идёт path run (см. apply_resets / camera swap).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneCamera {
    pub enabled: bool,
}

impl SceneCamera {
    /// Камера, которая сейчас рендерит ("before" в терминах hand-off)
    pub fn active() -> Self {
        Self { enabled: true }
    }

    /// Камера, ждущая своего swap ("after")
    pub fn standby() -> Self {
        Self { enabled: false }
    }
}
