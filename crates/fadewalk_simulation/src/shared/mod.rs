//! Shared domain — cross-cutting компоненты
//!
//! Внешне наблюдаемые флаги, которыми владеют core-системы:
//! - Camera (SceneCamera.enabled)
//! - Trigger UI (RunTrigger.visible / RunTrigger.interactable)

pub mod camera;
pub mod trigger;

// Re-export all components
pub use camera::*;
pub use trigger::*;
