//! Headless демо FADEWALK
//!
//! Прогоняет демо-сценарий: walk по двум waypoints → camera hand-off

use bevy::prelude::*;
use fadewalk_simulation::*;

fn main() {
    println!("Starting FADEWALK headless demo (60 Hz)");

    let mut app = create_headless_app();

    let before = app.world_mut().spawn(SceneCamera::active()).id();
    let after = app.world_mut().spawn(SceneCamera::standby()).id();
    let trigger = app.world_mut().spawn(RunTrigger::default()).id();
    app.world_mut().spawn(FadeOverlay::default());

    let actor = app
        .world_mut()
        .spawn((
            Transform::from_translation(Vec3::new(0.0, 0.0, 5.0)),
            PathMover {
                waypoints: vec![Vec3::new(10.0, 0.0, 5.0), Vec3::new(10.0, 0.0, 15.0)],
                from_camera: Some(before),
                to_camera: Some(after),
                trigger: Some(trigger),
                ..Default::default()
            },
            PathRun::default(),
        ))
        .id();

    // Программный триггер (эквивалент клика по кнопке или клавиши R)
    app.world_mut().send_event(StartRunIntent { entity: actor });

    // 6 секунд хватает на walk (4 s) + hand-off (1.5 s)
    for tick in 0..360 {
        advance_frame(&mut app, 1.0 / 60.0);

        if tick % 30 == 0 {
            let position = app
                .world()
                .get::<Transform>(actor)
                .map(|t| t.translation)
                .unwrap_or_default();
            let target_enabled = app
                .world()
                .get::<SceneCamera>(after)
                .map(|c| c.enabled)
                .unwrap_or_default();
            println!(
                "Tick {}: position ({:.2}, {:.2}, {:.2}), target camera enabled: {}",
                tick, position.x, position.y, position.z, target_enabled
            );
        }
    }

    println!("Demo complete");
}
