use std::time::Duration;

use anyhow::Result;
use log::{debug, info};

use rusted_runner::engine::game_loop::FixedStepClock;
use rusted_runner::engine::input::{Action, ActionState};
use rusted_runner::engine::physics::{presets, ColliderTag, PhysicsWorld};
use rusted_runner::game::characters::{InputEvents, MacroState, Runner, RunnerConfig};
use rusted_runner::game::{GameSession, Screen};

/// Wall-clock length of one synthetic frame
const FRAME_TIME: Duration = Duration::from_millis(16);

/// Stop after this much simulated time even if the runner survives
const MAX_SIMULATED: Duration = Duration::from_secs(20);

/// Scripted input: (time, action, held)
static SCRIPT: [(Duration, Action, bool); 6] = [
    (Duration::from_millis(1000), Action::Jump, true),
    (Duration::from_millis(1100), Action::Jump, false),
    (Duration::from_millis(2000), Action::Slide, true),
    (Duration::from_millis(2600), Action::Slide, false),
    (Duration::from_millis(3000), Action::Attack, true),
    (Duration::from_millis(3100), Action::Attack, false),
];

/// Ground strip with a gap, an enemy and a row of spikes
fn build_level(physics: &mut PhysicsWorld) {
    // Top surface at y = 0, x in [-5, 30]
    let ground = physics.add_rigid_body(presets::fixed_body(12.5, -0.5));
    physics.add_tagged_collider(presets::ground_collider(35.0, 1.0), ground, ColliderTag::Ground);

    // Past the gap, x in [34, 80]
    let far_ground = physics.add_rigid_body(presets::fixed_body(57.0, -0.5));
    physics.add_tagged_collider(
        presets::ground_collider(46.0, 1.0),
        far_ground,
        ColliderTag::Ground,
    );

    let enemy = physics.add_rigid_body(presets::fixed_body(12.0, 1.0));
    physics.add_tagged_collider(presets::enemy_collider(1.0, 2.0), enemy, ColliderTag::Enemy);

    let spikes = physics.add_rigid_body(presets::fixed_body(22.0, 0.25));
    physics.add_tagged_collider(presets::hazard_collider(1.0, 0.5), spikes, ColliderTag::Hazard);
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Rusted Runner...");

    let mut physics = PhysicsWorld::new();
    build_level(&mut physics);

    let config = RunnerConfig::default();
    let starting_health = config.starting_health;
    let mut runner = Runner::spawn(config, &mut physics, 0.0, 1.05)?;
    let mut session = GameSession::new(starting_health);
    let mut clock = FixedStepClock::new();
    physics.set_timestep(clock.step_secs());

    let mut actions = ActionState::new();
    let mut script = SCRIPT.iter().peekable();
    let mut last_state = runner.controller.macro_state();

    info!("{} | {}", session.health_text(), last_state.animation_name());

    while session.screen() == Screen::Playing && clock.simulated() < MAX_SIMULATED {
        let steps = clock.advance(FRAME_TIME);

        for _ in 0..steps {
            while let Some((_, action, held)) =
                script.next_if(|(at, _, _)| *at <= clock.simulated())
            {
                debug!("{} {}", action.name(), if *held { "down" } else { "up" });
                actions.set(*action, *held);
            }

            let input = InputEvents::from_actions(&actions);
            let out = runner.update(&mut physics, clock.step(), &input);
            session.apply(&out);
            actions.end_frame();

            physics.step();

            let events = physics.get_collision_events();
            for out in runner.handle_collisions(&mut physics, &events) {
                session.apply(&out);
                info!("{}", session.health_text());
            }

            let state = runner.controller.macro_state();
            if state != last_state {
                debug!(
                    "{} -> {} at {:?} [{}]",
                    last_state.animation_name(),
                    state.animation_name(),
                    clock.simulated(),
                    runner.animator.active_names().join(", ")
                );
                last_state = state;
            }
            runner.animator.take_triggers();
        }
    }

    let position = runner.position(&physics).unwrap_or_default();
    info!(
        "Finished after {:?} ({} frames, {} ticks) at x = {:.1}: {} | {}",
        clock.simulated(),
        clock.frame_count(),
        clock.tick_count(),
        position.x,
        session.health_text(),
        if runner.controller.macro_state() == MacroState::Dead { "dead" } else { "alive" }
    );

    if let Some(scene) = session.back_to_menu() {
        info!("Loading {}", scene);
    }

    Ok(())
}
