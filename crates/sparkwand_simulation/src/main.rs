//! Headless симуляция SPARKWAND
//!
//! Один кастер, один моб, стена за мобом. Два выстрела: мимо (в стену) и в моба
//! с energy surround кольцом.

use bevy::prelude::*;
use serde_json::json;
use sparkwand_simulation::*;

fn main() {
    let seed = DEFAULT_SEED;
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin::default());

    log_info(&format!("Starting SPARKWAND headless simulation (seed: {})", seed));

    let caster = app
        .world_mut()
        .spawn((Transform::from_xyz(0.0, 0.0, 0.0).looking_to(Vec3::X, Vec3::Y), Player, Hurtbox::default()))
        .id();

    app.world_mut()
        .spawn((Transform::from_xyz(8.0, 1.6, 0.0), Hurtbox::default()));

    {
        let mut blocks = app.world_mut().resource_mut::<VoxelWorld>();
        for y in -2..6 {
            for z in -6..6 {
                blocks.set_block(IVec3::new(12, y, z), BlockId::new("minecraft:stone"));
            }
        }
    }

    let shots = [
        json!({ "name": "basic_spark", "damage": 6, "speed": 0.8, "scale": 0.25, "lifetime": 60,
                "special": ["kubejs:energy_surround"] }),
        json!({ "name": "fireball", "damage": 20, "speed": 1.0, "scale": 1.0, "lifetime": 60 }),
    ];

    for data in shots {
        app.world_mut()
            .send_event(WandDataReceived::new(caster, "wand", data));
    }

    for tick in 0..80 {
        run_ticks(&mut app, 1);

        for hit in app.world().resource::<Events<ParticleHit>>().iter_current_update_events() {
            log_info(&format!("{} → {:?}: {}", hit.channel, hit.owner, hit.to_payload()));
        }

        if tick % 10 == 0 {
            let registry = app.world().resource::<PositionRegistry>();
            let entity_count = app.world().entities().len();
            log_info(&format!(
                "Tick {}: {} entities, {} live sparks",
                tick,
                entity_count,
                registry.len()
            ));
        }
    }

    log_info("Simulation complete!");
}
