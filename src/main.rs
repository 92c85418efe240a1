use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::ecs::system::SystemId;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bl_config::{AppearanceConfig, BlConfigPlugin};
use bl_core::{AvatarShape, BlCorePlugin, BodyType, Extra};
use bl_extras::{
    move_extra, rotate_extra, spawn_extra, stop_group_emote, trigger_group_emote, BlExtrasPlugin,
    ExtraSpawnParams, ExtrasRegistry, ExtrasRng,
};
use bl_tween::{BlTweenPlugin, TweenCompleted, TweenKind};

const CROWD_SIZE: usize = 6;
const STROLL_SECONDS: f32 = 2.0;
const EMOTE_SECONDS: f32 = 2.0;
const FRAME_MILLIS: u64 = 33;

fn main() {
    let mut app = App::new();
    app.add_plugins(
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_millis(
            FRAME_MILLIS,
        ))),
    )
    .add_plugins(StatesPlugin)
    // Seeded rng so repeated runs produce the same crowd
    .insert_resource(ExtrasRng::seeded(42))
    .add_plugins((BlCorePlugin, BlConfigPlugin, BlExtrasPlugin, BlTweenPlugin))
    .init_state::<DemoPhase>()
    .init_resource::<Arrivals>()
    .insert_resource(EmoteTimer(Timer::from_seconds(
        EMOTE_SECONDS,
        TimerMode::Once,
    )));

    // One-shot callback demonstrating the tween completion hook
    let callback = app.world_mut().register_system(bob_arrived);
    app.insert_resource(BobArrival(callback));

    app.add_systems(Startup, spawn_crowd)
        .add_systems(
            Update,
            (
                watch_arrivals.run_if(in_state(DemoPhase::Stroll)),
                run_emote_phase.run_if(in_state(DemoPhase::Emote)),
            ),
        )
        .add_systems(OnEnter(DemoPhase::Emote), start_crowd_emote)
        .add_systems(OnEnter(DemoPhase::Done), report_and_exit)
        .run();
}

/// Demo phase - extras stroll in, emote together, then the app exits.
#[derive(States, Default, Clone, Eq, PartialEq, Hash, Debug)]
enum DemoPhase {
    #[default]
    Stroll,
    Emote,
    Done,
}

/// Number of extras that finished their stroll.
#[derive(Resource, Default)]
struct Arrivals(usize);

/// How long the crowd holds its emote before the demo winds down.
#[derive(Resource)]
struct EmoteTimer(Timer);

/// One-shot system run when Bob's move tween completes.
#[derive(Resource)]
struct BobArrival(SystemId);

fn bob_arrived() {
    println!("Bob reached his mark.");
}

/// Spawn the crowd and start everyone walking to their marks.
fn spawn_crowd(
    mut commands: Commands,
    mut registry: ResMut<ExtrasRegistry>,
    config: Res<AppearanceConfig>,
    mut rng: ResMut<ExtrasRng>,
    bob_arrival: Res<BobArrival>,
) {
    println!("Spawning {} extras...", CROWD_SIZE);

    let names = ["Ana", "Bob", "Carla", "Dmitri", "Eve", "Farid"];
    let bodies = [
        BodyType::Female,
        BodyType::Male,
        BodyType::Female,
        BodyType::Male,
        BodyType::Female,
        BodyType::Male,
    ];

    for i in 0..CROWD_SIZE {
        let start = Vec3::new(i as f32 * 2.0 - 5.0, 0.0, -8.0);
        let mark = Vec3::new(i as f32 * 2.0 - 5.0, 0.0, 0.0);

        let mut params = ExtraSpawnParams::new(
            Transform::from_translation(start),
            bodies[i],
            names[i],
        );

        // Bob gets a custom outfit and bound emotes; everyone else is random
        if names[i] == "Bob" {
            params = params
                .with_wearables(vec!["shirt_01".to_string()])
                .with_emotes(vec!["robot".to_string(), "wave".to_string()]);
        }

        let extra = spawn_extra(&mut commands, &mut registry, &config, &mut rng.0, params);

        let callback = (names[i] == "Bob").then(|| bob_arrival.0);
        move_extra(&mut commands, extra, start, mark, STROLL_SECONDS, callback);
        rotate_extra(
            &mut commands,
            extra,
            Quat::IDENTITY,
            Quat::from_rotation_y(std::f32::consts::PI),
            STROLL_SECONDS,
            None,
        );
    }

    println!("{} extras registered.", registry.len());
}

/// Count finished strolls and move on once the whole crowd is in place.
fn watch_arrivals(
    mut events: EventReader<TweenCompleted>,
    mut arrivals: ResMut<Arrivals>,
    mut next_phase: ResMut<NextState<DemoPhase>>,
) {
    for event in events.read() {
        if event.kind == TweenKind::Move {
            arrivals.0 += 1;
        }
    }

    if arrivals.0 >= CROWD_SIZE {
        println!("Crowd in place, triggering group emote.");
        next_phase.set(DemoPhase::Emote);
    }
}

/// One emote id broadcasts to the whole crowd.
fn start_crowd_emote(mut shapes: Query<&mut AvatarShape, With<Extra>>) {
    let emotes = vec!["robot".to_string()];
    let mut group: Vec<&mut AvatarShape> = shapes.iter_mut().map(Mut::into_inner).collect();
    trigger_group_emote(&mut group, &emotes);
}

/// Hold the emote, then stop everyone and wind down.
fn run_emote_phase(
    time: Res<Time>,
    mut timer: ResMut<EmoteTimer>,
    mut transforms: Query<&mut Transform, With<Extra>>,
    mut next_phase: ResMut<NextState<DemoPhase>>,
) {
    timer.0.tick(time.delta());
    if !timer.0.just_finished() {
        return;
    }

    let mut group: Vec<&mut Transform> = transforms.iter_mut().map(Mut::into_inner).collect();
    stop_group_emote(&mut group);

    println!("Emotes stopped.");
    next_phase.set(DemoPhase::Done);
}

fn report_and_exit(
    registry: Res<ExtrasRegistry>,
    names: Query<&Name, With<Extra>>,
    mut exit: EventWriter<AppExit>,
) {
    println!("Scene extras ({}):", registry.len());
    for &entity in registry.iter() {
        if let Ok(name) = names.get(entity) {
            println!("  {}", name.as_str());
        }
    }
    exit.send(AppExit::Success);
}
