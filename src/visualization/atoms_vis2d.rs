use std::time::Duration;

use bevy::log::LogPlugin;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::WindowResolution;

use crate::simulation::engine::Engine;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::Rgb;
use crate::visualization::canvas::{Canvas, FrameLog};

#[derive(Component)]
struct AtomIndex(pub usize);

/// Last frame the scenario rendered; entity transforms follow it.
#[derive(Resource)]
struct CanvasFrame(FrameLog);

/// Start gate and remaining tick budget.
#[derive(Resource)]
struct Playback {
    started: bool,
    remaining: u64,
}

/// Bevy's fixed timestep rejects a zero period
const MIN_STEP: Duration = Duration::from_millis(1);

pub fn run_2d(scenario: Scenario, engine: Engine) {
    let params = &scenario.parameters;
    log::info!(
        "run_2d: starting Bevy 2D viewer with {} atoms, press any key to start",
        scenario.system.len()
    );

    let mut frame = FrameLog::new();
    frame.begin(
        params.width as u32,
        params.height as u32,
        &params.title,
        params.background,
    );
    scenario.render(&mut frame);

    let window = Window {
        title: params.title.clone(),
        resolution: WindowResolution::new(params.width as f32, params.height as f32),
        resizable: false,
        ..Default::default()
    };
    let background = to_color(params.background);

    App::new()
        .insert_resource(ClearColor(background))
        .insert_resource(Time::<Fixed>::from_duration(engine.delay.max(MIN_STEP)))
        .insert_resource(Playback {
            started: false,
            remaining: engine.ticks,
        })
        .insert_resource(CanvasFrame(frame))
        .insert_resource(scenario)
        .add_plugins(
            DefaultPlugins
                .build()
                .disable::<LogPlugin>() // env_logger owns the global logger
                .set(WindowPlugin {
                    primary_window: Some(window),
                    ..Default::default()
                }),
        )
        .add_systems(Startup, setup_atoms_system)
        .add_systems(Update, (start_on_input_system, sync_transforms_system))
        .add_systems(FixedUpdate, physics_step_system.run_if(playing))
        .run();
}

fn to_color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.channels();
    Color::srgb_u8(r, g, b)
}

/// Canvas pixel (origin top-left, Y down) to world space (origin centre, Y up)
fn to_world(x: f32, y: f32, frame: &FrameLog) -> Vec2 {
    Vec2::new(
        x - frame.width as f32 / 2.0,
        frame.height as f32 / 2.0 - y,
    )
}

fn setup_atoms_system(
    mut commands: Commands,
    frame: Res<CanvasFrame>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2dBundle::default());

    for (i, disc) in frame.0.frame().iter().enumerate() {
        let (cx, cy) = disc.centre();
        let pos = to_world(cx, cy, &frame.0);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(disc.w as f32 / 2.0))),
                material: materials.add(ColorMaterial::from(to_color(disc.fill))),
                transform: Transform::from_xyz(pos.x, pos.y, 0.0),
                ..Default::default()
            },
            AtomIndex(i),
        ));
    }
}

fn start_on_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut playback: ResMut<Playback>,
) {
    if playback.started {
        return;
    }
    if keys.get_just_pressed().next().is_some() || mouse.get_just_pressed().next().is_some() {
        playback.started = true;
        log::info!("simulation started");
    }
}

fn playing(playback: Res<Playback>) -> bool {
    playback.started && playback.remaining > 0
}

fn physics_step_system(
    mut scenario: ResMut<Scenario>,
    mut frame: ResMut<CanvasFrame>,
    mut playback: ResMut<Playback>,
) {
    scenario.step();
    scenario.render(&mut frame.0);

    playback.remaining -= 1;
    if playback.remaining == 0 {
        log::info!(
            "finished after {} ticks, kinetic energy {:.6}; close the window to exit",
            scenario.system.tick,
            scenario.system.kinetic_energy()
        );
    }
}

fn sync_transforms_system(frame: Res<CanvasFrame>, mut query: Query<(&AtomIndex, &mut Transform)>) {
    if !frame.is_changed() {
        return;
    }
    let shapes = frame.0.frame();
    for (AtomIndex(i), mut transform) in &mut query {
        if let Some(disc) = shapes.get(*i) {
            let (cx, cy) = disc.centre();
            let pos = to_world(cx, cy, &frame.0);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}
