use bevy::prelude::*;
use bevy::log::LogPlugin;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::configuration::config::ViewerConfig;
use crate::simulation::scenario::OrbitRun;

const CENTRAL_RADIUS: f32 = 12.0; // screen pixels, not to scale
const SATELLITE_RADIUS: f32 = 4.0;
const PANEL_ORIGIN: Vec2 = Vec2::new(-380.0, -330.0); // bottom-left of the energy panel
const PANEL_SIZE: Vec2 = Vec2::new(760.0, 110.0);

#[derive(Component)]
struct Satellite;

/// One downsampled point of the path
struct PathPoint {
    index: usize, // index into the run
    screen: Vec2,
    color: Color, // speed colour
}

/// Everything the viewer reads, computed once before the window opens
#[derive(Resource)]
struct Playback {
    run: OrbitRun,
    scale: f32,
    frame_skip: usize,
    cursor: usize,
    path: Vec<PathPoint>,
    kinetic: Vec<Vec2>,
    potential: Vec<Vec2>,
    total: Vec<Vec2>,
}

impl Playback {
    fn new(run: OrbitRun, viewer: &ViewerConfig) -> Self {
        let frame_skip = viewer.frame_skip.max(1);
        let scale = viewer.scale;
        let indices = sample_indices(run.len(), frame_skip);

        let (lo, hi) = finite_range(indices.iter().map(|&i| run.speeds[i]));
        let path = indices
            .iter()
            .filter(|&&i| run.trajectory[i].is_finite())
            .map(|&i| {
                let p = run.trajectory[i].position;
                let t = if hi > lo { (run.speeds[i] - lo) / (hi - lo) } else { 0.0 };
                PathPoint {
                    index: i,
                    screen: Vec2::new(p.x as f32, p.y as f32) * scale,
                    color: speed_color(t as f32),
                }
            })
            .collect();

        // Shared vertical scale so the three curves stay comparable
        let e = &run.energy;
        let peak = indices
            .iter()
            .flat_map(|&i| [e.kinetic[i], e.potential[i], e.total[i]])
            .filter(|v| v.is_finite())
            .fold(0.0_f64, |m, v| m.max(v.abs()));
        let last = run.len().saturating_sub(1).max(1) as f32;
        let curve = |series: &[f64]| -> Vec<Vec2> {
            indices
                .iter()
                .filter(|&&i| series[i].is_finite())
                .map(|&i| {
                    let y = if peak > 0.0 { series[i] / peak } else { 0.0 };
                    panel_point(i as f32 / last, y as f32)
                })
                .collect()
        };
        let kinetic = curve(&e.kinetic[..]);
        let potential = curve(&e.potential[..]);
        let total = curve(&e.total[..]);

        Self {
            run,
            scale,
            frame_skip,
            cursor: 0,
            path,
            kinetic,
            potential,
            total,
        }
    }
}

/// Open a Bevy window animating `run`
pub fn run_2d(run: OrbitRun, viewer: &ViewerConfig) {
    log::info!("run_2d: starting Bevy 2D viewer over {} recorded states", run.len());

    App::new()
        .insert_resource(Playback::new(run, viewer))
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Orbital Simulation".into(),
                        ..default()
                    }),
                    ..default()
                })
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, setup_scene_system)
        // advance last so the first frame shows the launch state
        .add_systems(Update, (sync_satellite_system, draw_gizmos_system, advance_playback_system).chain())
        .run();
}

fn setup_scene_system(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    commands.spawn(Camera2dBundle::default());

    // central body at the origin
    commands.spawn(MaterialMesh2dBundle {
        mesh: Mesh2dHandle(meshes.add(Circle::new(CENTRAL_RADIUS))),
        material: materials.add(ColorMaterial::from(Color::srgb(1.0, 0.65, 0.0))),
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });

    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(SATELLITE_RADIUS))),
            material: materials.add(ColorMaterial::from(Color::srgb(0.2, 0.4, 1.0))),
            transform: Transform::from_xyz(0.0, 0.0, 1.0),
            ..Default::default()
        },
        Satellite,
    ));
}

fn advance_playback_system(mut playback: ResMut<Playback>) {
    let len = playback.run.len();
    playback.cursor = next_cursor(playback.cursor, playback.frame_skip, len);
}

/// Step the playback forward, wrapping back to the launch state
fn next_cursor(cursor: usize, frame_skip: usize, len: usize) -> usize {
    let next = cursor + frame_skip;
    if next < len { next } else { 0 }
}

fn sync_satellite_system(playback: Res<Playback>, mut query: Query<&mut Transform, With<Satellite>>) {
    let Some(state) = playback.run.trajectory.get(playback.cursor) else {
        return;
    };
    if !state.is_finite() {
        return;
    }
    for mut transform in &mut query {
        transform.translation.x = state.position.x as f32 * playback.scale;
        transform.translation.y = state.position.y as f32 * playback.scale;
    }
}

fn draw_gizmos_system(mut gizmos: Gizmos, playback: Res<Playback>) {
    // full path coloured by speed
    gizmos.linestrip_gradient_2d(playback.path.iter().map(|p| (p.screen, p.color)));

    // trail up to the current state
    let trail = playback
        .path
        .iter()
        .take_while(|p| p.index <= playback.cursor)
        .map(|p| p.screen);
    gizmos.linestrip_2d(trail, Color::WHITE);

    // energy panel
    let grey = Color::srgb(0.4, 0.4, 0.4);
    gizmos.line_2d(panel_point(0.0, 0.0), panel_point(1.0, 0.0), grey);
    gizmos.linestrip_2d(playback.kinetic.iter().copied(), Color::srgb(0.2, 0.6, 1.0));
    gizmos.linestrip_2d(playback.potential.iter().copied(), Color::srgb(1.0, 0.5, 0.1));
    gizmos.linestrip_2d(playback.total.iter().copied(), Color::srgb(0.3, 0.9, 0.3));

    let last = playback.run.len().saturating_sub(1).max(1) as f32;
    let x = playback.cursor as f32 / last;
    gizmos.line_2d(panel_point(x, -1.0), panel_point(x, 1.0), grey);
}

/// Every `skip`-th index, always ending on the last one
fn sample_indices(len: usize, skip: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).step_by(skip.max(1)).collect();
    if let Some(&last) = indices.last() {
        if last + 1 != len {
            indices.push(len - 1);
        }
    }
    indices
}

/// Plasma-like ramp: dark purple (slow), magenta, yellow (fast)
fn speed_color(t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let (a, b, u) = if t < 0.5 {
        ([0.05, 0.03, 0.53], [0.80, 0.28, 0.47], t * 2.0)
    } else {
        ([0.80, 0.28, 0.47], [0.94, 0.98, 0.13], (t - 0.5) * 2.0)
    };
    let mix = |k: usize| a[k] + (b[k] - a[k]) * u;
    Color::srgb(mix(0), mix(1), mix(2))
}

// x in [0, 1] along the run, y in [-1, 1]
fn panel_point(x: f32, y: f32) -> Vec2 {
    PANEL_ORIGIN + Vec2::new(x * PANEL_SIZE.x, (y + 1.0) * 0.5 * PANEL_SIZE.y)
}

fn finite_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}
