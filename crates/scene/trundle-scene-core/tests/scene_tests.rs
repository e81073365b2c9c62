use approx::assert_relative_eq;
use nalgebra::Matrix4;
use trundle_motion_core::{Path, RollAnimator, Waypoint};
use trundle_raster_core::parse_circle_list;
use trundle_scene_core::{
    circle_frame, plan_frame, shadow_matrix, Axis, BallDrive, CircleMode, FillMode, Light, Mesh,
    SceneCommand, SceneState, Shading,
};

fn rolling_path() -> Path {
    Path::new(vec![
        Waypoint::new(-4.0, 1.0, 4.0),
        Waypoint::new(-1.0, 1.0, -4.0),
        Waypoint::new(3.0, 1.0, 5.0),
    ])
    .unwrap()
}

/// it should emit the full draw sequence with shadow enabled
#[test]
fn frame_plan_draw_sequence() {
    let state = SceneState::new();
    let light = Light::default();
    let mut animator = RollAnimator::new(rolling_path());
    let ball = animator.pose(2.0);

    let plan = plan_frame(&state, &light, &ball);
    let meshes: Vec<Mesh> = plan.calls.iter().map(|c| c.mesh).collect();
    assert_eq!(
        meshes,
        [Mesh::Sphere, Mesh::Floor, Mesh::Sphere, Mesh::Floor, Mesh::Axes]
    );

    // Sphere carries the ball transform; the shadow pass carries the
    // projected one.
    assert_eq!(plan.calls[0].transform, ball);
    assert!(plan.calls[2].shadow);
    assert_relative_eq!(
        plan.calls[2].transform,
        shadow_matrix(&light) * ball,
        epsilon = 1.0e-6
    );

    // First floor pass leaves the depth buffer alone; the second is
    // depth-only.
    assert!(!plan.calls[1].depth_write);
    assert!(plan.calls[1].color_write);
    assert!(plan.calls[3].depth_write);
    assert!(!plan.calls[3].color_write);

    assert_eq!(plan.view, state.camera.view_matrix());
}

/// it should skip the shadow pass when disabled
#[test]
fn shadow_off_drops_the_shadow_call() {
    let mut state = SceneState::new();
    state.apply(&SceneCommand::SetShadow(false));

    let plan = plan_frame(&state, &Light::default(), &Matrix4::identity());
    assert_eq!(plan.calls.len(), 4);
    assert!(plan.calls.iter().all(|c| !c.shadow));
}

/// it should thread fill modes from the options into the calls
#[test]
fn fill_modes_follow_options() {
    let mut state = SceneState::new();
    state.apply(&SceneCommand::ToggleSphereFill);

    let plan = plan_frame(&state, &Light::default(), &Matrix4::identity());
    assert_eq!(plan.calls[0].fill, FillMode::Wireframe);
    assert_eq!(plan.calls[1].fill, FillMode::Solid);
    assert_eq!(plan.options.sphere_fill, FillMode::Wireframe);
}

/// it should drive a full circle frame from a parsed document
#[test]
fn circle_scene_end_to_end() {
    let circles = parse_circle_list("2\n0 0 5\n40 40 2\n").unwrap();
    let batches = circle_frame(&circles, &CircleMode::List);
    assert_eq!(batches.len(), 2);
    assert!(batches[0].contains(&(0, 5)));
    assert!(batches[1].contains(&(42, 40)));

    // Phase 0 collapses every circle onto its center.
    let collapsed = circle_frame(&circles, &CircleMode::Pulse { phase: 0.0 });
    assert!(collapsed[1].iter().all(|&p| p == (40, 40)));
}

/// it should round-trip commands and state through serde
#[test]
fn command_and_state_serde_roundtrip() {
    let commands = vec![
        SceneCommand::ToggleSphereFill,
        SceneCommand::SetShading(Shading::Flat),
        SceneCommand::NudgeEye {
            axis: Axis::Z,
            delta: -1.0,
        },
        SceneCommand::DefaultView,
    ];
    let json = serde_json::to_string(&commands).unwrap();
    let back: Vec<SceneCommand> = serde_json::from_str(&json).unwrap();
    assert_eq!(commands, back);

    let mut state = SceneState::new();
    for command in &back {
        state.apply(command);
    }
    let json = serde_json::to_string(&state).unwrap();
    let restored: SceneState = serde_json::from_str(&json).unwrap();
    assert_eq!(state, restored);
}

/// it should run a full frame loop: commands, drive, plan
#[test]
fn frame_loop_end_to_end() {
    let mut state = SceneState::new();
    let light = Light::default();
    let mut drive = BallDrive::with_speed(RollAnimator::new(rolling_path()), 0.1);

    // A few rolling frames, then the user pauses the roll.
    let mut last_plan = None;
    for _ in 0..5 {
        let ball = drive.tick(state.rolling);
        last_plan = Some(plan_frame(&state, &light, &ball));
    }
    state.apply(&SceneCommand::ToggleRolling);
    let ball = drive.tick(state.rolling);
    let paused_plan = plan_frame(&state, &light, &ball);

    // The pose froze with the pause; everything else still renders.
    assert_eq!(paused_plan.calls[0].transform, ball);
    assert_eq!(
        last_plan.unwrap().calls[0].transform,
        paused_plan.calls[0].transform
    );
    assert_eq!(paused_plan.calls.len(), 5);
}

/// it should keep the rolled ball's shadow under the ball
#[test]
fn shadow_lands_below_the_ball() {
    let light = Light::default();
    let mut animator = RollAnimator::new(rolling_path());
    let ball = animator.pose(5.0);
    let plan = plan_frame(&SceneState::new(), &light, &ball);

    let shadow_call = plan.calls.iter().find(|c| c.shadow).unwrap();
    let center = nalgebra::Point3::new(0.0, 0.0, 0.0);
    let ball_center = ball.transform_point(&center);
    let shadow_center = shadow_call.transform.transform_point(&center);

    // The projected center sits on the floor plane, offset from the ball
    // along the light direction.
    assert!(shadow_center.y.abs() < 1.0e-4);
    let expected_t = light.position.y / (light.position.y - ball_center.y);
    let expected = light.position + (ball_center - light.position) * expected_t;
    assert_relative_eq!(shadow_center, expected, epsilon = 1.0e-3);
}
