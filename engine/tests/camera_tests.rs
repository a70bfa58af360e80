//! Camera Tests - Look, POV Switching and Rig
//!
//! Tests for the per-frame camera pass: pitch clamping, yaw through the
//! body's rotation path, and first/third person priority toggling.

use glam::{Quat, Vec3};
use stride_engine::camera::{
    CameraPerspectiveState, CameraRig, PitchLimits, PovState, RigState, VirtualCamera,
    pitch_rotation,
};
use stride_engine::input::InputSnapshot;
use stride_engine::physics::{PhysicsBody, RigidBody};
use stride_engine::player::{LocomotionConfig, LocomotionController, PovConfig};

const FRAME_DT: f32 = 1.0 / 60.0;
const HEAD: Vec3 = Vec3::new(0.0, 1.6, 0.0);

fn controller() -> LocomotionController {
    LocomotionController::new(LocomotionConfig::default()).unwrap()
}

/// Deterministic look deltas in roughly [-400, 400].
fn look_sequence(count: usize) -> Vec<f32> {
    let mut state: u32 = 0x2545_f491;
    (0..count)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 8) as f32 / (1u32 << 24) as f32 * 800.0 - 400.0
        })
        .collect()
}

// ============================================================================
// Pitch
// ============================================================================

#[test]
fn test_pitch_stays_clamped_every_frame() {
    let mut controller = controller();
    let mut body = RigidBody::new();
    let mut rig = RigState::new();
    let limits = controller.pitch_limits();

    for look_y in look_sequence(500) {
        let input = InputSnapshot::default().with_look(0.0, look_y);
        controller.update_camera(FRAME_DT, &input, HEAD, &mut body, &mut rig);
        assert!(limits.contains(controller.pitch()), "pitch {}", controller.pitch());
    }
}

#[test]
fn test_pitch_reaches_both_extremes() {
    let mut controller = controller();
    let mut body = RigidBody::new();
    let mut rig = RigState::new();

    // Mouse up looks up: pitch heads toward the upper limit
    let up = InputSnapshot::default().with_look(0.0, 1000.0);
    controller.update_camera(FRAME_DT, &up, HEAD, &mut body, &mut rig);
    assert_eq!(controller.pitch(), -40.0);

    let down = InputSnapshot::default().with_look(0.0, -1000.0);
    controller.update_camera(FRAME_DT, &down, HEAD, &mut body, &mut rig);
    assert_eq!(controller.pitch(), 70.0);
}

#[test]
fn test_independently_signed_limits() {
    let mut config = LocomotionConfig::default();
    config.look.upper_limit = 10.0;
    config.look.lower_limit = 30.0;
    let mut controller = LocomotionController::new(config).unwrap();
    let mut body = RigidBody::new();
    let mut rig = RigState::new();

    // Zero look still clamps the starting pitch into range
    controller.update_camera(FRAME_DT, &InputSnapshot::default(), HEAD, &mut body, &mut rig);
    assert_eq!(controller.pitch(), 10.0);

    let limits = PitchLimits::new(10.0, 30.0);
    assert_eq!(limits.clamp(-5.0), 10.0);
    assert_eq!(limits.clamp(45.0), 30.0);
}

#[test]
fn test_pitch_goes_to_pivot_not_body() {
    let mut controller = controller();
    let mut body = RigidBody::new();
    let mut rig = RigState::new();

    let input = InputSnapshot::default().with_look(0.0, -30.0);
    controller.update_camera(FRAME_DT, &input, HEAD, &mut body, &mut rig);

    assert!(controller.pitch() > 0.0);
    assert!(rig.pivot_rotation.abs_diff_eq(pitch_rotation(controller.pitch()), 1e-6));
    assert_eq!(body.rotation(), Quat::IDENTITY);
    assert!(!body.has_pending_rotation());
}

// ============================================================================
// Yaw
// ============================================================================

#[test]
fn test_yaw_goes_through_rotation_path() {
    let mut controller = controller();
    let mut body = RigidBody::new();
    let mut rig = RigState::new();

    let input = InputSnapshot::default().with_look(12.0, 0.0);
    controller.update_camera(FRAME_DT, &input, HEAD, &mut body, &mut rig);

    assert!(body.has_pending_rotation());
    assert_eq!(body.stepped_rotation(), Quat::IDENTITY);

    let forward = body.rotation() * Vec3::NEG_Z;
    assert!(forward.x > 0.0, "positive look turns right");
}

#[test]
fn test_yaw_composes_across_frames() {
    let mut controller = controller();
    let mut body = RigidBody::new();
    let mut rig = RigState::new();

    let input = InputSnapshot::default().with_look(5.0, 0.0);
    controller.update_camera(FRAME_DT, &input, HEAD, &mut body, &mut rig);
    controller.update_camera(FRAME_DT, &input, HEAD, &mut body, &mut rig);

    let per_frame = 5.0 * 21.9 * FRAME_DT;
    let expected = Quat::from_rotation_y(-(2.0 * per_frame).to_radians());
    assert!(body.rotation().abs_diff_eq(expected, 1e-5));
}

#[test]
fn test_pivot_follows_head_anchor() {
    let mut controller = controller();
    let mut body = RigidBody::new();
    let mut rig = RigState::new();

    let head = Vec3::new(3.0, 1.7, -2.0);
    controller.update_camera(FRAME_DT, &InputSnapshot::default(), head, &mut body, &mut rig);

    assert_eq!(rig.pivot_position, head);
    assert_eq!(rig.main_camera_position, head);
}

// ============================================================================
// POV Toggle
// ============================================================================

#[test]
fn test_initial_state_follows_configured_priorities() {
    let third = CameraPerspectiveState::from_config(&PovConfig::default());
    assert_eq!(third.active(), PovState::ThirdActive);

    let first = CameraPerspectiveState::from_config(&PovConfig {
        first_person_priority: 25,
        third_person_priority: 5,
        priority_step: 30,
    });
    assert_eq!(first.active(), PovState::FirstActive);
}

#[test]
fn test_toggles_strictly_alternate() {
    let mut state = CameraPerspectiveState::from_config(&PovConfig::default());
    let mut expected = PovState::ThirdActive;

    for _ in 0..10 {
        expected = match expected {
            PovState::FirstActive => PovState::ThirdActive,
            PovState::ThirdActive => PovState::FirstActive,
        };
        assert_eq!(state.toggle(), expected);
    }
}

#[test]
fn test_two_toggles_restore_ordering_and_baseline() {
    let original = CameraPerspectiveState::from_config(&PovConfig::default());
    let mut state = original.clone();

    state.toggle();
    assert!(
        state.priority(VirtualCamera::FirstPerson) > state.priority(VirtualCamera::ThirdPerson)
    );
    state.toggle();

    assert_eq!(state.active(), original.active());
    assert_eq!(state, original);
}

#[test]
fn test_update_pov_syncs_rig_then_toggles() {
    let mut controller = controller();
    let mut rig = RigState::new();

    assert_eq!(controller.update_pov(&InputSnapshot::default(), &mut rig), PovState::ThirdActive);
    assert_eq!(rig.priority(VirtualCamera::FirstPerson), 10);
    assert_eq!(rig.priority(VirtualCamera::ThirdPerson), 20);

    let toggle = InputSnapshot::default().with_pov_toggle(true);
    assert_eq!(controller.update_pov(&toggle, &mut rig), PovState::FirstActive);
    assert_eq!(rig.live_camera(), VirtualCamera::FirstPerson);
    assert_eq!(rig.priority(VirtualCamera::FirstPerson), 10);

    assert_eq!(controller.update_pov(&toggle, &mut rig), PovState::ThirdActive);
    assert_eq!(rig.live_camera(), VirtualCamera::ThirdPerson);
    assert_eq!(rig.priority(VirtualCamera::ThirdPerson), 20);
}

// ============================================================================
// RigState
// ============================================================================

#[test]
fn test_rig_state_records_writes() {
    let mut rig = RigState::new();
    rig.set_priority(VirtualCamera::FirstPerson, 7);
    rig.set_priority(VirtualCamera::ThirdPerson, 3);
    assert_eq!(rig.live_camera(), VirtualCamera::FirstPerson);

    let local = Quat::from_rotation_x(-0.3);
    rig.set_pivot(Vec3::Y, local);
    let body = Quat::from_rotation_y(1.0);
    assert!(rig.pivot_world_rotation(body).abs_diff_eq(body * local, 1e-6));
}
