//! Locomotion Tests - Fixed Tick Behavior
//!
//! Tests for the locomotion controller driven tick by tick against the
//! built-in rigid body and collider world.

use glam::{Vec2, Vec3};
use stride_engine::input::InputSnapshot;
use stride_engine::physics::{Collider, ColliderWorld, LayerMask, PhysicsBody, RigidBody};
use stride_engine::player::{
    AnimParam, AnimatorParameters, ConfigError, LocomotionConfig, LocomotionController,
    blend_factor, world_from_planar,
};

const DT: f32 = 0.02;

fn setup() -> (LocomotionController, RigidBody, ColliderWorld, AnimatorParameters) {
    let controller = LocomotionController::new(LocomotionConfig::default()).unwrap();
    let body = RigidBody::with_mass(Vec3::ZERO, 60.0);
    let mut world = ColliderWorld::new();
    world.insert(Collider::ground_slab(Vec3::ZERO, 50.0, 0.0, 0));
    (controller, body, world, AnimatorParameters::new())
}

// ============================================================================
// Velocity Blending
// ============================================================================

#[test]
fn test_walk_blend_increment_and_ceiling() {
    let (mut controller, mut body, world, mut anim) = setup();
    let input = InputSnapshot::moving(0.0, 1.0);
    let k = blend_factor(8.9, DT);

    for _ in 0..200 {
        let before = controller.current_velocity().y;
        controller.fixed_update(DT, &input, &mut body, &world, Some(&mut anim));
        let after = controller.current_velocity().y;

        let expected = (2.0 - before) * k;
        assert!(((after - before) - expected).abs() < 1e-5);
        assert!(after <= 2.0);
        assert_eq!(controller.current_velocity().x, 0.0);

        body.step(DT, Vec3::ZERO, &world);
    }

    assert!((controller.current_velocity().y - 2.0).abs() < 1e-3);
    assert!((anim.float(AnimParam::YVelocity) - controller.current_velocity().y).abs() < 1e-6);
}

#[test]
fn test_zero_move_decays_monotonically() {
    let (mut controller, mut body, world, _) = setup();
    let run = InputSnapshot::moving(0.6, 0.8).with_run(true);
    for _ in 0..30 {
        controller.fixed_update(DT, &run, &mut body, &world, None);
        body.step(DT, Vec3::ZERO, &world);
    }

    let idle = InputSnapshot::default().with_run(true).with_crouch(true);
    let mut previous = controller.current_velocity().length();
    assert!(previous > 1.0);

    for _ in 0..100 {
        let report = controller.fixed_update(DT, &idle, &mut body, &world, None);
        body.step(DT, Vec3::ZERO, &world);

        assert_eq!(report.target_speed, 0.0);
        let speed = controller.current_velocity().length();
        assert!(speed <= previous);
        previous = speed;
    }

    assert!(previous < 0.01);
}

#[test]
fn test_blend_is_consistent_across_tick_rates() {
    let input = InputSnapshot::moving(0.0, 1.0);

    let (mut coarse, mut body_a, world, _) = setup();
    for _ in 0..25 {
        coarse.fixed_update(0.02, &input, &mut body_a, &world, None);
    }

    let (mut fine, mut body_b, _, _) = setup();
    for _ in 0..50 {
        fine.fixed_update(0.01, &input, &mut body_b, &world, None);
    }

    let a = coarse.current_velocity().y;
    let b = fine.current_velocity().y;
    assert!((a - b).abs() < 1e-4, "{a} vs {b}");
}

#[test]
fn test_airborne_only_applies_damped_push() {
    let (mut controller, mut body, world, mut anim) = setup();
    let forward = InputSnapshot::moving(0.0, 1.0);
    for _ in 0..10 {
        controller.fixed_update(DT, &forward, &mut body, &world, None);
        body.step(DT, Vec3::ZERO, &world);
    }
    let blended = controller.current_velocity();

    body.position.y = 10.0;
    let velocity_before = body.linear_velocity();

    // Sideways input while airborne must not re-blend
    let sideways = InputSnapshot::moving(1.0, 0.0).with_run(true);
    let report = controller.fixed_update(DT, &sideways, &mut body, &world, Some(&mut anim));

    assert!(!report.contact.is_grounded());
    assert_eq!(controller.current_velocity(), blended);
    assert_eq!(body.linear_velocity(), velocity_before);
    assert_eq!(anim.float(AnimParam::XVelocity), blended.x);
    assert_eq!(anim.float(AnimParam::YVelocity), blended.y);

    body.step(DT, Vec3::ZERO, &world);
    let push = world_from_planar(body.rotation(), blended * 0.8);
    let gained = body.linear_velocity() - velocity_before;
    assert!((gained - push * DT).length() < 1e-5);
}

// ============================================================================
// Ground Detection
// ============================================================================

#[test]
fn test_ground_flags_follow_probe_range() {
    let (mut controller, mut body, world, mut anim) = setup();
    let idle = InputSnapshot::default();

    // COM 0.8 above feet, probe reaches 0.9 below COM
    for (height, grounded) in [(0.0, true), (0.05, true), (0.2, false), (3.0, false)] {
        body.position.y = height;
        controller.fixed_update(DT, &idle, &mut body, &world, Some(&mut anim));
        assert_eq!(controller.is_grounded(), grounded, "height {height}");
        assert_eq!(anim.bool(AnimParam::Grounded), grounded);
        assert_eq!(anim.bool(AnimParam::Falling), !grounded);
    }
}

#[test]
fn test_ground_mask_filters_layers() {
    let mut config = LocomotionConfig::default();
    config.ground.mask = LayerMask::layer(3);
    let mut controller = LocomotionController::new(config).unwrap();
    let mut body = RigidBody::new();

    let mut world = ColliderWorld::new();
    world.insert(Collider::ground_slab(Vec3::ZERO, 10.0, 0.0, 0));
    controller.fixed_update(DT, &InputSnapshot::default(), &mut body, &world, None);
    assert!(!controller.is_grounded());

    world.insert(Collider::ground_slab(Vec3::ZERO, 10.0, 0.0, 3));
    controller.fixed_update(DT, &InputSnapshot::default(), &mut body, &world, None);
    assert!(controller.is_grounded());
}

// ============================================================================
// Jump
// ============================================================================

#[test]
fn test_jump_fires_iff_grounded_and_pressed() {
    let (mut controller, mut body, world, mut anim) = setup();

    for (height, jump, fires) in [
        (0.0, true, true),
        (0.0, false, false),
        (2.0, true, false),
        (2.0, false, false),
    ] {
        body.position.y = height;
        let before = anim.trigger_count(AnimParam::Jump);
        let input = InputSnapshot::default().with_jump(jump);
        let report = controller.fixed_update(DT, &input, &mut body, &world, Some(&mut anim));

        assert_eq!(report.jump_triggered, fires);
        assert_eq!(anim.trigger_count(AnimParam::Jump) - before, u32::from(fires));
    }
}

#[test]
fn test_holding_jump_while_airborne_never_fires() {
    let (mut controller, mut body, world, mut anim) = setup();
    let held = InputSnapshot::default().with_jump(true);
    body.position.y = 4.0;

    let mut landed = false;
    for _ in 0..100 {
        let report = controller.fixed_update(DT, &held, &mut body, &world, Some(&mut anim));
        if report.contact.is_grounded() {
            // First grounded tick with jump still held
            assert!(report.jump_triggered);
            landed = true;
            break;
        }
        assert!(!report.jump_triggered);
        body.step(DT, Vec3::new(0.0, -9.81, 0.0), &world);
    }

    assert!(landed);
    assert_eq!(anim.trigger_count(AnimParam::Jump), 1);
}

#[test]
fn test_jump_impulse_cancels_then_adds() {
    for (vertical, mass) in [(-6.0, 60.0), (0.0, 60.0), (2.5, 80.0)] {
        let (mut controller, _, world, mut anim) = setup();
        let mut body = RigidBody::with_mass(Vec3::ZERO, mass);
        controller.fixed_update(
            DT,
            &InputSnapshot::default().with_jump(true),
            &mut body,
            &world,
            Some(&mut anim),
        );

        body.velocity = Vec3::new(1.0, vertical, -2.0);
        controller.jump_add_force(&mut body, Some(&mut anim));

        let expected = 260.0 / mass;
        assert!((body.velocity.y - expected).abs() < 1e-4);
        // Planar velocity is untouched
        assert_eq!(body.velocity.x, 1.0);
        assert_eq!(body.velocity.z, -2.0);
        assert!(!anim.is_triggered(AnimParam::Jump));
    }
}

#[test]
fn test_jump_gate_works_without_animator() {
    let (mut controller, mut body, world, _) = setup();
    let report = controller.fixed_update(DT, &InputSnapshot::default().with_jump(true), &mut body, &world, None);
    assert!(report.jump_triggered);
    assert!(controller.is_jump_pending());

    controller.jump_add_force(&mut body, None);
    assert!(!controller.is_jump_pending());
    assert!(body.velocity.y > 4.0);
}

// ============================================================================
// Crouch
// ============================================================================

#[test]
fn test_crouch_mirrors_input_every_tick() {
    let (mut controller, mut body, world, mut anim) = setup();
    let pattern = [true, true, false, true, false, false, true];

    for (tick, &crouch) in pattern.iter().enumerate() {
        let input = if tick % 2 == 0 {
            InputSnapshot::default().with_crouch(crouch)
        } else {
            InputSnapshot::moving(0.0, 1.0).with_crouch(crouch)
        };
        controller.fixed_update(DT, &input, &mut body, &world, Some(&mut anim));
        assert_eq!(anim.bool(AnimParam::Crouch), crouch, "tick {tick}");
    }
}

#[test]
fn test_crouch_speed_overrides_run() {
    let (mut controller, mut body, world, _) = setup();
    let input = InputSnapshot::moving(0.0, 1.0).with_run(true).with_crouch(true);
    let report = controller.fixed_update(DT, &input, &mut body, &world, None);
    assert_eq!(report.target_speed, 1.5);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_json_partial_override() {
    let config = LocomotionConfig::from_json_str(r#"{ "movement": { "run_speed": 7.5 }, "jump_factor": 300.0 }"#)
        .unwrap();
    assert_eq!(config.movement.run_speed, 7.5);
    assert_eq!(config.movement.walk_speed, 2.0);
    assert_eq!(config.jump_factor, 300.0);

    let controller = LocomotionController::new(config).unwrap();
    assert_eq!(controller.current_velocity(), Vec2::ZERO);
}

#[test]
fn test_config_rejects_out_of_range_values() {
    let err = LocomotionConfig::from_json_str(r#"{ "jump_factor": 600.0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::JumpFactorOutOfRange { .. }));

    let err = LocomotionConfig::from_json_str(r#"{ "look": { "sensitivity": 0.0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::NotPositive { .. }));

    let err = LocomotionConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
