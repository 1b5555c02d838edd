// Host-side tests for pointer gesture classification and rotation driving.

use gallery_core::*;
use glam::Vec2;

fn state() -> InteractionState {
    InteractionState::new(DRAG_THRESHOLD_PX, DRAG_SENSITIVITY)
}

#[test]
fn press_enters_possible_click() {
    let mut s = state();
    assert!(s.is_idle());
    s.press(Vec2::new(100.0, 100.0));
    assert_eq!(
        s.gesture(),
        Gesture::PossibleClick {
            last: Vec2::new(100.0, 100.0)
        }
    );
    assert!(!s.is_dragging());
}

#[test]
fn tiny_move_then_release_is_a_click() {
    let mut s = state();
    s.press(Vec2::new(100.0, 100.0));
    assert_eq!(
        s.move_to(Vec2::new(101.0, 101.0), true),
        PointerOutcome::Pending
    );
    assert_eq!(
        s.release(Vec2::new(101.0, 101.0)),
        PointerOutcome::Click(Vec2::new(101.0, 101.0))
    );
    assert!(s.is_idle());
}

#[test]
fn large_move_is_a_drag_with_scaled_delta() {
    let mut s = state();
    s.press(Vec2::new(100.0, 100.0));
    match s.move_to(Vec2::new(110.0, 130.0), true) {
        PointerOutcome::Rotate { yaw, pitch } => {
            assert!((yaw - 0.05).abs() < 1e-6);
            assert!((pitch - 0.15).abs() < 1e-6);
        }
        other => panic!("expected rotation, got {other:?}"),
    }
    assert!(s.is_dragging());
    assert_eq!(s.release(Vec2::new(110.0, 130.0)), PointerOutcome::DragEnded);
    assert!(s.is_idle());
}

#[test]
fn threshold_is_exclusive_on_each_axis() {
    let mut s = state();
    s.press(Vec2::ZERO);
    assert_eq!(s.move_to(Vec2::new(2.0, -2.0), true), PointerOutcome::Pending);
    assert_eq!(s.move_to(Vec2::new(-2.0, 2.0), true), PointerOutcome::Pending);
    assert!(!s.is_dragging());
    assert!(matches!(
        s.move_to(Vec2::new(0.0, 2.5), true),
        PointerOutcome::Rotate { .. }
    ));
    assert!(s.is_dragging());
}

#[test]
fn jitter_accumulates_against_last_accepted_position() {
    let mut s = state();
    s.press(Vec2::new(50.0, 50.0));
    // Each step is small but the distance from the press keeps growing.
    assert_eq!(s.move_to(Vec2::new(51.0, 50.0), true), PointerOutcome::Pending);
    assert_eq!(s.move_to(Vec2::new(52.0, 50.0), true), PointerOutcome::Pending);
    match s.move_to(Vec2::new(53.0, 50.0), true) {
        PointerOutcome::Rotate { yaw, pitch } => {
            assert!((yaw - 3.0 * DRAG_SENSITIVITY).abs() < 1e-6);
            assert_eq!(pitch, 0.0);
        }
        other => panic!("expected rotation, got {other:?}"),
    }
}

#[test]
fn sub_threshold_moves_during_drag_do_not_rotate() {
    let mut s = state();
    s.press(Vec2::ZERO);
    assert!(matches!(
        s.move_to(Vec2::new(10.0, 0.0), true),
        PointerOutcome::Rotate { .. }
    ));
    assert_eq!(s.move_to(Vec2::new(11.0, 1.0), true), PointerOutcome::Pending);
    assert!(s.is_dragging());
}

#[test]
fn moves_without_primary_button_are_ignored() {
    let mut s = state();
    s.press(Vec2::ZERO);
    assert_eq!(
        s.move_to(Vec2::new(50.0, 50.0), false),
        PointerOutcome::Ignored
    );
    assert!(!s.is_dragging());
}

#[test]
fn moves_and_releases_without_press_are_ignored() {
    let mut s = state();
    assert_eq!(
        s.move_to(Vec2::new(50.0, 50.0), true),
        PointerOutcome::Ignored
    );
    assert_eq!(s.release(Vec2::new(50.0, 50.0)), PointerOutcome::Ignored);
}

#[test]
fn cancel_drops_the_gesture() {
    let mut s = state();
    s.press(Vec2::ZERO);
    s.move_to(Vec2::new(20.0, 0.0), true);
    s.cancel();
    assert!(s.is_idle());
    assert_eq!(s.release(Vec2::new(20.0, 0.0)), PointerOutcome::Ignored);
}

#[test]
fn new_press_resets_previous_gesture() {
    let mut s = state();
    s.press(Vec2::ZERO);
    s.move_to(Vec2::new(20.0, 0.0), true);
    s.press(Vec2::new(5.0, 5.0));
    assert!(!s.is_dragging());
    assert_eq!(
        s.release(Vec2::new(5.0, 5.0)),
        PointerOutcome::Click(Vec2::new(5.0, 5.0))
    );
}

#[test]
fn driver_spins_only_when_allowed() {
    let mut d = RotationDriver::new(AUTO_SPIN_STEP);
    assert_eq!(d.tick(true), Tick::Spun);
    assert!((d.transform().yaw - AUTO_SPIN_STEP).abs() < 1e-9);
    assert_eq!(d.tick(false), Tick::Held);
    assert!((d.transform().yaw - AUTO_SPIN_STEP).abs() < 1e-9);
    assert_eq!(d.transform().pitch, 0.0);
}

#[test]
fn stopped_driver_neither_spins_nor_renders() {
    let mut d = RotationDriver::new(AUTO_SPIN_STEP);
    d.stop();
    assert!(!d.is_running());
    let t = d.tick(true);
    assert_eq!(t, Tick::Stopped);
    assert!(!t.should_render());
    assert_eq!(d.transform(), RotationTransform::default());
    d.start();
    assert!(d.tick(true).should_render());
}

#[test]
fn rotation_matrix_applies_yaw_about_y() {
    let r = RotationTransform {
        yaw: -std::f32::consts::FRAC_PI_2,
        pitch: 0.0,
    };
    let v = r.matrix().transform_vector3(glam::Vec3::X);
    assert!((v - glam::Vec3::Z).length() < 1e-5, "got {v:?}");
}
