// Host-side tests for the gallery state: load ordering, layout triggering,
// click/drag handling, modal gating of auto-spin and resize behaviour.

use gallery_core::*;
use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

fn gallery_with(n: usize, width: f32, height: f32) -> Gallery {
    let config =
        GalleryConfig::default().with_images((0..n).map(|i| format!("/images/kosmita{}.png", i + 1)));
    Gallery::new(config, width, height).unwrap()
}

fn load_all(g: &mut Gallery) {
    for i in 0..g.image_paths().len() {
        g.on_image_loaded(i).unwrap();
    }
}

/// Drag the group by `yaw` radians using real pointer events.
fn drag_yaw(g: &mut Gallery, yaw: f32) {
    let start = Vec2::new(500.0, 500.0);
    let end = start + Vec2::new(yaw / DRAG_SENSITIVITY, 0.0);
    g.pointer_down(start);
    assert!(matches!(
        g.pointer_move(end, true),
        PointerOutcome::Rotate { .. }
    ));
    let vp = *g.viewport();
    assert_eq!(g.pointer_up(end, &vp), None);
}

/// A single loaded image swung round to face the camera.
fn single_facing_camera() -> Gallery {
    let mut g = gallery_with(1, 1000.0, 1000.0);
    load_all(&mut g);
    drag_yaw(&mut g, -FRAC_PI_2);
    g
}

#[test]
fn radius_derives_from_smaller_viewport_side() {
    let g = gallery_with(3, 1000.0, 600.0);
    assert!((g.radius() - 180.0).abs() < 1e-4);
    assert!((g.camera().eye.z - 540.0).abs() < 1e-3);
}

#[test]
fn layout_runs_once_after_last_completion_in_reverse_order() {
    let mut g = gallery_with(10, 1000.0, 1000.0);
    assert!((g.radius() - 300.0).abs() < 1e-4);

    for index in (1..10).rev() {
        let progress = g.on_image_loaded(index).unwrap();
        assert!(matches!(progress, LoadProgress::Pending { .. }));
        assert_eq!(g.layout_passes(), 0);
        assert!(g.items().iter().all(|it| !it.is_placed()));
    }
    assert_eq!(g.on_image_loaded(0).unwrap(), LoadProgress::Complete);
    assert_eq!(g.layout_passes(), 1);
    assert!(g.is_loaded());

    let positions: Vec<_> = g
        .items()
        .iter()
        .map(|it| it.placement.expect("placed").position)
        .collect();
    assert_eq!(positions.len(), 10);
    for p in &positions {
        assert!((p.length() - 315.0).abs() < 1e-2, "|p| = {}", p.length());
    }
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            assert!((positions[i] - positions[j]).length() > 1.0);
        }
    }
}

#[test]
fn items_keep_their_image_identity() {
    let mut g = gallery_with(3, 800.0, 800.0);
    g.on_image_loaded(2).unwrap();
    g.on_image_loaded(0).unwrap();
    g.on_image_loaded(1).unwrap();
    let ids: Vec<usize> = g.items().iter().map(|it| it.id.0).collect();
    assert_eq!(ids, vec![2, 0, 1]);
    assert_eq!(g.item(ItemId(2)).unwrap().source, "/images/kosmita3.png");
}

#[test]
fn duplicate_and_unknown_completions_are_rejected() {
    let mut g = gallery_with(4, 800.0, 800.0);
    g.on_image_loaded(3).unwrap();
    assert_eq!(
        g.on_image_loaded(3),
        Err(GalleryError::DuplicateCompletion(3))
    );
    assert_eq!(
        g.on_image_loaded(4),
        Err(GalleryError::UnknownImage {
            index: 4,
            expected: 4
        })
    );
    assert_eq!(g.items().len(), 1);

    g.on_image_loaded(0).unwrap();
    g.on_image_loaded(1).unwrap();
    g.on_image_loaded(2).unwrap();
    assert_eq!(g.layout_passes(), 1);
    assert!(g.on_image_loaded(2).is_err());
    assert_eq!(g.layout_passes(), 1);
}

#[test]
fn click_classification_leaves_rotation_alone() {
    let mut g = gallery_with(10, 1000.0, 1000.0);
    load_all(&mut g);
    g.pointer_down(Vec2::new(100.0, 100.0));
    assert_eq!(
        g.pointer_move(Vec2::new(101.0, 101.0), true),
        PointerOutcome::Pending
    );
    assert_eq!(g.rotation(), RotationTransform::default());
    assert!(g.auto_spin_enabled());
    let vp = *g.viewport();
    // Near the corner nothing is hit, so no modal either.
    assert_eq!(g.pointer_up(Vec2::new(101.0, 101.0), &vp), None);
    assert!(!g.modal().is_open());
    assert_eq!(g.gesture(), Gesture::Idle);
}

#[test]
fn drag_rotates_by_scaled_pointer_delta() {
    let mut g = gallery_with(10, 1000.0, 1000.0);
    load_all(&mut g);
    g.pointer_down(Vec2::new(100.0, 100.0));
    g.pointer_move(Vec2::new(110.0, 130.0), true);
    assert!(!g.auto_spin_enabled());
    assert_eq!(g.tick(), Tick::Held);
    let vp = *g.viewport();
    assert_eq!(g.pointer_up(Vec2::new(110.0, 130.0), &vp), None);
    let r = g.rotation();
    assert!((r.yaw - 0.05).abs() < 1e-6);
    assert!((r.pitch - 0.15).abs() < 1e-6);
    assert!(g.auto_spin_enabled());
    assert!(!g.modal().is_open());
}

#[test]
fn rotation_grows_monotonically_while_dragging() {
    let mut g = gallery_with(2, 1000.0, 1000.0);
    g.pointer_down(Vec2::ZERO);
    let mut last_yaw = g.rotation().yaw;
    for step in 1..=5 {
        g.pointer_move(Vec2::new(step as f32 * 3.0, 0.0), true);
        let yaw = g.rotation().yaw;
        assert!(yaw > last_yaw);
        last_yaw = yaw;
    }
}

#[test]
fn clicking_an_item_opens_the_modal_and_stops_spin() {
    let mut g = single_facing_camera();
    let center = Vec2::new(500.0, 500.0);
    g.pointer_down(center);
    let vp = *g.viewport();
    let shown = g.pointer_up(center, &vp).expect("item under pointer");
    assert_eq!(shown.item, ItemId(0));
    assert_eq!(shown.source, "/images/kosmita1.png");
    assert_eq!(g.modal().displayed(), Some("/images/kosmita1.png"));

    let yaw = g.rotation().yaw;
    assert!(!g.auto_spin_enabled());
    assert_eq!(g.tick(), Tick::Held);
    assert_eq!(g.rotation().yaw, yaw);

    assert!(g.dismiss_modal());
    assert!(!g.dismiss_modal());
    assert_eq!(g.tick(), Tick::Spun);
    assert!(g.rotation().yaw > yaw);
}

#[test]
fn dragging_over_an_item_never_opens_it() {
    let mut g = single_facing_camera();
    g.pointer_down(Vec2::new(490.0, 500.0));
    g.pointer_move(Vec2::new(495.0, 500.0), true);
    let vp = *g.viewport();
    assert_eq!(g.pointer_up(Vec2::new(495.0, 500.0), &vp), None);
    assert!(!g.modal().is_open());
}

#[test]
fn item_on_the_far_side_is_not_clickable() {
    // Unrotated, the single item faces +X and the shell is all the ray sees.
    let mut g = gallery_with(1, 1000.0, 1000.0);
    load_all(&mut g);
    let center = Vec2::new(500.0, 500.0);
    let hits = g.hit_test(center, g.viewport());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].target, HitTarget::Shell);
    g.pointer_down(center);
    let vp = *g.viewport();
    assert_eq!(g.pointer_up(center, &vp), None);
}

#[test]
fn pointer_input_is_ignored_while_modal_is_open() {
    let mut g = single_facing_camera();
    let center = Vec2::new(500.0, 500.0);
    g.pointer_down(center);
    let vp = *g.viewport();
    assert!(g.pointer_up(center, &vp).is_some());

    let before = g.rotation();
    g.pointer_down(center);
    assert_eq!(
        g.pointer_move(Vec2::new(600.0, 500.0), true),
        PointerOutcome::Ignored
    );
    assert_eq!(g.rotation(), before);
}

#[test]
fn auto_spin_advances_fixed_step_per_tick() {
    let mut g = gallery_with(1, 640.0, 480.0);
    for _ in 0..10 {
        assert_eq!(g.tick(), Tick::Spun);
    }
    assert!((g.rotation().yaw - 10.0 * AUTO_SPIN_STEP).abs() < 1e-6);
    assert_eq!(g.rotation().pitch, 0.0);
}

#[test]
fn stop_and_start_control_the_loop() {
    let mut g = gallery_with(1, 640.0, 480.0);
    g.stop();
    assert!(!g.is_running());
    assert_eq!(g.tick(), Tick::Stopped);
    assert_eq!(g.rotation().yaw, 0.0);
    g.start();
    assert_eq!(g.tick(), Tick::Spun);
}

#[test]
fn resize_relayouts_loaded_items() {
    let mut g = gallery_with(5, 1000.0, 1000.0);
    load_all(&mut g);
    g.resize(800.0, 600.0).unwrap();
    assert_eq!(g.layout_passes(), 2);
    assert!((g.radius() - 180.0).abs() < 1e-4);
    assert!((g.camera().aspect - 800.0 / 600.0).abs() < 1e-6);
    for it in g.items() {
        let p = it.placement.unwrap();
        assert!((p.position.length() - 189.0).abs() < 1e-2);
        assert!((p.size - 90.0).abs() < 1e-3);
    }
}

#[test]
fn resize_before_load_completes_does_not_layout() {
    let mut g = gallery_with(3, 1000.0, 1000.0);
    g.on_image_loaded(0).unwrap();
    g.resize(500.0, 500.0).unwrap();
    assert_eq!(g.layout_passes(), 0);
    assert!(!g.items()[0].is_placed());
    g.on_image_loaded(1).unwrap();
    g.on_image_loaded(2).unwrap();
    assert_eq!(g.layout_passes(), 1);
    let p = g.items()[0].placement.unwrap();
    assert!((p.position.length() - 157.5).abs() < 1e-2);
}

#[test]
fn resize_cancels_in_flight_drag() {
    let mut g = gallery_with(2, 1000.0, 1000.0);
    g.pointer_down(Vec2::ZERO);
    g.pointer_move(Vec2::new(10.0, 0.0), true);
    assert!(!g.auto_spin_enabled());
    g.resize(900.0, 700.0).unwrap();
    assert_eq!(g.gesture(), Gesture::Idle);
    assert!(g.auto_spin_enabled());
    let vp = *g.viewport();
    assert_eq!(g.pointer_up(Vec2::new(10.0, 0.0), &vp), None);
}

#[test]
fn invalid_viewports_are_rejected() {
    let config = GalleryConfig::default();
    assert!(matches!(
        Gallery::new(config, 0.0, 600.0),
        Err(GalleryError::InvalidViewport { .. })
    ));
    let mut g = gallery_with(1, 640.0, 480.0);
    assert!(g.resize(640.0, 0.0).is_err());
    assert!((g.radius() - 144.0).abs() < 1e-4);
}

#[test]
fn config_parses_image_overrides() {
    assert_eq!(
        GalleryConfig::parse_image_list(" a.png, ,b.png "),
        Some(vec!["a.png".to_string(), "b.png".to_string()])
    );
    assert_eq!(GalleryConfig::parse_image_list(" , "), None);
    let config = GalleryConfig::default();
    assert_eq!(config.image_paths.len(), 10);
    assert_eq!(config.image_paths[0], "/images/kosmita1.png");
}
