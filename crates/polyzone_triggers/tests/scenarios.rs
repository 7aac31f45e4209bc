//! End-to-end trigger scenarios

use parking_lot::Mutex;
use polyzone_triggers::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Regular tetrahedron with edge length 2 centered on the origin
fn tetrahedron() -> Vec<LocalPoint> {
    let s = std::f64::consts::FRAC_1_SQRT_2;
    vec![
        LocalPoint::new(s, s, s),
        LocalPoint::new(s, -s, -s),
        LocalPoint::new(-s, s, -s),
        LocalPoint::new(-s, -s, s),
    ]
}

fn cube(half: f64) -> Vec<LocalPoint> {
    let mut points = Vec::new();
    for x in [-half, half] {
        for y in [-half, half] {
            for z in [-half, half] {
                points.push(LocalPoint::new(x, y, z));
            }
        }
    }
    points
}

fn random_cloud(rng: &mut StdRng, count: usize, extent: f64) -> Vec<LocalPoint> {
    (0..count)
        .map(|_| {
            LocalPoint::new(
                rng.gen_range(-extent..extent),
                rng.gen_range(-extent..extent),
                rng.gen_range(-extent..extent),
            )
        })
        .collect()
}

fn small_actor(id: u64) -> Actor {
    Actor::new(ActorId(id), HitboxSize::new(0.2, 0.2, 0.2))
}

#[test]
fn test_enter_tetrahedron() {
    init_logging();
    let mut registry = TriggerRegistry::default();
    let id = registry.create(TriggerDesc::new(tetrahedron()).named("tetra")).unwrap();

    let trigger = registry.get(id).unwrap();
    let centroid_feet = HitboxSize::new(0.2, 0.2, 0.2).feet_for_center(WorldPoint::ORIGIN);
    // Outside the hull but inside the check radius; a farther start is culled
    let old_feet = WorldPoint::new(0.0, -0.1, 1.6);
    assert!(trigger.within_check_radius(old_feet));

    let events = registry.handle(&MovementEvent::Move {
        actor: small_actor(1),
        from: old_feet,
        to: centroid_feet,
    });

    assert_eq!(events.len(), 1);
    assert!(events[0].is_entered());
    assert_eq!(events[0].trigger_id, id);
}

#[test]
fn test_move_from_beyond_check_radius_is_culled() {
    init_logging();
    let mut registry = TriggerRegistry::default();
    registry.create(TriggerDesc::new(tetrahedron())).unwrap();

    let centroid_feet = HitboxSize::new(0.2, 0.2, 0.2).feet_for_center(WorldPoint::ORIGIN);
    let events = registry.handle(&MovementEvent::Move {
        actor: small_actor(1),
        from: WorldPoint::new(0.0, -0.1, 5.0),
        to: centroid_feet,
    });

    // Both endpoints must lie inside the culling sphere
    assert!(events.is_empty());
}

#[test]
fn test_flat_square_becomes_slab() {
    init_logging();
    let square = vec![
        LocalPoint::new(-5.0, -5.0, 0.0),
        LocalPoint::new(5.0, -5.0, 0.0),
        LocalPoint::new(5.0, 5.0, 0.0),
        LocalPoint::new(-5.0, 5.0, 0.0),
    ];
    let mut registry = TriggerRegistry::default();
    let id = registry.create(TriggerDesc::new(square).named("portal")).unwrap();

    let trigger = registry.get(id).unwrap();
    assert_eq!(trigger.anchors().len(), 8);
    assert_eq!(trigger.triangle_count(), 12);
    assert!(trigger.check_radius() > 0.0);

    let actor = small_actor(3);
    let path = [
        WorldPoint::new(0.0, 0.0, -0.5),
        WorldPoint::new(0.0, 0.0, 0.0),
        WorldPoint::new(0.0, 0.0, 0.5),
    ];

    let mut kinds = Vec::new();
    for step in path.windows(2) {
        let events = registry.handle(&MovementEvent::Move {
            actor,
            from: step[0],
            to: step[1],
        });
        kinds.extend(events.iter().map(|e| e.kind));
    }
    assert_eq!(kinds, vec![TransitionKind::Entered, TransitionKind::Exited]);
}

#[test]
fn test_transition_table() {
    init_logging();
    let mut registry = TriggerRegistry::default();
    registry.create(TriggerDesc::new(cube(1.0))).unwrap();

    let inside = WorldPoint::new(0.0, -0.1, 0.0);
    let outside = WorldPoint::new(0.0, -0.1, 1.5);
    let actor = small_actor(4);

    let cases = [
        (outside, outside, None),
        (outside, inside, Some(TransitionKind::Entered)),
        (inside, outside, Some(TransitionKind::Exited)),
        (inside, inside, Some(TransitionKind::Tick)),
    ];
    for (from, to, expected) in cases {
        let events = registry.handle(&MovementEvent::Move { actor, from, to });
        assert_eq!(events.first().map(|e| e.kind), expected);
        assert!(events.len() <= 1);
    }
}

#[test]
fn test_spawn_inside_emits_tick_then_entered() {
    init_logging();
    let mut registry = TriggerRegistry::default();
    registry.create(TriggerDesc::new(cube(1.0))).unwrap();
    let actor = small_actor(5);

    let events = registry.handle(&MovementEvent::Spawn {
        actor,
        at: WorldPoint::ORIGIN,
    });
    let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![TransitionKind::Tick, TransitionKind::Entered]);

    let events = registry.handle(&MovementEvent::Spawn {
        actor,
        at: WorldPoint::new(0.0, 0.0, 2.0),
    });
    assert!(events.is_empty());
}

#[test]
fn test_callbacks_fire_in_registration_order() {
    init_logging();
    let log: Arc<Mutex<Vec<(String, TransitionKind)>>> = Arc::new(Mutex::new(Vec::new()));

    let mut registry = TriggerRegistry::default();
    for name in ["first", "second"] {
        let log = log.clone();
        registry
            .create(TriggerDesc::new(cube(1.0)).named(name).on_triggered(move |event| {
                log.lock().push((event.trigger.name().to_owned(), event.kind));
            }))
            .unwrap();
    }

    registry.handle(&MovementEvent::Move {
        actor: small_actor(6),
        from: WorldPoint::new(0.0, 0.0, 1.5),
        to: WorldPoint::ORIGIN,
    });

    let log = log.lock();
    assert_eq!(
        *log,
        vec![
            ("first".to_owned(), TransitionKind::Entered),
            ("second".to_owned(), TransitionKind::Entered),
        ]
    );
}

#[test]
fn test_callback_can_be_swapped() {
    init_logging();
    let hits = Arc::new(Mutex::new(0usize));
    let mut registry = TriggerRegistry::default();
    let id = registry.create(TriggerDesc::new(cube(1.0))).unwrap();

    let counter = hits.clone();
    registry
        .update(id, |trigger| {
            trigger.set_callback(move |_| *counter.lock() += 1);
        })
        .unwrap();

    registry.handle(&MovementEvent::Spawn {
        actor: small_actor(7),
        at: WorldPoint::ORIGIN,
    });
    assert_eq!(*hits.lock(), 2);
}

#[test]
fn test_random_clouds_contain_centroid() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let config = TriggerConfig::default();

    for _ in 0..50 {
        let anchors = random_cloud(&mut rng, 12, 4.0);
        let position = WorldPoint::new(
            rng.gen_range(-100.0..100.0),
            rng.gen_range(0.0..64.0),
            rng.gen_range(-100.0..100.0),
        );
        let trigger = Trigger::new(anchors, position, &config).unwrap();

        let centroid = trigger.world_anchors().iter().map(|p| p.vec()).sum::<Vec3d>()
            / trigger.world_anchors().len() as f64;
        assert!(trigger.contains(&[WorldPoint(centroid)]));

        let direction = Vec3d::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        )
        .normalize_or_zero();
        if direction == Vec3d::ZERO {
            continue;
        }
        let far = position.offset(direction * (2.0 * trigger.check_radius()));
        assert!(!trigger.contains(&[far]));
    }
}

#[test]
fn test_culling_never_hides_hull_points() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(42);
    let config = TriggerConfig::default();

    for _ in 0..50 {
        let anchors = random_cloud(&mut rng, 10, 3.0);
        let trigger = Trigger::new(anchors, WorldPoint::new(10.0, 5.0, -3.0), &config).unwrap();
        let world = trigger.world_anchors();

        for _ in 0..20 {
            // Random convex combination lies inside the hull
            let weights: Vec<f64> = world.iter().map(|_| rng.gen_range(0.0..1.0)).collect();
            let total: f64 = weights.iter().sum();
            let point = world
                .iter()
                .zip(&weights)
                .map(|(p, w)| p.vec() * (w / total))
                .sum::<Vec3d>();
            let point = WorldPoint(point);

            assert!(trigger.contains(&[point]));
            assert!(trigger.within_check_radius(point));
        }
    }
}

#[test]
fn test_persisted_trigger_reproduces_hull() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(99);
    let config = TriggerConfig::default();
    let mut registry = TriggerRegistry::new(config);

    let anchors = random_cloud(&mut rng, 16, 2.0);
    let id = registry
        .create(TriggerDesc::new(anchors).named("room").at(WorldPoint::new(1.0, 2.0, 3.0)))
        .unwrap();

    let json = registry.get(id).unwrap().to_record().to_json().unwrap();
    let loaded = Trigger::from_record(TriggerRecord::from_json(&json).unwrap(), &config).unwrap();
    let original = registry.get(id).unwrap();

    assert_eq!(loaded.triangle_count(), original.triangle_count());
    for triangle in original.triangles() {
        let matched = loaded.triangles().iter().any(|other| {
            (other.normal - triangle.normal).length() < 1e-9
                && other.signed_distance(triangle.a).abs() < 1e-9
        });
        assert!(matched, "no match for {:?}", triangle);
    }
}

#[test]
fn test_total_triangles_tracks_membership() {
    init_logging();
    let mut registry = TriggerRegistry::default();
    let expected = |registry: &TriggerRegistry| registry.iter().map(Trigger::triangle_count).sum::<usize>();

    let a = registry.create(TriggerDesc::new(cube(1.0))).unwrap();
    let b = registry.create(TriggerDesc::new(tetrahedron())).unwrap();
    assert_eq!(registry.total_triangles(), expected(&registry));

    registry.set_anchors(a, tetrahedron()).unwrap();
    assert_eq!(registry.total_triangles(), expected(&registry));

    let removed = registry.remove(b).unwrap();
    assert_eq!(registry.total_triangles(), expected(&registry));

    registry.add(removed).unwrap();
    assert_eq!(registry.total_triangles(), 8);
    assert_eq!(registry.total_triangles(), expected(&registry));
}
