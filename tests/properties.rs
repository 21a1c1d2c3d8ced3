use physics2d::{
    edge_normals, Arena, ForceRegistry, Gravity2D, PhysicsWorld, Polygon, RigidBody2D, SatDetector,
    Shape2D, Vec2, AABB,
};
use proptest::prelude::*;

const EPSILON: f32 = 1e-3;

fn coord() -> impl Strategy<Value = f32> {
    -100.0f32..100.0
}

fn extent() -> impl Strategy<Value = f32> {
    0.1f32..50.0
}

proptest! {
    #[test]
    fn aabb_from_min_max_round_trips(x in coord(), y in coord(), w in extent(), h in extent()) {
        let min = Vec2::new(x, y);
        let max = Vec2::new(x + w, y + h);
        let aabb = AABB::from_min_max(min, max);
        prop_assert!((aabb.local_min() - min).magnitude() < EPSILON);
        prop_assert!((aabb.local_max() - max).magnitude() < EPSILON);
        prop_assert_eq!(aabb.half_size(), aabb.size() * 0.5);
    }

    #[test]
    fn aabb_contains_its_corners_and_not_beyond(
        x in coord(), y in coord(), w in extent(), h in extent(),
        gap in 0.01f64..10.0, side in 0usize..8,
    ) {
        let aabb = AABB::new(Vec2::new(x, y), Vec2::new(w, h));
        for corner in aabb.vertices() {
            prop_assert!(aabb.contains(corner));
        }

        // Step outside through each face and each corner
        let (min, max) = (aabb.local_min(), aabb.local_max());
        let (cx, cy) = (f64::from(x), f64::from(y));
        let (left, right) = (f64::from(min.x) - gap, f64::from(max.x) + gap);
        let (below, above) = (f64::from(min.y) - gap, f64::from(max.y) + gap);
        let outside = [
            (right, cy),
            (left, cy),
            (cx, above),
            (cx, below),
            (right, above),
            (left, above),
            (right, below),
            (left, below),
        ][side];
        prop_assert!(!aabb.contains(outside));
        prop_assert!(aabb.contains((cx, cy)));
    }

    #[test]
    fn rectangle_edge_normals_are_unit_and_perpendicular(
        w in extent(), h in extent(), rotation in -3.2f32..3.2,
    ) {
        let hull = Polygon::rectangle(Vec2::ZERO, Vec2::new(w, h), rotation).hull();
        let normals = edge_normals(&hull).unwrap();
        prop_assert_eq!(normals.len(), 4);
        for (i, n) in normals.iter().enumerate() {
            let edge = hull[i] - hull[(i + 1) % hull.len()];
            prop_assert!((n.magnitude() - 1.0).abs() < EPSILON);
            prop_assert!(n.dot(edge.normalize()).abs() < EPSILON);
        }
    }

    #[test]
    fn sat_matches_interval_test_for_aabbs(
        ax in coord(), ay in coord(), aw in extent(), ah in extent(),
        bx in coord(), by in coord(), bw in extent(), bh in extent(),
    ) {
        let a = AABB::new(Vec2::new(ax, ay), Vec2::new(aw, ah));
        let b = AABB::new(Vec2::new(bx, by), Vec2::new(bw, bh));
        let gap_x = (bx - ax).abs() - (aw + bw) * 0.5;
        let gap_y = (by - ay).abs() - (ah + bh) * 0.5;
        // Stay clear of the touching boundary where rounding decides
        prop_assume!(gap_x.abs() > EPSILON && gap_y.abs() > EPSILON);

        let result = SatDetector::default().detect(&a, &b);
        let overlapping = gap_x < 0.0 && gap_y < 0.0;
        prop_assert_eq!(result.is_some(), overlapping);
        if let Some(axis) = result {
            prop_assert!(axis.dot(b.position() - a.position()) >= 0.0);
        }
    }

    #[test]
    fn sat_matches_overlaps_for_flat_boxes(
        ax in coord(), aw in extent(), bx in coord(), bw in extent(), by in -1.0f32..1.0,
    ) {
        let a = AABB::new(Vec2::new(ax, 0.0), Vec2::new(aw, 0.0));
        let b = AABB::new(Vec2::new(bx, by), Vec2::new(bw, 0.0));
        let gap_x = (bx - ax).abs() - (aw + bw) * 0.5;
        prop_assume!(gap_x.abs() > EPSILON && by.abs() > EPSILON);

        prop_assert!(!a.overlaps(&b));
        prop_assert_eq!(SatDetector::default().detect(&a, &b), None);

        let level = AABB::new(Vec2::new(bx, 0.0), Vec2::new(bw, 0.0));
        prop_assert_eq!(SatDetector::default().detect(&a, &level).is_some(), a.overlaps(&level));
    }

    #[test]
    fn sat_is_symmetric_up_to_sign(
        bx in -3.0f32..3.0, by in -3.0f32..3.0, rotation in -3.2f32..3.2,
    ) {
        let a = AABB::new(Vec2::ZERO, Vec2::new(2.0, 2.0));
        let b = Polygon::rectangle(Vec2::new(bx, by), Vec2::new(2.0, 1.0), rotation);
        let detector = SatDetector::default();
        let ab = detector.penetration(&a, &b);
        let ba = detector.penetration(&b, &a);
        prop_assert_eq!(ab.is_some(), ba.is_some());
        if let (Some(ab), Some(ba)) = (ab, ba) {
            prop_assert!((ab.depth - ba.depth).abs() < EPSILON);
        }
    }

    #[test]
    fn gravity_accumulates_mass_times_gravity(mass in 0.1f32..100.0, gy in -50.0f32..50.0) {
        let mut bodies = Arena::new();
        let mut generators: Arena<Box<dyn physics2d::ForceGenerator>> = Arena::new();
        let mut registry = ForceRegistry::new();

        let body = bodies.insert(RigidBody2D::new(mass));
        let gravity = generators.insert(Box::new(Gravity2D::new(Vec2::new(0.0, gy))));
        registry.add(body, gravity);

        registry.update_forces(&mut bodies, &generators, 1.0 / 60.0).unwrap();
        let force = bodies.get(body).unwrap().force;
        prop_assert!((force.y - gy * mass).abs() < EPSILON * mass.max(1.0) * gy.abs().max(1.0));
    }
}

#[test]
fn world_tick_without_registrations_leaves_bodies_at_rest() {
    let mut world = PhysicsWorld::new();
    let body = world.add_body(RigidBody2D::new(2.0));
    world.registry_mut().clear();
    world.registry_mut().clear();
    world.step(1.0 / 60.0).unwrap();
    assert_eq!(world.body(body).unwrap().position, Vec2::ZERO);
}
