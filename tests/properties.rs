//! Property tests for the simulation core

use glam::DVec2;
use proptest::prelude::*;

use meteor_strike::Variant;
use meteor_strike::sim::{
    AimPhase, Attractor, Outcome, Projectile, Rect, Target, TickInput, advance,
    compute_acceleration, evaluate,
};

fn coord() -> impl Strategy<Value = f64> {
    -2000.0..2000.0f64
}

/// Whole-pixel coordinates keep box edges exact
fn pixel() -> impl Strategy<Value = f64> {
    (-2000i32..2000).prop_map(f64::from)
}

fn aim_input() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(up, down, left, right)| TickInput {
            up,
            down,
            left,
            right,
            ..Default::default()
        },
    )
}

proptest! {
    #[test]
    fn gravity_follows_inverse_distance(
        fx in coord(), fy in coord(), ax in coord(), ay in coord(),
        mass in 0.1..50.0f64, g in 0.1..50.0f64,
    ) {
        let from = DVec2::new(fx, fy);
        let hole = DVec2::new(ax, ay);
        let distance = from.distance(hole);
        prop_assume!(distance > 1e-3);

        let a = compute_acceleration(from, hole, mass, g).unwrap();
        let expected = g * mass / distance;
        prop_assert!((a.length() - expected).abs() <= expected * 1e-9);

        let dir = (hole - from) / distance;
        prop_assert!((a.normalize() - dir).length() < 1e-9);
    }

    #[test]
    fn gravity_weakens_with_distance(d1 in 1.0..1000.0f64, extra in 0.01..1000.0f64) {
        let near = compute_acceleration(DVec2::ZERO, DVec2::new(d1, 0.0), 5.0, 10.0).unwrap();
        let far = compute_acceleration(DVec2::ZERO, DVec2::new(d1 + extra, 0.0), 5.0, 10.0).unwrap();
        prop_assert!(far.length() < near.length());
    }

    #[test]
    fn aim_force_stays_in_bounds(
        arcade in any::<bool>(),
        inputs in proptest::collection::vec(aim_input(), 0..300),
    ) {
        let variant = if arcade { Variant::Arcade } else { Variant::Classic };
        let tuning = variant.tuning();
        let mut p = Projectile::spawn(DVec2::new(100.0, 100.0), &tuning);
        for input in &inputs {
            advance(&mut p, input, &[], &tuning).unwrap();
            prop_assert!(p.force >= tuning.min_force);
            prop_assert!(p.force <= tuning.max_force);
            prop_assert_eq!(p.phase, AimPhase::Aiming);
            prop_assert_eq!(p.pos, DVec2::new(100.0, 100.0));
        }
    }

    #[test]
    fn launch_fixes_force_and_initial_velocity(
        presses in 0usize..40,
        after in proptest::collection::vec(aim_input(), 1..20),
    ) {
        let tuning = Variant::Classic.tuning();
        let mut p = Projectile::spawn(DVec2::new(100.0, 100.0), &tuning);
        let right = TickInput { right: true, ..Default::default() };
        for _ in 0..presses {
            advance(&mut p, &right, &[], &tuning).unwrap();
        }
        let launch = TickInput { launch: true, ..Default::default() };
        advance(&mut p, &launch, &[], &tuning).unwrap();
        let force = p.force;
        prop_assert_eq!(p.vel, DVec2::new(force * tuning.launch_multiplier, 0.0));

        for input in &after {
            let input = TickInput { launch: true, ..*input };
            advance(&mut p, &input, &[], &tuning).unwrap();
            prop_assert_eq!(p.force, force);
            prop_assert_eq!(p.spin, 0.0);
            prop_assert_eq!(p.phase, AimPhase::Launched);
        }
    }

    #[test]
    fn spin_curve_uses_post_gravity_heading(
        spin in -5.0..5.0f64,
        force in 0.2..10.0f64,
        hx in 300.0..1500.0f64, hy in -800.0..800.0f64,
    ) {
        let tuning = Variant::Arcade.tuning();
        let start = DVec2::new(100.0, 100.0);
        let hole_pos = DVec2::new(hx, hy);
        prop_assume!(start.distance(hole_pos) > 1.0);
        let hole = [Attractor::new(hole_pos, tuning.attractor_mass)];

        let mut p = Projectile::spawn(start, &tuning);
        p.force = force;
        p.spin = spin;
        let launch = TickInput { launch: true, ..Default::default() };
        advance(&mut p, &launch, &hole, &tuning).unwrap();

        let delta = hole_pos - start;
        let d = delta.length();
        let mut vel = DVec2::new(force, 0.0) + delta / d * (tuning.gravity_constant * tuning.attractor_mass / d);
        let normal = vel.y.atan2(vel.x) + std::f64::consts::FRAC_PI_2;
        vel += DVec2::new(normal.cos(), normal.sin()) * (spin / tuning.curve_divisor);

        prop_assert!((p.vel - vel).length() < 1e-9);
        prop_assert!((p.pos - (start + vel)).length() < 1e-9);
    }

    #[test]
    fn rect_overlap_is_symmetric(
        ax in coord(), ay in coord(), aw in 1.0..300.0f64, ah in 1.0..300.0f64,
        bx in coord(), by in coord(), bw in 1.0..300.0f64, bh in 1.0..300.0f64,
    ) {
        let a = Rect::from_center(DVec2::new(ax, ay), DVec2::new(aw, ah));
        let b = Rect::from_center(DVec2::new(bx, by), DVec2::new(bw, bh));
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));

        let separated_x = a.right() <= b.left() || b.right() <= a.left();
        let separated_y = a.bottom() <= b.top() || b.bottom() <= a.top();
        prop_assert_eq!(a.intersects(&b), !(separated_x || separated_y));
    }

    #[test]
    fn lose_iff_any_hole_overlaps(
        px in pixel(), py in pixel(),
        holes in proptest::collection::vec((pixel(), pixel()), 0..4),
    ) {
        let tuning = Variant::Classic.tuning();
        let p = Projectile::spawn(DVec2::new(px, py), &tuning);
        let holes: Vec<Attractor> = holes
            .into_iter()
            .map(|(x, y)| Attractor::new(DVec2::new(x, y), tuning.attractor_mass))
            .collect();
        let far = Target::new(DVec2::new(1e6, 1e6));

        let hit = holes.iter().any(|h| {
            let dx = (h.pos.x - p.pos.x).abs();
            let dy = (h.pos.y - p.pos.y).abs();
            dx < (p.size + h.size.x) / 2.0 && dy < (p.size + h.size.y) / 2.0
        });
        let outcome = evaluate(&p, &holes, &far);
        prop_assert_eq!(outcome == Outcome::Lose, hit);
    }
}
