//! Unit tests for sl-mobility.

use sl_core::Vec2;

use crate::{Movement, Step};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn walker(x: f64, y: f64) -> Movement {
    Movement::new(Vec2::new(x, y), 50.0, 1.0)
}

// ── Movement state ────────────────────────────────────────────────────────────

#[cfg(test)]
mod movement_state {
    use super::*;

    #[test]
    fn new_is_stationary() {
        let m = walker(3.0, 4.0);
        assert!(!m.is_moving());
        assert_eq!(m.remaining(), None);
    }

    #[test]
    fn remaining_and_eta() {
        let mut m = walker(0.0, 0.0);
        m.set_target(Vec2::new(30.0, 40.0));
        assert_eq!(m.remaining(), Some(50.0));
        assert_eq!(m.eta_secs(), Some(1.0));
        m.clear_target();
        assert!(!m.is_moving());
    }
}

// ── advance ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod advance {
    use super::*;

    #[test]
    fn no_target_is_noop() {
        let mut m = walker(5.0, 5.0);
        assert_eq!(m.advance(1.0), Step::Stationary);
        assert_eq!(m.position, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn moves_speed_times_dt() {
        let mut m = walker(0.0, 0.0);
        m.set_target(Vec2::new(100.0, 0.0));
        assert_eq!(m.advance(1.0), Step::Moved);
        assert_eq!(m.position, Vec2::new(50.0, 0.0));
        assert!(m.is_moving());
    }

    #[test]
    fn large_dt_overshoot_snaps() {
        let mut m = walker(0.0, 0.0);
        m.set_target(Vec2::new(100.0, 0.0));
        assert_eq!(m.advance(3.0), Step::Arrived);
        assert_eq!(m.position, Vec2::new(100.0, 0.0));
        assert_eq!(m.target, None);
    }

    #[test]
    fn within_epsilon_snaps_without_moving() {
        let mut m = walker(0.0, 0.0);
        m.set_target(Vec2::new(0.5, 0.5));
        // dt = 0 still arrives: the epsilon test precedes the move.
        assert_eq!(m.advance(0.0), Step::Arrived);
        assert_eq!(m.position, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn exactly_epsilon_moves_then_snaps() {
        let mut m = walker(0.0, 0.0);
        m.set_target(Vec2::new(1.0, 0.0));
        // One step at 50 u/s over 0.01 s covers 0.5 u, leaving 0.5 < 1.0.
        assert_eq!(m.advance(0.01), Step::Arrived);
        assert_eq!(m.position, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn exactly_epsilon_with_zero_dt_stays() {
        let mut m = walker(0.0, 0.0);
        m.set_target(Vec2::new(1.0, 0.0));
        assert_eq!(m.advance(0.0), Step::Moved);
        assert_eq!(m.position, Vec2::ZERO);
        assert!(m.is_moving());
    }

    #[test]
    fn post_move_within_epsilon_snaps() {
        let mut m = walker(0.0, 0.0);
        m.set_target(Vec2::new(50.5, 0.0));
        assert_eq!(m.advance(1.0), Step::Arrived);
        assert_eq!(m.position, Vec2::new(50.5, 0.0));
    }

    #[test]
    fn diagonal_movement() {
        let mut m = walker(0.0, 0.0);
        m.set_target(Vec2::new(300.0, 400.0));
        assert_eq!(m.advance(1.0), Step::Moved);
        assert!((m.position.x - 30.0).abs() < 1e-9);
        assert!((m.position.y - 40.0).abs() < 1e-9);
    }
}

// ── Convergence ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod convergence {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn arrives_within_bounded_ticks(
            sx in -500.0f64..500.0, sy in -500.0f64..500.0,
            tx in -500.0f64..500.0, ty in -500.0f64..500.0,
            dt in 0.005f64..5.0,
        ) {
            let mut m = walker(sx, sy);
            let target = Vec2::new(tx, ty);
            m.set_target(target);

            let distance = Vec2::new(sx, sy).distance(target);
            let bound = (distance / (m.speed * dt)).ceil() as u64 + 1;

            let mut ticks = 0u64;
            let mut last = distance;
            while m.is_moving() {
                prop_assert!(ticks <= bound, "no arrival after {ticks} ticks (bound {bound})");
                m.advance(dt);
                let now = m.position.distance(target);
                prop_assert!(now <= last + 1e-9, "distance grew from {last} to {now}");
                last = now;
                ticks += 1;
            }
            prop_assert_eq!(m.position, target);
        }
    }
}
