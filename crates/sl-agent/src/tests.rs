//! Unit tests for sl-agent.

#[cfg(test)]
mod helpers {
    use sl_core::{AgentId, AgentParams, Vec2};
    use sl_world::{World, WorldBuilder};

    use crate::Agent;

    pub fn agent_at(x: f64, y: f64) -> Agent {
        Agent::new(AgentId(0), Vec2::new(x, y), AgentParams::default())
    }

    pub fn two_foods() -> World {
        WorldBuilder::new()
            .with(sl_world::Interactable::food(100.0, 100.0))
            .with(sl_world::Interactable::food(500.0, 500.0))
            .build()
            .unwrap()
    }

    pub fn food_and_bed() -> World {
        let mut b = WorldBuilder::new();
        b.add_food(100.0, 100.0);
        b.add_bed(300.0, 300.0);
        b.build().unwrap()
    }
}

// ── Action ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod action_tests {
    use sl_behavior::Target;
    use sl_core::ObjectId;

    use crate::Action;

    #[test]
    fn default_is_idle() {
        assert_eq!(Action::default(), Action::Idle);
        assert!(Action::Idle.is_idle());
        assert!(Action::Idle.target().is_none());
    }

    #[test]
    fn seeking_round_trips_target() {
        let food = Target::Food(ObjectId(3));
        let bed = Target::Bed(ObjectId(4));
        assert_eq!(Action::seeking(food), Action::SeekingFood(ObjectId(3)));
        assert_eq!(Action::seeking(bed).target(), Some(bed));
        assert!(Action::SeekingSleep(ObjectId(4)).is_seeking());
        assert!(!Action::PlayerCommanded.is_seeking());
    }

    #[test]
    fn labels() {
        assert_eq!(Action::Idle.label(), "idle");
        assert_eq!(Action::PlayerCommanded.to_string(), "player_commanded");
        assert_eq!(Action::SeekingFood(ObjectId(0)).label(), "seeking_food");
        assert_eq!(Action::SeekingSleep(ObjectId(0)).label(), "seeking_sleep");
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod agent_tests {
    use sl_core::{NeedKind, ObjectId, Vec2};
    use sl_mobility::Step;
    use sl_world::World;

    use super::helpers::{agent_at, food_and_bed, two_foods};
    use crate::Action;

    #[test]
    fn new_agent_is_idle_with_default_needs() {
        let a = agent_at(100.0, 100.0);
        assert_eq!(a.action(), Action::Idle);
        assert_eq!(a.needs.hunger, 50.0);
        assert_eq!(a.needs.fun, 50.0);
        assert!(!a.is_moving());
        assert_eq!(a.center(), Vec2::new(110.0, 110.0));
    }

    #[test]
    fn decay_without_world() {
        let world = World::empty();
        let mut a = agent_at(0.0, 0.0);
        let report = a.update(1.0, world.view());
        assert_eq!(a.needs.hunger, 50.5);
        assert!((a.needs.sleep - 50.3).abs() < 1e-12);
        assert!((a.needs.social - 50.2).abs() < 1e-12);
        assert!((a.needs.fun - 50.4).abs() < 1e-12);
        assert_eq!(report.step, Step::Stationary);
        assert_eq!(report.transition, None);
    }

    #[test]
    fn decay_clamps_at_max() {
        let world = World::empty();
        let mut a = agent_at(0.0, 0.0);
        a.needs.hunger = 99.9;
        a.update(10.0, world.view());
        assert_eq!(a.needs.hunger, 100.0);
    }

    #[test]
    fn hungry_idle_agent_seeks_nearest_food() {
        let world = two_foods();
        let mut a = agent_at(0.0, 0.0);
        a.needs.hunger = 80.0;

        let report = a.update(1.0 / 60.0, world.view());

        assert_eq!(a.action(), Action::SeekingFood(ObjectId(0)));
        assert_eq!(a.target_object(), Some(ObjectId(0)));
        // Food center (115, 115) minus half the agent's 20x20 footprint.
        assert_eq!(a.target(), Some(Vec2::new(105.0, 105.0)));
        assert_eq!(report.transition, Some((Action::Idle, Action::SeekingFood(ObjectId(0)))));
        // Decision happens after movement: still at the origin.
        assert_eq!(a.position(), Vec2::ZERO);
    }

    #[test]
    fn hunger_beats_sleep() {
        let world = food_and_bed();
        let mut a = agent_at(0.0, 0.0);
        a.needs.hunger = 80.0;
        a.needs.sleep = 80.0;
        a.update(0.0, world.view());
        assert!(matches!(a.action(), Action::SeekingFood(_)));
    }

    #[test]
    fn sleepy_agent_seeks_bed() {
        let world = food_and_bed();
        let mut a = agent_at(0.0, 0.0);
        a.needs.sleep = 80.0;
        a.update(0.0, world.view());
        assert_eq!(a.action(), Action::SeekingSleep(ObjectId(1)));
        // Bed center (330, 315) minus (10, 10).
        assert_eq!(a.target(), Some(Vec2::new(320.0, 305.0)));
    }

    #[test]
    fn hungry_without_food_stays_idle() {
        let mut b = sl_world::WorldBuilder::new();
        b.add_bed(300.0, 300.0);
        let world = b.build().unwrap();

        let mut a = agent_at(0.0, 0.0);
        a.needs.hunger = 80.0;
        a.needs.sleep = 80.0;
        a.update(0.0, world.view());
        assert_eq!(a.action(), Action::Idle);
        assert!(!a.is_moving());
    }

    #[test]
    fn thresholds_are_strict() {
        let world = food_and_bed();
        let mut a = agent_at(0.0, 0.0);
        a.needs.hunger = 70.0;
        a.needs.sleep = 70.0;
        a.update(0.0, world.view());
        assert_eq!(a.action(), Action::Idle);
    }

    #[test]
    fn arrival_uses_object_exactly_once() {
        let world = two_foods();
        let mut a = agent_at(105.0, 105.0);
        a.needs.hunger = 80.0;
        a.action = Action::SeekingFood(ObjectId(0));

        let report = a.update(0.0, world.view());
        assert_eq!(a.needs.hunger, 30.0);
        assert_eq!(a.action(), Action::Idle);
        assert_eq!(a.target_object(), None);
        assert_eq!(report.used, Some((ObjectId(0), NeedKind::Hunger)));

        let again = a.update(0.0, world.view());
        assert_eq!(a.needs.hunger, 30.0);
        assert_eq!(again.used, None);
        assert_eq!(a.action(), Action::Idle);
    }

    #[test]
    fn bed_arrival_uses_once() {
        let world = food_and_bed();
        let mut a = agent_at(320.0, 305.0);
        a.needs.sleep = 90.0;
        a.action = Action::SeekingSleep(ObjectId(1));

        let report = a.update(0.0, world.view());
        assert_eq!(a.needs.sleep, 20.0);
        assert_eq!(a.action(), Action::Idle);
        assert_eq!(report.used, Some((ObjectId(1), NeedKind::Sleep)));

        let again = a.update(0.0, world.view());
        assert_eq!(a.needs.sleep, 20.0);
        assert_eq!(again.used, None);
        assert_eq!(a.action(), Action::Idle);
    }

    #[test]
    fn full_seek_cycle_reaches_and_eats() {
        let world = two_foods();
        let mut a = agent_at(0.0, 0.0);
        a.needs.hunger = 80.0;

        let mut eaten = None;
        for tick in 0..1000 {
            let report = a.update(1.0 / 60.0, world.view());
            if report.used.is_some() {
                eaten = Some(tick);
                break;
            }
        }
        assert!(eaten.is_some(), "agent never reached the food");
        assert_eq!(a.position(), Vec2::new(105.0, 105.0));
        assert_eq!(a.action(), Action::Idle);
        assert!(a.needs.hunger < 40.0);
    }

    #[test]
    fn missing_target_object_goes_idle_without_use() {
        let world = World::empty();
        let mut a = agent_at(0.0, 0.0);
        a.needs.hunger = 80.0;
        a.action = Action::SeekingFood(ObjectId(9));

        let report = a.update(0.0, world.view());
        assert_eq!(a.action(), Action::Idle);
        assert_eq!(report.used, None);
        assert_eq!(a.needs.hunger, 80.0);
    }

    #[test]
    fn mismatched_kind_target_idles_without_use() {
        let world = food_and_bed();
        let mut a = agent_at(0.0, 0.0);
        a.needs.hunger = 80.0;
        // Object 1 is the bed.
        a.action = Action::SeekingFood(ObjectId(1));

        let report = a.update(0.0, world.view());
        assert_eq!(a.action(), Action::Idle);
        assert_eq!(report.used, None);
        assert_eq!(a.needs.hunger, 80.0);
        assert_eq!(a.needs.sleep, 50.0);
    }

    #[test]
    fn non_finite_command_is_ignored() {
        let world = two_foods();
        let mut a = agent_at(0.0, 0.0);

        a.command_target(Vec2::new(f64::NAN, 0.0));
        a.command_target(Vec2::new(0.0, f64::INFINITY));
        assert_eq!(a.action(), Action::Idle);
        assert_eq!(a.target(), None);

        a.command_target(Vec2::new(30.0, 0.0));
        assert_eq!(a.action(), Action::PlayerCommanded);
        for _ in 0..10 {
            a.update(0.1, world.view());
            assert!(a.position().is_finite());
        }
        assert_eq!(a.position(), Vec2::new(30.0, 0.0));
        assert_eq!(a.action(), Action::Idle);
    }

    #[test]
    fn player_command_abandons_seek() {
        let world = two_foods();
        let mut a = agent_at(105.0, 105.0);
        a.needs.hunger = 80.0;
        a.action = Action::SeekingFood(ObjectId(0));

        a.command_target(Vec2::new(400.0, 100.0));
        assert_eq!(a.action(), Action::PlayerCommanded);
        assert_eq!(a.target_object(), None);
        assert_eq!(a.target(), Some(Vec2::new(400.0, 100.0)));

        let report = a.update(0.0, world.view());
        assert_eq!(report.used, None);
        assert_eq!(a.needs.hunger, 80.0);
        assert_eq!(a.action(), Action::PlayerCommanded);
    }

    #[test]
    fn player_command_returns_to_idle_on_arrival() {
        let world = World::empty();
        let mut a = agent_at(0.0, 0.0);
        a.command_target(Vec2::new(100.0, 0.0));

        let report = a.update(3.0, world.view());
        assert_eq!(report.step, Step::Arrived);
        assert_eq!(a.position(), Vec2::new(100.0, 0.0));
        assert_eq!(a.target(), None);
        assert_eq!(a.action(), Action::Idle);
        assert_eq!(report.transition, Some((Action::PlayerCommanded, Action::Idle)));
    }

    #[test]
    fn clear_target_on_player_walk_idles_next_update() {
        let world = World::empty();
        let mut a = agent_at(0.0, 0.0);
        a.command_target(Vec2::new(100.0, 0.0));
        a.clear_target();
        assert_eq!(a.action(), Action::PlayerCommanded);
        assert!(!a.is_moving());

        a.update(0.0, world.view());
        assert_eq!(a.action(), Action::Idle);
    }

    #[test]
    fn clear_target_drops_seek_without_use() {
        let world = two_foods();
        let mut a = agent_at(0.0, 0.0);
        a.needs.hunger = 80.0;
        a.update(0.0, world.view());
        assert!(a.action().is_seeking());

        a.clear_target();
        assert_eq!(a.action(), Action::Idle);
        assert_eq!(a.needs.hunger, 80.0);
    }

    #[test]
    fn negative_dt_is_clamped() {
        let world = World::empty();
        let mut a = agent_at(0.0, 0.0);
        a.command_target(Vec2::new(100.0, 0.0));
        let report = a.update(-5.0, world.view());
        assert_eq!(a.needs.hunger, 50.0);
        assert_eq!(a.position(), Vec2::ZERO);
        assert_eq!(report.step, Step::Moved);

        a.update(f64::NAN, world.view());
        assert_eq!(a.needs.hunger, 50.0);
    }

    #[test]
    fn status_reflects_state() {
        let world = two_foods();
        let mut a = agent_at(0.0, 0.0);
        a.needs.hunger = 80.0;
        a.update(0.0, world.view());

        let s = a.status();
        assert_eq!(s.action, "seeking_food");
        assert_eq!(s.position, Vec2::ZERO);
        assert_eq!(s.needs.hunger, 80.0);
    }

    #[test]
    fn update_with_noop_never_plans() {
        let world = two_foods();
        let mut a = agent_at(0.0, 0.0);
        a.needs.hunger = 95.0;
        a.update_with(0.0, world.view(), &sl_behavior::NoopBehavior);
        assert_eq!(a.action(), Action::Idle);
    }
}

// ── Store / builder ───────────────────────────────────────────────────────────

#[cfg(test)]
mod store_tests {
    use sl_core::{AgentId, AgentParams, CoreError, Vec2};

    use crate::AgentStoreBuilder;

    #[test]
    fn builder_assigns_dense_ids() {
        let store = AgentStoreBuilder::new(AgentParams::default())
            .agent_at(100.0, 100.0)
            .agent_at(150.0, 200.0)
            .build()
            .unwrap();
        assert_eq!(store.count(), 2);
        let ids: Vec<_> = store.agent_ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1)]);
        assert_eq!(store.get(AgentId(1)).unwrap().position(), Vec2::new(150.0, 200.0));
        assert!(store.get(AgentId(2)).is_none());
    }

    #[test]
    fn builder_rejects_bad_params() {
        let bad = AgentParams { speed: -1.0, ..AgentParams::default() };
        let err = AgentStoreBuilder::new(AgentParams::default())
            .agent_at(0.0, 0.0)
            .agent_with(Vec2::ZERO, bad)
            .build()
            .unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn pick_at_prefers_lowest_id() {
        let store = AgentStoreBuilder::new(AgentParams::default())
            .agents_at([Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0), Vec2::new(100.0, 100.0)])
            .build()
            .unwrap();
        // (15, 15) lies inside agents 0 and 1.
        assert_eq!(store.pick_at(Vec2::new(15.0, 15.0)), Some(AgentId(0)));
        assert_eq!(store.pick_at(Vec2::new(25.0, 25.0)), Some(AgentId(1)));
        assert_eq!(store.pick_at(Vec2::new(110.0, 120.0)), Some(AgentId(2)));
        assert_eq!(store.pick_at(Vec2::new(60.0, 60.0)), None);
    }

    #[test]
    fn spawn_appends() {
        let mut store = crate::AgentStore::new();
        assert!(store.is_empty());
        let id = store.spawn(Vec2::new(5.0, 5.0), AgentParams::default());
        assert_eq!(id, Some(AgentId(0)));
        let next = store.spawn(Vec2::new(9.0, 9.0), AgentParams::default());
        assert_eq!(next, Some(AgentId(1)));
        assert_eq!(store.iter().count(), 2);
        assert_eq!(store.get(AgentId(1)).map(|a| a.id()), Some(AgentId(1)));
    }
}
