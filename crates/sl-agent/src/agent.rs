//! The `Agent` and its per-tick update.

use sl_behavior::{BehaviorModel, Intent, NeedsBehavior, Perception};
use sl_core::{AgentId, AgentParams, Footprint, NeedKind, Needs, ObjectId, Vec2};
use sl_mobility::Movement;
use sl_world::WorldView;

use crate::{Action, AgentStatus, UpdateReport};

/// One simling.
///
/// Owns its position, needs, movement target, and action exclusively.  The
/// world is only ever borrowed for the duration of an update.
#[derive(Debug, Clone)]
pub struct Agent {
    id: AgentId,

    /// Current need values.  Public so tests and UI tools can poke them;
    /// the simulation itself only changes them through decay and `use`.
    pub needs: Needs,

    pub(crate) movement: Movement,
    pub(crate) action:   Action,
    footprint: Footprint,
    params:    AgentParams,
}

impl Agent {
    /// A fresh, idle agent with its top-left corner at `position`.
    pub fn new(id: AgentId, position: Vec2, params: AgentParams) -> Self {
        Self {
            id,
            needs:     Needs::uniform(params.initial_need),
            movement:  Movement::from_params(position, &params),
            action:    Action::Idle,
            footprint: Footprint::square(params.size),
            params,
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.movement.position
    }

    /// Current movement target, `None` when not moving.
    #[inline]
    pub fn target(&self) -> Option<Vec2> {
        self.movement.target
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.movement.is_moving()
    }

    #[inline]
    pub fn action(&self) -> Action {
        self.action
    }

    /// The object currently being sought, if any.
    #[inline]
    pub fn target_object(&self) -> Option<ObjectId> {
        self.action.target().map(|t| t.id())
    }

    #[inline]
    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.footprint.center_at(self.position())
    }

    #[inline]
    pub fn params(&self) -> &AgentParams {
        &self.params
    }

    /// `true` if `point` lies within this agent's footprint.
    pub fn contains(&self, point: Vec2) -> bool {
        self.footprint.contains(self.position(), point)
    }

    pub fn status(&self) -> AgentStatus {
        AgentStatus {
            id:        self.id,
            position:  self.position(),
            footprint: self.footprint,
            needs:     self.needs,
            action:    self.action.label(),
        }
    }

    // ── External commands ─────────────────────────────────────────────────

    /// Send the agent to `position` on the player's behalf.
    ///
    /// Overrides any task in progress: a sought object is dropped without
    /// being used.  A non-finite `position` is ignored.
    pub fn command_target(&mut self, position: Vec2) {
        if !position.is_finite() {
            tracing::warn!(agent = %self.id, %position, "ignoring non-finite command target");
            return;
        }
        if let Some(abandoned) = self.action.target() {
            tracing::debug!(agent = %self.id, %abandoned, "seek abandoned for player command");
        }
        self.movement.set_target(position);
        self.set_action(Action::PlayerCommanded);
    }

    /// Stop moving.
    ///
    /// A player-commanded walk returns to `Idle` on the next update.  A seek
    /// is dropped immediately so the object is not used from where the agent
    /// stopped.
    pub fn clear_target(&mut self) {
        self.movement.clear_target();
        if self.action.is_seeking() {
            self.set_action(Action::Idle);
        }
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance one tick with the need-driven behavior configured by this
    /// agent's params.
    pub fn update(&mut self, dt_secs: f64, world: WorldView<'_>) -> UpdateReport {
        let behavior = NeedsBehavior::from_params(&self.params);
        self.update_with(dt_secs, world, &behavior)
    }

    /// Advance one tick, consulting `behavior` if the agent ends up idle.
    ///
    /// A negative or non-finite `dt_secs` is treated as 0.
    pub fn update_with<B>(&mut self, dt_secs: f64, world: WorldView<'_>, behavior: &B) -> UpdateReport
    where
        B: BehaviorModel + ?Sized,
    {
        let dt = if dt_secs.is_finite() && dt_secs > 0.0 { dt_secs } else { 0.0 };

        self.tick(dt);
        let step = self.movement.advance(dt);

        let before = self.action;
        let mut used = None;

        match self.action {
            Action::Idle => {
                let perception = Perception::new(self.center(), self.footprint, self.needs, world);
                if let Some(intent) = behavior.replan(&perception) {
                    self.begin(intent);
                }
            }
            Action::PlayerCommanded => {
                if !self.movement.is_moving() {
                    self.set_action(Action::Idle);
                }
            }
            Action::SeekingFood(_) | Action::SeekingSleep(_) => {
                if !self.movement.is_moving() {
                    used = self.finish_seek(world);
                }
            }
        }

        let transition = (before != self.action).then_some((before, self.action));
        UpdateReport { step, transition, used }
    }

    /// Needs decay for `dt_secs`.
    pub fn tick(&mut self, dt_secs: f64) {
        self.needs.decay(&self.params.rates, dt_secs);
    }

    // ── State machine helpers ─────────────────────────────────────────────

    fn begin(&mut self, intent: Intent) {
        self.movement.set_target(intent.destination);
        self.set_action(Action::seeking(intent.target));
    }

    /// Arrival while seeking: use the object exactly once and go idle.
    fn finish_seek(&mut self, world: WorldView<'_>) -> Option<(ObjectId, NeedKind)> {
        let target = self.action.target()?;
        self.set_action(Action::Idle);

        match target.resolve(world) {
            Some(object) => {
                object.use_on(&mut self.needs);
                let need = object.effect().need;
                tracing::debug!(
                    agent = %self.id,
                    %target,
                    %need,
                    value = self.needs.get(need),
                    "used object"
                );
                Some((target.id(), need))
            }
            None => {
                tracing::warn!(agent = %self.id, %target, "sought object missing from world view");
                None
            }
        }
    }

    fn set_action(&mut self, next: Action) {
        if next != self.action {
            tracing::debug!(agent = %self.id, from = %self.action, to = %next, "action");
            self.action = next;
        }
    }
}
