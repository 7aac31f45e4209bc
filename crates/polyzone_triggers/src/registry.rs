//! Trigger registry and movement tick driver

use crate::config::TriggerConfig;
use crate::debug::DebugLine;
use crate::error::{Result, TriggerError};
use crate::events::{ActorId, TransitionKind, TriggerEvent};
use crate::record::TriggerRecord;
use crate::trigger::{Trigger, TriggerDesc, TriggerId};
use log::trace;
use polyzone_math::{HitboxSize, LocalPoint, WorldPoint};

/// An entity that can walk into triggers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Actor {
    pub id: ActorId,
    pub hitbox: HitboxSize,
}

impl Actor {
    pub fn new(id: ActorId, hitbox: HitboxSize) -> Self {
        Self { id, hitbox }
    }
}

/// Position change reported by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovementEvent {
    /// Regular movement between two feet positions
    Move {
        actor: Actor,
        from: WorldPoint,
        to: WorldPoint,
    },
    /// Instant relocation. Only the two endpoints are tested, like a move.
    Teleport {
        actor: Actor,
        from: WorldPoint,
        to: WorldPoint,
    },
    /// Actor appeared with no previous position
    Spawn { actor: Actor, at: WorldPoint },
}

impl MovementEvent {
    /// The actor this event is about
    pub fn actor(&self) -> Actor {
        match *self {
            Self::Move { actor, .. } | Self::Teleport { actor, .. } | Self::Spawn { actor, .. } => actor,
        }
    }
}

/// Owns every trigger and turns movement events into transitions.
///
/// Triggers are visited in registration order. Containment state is not
/// stored between events; each event re-derives it from the old and new
/// positions.
pub struct TriggerRegistry {
    config: TriggerConfig,
    triggers: Vec<Trigger>,
    total_triangles: usize,
    last_events: Vec<TriggerEvent>,
}

impl TriggerRegistry {
    /// Create an empty registry
    pub fn new(config: TriggerConfig) -> Self {
        Self {
            config,
            triggers: Vec::new(),
            total_triangles: 0,
            last_events: Vec::new(),
        }
    }

    /// Build and register a trigger
    pub fn create(&mut self, desc: TriggerDesc) -> Result<TriggerId> {
        let trigger = Trigger::from_desc(desc, &self.config)?;
        let id = trigger.id();
        self.add(trigger)?;
        Ok(id)
    }

    /// Rebuild a persisted trigger and register it
    pub fn load(&mut self, record: TriggerRecord) -> Result<TriggerId> {
        let trigger = Trigger::from_record(record, &self.config)?;
        let id = trigger.id();
        self.add(trigger)?;
        Ok(id)
    }

    /// Snapshot every trigger for persistence
    pub fn records(&self) -> Vec<TriggerRecord> {
        self.triggers.iter().map(Trigger::to_record).collect()
    }

    /// Register an already built trigger
    pub fn add(&mut self, trigger: Trigger) -> Result<()> {
        if self.contains(trigger.id()) {
            return Err(TriggerError::DuplicateId(trigger.id()));
        }
        self.triggers.push(trigger);
        self.refresh_total();
        Ok(())
    }

    /// Unregister a trigger, handing it back to the caller
    pub fn remove(&mut self, id: TriggerId) -> Option<Trigger> {
        let index = self.index_of(id)?;
        let trigger = self.triggers.remove(index);
        self.refresh_total();
        Some(trigger)
    }

    pub fn contains(&self, id: TriggerId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: TriggerId) -> Option<&Trigger> {
        self.triggers.iter().find(|t| t.id() == id)
    }

    /// Mutate a trigger in place
    pub fn update<R>(&mut self, id: TriggerId, f: impl FnOnce(&mut Trigger) -> R) -> Result<R> {
        let index = self.index_of(id).ok_or(TriggerError::NotFound(id))?;
        let result = f(&mut self.triggers[index]);
        self.refresh_total();
        Ok(result)
    }

    /// Move a trigger without rebuilding its hull
    pub fn set_position(&mut self, id: TriggerId, position: WorldPoint) -> Result<()> {
        self.update(id, |trigger| trigger.set_position(position))
    }

    /// Replace a trigger's anchors and rebuild its hull
    pub fn set_anchors(&mut self, id: TriggerId, anchors: Vec<LocalPoint>) -> Result<()> {
        self.update(id, |trigger| trigger.set_anchors(anchors))?
    }

    /// Rebuild a trigger's hull from its current anchors
    pub fn recompute(&mut self, id: TriggerId) -> Result<()> {
        self.update(id, Trigger::recompute)?
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trigger> {
        self.triggers.iter()
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Sum of triangle counts over all registered triggers
    pub fn total_triangles(&self) -> usize {
        self.total_triangles
    }

    fn index_of(&self, id: TriggerId) -> Option<usize> {
        self.triggers.iter().position(|t| t.id() == id)
    }

    fn refresh_total(&mut self) {
        self.total_triangles = self.triggers.iter().map(Trigger::triangle_count).sum();
    }

    /// Run one movement event through every trigger.
    ///
    /// Callbacks fire synchronously in registration order. The returned
    /// slice holds the transitions emitted by this event only.
    pub fn handle(&mut self, event: &MovementEvent) -> &[TriggerEvent] {
        self.last_events.clear();
        match *event {
            MovementEvent::Move { actor, from, to } | MovementEvent::Teleport { actor, from, to } => {
                self.handle_move(actor, from, to)
            }
            MovementEvent::Spawn { actor, at } => self.handle_spawn(actor, at),
        }
        &self.last_events
    }

    fn handle_move(&mut self, actor: Actor, from: WorldPoint, to: WorldPoint) {
        let old_corners = actor.hitbox.corners(from);
        let new_corners = actor.hitbox.corners(to);

        for trigger in &self.triggers {
            if !trigger.within_check_radius(from) || !trigger.within_check_radius(to) {
                trace!("{} culled for trigger '{}'", actor.id, trigger.name());
                continue;
            }

            let was_inside = trigger.contains(&old_corners);
            let is_inside = trigger.contains(&new_corners);
            if let Some(kind) = TransitionKind::from_containment(was_inside, is_inside) {
                trigger.notify(actor.id, kind);
                self.last_events.push(TriggerEvent::new(actor.id, trigger.id(), kind));
            }
        }
    }

    fn handle_spawn(&mut self, actor: Actor, at: WorldPoint) {
        let corners = actor.hitbox.corners(at);

        for trigger in &self.triggers {
            if !trigger.within_check_radius(at) {
                trace!("{} culled for trigger '{}'", actor.id, trigger.name());
                continue;
            }

            if trigger.contains(&corners) {
                for kind in [TransitionKind::Tick, TransitionKind::Entered] {
                    trigger.notify(actor.id, kind);
                    self.last_events.push(TriggerEvent::new(actor.id, trigger.id(), kind));
                }
            }
        }
    }

    /// Events emitted by the latest `handle` call
    pub fn last_events(&self) -> &[TriggerEvent] {
        &self.last_events
    }

    /// Take the events emitted by the latest `handle` call
    pub fn drain_events(&mut self) -> Vec<TriggerEvent> {
        std::mem::take(&mut self.last_events)
    }

    /// Wireframe of every trigger, in world frame
    pub fn debug_lines(&self) -> Vec<DebugLine> {
        self.triggers.iter().flat_map(Trigger::wireframe).collect()
    }
}

impl Default for TriggerRegistry {
    fn default() -> Self {
        Self::new(TriggerConfig::default())
    }
}
