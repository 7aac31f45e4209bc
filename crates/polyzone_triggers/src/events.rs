//! Trigger events

use crate::trigger::{Trigger, TriggerId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of an actor moving through the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// What happened between an actor and a trigger during one movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    /// Actor moved from outside to inside
    Entered,
    /// Actor moved from inside to outside
    Exited,
    /// Actor was inside before and after
    Tick,
}

impl TransitionKind {
    /// Map a before/after containment pair onto a transition.
    ///
    /// Staying outside produces nothing.
    pub fn from_containment(was_inside: bool, is_inside: bool) -> Option<Self> {
        match (was_inside, is_inside) {
            (false, false) => None,
            (false, true) => Some(Self::Entered),
            (true, false) => Some(Self::Exited),
            (true, true) => Some(Self::Tick),
        }
    }
}

/// Borrowed view of a transition, handed to the trigger's callback
#[derive(Debug, Clone, Copy)]
pub struct TriggeredCallback<'a> {
    /// The actor that moved
    pub actor: ActorId,
    /// The trigger it interacted with
    pub trigger: &'a Trigger,
    /// What happened
    pub kind: TransitionKind,
}

/// Callback type for trigger transitions
pub type TriggerCallback = Box<dyn Fn(&TriggeredCallback<'_>) + Send + Sync>;

/// An owned record of a transition, kept by the registry after each pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerEvent {
    /// The actor that moved
    pub actor: ActorId,
    /// The trigger it interacted with
    pub trigger_id: TriggerId,
    /// What happened
    pub kind: TransitionKind,
}

impl TriggerEvent {
    /// Create an event
    pub fn new(actor: ActorId, trigger_id: TriggerId, kind: TransitionKind) -> Self {
        Self {
            actor,
            trigger_id,
            kind,
        }
    }

    /// Check if this is an enter event
    pub fn is_entered(&self) -> bool {
        self.kind == TransitionKind::Entered
    }

    /// Check if this is an exit event
    pub fn is_exited(&self) -> bool {
        self.kind == TransitionKind::Exited
    }

    /// Check if this is a tick event
    pub fn is_tick(&self) -> bool {
        self.kind == TransitionKind::Tick
    }
}

impl From<&TriggeredCallback<'_>> for TriggerEvent {
    fn from(callback: &TriggeredCallback<'_>) -> Self {
        Self::new(callback.actor, callback.trigger.id(), callback.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        assert_eq!(TransitionKind::from_containment(false, false), None);
        assert_eq!(
            TransitionKind::from_containment(false, true),
            Some(TransitionKind::Entered)
        );
        assert_eq!(
            TransitionKind::from_containment(true, false),
            Some(TransitionKind::Exited)
        );
        assert_eq!(
            TransitionKind::from_containment(true, true),
            Some(TransitionKind::Tick)
        );
    }

    #[test]
    fn test_event_helpers() {
        let id = TriggerId::new();
        let event = TriggerEvent::new(ActorId(7), id, TransitionKind::Exited);

        assert!(event.is_exited());
        assert!(!event.is_entered());
        assert!(!event.is_tick());
        assert_eq!(event.trigger_id, id);
        assert_eq!(event.actor.to_string(), "actor#7");
    }
}
