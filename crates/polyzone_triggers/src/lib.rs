//! Polyzone Triggers - Convex Trigger Volumes
//!
//! Arbitrary convex trigger volumes built from anchor points, with
//! enter/exit/tick detection for moving actors.
//!
//! # Features
//!
//! - Convex hulls from four or more anchors
//! - Flat anchor sets extruded into thin slabs
//! - Bounding-sphere culling before the separating-axis test
//! - Entered/Exited/Tick transitions with per-trigger callbacks
//! - JSON trigger records and debug wireframes
//!
//! # Example
//!
//! ```
//! use polyzone_triggers::prelude::*;
//!
//! let mut registry = TriggerRegistry::default();
//! let anchors = vec![
//!     LocalPoint::new(-1.0, 0.0, -1.0),
//!     LocalPoint::new(1.0, 0.0, -1.0),
//!     LocalPoint::new(0.0, 0.0, 1.0),
//!     LocalPoint::new(0.0, 2.0, 0.0),
//! ];
//! let id = registry
//!     .create(TriggerDesc::new(anchors).named("pad").on_triggered(|event| {
//!         println!("{} {:?} '{}'", event.actor, event.kind, event.trigger.name());
//!     }))
//!     .unwrap();
//!
//! let actor = Actor::new(ActorId(1), HitboxSize::new(0.2, 0.2, 0.2));
//! let events = registry.handle(&MovementEvent::Spawn {
//!     actor,
//!     at: WorldPoint::new(0.0, 0.1, 0.0),
//! });
//! assert_eq!(events.len(), 2);
//! assert!(events.iter().all(|e| e.trigger_id == id));
//! ```

pub mod config;
pub mod containment;
pub mod debug;
pub mod error;
pub mod events;
pub mod record;
pub mod registry;
pub mod trigger;

pub mod prelude {
    pub use crate::config::TriggerConfig;
    pub use crate::containment::{sat_overlaps, Interval, WORLD_AXES};
    pub use crate::debug::{sample_line, DebugLine, MAX_LINE_SAMPLES};
    pub use crate::error::{Result, TriggerError};
    pub use crate::events::{ActorId, TransitionKind, TriggerCallback, TriggerEvent, TriggeredCallback};
    pub use crate::record::TriggerRecord;
    pub use crate::registry::{Actor, MovementEvent, TriggerRegistry};
    pub use crate::trigger::{prepare_anchors, DebugColor, Trigger, TriggerDesc, TriggerId};
    pub use polyzone_math::{HitboxSize, LocalPoint, Vec3d, WorldPoint};
}

pub use prelude::*;
