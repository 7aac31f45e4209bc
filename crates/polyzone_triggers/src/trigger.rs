//! Trigger entity

use crate::config::TriggerConfig;
use crate::containment::{sat_overlaps, WORLD_AXES};
use crate::error::Result;
use crate::events::{ActorId, TransitionKind, TriggerCallback, TriggeredCallback};
use log::{debug, info, warn};
use polyzone_hull::{are_coplanar, build_hull, extrude_coplanar, validate_separation};
use polyzone_hull::{HullError, Triangle};
use polyzone_math::{LocalPoint, WorldPoint};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Opaque unique trigger identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriggerId(Uuid);

impl TriggerId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TriggerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TriggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// RGB color used when drawing a trigger's wireframe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DebugColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl DebugColor {
    pub const RED: Self = Self::new(255, 0, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for DebugColor {
    fn default() -> Self {
        Self::RED
    }
}

/// Everything needed to build a trigger
pub struct TriggerDesc {
    pub id: Option<TriggerId>,
    pub name: String,
    pub color: DebugColor,
    pub anchors: Vec<LocalPoint>,
    pub position: WorldPoint,
    pub callback: Option<TriggerCallback>,
}

impl TriggerDesc {
    /// Describe a trigger at the world origin
    pub fn new(anchors: Vec<LocalPoint>) -> Self {
        Self {
            id: None,
            name: String::from("unnamed"),
            color: DebugColor::default(),
            anchors,
            position: WorldPoint::ORIGIN,
            callback: None,
        }
    }

    /// Set world position
    pub fn at(mut self, position: WorldPoint) -> Self {
        self.position = position;
        self
    }

    /// Set display name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set wireframe color
    pub fn with_color(mut self, color: DebugColor) -> Self {
        self.color = color;
        self
    }

    /// Use a fixed id instead of a fresh one
    pub fn with_id(mut self, id: TriggerId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the transition callback
    pub fn on_triggered<F>(mut self, f: F) -> Self
    where
        F: Fn(&TriggeredCallback<'_>) + Send + Sync + 'static,
    {
        self.callback = Some(Box::new(f));
        self
    }
}

/// Anchors, triangles and check radius, always replaced together
struct Shape {
    anchors: Vec<LocalPoint>,
    triangles: Vec<Triangle>,
    check_radius: f64,
}

impl Shape {
    fn compute(anchors: Vec<LocalPoint>, config: &TriggerConfig) -> Result<Self> {
        let anchors = prepare_anchors(anchors, config)?;
        let triangles = build_hull(&anchors)?;
        let farthest = anchors
            .iter()
            .map(|a| a.distance_from_origin())
            .fold(0.0, f64::max);

        Ok(Self {
            anchors,
            triangles,
            check_radius: config.check_radius_scale * farthest,
        })
    }
}

/// Validate an anchor set and extrude it if it is flat.
///
/// Near-duplicate anchors are only reported. Fewer than four anchors is an
/// error.
pub fn prepare_anchors(anchors: Vec<LocalPoint>, config: &TriggerConfig) -> Result<Vec<LocalPoint>> {
    if anchors.len() < 4 {
        return Err(HullError::InsufficientPoints {
            found: anchors.len(),
        }
        .into());
    }

    if !validate_separation(&anchors, config.min_separation) {
        warn!(
            "Anchors closer than {} detected, containment may be inaccurate",
            config.min_separation
        );
    }

    if are_coplanar(&anchors) {
        debug!(
            "Extruding {} coplanar anchors by {}",
            anchors.len(),
            config.extrusion_thickness
        );
        return Ok(extrude_coplanar(&anchors, config.extrusion_thickness)?);
    }

    Ok(anchors)
}

/// A convex trigger volume placed in the world.
///
/// Geometry is stored in the trigger's local frame and only translated to
/// world frame when tested or drawn, so moving a trigger is cheap. Changing
/// its anchors rebuilds the hull and should be rare.
pub struct Trigger {
    id: TriggerId,
    name: String,
    color: DebugColor,
    position: WorldPoint,
    shape: Shape,
    world_anchors: Vec<WorldPoint>,
    config: TriggerConfig,
    callback: Option<TriggerCallback>,
    last_compute_time: Duration,
}

impl Trigger {
    /// Build a trigger with a fresh id and default name
    pub fn new(anchors: Vec<LocalPoint>, position: WorldPoint, config: &TriggerConfig) -> Result<Self> {
        Self::from_desc(TriggerDesc::new(anchors).at(position), config)
    }

    /// Build a trigger from a description
    pub fn from_desc(desc: TriggerDesc, config: &TriggerConfig) -> Result<Self> {
        let start = Instant::now();
        let shape = Shape::compute(desc.anchors, config)?;
        let elapsed = start.elapsed();

        let mut trigger = Self {
            id: desc.id.unwrap_or_default(),
            name: desc.name,
            color: desc.color,
            position: desc.position,
            world_anchors: Vec::new(),
            shape,
            config: *config,
            callback: desc.callback,
            last_compute_time: elapsed,
        };
        trigger.refresh_world_anchors();
        trigger.log_compute_time();
        Ok(trigger)
    }

    /// Replace the anchors and rebuild the hull.
    ///
    /// On failure the previous anchors and hull are kept.
    pub fn set_anchors(&mut self, anchors: Vec<LocalPoint>) -> Result<()> {
        let start = Instant::now();
        let shape = Shape::compute(anchors, &self.config)?;
        self.last_compute_time = start.elapsed();
        self.shape = shape;
        self.refresh_world_anchors();
        self.log_compute_time();
        Ok(())
    }

    /// Rebuild the hull from the current anchors
    pub fn recompute(&mut self) -> Result<()> {
        let anchors = self.shape.anchors.clone();
        self.set_anchors(anchors)
    }

    /// Move the trigger. The hull is not rebuilt.
    pub fn set_position(&mut self, position: WorldPoint) {
        self.position = position;
        self.refresh_world_anchors();
    }

    fn refresh_world_anchors(&mut self) {
        let position = self.position;
        self.world_anchors.clear();
        self.world_anchors
            .extend(self.shape.anchors.iter().map(|a| a.to_world(position)));
    }

    fn log_compute_time(&self) {
        if self.config.debug {
            info!(
                "Trigger '{}' hull: {} triangles in {:?}",
                self.name,
                self.shape.triangles.len(),
                self.last_compute_time
            );
        } else {
            debug!(
                "Trigger '{}' hull: {} triangles in {:?}",
                self.name,
                self.shape.triangles.len(),
                self.last_compute_time
            );
        }
    }

    /// Whether the query points overlap this trigger's hull.
    ///
    /// Candidate axes are every triangle normal followed by the world axes.
    /// An empty query is never contained.
    pub fn contains(&self, query: &[WorldPoint]) -> bool {
        if query.is_empty() {
            return false;
        }
        let axes = self
            .shape
            .triangles
            .iter()
            .map(|t| t.normal)
            .chain(WORLD_AXES);
        sat_overlaps(axes, &self.world_anchors, query)
    }

    /// Whether `point` lies inside the culling sphere
    #[inline]
    pub fn within_check_radius(&self, point: WorldPoint) -> bool {
        let radius = self.shape.check_radius;
        self.position.distance_squared(point) <= radius * radius
    }

    /// Invoke the callback, if any
    pub fn notify(&self, actor: ActorId, kind: TransitionKind) {
        if let Some(callback) = &self.callback {
            callback(&TriggeredCallback {
                actor,
                trigger: self,
                kind,
            });
        }
    }

    pub fn id(&self) -> TriggerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn color(&self) -> DebugColor {
        self.color
    }

    pub fn set_color(&mut self, color: DebugColor) {
        self.color = color;
    }

    pub fn position(&self) -> WorldPoint {
        self.position
    }

    /// Anchors after preprocessing (extruded if the input was flat)
    pub fn anchors(&self) -> &[LocalPoint] {
        &self.shape.anchors
    }

    /// Anchors translated to world frame
    pub fn world_anchors(&self) -> &[WorldPoint] {
        &self.world_anchors
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.shape.triangles
    }

    pub fn triangle_count(&self) -> usize {
        self.shape.triangles.len()
    }

    pub fn check_radius(&self) -> f64 {
        self.shape.check_radius
    }

    /// Duration of the last hull computation
    pub fn last_compute_time(&self) -> Duration {
        self.last_compute_time
    }

    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Replace the callback
    pub fn set_callback<F>(&mut self, f: F)
    where
        F: Fn(&TriggeredCallback<'_>) + Send + Sync + 'static,
    {
        self.callback = Some(Box::new(f));
    }

    /// Remove the callback, returning the old one
    pub fn take_callback(&mut self) -> Option<TriggerCallback> {
        self.callback.take()
    }
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("position", &self.position)
            .field("anchors", &self.shape.anchors.len())
            .field("triangles", &self.shape.triangles.len())
            .field("check_radius", &self.shape.check_radius)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}
