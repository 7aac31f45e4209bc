//! Debug geometry for an external renderer

use crate::trigger::{DebugColor, Trigger};
use polyzone_math::WorldPoint;

/// Upper bound on the number of segments a line is split into
pub const MAX_LINE_SAMPLES: usize = 32;

/// Line samples per world unit
const SAMPLES_PER_UNIT: f64 = 4.0;

/// One wireframe edge in world frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugLine {
    pub from: WorldPoint,
    pub to: WorldPoint,
    pub color: DebugColor,
}

impl DebugLine {
    /// Evenly spaced points along the line, see [`sample_line`]
    pub fn samples(&self) -> Vec<WorldPoint> {
        sample_line(self.from, self.to)
    }
}

/// Points along `from..=to` for particle-style rendering.
///
/// The line is split into `min(32, 4 * round(length))` segments and both
/// endpoints are included. Lines shorter than half a unit yield only `from`.
pub fn sample_line(from: WorldPoint, to: WorldPoint) -> Vec<WorldPoint> {
    let delta = to - from;
    let segments = ((delta.length().round() * SAMPLES_PER_UNIT) as usize).min(MAX_LINE_SAMPLES);
    if segments == 0 {
        return vec![from];
    }

    (0..=segments)
        .map(|i| from.offset(delta * (i as f64 / segments as f64)))
        .collect()
}

impl Trigger {
    /// Three edges per triangle, translated to world frame
    pub fn wireframe(&self) -> Vec<DebugLine> {
        let color = self.color();
        let origin = self.position();

        let mut lines = Vec::with_capacity(self.triangle_count() * 3);
        for triangle in self.triangles() {
            let [a, b, c] = triangle.to_world(origin);
            for (from, to) in [(a, b), (b, c), (c, a)] {
                lines.push(DebugLine { from, to, color });
            }
        }
        lines
    }
}
