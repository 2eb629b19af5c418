//! Pie-wedge path construction.
//!
//! Angles follow screen coordinates (y grows downward), so increasing
//! angles sweep clockwise. The arc is approximated with cubic Bezier
//! segments of at most a quarter turn, always split on quarter-turn
//! boundaries from the start angle: a shorter sweep is an exact prefix of
//! a longer one.

use crate::{ClockError, CoreResult};

use std::{
    f32::consts::{FRAC_PI_2, TAU},
    panic::Location,
};

use error_location::ErrorLocation;
use tiny_skia::{Path, PathBuilder};

/// 12 o'clock.
pub(crate) const START_ANGLE: f32 = -FRAC_PI_2;

/// Sweeps below this many radians are treated as empty.
const SWEEP_EPSILON: f32 = 1e-4;

/// Build the closed sector from [`START_ANGLE`] through `sweep` radians.
///
/// Returns `Ok(None)` for an empty sweep and a full disk once `sweep`
/// reaches a full turn.
#[track_caller]
pub(crate) fn wedge_path(cx: f32, cy: f32, radius: f32, sweep: f32) -> CoreResult<Option<Path>> {
    if sweep <= SWEEP_EPSILON {
        return Ok(None);
    }

    if sweep >= TAU - SWEEP_EPSILON {
        return PathBuilder::from_circle(cx, cy, radius)
            .map(Some)
            .ok_or_else(|| ClockError::PathConstruction {
                reason: format!("Invalid full-disk radius: {}", radius),
                location: ErrorLocation::from(Location::caller()),
            });
    }

    let end = START_ANGLE + sweep;
    let (start_x, start_y) = point_on_circle(cx, cy, radius, START_ANGLE);

    let mut pb = PathBuilder::new();
    pb.move_to(cx, cy);
    pb.line_to(start_x, start_y);

    let mut a0 = START_ANGLE;
    while a0 < end - SWEEP_EPSILON {
        let a1 = (a0 + FRAC_PI_2).min(end);
        append_arc_segment(&mut pb, cx, cy, radius, a0, a1);
        a0 = a1;
    }

    pb.close();

    pb.finish()
        .map(Some)
        .ok_or_else(|| ClockError::PathConstruction {
            reason: format!("Degenerate wedge: radius {} sweep {}", radius, sweep),
            location: ErrorLocation::from(Location::caller()),
        })
}

fn point_on_circle(cx: f32, cy: f32, radius: f32, angle: f32) -> (f32, f32) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// Cubic approximation of the arc from `a0` to `a1` (at most a quarter turn).
fn append_arc_segment(pb: &mut PathBuilder, cx: f32, cy: f32, radius: f32, a0: f32, a1: f32) {
    let k = 4.0 / 3.0 * ((a1 - a0) / 4.0).tan();

    let (x0, y0) = point_on_circle(cx, cy, radius, a0);
    let (x3, y3) = point_on_circle(cx, cy, radius, a1);

    let (x1, y1) = (x0 - k * radius * a0.sin(), y0 + k * radius * a0.cos());
    let (x2, y2) = (x3 + k * radius * a1.sin(), y3 - k * radius * a1.cos());

    pb.cubic_to(x1, y1, x2, y2, x3, y3);
}
