// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Segment extents for each connector shape.
//!
//! Every straight run is trimmed at both ends by an allowance: one cell for an endpoint that
//! carries a special glyph, nothing for a plain endpoint. Runs ending on the bend of a
//! single-bend shape take an endpoint's allowance only when both points line up on that run.
//! The perpendicular leg of a zig-zag or loop is trimmed by one cell at each corner. A run whose
//! remaining length is negative is suppressed.
//!
//! Arithmetic is widened to `i64` and narrowed with saturation, so coordinates anywhere in the
//! `i32` range are accepted.

use crate::render::saturate;
use super::Shape;

/// Column gap between the outermost endpoint and the vertical run of a left/right loop.
const LOOP_COLUMN_OFFSET: i32 = 2;
/// Row gap between the outermost endpoint and the horizontal run of an up/down loop.
const LOOP_ROW_OFFSET: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Geometry {
    pub(super) line_from_x: i32,
    pub(super) line_from_y: i32,
    pub(super) line_to_x: i32,
    pub(super) line_to_y: i32,
    pub(super) suppress_horizontal_line: bool,
    pub(super) suppress_vertical_line: bool,
    pub(super) pivot: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Endpoints {
    pub(super) from: (i32, i32),
    pub(super) to: (i32, i32),
    pub(super) from_special: bool,
    pub(super) to_special: bool,
}

impl Endpoints {
    fn coincident(&self) -> bool {
        self.from == self.to
    }

    fn from_allowance(&self) -> i32 {
        allowance(self.from_special)
    }

    fn to_allowance(&self) -> i32 {
        allowance(self.to_special)
    }
}

/// A straight run along one axis, as inclusive start/end coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    from: i32,
    to: i32,
    suppressed: bool,
}

impl Run {
    /// Trims `start_allowance` cells off the `start` end and `end_allowance` off the `end` end.
    ///
    /// Coincident endpoints keep the run alive on the shared cell so corners still render.
    fn between(
        start: i32,
        end: i32,
        start_allowance: i32,
        end_allowance: i32,
        coincident: bool,
    ) -> Self {
        let (start_wide, end_wide) = (i64::from(start), i64::from(end));
        let dir = (end_wide - start_wide).signum();
        let length = (end_wide - start_wide).abs()
            - i64::from(start_allowance)
            - i64::from(end_allowance);

        if length < 0 && coincident {
            return Self {
                from: start,
                to: start,
                suppressed: false,
            };
        }

        Self {
            from: saturate(start_wide + dir * i64::from(start_allowance)),
            to: saturate(end_wide - dir * i64::from(end_allowance)),
            suppressed: length < 0,
        }
    }

    /// The unused axis of a straight connector.
    fn idle(from: i32, to: i32) -> Self {
        Self {
            from,
            to,
            suppressed: true,
        }
    }
}

fn allowance(special: bool) -> i32 {
    i32::from(special)
}

/// Midpoint of a zig-zag, rounded towards `to` when `from < to` and towards `from` otherwise.
pub(super) fn midpoint(from: i32, to: i32) -> i32 {
    let from = i64::from(from);
    saturate(from + (i64::from(to) - from + 1).div_euclid(2))
}

/// Inclusive cells walking from `start` towards `stop`, excluding `stop` itself.
pub(super) fn run_towards(start: i32, stop: i32, dir: i32) -> Option<(i32, i32)> {
    let (start, stop, dir) = (i64::from(start), i64::from(stop), i64::from(dir));
    if dir == 0 || (stop - start) * dir <= 0 {
        return None;
    }
    Some((saturate(start), saturate(stop - dir)))
}

/// Inclusive cells walking away from `start` (excluded) up to `end`.
pub(super) fn run_away_from(start: i32, end: i32, dir: i32) -> Option<(i32, i32)> {
    if dir == 0 {
        return None;
    }
    let first = i64::from(start) + i64::from(dir);
    if (i64::from(end) - first) * i64::from(dir) < 0 {
        return None;
    }
    Some((saturate(first), end))
}

pub(super) fn compute(shape: Shape, ends: &Endpoints) -> Geometry {
    let (fx, fy) = ends.from;
    let (tx, ty) = ends.to;
    let coincident = ends.coincident();
    let (sf, st) = (ends.from_allowance(), ends.to_allowance());

    match shape {
        Shape::Horizontal => {
            let h = Run::between(fx, tx, sf, st, coincident);
            assemble(h, Run::idle(fy, ty), None)
        }
        Shape::Vertical => {
            let v = Run::between(fy, ty, sf, st, coincident);
            assemble(Run::idle(fx, tx), v, None)
        }
        Shape::HorizontalVertical => {
            // The bend sits at (tx, fy). The renderer leaves it to the corner glyph; an end
            // glyph only trims the far end of a run when both points lie on that run.
            let h_end = if fy == ty { st } else { 0 };
            let v_start = if fx == tx { sf } else { 0 };
            let h = Run::between(fx, tx, sf, h_end, coincident);
            let v = Run::between(fy, ty, v_start, st, coincident);
            assemble(h, v, None)
        }
        Shape::VerticalHorizontal => {
            let v_end = if fx == tx { st } else { 0 };
            let h_start = if fy == ty { sf } else { 0 };
            let v = Run::between(fy, ty, sf, v_end, coincident);
            let h = Run::between(fx, tx, h_start, st, coincident);
            assemble(h, v, None)
        }
        Shape::ZigZagHorizontal => {
            let mx = midpoint(fx, tx);
            let h = Run::between(fx, tx, sf, st, coincident);
            let v = Run::between(fy, ty, 1, 1, false);
            assemble(h, v, Some(mx))
        }
        Shape::ZigZagVertical => {
            let my = midpoint(fy, ty);
            let v = Run::between(fy, ty, sf, st, coincident);
            let h = Run::between(fx, tx, 1, 1, false);
            assemble(h, v, Some(my))
        }
        Shape::LoopLeft | Shape::LoopRight => {
            let (ex, shift) = if shape == Shape::LoopLeft {
                (fx.min(tx).saturating_sub(LOOP_COLUMN_OFFSET), -1)
            } else {
                (fx.max(tx).saturating_add(LOOP_COLUMN_OFFSET), 1)
            };
            let h = loop_legs(fx, tx, ex, shift, sf, st);
            let v = Run::between(fy, ty, 1, 1, false);
            assemble(h, v, Some(ex))
        }
        Shape::LoopUp | Shape::LoopDown => {
            let (ey, shift) = if shape == Shape::LoopUp {
                (fy.min(ty).saturating_sub(LOOP_ROW_OFFSET), -1)
            } else {
                (fy.max(ty).saturating_add(LOOP_ROW_OFFSET), 1)
            };
            let v = loop_legs(fy, ty, ey, shift, sf, st);
            let h = Run::between(fx, tx, 1, 1, false);
            assemble(h, v, Some(ey))
        }
    }
}

/// Both legs of a loop leave their endpoint in the same direction (`shift`) towards `pivot`.
fn loop_legs(from: i32, to: i32, pivot: i32, shift: i32, sf: i32, st: i32) -> Run {
    let line_from = from.saturating_add(shift * sf);
    let line_to = to.saturating_add(shift * st);
    let first = run_towards(line_from, pivot, pivot.cmp(&from) as i32);
    let second = run_away_from(pivot, line_to, to.cmp(&pivot) as i32);

    Run {
        from: line_from,
        to: line_to,
        suppressed: first.is_none() && second.is_none(),
    }
}

fn assemble(h: Run, v: Run, pivot: Option<i32>) -> Geometry {
    Geometry {
        line_from_x: h.from,
        line_from_y: v.from,
        line_to_x: h.to,
        line_to_y: v.to,
        suppress_horizontal_line: h.suppressed,
        suppress_vertical_line: v.suppressed,
        pivot,
    }
}

#[cfg(test)]
mod tests {
    use super::{midpoint, run_away_from, run_towards, Run};

    #[test]
    fn midpoint_rounds_towards_far_end_when_ascending() {
        assert_eq!(midpoint(0, 5), 3);
        assert_eq!(midpoint(0, 4), 2);
        assert_eq!(midpoint(2, 3), 3);
    }

    #[test]
    fn midpoint_rounds_towards_start_when_descending() {
        assert_eq!(midpoint(5, 0), 3);
        assert_eq!(midpoint(4, 0), 2);
        assert_eq!(midpoint(3, 2), 3);
        assert_eq!(midpoint(7, 7), 7);
    }

    #[test]
    fn run_trims_special_ends_towards_each_other() {
        assert_eq!(
            Run::between(9, 2, 1, 1, false),
            Run {
                from: 8,
                to: 3,
                suppressed: false
            }
        );
        assert!(Run::between(3, 4, 1, 1, false).suppressed);
        assert!(!Run::between(3, 5, 1, 1, false).suppressed);
    }

    #[test]
    fn run_survives_on_coincident_points() {
        assert_eq!(
            Run::between(4, 4, 1, 1, true),
            Run {
                from: 4,
                to: 4,
                suppressed: false
            }
        );
    }

    #[test]
    fn legs_stop_short_of_the_pivot() {
        assert_eq!(run_towards(0, 3, 1), Some((0, 2)));
        assert_eq!(run_towards(3, 3, 1), None);
        assert_eq!(run_towards(5, 2, -1), Some((5, 3)));
        assert_eq!(run_towards(5, 5, 0), None);
        assert_eq!(run_away_from(3, 6, 1), Some((4, 6)));
        assert_eq!(run_away_from(3, 3, 1), None);
        assert_eq!(run_away_from(3, 1, -1), Some((2, 1)));
    }
}
