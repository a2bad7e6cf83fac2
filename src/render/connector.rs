// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Orthogonal connectors between two attachment points.
//!
//! A connector is built in three steps: [`Shape::select`] picks one of ten path shapes from the
//! sides the endpoints attach to, the geometry pass trims every straight run around end glyphs
//! and corners, and [`Connector::draw`] issues the cell writes through a [`ConflictResolver`].

use std::fmt;

use log::trace;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::conflict::{ConflictResolver, Overwrite};
use super::{Canvas, CanvasError};

mod geometry;

use geometry::{run_away_from, run_towards, Endpoints, Geometry};

pub const HORIZONTAL_GLYPH: char = '-';
pub const VERTICAL_GLYPH: char = '|';
pub const CORNER_GLYPH: char = '+';

/// The edge of a box a connector leaves from or enters through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Decoration at one end of a connector.
///
/// A special symbol owns its cell: the line body stops one cell short of it. A plain symbol is
/// drawn flush with the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EndType {
    side: Side,
    symbol: char,
    special: bool,
}

impl EndType {
    pub const fn custom(side: Side, symbol: char, special: bool) -> Self {
        Self {
            side,
            symbol,
            special,
        }
    }

    /// A bare line end: `-` on left/right sides, `|` on top/bottom sides.
    pub const fn plain(side: Side) -> Self {
        let symbol = match side {
            Side::Left | Side::Right => HORIZONTAL_GLYPH,
            Side::Top | Side::Bottom => VERTICAL_GLYPH,
        };
        Self::custom(side, symbol, false)
    }

    /// An arrow head pointing into the box the end is attached to.
    pub const fn arrow(side: Side) -> Self {
        let symbol = match side {
            Side::Left => '>',
            Side::Right => '<',
            Side::Top => 'v',
            Side::Bottom => '^',
        };
        Self::custom(side, symbol, true)
    }

    pub const fn plus(side: Side) -> Self {
        Self::custom(side, CORNER_GLYPH, true)
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn has_special_end_symbol(&self) -> bool {
        self.special
    }
}

/// Path shape of a connector. Exactly one is chosen per connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// One horizontal run.
    Horizontal,
    /// One vertical run.
    Vertical,
    /// Horizontal, then vertical; bends at `(to_x, from_y)`.
    HorizontalVertical,
    /// Vertical, then horizontal; bends at `(from_x, to_y)`.
    VerticalHorizontal,
    /// Horizontal, vertical at the midpoint column, horizontal.
    ZigZagHorizontal,
    /// Vertical, horizontal at the midpoint row, vertical.
    ZigZagVertical,
    /// Left side to left side: a `[`-like detour left of both ends.
    LoopLeft,
    /// Right side to right side: a `]`-like detour right of both ends.
    LoopRight,
    /// Top side to top side: detour above both ends.
    LoopUp,
    /// Bottom side to bottom side: detour below both ends.
    LoopDown,
}

impl Shape {
    /// Picks the shape for a connector leaving via `from_side` and entering via `to_side`.
    ///
    /// Zig-zags whose ends already line up collapse into a straight run.
    pub fn select(from_side: Side, to_side: Side, from: (i32, i32), to: (i32, i32)) -> Self {
        use Side::{Bottom, Left, Right, Top};

        let shape = match (from_side, to_side) {
            (Left, Left) => Self::LoopLeft,
            (Right, Right) => Self::LoopRight,
            (Top, Top) => Self::LoopUp,
            (Bottom, Bottom) => Self::LoopDown,
            (Left, Right) | (Right, Left) => Self::ZigZagHorizontal,
            (Top, Bottom) | (Bottom, Top) => Self::ZigZagVertical,
            (Left | Right, Top | Bottom) => Self::HorizontalVertical,
            (Top | Bottom, Left | Right) => Self::VerticalHorizontal,
        };

        match shape {
            Self::ZigZagHorizontal if from.1 == to.1 => Self::Horizontal,
            Self::ZigZagVertical if from.0 == to.0 => Self::Vertical,
            shape => shape,
        }
    }
}

/// A fully resolved connector: raw endpoints, chosen shape and trimmed run extents.
///
/// Everything is computed once in [`Connector::new`]; the descriptor is immutable afterwards.
#[derive(Clone, Copy)]
pub struct Connector<'r> {
    from: (i32, i32),
    to: (i32, i32),
    from_end: EndType,
    to_end: EndType,
    shape: Shape,
    geometry: Geometry,
    resolver: &'r dyn ConflictResolver,
}

impl Connector<'static> {
    /// Routes a connector that overwrites whatever it crosses.
    pub fn new(from: (i32, i32), from_end: EndType, to: (i32, i32), to_end: EndType) -> Self {
        let shape = Shape::select(from_end.side(), to_end.side(), from, to);
        let geometry = geometry::compute(
            shape,
            &Endpoints {
                from,
                to,
                from_special: from_end.has_special_end_symbol(),
                to_special: to_end.has_special_end_symbol(),
            },
        );

        trace!(
            "connector {from:?}/{:?} -> {to:?}/{:?}: {shape:?} {geometry:?}",
            from_end.side(),
            to_end.side()
        );

        Self {
            from,
            to,
            from_end,
            to_end,
            shape,
            geometry,
            resolver: &Overwrite,
        }
    }
}

impl<'r> Connector<'r> {
    /// Same connector, drawn through `resolver` instead.
    pub fn with_resolver<'a>(self, resolver: &'a dyn ConflictResolver) -> Connector<'a> {
        Connector {
            from: self.from,
            to: self.to,
            from_end: self.from_end,
            to_end: self.to_end,
            shape: self.shape,
            geometry: self.geometry,
            resolver,
        }
    }

    pub fn from(&self) -> (i32, i32) {
        self.from
    }

    pub fn to(&self) -> (i32, i32) {
        self.to
    }

    pub fn from_end(&self) -> EndType {
        self.from_end
    }

    pub fn to_end(&self) -> EndType {
        self.to_end
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn line_from_x(&self) -> i32 {
        self.geometry.line_from_x
    }

    pub fn line_from_y(&self) -> i32 {
        self.geometry.line_from_y
    }

    pub fn line_to_x(&self) -> i32 {
        self.geometry.line_to_x
    }

    pub fn line_to_y(&self) -> i32 {
        self.geometry.line_to_y
    }

    pub fn suppress_horizontal_line(&self) -> bool {
        self.geometry.suppress_horizontal_line
    }

    pub fn suppress_vertical_line(&self) -> bool {
        self.geometry.suppress_vertical_line
    }

    /// Column (zig-zag midpoint, left/right loop) or row (up/down loops) the detour runs along.
    ///
    /// `None` for straight and single-bend shapes.
    pub fn pivot(&self) -> Option<i32> {
        self.geometry.pivot
    }

    /// Cells that receive a corner glyph, in drawing order.
    pub fn corners(&self) -> SmallVec<[(i32, i32); 2]> {
        let (fx, fy) = self.from;
        let (tx, ty) = self.to;
        let g = &self.geometry;
        if g.suppress_horizontal_line && g.suppress_vertical_line {
            return SmallVec::new();
        }

        let mut out = SmallVec::new();
        match (self.shape, g.pivot) {
            (Shape::HorizontalVertical, _) => out.push((tx, fy)),
            (Shape::VerticalHorizontal, _) => out.push((fx, ty)),
            (Shape::ZigZagHorizontal | Shape::LoopLeft | Shape::LoopRight, Some(x)) => {
                out.push((x, fy));
                out.push((x, ty));
            }
            (Shape::ZigZagVertical | Shape::LoopUp | Shape::LoopDown, Some(y)) => {
                out.push((fx, y));
                out.push((tx, y));
            }
            _ => {}
        }
        out.retain(|cell| !self.covers_endpoint(*cell));
        out
    }

    /// Draws end glyphs, runs and corners onto `canvas`. The cursor is restored afterwards.
    ///
    /// Not atomic: under [`super::BoundsPolicy::Error`] the first out-of-bounds cell aborts the
    /// remaining writes.
    pub fn draw(&self, canvas: &mut Canvas) -> Result<(), CanvasError> {
        let cursor = canvas.cursor();
        let corners = self.corners();
        let result = self.draw_parts(canvas, &corners);
        canvas.set_cursor(cursor.0, cursor.1);
        result
    }

    fn draw_parts(&self, canvas: &mut Canvas, corners: &[(i32, i32)]) -> Result<(), CanvasError> {
        let body = Body {
            connector: self,
            corners,
        };
        let (fx, fy) = self.from;
        let (tx, ty) = self.to;
        let g = self.geometry;

        canvas.put(fx, fy, self.from_end.symbol(), self.resolver)?;
        canvas.put(tx, ty, self.to_end.symbol(), self.resolver)?;

        match (self.shape, g.pivot) {
            (Shape::Horizontal, _) => {
                if !g.suppress_horizontal_line {
                    body.hline(canvas, fy, g.line_from_x, g.line_to_x)?;
                }
            }
            (Shape::Vertical, _) => {
                if !g.suppress_vertical_line {
                    body.vline(canvas, fx, g.line_from_y, g.line_to_y)?;
                }
            }
            (Shape::HorizontalVertical, _) => {
                if !g.suppress_horizontal_line {
                    body.hline(canvas, fy, g.line_from_x, g.line_to_x)?;
                }
                if !g.suppress_vertical_line {
                    body.vline(canvas, tx, g.line_from_y, g.line_to_y)?;
                }
            }
            (Shape::VerticalHorizontal, _) => {
                if !g.suppress_vertical_line {
                    body.vline(canvas, fx, g.line_from_y, g.line_to_y)?;
                }
                if !g.suppress_horizontal_line {
                    body.hline(canvas, ty, g.line_from_x, g.line_to_x)?;
                }
            }
            (Shape::ZigZagHorizontal | Shape::LoopLeft | Shape::LoopRight, Some(px)) => {
                if !g.suppress_horizontal_line {
                    if let Some((x0, x1)) = run_towards(g.line_from_x, px, px.cmp(&fx) as i32) {
                        body.hline(canvas, fy, x0, x1)?;
                    }
                    if let Some((x0, x1)) = run_away_from(px, g.line_to_x, tx.cmp(&px) as i32) {
                        body.hline(canvas, ty, x0, x1)?;
                    }
                }
                if !g.suppress_vertical_line {
                    body.vline(canvas, px, g.line_from_y, g.line_to_y)?;
                }
            }
            (Shape::ZigZagVertical | Shape::LoopUp | Shape::LoopDown, Some(py)) => {
                if !g.suppress_vertical_line {
                    if let Some((y0, y1)) = run_towards(g.line_from_y, py, py.cmp(&fy) as i32) {
                        body.vline(canvas, fx, y0, y1)?;
                    }
                    if let Some((y0, y1)) = run_away_from(py, g.line_to_y, ty.cmp(&py) as i32) {
                        body.vline(canvas, tx, y0, y1)?;
                    }
                }
                if !g.suppress_horizontal_line {
                    body.hline(canvas, py, g.line_from_x, g.line_to_x)?;
                }
            }
            // Detour shapes always carry a pivot.
            (_, None) => {}
        }

        for &(x, y) in corners {
            body.put(canvas, x, y, CORNER_GLYPH)?;
        }

        Ok(())
    }

    /// Bends landing on an endpoint defer to its glyph, except when both ends share one cell.
    fn covers_endpoint(&self, cell: (i32, i32)) -> bool {
        (cell == self.from || cell == self.to) && self.from != self.to
    }
}

/// Writes the line body of one connector draw.
///
/// Cells owned by a special end glyph or by a corner are skipped, so neither is ever overdrawn
/// by the runs next to it.
struct Body<'c, 'r> {
    connector: &'c Connector<'r>,
    corners: &'c [(i32, i32)],
}

impl Body<'_, '_> {
    fn hline(&self, canvas: &mut Canvas, y: i32, x0: i32, x1: i32) -> Result<(), CanvasError> {
        let (min_x, max_x) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        if let Some((min_x, max_x)) = canvas.writable_span(min_x, max_x, canvas.width()) {
            for x in min_x..=max_x {
                self.put(canvas, x, y, HORIZONTAL_GLYPH)?;
            }
        }
        Ok(())
    }

    fn vline(&self, canvas: &mut Canvas, x: i32, y0: i32, y1: i32) -> Result<(), CanvasError> {
        let (min_y, max_y) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        if let Some((min_y, max_y)) = canvas.writable_span(min_y, max_y, canvas.height()) {
            for y in min_y..=max_y {
                self.put(canvas, x, y, VERTICAL_GLYPH)?;
            }
        }
        Ok(())
    }

    fn put(&self, canvas: &mut Canvas, x: i32, y: i32, ch: char) -> Result<(), CanvasError> {
        let c = self.connector;
        let cell = (x, y);
        if (cell == c.from && c.from_end.has_special_end_symbol())
            || (cell == c.to && c.to_end.has_special_end_symbol())
        {
            return Ok(());
        }
        if ch != CORNER_GLYPH && self.corners.contains(&cell) {
            return Ok(());
        }
        canvas.put(x, y, ch, c.resolver)
    }
}

impl fmt::Debug for Connector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connector")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("from_end", &self.from_end)
            .field("to_end", &self.to_end)
            .field("shape", &self.shape)
            .field("geometry", &self.geometry)
            .finish_non_exhaustive()
    }
}

impl Canvas {
    /// Connects `(from_x, from_y)` to `(to_x, to_y)`.
    ///
    /// Without a resolver the connector overwrites whatever it crosses.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_line(
        &mut self,
        from_x: i32,
        from_y: i32,
        to_x: i32,
        to_y: i32,
        from_end: EndType,
        to_end: EndType,
        resolver: Option<&dyn ConflictResolver>,
    ) -> Result<(), CanvasError> {
        let connector = Connector::new((from_x, from_y), from_end, (to_x, to_y), to_end);
        match resolver {
            Some(resolver) => connector.with_resolver(resolver).draw(self),
            None => connector.draw(self),
        }
    }
}
