// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Character-grid rendering.
//!
//! Everything draws onto a [`Canvas`]: a fixed-size character buffer with a cursor. Primitive
//! writes (`write_char`, `write_str`) go straight to the buffer; composite operations (boxes,
//! connectors) consult a [`ConflictResolver`] for every cell they touch.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod boxes;
pub mod conflict;
pub mod connector;
#[cfg(test)]
mod test_utils;
pub mod text;

pub use boxes::{BorderStyle, BoxStyle};
pub use conflict::{ConflictResolver, Overwrite, Preserve};
pub use connector::{Connector, EndType, Shape, Side};
pub use text::{layout_label, Alignment, HorizontalAlign, VerticalAlign};

/// What to do when a write targets a cell outside the grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum BoundsPolicy {
    /// Out-of-bounds writes are dropped silently.
    Ignore,
    /// Out-of-bounds writes fail with [`CanvasError::OutOfBounds`].
    #[default]
    Error,
}

/// A fixed-size character grid with a write cursor.
///
/// The cursor is signed and may sit outside the grid between writes; bounds are only checked
/// when a write is attempted. Dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: i32,
    height: i32,
    cells: Vec<char>,
    cursor_x: i32,
    cursor_y: i32,
    policy: BoundsPolicy,
}

impl Canvas {
    /// Creates a blank canvas that rejects out-of-bounds writes.
    pub fn new(width: i32, height: i32) -> Result<Self, CanvasError> {
        Self::with_bounds_policy(width, height, BoundsPolicy::Error)
    }

    /// Creates a blank canvas with the given bounds policy.
    pub fn with_bounds_policy(
        width: i32,
        height: i32,
        policy: BoundsPolicy,
    ) -> Result<Self, CanvasError> {
        if width <= 0 || height <= 0 {
            return Err(CanvasError::InvalidDimension { width, height });
        }

        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(CanvasError::InvalidDimension { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![' '; len],
            cursor_x: 0,
            cursor_y: 0,
            policy,
        })
    }

    /// Parses text produced by [`Canvas::export`] back into a canvas.
    ///
    /// Every row must have the same (non-zero) number of characters.
    pub fn from_text(text: &str, policy: BoundsPolicy) -> Result<Self, CanvasError> {
        let rows = text.split('\n').collect::<Vec<_>>();
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);
        let width = i32::try_from(width).map_err(|_| CanvasError::InvalidDimension {
            width: i32::MAX,
            height: rows.len() as i32,
        })?;
        let height = i32::try_from(rows.len()).unwrap_or(i32::MAX);

        let mut canvas = Self::with_bounds_policy(width, height, policy)?;
        for (y, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != width as usize {
                return Err(CanvasError::RaggedRows {
                    row: y,
                    expected: width as usize,
                    actual: len,
                });
            }

            let start = y * width as usize;
            for (offset, ch) in row.chars().enumerate() {
                canvas.cells[start + offset] = ch;
            }
        }

        Ok(canvas)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn bounds_policy(&self) -> BoundsPolicy {
        self.policy
    }

    pub fn cursor(&self) -> (i32, i32) {
        (self.cursor_x, self.cursor_y)
    }

    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    pub fn set_cursor_x(&mut self, x: i32) {
        self.cursor_x = x;
    }

    pub fn set_cursor_y(&mut self, y: i32) {
        self.cursor_y = y;
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    pub fn is_cursor_in_bounds(&self) -> bool {
        self.in_bounds(self.cursor_x, self.cursor_y)
    }

    /// Returns the character at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.index_of(x, y).map(|idx| self.cells[idx])
    }

    /// Resets every cell to a space and the cursor to the origin.
    pub fn clear(&mut self) {
        self.cells.fill(' ');
        self.set_cursor(0, 0);
    }

    /// Reads the cell under the cursor.
    ///
    /// With `advance`, the cursor moves one cell right whether or not the read hit the grid.
    pub fn read(&mut self, advance: bool) -> Option<char> {
        let ch = self.get(self.cursor_x, self.cursor_y);
        if advance {
            self.cursor_x = self.cursor_x.saturating_add(1);
        }
        ch
    }

    /// Writes `ch` under the cursor and advances the cursor one cell right.
    ///
    /// Under [`BoundsPolicy::Ignore`] an out-of-bounds write leaves the grid untouched but the
    /// cursor still advances. Under [`BoundsPolicy::Error`] it fails and nothing moves.
    pub fn write_char(&mut self, ch: char) -> Result<(), CanvasError> {
        match self.index_of(self.cursor_x, self.cursor_y) {
            Some(idx) => self.cells[idx] = ch,
            None if self.policy == BoundsPolicy::Error => return Err(self.out_of_bounds()),
            None => {}
        }

        self.cursor_x = self.cursor_x.saturating_add(1);
        Ok(())
    }

    /// Writes `text` left-to-right from the cursor.
    ///
    /// With `trim_whitespace_edges`, leading whitespace only moves the cursor and trailing
    /// whitespace is dropped, so whatever is underneath stays visible.
    ///
    /// Under [`BoundsPolicy::Error`] the whole run is validated first: either every character
    /// is written or none is. Under [`BoundsPolicy::Ignore`] characters falling outside the
    /// grid are skipped one by one.
    pub fn write_str(&mut self, text: &str, trim_whitespace_edges: bool) -> Result<(), CanvasError> {
        let (skip, body) = if trim_whitespace_edges {
            let trimmed_start = text.trim_start();
            let skip = text::text_len(&text[..text.len() - trimmed_start.len()]);
            (skip, trimmed_start.trim_end())
        } else {
            (0, text)
        };
        let skip = i64::try_from(skip).unwrap_or(i64::MAX);

        let len = i64::try_from(text::text_len(body)).unwrap_or(i64::MAX);
        if len > 0 && self.policy == BoundsPolicy::Error {
            let start = i64::from(self.cursor_x).saturating_add(skip);
            let end = start.saturating_add(len);
            if start < 0 || end > i64::from(self.width) || !(0..self.height).contains(&self.cursor_y)
            {
                let x = if start < 0 { start } else { end - 1 };
                return Err(CanvasError::OutOfBounds {
                    x: saturate(x),
                    y: self.cursor_y,
                    width: self.width,
                    height: self.height,
                });
            }
        }

        self.cursor_x = saturate(i64::from(self.cursor_x).saturating_add(skip));
        for ch in body.chars() {
            self.write_char(ch)?;
        }

        Ok(())
    }

    /// Fills a `width`x`height` rectangle anchored at the cursor with `ch`.
    ///
    /// The cursor is restored afterwards. Under [`BoundsPolicy::Error`] the fill stops at the
    /// first cell outside the grid.
    pub fn fill_rect(&mut self, width: i32, height: i32, ch: char) -> Result<(), CanvasError> {
        let (x0, y0) = self.cursor();
        if width <= 0 || height <= 0 {
            return Ok(());
        }

        let result = (|| -> Result<(), CanvasError> {
            let x1 = x0.saturating_add(width - 1);
            let y1 = y0.saturating_add(height - 1);
            let (Some((xa, xb)), Some((ya, yb))) =
                (self.writable_span(x0, x1, self.width), self.writable_span(y0, y1, self.height))
            else {
                return Ok(());
            };
            for y in ya..=yb {
                self.set_cursor(xa, y);
                for _ in xa..=xb {
                    self.write_char(ch)?;
                }
            }
            Ok(())
        })();
        self.set_cursor(x0, y0);
        result
    }

    /// Serializes the grid: rows top-to-bottom joined by `\n`, no trailing newline.
    pub fn export(&self) -> String {
        self.to_string()
    }

    /// Writes `proposed` at `(x, y)` after resolving it against the current cell.
    ///
    /// Cells outside the grid have nothing to conflict with; the write is attempted anyway
    /// and the bounds policy decides.
    pub(crate) fn put(
        &mut self,
        x: i32,
        y: i32,
        proposed: char,
        resolver: &dyn ConflictResolver,
    ) -> Result<(), CanvasError> {
        self.set_cursor(x, y);
        let ch = match self.read(false) {
            Some(existing) => resolver.resolve(existing, proposed),
            None => proposed,
        };
        self.write_char(ch)
    }

    /// The part of `lo..=hi` along an axis of length `len` that writes need to visit.
    ///
    /// Under [`BoundsPolicy::Ignore`] cells off the grid are no-ops, so the span is clipped to
    /// the grid; under [`BoundsPolicy::Error`] it is kept whole so the first bad cell fails.
    pub(crate) fn writable_span(&self, lo: i32, hi: i32, len: i32) -> Option<(i32, i32)> {
        let (lo, hi) = match self.policy {
            BoundsPolicy::Error => (lo, hi),
            BoundsPolicy::Ignore => (lo.max(0), hi.min(len - 1)),
        };
        (lo <= hi).then_some((lo, hi))
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }

        Some((y as usize * self.width as usize) + x as usize)
    }

    fn out_of_bounds(&self) -> CanvasError {
        CanvasError::OutOfBounds {
            x: self.cursor_x,
            y: self.cursor_y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Narrows a widened coordinate back to `i32`, pinning it to the nearest representable value.
pub(crate) fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for (y, row) in self.cells.chunks(self.width as usize).enumerate() {
            if y > 0 {
                f.write_char('\n')?;
            }
            for &ch in row {
                f.write_char(ch)?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    InvalidDimension {
        width: i32,
        height: i32,
    },
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "invalid canvas dimension: {width}x{height}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(f, "out of bounds: ({x},{y}) for {width}x{height} canvas")
            }
            Self::RaggedRows {
                row,
                expected,
                actual,
            } => {
                write!(f, "row {row} has {actual} cells, expected {expected}")
            }
        }
    }
}

impl std::error::Error for CanvasError {}
