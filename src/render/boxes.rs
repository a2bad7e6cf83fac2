// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boxes: a border drawn from a [`BorderStyle`] plus an optional aligned label.

use log::trace;

use super::conflict::Overwrite;
use super::connector::Side;
use super::text::{layout_label, Alignment};
use super::{saturate, Canvas, CanvasError};

/// Glyphs and visible sides of a box border.
pub trait BorderStyle {
    fn corner_glyph(&self) -> char;
    fn horizontal_glyph(&self) -> char;
    fn vertical_glyph(&self) -> char;
    fn has_side_line(&self, side: Side) -> bool;

    fn is_borderless(&self) -> bool {
        ![Side::Left, Side::Right, Side::Top, Side::Bottom]
            .into_iter()
            .any(|side| self.has_side_line(side))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SideSet(u8);

impl SideSet {
    const NONE: Self = Self(0);
    const LEFT: Self = Self(1 << 0);
    const RIGHT: Self = Self(1 << 1);
    const TOP: Self = Self(1 << 2);
    const BOTTOM: Self = Self(1 << 3);
    const ALL: Self = Self(0b1111);

    const fn of(side: Side) -> Self {
        match side {
            Side::Left => Self::LEFT,
            Side::Right => Self::RIGHT,
            Side::Top => Self::TOP,
            Side::Bottom => Self::BOTTOM,
        }
    }

    fn contains(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }
}

/// The built-in border catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxStyle {
    corner: char,
    horizontal: char,
    vertical: char,
    sides: SideSet,
}

impl BoxStyle {
    pub const THIN: Self = Self::new('+', '-', '|');
    pub const HEAVY: Self = Self::new('#', '=', '#');
    pub const DOTTED: Self = Self::new('.', '.', ':');
    pub const ROUNDED: Self = Self::new('o', '-', '|');
    pub const UNDERLINE: Self = Self {
        corner: ' ',
        horizontal: '-',
        vertical: ' ',
        sides: SideSet::BOTTOM,
    };
    pub const NONE: Self = Self {
        corner: ' ',
        horizontal: ' ',
        vertical: ' ',
        sides: SideSet::NONE,
    };

    /// Catalog names accepted by [`BoxStyle::from_name`].
    pub const NAMES: [&'static str; 6] = ["thin", "heavy", "dotted", "rounded", "underline", "none"];

    const fn new(corner: char, horizontal: char, vertical: char) -> Self {
        Self {
            corner,
            horizontal,
            vertical,
            sides: SideSet::ALL,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let style = [
            Self::THIN,
            Self::HEAVY,
            Self::DOTTED,
            Self::ROUNDED,
            Self::UNDERLINE,
            Self::NONE,
        ];
        Self::NAMES
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(name))
            .map(|idx| style[idx])
    }
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self::THIN
    }
}

impl BorderStyle for BoxStyle {
    fn corner_glyph(&self) -> char {
        self.corner
    }

    fn horizontal_glyph(&self) -> char {
        self.horizontal
    }

    fn vertical_glyph(&self) -> char {
        self.vertical
    }

    fn has_side_line(&self, side: Side) -> bool {
        self.sides.contains(SideSet::of(side))
    }
}

impl Canvas {
    /// Draws a `width`x`height` box whose top-left corner is the cursor.
    ///
    /// All four corners are drawn, then the sides the style marks visible. The label area is the
    /// box inset by one cell (the whole box for a borderless style). An opaque box blanks that
    /// area first; a transparent one leaves it alone and writes label rows without their blank
    /// edges. Borderless styles get no label. The cursor is restored afterwards.
    pub fn draw_box(
        &mut self,
        style: &dyn BorderStyle,
        width: i32,
        height: i32,
        label: Option<&str>,
        alignment: Alignment,
        transparent: bool,
    ) -> Result<(), CanvasError> {
        if width <= 0 || height <= 0 {
            return Err(CanvasError::InvalidDimension { width, height });
        }

        let origin = self.cursor();
        let result = self.draw_box_at(origin, style, width, height, label, alignment, transparent);
        self.set_cursor(origin.0, origin.1);
        result
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_box_at(
        &mut self,
        (x0, y0): (i32, i32),
        style: &dyn BorderStyle,
        width: i32,
        height: i32,
        label: Option<&str>,
        alignment: Alignment,
        transparent: bool,
    ) -> Result<(), CanvasError> {
        let (x1, y1) = (x0.saturating_add(width - 1), y0.saturating_add(height - 1));
        let borderless = style.is_borderless();
        trace!("box {width}x{height} at ({x0},{y0}) borderless={borderless} transparent={transparent}");

        for (x, y) in [(x0, y0), (x1, y0), (x0, y1), (x1, y1)] {
            self.put(x, y, style.corner_glyph(), &Overwrite)?;
        }

        let between_x = self.writable_span(x0.saturating_add(1), x1.saturating_sub(1), self.width);
        for (side, y) in [(Side::Top, y0), (Side::Bottom, y1)] {
            if let Some((lo, hi)) = between_x.filter(|_| style.has_side_line(side)) {
                for x in lo..=hi {
                    self.put(x, y, style.horizontal_glyph(), &Overwrite)?;
                }
            }
        }

        let between_y = self.writable_span(y0.saturating_add(1), y1.saturating_sub(1), self.height);
        for (side, x) in [(Side::Left, x0), (Side::Right, x1)] {
            if let Some((lo, hi)) = between_y.filter(|_| style.has_side_line(side)) {
                for y in lo..=hi {
                    self.put(x, y, style.vertical_glyph(), &Overwrite)?;
                }
            }
        }

        // The corners frame every bordered box, so its label area is the ring's inside.
        let inset = i32::from(!borderless);
        let (ix0, iy0) = (x0.saturating_add(inset), y0.saturating_add(inset));
        let inner_width = saturate(i64::from(x1) - i64::from(inset) - i64::from(ix0) + 1);
        let inner_height = saturate(i64::from(y1) - i64::from(inset) - i64::from(iy0) + 1);
        if inner_width <= 0 || inner_height <= 0 {
            return Ok(());
        }

        if !transparent {
            self.set_cursor(ix0, iy0);
            self.fill_rect(inner_width, inner_height, ' ')?;
        }

        if let Some(label) = label.filter(|_| !borderless) {
            let rows = layout_label(label, inner_width as usize, inner_height as usize, alignment);
            for (row, y) in rows.iter().zip(iy0..=y1 - inset) {
                self.set_cursor(ix0, y);
                self.write_str(row, transparent)?;
            }
        }

        Ok(())
    }
}
