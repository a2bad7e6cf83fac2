// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Per-cell conflict resolution for composite draws.
//!
//! Connector runs, end glyphs, corners and box borders never write blindly: each cell asks a
//! resolver whether the character already there survives. Direct `write_char`/`write_str`
//! calls bypass this entirely.

/// Decides which character ends up in a cell that is about to be drawn over.
///
/// Any `Fn(char, char) -> char` closure is a resolver, so callers can plug in their own rules.
pub trait ConflictResolver {
    fn resolve(&self, existing: char, proposed: char) -> char;
}

impl<F> ConflictResolver for F
where
    F: Fn(char, char) -> char,
{
    fn resolve(&self, existing: char, proposed: char) -> char {
        self(existing, proposed)
    }
}

/// Last writer wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overwrite;

impl ConflictResolver for Overwrite {
    fn resolve(&self, _existing: char, proposed: char) -> char {
        proposed
    }
}

/// Existing content wins unless the cell is blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preserve;

impl ConflictResolver for Preserve {
    fn resolve(&self, existing: char, proposed: char) -> char {
        if existing.is_whitespace() {
            proposed
        } else {
            existing
        }
    }
}
