// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::Canvas;

/// Export with trailing blanks stripped from every row and empty trailing rows dropped.
pub(super) fn trimmed(canvas: &Canvas) -> String {
    let exported = canvas.export();
    let mut lines = exported
        .split('\n')
        .map(|line| line.trim_end_matches(' '))
        .collect::<Vec<_>>();

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

pub(super) fn count_glyph(canvas: &Canvas, glyph: char) -> usize {
    canvas.export().chars().filter(|&ch| ch == glyph).count()
}
