// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use gridsketch::render::{Alignment, Side};
use gridsketch::scene::{
    BoxItem, EndKind, Endpoint, FillItem, LineItem, ResolverKind, Scene, SceneItem,
};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    MediumGrid,
    LargeLabels,
}

#[derive(Debug, Clone, Copy)]
pub struct GridParams {
    pub columns: i32,
    pub rows: i32,
    pub box_width: i32,
    pub box_height: i32,
    pub gap: i32,
    pub label_words: usize,
}

impl GridParams {
    pub const fn new(
        columns: i32,
        rows: i32,
        box_width: i32,
        box_height: i32,
        gap: i32,
        label_words: usize,
    ) -> Self {
        Self {
            columns,
            rows,
            box_width,
            box_height,
            gap,
            label_words,
        }
    }
}

fn params(case: Case) -> GridParams {
    match case {
        Case::Small => GridParams::new(3, 2, 9, 3, 4, 1),
        Case::MediumGrid => GridParams::new(8, 6, 11, 5, 5, 3),
        Case::LargeLabels => GridParams::new(12, 10, 17, 7, 6, 24),
    }
}

fn label(column: i32, row: i32, words: usize) -> String {
    let mut out = format!("n{row}_{column}");
    for idx in 0..words.saturating_sub(1) {
        out.push(' ');
        out.push_str(["alpha", "beta", "gamma", "delta"][idx % 4]);
    }
    out
}

/// A grid of labelled boxes, each wired to its right and lower neighbour.
pub fn grid(params: GridParams) -> Scene {
    let GridParams {
        columns,
        rows,
        box_width,
        box_height,
        gap,
        label_words,
    } = params;
    let pitch_x = box_width + gap;
    let pitch_y = box_height + gap;

    let mut items = vec![SceneItem::Fill(FillItem {
        x: 0,
        y: 0,
        width: columns * pitch_x,
        height: rows * pitch_y,
        fill: '.',
    })];

    for row in 0..rows {
        for column in 0..columns {
            let (x, y) = (column * pitch_x, row * pitch_y);
            items.push(SceneItem::Box(BoxItem {
                x,
                y,
                width: box_width,
                height: box_height,
                style: ["thin", "heavy", "rounded"][((row + column) % 3) as usize].to_owned(),
                label: Some(label(column, row, label_words)),
                align: Alignment::Center,
                transparent: false,
            }));

            if column + 1 < columns {
                items.push(line(
                    (x + box_width, y + box_height / 2, Side::Right),
                    (x + pitch_x - 1, y + box_height / 2 + (column % 2), Side::Left),
                ));
            }
            if row + 1 < rows {
                items.push(line(
                    (x + box_width / 2, y + box_height, Side::Bottom),
                    (x + box_width / 2, y + pitch_y - 1, Side::Top),
                ));
            }
        }
    }

    Scene {
        width: columns * pitch_x,
        height: rows * pitch_y,
        bounds_policy: None,
        items,
    }
}

fn line(from: (i32, i32, Side), to: (i32, i32, Side)) -> SceneItem {
    SceneItem::Line(LineItem {
        from: Endpoint {
            x: from.0,
            y: from.1,
            side: from.2,
            end: EndKind::Plain,
        },
        to: Endpoint {
            x: to.0,
            y: to.1,
            side: to.2,
            end: EndKind::Arrow,
        },
        resolver: ResolverKind::Preserve,
    })
}

pub fn fixture(case: Case) -> Scene {
    grid(params(case))
}

pub fn checksum(text: &str) -> u64 {
    let mut acc = 0u64;
    for line in text.lines() {
        acc = acc.wrapping_mul(131).wrapping_add(line.len() as u64);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(line.bytes().filter(|byte| !byte.is_ascii_whitespace()).count() as u64);
    }
    acc
}
