// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Label layout: fitting free text into a fixed block of cells.

use memchr::memchr_iter;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

/// Where a label sits inside its box.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    #[default]
    Center,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Alignment {
    pub fn horizontal(self) -> HorizontalAlign {
        match self {
            Self::TopLeft | Self::MiddleLeft | Self::BottomLeft => HorizontalAlign::Left,
            Self::TopCenter | Self::Center | Self::BottomCenter => HorizontalAlign::Center,
            Self::TopRight | Self::MiddleRight | Self::BottomRight => HorizontalAlign::Right,
        }
    }

    pub fn vertical(self) -> VerticalAlign {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => VerticalAlign::Top,
            Self::MiddleLeft | Self::Center | Self::MiddleRight => VerticalAlign::Middle,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => VerticalAlign::Bottom,
        }
    }
}

/// Lays `text` out as exactly `height` rows of exactly `width` characters.
///
/// Newlines force a break, words wrap greedily and words wider than the block are split.
/// Rows that don't fit are dropped and the last visible row ends in `…`.
pub fn layout_label(text: &str, width: usize, height: usize, alignment: Alignment) -> Vec<String> {
    if width == 0 {
        return vec![String::new(); height];
    }

    let mut lines = wrap(text, width);
    if lines.len() > height {
        lines.truncate(height);
        if let Some(last) = lines.last_mut() {
            *last = truncate_with_ellipsis(&format!("{last}…"), width);
        }
    }

    let top = match alignment.vertical() {
        VerticalAlign::Top => 0,
        VerticalAlign::Middle => (height - lines.len()) / 2,
        VerticalAlign::Bottom => height - lines.len(),
    };

    let blank = " ".repeat(width);
    let mut out = vec![blank; height];
    for (row, line) in out.iter_mut().skip(top).zip(&lines) {
        *row = pad(line, width, alignment.horizontal());
    }
    out
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0;
    for end in memchr_iter(b'\n', text.as_bytes()).chain(std::iter::once(text.len())) {
        wrap_paragraph(text[start..end].trim_end_matches('\r'), width, &mut lines);
        start = end + 1;
    }
    lines
}

fn wrap_paragraph(paragraph: &str, width: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_len = 0;

    for word in paragraph.split_whitespace() {
        let mut word = word;
        let mut word_len = text_len(word);

        if current_len > 0 && current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
            continue;
        }

        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        while word_len > width {
            let split = word.char_indices().nth(width).map_or(word.len(), |(idx, _)| idx);
            lines.push(word[..split].to_owned());
            word = &word[split..];
            word_len -= width;
        }

        current.push_str(word);
        current_len = word_len;
    }

    if current_len > 0 || lines.is_empty() || paragraph.trim().is_empty() {
        lines.push(current);
    }
}

fn pad(line: &str, width: usize, align: HorizontalAlign) -> String {
    let len = text_len(line);
    let slack = width.saturating_sub(len);
    let left = match align {
        HorizontalAlign::Left => 0,
        HorizontalAlign::Center => slack / 2,
        HorizontalAlign::Right => slack,
    };

    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat(' ').take(left));
    out.push_str(line);
    out.extend(std::iter::repeat(' ').take(slack - left));
    out
}

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    let len = text_len(text);
    if len <= max_len {
        return text.to_owned();
    }

    if max_len == 1 {
        return "…".to_owned();
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{layout_label, text_len, truncate_with_ellipsis, Alignment};

    #[test]
    fn truncate_with_ellipsis_handles_small_widths() {
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
        assert_eq!(truncate_with_ellipsis("hello", 1), "…");
        assert_eq!(truncate_with_ellipsis("h", 1), "h");
        assert_eq!(truncate_with_ellipsis("hello", 2), "h…");
    }

    #[test]
    fn text_len_counts_chars_not_bytes() {
        assert_eq!(text_len("αβγ"), 3);
        assert_eq!(truncate_with_ellipsis("αβγ", 2), "α…");
    }

    #[rstest]
    #[case(Alignment::TopLeft, ["ab   ", "     ", "     "])]
    #[case(Alignment::TopCenter, [" ab  ", "     ", "     "])]
    #[case(Alignment::TopRight, ["   ab", "     ", "     "])]
    #[case(Alignment::MiddleLeft, ["     ", "ab   ", "     "])]
    #[case(Alignment::Center, ["     ", " ab  ", "     "])]
    #[case(Alignment::MiddleRight, ["     ", "   ab", "     "])]
    #[case(Alignment::BottomLeft, ["     ", "     ", "ab   "])]
    #[case(Alignment::BottomCenter, ["     ", "     ", " ab  "])]
    #[case(Alignment::BottomRight, ["     ", "     ", "   ab"])]
    fn places_single_line_per_alignment(#[case] alignment: Alignment, #[case] expected: [&str; 3]) {
        assert_eq!(layout_label("ab", 5, 3, alignment), expected);
    }

    #[test]
    fn wraps_words_greedily() {
        assert_eq!(
            layout_label("one two three", 7, 3, Alignment::TopLeft),
            ["one two", "three  ", "       "]
        );
    }

    #[test]
    fn honors_hard_line_breaks() {
        assert_eq!(
            layout_label("a\n\nb", 3, 3, Alignment::TopLeft),
            ["a  ", "   ", "b  "]
        );
    }

    #[test]
    fn splits_words_wider_than_the_block() {
        assert_eq!(
            layout_label("abcdefgh", 3, 3, Alignment::TopLeft),
            ["abc", "def", "gh "]
        );
    }

    #[test]
    fn marks_overflow_with_ellipsis() {
        assert_eq!(
            layout_label("alpha beta gamma", 5, 2, Alignment::TopLeft),
            ["alpha", "beta…"]
        );
        assert_eq!(
            layout_label("alpha gamma delta", 5, 2, Alignment::TopLeft),
            ["alpha", "gamm…"]
        );
    }

    #[test]
    fn output_has_exact_dimensions() {
        for (width, height) in [(1, 1), (4, 2), (9, 5)] {
            let rows = layout_label("the quick brown fox jumps", width, height, Alignment::Center);
            assert_eq!(rows.len(), height);
            assert!(rows.iter().all(|row| text_len(row) == width));
        }
        assert_eq!(layout_label("x", 0, 2, Alignment::Center), ["", ""]);
    }
}
