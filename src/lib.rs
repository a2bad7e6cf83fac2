// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Gridsketch: plain-text diagrams on a fixed character grid.
//!
//! [`render::Canvas`] is the drawing surface; boxes and routed connectors are layered on top of
//! it. [`scene`] reads whole diagrams from JSON, and [`config`] holds the environment knobs the
//! `gridsketch` binary honours.

pub mod config;
pub mod render;
pub mod scene;
