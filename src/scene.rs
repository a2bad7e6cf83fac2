// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Declarative scenes: a JSON description of a canvas and the items drawn onto it.
//!
//! Items are drawn in file order, so later items resolve conflicts against earlier ones.

use std::fmt;

use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::render::{
    Alignment, BoundsPolicy, BoxStyle, Canvas, CanvasError, ConflictResolver, EndType, Overwrite,
    Preserve, Side,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds_policy: Option<BoundsPolicy>,
    #[serde(default)]
    pub items: Vec<SceneItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneItem {
    Box(BoxItem),
    Line(LineItem),
    Text(TextItem),
    Fill(FillItem),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BoxItem {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// One of the catalog names, see [`BoxStyle::NAMES`].
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub align: Alignment,
    #[serde(default)]
    pub transparent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LineItem {
    pub from: Endpoint,
    pub to: Endpoint,
    #[serde(default)]
    pub resolver: ResolverKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Endpoint {
    pub x: i32,
    pub y: i32,
    pub side: Side,
    #[serde(default)]
    pub end: EndKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EndKind {
    #[default]
    Plain,
    Arrow,
    Plus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResolverKind {
    #[default]
    Overwrite,
    Preserve,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextItem {
    pub x: i32,
    pub y: i32,
    pub text: String,
    /// Skip leading/trailing whitespace so the background shows through.
    #[serde(default)]
    pub trim: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FillItem {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub fill: char,
}

fn default_style() -> String {
    "thin".to_owned()
}

impl Endpoint {
    fn end_type(self) -> EndType {
        match self.end {
            EndKind::Plain => EndType::plain(self.side),
            EndKind::Arrow => EndType::arrow(self.side),
            EndKind::Plus => EndType::plus(self.side),
        }
    }
}

impl ResolverKind {
    fn resolver(self) -> &'static dyn ConflictResolver {
        match self {
            Self::Overwrite => &Overwrite,
            Self::Preserve => &Preserve,
        }
    }
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Draws every item of `scene` and returns the exported grid.
///
/// `fallback_policy` applies when the scene doesn't pick a bounds policy itself.
pub fn render_scene(scene: &Scene, fallback_policy: BoundsPolicy) -> Result<String, SceneError> {
    let policy = scene.bounds_policy.unwrap_or(fallback_policy);
    debug!(
        "rendering {}x{} scene with {} items ({policy:?})",
        scene.width,
        scene.height,
        scene.items.len()
    );

    let mut canvas = Canvas::with_bounds_policy(scene.width, scene.height, policy)?;
    for (index, item) in scene.items.iter().enumerate() {
        draw_item(&mut canvas, item).map_err(|err| err.at_item(index))?;
    }

    Ok(canvas.export())
}

fn draw_item(canvas: &mut Canvas, item: &SceneItem) -> Result<(), SceneError> {
    match item {
        SceneItem::Box(item) => {
            let style = BoxStyle::from_name(&item.style).ok_or_else(|| SceneError::UnknownStyle {
                name: item.style.clone(),
            })?;
            canvas.set_cursor(item.x, item.y);
            canvas.draw_box(
                &style,
                item.width,
                item.height,
                item.label.as_deref(),
                item.align,
                item.transparent,
            )?;
        }
        SceneItem::Line(item) => {
            canvas.draw_line(
                item.from.x,
                item.from.y,
                item.to.x,
                item.to.y,
                item.from.end_type(),
                item.to.end_type(),
                Some(item.resolver.resolver()),
            )?;
        }
        SceneItem::Text(item) => {
            canvas.set_cursor(item.x, item.y);
            canvas.write_str(&item.text, item.trim)?;
        }
        SceneItem::Fill(item) => {
            canvas.set_cursor(item.x, item.y);
            canvas.fill_rect(item.width, item.height, item.fill)?;
        }
    }

    Ok(())
}

/// Pretty-printed JSON schema for scene files.
pub fn scene_json_schema() -> Result<String, SceneError> {
    let schema = schemars::schema_for!(Scene);
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[derive(Debug)]
pub enum SceneError {
    Json(serde_json::Error),
    UnknownStyle { name: String },
    Canvas(CanvasError),
    Item { index: usize, source: Box<SceneError> },
}

impl SceneError {
    fn at_item(self, index: usize) -> Self {
        match self {
            Self::Canvas(_) | Self::UnknownStyle { .. } => Self::Item {
                index,
                source: Box::new(self),
            },
            other => other,
        }
    }
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid scene json: {err}"),
            Self::UnknownStyle { name } => write!(
                f,
                "unknown box style `{name}` (expected one of: {})",
                BoxStyle::NAMES.join(", ")
            ),
            Self::Canvas(err) => write!(f, "canvas error: {err}"),
            Self::Item { index, source } => write!(f, "item #{index}: {source}"),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::UnknownStyle { .. } => None,
            Self::Canvas(err) => Some(err),
            Self::Item { source, .. } => Some(source.as_ref()),
        }
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<CanvasError> for SceneError {
    fn from(value: CanvasError) -> Self {
        Self::Canvas(value)
    }
}
