//! Recorded gesture streams.
//!
//! An edit script is the JSON form of one session's ordered input events,
//! plus the annotation color the strokes commit in. Replaying it through an
//! [`inkover_core::EditSession`] reproduces the edit exactly.

use inkover_core::color::Color;
use inkover_core::stroke::Point;
use inkover_core::util::FiniteF32Error;
use inkover_core::InputEvent;
use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA in `[0, 1]`, the on-disk color form.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScriptColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl ScriptColor {
    pub fn to_color(self) -> Result<Color, FiniteF32Error> {
        Color::new(self.r, self.g, self.b, self.a)
    }
}

impl Default for ScriptColor {
    /// The phone app pinned every stroke to red.
    fn default() -> Self {
        Self {
            r: 1.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }
    }
}

/// One recorded gesture event.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    DragStart { x: f32, y: f32 },
    DragMove { x: f32, y: f32 },
    DragEnd,
    Pinch {
        #[serde(default = "unit_zoom")]
        zoom: f32,
        #[serde(default)]
        degrees: f32,
    },
}

fn unit_zoom() -> f32 {
    1.0
}

impl From<ScriptEvent> for InputEvent {
    fn from(value: ScriptEvent) -> Self {
        match value {
            ScriptEvent::DragStart { x, y } => Self::DragStart {
                pos: Point::new(x, y),
            },
            ScriptEvent::DragMove { x, y } => Self::DragMove {
                pos: Point::new(x, y),
            },
            ScriptEvent::DragEnd => Self::DragEnd,
            ScriptEvent::Pinch { zoom, degrees } => Self::Pinch { zoom, degrees },
        }
    }
}

/// A whole recorded session, ready to replay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditScript {
    #[serde(default)]
    pub color: ScriptColor,
    pub events: Vec<ScriptEvent>,
}

impl EditScript {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
    /// The recorded stream as session input events, in order.
    pub fn events(&self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.iter().copied().map(InputEvent::from)
    }
}
