use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// An RGBA color for avatar skin, hair, and eyes.
///
/// Kept as a plain serializable struct so appearance pools can live in RON
/// files without depending on the engine's color serialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvatarColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl AvatarColor {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components.
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl From<AvatarColor> for Color {
    fn from(c: AvatarColor) -> Self {
        Color::srgba(c.r, c.g, c.b, c.a)
    }
}
