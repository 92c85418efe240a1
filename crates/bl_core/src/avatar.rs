//! Avatar appearance component.
//!
//! `AvatarShape` carries everything a host avatar renderer needs to dress and
//! animate an extra: body shape, wearable urns, colors, and emote bindings.
//! This crate only authors the component; resolving urns to meshes is the
//! renderer's job.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::body::BodyType;
use crate::color::AvatarColor;
use crate::urn::base_wearables;

/// Maximum number of emote trigger slots on an avatar.
pub const MAX_EMOTE_SLOTS: usize = 10;

/// Marker component for spawned extras.
#[derive(Component, Debug, Clone, Copy)]
pub struct Extra;

/// An emote bound to one of the ten avatar trigger slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmoteSlot {
    /// Positional slot index, 0-9.
    pub slot: u8,
    /// Fully qualified emote urn.
    pub urn: String,
}

/// Complete avatar appearance descriptor for one extra.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct AvatarShape {
    /// Display name shown above the avatar.
    pub name: String,
    /// Fully qualified body shape urn.
    pub body_shape: String,
    /// Ordered wearable urns. Always starts with the three fixed base parts.
    pub wearables: Vec<String>,
    pub skin_color: AvatarColor,
    pub hair_color: AvatarColor,
    pub eye_color: AvatarColor,
    /// Currently triggered expression, if any.
    pub expression_trigger_id: Option<String>,
    /// Unix timestamp (seconds) of the last expression trigger.
    /// The renderer replays the expression whenever this changes.
    pub expression_trigger_timestamp: Option<u64>,
    /// Emote slot bindings; index in this list equals the slot index.
    pub emotes: Vec<EmoteSlot>,
}

impl AvatarShape {
    /// Create a shape with the fixed base wearables and no emotes.
    pub fn new(
        name: impl Into<String>,
        body_type: BodyType,
        skin_color: AvatarColor,
        hair_color: AvatarColor,
        eye_color: AvatarColor,
    ) -> Self {
        Self {
            name: name.into(),
            body_shape: body_type.shape_urn(),
            wearables: base_wearables(),
            skin_color,
            hair_color,
            eye_color,
            expression_trigger_id: None,
            expression_trigger_timestamp: None,
            emotes: Vec::new(),
        }
    }
}
