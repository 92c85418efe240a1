use bevy::prelude::*;

pub mod avatar;
pub mod body;
pub mod color;
pub mod urn;

pub use avatar::{AvatarShape, EmoteSlot, Extra, MAX_EMOTE_SLOTS};
pub use body::BodyType;
pub use color::AvatarColor;
pub use urn::{base_avatars_urn, base_wearables, collections_urn, BASE_AVATARS_URN, COLLECTIONS_URN};

/// Core plugin providing foundational avatar types for Backlot.
pub struct BlCorePlugin;

impl Plugin for BlCorePlugin {
    fn build(&self, _app: &mut App) {
        // Core types are used by other crates; no systems to register here.
    }
}
