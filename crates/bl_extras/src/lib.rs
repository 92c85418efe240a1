//! Extra factory for Backlot.
//!
//! Spawns decorative background avatars ("extras") with randomized or
//! caller-specified appearance, and provides the thin mutation operations a
//! scene needs: wearable swaps, emote triggers, and tweened movement.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod factory;
pub mod ops;
pub mod registry;

pub use factory::{assemble_appearance, spawn_extra, ExtraSpawnParams};
pub use ops::{
    change_wearables, move_extra, rotate_extra, stop_emote, stop_group_emote, trigger_emote,
    trigger_group_emote, STOP_EMOTE_NUDGE,
};
pub use registry::ExtrasRegistry;

/// Random source for appearance assembly.
///
/// Seeded from entropy by default; use [`ExtrasRng::seeded`] for
/// reproducible crowds.
#[derive(Resource)]
pub struct ExtrasRng(pub ChaCha8Rng);

impl ExtrasRng {
    /// Deterministic rng for reproducible appearance draws.
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for ExtrasRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}

/// Extras plugin for Backlot.
/// Owns the registry of spawned extras and the appearance rng.
pub struct BlExtrasPlugin;

impl Plugin for BlExtrasPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ExtrasRegistry>()
            .init_resource::<ExtrasRng>();
    }
}
