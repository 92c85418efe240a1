use bevy::prelude::*;

pub mod appearance;
pub mod config_io;

pub use appearance::{AppearanceConfig, WearablePools};
pub use config_io::{appearance_path, load_appearance, save_appearance, ConfigIoError, CONFIG_DIR};

/// Config plugin for Backlot.
/// Makes the default appearance pools available as a resource; scenes that
/// ship their own pools can overwrite the resource after loading from RON.
pub struct BlConfigPlugin;

impl Plugin for BlConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppearanceConfig>();
    }
}
