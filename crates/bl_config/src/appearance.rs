//! Candidate appearance pools for randomized extras.
//!
//! Pools are ordered sequences the factory samples from with a discrete
//! uniform draw. Wearable entries are fully qualified urns; the factory
//! appends them as-is.

use bevy::prelude::*;
use bl_core::{base_avatars_urn, AvatarColor, BodyType};
use serde::{Deserialize, Serialize};

/// Wearable candidate pools for one body type, partitioned by slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WearablePools {
    pub tops: Vec<String>,
    pub pants: Vec<String>,
    pub shoes: Vec<String>,
    pub hairstyles: Vec<String>,
}

/// Read-only candidate pools for extra appearance assembly.
///
/// The factory never mutates this; it only samples. Ships with a usable
/// default set so scenes work without any config file.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Candidate skin colors.
    pub skin_colors: Vec<AvatarColor>,
    /// Candidate hair colors.
    pub hair_colors: Vec<AvatarColor>,
    /// Candidate eye colors.
    pub eye_colors: Vec<AvatarColor>,
    /// Wearable pools for male extras.
    pub male: WearablePools,
    /// Wearable pools for female extras.
    pub female: WearablePools,
}

impl AppearanceConfig {
    /// Wearable pools matching a body type.
    pub fn pools(&self, body_type: BodyType) -> &WearablePools {
        match body_type {
            BodyType::Male => &self.male,
            BodyType::Female => &self.female,
        }
    }
}

fn urns(items: &[&str]) -> Vec<String> {
    items.iter().map(|i| base_avatars_urn(i)).collect()
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            skin_colors: vec![
                AvatarColor::rgb(0.94, 0.76, 0.65),
                AvatarColor::rgb(0.87, 0.67, 0.53),
                AvatarColor::rgb(0.80, 0.61, 0.46),
                AvatarColor::rgb(0.61, 0.46, 0.36),
                AvatarColor::rgb(0.44, 0.30, 0.22),
                AvatarColor::rgb(0.32, 0.20, 0.13),
            ],
            hair_colors: vec![
                AvatarColor::rgb(0.11, 0.09, 0.07),
                AvatarColor::rgb(0.24, 0.16, 0.11),
                AvatarColor::rgb(0.43, 0.28, 0.15),
                AvatarColor::rgb(0.65, 0.48, 0.26),
                AvatarColor::rgb(0.85, 0.73, 0.48),
                AvatarColor::rgb(0.55, 0.55, 0.55),
            ],
            eye_colors: vec![
                AvatarColor::rgb(0.23, 0.14, 0.09),
                AvatarColor::rgb(0.34, 0.22, 0.12),
                AvatarColor::rgb(0.20, 0.40, 0.22),
                AvatarColor::rgb(0.28, 0.45, 0.62),
                AvatarColor::rgb(0.45, 0.40, 0.25),
                AvatarColor::rgb(0.50, 0.50, 0.52),
            ],
            male: WearablePools {
                tops: urns(&["green_hoodie", "striped_shirt", "safari_shirt", "black_jacket"]),
                pants: urns(&["brown_pants", "oxford_pants", "comfortablepants"]),
                shoes: urns(&["sport_black_shoes", "moccasin", "comfy_green_sandals"]),
                hairstyles: urns(&["casual_hair_01", "cool_hair", "keanu_hair", "tall_front_01"]),
            },
            female: WearablePools {
                tops: urns(&["f_sweater", "f_blouse", "f_tshirt", "f_jacket"]),
                pants: urns(&["f_jeans", "f_capris", "f_stripe_long_skirt"]),
                shoes: urns(&["ruby_red_loafer", "sneakers", "classic_shoes"]),
                hairstyles: urns(&["standard_hair", "pony_tail", "two_tails", "hair_coolshortstyle"]),
            },
        }
    }
}
