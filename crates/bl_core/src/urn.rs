//! Urn namespaces for avatar content.
//!
//! Wearables and emotes are referenced by urn. Items from the base avatar
//! collection are fully qualified in the config pools; custom items supplied
//! by callers at spawn time are qualified against the collections namespace.

/// Namespace for base avatar content (body shapes, default wearables).
pub const BASE_AVATARS_URN: &str = "urn:decentraland:off-chain:base-avatars:";

/// Namespace for custom collection content (caller-supplied wearables and emotes).
pub const COLLECTIONS_URN: &str = "urn:decentraland:matic:collections-v2:";

/// Fixed facial parts every extra wears regardless of body type.
pub const BASE_WEARABLE_PARTS: [&str; 3] = ["f_eyes_00", "f_eyebrows_00", "f_mouth_00"];

/// Qualify an item name against the base avatar namespace.
pub fn base_avatars_urn(item: &str) -> String {
    format!("{}{}", BASE_AVATARS_URN, item)
}

/// Qualify an item name against the collections namespace.
pub fn collections_urn(item: &str) -> String {
    format!("{}{}", COLLECTIONS_URN, item)
}

/// The three fixed base wearables (eyes, eyebrows, mouth), fully qualified.
pub fn base_wearables() -> Vec<String> {
    BASE_WEARABLE_PARTS.iter().map(|p| base_avatars_urn(p)).collect()
}
