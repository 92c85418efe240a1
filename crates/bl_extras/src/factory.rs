//! Appearance assembly and spawning.
//!
//! The appearance policy: every extra wears the three fixed base parts, then
//! either the caller's wearables (qualified against the collections
//! namespace) or one random top/pants/shoes from the body-type pools, then
//! exactly one hairstyle. Colors not supplied by the caller are drawn
//! uniformly from the config pools.

use bevy::prelude::*;
use bl_config::AppearanceConfig;
use bl_core::{collections_urn, AvatarColor, AvatarShape, BodyType, EmoteSlot, Extra, MAX_EMOTE_SLOTS};
use rand::Rng;

use crate::registry::ExtrasRegistry;

/// Spawn parameters for one extra. Only transform, body type, and name are
/// required; everything else falls back to a random draw.
#[derive(Debug, Clone)]
pub struct ExtraSpawnParams {
    /// Placement in the scene, passed through to the spawned entity.
    pub transform: Transform,
    pub body_type: BodyType,
    /// Display name; also keys the entity name as `extra-<name>`.
    /// Distinctness is the caller's responsibility.
    pub name: String,
    /// Custom wearables (collection item names, qualified at spawn).
    /// When set, no top/pants/shoes are drawn from the pools.
    pub wearables: Option<Vec<String>>,
    /// Emote ids to bind to slots 0-9; entries past slot 9 are dropped.
    pub emotes: Option<Vec<String>>,
    pub skin_color: Option<AvatarColor>,
    pub hair_color: Option<AvatarColor>,
    pub eye_color: Option<AvatarColor>,
    /// Hairstyle urn, appended verbatim.
    pub hairstyle: Option<String>,
}

impl ExtraSpawnParams {
    pub fn new(transform: Transform, body_type: BodyType, name: impl Into<String>) -> Self {
        Self {
            transform,
            body_type,
            name: name.into(),
            wearables: None,
            emotes: None,
            skin_color: None,
            hair_color: None,
            eye_color: None,
            hairstyle: None,
        }
    }

    pub fn with_wearables(mut self, wearables: Vec<String>) -> Self {
        self.wearables = Some(wearables);
        self
    }

    pub fn with_emotes(mut self, emotes: Vec<String>) -> Self {
        self.emotes = Some(emotes);
        self
    }

    pub fn with_skin_color(mut self, color: AvatarColor) -> Self {
        self.skin_color = Some(color);
        self
    }

    pub fn with_hair_color(mut self, color: AvatarColor) -> Self {
        self.hair_color = Some(color);
        self
    }

    pub fn with_eye_color(mut self, color: AvatarColor) -> Self {
        self.eye_color = Some(color);
        self
    }

    pub fn with_hairstyle(mut self, hairstyle: impl Into<String>) -> Self {
        self.hairstyle = Some(hairstyle.into());
        self
    }
}

/// Uniform draw from a candidate pool.
///
/// # Panics
/// Panics if the pool is empty. Pools are caller-supplied configuration;
/// no validation happens here.
fn pick<'a, T>(pool: &'a [T], rng: &mut impl Rng) -> &'a T {
    &pool[rng.gen_range(0..pool.len())]
}

/// Assemble a complete avatar appearance from params and pools.
///
/// Pure policy, separated from spawning so it can be tested without an ECS
/// world. See the module docs for the wearable layout invariant.
pub fn assemble_appearance(
    config: &AppearanceConfig,
    params: &ExtraSpawnParams,
    rng: &mut impl Rng,
) -> AvatarShape {
    let skin = params
        .skin_color
        .unwrap_or_else(|| *pick(&config.skin_colors, rng));
    let hair = params
        .hair_color
        .unwrap_or_else(|| *pick(&config.hair_colors, rng));
    let eyes = params
        .eye_color
        .unwrap_or_else(|| *pick(&config.eye_colors, rng));

    let mut shape = AvatarShape::new(&params.name, params.body_type, skin, hair, eyes);

    let pools = config.pools(params.body_type);
    match &params.wearables {
        Some(custom) => {
            for wearable in custom {
                shape.wearables.push(collections_urn(wearable));
            }
        }
        None => {
            shape.wearables.push(pick(&pools.tops, rng).clone());
            shape.wearables.push(pick(&pools.pants, rng).clone());
            shape.wearables.push(pick(&pools.shoes, rng).clone());
        }
    }

    match &params.hairstyle {
        Some(hairstyle) => shape.wearables.push(hairstyle.clone()),
        None => shape.wearables.push(pick(&pools.hairstyles, rng).clone()),
    }

    if let Some(emotes) = &params.emotes {
        for (slot, emote) in emotes.iter().take(MAX_EMOTE_SLOTS).enumerate() {
            shape.emotes.push(EmoteSlot {
                slot: slot as u8,
                urn: collections_urn(emote),
            });
        }
    }

    shape
}

/// Create an extra and place it in the scene.
///
/// Spawns an entity named `extra-<name>` carrying the transform, the
/// assembled [`AvatarShape`], and the [`Extra`] marker, records it in the
/// registry, and returns the handle.
pub fn spawn_extra(
    commands: &mut Commands,
    registry: &mut ExtrasRegistry,
    config: &AppearanceConfig,
    rng: &mut impl Rng,
    params: ExtraSpawnParams,
) -> Entity {
    let shape = assemble_appearance(config, &params, rng);
    let entity = commands
        .spawn((
            Name::new(format!("extra-{}", params.name)),
            params.transform,
            shape,
            Extra,
        ))
        .id();

    registry.push(entity);
    entity
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::SystemState;
    use bl_core::{base_wearables, COLLECTIONS_URN};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn params(body_type: BodyType, name: &str) -> ExtraSpawnParams {
        ExtraSpawnParams::new(Transform::default(), body_type, name)
    }

    #[test]
    fn no_overrides_yields_seven_wearables() {
        let config = AppearanceConfig::default();
        let mut rng = rng();

        for body in BodyType::all() {
            let shape = assemble_appearance(&config, &params(*body, "test"), &mut rng);
            assert_eq!(shape.wearables.len(), 7);
            assert_eq!(&shape.wearables[..3], &base_wearables()[..]);

            let pools = config.pools(*body);
            assert!(pools.tops.contains(&shape.wearables[3]));
            assert!(pools.pants.contains(&shape.wearables[4]));
            assert!(pools.shoes.contains(&shape.wearables[5]));
            assert!(pools.hairstyles.contains(&shape.wearables[6]));
        }
    }

    #[test]
    fn random_colors_come_from_pools() {
        let config = AppearanceConfig::default();
        let mut rng = rng();

        for _ in 0..20 {
            let shape = assemble_appearance(&config, &params(BodyType::Female, "test"), &mut rng);
            assert!(config.skin_colors.contains(&shape.skin_color));
            assert!(config.hair_colors.contains(&shape.hair_color));
            assert!(config.eye_colors.contains(&shape.eye_color));
        }
    }

    #[test]
    fn caller_colors_win_over_pools() {
        let config = AppearanceConfig::default();
        let mut rng = rng();
        let magenta = AvatarColor::rgb(1.0, 0.0, 1.0);

        let p = params(BodyType::Male, "test").with_skin_color(magenta);
        let shape = assemble_appearance(&config, &p, &mut rng);
        assert_eq!(shape.skin_color, magenta);
    }

    #[test]
    fn custom_wearables_are_namespaced_and_skip_slot_fill() {
        let config = AppearanceConfig::default();
        let mut rng = rng();

        let p = params(BodyType::Male, "Bob").with_wearables(vec!["shirt_01".to_string()]);
        let shape = assemble_appearance(&config, &p, &mut rng);

        // 3 base + 1 custom + 1 auto hairstyle
        assert_eq!(shape.wearables.len(), 5);
        assert_eq!(
            shape.wearables[3],
            format!("{}shirt_01", COLLECTIONS_URN)
        );
        assert!(config
            .pools(BodyType::Male)
            .hairstyles
            .contains(&shape.wearables[4]));
    }

    #[test]
    fn caller_hairstyle_is_appended_verbatim() {
        let config = AppearanceConfig::default();
        let mut rng = rng();

        let p = params(BodyType::Female, "test").with_hairstyle("my_custom_hair");
        let shape = assemble_appearance(&config, &p, &mut rng);
        assert_eq!(shape.wearables.last().unwrap(), "my_custom_hair");
        assert_eq!(shape.wearables.len(), 7);
    }

    #[test]
    fn emotes_bind_slots_in_order_capped_at_ten() {
        let config = AppearanceConfig::default();
        let mut rng = rng();

        let emotes: Vec<String> = (0..12).map(|i| format!("emote_{}", i)).collect();
        let p = params(BodyType::Female, "test").with_emotes(emotes);
        let shape = assemble_appearance(&config, &p, &mut rng);

        assert_eq!(shape.emotes.len(), MAX_EMOTE_SLOTS);
        for (i, binding) in shape.emotes.iter().enumerate() {
            assert_eq!(binding.slot as usize, i);
            assert_eq!(binding.urn, collections_urn(&format!("emote_{}", i)));
        }
    }

    #[test]
    fn short_emote_list_binds_all() {
        let config = AppearanceConfig::default();
        let mut rng = rng();

        let p = params(BodyType::Male, "test")
            .with_emotes(vec!["wave".to_string(), "clap".to_string()]);
        let shape = assemble_appearance(&config, &p, &mut rng);
        assert_eq!(shape.emotes.len(), 2);
        assert_eq!(shape.emotes[1].slot, 1);
    }

    #[test]
    fn spawn_registers_and_names_entity() {
        let mut world = World::new();
        world.insert_resource(ExtrasRegistry::default());

        let config = AppearanceConfig::default();
        let mut rng = rng();

        let mut state: SystemState<(Commands, ResMut<ExtrasRegistry>)> =
            SystemState::new(&mut world);
        let entity = {
            let (mut commands, mut registry) = state.get_mut(&mut world);
            spawn_extra(
                &mut commands,
                &mut registry,
                &config,
                &mut rng,
                params(BodyType::Female, "Ana"),
            )
        };
        state.apply(&mut world);

        let registry = world.resource::<ExtrasRegistry>();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.iter().next(), Some(&entity));

        let name = world.get::<Name>(entity).unwrap();
        assert_eq!(name.as_str(), "extra-Ana");

        let shape = world.get::<AvatarShape>(entity).unwrap();
        assert_eq!(shape.name, "Ana");
        assert!(shape.body_shape.ends_with("BaseFemale"));
        assert_eq!(shape.wearables.len(), 7);

        assert!(world.get::<Extra>(entity).is_some());
        assert!(world.get::<Transform>(entity).is_some());
    }
}
