use bevy::prelude::*;

/// Ordered registry of all extras spawned in the scene.
///
/// Lets external code run bulk operations (group emotes, crowd moves) without
/// tracking handles itself. Created at scene init by the plugin; it only
/// grows during scene life. There is no per-extra despawn operation; call
/// [`ExtrasRegistry::clear`] at scene teardown after despawning the entities.
#[derive(Resource, Debug, Default)]
pub struct ExtrasRegistry {
    handles: Vec<Entity>,
}

impl ExtrasRegistry {
    /// Record a newly spawned extra.
    pub fn push(&mut self, extra: Entity) {
        self.handles.push(extra);
    }

    /// Iterate handles in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.handles.iter()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Forget all handles. Does not despawn the entities.
    pub fn clear(&mut self) {
        self.handles.clear();
    }
}
