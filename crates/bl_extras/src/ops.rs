//! Per-extra and group mutations.
//!
//! All operations are immediate, synchronous component mutations; the host
//! renderer reacts to the changed values on its next sync.

use std::time::{SystemTime, UNIX_EPOCH};

use bevy::ecs::system::SystemId;
use bevy::prelude::*;
use bl_core::{base_wearables, AvatarShape};
use bl_tween::{MoveTo, RotateTo};

/// Epsilon used by [`stop_emote`] to dirty the transform.
pub const STOP_EMOTE_NUDGE: f32 = 1e-4;

fn unix_now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Replace an extra's wearables wholesale: the three fixed base parts
/// followed by `wearables` verbatim.
///
/// Unlike spawn-time custom wearables, entries are NOT qualified against the
/// collections namespace; callers pass fully qualified urns.
pub fn change_wearables(shape: &mut AvatarShape, wearables: &[String]) {
    let mut list = base_wearables();
    list.extend(wearables.iter().cloned());
    shape.wearables = list;
}

/// Trigger an emote on one extra.
///
/// Sets the expression id and stamps the trigger time; the renderer plays
/// the expression once per timestamp change.
pub fn trigger_emote(shape: &mut AvatarShape, emote_id: &str) {
    shape.expression_trigger_id = Some(emote_id.to_string());
    shape.expression_trigger_timestamp = Some(unix_now_secs());
}

/// Stop a playing emote.
///
/// The avatar component has no stop primitive, so this nudges the entity's
/// z-coordinate up and back down to force the host to treat it as dirty and
/// resynchronize. Numerically a no-op; do not "fix" unless the host grows a
/// real stop operation.
pub fn stop_emote(transform: &mut Transform) {
    transform.translation.z += STOP_EMOTE_NUDGE;
    transform.translation.z -= STOP_EMOTE_NUDGE;
}

/// Trigger emotes across a group of extras.
///
/// With one emote per extra, each gets its own; otherwise every extra gets
/// `emotes[0]`. An empty emote list is a no-op.
pub fn trigger_group_emote(shapes: &mut [&mut AvatarShape], emotes: &[String]) {
    if emotes.is_empty() {
        return;
    }
    let matched = shapes.len() == emotes.len();
    for (i, shape) in shapes.iter_mut().enumerate() {
        let emote = if matched { &emotes[i] } else { &emotes[0] };
        trigger_emote(shape, emote);
    }
}

/// Stop emotes across a group of extras.
pub fn stop_group_emote(transforms: &mut [&mut Transform]) {
    for transform in transforms.iter_mut() {
        stop_emote(transform);
    }
}

/// Move an extra from `start` to `end` over `duration` seconds.
///
/// Replaces any position tween already in flight. `on_complete` is a
/// registered one-shot system run when the tween finishes.
pub fn move_extra(
    commands: &mut Commands,
    extra: Entity,
    start: Vec3,
    end: Vec3,
    duration: f32,
    on_complete: Option<SystemId>,
) {
    let mut tween = MoveTo::new(start, end, duration);
    if let Some(system) = on_complete {
        tween = tween.with_on_complete(system);
    }
    commands.entity(extra).insert(tween);
}

/// Rotate an extra from `start` to `end` over `duration` seconds.
///
/// Replaces any rotation tween already in flight.
pub fn rotate_extra(
    commands: &mut Commands,
    extra: Entity,
    start: Quat,
    end: Quat,
    duration: f32,
    on_complete: Option<SystemId>,
) {
    let mut tween = RotateTo::new(start, end, duration);
    if let Some(system) = on_complete {
        tween = tween.with_on_complete(system);
    }
    commands.entity(extra).insert(tween);
}
