//! Transform tween components for extras.
//!
//! Inserting a [`MoveTo`] or [`RotateTo`] on an entity interpolates its
//! transform from `start` to `end` over `duration` seconds. Inserting again
//! replaces any tween of the same kind in flight. On completion the component
//! is removed, a [`TweenCompleted`] event is sent, and the optional one-shot
//! callback system runs.

use bevy::ecs::system::SystemId;
use bevy::prelude::*;

/// Which tween finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenKind {
    Move,
    Rotate,
}

/// Sent when a tween reaches its end value.
#[derive(Event, Debug, Clone, Copy)]
pub struct TweenCompleted {
    pub entity: Entity,
    pub kind: TweenKind,
}

/// Linear position tween from `start` to `end`.
#[derive(Component, Debug, Clone)]
pub struct MoveTo {
    pub start: Vec3,
    pub end: Vec3,
    /// Duration in seconds. Zero or negative completes on the next frame.
    pub duration: f32,
    pub elapsed: f32,
    /// One-shot system to run on completion.
    pub on_complete: Option<SystemId>,
}

impl MoveTo {
    pub fn new(start: Vec3, end: Vec3, duration: f32) -> Self {
        Self {
            start,
            end,
            duration,
            elapsed: 0.0,
            on_complete: None,
        }
    }

    pub fn with_on_complete(mut self, system: SystemId) -> Self {
        self.on_complete = Some(system);
        self
    }

    /// Normalized progress in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Interpolated position at the current progress.
    pub fn sample(&self) -> Vec3 {
        self.start.lerp(self.end, self.progress())
    }
}

/// Spherical rotation tween from `start` to `end`.
#[derive(Component, Debug, Clone)]
pub struct RotateTo {
    pub start: Quat,
    pub end: Quat,
    /// Duration in seconds. Zero or negative completes on the next frame.
    pub duration: f32,
    pub elapsed: f32,
    /// One-shot system to run on completion.
    pub on_complete: Option<SystemId>,
}

impl RotateTo {
    pub fn new(start: Quat, end: Quat, duration: f32) -> Self {
        Self {
            start,
            end,
            duration,
            elapsed: 0.0,
            on_complete: None,
        }
    }

    pub fn with_on_complete(mut self, system: SystemId) -> Self {
        self.on_complete = Some(system);
        self
    }

    /// Normalized progress in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Interpolated rotation at the current progress.
    pub fn sample(&self) -> Quat {
        self.start.slerp(self.end, self.progress())
    }
}

/// Tween plugin for Backlot.
/// Registers the completion event and the systems advancing active tweens.
pub struct BlTweenPlugin;

impl Plugin for BlTweenPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TweenCompleted>()
            .add_systems(Update, (advance_move_tweens, advance_rotate_tweens));
    }
}

/// Advance all position tweens by the frame delta.
pub fn advance_move_tweens(
    mut commands: Commands,
    time: Res<Time>,
    mut completed: EventWriter<TweenCompleted>,
    mut query: Query<(Entity, &mut Transform, &mut MoveTo)>,
) {
    for (entity, mut transform, mut tween) in &mut query {
        tween.elapsed += time.delta_secs();
        transform.translation = tween.sample();

        if tween.progress() >= 1.0 {
            commands.entity(entity).remove::<MoveTo>();
            completed.send(TweenCompleted {
                entity,
                kind: TweenKind::Move,
            });
            if let Some(system) = tween.on_complete {
                commands.run_system(system);
            }
        }
    }
}

/// Advance all rotation tweens by the frame delta.
pub fn advance_rotate_tweens(
    mut commands: Commands,
    time: Res<Time>,
    mut completed: EventWriter<TweenCompleted>,
    mut query: Query<(Entity, &mut Transform, &mut RotateTo)>,
) {
    for (entity, mut transform, mut tween) in &mut query {
        tween.elapsed += time.delta_secs();
        transform.rotation = tween.sample();

        if tween.progress() >= 1.0 {
            commands.entity(entity).remove::<RotateTo>();
            completed.send(TweenCompleted {
                entity,
                kind: TweenKind::Rotate,
            });
            if let Some(system) = tween.on_complete {
                commands.run_system(system);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_sample_interpolates_linearly() {
        let mut tween = MoveTo::new(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 2.0);
        assert_eq!(tween.sample(), Vec3::ZERO);

        tween.elapsed = 1.0;
        assert_eq!(tween.sample(), Vec3::new(5.0, 0.0, 0.0));

        tween.elapsed = 5.0; // Past the end - clamped
        assert_eq!(tween.sample(), Vec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn zero_duration_is_complete_immediately() {
        let tween = MoveTo::new(Vec3::ZERO, Vec3::ONE, 0.0);
        assert_eq!(tween.progress(), 1.0);
        assert_eq!(tween.sample(), Vec3::ONE);
    }

    #[test]
    fn rotate_sample_reaches_end() {
        let end = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let mut tween = RotateTo::new(Quat::IDENTITY, end, 1.0);
        tween.elapsed = 1.0;
        assert!(tween.sample().angle_between(end) < 1e-5);
    }

    #[test]
    fn completed_move_tween_is_removed_and_reported() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins).add_plugins(BlTweenPlugin);

        let end = Vec3::new(4.0, 0.0, 2.0);
        let entity = app
            .world_mut()
            .spawn((Transform::default(), MoveTo::new(Vec3::ZERO, end, 0.0)))
            .id();

        app.update();

        let transform = app.world().get::<Transform>(entity).unwrap();
        assert_eq!(transform.translation, end);
        assert!(app.world().get::<MoveTo>(entity).is_none());

        let events = app.world().resource::<Events<TweenCompleted>>();
        assert!(!events.is_empty());
    }

    #[test]
    fn completion_runs_registered_callback() {
        #[derive(Resource, Default)]
        struct Arrived(bool);

        fn mark_arrived(mut arrived: ResMut<Arrived>) {
            arrived.0 = true;
        }

        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(BlTweenPlugin)
            .init_resource::<Arrived>();

        let callback = app.world_mut().register_system(mark_arrived);
        app.world_mut().spawn((
            Transform::default(),
            MoveTo::new(Vec3::ZERO, Vec3::ONE, 0.0).with_on_complete(callback),
        ));

        app.update();
        assert!(app.world().resource::<Arrived>().0);
    }
}
