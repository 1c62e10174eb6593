//! Bevy integration: a shared animation clock plus the resources to drive it.
//!
//! The plugin only advances animation time; rendering stays with the
//! consumer. Look tiles up each frame with [`ActiveTileset::resolve`].

use crate::tileset::{AnimationClock, TileId, Tileset};
use bevy::prelude::*;

/// Resource holding the loaded tileset used for animation lookups
#[derive(Resource, Debug, Clone)]
pub struct ActiveTileset(pub Tileset);

impl ActiveTileset {
    /// Resolve a base tile against the shared clock
    pub fn resolve(&self, clock: &TileClock, base_id: TileId) -> TileId {
        self.0.resolve(base_id, clock.0.elapsed_ms())
    }
}

/// Shared clock all tile animations read from, so tiles stay in phase
#[derive(Resource, Debug, Clone, Default)]
pub struct TileClock(pub AnimationClock);

/// Global speed multiplier for tile animations.
///
/// Default is 1.0 (real time). Set to 2.0 for double speed, 0.5 for half.
#[derive(Resource, Debug, Clone)]
pub struct AnimationSpeed(pub f32);

impl Default for AnimationSpeed {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Marker resource that pauses tile animations while present.
///
/// Insert to pause, remove to resume.
#[derive(Resource, Debug, Default, Clone)]
pub struct AnimationsPaused;

/// System that advances the shared tile clock each frame
pub fn advance_tile_clock(
    time: Res<Time>,
    speed: Res<AnimationSpeed>,
    paused: Option<Res<AnimationsPaused>>,
    mut clock: ResMut<TileClock>,
) {
    if paused.is_some() {
        return;
    }
    clock.0.advance_secs(time.delta_secs() * speed.0);
}

/// Registers the clock resources and the advancing system.
///
/// Insert an [`ActiveTileset`] after loading the asset; the plugin does not
/// load it for you.
pub struct TileAnimationPlugin;

impl Plugin for TileAnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TileClock>()
            .init_resource::<AnimationSpeed>()
            .add_systems(Update, advance_tile_clock);
    }
}
