//! The running game as a Bevy resource

use crate::core::AppConfig;
use crate::session::{GameSession, ShakmatyRules};
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::ops::{Deref, DerefMut};

/// Resource wrapping the single [`GameSession`]
///
/// Input systems mutate it through messages; the UI only reads it.
#[derive(Resource, Debug)]
pub struct ActiveSession(pub GameSession);

/// Standard start with the configured human side
impl FromWorld for ActiveSession {
    fn from_world(world: &mut World) -> Self {
        let human_side = world
            .get_resource::<AppConfig>()
            .map(|config| config.human_side)
            .unwrap_or_default();
        ActiveSession(GameSession::new(
            Box::new(ShakmatyRules::new()),
            human_side,
            StdRng::from_os_rng(),
        ))
    }
}

impl Deref for ActiveSession {
    type Target = GameSession;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ActiveSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
