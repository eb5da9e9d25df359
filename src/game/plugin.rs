//! Game plugin - session resources, messages and systems
//!
//! # Plugin Dependencies
//!
//! - [`crate::core::CorePlugin`] should be added first so the loaded
//!   [`crate::core::AppConfig`] is in place; otherwise defaults are used
//! - a time source (`MinimalPlugins` is enough for headless use)
//!
//! # Resources
//!
//! [`ActiveSession`] is only initialized if absent, so callers can insert a
//! session built from a custom start position or a seeded RNG beforehand.
//! The same holds for [`EvaluatorHandoff`], which is never created here.

use super::events::*;
use super::resources::*;
use super::system_sets::GameSystems;
use super::systems::*;
use crate::core::AppConfig;
use bevy::prelude::*;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ActiveSession>()
            .init_resource::<OpponentCycle>()
            .init_resource::<EvaluatorSlot>();

        app.add_message::<CellClicked>()
            .add_message::<PromotionChosen>()
            .add_message::<PromotionDismissed>()
            .add_message::<NewGameRequested>()
            .add_message::<OpponentCycleRequested>();

        // Input → Execution
        app.configure_sets(Update, (GameSystems::Input, GameSystems::Execution).chain());

        app.add_systems(Startup, request_opening_cycle);

        app.add_systems(
            Update,
            (
                (
                    receive_evaluators,
                    handle_new_game,
                    handle_cell_clicks,
                    handle_promotion_choice,
                )
                    .chain()
                    .in_set(GameSystems::Input),
                (schedule_opponent_cycle, advance_opponent_cycle)
                    .chain()
                    .in_set(GameSystems::Execution),
            ),
        );
    }
}
