//! System parameter groups for UI systems
//!
//! The UI reads the session and writes messages; it never mutates game state
//! itself. Grouping the writers keeps the egui system signatures short.

use crate::core::AppConfig;
use crate::game::events::{CellClicked, NewGameRequested, PromotionChosen, PromotionDismissed};
use crate::game::resources::{ActiveSession, EvaluatorSlot};
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

/// Everything the main game UI needs
#[derive(SystemParam)]
pub struct GameUiParams<'w, 's> {
    pub contexts: EguiContexts<'w, 's>,
    pub session: Res<'w, ActiveSession>,
    pub evaluator: Res<'w, EvaluatorSlot>,
    /// "Play as" writes here; the core plugin persists it
    pub config: ResMut<'w, AppConfig>,
    pub cell_clicks: MessageWriter<'w, CellClicked>,
    pub new_game: MessageWriter<'w, NewGameRequested>,
}

/// Promotion modal parameters
#[derive(SystemParam)]
pub struct PromotionUiParams<'w, 's> {
    pub contexts: EguiContexts<'w, 's>,
    pub session: Res<'w, ActiveSession>,
    pub chosen: MessageWriter<'w, PromotionChosen>,
    pub dismissed: MessageWriter<'w, PromotionDismissed>,
}
