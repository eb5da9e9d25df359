//! UI module - egui interface for the board and panels
//!
//! - **game_ui**: status bar, side panels, last move line, board
//! - **board_ui**: the board widget and pixel-to-cell mapping
//! - **promotion_ui**: promotion modal
//!
//! All systems run in `EguiPrimaryContextPass`, read the session and write
//! messages; the game plugin applies them on the next `Update`.

pub mod board_ui;
pub mod game_ui;
pub mod promotion_ui;
pub mod styles;
pub mod system_params;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use game_ui::game_ui_system;
pub use promotion_ui::promotion_ui_system;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // The modal goes last so it draws over the board
        app.add_systems(
            EguiPrimaryContextPass,
            (game_ui_system, promotion_ui_system).chain(),
        );
    }
}
