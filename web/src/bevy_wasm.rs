use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use glyphboard::core::{AppConfig, CorePlugin};
use glyphboard::game::GamePlugin;
use glyphboard::ui::UiPlugin;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::evaluator_bridge::take_handoff;

/// Log a message to the browser console with a prefix
fn console_log(message: &str) {
    web_sys::console::log_1(&format!("[GLYPHBOARD-WASM] {}", message).into());
}

/// Start the Bevy app inside `canvas`
///
/// Settings are not persisted in the browser, so the app starts from the
/// default configuration with the human playing White. The opponent plays
/// random moves until JavaScript registers an evaluator.
#[wasm_bindgen]
pub fn init_bevy(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    // Bevy finds the canvas by selector
    canvas.set_id("bevy");
    console_log(&format!(
        "Initializing Bevy app with canvas {}x{}",
        canvas.width(),
        canvas.height()
    ));

    let handoff = take_handoff()
        .ok_or_else(|| JsValue::from_str("glyphboard is already running"))?;

    wasm_bindgen_futures::spawn_local(async move {
        let config = AppConfig::default();
        let mut app = App::new();

        app.add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "glyphboard".to_string(),
                        canvas: Some("#bevy".into()),
                        fit_canvas_to_parent: true,
                        prevent_default_event_handling: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    filter: config.log_filter.clone(),
                    ..default()
                }),
        );
        app.add_plugins(EguiPlugin::default());

        app.insert_resource(config);
        app.insert_resource(handoff);
        app.add_plugins((CorePlugin, GamePlugin, UiPlugin));
        app.add_systems(Startup, setup_camera);

        console_log("Starting Bevy app");
        app.run();
    });

    Ok(())
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
