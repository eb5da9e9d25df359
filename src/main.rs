use anyhow::Context;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_egui::EguiPlugin;
use clap::{Parser, ValueEnum};
use std::sync::Arc;

use glyphboard::core::settings_persistence::load_config;
use glyphboard::core::{AppConfig, CorePlugin};
use glyphboard::game::resources::{evaluator_channel, ActiveSession};
use glyphboard::game::GamePlugin;
use glyphboard::session::{GameSession, HttpEvaluator, Side};
use glyphboard::ui::UiPlugin;

const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 800;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlayAs {
    White,
    Black,
}

impl From<PlayAs> for Side {
    fn from(value: PlayAs) -> Self {
        match value {
            PlayAs::White => Side::White,
            PlayAs::Black => Side::Black,
        }
    }
}

/// Play chess against an evaluator, or against random moves without one
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Side you play (overrides the saved preference)
    #[arg(long, value_enum)]
    play_as: Option<PlayAs>,

    /// HTTP evaluation endpoint, e.g. http://localhost:8080/evaluate
    #[arg(long)]
    evaluator_url: Option<String>,

    /// Pause before the opponent replies, in milliseconds
    #[arg(long)]
    opponent_delay_ms: Option<u64>,

    /// Starting position as FEN
    #[arg(long)]
    start_fen: Option<String>,

    /// Log filter, e.g. "glyphboard=debug"
    #[arg(long)]
    log_filter: Option<String>,
}

impl Cli {
    fn apply(self, config: &mut AppConfig) {
        if let Some(side) = self.play_as {
            config.human_side = side.into();
        }
        if self.evaluator_url.is_some() {
            config.evaluator_url = self.evaluator_url;
        }
        if let Some(delay) = self.opponent_delay_ms {
            config.opponent_delay_ms = delay;
        }
        if self.start_fen.is_some() {
            config.start_fen = self.start_fen;
        }
        if let Some(filter) = self.log_filter {
            config.log_filter = filter;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = load_config();
    cli.apply(&mut config);

    // A bad start position is fatal before any window opens
    let session = GameSession::standard(config.start_fen.as_deref(), config.human_side)
        .context("could not set up the starting position")?;

    let (evaluator_sender, evaluator_handoff) = evaluator_channel();
    if let Some(url) = &config.evaluator_url {
        evaluator_sender.install(Arc::new(HttpEvaluator::new(url.clone())));
    }

    let window = Window {
        title: "glyphboard".to_string(),
        resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        ..default()
    };

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    filter: config.log_filter.clone(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin::default())
        .insert_resource(config)
        .insert_resource(ActiveSession(session))
        .insert_resource(evaluator_handoff)
        .add_plugins(CorePlugin)
        .add_plugins(GamePlugin)
        .add_plugins(UiPlugin)
        .add_systems(Startup, setup_camera)
        .run();

    Ok(())
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
