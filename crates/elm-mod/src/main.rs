//! Emergency Lights Manager headless driver.
//!
//! Runs one mod session outside the game, against an in-memory scene seeded
//! with every effect the mod knows:
//!
//! ```text
//! main()
//!  └─ load ModConfig            -- where the settings file lives, log level
//!  └─ on_created                -- read the settings file
//!  └─ --preset / --set edits    -- each one written through to the file
//!  └─ on_level_loaded           -- apply the plan to the scene
//!  └─ print light colors (and the panel JSON with --panel)
//!  └─ on_level_unloading, on_released
//! ```
//!
//! Example:
//!
//! ```text
//! elm-mod --preset 1 --set FireLeft=Purple --set ManualRearFire=true --panel
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use elm_core::{parse_line, ColorName, Preset, SettingKey, SettingKind};
use elm_mod::application::lifecycle::SettingsPersistence;
use elm_mod::infrastructure::scene::effect_collection::EffectCollection;
use elm_mod::infrastructure::storage::config::{load_config, load_config_from, ModConfig};
use elm_mod::infrastructure::storage::settings_file::SettingsFile;
use elm_mod::infrastructure::ui_bridge::{get_light_colors, get_panel, ModState};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Apply Emergency Lights Manager settings to a simulated scene.
#[derive(Debug, Parser)]
#[command(
    name = "elm-mod",
    about = "Headless driver for the Emergency Lights Manager mod",
    version
)]
struct Cli {
    /// Settings file to use instead of the one named in the config.
    #[arg(long, env = "ELM_SETTINGS")]
    settings: Option<PathBuf>,

    /// TOML config file (default: platform config directory).
    #[arg(long, env = "ELM_CONFIG")]
    config: Option<PathBuf>,

    /// Select a preset by index (0 = Default ... 6 = Ninja) before applying.
    #[arg(long)]
    preset: Option<Preset>,

    /// Change one setting before applying, e.g. `--set FireLeft=Purple`.
    /// May be repeated.
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    set: Vec<Assignment>,

    /// Print the options panel as JSON.
    #[arg(long)]
    panel: bool,
}

/// One `--set KEY=VALUE` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Assignment {
    key: SettingKey,
    value: String,
}

fn parse_assignment(arg: &str) -> Result<Assignment, String> {
    parse_line(arg)
        .map(|(key, value)| Assignment {
            key,
            value: value.to_string(),
        })
        .ok_or_else(|| format!("expected KEY=VALUE with a known key, got {arg:?}"))
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        bail!("expected true or false, got {value:?}")
    }
}

/// Routes an assignment through the same handlers the options panel uses.
fn apply_assignment<P: SettingsPersistence>(
    state: &mut ModState<P>,
    assignment: &Assignment,
) -> anyhow::Result<()> {
    let key = assignment.key;
    let value = assignment.value.as_str();
    let lifecycle = &mut state.lifecycle;
    let scene = &mut state.scene;
    let outcome = match key.kind() {
        SettingKind::Preset => {
            let preset: Preset = value.parse()?;
            lifecycle.select_option(scene, key, preset.index())
        }
        SettingKind::Color => {
            let color: ColorName = value.parse()?;
            lifecycle.select_option(scene, key, color.index())
        }
        SettingKind::Flag => lifecycle.toggle_option(scene, key, parse_flag(value)?),
    }
    .with_context(|| format!("cannot set {key}"))?;
    if !outcome.saved {
        warn!("{key} changed for this session only; the settings file was not updated");
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };
    let level = loaded
        .as_ref()
        .map(|cfg| cfg.logging.level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // `RUST_LOG` wins over the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level)),
        )
        .init();

    let config = loaded.unwrap_or_else(|e| {
        warn!("{e}; using default config");
        ModConfig::default()
    });

    let mut state = match cli.settings {
        Some(path) => ModState::new(
            SettingsFile::new(path),
            EffectCollection::with_known_effects(),
        ),
        None => ModState::from_config(&config)
            .context("cannot resolve settings file location; pass --settings")?,
    };
    info!(
        "Emergency Lights Manager starting, settings at {}",
        state.lifecycle.persistence().path().display()
    );
    state.lifecycle.on_created();

    if let Some(preset) = cli.preset {
        let assignment = Assignment {
            key: SettingKey::Preset,
            value: preset.to_setting(),
        };
        apply_assignment(&mut state, &assignment)?;
    }
    for assignment in &cli.set {
        apply_assignment(&mut state, assignment)?;
    }

    let report = state.level_loaded();
    if !report.is_complete() {
        warn!("effects not found in scene: {}", report.missing.join(", "));
    }

    for light in get_light_colors(&state).data.unwrap_or_default() {
        println!(
            "{:<26} {}",
            light.effect_name,
            light.color.as_deref().unwrap_or("-")
        );
    }

    if cli.panel {
        let panel = get_panel(&mut state);
        println!("{}", serde_json::to_string_pretty(&panel)?);
    }

    state.lifecycle.on_level_unloading();
    state
        .lifecycle
        .on_released()
        .context("failed to save settings")?;

    info!("Emergency Lights Manager stopped");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
