//! Demo settings and preferences
//!
//! Persisted as JSON in LocalStorage on the web; read from the file named by
//! `BOUNCE_CANVAS_SETTINGS` on native.

use serde::{Deserialize, Serialize};

use crate::consts::{INITIAL_CIRCLES, MAX_BATCH, SPAWN_BATCH, TARGET_FPS};
use crate::error::CanvasError;
use crate::sim::{Actor, MotionTuning};

/// Demo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Spawning ===
    /// Circles spawned at startup
    pub initial_circles: usize,
    /// Actor for the startup batch
    pub initial_actor: Actor,
    /// Actor for batches spawned by mouse clicks
    pub click_actor: Actor,
    /// Circles per key press / click
    pub spawn_batch: usize,
    /// Fixed RNG seed; wall clock when absent
    pub seed: Option<u64>,

    // === Motion ===
    pub tuning: MotionTuning,

    // === Pacing / HUD ===
    /// Headless frame rate (0 = unpaced)
    pub target_fps: u32,
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_circles: INITIAL_CIRCLES,
            initial_actor: Actor::Bounce,
            click_actor: Actor::Gravity,
            spawn_batch: SPAWN_BATCH,
            seed: None,

            tuning: MotionTuning::default(),

            target_fps: TARGET_FPS,
            show_fps: true,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bounce_canvas_settings";
    /// Settings file env var (used only on native)
    #[allow(dead_code)]
    const ENV_VAR: &'static str = "BOUNCE_CANVAS_SETTINGS";

    /// Parse settings; missing fields take their defaults, out-of-range
    /// batch sizes are reset to theirs
    pub fn from_json(json: &str) -> Result<Self, CanvasError> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.initial_circles > MAX_BATCH {
            log::warn!(
                "initial_circles {} exceeds {}, using {}",
                self.initial_circles,
                MAX_BATCH,
                defaults.initial_circles
            );
            self.initial_circles = defaults.initial_circles;
        }
        if self.spawn_batch > MAX_BATCH {
            log::warn!(
                "spawn_batch {} exceeds {}, using {}",
                self.spawn_batch,
                MAX_BATCH,
                defaults.spawn_batch
            );
            self.spawn_batch = defaults.spawn_batch;
        }
        self
    }

    pub fn to_json(&self) -> Result<String, CanvasError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Configured seed, or `fallback` (usually the clock) when unset
    pub fn resolve_seed(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => match storage.set_item(Self::STORAGE_KEY, &json) {
                    Ok(()) => log::info!("Settings saved"),
                    Err(e) => log::warn!("Failed to save settings: {:?}", e),
                },
                Err(e) => log::warn!("Failed to save settings: {}", e),
            }
        }
    }

    /// Load settings from the file named by `BOUNCE_CANVAS_SETTINGS`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(&path)
            .map_err(CanvasError::from)
            .and_then(|json| Self::from_json(&json))
        {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path, e);
                Self::default()
            }
        }
    }
}
