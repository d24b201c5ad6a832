//! Viewer settings and preferences
//!
//! Persisted separately from the scene (which is never persisted) in
//! LocalStorage.

use serde::{Deserialize, Serialize};

use crate::scene::SceneConfig;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Background particle population for this preset
    pub fn background_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 10,
            QualityPreset::Medium => 40,
            QualityPreset::High => 120,
        }
    }

    /// Decorative shape population
    pub fn shapes(&self) -> usize {
        match self {
            QualityPreset::Low => 4,
            QualityPreset::Medium => 12,
            QualityPreset::High => 24,
        }
    }

    /// Concentric glow circles per electron
    pub fn glow_layers(&self) -> u32 {
        match self {
            QualityPreset::Low => 1,
            QualityPreset::Medium => 3,
            QualityPreset::High => 5,
        }
    }
}

/// Viewer settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Orbit guide rings
    pub orbit_guides: bool,
    /// Entanglement links between electrons (and cat)
    pub entanglement: bool,
    /// Link from the cat to its nearest electron
    pub cat_link: bool,

    // === Accessibility ===
    /// Reduced motion (skip pointer-driven impulses)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            orbit_guides: true,
            entanglement: true,
            cat_link: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Scene configuration reflecting these preferences
    pub fn scene_config(&self) -> SceneConfig {
        SceneConfig {
            background_count: self.quality.background_particles(),
            shape_count: self.quality.shapes(),
            glow_layers: self.quality.glow_layers(),
            orbit_guides: self.orbit_guides,
            entanglement: self.entanglement,
            cat_link: self.cat_link,
            ..SceneConfig::default()
        }
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "atom_glow_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
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
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
