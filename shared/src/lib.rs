//! Domain types for the tracker's reset settings section: the settings
//! record, the presets that produce it, the settings-manager contract and
//! the controller for the preset confirmation dialogs.

pub mod manager;
pub mod modal;
pub mod preset;
pub mod settings;
pub mod tab;

pub use manager::{ManagerCall, MemorySettingsManager, SettingsManager, SettingsManagerHandle};
pub use modal::{
    scroll_delay_ms, ModalAction, ModalController, ScrollRequest, Transition, SCROLL_DELAY_CLOSING_MS,
    SCROLL_DELAY_OPENING_MS,
};
pub use preset::{DialogCopy, Preset, PresetChange, SectionCopy, CLOSE_TOOLTIP};
pub use settings::{
    LocationAccuracy, MapStyle, ShownMetric, SiteAppearance, TrackerSettings, TrackerSmoothness,
    Units,
};
pub use tab::SettingsTab;

/// Why the geolocation-based metrics are unavailable, as reported by the
/// parent container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeoErrorState {
    #[default]
    None,
    PermissionDenied,
    Unavailable,
    Timeout,
}

impl GeoErrorState {
    pub fn is_error(&self) -> bool {
        !matches!(self, GeoErrorState::None)
    }

    /// Warning shown above the reset section, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GeoErrorState::None => None,
            GeoErrorState::PermissionDenied => Some(
                "Location permission was denied, so metrics based on your location are turned off. Allow location access in your browser to use them.",
            ),
            GeoErrorState::Unavailable => Some(
                "Your browser doesn't support location services, so metrics based on your location are unavailable.",
            ),
            GeoErrorState::Timeout => Some(
                "Your location couldn't be determined in time, so metrics based on your location are unavailable for now.",
            ),
        }
    }
}
