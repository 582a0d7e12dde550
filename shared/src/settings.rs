use serde::{Deserialize, Serialize};

use crate::preset::Preset;

/// Overall colour scheme of the tracker page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteAppearance {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapStyle {
    Standard,
    Hybrid,
}

/// How often the tracker interpolates the marker position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackerSmoothness {
    Slowest,
    Smooth,
    Smoothest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Units {
    Metric,
    Imperial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationAccuracy {
    Precise,
    Approximate,
}

/// Metric shown in the main metric box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShownMetric {
    BasketsDelivered,
    CarrotsEaten,
    DistanceFromYou,
}

/// Complete set of user-facing tracker settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerSettings {
    pub site_appearance: SiteAppearance,
    pub map_style: MapStyle,
    /// Easter Bunny bouncing effect on the map marker
    pub bouncing_effect: bool,
    pub tracker_smoothness: TrackerSmoothness,
    pub units: Units,
    /// Works around grey tile seams Chromium draws between map tiles
    pub chrome_map_fix: bool,
    /// Estimated arrival time at the user's location
    pub arrival_estimate: bool,
    pub location_accuracy: LocationAccuracy,
    pub metric_shown: ShownMetric,
    pub zoom_on_stop_arrival: bool,
    pub metrics_in_next_stop_box: bool,
    pub country_flags: bool,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            site_appearance: SiteAppearance::Light,
            map_style: MapStyle::Standard,
            bouncing_effect: true,
            tracker_smoothness: TrackerSmoothness::Smooth,
            units: Units::Metric,
            chrome_map_fix: false,
            arrival_estimate: true,
            location_accuracy: LocationAccuracy::Precise,
            metric_shown: ShownMetric::BasketsDelivered,
            zoom_on_stop_arrival: true,
            metrics_in_next_stop_box: true,
            country_flags: true,
        }
    }
}

impl TrackerSettings {
    /// Settings a preset produces. Every field the preset does not mention
    /// keeps its default value.
    pub fn for_preset(preset: Preset, chromium: bool) -> Self {
        let defaults = Self::default();
        match preset {
            Preset::Defaults => defaults,
            Preset::Streamer => Self {
                site_appearance: SiteAppearance::Dark,
                map_style: MapStyle::Hybrid,
                bouncing_effect: true,
                tracker_smoothness: TrackerSmoothness::Smoothest,
                units: Units::Imperial,
                chrome_map_fix: chromium,
                arrival_estimate: false,
                location_accuracy: LocationAccuracy::Approximate,
                ..defaults
            },
            Preset::LowPerformance => Self {
                bouncing_effect: false,
                tracker_smoothness: TrackerSmoothness::Slowest,
                zoom_on_stop_arrival: false,
                metrics_in_next_stop_box: false,
                country_flags: false,
                ..defaults
            },
            #[cfg(feature = "classic")]
            Preset::Classic => Self::classic(),
        }
    }

    /// The 2019 look: dark hybrid map, no bouncing, slowest smoothness and
    /// none of the features introduced since
    pub fn classic() -> Self {
        Self {
            site_appearance: SiteAppearance::Dark,
            map_style: MapStyle::Hybrid,
            bouncing_effect: false,
            tracker_smoothness: TrackerSmoothness::Slowest,
            metric_shown: ShownMetric::BasketsDelivered,
            zoom_on_stop_arrival: false,
            arrival_estimate: false,
            metrics_in_next_stop_box: false,
            country_flags: false,
            location_accuracy: LocationAccuracy::Approximate,
            ..Self::default()
        }
    }
}
