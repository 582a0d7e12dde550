use shared::{
    LocationAccuracy, MapStyle, ShownMetric, SiteAppearance, TrackerSettings, TrackerSmoothness, Units,
};
use yew::prelude::*;

fn on_off(value: bool) -> &'static str {
    if value {
        "On"
    } else {
        "Off"
    }
}

/// Label/value rows describing the current settings
pub fn settings_rows(settings: &TrackerSettings) -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "Site appearance",
            match settings.site_appearance {
                SiteAppearance::Light => "Light",
                SiteAppearance::Dark => "Dark",
            },
        ),
        (
            "Map style",
            match settings.map_style {
                MapStyle::Standard => "Standard",
                MapStyle::Hybrid => "Hybrid",
            },
        ),
        ("Easter Bunny bouncing effect", on_off(settings.bouncing_effect)),
        (
            "Tracker smoothness",
            match settings.tracker_smoothness {
                TrackerSmoothness::Slowest => "Slowest",
                TrackerSmoothness::Smooth => "Smooth",
                TrackerSmoothness::Smoothest => "Smoothest",
            },
        ),
        (
            "Tracker units",
            match settings.units {
                Units::Metric => "Metric",
                Units::Imperial => "Imperial",
            },
        ),
        ("Chrome map fix", on_off(settings.chrome_map_fix)),
        ("Easter Bunny estimated arrival time", on_off(settings.arrival_estimate)),
        (
            "Your location accuracy",
            match settings.location_accuracy {
                LocationAccuracy::Precise => "Precise",
                LocationAccuracy::Approximate => "Approximate",
            },
        ),
        (
            "Metric shown",
            match settings.metric_shown {
                ShownMetric::BasketsDelivered => "Baskets delivered",
                ShownMetric::CarrotsEaten => "Carrots eaten",
                ShownMetric::DistanceFromYou => "Distance from you",
            },
        ),
        ("Zoom in on stop arrival", on_off(settings.zoom_on_stop_arrival)),
        ("Metrics in next stop box", on_off(settings.metrics_in_next_stop_box)),
        ("Country flags in last seen & next stop boxes", on_off(settings.country_flags)),
    ]
}

#[derive(Properties, PartialEq)]
pub struct TrackerSummaryProps {
    pub settings: TrackerSettings,
}

#[function_component(TrackerSummary)]
pub fn tracker_summary(props: &TrackerSummaryProps) -> Html {
    html! {
        <table class="table table-sm tracker-summary">
            <tbody>
                { for settings_rows(&props.settings).into_iter().map(|(label, value)| html! {
                    <tr>
                        <th scope="row">{label}</th>
                        <td>{value}</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Preset;

    fn value_of(settings: &TrackerSettings, label: &str) -> &'static str {
        settings_rows(settings)
            .into_iter()
            .find(|(row, _)| *row == label)
            .map(|(_, value)| value)
            .unwrap()
    }

    #[test]
    fn test_rows_cover_every_setting() {
        assert_eq!(settings_rows(&TrackerSettings::default()).len(), 12);
    }

    #[test]
    fn test_streamer_rows() {
        let settings = TrackerSettings::for_preset(Preset::Streamer, true);
        assert_eq!(value_of(&settings, "Tracker units"), "Imperial");
        assert_eq!(value_of(&settings, "Chrome map fix"), "On");
        assert_eq!(value_of(&settings, "Your location accuracy"), "Approximate");
        assert_eq!(value_of(&settings, "Easter Bunny estimated arrival time"), "Off");
    }
}
