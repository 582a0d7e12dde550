use std::fmt;

use crate::manager::SettingsManager;

/// A named bundle of settings applied in one settings-manager call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Everything back to defaults
    Defaults,
    /// Optimized for live streaming (hides location)
    Streamer,
    /// Optimized for slow devices or battery saving
    LowPerformance,
    /// Makes the tracker look like its 2019 edition
    #[cfg(feature = "classic")]
    Classic,
}

/// Static text for the section entry that opens a preset's dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCopy {
    pub heading: &'static str,
    pub button_tooltip: &'static str,
    pub description: &'static str,
}

/// Static text for a preset's confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogCopy {
    pub title: &'static str,
    /// Paragraphs shown before the change list
    pub intro: &'static [&'static str],
    /// Paragraph shown after the change list
    pub outro: &'static str,
    pub reminder: Option<&'static str>,
    /// Caption of the footer button that dismisses without applying
    pub dismiss_label: &'static str,
    pub confirm_tooltip: &'static str,
}

/// One line of a dialog's change list: "The <setting> is set to <value>. <note>"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetChange {
    pub setting: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

impl PresetChange {
    const fn new(setting: &'static str, value: &'static str, note: &'static str) -> Self {
        Self { setting, value, note }
    }
}

/// Tooltip shared by every close/cancel button
pub const CLOSE_TOOLTIP: &str = "Click to close this modal";

impl Preset {
    /// Presets in the order the section lists them
    pub fn all() -> &'static [Preset] {
        &[
            Preset::Defaults,
            Preset::Streamer,
            Preset::LowPerformance,
            #[cfg(feature = "classic")]
            Preset::Classic,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Defaults => "defaults",
            Preset::Streamer => "streamer",
            Preset::LowPerformance => "low_performance",
            #[cfg(feature = "classic")]
            Preset::Classic => "classic",
        }
    }

    /// Element id of the dialog, used as scroll target
    pub fn dialog_id(&self) -> &'static str {
        match self {
            Preset::Defaults => "resetModalDialog",
            Preset::Streamer => "streamerModalDialog",
            Preset::LowPerformance => "lowPerfModalDialog",
            #[cfg(feature = "classic")]
            Preset::Classic => "classicModalDialog",
        }
    }

    /// Element id of the modal wrapper around the dialog
    pub fn modal_id(&self) -> &'static str {
        match self {
            Preset::Defaults => "resetModal",
            Preset::Streamer => "streamerModal",
            Preset::LowPerformance => "lowPerfModal",
            #[cfg(feature = "classic")]
            Preset::Classic => "classicModal",
        }
    }

    /// Calls the one settings-manager mutator that applies this preset
    pub fn apply(&self, manager: &dyn SettingsManager) {
        match self {
            Preset::Defaults => manager.set_defaults(),
            Preset::Streamer => manager.set_streamer(),
            Preset::LowPerformance => manager.set_lowperf(),
            #[cfg(feature = "classic")]
            Preset::Classic => manager.set_classic(),
        }
    }

    pub fn section(&self) -> SectionCopy {
        match self {
            Preset::Defaults => SectionCopy {
                heading: "Reset settings to default",
                button_tooltip: "Click to confirm if you want to reset settings to default",
                description: "Resets all settings to their defaults.",
            },
            Preset::Streamer => SectionCopy {
                heading: "Optimize settings for live streaming",
                button_tooltip: "Click to confirm if you want to reset settings to optimized for live streaming",
                description: "Configure the tracker to settings optimized for live streaming.",
            },
            Preset::LowPerformance => SectionCopy {
                heading: "Optimize settings for low performance",
                button_tooltip: "Click to confirm if you want to reset settings to optimized for low performance",
                description: "Configure the tracker to settings optimized for devices with low performance, or to save battery power.",
            },
            #[cfg(feature = "classic")]
            Preset::Classic => SectionCopy {
                heading: "Reset settings to OG tracker mode",
                button_tooltip: "Click to confirm if you want to reset settings to classic mode",
                description: "The tracker has come a long way since our first year tracking in 2019. You can reset the tracker to make it \"look\" like what it was back in 2019!",
            },
        }
    }

    pub fn dialog(&self) -> DialogCopy {
        match self {
            Preset::Defaults => DialogCopy {
                title: "Reset settings to default?",
                intro: &[
                    "This will reset any customized tracker settings back to their defaults. This action can't be undone.",
                ],
                outro: "If you're okay with this, click the confirm button. Otherwise, click the cancel button.",
                reminder: None,
                dismiss_label: "Close",
                confirm_tooltip: "Click to reset tracker settings to default",
            },
            Preset::Streamer => DialogCopy {
                title: "Optimize settings for live streaming?",
                intro: &[
                    "When streaming the tracker we recommend running these settings.",
                    "Turning these settings on disables all location related settings so you don't accidentally leak your location.",
                ],
                outro: "All remaining tracker settings are set to their defaults. To continue press confirm, to cancel press cancel.",
                reminder: Some("You can always reset your settings to revert back!"),
                dismiss_label: "Cancel",
                confirm_tooltip: "Click to reset tracker settings to optimized for live streaming",
            },
            Preset::LowPerformance => DialogCopy {
                title: "Optimize settings for low performance?",
                intro: &[
                    "If you're experiencing poor tracker performance on your device (or want to save battery power on mobile devices), we provide a set of settings that can help improve the performance of the tracker at the expense of disabling some features.",
                ],
                outro: "If you're okay with these settings being changed, click on the confirm button. Otherwise, click on the cancel button.",
                reminder: None,
                dismiss_label: "Cancel",
                confirm_tooltip: "Click to reset tracker settings to optimized for low performance",
            },
            #[cfg(feature = "classic")]
            Preset::Classic => DialogCopy {
                title: "Want to go back in time?",
                intro: &[
                    "The tracker has evolved by quite a lot since 2019. If you joined us back in 2019 for our first year of tracking, or are just curious to see what the tracker \"looked\" like, we provide some settings so you can go back in time! In short:",
                ],
                outro: "All remaining tracker settings are set to their defaults. If you're okay with these settings being changed, click the confirm button. Otherwise, click the cancel button.",
                reminder: None,
                dismiss_label: "Close",
                confirm_tooltip: "Click to reset tracker settings to classic mode",
            },
        }
    }

    /// Setting changes listed in the dialog body. `chromium` is the
    /// settings manager's browser capability answer for this render.
    pub fn changes(&self, chromium: bool) -> Vec<PresetChange> {
        match self {
            Preset::Defaults | Preset::LowPerformance => Vec::new(),
            Preset::Streamer => {
                let mut changes = vec![
                    PresetChange::new("Site appearance", "Dark", "The Map style is set to Hybrid. This style is preferred by viewers."),
                    PresetChange::new("Easter Bunny bouncing effect", "On", "Viewers prefer the bouncing effect."),
                    PresetChange::new("Tracker smoothness", "Smoothest", "Feel free to lower this if your machine lags on Smoothest."),
                    PresetChange::new("Tracker units", "Imperial", ""),
                ];
                if chromium {
                    changes.push(PresetChange::new(
                        "Chrome map fix",
                        "On",
                        "This way you don't see grey lines on the map since you're using a Chrome-based browser.",
                    ));
                }
                changes.push(PresetChange::new(
                    "Easter Bunny estimated arrival time",
                    "Off",
                    "This protects your privacy on stream.",
                ));
                changes.push(PresetChange::new(
                    "Your location accuracy",
                    "Approximate",
                    "This further preserves your privacy in case you show the distance from you metric on stream.",
                ));
                changes
            }
            #[cfg(feature = "classic")]
            Preset::Classic => vec![
                PresetChange::new("Site appearance", "Dark", "The Map style is set to Hybrid because that's what it was back in 2019."),
                PresetChange::new("Easter Bunny bouncing effect", "Off", "Of course this was off for our first year."),
                PresetChange::new("Metric shown", "Baskets delivered", "That was the only metric available back in 2019."),
                PresetChange::new("Tracker smoothness", "Slowest", "This was the default smoothness setting from 2019 to 2022."),
                PresetChange::new("Zoom in on stop arrival", "Off", ""),
                PresetChange::new("Easter Bunny estimated arrival time", "Off", "This feature was introduced in 2020!"),
                PresetChange::new("Metrics in next stop box", "Off", "This feature was introduced in 2021."),
                PresetChange::new("Country flags in last seen & next stop boxes", "Off", "This feature was introduced in 2022."),
                PresetChange::new("Your location accuracy", "Approximate", "But no cheating and using the distance from you metric."),
            ],
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::{ManagerCall, MemorySettingsManager};

    #[test]
    fn test_section_order() {
        assert_eq!(
            &Preset::all()[..3],
            &[Preset::Defaults, Preset::Streamer, Preset::LowPerformance]
        );
    }

    #[test]
    fn test_dialog_ids() {
        assert_eq!(Preset::Defaults.dialog_id(), "resetModalDialog");
        assert_eq!(Preset::Streamer.dialog_id(), "streamerModalDialog");
        assert_eq!(Preset::LowPerformance.dialog_id(), "lowPerfModalDialog");
        assert_eq!(Preset::LowPerformance.modal_id(), "lowPerfModal");
    }

    #[test]
    fn test_apply_calls_exactly_one_mutator() {
        let expected = [
            (Preset::Defaults, ManagerCall::SetDefaults),
            (Preset::Streamer, ManagerCall::SetStreamer),
            (Preset::LowPerformance, ManagerCall::SetLowPerf),
        ];

        for (preset, call) in expected {
            let manager = MemorySettingsManager::new(false, true);
            preset.apply(&manager);
            assert_eq!(manager.calls(), vec![call]);
        }
    }

    #[test]
    fn test_chrome_map_fix_line_only_on_chromium() {
        let mentions_fix = |chromium| {
            Preset::Streamer
                .changes(chromium)
                .iter()
                .any(|change| change.setting == "Chrome map fix")
        };
        assert!(mentions_fix(true));
        assert!(!mentions_fix(false));
        assert_eq!(
            Preset::Streamer.changes(true).len(),
            Preset::Streamer.changes(false).len() + 1
        );
    }

    #[test]
    fn test_other_presets_list_no_changes() {
        assert!(Preset::Defaults.changes(true).is_empty());
        assert!(Preset::LowPerformance.changes(true).is_empty());
    }

    #[test]
    fn test_dismiss_labels() {
        assert_eq!(Preset::Defaults.dialog().dismiss_label, "Close");
        assert_eq!(Preset::Streamer.dialog().dismiss_label, "Cancel");
        assert_eq!(Preset::LowPerformance.dialog().dismiss_label, "Cancel");
        assert!(Preset::Streamer.dialog().reminder.is_some());
    }

    #[test]
    fn test_preset_names_are_unique() {
        let mut names: Vec<_> = Preset::all().iter().map(|preset| preset.to_string()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Preset::all().len());
    }

    #[cfg(feature = "classic")]
    #[test]
    fn test_classic_preset_is_listed_last() {
        assert_eq!(Preset::all().last(), Some(&Preset::Classic));
        assert_eq!(Preset::all().len(), 4);
    }

    #[cfg(feature = "classic")]
    #[test]
    fn test_classic_preset_ids_and_copy() {
        assert_eq!(Preset::Classic.dialog_id(), "classicModalDialog");
        assert_eq!(Preset::Classic.modal_id(), "classicModal");
        assert_eq!(Preset::Classic.dialog().dismiss_label, "Close");
        assert_eq!(Preset::Classic.changes(false).len(), 9);
        assert_eq!(Preset::Classic.changes(true), Preset::Classic.changes(false));
    }

    #[cfg(feature = "classic")]
    #[test]
    fn test_classic_apply_calls_set_classic() {
        let manager = MemorySettingsManager::new(false, true);
        Preset::Classic.apply(&manager);
        assert_eq!(manager.calls(), vec![ManagerCall::SetClassic]);
        assert_eq!(manager.settings(), crate::settings::TrackerSettings::classic());
    }
}
