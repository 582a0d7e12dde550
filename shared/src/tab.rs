use std::fmt;

/// Tabs of the outer settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SettingsTab {
    /// Where a freshly applied preset can be reviewed
    #[default]
    Tracker,
    Reset,
}

impl SettingsTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsTab::Tracker => "tracker",
            SettingsTab::Reset => "reset",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::Tracker => "Tracker",
            SettingsTab::Reset => "Reset",
        }
    }

    pub fn all() -> &'static [SettingsTab] {
        &[SettingsTab::Tracker, SettingsTab::Reset]
    }
}

impl fmt::Display for SettingsTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_tab_name() {
        assert_eq!(SettingsTab::Tracker.as_str(), "tracker");
        assert_eq!(SettingsTab::Tracker.to_string(), "tracker");
        assert_eq!(SettingsTab::default(), SettingsTab::Tracker);
    }

    #[test]
    fn test_tab_order() {
        assert_eq!(SettingsTab::all(), &[SettingsTab::Tracker, SettingsTab::Reset]);
        assert_eq!(SettingsTab::Reset.label(), "Reset");
    }
}
