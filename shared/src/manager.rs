use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::preset::Preset;
use crate::settings::TrackerSettings;

/// Owner of the user's tracker settings.
///
/// The reset section never touches settings directly; it only asks the
/// manager to apply a preset and queries two capabilities. Mutators take
/// `&self` because the manager is shared with the rest of the UI through
/// an `Rc`.
pub trait SettingsManager {
    fn set_defaults(&self);
    fn set_lowperf(&self);
    fn set_streamer(&self);
    /// Applies the 2019 look. Always part of the contract; only the section
    /// entry offering it is behind the `classic` feature.
    fn set_classic(&self);

    /// Whether the page runs in a Chromium-based browser
    fn is_chromium_browser(&self) -> bool;

    /// Whether settings can be persisted between visits
    fn ls_available(&self) -> bool;
}

/// Shared handle to a settings manager, comparable by identity so it can
/// sit in component properties.
#[derive(Clone)]
pub struct SettingsManagerHandle(Rc<dyn SettingsManager>);

impl SettingsManagerHandle {
    pub fn new(manager: Rc<dyn SettingsManager>) -> Self {
        Self(manager)
    }
}

impl std::ops::Deref for SettingsManagerHandle {
    type Target = dyn SettingsManager;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for SettingsManagerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SettingsManagerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsManagerHandle")
            .field("chromium", &self.0.is_chromium_browser())
            .field("ls_available", &self.0.ls_available())
            .finish()
    }
}

/// Record of a mutator invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerCall {
    SetDefaults,
    SetLowPerf,
    SetStreamer,
    SetClassic,
}

/// Settings manager that keeps everything in memory.
///
/// Capabilities are fixed at construction. Every mutator call is journaled
/// so callers can tell which preset was applied last.
#[derive(Debug)]
pub struct MemorySettingsManager {
    settings: RefCell<TrackerSettings>,
    calls: RefCell<Vec<ManagerCall>>,
    chromium: bool,
    ls_available: bool,
}

impl MemorySettingsManager {
    pub fn new(chromium: bool, ls_available: bool) -> Self {
        Self {
            settings: RefCell::new(TrackerSettings::default()),
            calls: RefCell::new(Vec::new()),
            chromium,
            ls_available,
        }
    }

    pub fn settings(&self) -> TrackerSettings {
        self.settings.borrow().clone()
    }

    pub fn calls(&self) -> Vec<ManagerCall> {
        self.calls.borrow().clone()
    }

    fn store(&self, settings: TrackerSettings, call: ManagerCall) {
        *self.settings.borrow_mut() = settings;
        self.calls.borrow_mut().push(call);
    }

    fn apply(&self, preset: Preset, call: ManagerCall) {
        self.store(TrackerSettings::for_preset(preset, self.chromium), call);
    }
}

impl SettingsManager for MemorySettingsManager {
    fn set_defaults(&self) {
        self.apply(Preset::Defaults, ManagerCall::SetDefaults);
    }

    fn set_lowperf(&self) {
        self.apply(Preset::LowPerformance, ManagerCall::SetLowPerf);
    }

    fn set_streamer(&self) {
        self.apply(Preset::Streamer, ManagerCall::SetStreamer);
    }

    fn set_classic(&self) {
        self.store(TrackerSettings::classic(), ManagerCall::SetClassic);
    }

    fn is_chromium_browser(&self) -> bool {
        self.chromium
    }

    fn ls_available(&self) -> bool {
        self.ls_available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Units;

    #[test]
    fn test_mutators_replace_settings() {
        let manager = MemorySettingsManager::new(true, true);
        manager.set_streamer();
        assert_eq!(manager.settings().units, Units::Imperial);
        assert!(manager.settings().chrome_map_fix);

        manager.set_defaults();
        assert_eq!(manager.settings(), TrackerSettings::default());
        assert_eq!(
            manager.calls(),
            vec![ManagerCall::SetStreamer, ManagerCall::SetDefaults]
        );
    }

    #[test]
    fn test_set_classic_stores_classic_settings() {
        let manager = MemorySettingsManager::new(true, true);
        manager.set_classic();
        assert_eq!(manager.settings(), TrackerSettings::classic());
        assert_eq!(manager.calls(), vec![ManagerCall::SetClassic]);
    }

    #[test]
    fn test_capabilities_are_reported() {
        let manager = MemorySettingsManager::new(false, false);
        assert!(!manager.is_chromium_browser());
        assert!(!manager.ls_available());
        assert!(manager.calls().is_empty());
    }

    #[test]
    fn test_handle_compares_by_identity() {
        let manager: Rc<dyn SettingsManager> = Rc::new(MemorySettingsManager::new(false, true));
        let a = SettingsManagerHandle::new(manager.clone());
        let b = SettingsManagerHandle::new(manager);
        let c = SettingsManagerHandle::new(Rc::new(MemorySettingsManager::new(false, true)));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.ls_available());
    }
}
