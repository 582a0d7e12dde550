//! # Preset Modal Controller
//!
//! Owns the visibility of the preset confirmation dialogs in the reset
//! settings section.
//!
//! ## Responsibilities:
//! - At most one preset dialog open at a time
//! - Telling the parent when the outer settings panel must hide or return
//! - Telling the view which dialog to scroll into view, and after what delay
//!
//! Every operation returns a [`Transition`] describing its outward effects.
//! The controller itself performs none of them, so the same logic drives the
//! browser component and the tests.

use crate::preset::Preset;
use crate::tab::SettingsTab;

/// Delay before scrolling an opening dialog into view (lets it mount)
pub const SCROLL_DELAY_OPENING_MS: u32 = 5;

/// Delay before scrolling after a dialog closes (lets the fade finish)
pub const SCROLL_DELAY_CLOSING_MS: u32 = 250;

/// Scroll delay for a dialog whose visibility just became `open`
pub fn scroll_delay_ms(open: bool) -> u32 {
    if open {
        SCROLL_DELAY_OPENING_MS
    } else {
        SCROLL_DELAY_CLOSING_MS
    }
}

/// Request to scroll a dialog into view once its delay has passed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub dialog_id: &'static str,
    pub delay_ms: u32,
}

impl ScrollRequest {
    fn for_preset(preset: Preset, open: bool) -> Self {
        Self {
            dialog_id: preset.dialog_id(),
            delay_ms: scroll_delay_ms(open),
        }
    }
}

/// Outward effects of a controller operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    /// New visibility of the outer settings panel, if it changes
    pub settings_panel: Option<bool>,
    /// Settings tab to switch to
    pub active_tab: Option<SettingsTab>,
    /// Preset to hand to the settings manager
    pub apply: Option<Preset>,
    pub scroll: Vec<ScrollRequest>,
}

impl Transition {
    pub fn is_noop(&self) -> bool {
        *self == Transition::default()
    }
}

/// User interaction with a preset's dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Section button clicked
    Open,
    /// Confirm button clicked
    Confirm,
    /// Header close button, footer cancel button or backdrop clicked
    Cancel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalController {
    open: Option<Preset>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_preset(&self) -> Option<Preset> {
        self.open
    }

    pub fn is_open(&self, preset: Preset) -> bool {
        self.open == Some(preset)
    }

    pub fn handle(&mut self, action: ModalAction, preset: Preset) -> Transition {
        match action {
            ModalAction::Open => self.open(preset),
            ModalAction::Confirm => self.confirm(preset),
            ModalAction::Cancel => self.cancel(preset),
        }
    }

    /// Shows `preset`'s dialog. Another open dialog is closed first; the
    /// settings panel is only hidden when no dialog was showing.
    pub fn open(&mut self, preset: Preset) -> Transition {
        match self.open {
            Some(current) if current == preset => Transition::default(),
            Some(current) => {
                self.open = Some(preset);
                Transition {
                    scroll: vec![
                        ScrollRequest::for_preset(current, false),
                        ScrollRequest::for_preset(preset, true),
                    ],
                    ..Transition::default()
                }
            }
            None => {
                self.open = Some(preset);
                Transition {
                    settings_panel: Some(false),
                    scroll: vec![ScrollRequest::for_preset(preset, true)],
                    ..Transition::default()
                }
            }
        }
    }

    /// Applies `preset` and closes its dialog. The settings panel stays
    /// hidden; the parent is moved to the tracker tab instead.
    pub fn confirm(&mut self, preset: Preset) -> Transition {
        if !self.is_open(preset) {
            return Transition::default();
        }
        self.open = None;
        Transition {
            active_tab: Some(SettingsTab::Tracker),
            apply: Some(preset),
            scroll: vec![ScrollRequest::for_preset(preset, false)],
            ..Transition::default()
        }
    }

    /// Closes `preset`'s dialog without applying it and brings the settings
    /// panel back.
    pub fn cancel(&mut self, preset: Preset) -> Transition {
        if !self.is_open(preset) {
            return Transition::default();
        }
        self.open = None;
        Transition {
            settings_panel: Some(true),
            scroll: vec![ScrollRequest::for_preset(preset, false)],
            ..Transition::default()
        }
    }
}
