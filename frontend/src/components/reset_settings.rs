use std::cell::RefCell;

use shared::{
    GeoErrorState, ModalAction, ModalController, Preset, ScrollRequest, SettingsManagerHandle,
    SettingsTab, Transition,
};
use web_sys::MouseEvent;
use yew::prelude::*;

use super::availability::{GeoApiUnavailable, LsUnavailable};
use super::preset_modal::PresetModal;
use crate::hooks::use_scroll_into_view::{use_scroll_into_view, ScrollBatch};
use crate::services::{dom, logging::Logger};

const COMPONENT: &str = "ResetSettings";

#[derive(Properties, PartialEq)]
pub struct ResetSettingsProps {
    pub settings_manager: SettingsManagerHandle,
    #[prop_or_default]
    pub geo_error_state: GeoErrorState,
    /// Shows (`true`) or hides (`false`) the outer settings panel
    pub on_settings_modal: Callback<bool>,
    pub on_active_tab: Callback<SettingsTab>,
}

/// Where the section sends the effects of a modal transition
#[derive(Clone)]
pub struct SectionEffects {
    pub settings_manager: SettingsManagerHandle,
    pub on_settings_modal: Callback<bool>,
    pub on_active_tab: Callback<SettingsTab>,
    pub on_scroll: Callback<Vec<ScrollRequest>>,
}

impl SectionEffects {
    pub fn perform(&self, transition: Transition) {
        if let Some(preset) = transition.apply {
            preset.apply(&*self.settings_manager);
        }
        if !transition.scroll.is_empty() {
            self.on_scroll.emit(transition.scroll);
        }
        if let Some(visible) = transition.settings_panel {
            self.on_settings_modal.emit(visible);
        }
        if let Some(tab) = transition.active_tab {
            self.on_active_tab.emit(tab);
        }
    }
}

/// Runs `action` against the current controller state and performs the
/// resulting effects. Returns the transition, or `None` when nothing changed.
pub fn dispatch_action(
    controller: &RefCell<ModalController>,
    effects: &SectionEffects,
    action: ModalAction,
    preset: Preset,
) -> Option<Transition> {
    let transition = controller.borrow_mut().handle(action, preset);
    if transition.is_noop() {
        return None;
    }
    effects.perform(transition.clone());
    Some(transition)
}

/// Settings section offering the presets, each behind a confirmation dialog
#[function_component(ResetSettings)]
pub fn reset_settings(props: &ResetSettingsProps) -> Html {
    let controller = use_mut_ref(ModalController::new);
    let rerender = use_force_update();
    let scroll_batch = use_reducer(ScrollBatch::default);
    let modal_host = use_memo((), |_| {
        let host = dom::modal_host();
        if host.is_none() {
            Logger::error_with_component(COMPONENT, "No document body, rendering dialogs inline");
        }
        host
    });

    use_scroll_into_view((*scroll_batch).clone());

    let effects = SectionEffects {
        settings_manager: props.settings_manager.clone(),
        on_settings_modal: props.on_settings_modal.clone(),
        on_active_tab: props.on_active_tab.clone(),
        on_scroll: {
            let scroll_batch = scroll_batch.clone();
            Callback::from(move |requests: Vec<ScrollRequest>| scroll_batch.dispatch(requests))
        },
    };

    let dispatch = {
        let controller = controller.clone();
        Callback::from(move |(action, preset): (ModalAction, Preset)| {
            if let Some(transition) = dispatch_action(&controller, &effects, action, preset) {
                Logger::debug_with_component(
                    COMPONENT,
                    &format!("{:?} {} -> {:?}", action, preset, transition),
                );
                rerender.force_update();
            }
        })
    };

    let on_confirm = dispatch.reform(|preset: Preset| (ModalAction::Confirm, preset));
    let on_cancel = dispatch.reform(|preset: Preset| (ModalAction::Cancel, preset));

    // Capability query is read on every render
    let chromium = props.settings_manager.is_chromium_browser();
    let open_preset = controller.borrow().open_preset();
    let presets = Preset::all();

    let sections = presets.iter().enumerate().map(|(index, &preset)| {
        let copy = preset.section();
        let onclick = dispatch.reform(move |_: MouseEvent| (ModalAction::Open, preset));

        html! {
            <>
                <h5>{copy.heading}</h5>
                <button
                    class="btn btn-primary"
                    style="margin-top: 6px; margin-bottom: 5px;"
                    title={copy.button_tooltip}
                    {onclick}
                >
                    {copy.heading}
                </button>
                <br />
                <small>{copy.description}</small>
                if index + 1 < presets.len() {
                    <hr />
                }
            </>
        }
    });

    let modals = html! {
        <>
            { for presets.iter().map(|&preset| html! {
                <PresetModal
                    key={preset.as_str()}
                    {preset}
                    is_open={open_preset == Some(preset)}
                    {chromium}
                    on_confirm={on_confirm.clone()}
                    on_cancel={on_cancel.clone()}
                />
            }) }
        </>
    };

    let modals = match (*modal_host).clone() {
        Some(host) => yew::create_portal(modals, host),
        None => modals,
    };

    html! {
        <div class="reset-settings">
            <LsUnavailable available={props.settings_manager.ls_available()} />
            <GeoApiUnavailable error_state={props.geo_error_state} />
            { for sections }
            { modals }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ManagerCall, MemorySettingsManager};
    use std::rc::Rc;

    /// Section effects wired to in-memory recorders instead of a parent
    struct Harness {
        manager: Rc<MemorySettingsManager>,
        controller: RefCell<ModalController>,
        effects: SectionEffects,
        panel: Rc<RefCell<Vec<bool>>>,
        tabs: Rc<RefCell<Vec<SettingsTab>>>,
        scrolls: Rc<RefCell<Vec<ScrollRequest>>>,
    }

    impl Harness {
        fn new(chromium: bool) -> Self {
            let manager = Rc::new(MemorySettingsManager::new(chromium, true));
            let panel = Rc::new(RefCell::new(Vec::new()));
            let tabs = Rc::new(RefCell::new(Vec::new()));
            let scrolls = Rc::new(RefCell::new(Vec::new()));

            let effects = SectionEffects {
                settings_manager: SettingsManagerHandle::new(manager.clone()),
                on_settings_modal: {
                    let panel = panel.clone();
                    Callback::from(move |visible: bool| panel.borrow_mut().push(visible))
                },
                on_active_tab: {
                    let tabs = tabs.clone();
                    Callback::from(move |tab: SettingsTab| tabs.borrow_mut().push(tab))
                },
                on_scroll: {
                    let scrolls = scrolls.clone();
                    Callback::from(move |requests: Vec<ScrollRequest>| {
                        scrolls.borrow_mut().extend(requests)
                    })
                },
            };

            Self {
                manager,
                controller: RefCell::new(ModalController::new()),
                effects,
                panel,
                tabs,
                scrolls,
            }
        }

        fn run(&self, action: ModalAction, preset: Preset) -> bool {
            dispatch_action(&self.controller, &self.effects, action, preset).is_some()
        }
    }

    #[test]
    fn test_open_hides_panel_and_scrolls_dialog() {
        let harness = Harness::new(false);
        assert!(harness.run(ModalAction::Open, Preset::Defaults));

        assert!(harness.controller.borrow().is_open(Preset::Defaults));
        assert_eq!(*harness.panel.borrow(), vec![false]);
        assert!(harness.tabs.borrow().is_empty());
        assert!(harness.manager.calls().is_empty());
        assert_eq!(
            *harness.scrolls.borrow(),
            vec![ScrollRequest { dialog_id: "resetModalDialog", delay_ms: 5 }]
        );
    }

    #[test]
    fn test_low_performance_confirm_applies_and_switches_tab() {
        let harness = Harness::new(false);
        harness.run(ModalAction::Open, Preset::LowPerformance);
        assert!(harness.run(ModalAction::Confirm, Preset::LowPerformance));

        assert_eq!(harness.manager.calls(), vec![ManagerCall::SetLowPerf]);
        assert_eq!(harness.controller.borrow().open_preset(), None);
        assert_eq!(*harness.tabs.borrow(), vec![SettingsTab::Tracker]);
        // Panel hidden on open and not brought back by confirm
        assert_eq!(*harness.panel.borrow(), vec![false]);
        assert_eq!(
            harness.scrolls.borrow().last(),
            Some(&ScrollRequest { dialog_id: "lowPerfModalDialog", delay_ms: 250 })
        );
    }

    #[test]
    fn test_streaming_cancel_restores_panel() {
        let harness = Harness::new(true);
        harness.run(ModalAction::Open, Preset::Streamer);
        assert!(harness.run(ModalAction::Cancel, Preset::Streamer));

        assert!(harness.manager.calls().is_empty());
        assert_eq!(harness.controller.borrow().open_preset(), None);
        assert_eq!(*harness.panel.borrow(), vec![false, true]);
        assert!(harness.tabs.borrow().is_empty());
    }

    #[test]
    fn test_each_confirm_calls_one_mutator() {
        let expected = [
            (Preset::Defaults, ManagerCall::SetDefaults),
            (Preset::Streamer, ManagerCall::SetStreamer),
            (Preset::LowPerformance, ManagerCall::SetLowPerf),
            #[cfg(feature = "classic")]
            (Preset::Classic, ManagerCall::SetClassic),
        ];

        for (preset, call) in expected {
            let harness = Harness::new(false);
            harness.run(ModalAction::Open, preset);
            harness.run(ModalAction::Confirm, preset);
            assert_eq!(harness.manager.calls(), vec![call]);
            assert!(!harness.controller.borrow().is_open(preset));
        }
    }

    #[test]
    fn test_unchanged_state_emits_nothing() {
        let harness = Harness::new(false);
        assert!(!harness.run(ModalAction::Confirm, Preset::Streamer));
        assert!(!harness.run(ModalAction::Cancel, Preset::Streamer));

        harness.run(ModalAction::Open, Preset::Streamer);
        assert!(!harness.run(ModalAction::Open, Preset::Streamer));

        assert_eq!(*harness.panel.borrow(), vec![false]);
        assert_eq!(harness.scrolls.borrow().len(), 1);
        assert!(harness.manager.calls().is_empty());
    }

    #[test]
    fn test_switching_presets_keeps_panel_hidden() {
        let harness = Harness::new(false);
        harness.run(ModalAction::Open, Preset::Streamer);
        harness.run(ModalAction::Open, Preset::LowPerformance);

        assert_eq!(harness.controller.borrow().open_preset(), Some(Preset::LowPerformance));
        assert_eq!(*harness.panel.borrow(), vec![false]);
    }
}
