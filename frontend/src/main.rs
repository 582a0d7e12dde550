mod components;
mod hooks;
mod services;

use std::rc::Rc;

use components::reset_settings::ResetSettings;
use components::tracker_summary::TrackerSummary;
use services::logging::Logger;
use services::settings_manager::BrowserSettingsManager;
use shared::{SettingsManagerHandle, SettingsTab};
use web_sys::MouseEvent;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let manager = use_memo((), |_| Rc::new(BrowserSettingsManager::detect()));
    let manager_handle = use_memo((), {
        let manager = manager.clone();
        move |_| {
            let manager: Rc<BrowserSettingsManager> = (*manager).clone();
            SettingsManagerHandle::new(manager)
        }
    });
    let geo_error_state = use_memo((), |_| services::dom::geolocation_state());

    let settings_open = use_state(|| false);
    let active_tab = use_state(SettingsTab::default);

    let toggle_settings = {
        let settings_open = settings_open.clone();
        Callback::from(move |_: MouseEvent| {
            settings_open.set(!*settings_open);
        })
    };

    let on_settings_modal = {
        let settings_open = settings_open.clone();
        Callback::from(move |visible: bool| {
            settings_open.set(visible);
        })
    };

    let on_active_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: SettingsTab| {
            Logger::debug_with_component("App", &format!("Switching settings tab to {}", tab));
            active_tab.set(tab);
        })
    };

    let tabs = SettingsTab::all().iter().map(|&tab| {
        let on_active_tab = on_active_tab.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_active_tab.emit(tab));
        html! {
            <li class="nav-item">
                <button
                    class={classes!("nav-link", (*active_tab == tab).then_some("active"))}
                    {onclick}
                >
                    {tab.label()}
                </button>
            </li>
        }
    });

    let tab_body = match *active_tab {
        SettingsTab::Tracker => html! { <TrackerSummary settings={manager.settings()} /> },
        SettingsTab::Reset => html! {
            <ResetSettings
                settings_manager={(*manager_handle).clone()}
                geo_error_state={*geo_error_state}
                {on_settings_modal}
                on_active_tab={on_active_tab.clone()}
            />
        },
    };

    // The panel is hidden rather than unmounted so an open preset dialog
    // keeps its state while the panel is out of the way.
    html! {
        <div class="tracker-app">
            <button class="settings-button" onclick={toggle_settings} aria-label="Settings" title="Settings">
                {"⚙"}
            </button>
            <div class="settings-panel" hidden={!*settings_open}>
                <h4>{"Settings"}</h4>
                <ul class="nav nav-tabs">
                    { for tabs }
                </ul>
                <div class="settings-tab-body">
                    { tab_body }
                </div>
            </div>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
