use shared::{Preset, PresetChange, CLOSE_TOOLTIP};
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PresetModalProps {
    pub preset: Preset,
    pub is_open: bool,
    /// Settings manager's browser capability answer for this render
    pub chromium: bool,
    pub on_confirm: Callback<Preset>,
    pub on_cancel: Callback<Preset>,
}

/// Closed dialogs keep their layout box and fade out through CSS, so the
/// dialog element stays a scroll target while the fade runs.
fn modal_class(is_open: bool) -> &'static str {
    if is_open {
        "modal fade show"
    } else {
        "modal fade"
    }
}

fn render_change(change: &PresetChange) -> Html {
    html! {
        <li>
            {"The "}<b>{change.setting}</b>{" is set to "}<b>{change.value}</b>{"."}
            if !change.note.is_empty() {
                <>{" "}{change.note}</>
            }
        </li>
    }
}

/// Confirmation dialog in front of a settings preset.
///
/// The dialog is never unmounted; `show` alone decides whether it is visible.
#[function_component(PresetModal)]
pub fn preset_modal(props: &PresetModalProps) -> Html {
    let preset = props.preset;
    let copy = preset.dialog();
    let changes = preset.changes(props.chromium);

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| {
            on_cancel.emit(preset);
        })
    };

    let on_confirm_click = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| {
            on_confirm.emit(preset);
        })
    };

    let on_backdrop_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_cancel.emit(preset);
        })
    };

    let on_dialog_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    html! {
        <div
            id={preset.modal_id()}
            class={modal_class(props.is_open)}
            tabindex="-1"
            aria-hidden={(!props.is_open).to_string()}
            onclick={on_backdrop_click}
        >
            <div id={preset.dialog_id()} class="modal-dialog" onclick={on_dialog_click}>
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{copy.title}</h5>
                        <button class="btn-close" onclick={on_cancel_click.clone()} title={CLOSE_TOOLTIP}></button>
                    </div>
                    <div class="modal-body">
                        { for copy.intro.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                        if !changes.is_empty() {
                            <ul>
                                { for changes.iter().map(render_change) }
                            </ul>
                        }
                        <p>{copy.outro}</p>
                        if let Some(reminder) = copy.reminder {
                            <p><strong>{"Remember:"}</strong>{" "}{reminder}</p>
                        }
                    </div>
                    <div class="modal-footer">
                        <button class="btn btn-secondary" onclick={on_cancel_click} title={CLOSE_TOOLTIP}>
                            {copy.dismiss_label}
                        </button>
                        <button class="btn btn-primary" onclick={on_confirm_click} title={copy.confirm_tooltip}>
                            {"Confirm"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
