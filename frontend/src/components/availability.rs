use shared::GeoErrorState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LsUnavailableProps {
    pub available: bool,
}

/// Warning shown when settings cannot be kept between visits
#[function_component(LsUnavailable)]
pub fn ls_unavailable(props: &LsUnavailableProps) -> Html {
    if props.available {
        return html! {};
    }

    html! {
        <div class="alert alert-warning" role="alert">
            <b>{"Your settings won't be saved."}</b>
            {" Your browser is blocking local storage, so any changes made here only last until you close this tab."}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GeoApiUnavailableProps {
    pub error_state: GeoErrorState,
}

#[function_component(GeoApiUnavailable)]
pub fn geo_api_unavailable(props: &GeoApiUnavailableProps) -> Html {
    if !props.error_state.is_error() {
        return html! {};
    }

    html! {
        <div class="alert alert-warning" role="alert">
            { props.error_state.message().unwrap_or_default() }
        </div>
    }
}
