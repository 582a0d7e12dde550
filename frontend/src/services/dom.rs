use shared::GeoErrorState;
use web_sys::Element;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScrollError {
    #[error("no browser window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingElement(String),
}

fn document() -> Result<web_sys::Document, ScrollError> {
    web_sys::window()
        .ok_or(ScrollError::NoWindow)?
        .document()
        .ok_or(ScrollError::NoDocument)
}

/// Scrolls the element with the given id into view
pub fn scroll_into_view(id: &str) -> Result<(), ScrollError> {
    let element = document()?
        .get_element_by_id(id)
        .ok_or_else(|| ScrollError::MissingElement(id.to_string()))?;
    element.scroll_into_view();
    Ok(())
}

/// Element modal dialogs are portaled into, so they stay visible while the
/// settings panel that opened them is hidden
pub fn modal_host() -> Option<Element> {
    document().ok()?.body().map(Element::from)
}

/// Initial geolocation state: `Unavailable` when the browser exposes no
/// geolocation API. Permission and timeout errors are reported later by
/// whoever requests a position.
pub fn geolocation_state() -> GeoErrorState {
    match web_sys::window().map(|window| window.navigator().geolocation()) {
        Some(Ok(_)) => GeoErrorState::None,
        _ => GeoErrorState::Unavailable,
    }
}
