use std::rc::Rc;

use gloo::timers::callback::Timeout;
use shared::ScrollRequest;
use yew::prelude::*;

use crate::services::{dom, logging::Logger};

/// Scroll requests produced by one modal transition.
///
/// The generation changes with every batch so that two identical batches in
/// a row (open, cancel, open again) still re-run the effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollBatch {
    pub generation: u32,
    pub requests: Vec<ScrollRequest>,
}

impl ScrollBatch {
    pub fn next(&self, requests: Vec<ScrollRequest>) -> Self {
        Self {
            generation: self.generation.wrapping_add(1),
            requests,
        }
    }
}

impl Reducible for ScrollBatch {
    type Action = Vec<ScrollRequest>;

    fn reduce(self: Rc<Self>, requests: Self::Action) -> Rc<Self> {
        Rc::new(self.next(requests))
    }
}

/// Hook that scrolls modal dialogs into view after their delay
///
/// Each request of the current batch gets a one-shot timeout. The timeouts
/// belong to the effect: a new batch or unmounting the component drops them,
/// which cancels any that have not fired yet.
#[hook]
pub fn use_scroll_into_view(batch: ScrollBatch) {
    use_effect_with(batch, |batch| {
        let timeouts: Vec<Timeout> = batch
            .requests
            .iter()
            .map(|request| {
                let dialog_id = request.dialog_id;
                Timeout::new(request.delay_ms, move || {
                    if let Err(e) = dom::scroll_into_view(dialog_id) {
                        Logger::warn_with_component(
                            "scroll-into-view",
                            &format!("Could not scroll {} into view: {}", dialog_id, e),
                        );
                    }
                })
            })
            .collect();

        move || drop(timeouts)
    });
}
