//! Scroll-triggered fade-in for the page's cards.
//!
//! Cards start transparent and shifted down, each delayed a little more than
//! the one before it in document order. The first time a card crosses into
//! the viewport it settles into place and stays there.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use js_sys::Array;
use log::{debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::{
    REVEAL_DURATION_SECS, REVEAL_OFFSET_PX, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR,
    REVEAL_STAGGER_SECS, REVEAL_THRESHOLD,
};
use crate::dom;
use crate::error::ConfigurationError;

const INDEX_ATTR: &str = "data-reveal-index";

pub fn transition(index: usize) -> String {
    let delay = index as f64 * REVEAL_STAGGER_SECS;
    format!(
        "opacity {d}s ease {delay}s, transform {d}s ease {delay}s",
        d = REVEAL_DURATION_SECS,
        delay = format_secs(delay),
    )
}

// 0.30000000000000004 -> 0.3
fn format_secs(secs: f64) -> String {
    let rounded = (secs * 1000.0).round() / 1000.0;
    format!("{}", rounded)
}

pub fn hidden_transform() -> String {
    format!("translateY({}px)", REVEAL_OFFSET_PX)
}

// A failed style write leaves the card in its previous state; keep going
// with the rest.
fn report<E: fmt::Debug>(call: &str, index: usize, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            error!("{} failed on reveal card {}: {:?}", call, index, e);
            false
        }
    }
}

fn set_style(el: &HtmlElement, index: usize, property: &str, value: &str) -> bool {
    report(property, index, el.style().set_property(property, value))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

/// Per-card reveal state. Transitions only go Hidden -> Revealed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealTracker {
    states: Vec<RevealState>,
}

impl RevealTracker {
    pub fn with_targets(count: usize) -> Self {
        Self {
            states: vec![RevealState::Hidden; count],
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[cfg(test)]
    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    /// Feeds one intersection notification. Returns true only when this
    /// notification is the one that reveals the card.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        match self.states.get_mut(index) {
            Some(state @ RevealState::Hidden) if intersecting => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }
}

/// Keeps the observer and its callback alive; dropping it disconnects.
pub struct ScrollReveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl ScrollReveal {
    /// Puts every card matching the reveal selector into its starting state
    /// and starts watching them.
    pub fn attach() -> Result<Self, ConfigurationError> {
        let targets = dom::document()?
            .query_selector_all(REVEAL_SELECTOR)
            .map_err(|e| ConfigurationError::browser("querySelectorAll", e))?;

        let count = targets.length() as usize;
        let tracker = Rc::new(RefCell::new(RevealTracker::with_targets(count)));

        let callback = {
            let tracker = tracker.clone();
            Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(index) = target
                        .get_attribute(INDEX_ATTR)
                        .and_then(|i| i.parse::<usize>().ok())
                    else {
                        continue;
                    };
                    if !tracker.borrow_mut().observe(index, entry.is_intersecting()) {
                        continue;
                    }
                    if let Ok(el) = target.dyn_into::<HtmlElement>() {
                        debug!("revealing card {}", index);
                        set_style(&el, index, "opacity", "1");
                        set_style(&el, index, "transform", "translateY(0)");
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| ConfigurationError::browser("IntersectionObserver", e))?;

        for index in 0..count {
            let Some(node) = targets.item(index as u32) else {
                continue;
            };
            let Ok(el) = node.dyn_into::<HtmlElement>() else {
                error!("reveal target {} is not an HTML element", index);
                continue;
            };
            // Without the index the callback cannot match the card, so leave
            // it visible and unobserved.
            if !report("setAttribute", index, el.set_attribute(INDEX_ATTR, &index.to_string())) {
                continue;
            }
            set_style(&el, index, "opacity", "0");
            set_style(&el, index, "transform", &hidden_transform());
            set_style(&el, index, "transition", &transition(index));
            observer.observe(&el);
        }
        debug!("watching {} cards for reveal", count);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}
