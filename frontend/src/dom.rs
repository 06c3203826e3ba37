use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};
use yew::NodeRef;

use crate::error::ConfigurationError;

pub fn window() -> Result<Window, ConfigurationError> {
    web_sys::window().ok_or(ConfigurationError::NoWindow)
}

pub fn document() -> Result<Document, ConfigurationError> {
    window()?.document().ok_or(ConfigurationError::NoDocument)
}

pub fn require_by_id(id: &str) -> Result<Element, ConfigurationError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| ConfigurationError::missing(format!("#{}", id)))
}

/// Resolves a rendered node and casts it to the element type the caller
/// works with.
pub fn require_ref<T: JsCast>(
    node: &NodeRef,
    target: &str,
    expected: &'static str,
) -> Result<T, ConfigurationError> {
    let node = node
        .get()
        .ok_or_else(|| ConfigurationError::missing(target))?;
    node.dyn_into::<T>()
        .map_err(|_| ConfigurationError::WrongElementType {
            target: target.to_string(),
            expected,
        })
}

/// Where an element should land when scrolled into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    Start,
    Nearest,
}

impl From<Block> for ScrollLogicalPosition {
    fn from(block: Block) -> Self {
        match block {
            Block::Start => ScrollLogicalPosition::Start,
            Block::Nearest => ScrollLogicalPosition::Nearest,
        }
    }
}

/// The scrolling surface the page behaviors drive.
#[cfg_attr(test, mockall::automock)]
pub trait Viewport {
    /// Current vertical scroll offset of the page.
    fn scroll_y(&self) -> f64;
    /// Top edge of the element with `id` relative to the viewport, if one exists.
    fn element_top(&self, id: &str) -> Option<f64>;
    /// Animated scroll to an absolute page offset.
    fn smooth_scroll_to(&self, top: f64);
    /// Animated scroll bringing the element with `id` into view.
    /// Returns false when there is no such element.
    fn scroll_into_view(&self, id: &str, block: Block) -> bool;
}

pub struct BrowserViewport {
    window: Window,
    document: Document,
}

impl BrowserViewport {
    pub fn bind() -> Result<Self, ConfigurationError> {
        let window = window()?;
        let document = window.document().ok_or(ConfigurationError::NoDocument)?;
        Ok(Self { window, document })
    }
}

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        self.window.page_y_offset().unwrap_or(0.0)
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(id)
            .map(|el| el.get_bounding_client_rect().top())
    }

    fn smooth_scroll_to(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }

    fn scroll_into_view(&self, id: &str, block: Block) -> bool {
        match self.document.get_element_by_id(id) {
            Some(el) => {
                scroll_element_into_view(&el, block);
                true
            }
            None => false,
        }
    }
}

pub fn scroll_element_into_view(el: &Element, block: Block) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(block.into());
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}
