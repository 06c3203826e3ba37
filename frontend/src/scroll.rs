use log::{debug, info, warn};

use crate::config::HEADER_OFFSET;
use crate::dom::{Block, Viewport};
use crate::scheduler::{Scheduler, TaskId, TaskName};

/// Named sections the call-to-action buttons jump to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Features,
    Products,
    Testimonials,
    Contact,
}

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Section::Features => "features",
            Section::Products => "products",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Outcome of an in-page anchor activation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Routed {
    Scrolled { top: f64 },
    NoTarget,
}

/// The element id an in-page `href` points at. A bare `#` points nowhere.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Page offset that puts an element just below the fixed header.
pub fn target_offset(element_top: f64, scroll_y: f64) -> f64 {
    element_top + scroll_y - HEADER_OFFSET
}

/// Handles an anchor click whose default navigation has already been
/// cancelled.
pub fn route_anchor<V: Viewport + ?Sized>(viewport: &V, href: &str) -> Routed {
    let Some(id) = fragment_id(href) else {
        debug!("anchor {:?} has no fragment target", href);
        return Routed::NoTarget;
    };
    match viewport.element_top(id) {
        Some(element_top) => {
            let top = target_offset(element_top, viewport.scroll_y());
            debug!("scrolling to #{} at {}", id, top);
            viewport.smooth_scroll_to(top);
            Routed::Scrolled { top }
        }
        None => {
            debug!("no element matches #{}", id);
            Routed::NoTarget
        }
    }
}

pub fn scroll_to_section<V: Viewport + ?Sized>(viewport: &V, section: Section) -> bool {
    let found = viewport.scroll_into_view(section.id(), Block::Start);
    if !found {
        warn!("section #{} is not on the page", section.id());
    }
    found
}

/// Product button: bring the contact form up first, then hand the product
/// name on once the scroll has had time to run.
pub fn choose_product<V, F>(
    viewport: &V,
    scheduler: &Scheduler,
    product: &'static str,
    on_interest: F,
) -> TaskId
where
    V: Viewport + ?Sized,
    F: FnOnce(&'static str) + 'static,
{
    info!("product selected: {}", product);
    scroll_to_section(viewport, Section::Contact);
    scheduler.schedule(TaskName::PrefillSubject, move || on_interest(product))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MockViewport;
    use crate::scheduler::{MockTimer, TimerGuard};
    use mockall::predicate::eq;
    use mockall::Sequence;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn fragment_id_strips_hash() {
        assert_eq!(fragment_id("#features"), Some("features"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("/pricing"), None);
    }

    #[test]
    fn offset_clears_fixed_header() {
        assert_eq!(target_offset(400.0, 250.0), 570.0);
        assert_eq!(target_offset(-30.0, 0.0), -110.0);
    }

    #[test]
    fn anchor_scrolls_to_header_adjusted_offset() {
        let mut viewport = MockViewport::new();
        viewport
            .expect_element_top()
            .withf(|id: &str| id == "contact")
            .return_const(Some(600.0_f64));
        viewport.expect_scroll_y().return_const(120.0_f64);
        viewport
            .expect_smooth_scroll_to()
            .with(eq(640.0))
            .times(1)
            .return_const(());

        assert_eq!(route_anchor(&viewport, "#contact"), Routed::Scrolled { top: 640.0 });
    }

    #[test]
    fn unknown_fragment_does_not_scroll() {
        let mut viewport = MockViewport::new();
        viewport.expect_element_top().return_const(None::<f64>);
        viewport.expect_scroll_y().times(0);
        viewport.expect_smooth_scroll_to().times(0);

        assert_eq!(route_anchor(&viewport, "#nowhere"), Routed::NoTarget);
    }

    #[test]
    fn bare_hash_never_queries_the_page() {
        let mut viewport = MockViewport::new();
        viewport.expect_element_top().times(0);
        viewport.expect_smooth_scroll_to().times(0);

        assert_eq!(route_anchor(&viewport, "#"), Routed::NoTarget);
    }

    #[test]
    fn cta_scrolls_section_to_start() {
        let mut viewport = MockViewport::new();
        viewport
            .expect_scroll_into_view()
            .withf(|id: &str, block: &Block| id == "features" && *block == Block::Start)
            .times(1)
            .return_const(true);

        assert!(scroll_to_section(&viewport, Section::Features));
    }

    #[test]
    fn product_scrolls_to_contact_before_queueing_prefill() {
        let mut seq = Sequence::new();
        let mut viewport = MockViewport::new();
        viewport
            .expect_scroll_into_view()
            .withf(|id: &str, block: &Block| id == "contact" && *block == Block::Start)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(true);

        let queued: Rc<RefCell<Vec<(u32, Box<dyn FnOnce()>)>>> = Rc::default();
        let mut timer = MockTimer::new();
        {
            let queued = queued.clone();
            timer
                .expect_start()
                .times(1)
                .in_sequence(&mut seq)
                .returning_st(move |delay, task| {
                    queued.borrow_mut().push((delay, task));
                    Box::new(()) as TimerGuard
                });
        }
        let scheduler = Scheduler::with_timer(timer);

        let chosen = Rc::new(RefCell::new(None));
        {
            let chosen = chosen.clone();
            choose_product(&viewport, &scheduler, "Pro Plan", move |name| {
                *chosen.borrow_mut() = Some(name);
            });
        }

        // Nothing is filled in until the delay elapses.
        assert_eq!(*chosen.borrow(), None);
        let (delay, task) = queued.borrow_mut().remove(0);
        assert_eq!(delay, 500);
        task();
        assert_eq!(*chosen.borrow(), Some("Pro Plan"));
    }
}
