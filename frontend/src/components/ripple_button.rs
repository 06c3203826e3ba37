use log::error;
use web_sys::Element;
use yew::prelude::*;

use crate::dom;
use crate::ripple::{RippleGeometry, RippleSet};
use crate::scheduler::{Scheduler, TaskName};

pub enum Msg {
    Click(MouseEvent),
    Expire(u64),
}

#[derive(Properties, PartialEq)]
pub struct RippleButtonProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::from("button"))]
    pub kind: AttrValue,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// A `.btn` that draws an expanding circle from wherever it was clicked.
pub struct RippleButton {
    button: NodeRef,
    ripples: RippleSet,
    scheduler: Scheduler,
}

impl RippleButton {
    fn geometry(&self, e: &MouseEvent) -> Option<RippleGeometry> {
        // Events are delegated, so read the rect off our own node rather
        // than `current_target`.
        match dom::require_ref::<Element>(&self.button, ".btn", "button") {
            Ok(button) => {
                let rect = button.get_bounding_client_rect();
                Some(RippleGeometry::compute(
                    (rect.left(), rect.top(), rect.width(), rect.height()),
                    (e.client_x() as f64, e.client_y() as f64),
                ))
            }
            Err(err) => {
                error!("{}", err);
                None
            }
        }
    }
}

impl Component for RippleButton {
    type Message = Msg;
    type Properties = RippleButtonProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            button: NodeRef::default(),
            ripples: RippleSet::default(),
            scheduler: Scheduler::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Click(e) => {
                let spawned = match self.geometry(&e) {
                    Some(geometry) => {
                        let id = self.ripples.spawn(geometry);
                        let link = ctx.link().clone();
                        self.scheduler
                            .schedule(TaskName::RemoveRipple, move || link.send_message(Msg::Expire(id)));
                        true
                    }
                    None => false,
                };
                if let Some(onclick) = &ctx.props().onclick {
                    onclick.emit(e);
                }
                spawned
            }
            Msg::Expire(id) => self.ripples.expire(id),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <button
                ref={self.button.clone()}
                id={props.id.clone()}
                type={props.kind.clone()}
                class={classes!("btn", props.class.clone())}
                onclick={ctx.link().callback(Msg::Click)}
            >
                { for props.children.iter() }
                {
                    for self.ripples.active().iter().map(|ripple| html! {
                        <span key={ripple.id} class="ripple" style={ripple.geometry.style()}></span>
                    })
                }
            </button>
        }
    }
}
