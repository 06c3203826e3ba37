use log::error;
use yew::prelude::*;

use crate::dom::BrowserViewport;
use crate::scroll::route_anchor;

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Runs before the scroll, e.g. to close the mobile menu.
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// In-page link that animates to its fragment target instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let extra = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(extra) = &extra {
                extra.emit(e);
            }
            match BrowserViewport::bind() {
                Ok(viewport) => {
                    route_anchor(&viewport, &href);
                }
                Err(err) => error!("cannot scroll to {}: {}", href, err),
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
