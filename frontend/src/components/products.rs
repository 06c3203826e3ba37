use log::error;
use yew::prelude::*;

use crate::components::ripple_button::RippleButton;
use crate::content::PRODUCTS;
use crate::dom::BrowserViewport;
use crate::scheduler::Scheduler;
use crate::scroll::choose_product;

#[derive(Properties, PartialEq)]
pub struct ProductsProps {
    /// Fired with the product name once the page has had time to scroll.
    pub on_interest: Callback<AttrValue>,
}

#[function_component(Products)]
pub fn products(props: &ProductsProps) -> Html {
    let scheduler = use_state(Scheduler::default);

    let choose = |name: &'static str| {
        let scheduler = (*scheduler).clone();
        let on_interest = props.on_interest.clone();
        Callback::from(move |_: MouseEvent| match BrowserViewport::bind() {
            Ok(viewport) => {
                let on_interest = on_interest.clone();
                choose_product(&viewport, &scheduler, name, move |product| {
                    on_interest.emit(AttrValue::from(product));
                });
            }
            Err(err) => error!("cannot pick {}: {}", name, err),
        })
    };

    html! {
        <section id="products" class="section products">
            <h2 class="section-title">{"Simple, Transparent Pricing"}</h2>
            <div class="card-grid">
                {
                    for PRODUCTS.iter().map(|product| html! {
                        <div class={classes!("product-card", product.featured.then_some("featured"))}>
                            <h3>{product.name}</h3>
                            <div class="price">
                                {product.price}
                                <span class="period">{product.period}</span>
                            </div>
                            <ul class="perks">
                                { for product.perks.iter().map(|perk| html! { <li>{*perk}</li> }) }
                            </ul>
                            <RippleButton class="btn-primary product-btn" onclick={choose(product.name)}>
                                {"Choose Plan"}
                            </RippleButton>
                        </div>
                    })
                }
            </div>
        </section>
    }
}
