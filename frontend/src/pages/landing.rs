use log::error;
use yew::prelude::*;

use crate::components::contact::{ContactSection, PrefillRequest};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::products::Products;
use crate::components::sections::{Features, Testimonials};
use crate::reveal::ScrollReveal;

#[function_component(Landing)]
pub fn landing() -> Html {
    let prefill = use_state(|| None::<PrefillRequest>);

    // Cards exist after the first render; hide them and start watching.
    use_effect_with_deps(
        move |_| {
            let reveal = match ScrollReveal::attach() {
                Ok(reveal) => Some(reveal),
                Err(err) => {
                    error!("scroll reveal disabled: {}", err);
                    None
                }
            };
            move || drop(reveal)
        },
        (),
    );

    let on_interest = {
        let prefill = prefill.clone();
        Callback::from(move |product: AttrValue| {
            let seq = prefill.as_ref().map_or(0, |p| p.seq.wrapping_add(1));
            prefill.set(Some(PrefillRequest { product, seq }));
        })
    };

    html! {
        <div class="landing-page">
            <style>
                {r#"
                * {
                    margin: 0;
                    padding: 0;
                    box-sizing: border-box;
                }
                body {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #333;
                    line-height: 1.6;
                }
                .section {
                    padding: 100px 20px;
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .section-title {
                    text-align: center;
                    font-size: 2.25rem;
                    margin-bottom: 3rem;
                }
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                }
                .feature-card,
                .testimonial-card,
                .product-card {
                    padding: 2rem;
                    border-radius: 12px;
                    background: #fff;
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.06);
                }
                .feature-icon {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }
                .product-card {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    text-align: center;
                }
                .product-card.featured {
                    border: 2px solid #4a6cf7;
                }
                .price {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: #4a6cf7;
                }
                .period {
                    font-size: 1rem;
                    color: #888;
                }
                .perks {
                    list-style: none;
                    flex: 1;
                }
                .quote {
                    font-style: italic;
                    margin-bottom: 1rem;
                }
                .author span {
                    display: block;
                    color: #888;
                    font-size: 0.9rem;
                }
                .btn {
                    position: relative;
                    overflow: hidden;
                    padding: 0.9rem 2rem;
                    border: none;
                    border-radius: 8px;
                    font: inherit;
                    font-weight: 600;
                    cursor: pointer;
                }
                .btn-primary {
                    background: #4a6cf7;
                    color: #fff;
                }
                .btn-secondary {
                    background: transparent;
                    color: #fff;
                    border: 2px solid #fff;
                }
                .ripple {
                    position: absolute;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.6);
                    transform: scale(0);
                    animation: ripple 0.6s linear;
                    pointer-events: none;
                }
                @keyframes ripple {
                    to {
                        transform: scale(4);
                        opacity: 0;
                    }
                }
                .footer {
                    padding: 2rem 20px;
                    text-align: center;
                    background: #1f2233;
                    color: #ccc;
                }
                .footer-links {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    margin-bottom: 1rem;
                    text-transform: capitalize;
                }
                .footer-link {
                    color: #fff;
                    text-decoration: none;
                }
                "#}
            </style>
            <Header />
            <main>
                <Hero />
                <Features />
                <Products {on_interest} />
                <Testimonials />
                <ContactSection prefill={(*prefill).clone()} />
            </main>
            <Footer />
        </div>
    }
}
