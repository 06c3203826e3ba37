use yew::prelude::*;

use crate::content::{FEATURES, TESTIMONIALS};

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="features" class="section features">
            <h2 class="section-title">{"Why Teams Choose Us"}</h2>
            <div class="card-grid">
                {
                    for FEATURES.iter().map(|feature| html! {
                        <div class="feature-card">
                            <div class="feature-icon">{feature.icon}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.body}</p>
                        </div>
                    })
                }
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id="testimonials" class="section testimonials">
            <h2 class="section-title">{"What Our Customers Say"}</h2>
            <div class="card-grid">
                {
                    for TESTIMONIALS.iter().map(|t| html! {
                        <div class="testimonial-card">
                            <p class="quote">{format!("\u{201c}{}\u{201d}", t.quote)}</p>
                            <div class="author">
                                <strong>{t.author}</strong>
                                <span>{t.role}</span>
                            </div>
                        </div>
                    })
                }
            </div>
        </section>
    }
}
