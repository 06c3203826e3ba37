use log::error;
use yew::prelude::*;

use crate::components::ripple_button::RippleButton;
use crate::dom::BrowserViewport;
use crate::scroll::{scroll_to_section, Section};

fn jump_to(section: Section) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| match BrowserViewport::bind() {
        Ok(viewport) => {
            scroll_to_section(&viewport, section);
        }
        Err(err) => error!("cannot scroll to #{}: {}", section.id(), err),
    })
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 120px 20px 60px;
                    background: linear-gradient(135deg, #4a6cf7 0%, #6a3de8 100%);
                    color: #fff;
                }
                .hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .hero p {
                    font-size: 1.25rem;
                    max-width: 640px;
                    opacity: 0.9;
                    margin-bottom: 2rem;
                }
                .hero-buttons {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                    justify-content: center;
                }
                "#}
            </style>
            <h1>{"Work Smarter, Not Harder"}</h1>
            <p>{"One place for your team's projects, files and conversations, so nothing slips through the cracks."}</p>
            <div class="hero-buttons">
                <RippleButton id="get-started-btn" class="btn-primary" onclick={jump_to(Section::Contact)}>
                    {"Get Started"}
                </RippleButton>
                <RippleButton id="learn-more-btn" class="btn-secondary" onclick={jump_to(Section::Features)}>
                    {"Learn More"}
                </RippleButton>
            </div>
        </section>
    }
}
