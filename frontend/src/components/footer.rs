use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::content::BRAND;
use crate::scroll::Section;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();
    html! {
        <footer class="footer">
            <div class="footer-links">
                {
                    for [Section::Features, Section::Products, Section::Testimonials, Section::Contact]
                        .into_iter()
                        .map(|section| html! {
                            <AnchorLink href={section.href()} class="footer-link">
                                {section.id()}
                            </AnchorLink>
                        })
                }
            </div>
            <p>{format!("© {} {}. All rights reserved.", year, BRAND)}</p>
        </footer>
    }
}
