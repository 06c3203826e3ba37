use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::content::BRAND;
use crate::nav::{HeaderStyle, MenuState};
use crate::scroll::Section;

const NAV_LINKS: [(Section, &str); 4] = [
    (Section::Features, "Features"),
    (Section::Products, "Pricing"),
    (Section::Testimonials, "Testimonials"),
    (Section::Contact, "Contact"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let menu = use_state(MenuState::default);
    // Re-renders on every scroll tick; the style is a pure function of it.
    let (_, scroll_y) = use_window_scroll();
    let header_style = HeaderStyle::for_scroll(scroll_y);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = menu.toggled();
            debug!("mobile menu open: {}", next.is_open());
            menu.set(next);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.closed());
        })
    };

    let bars = menu.icon_bars();

    html! {
        <header class="header" style={header_style.style()}>
            <style>
                {r#"
                .header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 80px;
                    z-index: 1000;
                    transition: background-color 0.3s ease, box-shadow 0.3s ease;
                }
                .nav-container {
                    max-width: 1200px;
                    height: 100%;
                    margin: 0 auto;
                    padding: 0 20px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .logo {
                    font-size: 1.6rem;
                    font-weight: 700;
                    color: #4a6cf7;
                    text-decoration: none;
                }
                .nav-menu {
                    display: flex;
                    gap: 2rem;
                    list-style: none;
                }
                .nav-link {
                    color: #333;
                    text-decoration: none;
                    font-weight: 500;
                }
                .nav-link:hover {
                    color: #4a6cf7;
                }
                .mobile-menu-toggle {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .mobile-menu-toggle span {
                    width: 25px;
                    height: 3px;
                    background: #333;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                @media (max-width: 768px) {
                    .mobile-menu-toggle {
                        display: flex;
                    }
                    .nav-menu {
                        display: none;
                        position: absolute;
                        top: 80px;
                        left: 0;
                        width: 100%;
                        flex-direction: column;
                        padding: 1.5rem 20px;
                        background: #fff;
                        box-shadow: 0 10px 20px rgba(0, 0, 0, 0.08);
                    }
                    .nav-menu.active {
                        display: flex;
                    }
                }
                "#}
            </style>
            <nav class="nav-container">
                <AnchorLink href="#home" class="logo">{BRAND}</AnchorLink>
                <ul id="nav-menu" class={menu.menu_class()}>
                    {
                        for NAV_LINKS.iter().map(|(section, label)| html! {
                            <li>
                                <AnchorLink
                                    href={section.href()}
                                    class="nav-link"
                                    onclick={close_menu.clone()}
                                >
                                    {*label}
                                </AnchorLink>
                            </li>
                        })
                    }
                </ul>
                <button
                    id="mobile-menu-toggle"
                    class="mobile-menu-toggle"
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}
                >
                    <span style={bars[0].style()}></span>
                    <span style={bars[1].style()}></span>
                    <span style={bars[2].style()}></span>
                </button>
            </nav>
        </header>
    }
}
