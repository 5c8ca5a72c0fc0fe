use gloo_console::log;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

mod config;
mod state {
    pub mod section;
    pub mod wizard;
}
mod components {
    pub mod application_form;
    pub mod footer;
}
mod pages {
    pub mod landing;
}

use components::application_form::ApplicationModal;
use pages::landing::Landing;
use state::section::{active_section, measure_sections, scroll_to, Section};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_apply: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let active = use_state(|| Section::Home);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    let bounds = measure_sections(&document);
                    // No match keeps the previous highlight.
                    if let Some(section) =
                        active_section(scroll_y + config::NAV_SCROLL_OFFSET, &bounds)
                    {
                        active.set(section);
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_click = |section: Section| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to(section);
            menu_open.set(false);
        })
    };

    let open_form = {
        let on_apply = props.on_apply.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_apply.emit(());
        })
    };

    let nav_buttons = |extra_class: &'static str| -> Html {
        Section::NAV
            .iter()
            .map(|&section| {
                html! {
                    <button
                        class={classes!(
                            extra_class,
                            (*active == section).then_some("active")
                        )}
                        onclick={nav_click(section)}
                    >
                        {section.label()}
                    </button>
                }
            })
            .collect()
    };

    html! {
        <header class="top-nav">
            <div class="nav-content">
                <button class="nav-logo" onclick={nav_click(Section::Home)}>
                    <img src={config::LOGO_PATH} alt="FinStamp Logo" />
                    <span>{"FinStamp"}</span>
                </button>

                <nav class="nav-desktop">
                    { nav_buttons("nav-link") }
                </nav>

                <div class="nav-actions">
                    <button class="nav-cta" onclick={open_form.clone()}>
                        {"Get Certified"}
                    </button>
                    <button class="burger-menu" onclick={toggle_menu}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="nav-mobile">
                            { nav_buttons("nav-mobile-link") }
                            <button class="nav-cta nav-mobile-cta" onclick={open_form}>
                                {"Get Certified"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(8px);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    z-index: 40;
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 64px;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .nav-logo img {
                    height: 40px;
                    width: 40px;
                    object-fit: contain;
                }

                .nav-logo span {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #1d4ed8;
                }

                .nav-desktop {
                    display: flex;
                    gap: 2rem;
                }

                .nav-link {
                    background: none;
                    border: none;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #4b5563;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }

                .nav-link:hover,
                .nav-link.active {
                    color: #1d4ed8;
                }

                .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .nav-cta {
                    background: #1d4ed8;
                    color: #fff;
                    border: none;
                    border-radius: 9999px;
                    padding: 0.5rem 1.5rem;
                    font-weight: 500;
                    cursor: pointer;
                }

                .nav-cta:hover {
                    background: #1e40af;
                }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.25rem;
                    color: #4b5563;
                    cursor: pointer;
                }

                .nav-mobile {
                    display: none;
                    flex-direction: column;
                    gap: 0.25rem;
                    padding: 0.5rem 1rem 1rem;
                    background: #fff;
                    border-top: 1px solid #e5e7eb;
                }

                .nav-mobile-link {
                    background: none;
                    border: none;
                    text-align: left;
                    padding: 0.5rem 0.75rem;
                    color: #4b5563;
                    border-radius: 6px;
                    cursor: pointer;
                }

                .nav-mobile-link:hover,
                .nav-mobile-link.active {
                    color: #1d4ed8;
                    background: #f9fafb;
                }

                .nav-mobile-cta {
                    margin-top: 0.5rem;
                }

                @media (max-width: 950px) {
                    .nav-desktop {
                        display: none;
                    }

                    .nav-cta {
                        display: none;
                    }

                    .burger-menu {
                        display: block;
                    }

                    .nav-mobile {
                        display: flex;
                    }

                    .nav-mobile-cta {
                        display: block;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    let show_application_form = use_state(|| false);

    let open_form = {
        let show_application_form = show_application_form.clone();
        Callback::from(move |_| {
            log!("Opening application modal");
            show_application_form.set(true);
        })
    };

    let close_form = {
        let show_application_form = show_application_form.clone();
        Callback::from(move |_| {
            log!("Closing application modal");
            show_application_form.set(false);
        })
    };

    html! {
        <>
            <Nav on_apply={open_form.clone()} />
            <Landing on_apply={open_form} />
            {
                if *show_application_form {
                    html! { <ApplicationModal on_close={close_form} /> }
                } else {
                    html! {}
                }
            }
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
