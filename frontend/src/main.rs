use landing_page::config;
use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, PromiseRejectionEvent};
use yew::prelude::*;
use yew_router::prelude::*;

mod components {
    pub mod contact_form;
}
mod effects;
mod pages {
    pub mod landing;
}

use pages::landing::{on_anchor_click, Landing};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Landing /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = window.as_ref().map(|window| {
                let window_clone = window.clone();
                let callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 80.0);
                }) as Box<dyn FnMut()>);
                let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                callback
            });

            move || {
                if let (Some(window), Some(callback)) = (window, scroll_callback) {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Close the mobile menu and scroll in one click
    let nav_link = {
        let menu_open = menu_open.clone();
        let scroll = on_anchor_click();
        Callback::from(move |e: MouseEvent| {
            menu_open.set(false);
            scroll.emit(e);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={nav_link.clone()}>
                    {"landing"}
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#features" class="nav-link" onclick={nav_link.clone()}>{"Features"}</a>
                    <a href="#contact" class="nav-link" onclick={nav_link}>{"Contact"}</a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

/// Last-resort logging for anything that escapes a handler. The page keeps
/// running either way.
fn install_global_handlers() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let on_error = Closure::wrap(Box::new(|e: ErrorEvent| {
        error!("❌ Global error caught: {} ({:?})", e.message(), e.error());
    }) as Box<dyn FnMut(ErrorEvent)>);
    let on_rejection = Closure::wrap(Box::new(|e: PromiseRejectionEvent| {
        error!("❌ Unhandled promise rejection: {:?}", e.reason());
        e.prevent_default();
    }) as Box<dyn FnMut(PromiseRejectionEvent)>);

    let _ = window.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
    let _ = window.add_event_listener_with_callback("unhandledrejection", on_rejection.as_ref().unchecked_ref());

    // Listeners live as long as the page
    on_error.forget();
    on_rejection.forget();
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    install_global_handlers();

    info!("🚀 Starting landing page");
    yew::Renderer::<App>::new().render();
}
