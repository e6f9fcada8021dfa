mod about;
mod browser;
mod chrome;
mod comparison;
mod demo;
mod home;
mod pricing;
mod sticky;

use gloo_timers::callback::Timeout;
use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, ScrollBehavior};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    content::hash_target,
    theme::{Theme, THEME_KEY},
};
use browser::{local_storage, media_matches, scroll_to_element, scroll_to_top};

const HASH_SCROLL_DELAY_MS: u32 = 100;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <home::HomePage /> },
        Route::About => html! { <about::AboutPage /> },
        Route::NotFound => html! { <about::NotFound /> },
    }
}

fn read_stored_theme() -> Option<String> {
    local_storage()?.get_item(THEME_KEY).ok().flatten()
}

fn resolve_theme() -> Theme {
    Theme::resolve(
        read_stored_theme().as_deref(),
        media_matches("(prefers-color-scheme: light)"),
    )
}

fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
            let _ = root.set_attribute("style", &theme.palette().css_variables());
        }
    }
}

fn apply_theme_with_transition(theme: Theme) {
    if media_matches("(prefers-reduced-motion: reduce)") {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    // The browser calls back after capturing the old frame, so the closure
    // has to outlive this function.
    let callback = Closure::once_into_js(move || apply_theme(theme));

    if start_view_transition
        .call1(&document_js, &callback)
        .is_err()
    {
        apply_theme(theme);
    }
}

fn persist_theme(theme: Theme) {
    let Some(storage) = local_storage() else {
        gloo_console::warn!("localStorage unavailable, theme choice is not remembered");
        return;
    };
    let _ = storage.set_item(THEME_KEY, theme.as_str());
}

/// Smooth-scrolls to the element named by the location hash, or to the top
/// when the route changes without one.
#[hook]
fn use_scroll_to_hash() {
    let location = use_location();
    let (path, hash) = location
        .map(|location| (location.path().to_string(), location.hash().to_string()))
        .unwrap_or_default();

    use_effect_with((path, hash), |(_, hash)| {
        let pending = match hash_target(hash) {
            Some(id) => {
                let id = id.to_string();
                Some(Timeout::new(HASH_SCROLL_DELAY_MS, move || {
                    scroll_to_element(&id)
                }))
            }
            None => {
                scroll_to_top(ScrollBehavior::Smooth);
                None
            }
        };

        move || drop(pending)
    });
}

#[derive(Properties, PartialEq)]
struct LayoutProps {
    #[prop_or_default]
    children: Html,
}

#[function_component(Layout)]
fn layout(props: &LayoutProps) -> Html {
    let theme = use_state(resolve_theme);
    let scrolled = chrome::use_scrolled();
    use_scroll_to_hash();

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = (*theme).toggled();
            persist_theme(next);
            apply_theme_with_transition(next);
            theme.set(next);
        })
    };

    html! {
        <ContextProvider<Theme> context={*theme}>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <div class="layout">
                <chrome::CosmicBackground />
                <chrome::Nav theme={*theme} scrolled={scrolled} on_toggle={on_toggle} />
                <main id="content">
                    {props.children.clone()}
                </main>
                <chrome::Footer />
            </div>
        </ContextProvider<Theme>>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Layout>
                <Switch<Route> render={switch} />
            </Layout>
        </BrowserRouter>
    }
}

pub fn run() {
    browser::reset_scroll_position();

    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
    else {
        gloo_console::error!("missing #app mount point");
        return;
    };

    yew::Renderer::<App>::with_root(root).render();
}
