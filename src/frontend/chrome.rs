//! Page chrome shared by every route: navigation, footer and the cosmic
//! backdrop.

use std::{cell::RefCell, rc::Rc};

use yew::prelude::*;
use yew_router::prelude::*;

use super::{
    browser::{scroll_y, FrameScheduler, WindowListener},
    Route,
};
use crate::{
    content::{
        section_href, Star, CONSTELLATION_LINES, CONSTELLATION_POINTS, FOOTER_LINKS, NAV_SECTIONS,
        STAR_COUNT,
    },
    scroll::{is_scrolled, FrameThrottle},
    theme::Theme,
};

/// Whether the page is scrolled past the nav threshold, sampled once per frame.
#[hook]
pub(super) fn use_scrolled() -> bool {
    let scrolled = use_state_eq(|| is_scrolled(scroll_y()));

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let throttle = Rc::new(RefCell::new(FrameThrottle::default()));
            let frames = {
                let throttle = throttle.clone();
                Rc::new(FrameScheduler::new(move || {
                    throttle.borrow_mut().begin_frame();
                    scrolled.set(is_scrolled(scroll_y()));
                }))
            };
            let listener = {
                let frames = frames.clone();
                WindowListener::passive("scroll", move || {
                    if throttle.borrow_mut().request() {
                        frames.schedule();
                    }
                })
            };

            move || {
                drop(listener);
                drop(frames);
            }
        });
    }

    *scrolled
}

#[derive(Properties, PartialEq)]
pub(super) struct NavProps {
    pub theme: Theme,
    pub scrolled: bool,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(Nav)]
pub(super) fn nav(props: &NavProps) -> Html {
    let on_home = matches!(use_route::<Route>(), Some(Route::Home) | None);

    html! {
        <nav class={classes!("nav", props.scrolled.then_some("is-scrolled"))} aria-label="Primary">
            <Link<Route> to={Route::Home} classes={classes!("nav-logo")}>
                <span class="logo-icon" aria-hidden="true">{"◉"}</span>
                {"noteshell"}
            </Link<Route>>

            <div class="nav-links">
                { for NAV_SECTIONS.iter().map(|id| html! {
                    <a href={section_href(on_home, id)}>{*id}</a>
                }) }
                <Link<Route> to={Route::About}>{"about"}</Link<Route>>

                <button
                    class="theme-toggle"
                    type="button"
                    aria-label={props.theme.toggle_label()}
                    aria-pressed={props.theme.pressed().to_string()}
                    onclick={props.on_toggle.clone()}
                >
                    <span aria-hidden="true">{props.theme.icon()}</span>
                </button>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
pub(super) fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-brand">
                <span class="footer-logo">
                    <span class="accent" aria-hidden="true">{"◉"}</span>{" noteshell"}
                </span>
                <span class="footer-tagline">{"Follow curiosity."}</span>
            </div>
            <div class="footer-links">
                { for FOOTER_LINKS.iter().map(|link| html! { <a href="#">{*link}</a> }) }
            </div>
            <div class="footer-copyright">{"© 2025 Noteshell"}</div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub(super) struct CosmicOrbProps {
    #[prop_or(400)]
    pub size: u32,
    #[prop_or(50)]
    pub x: u32,
    #[prop_or(50)]
    pub y: u32,
    #[prop_or_default]
    pub accent: bool,
}

#[function_component(CosmicOrb)]
pub(super) fn cosmic_orb(props: &CosmicOrbProps) -> Html {
    let style = format!(
        "left: {}%; top: {}%; width: {size}px; height: {size}px;",
        props.x,
        props.y,
        size = props.size
    );

    html! {
        <div
            class={classes!("cosmic-orb", props.accent.then_some("accent"))}
            style={style}
            aria-hidden="true"
        />
    }
}

fn random_star(id: usize) -> Star {
    Star::from_samples(id, std::array::from_fn(|_| js_sys::Math::random()))
}

#[function_component(CosmicBackground)]
pub(super) fn cosmic_background() -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let stars = use_memo((), |_| (0..STAR_COUNT).map(random_star).collect::<Vec<_>>());

    html! {
        <div class="cosmic-bg" aria-hidden="true">
            <div class={classes!("stars-layer", if theme.is_dark() { "visible" } else { "hidden" })}>
                { for stars.iter().map(|star| html! {
                    <div
                        key={star.id}
                        class="star"
                        style={format!(
                            "left: {:.3}%; top: {:.3}%; width: {size:.2}px; height: {size:.2}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
                            star.x,
                            star.y,
                            star.duration,
                            star.delay,
                            size = star.size,
                        )}
                    />
                }) }
            </div>

            <svg class="constellations" viewBox="0 0 100 100" preserveAspectRatio="none">
                { for CONSTELLATION_LINES.iter().map(|&(a, b)| {
                    let (from, to) = (CONSTELLATION_POINTS[a], CONSTELLATION_POINTS[b]);
                    html! {
                        <line
                            x1={from.x.to_string()}
                            y1={from.y.to_string()}
                            x2={to.x.to_string()}
                            y2={to.y.to_string()}
                        />
                    }
                }) }
                { for CONSTELLATION_POINTS.iter().map(|point| html! {
                    <circle cx={point.x.to_string()} cy={point.y.to_string()} r="0.3" />
                }) }
            </svg>

            <div class="orbital-ring ring-1" />
            <div class="orbital-ring ring-2" />
            <div class="orbital-ring ring-3" />
        </div>
    }
}
