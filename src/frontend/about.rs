use yew::prelude::*;
use yew_router::prelude::*;

use super::{chrome::CosmicOrb, Route};
use crate::content::{BELIEFS, WAITLIST_FORM_URL};

#[function_component(AboutPage)]
pub(super) fn about_page() -> Html {
    html! {
        <>
            <section class="about-hero">
                <CosmicOrb size={500} x={80} y={30} accent={true} />
                <CosmicOrb size={350} x={10} y={60} />
                <div class="about-hero-content">
                    <span class="hero-tag">
                        <span class="pulse-dot" aria-hidden="true" />
                        {"OUR MISSION"}
                    </span>
                    <h1 class="about-headline">
                        {"Learning should feel like "}
                        <em class="headline-accent">{"discovery"}</em>
                    </h1>
                    <p class="about-subtitle">
                        {"We started Noteshell because the best ideas show up when curiosity flows. Our mission is to build the fastest, most intuitive tool for thinking and learning."}
                    </p>
                </div>
            </section>

            <section class="about-mission">
                <div class="container">
                    <div class="mission-divider" aria-hidden="true" />
                    <blockquote class="mission-quote">
                        {"\"We imagine learning with a partner that never forgets, always connects the dots, and quietly keeps you moving forward.\""}
                    </blockquote>
                    <p class="mission-body">
                        {"Traditional note-taking tools treat knowledge like static files. Noteshell treats it like a living constellation, each idea a star and every connection a line of light. We are building software that thinks alongside you, so you can spend less time organizing and more time understanding."}
                    </p>
                </div>
            </section>

            <section class="about-beliefs">
                <div class="container">
                    <div class="section-header center">
                        <span class="section-tag">{"WHAT WE BELIEVE"}</span>
                        <h2>{"Principles that guide us"}</h2>
                    </div>
                    <div class="beliefs-grid">
                        { for BELIEFS.iter().map(|belief| html! {
                            <div key={belief.title} class="belief-card">
                                <span class="belief-icon" aria-hidden="true">{belief.icon}</span>
                                <h3 class="belief-title">{belief.title}</h3>
                                <p class="belief-description">{belief.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="cta-section">
                <CosmicOrb size={400} x={50} y={50} accent={true} />
                <div class="cta-content">
                    <span class="cta-badge">{"Join the journey"}</span>
                    <h2>{"Ready to think "}<em>{"differently"}</em>{"?"}</h2>
                    <p>
                        {"Noteshell is currently in early access. Sign up to be among the first to experience a new way of learning."}
                    </p>
                    <div class="cta-buttons">
                        <a class="btn-primary" href={WAITLIST_FORM_URL} target="_blank" rel="noopener noreferrer">
                            {"Join the waitlist"}
                            <span class="btn-arrow" aria-hidden="true">{"→"}</span>
                            <span class="sr-only">{" (opens in a new tab)"}</span>
                        </a>
                        <Link<Route> to={Route::Home} classes={classes!("btn-ghost")}>
                            {"Back to home"}
                        </Link<Route>>
                    </div>
                </div>
            </section>
        </>
    }
}

#[function_component(NotFound)]
pub(super) fn not_found() -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    use_effect_with(path, |path| {
        gloo_console::debug!(format!("no route for `{path}`"));
        || ()
    });

    html! {
        <section class="not-found">
            <CosmicOrb size={500} x={50} y={40} accent={true} />
            <div class="cta-content">
                <span class="cta-badge">{"404"}</span>
                <h1>{"Lost in space"}</h1>
                <p>{"This page drifted out of orbit."}</p>
                <div class="cta-buttons">
                    <Link<Route> to={Route::Home} classes={classes!("btn-primary")}>
                        {"Return home"}
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}
