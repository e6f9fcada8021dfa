use yew::prelude::*;

use super::{
    chrome::CosmicOrb, comparison::ComparisonTable, demo::InteractiveDemo, pricing::Pricing,
    sticky::StickyFeatures,
};
use crate::{
    content::{
        toggle_selection, triangle_node_position, triangle_radius, HERO_METRICS, LEARNING_MODES,
        PILLARS, TRIANGLE_SIZE, WAITLIST_FORM_URL,
    },
    scroll::slide_visibilities,
};

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <CosmicOrb size={800} x={15} y={40} />
            <CosmicOrb size={400} x={85} y={30} accent={true} />
            <CosmicOrb size={300} x={70} y={80} />

            <div class="hero-content">
                <div class="hero-tag">
                    <span class="pulse-dot" aria-hidden="true" />
                    {"agent-first learning platform"}
                </div>
                <h1 class="hero-headline">
                    {"Follow"}<br />
                    <span class="headline-accent">{"Curiosity."}</span>
                </h1>
                <p class="hero-subheadline">{"Let Noteshell build your learning path."}</p>
                <p class="hero-description">
                    {"More than notes. An agent-first platform that joins your journey and turns every spark of curiosity into tangible knowledge."}
                </p>
                <div class="hero-cta">
                    <a class="btn-primary" href="#waitlist">
                        <span>{"Begin your journey"}</span>
                        <span class="btn-arrow" aria-hidden="true">{"→"}</span>
                    </a>
                    <a class="btn-ghost" href="#demo">{"Watch demo"}</a>
                </div>
                <div class="hero-metrics">
                    { for HERO_METRICS.iter().map(|metric| html! {
                        <div class="metric">
                            <span class="metric-value">{metric.value}</span>
                            <span class="metric-label">{metric.label}</span>
                        </div>
                    }) }
                </div>
            </div>

            <div class="scroll-cue" aria-hidden="true">
                <span>{"scroll to explore"}</span>
                <div class="scroll-line">
                    <div class="scroll-dot" />
                </div>
            </div>
        </section>
    }
}

#[function_component(FeatureTriangle)]
fn feature_triangle() -> Html {
    let active = use_state_eq(|| 0_usize);
    let center = TRIANGLE_SIZE / 2.0;
    let radius = triangle_radius(TRIANGLE_SIZE);
    let position = |index: usize| triangle_node_position(index, TRIANGLE_SIZE);
    let (active_x, active_y) = position(*active);

    html! {
        <section id="features" class="features-section">
            <CosmicOrb size={500} x={10} y={60} />
            <div class="container">
                <div class="section-header">
                    <span class="section-tag">{"◉ AGENT CAPABILITIES"}</span>
                    <h2>{"Three pillars of learning"}</h2>
                    <p>{"A true agent companion that helps you explore, understand, and retain."}</p>
                </div>

                <div class="triangle-layout">
                    <div
                        class="triangle-nav"
                        style={format!("width: {TRIANGLE_SIZE}px; height: {TRIANGLE_SIZE}px;")}
                    >
                        <svg
                            class="triangle-svg"
                            width={TRIANGLE_SIZE.to_string()}
                            height={TRIANGLE_SIZE.to_string()}
                            aria-hidden="true"
                        >
                            <circle
                                class="triangle-orbit"
                                cx={center.to_string()}
                                cy={center.to_string()}
                                r={(radius + 15.0).to_string()}
                            />
                            { for (0..PILLARS.len()).map(|index| {
                                let (x1, y1) = position(index);
                                let (x2, y2) = position((index + 1) % PILLARS.len());
                                html! {
                                    <line
                                        class="triangle-edge"
                                        x1={x1.to_string()}
                                        y1={y1.to_string()}
                                        x2={x2.to_string()}
                                        y2={y2.to_string()}
                                    />
                                }
                            }) }
                            <line
                                class="active-connector"
                                x1={center.to_string()}
                                y1={center.to_string()}
                                x2={active_x.to_string()}
                                y2={active_y.to_string()}
                            />
                        </svg>

                        <div class="triangle-center" style={format!("left: {center}px; top: {center}px;")}>
                            <div class="center-core" />
                        </div>

                        { for PILLARS.iter().enumerate().map(|(index, pillar)| {
                            let (x, y) = position(index);
                            let is_active = *active == index;
                            let onclick = {
                                let active = active.clone();
                                Callback::from(move |_| active.set(index))
                            };

                            html! {
                                <button
                                    type="button"
                                    class={classes!("triangle-node", is_active.then_some("active"))}
                                    style={format!("left: {x:.2}px; top: {y:.2}px;")}
                                    aria-pressed={is_active.to_string()}
                                    onclick={onclick}
                                >
                                    <span class="node-icon" aria-hidden="true">{pillar.icon}</span>
                                    <span class="node-label">{pillar.label}</span>
                                </button>
                            }
                        }) }
                    </div>

                    <div class="feature-panel-container" aria-live="polite">
                        { for PILLARS.iter().zip(slide_visibilities(*active, PILLARS.len())).map(|(pillar, visibility)| html! {
                            <div
                                class={classes!("feature-panel", visibility.is_active().then_some("active"))}
                                aria-hidden={visibility.aria_hidden()}
                            >
                                <div class="panel-badge">{format!("{} {}", pillar.icon, pillar.label)}</div>
                                <h3>{pillar.title}</h3>
                                <p>{pillar.description}</p>
                                <div class="capabilities">
                                    { for pillar.capabilities.iter().map(|capability| html! {
                                        <div class="capability">
                                            <span class="cap-dot" aria-hidden="true" />
                                            <span>{*capability}</span>
                                        </div>
                                    }) }
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(LearningModes)]
fn learning_modes() -> Html {
    let selected = use_state_eq(|| None::<&'static str>);

    html! {
        <section id="modes" class="modes-section">
            <CosmicOrb size={400} x={90} y={30} accent={true} />
            <div class="container">
                <div class="section-header">
                    <span class="section-tag">{"◉ ADAPTIVE LEARNING"}</span>
                    <h2>{"A thousand ways to learn"}</h2>
                    <p>{"Noteshell adapts the outputs to how you learn best."}</p>
                </div>

                <div class="modes-grid">
                    { for LEARNING_MODES.iter().map(|mode| {
                        let is_active = *selected == Some(mode.id);
                        let onclick = {
                            let selected = selected.clone();
                            let id = mode.id;
                            Callback::from(move |_| selected.set(toggle_selection(*selected, id)))
                        };

                        html! {
                            <button
                                key={mode.id}
                                type="button"
                                class={classes!("mode-card", is_active.then_some("active"))}
                                aria-pressed={is_active.to_string()}
                                onclick={onclick}
                            >
                                <div class="mode-image-placeholder" aria-hidden="true">
                                    <div class="placeholder-content">
                                        <span class="placeholder-icon">{mode.icon}</span>
                                        <span class="placeholder-text">{mode.image_alt}</span>
                                    </div>
                                    <div class="corner tl" />
                                    <div class="corner tr" />
                                    <div class="corner bl" />
                                    <div class="corner br" />
                                </div>
                                <div class="mode-content">
                                    <div class="mode-header">
                                        <span class="mode-icon" aria-hidden="true">{mode.icon}</span>
                                        <span class="mode-label">{mode.label}</span>
                                    </div>
                                    <p class={classes!("mode-description", is_active.then_some("show"))}>
                                        {mode.description}
                                    </p>
                                </div>
                            </button>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

fn waitlist_link(class: Classes, label: &'static str) -> Html {
    html! {
        <a class={class} href={WAITLIST_FORM_URL} target="_blank" rel="noopener noreferrer">
            {label}
            <span class="btn-arrow" aria-hidden="true">{"→"}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[function_component(Waitlist)]
fn waitlist() -> Html {
    html! {
        <section id="waitlist" class="waitlist-section">
            <CosmicOrb size={600} x={50} y={50} />
            <CosmicOrb size={300} x={10} y={20} accent={true} />
            <CosmicOrb size={350} x={90} y={80} />
            <div class="container">
                <div class="section-header center">
                    <span class="section-tag">{"◉ EARLY ACCESS"}</span>
                    <h2>{"Be the first to explore"}</h2>
                    <p>
                        {"Noteshell is launching soon. Join the waitlist to get early access and help shape the future of learning."}
                    </p>
                </div>
                <div class="waitlist-cta">
                    { waitlist_link(classes!("btn-primary", "large", "waitlist-btn"), "Join the Waitlist") }
                </div>
            </div>
        </section>
    }
}

#[function_component(FinalCta)]
fn final_cta() -> Html {
    html! {
        <section class="cta-section">
            <CosmicOrb size={800} x={50} y={50} />
            <CosmicOrb size={400} x={20} y={30} accent={true} />
            <div class="cta-content">
                <div class="cta-badge">{"Ready to begin?"}</div>
                <h2>{"The universe of knowledge"}<br />{"awaits your curiosity."}</h2>
                <p>{"Join thousands of curious minds transforming how they learn."}</p>
                <div class="cta-buttons">
                    { waitlist_link(classes!("btn-primary", "large"), "Start your journey") }
                    <a class="btn-ghost" href="#features">{"Explore the features"}</a>
                </div>
            </div>
        </section>
    }
}

#[function_component(HomePage)]
pub(super) fn home_page() -> Html {
    html! {
        <>
            <Hero />
            <StickyFeatures />
            <InteractiveDemo />
            <FeatureTriangle />
            <LearningModes />
            <ComparisonTable />
            <Pricing />
            <Waitlist />
            <FinalCta />
        </>
    }
}
