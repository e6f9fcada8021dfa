use std::{cell::RefCell, rc::Rc};

use yew::prelude::*;

use super::{
    browser::{measure_section, scroll_y, FrameScheduler, SizeObserver, WindowListener},
    chrome::CosmicOrb,
};
use crate::{
    content::{feature_slide_count, FeatureSlide, FEATURE_SLIDES},
    scroll::{active_index, slide_visibilities, ProgressSampler, SlideVisibility},
};

/// Progress through the section behind `section`, published at most once per
/// animation frame.
#[hook]
fn use_scroll_progress(section: NodeRef) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with(section, move |section| {
            let section = section.clone();
            let sampler = Rc::new(RefCell::new(ProgressSampler::new(measure_section(
                &section,
            ))));

            let frames = {
                let sampler = sampler.clone();
                Rc::new(FrameScheduler::new(move || {
                    let published = sampler.borrow_mut().on_frame();
                    if let Some(next) = published {
                        progress.set(next);
                    }
                }))
            };

            let refresh_geometry = {
                let sampler = sampler.clone();
                let frames = frames.clone();
                let section = section.clone();
                move || {
                    let geometry = measure_section(&section);
                    if sampler.borrow_mut().on_resize(geometry) {
                        frames.schedule();
                    }
                }
            };

            let scroll_listener = {
                let sampler = sampler.clone();
                let frames = frames.clone();
                WindowListener::passive("scroll", move || {
                    if sampler.borrow_mut().on_scroll(scroll_y()) {
                        frames.schedule();
                    }
                })
            };
            let resize_listener = WindowListener::passive("resize", refresh_geometry.clone());
            let observer = section
                .cast::<web_sys::Element>()
                .and_then(|element| SizeObserver::observe(&element, refresh_geometry));
            if observer.is_none() {
                gloo_console::warn!("ResizeObserver unavailable, journey layout refreshes on window resize only");
            }

            if sampler.borrow_mut().on_scroll(scroll_y()) {
                frames.schedule();
            }

            move || {
                drop(observer);
                drop(resize_listener);
                drop(scroll_listener);
                drop(frames);
            }
        });
    }

    *progress
}

fn content_slide(slide: &'static FeatureSlide, visibility: SlideVisibility) -> Html {
    html! {
        <article
            class={classes!("feature-slide", visibility.class())}
            aria-hidden={visibility.aria_hidden()}
            inert={(!visibility.is_active()).then_some("inert")}
        >
            <div class="feature-header">
                <span class="feature-number">{slide.number}</span>
                <span class="feature-label">{slide.label}</span>
            </div>
            <h2 class="feature-title">{slide.title}</h2>
            <p class="feature-description">{slide.description}</p>
            <div class="feature-metric-card">
                <div class="metric-main">
                    <span class="metric-number">{slide.metric}</span>
                    <span class="metric-unit">{slide.metric_unit}</span>
                </div>
                <p class="metric-description">{slide.metric_label}</p>
            </div>
        </article>
    }
}

fn visual_slide(slide: &'static FeatureSlide, visibility: SlideVisibility) -> Html {
    html! {
        <figure
            class={classes!("visual-frame", visibility.class())}
            aria-hidden={visibility.aria_hidden()}
            inert={(!visibility.is_active()).then_some("inert")}
        >
            <div class="frame-glow" />
            <img class="frame-image" src={slide.visual} alt="" loading="lazy" />
            <figcaption class="frame-content">
                <span class="frame-icon">{slide.icon}</span>
                <span class="frame-text">{slide.caption}</span>
            </figcaption>
        </figure>
    }
}

#[function_component(StickyFeatures)]
pub(super) fn sticky_features() -> Html {
    let section = use_node_ref();
    let progress = use_scroll_progress(section.clone());
    let active = active_index(progress, feature_slide_count());
    let slides = || FEATURE_SLIDES.iter().zip(slide_visibilities(active, FEATURE_SLIDES.len()));

    html! {
        <section
            id="journey"
            class="sticky-features"
            ref={section}
            style={format!("--slide-count: {};", FEATURE_SLIDES.len())}
        >
            <div class="sticky-container">
                <CosmicOrb size={600} x={85} y={50} />

                <div class="feature-content" aria-live="polite">
                    { for slides().map(|(slide, visibility)| content_slide(slide, visibility)) }
                </div>

                <div class="feature-visual">
                    { for slides().map(|(slide, visibility)| visual_slide(slide, visibility)) }
                </div>

                <div
                    class="feature-rail"
                    role="progressbar"
                    aria-label="Journey progress"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow={format!("{:.0}", progress * 100.0)}
                    style={format!("--progress: {progress:.4};")}
                >
                    <div class="rail-fill" />
                    { for slides().map(|(slide, visibility)| html! {
                        <span
                            class={classes!("rail-dot", visibility.class())}
                            title={slide.label}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}
