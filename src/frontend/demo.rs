use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::chrome::CosmicOrb;
use crate::demo::{DemoState, Phase, StepStatus, PROCESSING_DELAY_MS, STEPS, TYPE_INTERVAL_MS};

const SIDEBAR_ITEMS: [&str; 4] = ["Home", "Notes", "Explore", "Flashcards"];
const ACTIVE_SIDEBAR_ITEM: usize = 1;

enum DemoAction {
    TypeNext,
    FinishProcessing,
    Advance,
}

#[derive(Clone, Copy, Default, PartialEq)]
struct DemoMachine(DemoState);

impl Reducible for DemoMachine {
    type Action = DemoAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            DemoAction::TypeNext => self.0.typed_one(),
            DemoAction::FinishProcessing => self.0.processing_finished(),
            DemoAction::Advance => self.0.advanced(),
        };

        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

fn interactive_area(state: &DemoState) -> Html {
    let step = state.current();

    if state.step() == 0 {
        return html! {
            <div class="typing-container">
                <div class="input-label">{"Your question"}</div>
                <div class="input-field">
                    <span>{state.typed_text()}</span>
                    <span class="typing-cursor" aria-hidden="true" />
                </div>
            </div>
        };
    }

    html! {
        <div class="result-container" aria-live="polite">
            {
                match state.phase() {
                    Phase::Processing => html! {
                        <div class="processing-state">
                            <div class="spinner" style={format!("border-top-color: {};", step.color)} />
                            <span>{step.processing}</span>
                        </div>
                    },
                    Phase::Result => html! {
                        <div class="result-state">
                            <span class="result-icon" aria-hidden="true">{step.result_icon}</span>
                            <span>{step.result}</span>
                        </div>
                    },
                    Phase::Typing => html! {},
                }
            }
        </div>
    }
}

fn progress_bar(state: &DemoState) -> Html {
    html! {
        <div class="demo-progress-bar">
            { for STEPS.iter().enumerate().map(|(index, step)| {
                let status = state.status_of(index);
                let reached = status != StepStatus::Upcoming;
                let dot_style = reached
                    .then(|| format!("background-color: {color}; border-color: {color};", color = step.color));

                html! {
                    <div key={step.id} class={classes!("progress-step", status.class())}>
                        <div class="progress-step-dot" style={dot_style}>
                            if status == StepStatus::Completed {
                                <span class="check" aria-hidden="true">{"✓"}</span>
                            }
                        </div>
                        <span class="progress-step-label">{step.title}</span>
                    </div>
                }
            }) }
            <div class="progress-track">
                <div
                    class="progress-track-fill"
                    style={format!("width: {:.2}%;", state.progress_percent())}
                />
            </div>
        </div>
    }
}

#[function_component(InteractiveDemo)]
pub(super) fn interactive_demo() -> Html {
    let machine = use_reducer(DemoMachine::default);
    let state = machine.0;

    {
        let dispatcher = machine.dispatcher();
        use_effect_with(state, move |current| {
            let pending = if current.is_typing() {
                Some(Timeout::new(TYPE_INTERVAL_MS, move || {
                    dispatcher.dispatch(DemoAction::TypeNext)
                }))
            } else if current.phase() == Phase::Processing {
                Some(Timeout::new(PROCESSING_DELAY_MS, move || {
                    dispatcher.dispatch(DemoAction::FinishProcessing)
                }))
            } else {
                None
            };

            move || drop(pending)
        });
    }

    let onclick = {
        let dispatcher = machine.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(DemoAction::Advance))
    };

    let onkeydown = {
        let dispatcher = machine.dispatcher();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                event.prevent_default();
                dispatcher.dispatch(DemoAction::Advance);
            }
        })
    };

    let step = state.current();

    html! {
        <section id="demo" class="demo-section">
            <CosmicOrb size={500} x={10} y={40} />
            <CosmicOrb size={400} x={90} y={70} accent={true} />
            <div class="container">
                <div class="section-header center">
                    <span class="section-tag">{"◉ EXPERIENCE THE JOURNEY"}</span>
                    <h2>{"From curiosity to creation"}</h2>
                    <p>
                        {"See how Noteshell transforms a simple question into structured knowledge."}
                        <br />
                        <span class="section-hint">{"Click or press Enter to interact"}</span>
                    </p>
                </div>

                <div
                    class="browser-window"
                    role="button"
                    tabindex="0"
                    aria-label={format!("Demo step {} of {}: {}", state.step() + 1, STEPS.len(), step.instruction)}
                    onclick={onclick}
                    onkeydown={onkeydown}
                >
                    <div class="window-titlebar">
                        <div class="traffic-lights" aria-hidden="true">
                            <span class="light close" />
                            <span class="light minimize" />
                            <span class="light maximize" />
                        </div>
                        <div class="url-bar-container">
                            <div class="url-bar">
                                <span class="url-lock" aria-hidden="true">{"🔒"}</span>
                                <span class="url-text">{"app.noteshell.ai"}</span>
                            </div>
                        </div>
                        <div class="window-controls" aria-hidden="true">{"⋮⋮"}</div>
                    </div>

                    <div class="app-content">
                        <div class="app-sidebar">
                            <div class="sidebar-header">
                                <span class="sidebar-logo" aria-hidden="true">{"◉"}</span>
                                <span class="sidebar-name">{"Noteshell"}</span>
                            </div>
                            <div class="sidebar-nav">
                                { for SIDEBAR_ITEMS.iter().enumerate().map(|(index, item)| html! {
                                    <div class={classes!("sidebar-item", (index == ACTIVE_SIDEBAR_ITEM).then_some("active"))}>
                                        {*item}
                                    </div>
                                }) }
                            </div>
                        </div>

                        <div class="app-main">
                            { progress_bar(&state) }

                            <div class="demo-content-area">
                                <div class="demo-step-header">
                                    <span
                                        class="step-icon"
                                        style={format!("background-color: {color}20; color: {color};", color = step.color)}
                                        aria-hidden="true"
                                    >
                                        {step.icon}
                                    </span>
                                    <div>
                                        <h3>{step.title}</h3>
                                        <p>{step.subtitle}</p>
                                    </div>
                                </div>

                                <div class="demo-interactive">
                                    { interactive_area(&state) }
                                </div>

                                <div class="demo-action-hint">
                                    <span class="key-badge" aria-hidden="true">{"↵"}</span>
                                    <span>{step.instruction}</span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
