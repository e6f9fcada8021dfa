use yew::prelude::*;

use super::chrome::CosmicOrb;
use crate::{
    content::WAITLIST_FORM_URL,
    pricing::{BillingPeriod, Plan, PLANS, YEARLY_DISCOUNT_LABEL},
};

fn plan_card(plan: &'static Plan, period: BillingPeriod) -> Html {
    html! {
        <div key={plan.name} class={classes!("pricing-card", plan.popular.then_some("popular"))}>
            if plan.popular {
                <div class="popular-badge">{"Most popular"}</div>
            }
            <div class="plan-icon" aria-hidden="true">{plan.icon}</div>
            <h3 class="plan-name">{plan.name}</h3>
            <p class="plan-tagline">{plan.tagline}</p>
            <div class="plan-price">
                <span class="price-currency">{"$"}</span>
                <span class="price-amount">{plan.price(period).to_string()}</span>
                <span class="price-period">{"/mo"}</span>
            </div>
            <ul class="plan-features">
                { for plan.features.iter().map(|feature| html! {
                    <li>
                        <span class="feature-check" aria-hidden="true">{"✓"}</span>
                        <span>{*feature}</span>
                    </li>
                }) }
            </ul>
            <a
                class={classes!("plan-cta", if plan.popular { "primary" } else { "secondary" })}
                href={WAITLIST_FORM_URL}
                target="_blank"
                rel="noopener noreferrer"
            >
                {plan.cta}
            </a>
        </div>
    }
}

#[function_component(Pricing)]
pub(super) fn pricing() -> Html {
    let period = use_state_eq(BillingPeriod::default);
    let yearly = period.is_yearly();

    let on_toggle = {
        let period = period.clone();
        Callback::from(move |_: MouseEvent| period.set(period.toggled()))
    };

    html! {
        <section id="pricing" class="pricing-section">
            <CosmicOrb size={600} x={50} y={50} />
            <CosmicOrb size={300} x={10} y={20} accent={true} />
            <CosmicOrb size={350} x={90} y={80} />
            <div class="container">
                <div class="section-header center">
                    <span class="section-tag">{"◉ PRICING"}</span>
                    <h2>{"Choose your orbit"}</h2>
                    <p>{"Start free. Scale as you grow."}</p>
                </div>

                <div class="billing-toggle">
                    <span class={classes!("billing-label", (!yearly).then_some("is-current"))}>{"Monthly"}</span>
                    <button
                        type="button"
                        class="toggle-switch"
                        role="switch"
                        aria-checked={yearly.to_string()}
                        aria-label="Bill yearly"
                        onclick={on_toggle}
                    >
                        <span class={classes!("toggle-knob", yearly.then_some("yearly"))} />
                    </button>
                    <span class={classes!("billing-label", yearly.then_some("is-current"))}>
                        {"Yearly"}
                        <span class="save-badge">{YEARLY_DISCOUNT_LABEL}</span>
                    </span>
                </div>

                <div class="pricing-grid">
                    { for PLANS.iter().map(|plan| plan_card(plan, *period)) }
                </div>

                <div class="enterprise-banner">
                    <div class="enterprise-content">
                        <span class="enterprise-icon" aria-hidden="true">{"🏛"}</span>
                        <div>
                            <h4>{"Enterprise & Education"}</h4>
                            <p>{"Custom plans for universities, bootcamps, and large teams."}</p>
                        </div>
                    </div>
                    <a class="btn-ghost" href={WAITLIST_FORM_URL} target="_blank" rel="noopener noreferrer">
                        {"Get in touch"}
                    </a>
                </div>
            </div>
        </section>
    }
}
