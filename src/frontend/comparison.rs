use yew::prelude::*;

use crate::comparison::{
    rivals, CellValue, Expansion, Row, ToolKey, DEFAULT_RIVAL, ROWS, TOOLS,
};

const CHECK_PATH: &str = "M9 16.17L4.83 12L3.41 13.41L9 19L21 7L19.59 5.59L9 16.17Z";

fn cell(value: CellValue, highlight: bool) -> Html {
    let mark = match value {
        CellValue::Yes => html! {
            <svg class="cell-icon" viewBox="0 0 24 24" width="18" height="18" aria-hidden="true" focusable="false">
                <path fill="currentColor" d={CHECK_PATH} />
            </svg>
        },
        CellValue::Partial => html! {
            <svg class="cell-icon" viewBox="0 0 24 24" width="18" height="18" aria-hidden="true" focusable="false">
                <circle cx="12" cy="12" r="5" fill="currentColor" />
            </svg>
        },
        CellValue::No => html! { <span class="cell-empty" aria-hidden="true" /> },
        CellValue::Text(text) => html! { <span class="cell-text">{text}</span> },
    };

    html! {
        <div class={classes!("cmp-cell", highlight.then_some("is-highlight"))} aria-label={value.label()}>
            {mark}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RowToggleProps {
    row: &'static Row,
    open: bool,
    on_toggle: Callback<&'static str>,
}

/// Feature label button that reveals the row's detail text.
#[function_component(RowToggle)]
fn row_toggle(props: &RowToggleProps) -> Html {
    let row = props.row;
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_| on_toggle.emit(row.id))
    };

    html! {
        <button
            type="button"
            class="cmp-row-toggle"
            role="cell"
            aria-expanded={props.open.to_string()}
            aria-controls={row.detail_id()}
            onclick={onclick}
        >
            <span class="cmp-row-title">
                <span class="cmp-chevron" aria-hidden="true">{if props.open { "▾" } else { "▸" }}</span>
                {row.label}
            </span>
            if let Some(helper) = row.helper {
                <span class="cmp-row-helper">{helper}</span>
            }
            <span id={row.detail_id()} class={classes!("cmp-row-detail", props.open.then_some("is-open"))}>
                {row.detail.unwrap_or_default()}
            </span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct RivalTabsProps {
    selected: ToolKey,
    on_select: Callback<ToolKey>,
}

#[function_component(RivalTabs)]
fn rival_tabs(props: &RivalTabsProps) -> Html {
    html! {
        <div class="cmp-tabs" role="tablist" aria-label="Compare tools">
            { for rivals().map(|tool| {
                let selected = tool.key == props.selected;
                let onclick = {
                    let on_select = props.on_select.clone();
                    let key = tool.key;
                    Callback::from(move |_| on_select.emit(key))
                };

                html! {
                    <button
                        key={tool.name}
                        type="button"
                        role="tab"
                        aria-selected={selected.to_string()}
                        class={classes!("cmp-tab", selected.then_some("is-active"))}
                        onclick={onclick}
                    >
                        {tool.name}
                    </button>
                }
            }) }
        </div>
    }
}

#[function_component(ComparisonTable)]
pub(super) fn comparison_table() -> Html {
    let expansion = use_state_eq(Expansion::default);
    let rival = use_state_eq(|| DEFAULT_RIVAL);

    let on_toggle = {
        let expansion = expansion.clone();
        Callback::from(move |id: &'static str| expansion.set(expansion.toggled(id)))
    };
    let set_all = |open: bool| {
        let expansion = expansion.clone();
        Callback::from(move |_: MouseEvent| expansion.set(expansion.with_all(open)))
    };
    let on_select = {
        let rival = rival.clone();
        Callback::from(move |key: ToolKey| rival.set(key))
    };

    let rival_tool = rival.tool();

    html! {
        <section id="comparison" class="comparison-section" aria-labelledby="comparison-title">
            <div class="container">
                <div class="cmp-header">
                    <div class="cmp-kicker">{"COMPARISON"}</div>
                    <h2 id="comparison-title">{"Noteshell vs the tools you already use"}</h2>
                    <p>{"Noteshell is built for learning outputs, not just storage."}</p>
                    <div class="cmp-actions" aria-label="Comparison controls">
                        <button type="button" class="cmp-action" onclick={set_all(true)}>{"Expand all"}</button>
                        <button type="button" class="cmp-action" onclick={set_all(false)}>{"Collapse all"}</button>
                        <div class="cmp-hint" aria-live="polite">{expansion.summary()}</div>
                    </div>
                </div>

                <div class="cmp-mobile">
                    <div class="cmp-mobile-top">
                        <div class="cmp-mobile-label">{"Compare Noteshell to"}</div>
                        <RivalTabs selected={*rival} on_select={on_select} />
                    </div>
                    <div class="cmp-mobile-grid" role="table" aria-label="Comparison table, mobile">
                        { for ROWS.iter().map(|row| html! {
                            <div key={row.id} class={classes!("cmp-mobile-row", row.emphasis.then_some("is-emphasis"))} role="row">
                                <RowToggle
                                    row={row}
                                    open={expansion.is_open(row.id)}
                                    on_toggle={on_toggle.clone()}
                                />
                                <div class="cmp-pairs" role="cell">
                                    <div class="cmp-pair">
                                        <div class="cmp-pair-label">{ToolKey::Noteshell.tool().name}</div>
                                        { cell(row.value(ToolKey::Noteshell), true) }
                                    </div>
                                    <div class="cmp-pair">
                                        <div class="cmp-pair-label">{rival_tool.name}</div>
                                        { cell(row.value(*rival), false) }
                                    </div>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="cmp-desktop" role="table" aria-label="Comparison table">
                    <div class="cmp-table-row cmp-table-head" role="row">
                        <div class="cmp-table-cell cmp-feature" role="columnheader">{"Features"}</div>
                        { for TOOLS.iter().map(|tool| html! {
                            <div
                                key={tool.name}
                                class={classes!("cmp-table-cell", "cmp-tool", tool.highlight.then_some("is-highlight"))}
                                role="columnheader"
                            >
                                <div class="cmp-tool-name">{tool.name}</div>
                                <div class="cmp-tool-sub">{tool.sub}</div>
                            </div>
                        }) }
                    </div>
                    { for ROWS.iter().map(|row| html! {
                        <div key={row.id} class={classes!("cmp-table-row", row.emphasis.then_some("is-emphasis"))} role="row">
                            <div class="cmp-table-cell cmp-feature">
                                <RowToggle
                                    row={row}
                                    open={expansion.is_open(row.id)}
                                    on_toggle={on_toggle.clone()}
                                />
                            </div>
                            { for TOOLS.iter().map(|tool| html! {
                                <div class="cmp-table-cell" role="cell">
                                    { cell(row.value(tool.key), tool.highlight) }
                                </div>
                            }) }
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
