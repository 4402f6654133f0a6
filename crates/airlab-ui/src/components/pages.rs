//! Main, debug, and digital-signals page bodies.

use crate::labels::{DebugLabels, MainLabels, NO_READING, PressureUnit, SignalRow, SignalsLabels};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct MainPageProps {
    pub labels: MainLabels,
}

#[function_component(MainPage)]
pub(crate) fn main_page(props: &MainPageProps) -> Html {
    let unit = use_state(PressureUnit::default);
    let labels = &props.labels;
    let symbol = labels.symbol(*unit).to_string();

    html! {
        <main class="page page-main">
            <section class="channels">
                {for labels.channels.iter().map(|card| html! {
                    <article class="channel-card">
                        <h2>{card.name.clone()}</h2>
                        <p class="reading">{card.reading.clone()}{" "}{symbol.clone()}</p>
                        <span class="status">{card.status.clone()}</span>
                    </article>
                })}
            </section>
            <section class="controls">
                <span>{labels.unit.clone()}</span>
                {for PressureUnit::all().into_iter().map(|candidate| {
                    let class = classes!("unit-btn", (*unit == candidate).then_some("active"));
                    let unit = unit.clone();
                    let onclick = Callback::from(move |_| unit.set(candidate));
                    html! {
                        <button type="button" class={class} onclick={onclick}>
                            {labels.symbol(candidate).to_string()}
                        </button>
                    }
                })}
                <button type="button" class="action" disabled={true}>{labels.calibrate.clone()}</button>
                <button type="button" class="action" disabled={true}>{labels.reset.clone()}</button>
                <button type="button" class="action" disabled={true}>{labels.shutdown.clone()}</button>
                <button type="button" class="action" disabled={true}>{labels.reboot.clone()}</button>
            </section>
        </main>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct DebugPageProps {
    pub labels: DebugLabels,
}

#[function_component(DebugPage)]
pub(crate) fn debug_page(props: &DebugPageProps) -> Html {
    let labels = &props.labels;
    let fields = &labels.fields;

    html! {
        <main class="page page-debug">
            <p class="debug-info">{labels.debug_info.clone()}</p>
            <section class="channels">
                {for labels.channels.iter().map(|name| html! {
                    <article class="debug-card">
                        <h2>{name.clone()}</h2>
                        <dl>
                            <dt>{fields.raw_value.clone()}</dt><dd>{NO_READING}</dd>
                            <dt>{fields.offset.clone()}</dt><dd>{NO_READING}</dd>
                            <dt>{fields.instant_pressure.clone()}</dt><dd>{NO_READING}</dd>
                            <dt>{fields.samples_in_avg.clone()}</dt><dd>{NO_READING}</dd>
                        </dl>
                    </article>
                })}
            </section>
            <p class="last-update">{labels.last_update.clone()}{" "}{NO_READING}</p>
            <section class="help">
                <h3>{labels.calibration_title.clone()}</h3>
                <p>{labels.calibration_text.clone()}</p>
                <p>{labels.moving_average.clone()}</p>
                <p>
                    {labels.system_status.clone()}
                    {" "}<code>{"airlab"}</code>{" "}
                    {labels.is_running.clone()}
                </p>
            </section>
        </main>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SignalsPageProps {
    pub labels: SignalsLabels,
}

#[function_component(SignalsPage)]
pub(crate) fn signals_page(props: &SignalsPageProps) -> Html {
    let labels = &props.labels;

    html! {
        <main class="page page-signals">
            <section class="signals">
                <h2>{labels.inputs_title.clone()}</h2>
                {signal_list(labels, &labels.inputs)}
            </section>
            <section class="signals">
                <h2>{labels.outputs_title.clone()}</h2>
                {signal_list(labels, &labels.outputs)}
            </section>
        </main>
    }
}

fn signal_list(labels: &SignalsLabels, rows: &[SignalRow]) -> Html {
    html! {
        <ul class="signal-list">
            {for rows.iter().map(|row| {
                let state = labels.state_of(row);
                let class = classes!("signal-state", state.class());
                html! {
                    <li>
                        <span class="signal-name">{row.name.clone()}</span>
                        <span class={class}>{labels.word(state).to_string()}</span>
                    </li>
                }
            })}
        </ul>
    }
}
