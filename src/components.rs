//! Yew view components for the salary counter UI.
//!
//! `SalaryForm` collects and validates input; `EarningsDisplay` is stateless
//! and renders whatever sample the owning component last published.

use std::rc::Rc;

use rust_decimal::Decimal;
use salary_counter::{
    config::{
        DEFAULT_AMOUNT_TEXT, DEFAULT_CURRENCY, DEFAULT_HOLIDAY_POLICY, DEFAULT_PERIOD,
        DEFAULT_WORKING_HOURS_TEXT, PRESET_AMOUNTS, PROGRESS_HORIZON_MS,
    },
    format_currency, format_elapsed, group_thousands, progress_percent,
    validation::{parse_amount, parse_working_hours},
    validate_form, AccrualSession, Currency, HolidayPolicy, Period, SalaryDeclaration,
    SalaryFormInput, Sample,
};
use yew::prelude::*;

use crate::hooks::{use_select_field, use_validated_input};

/// Renders an inline error message, or nothing.
fn field_error(error: &Option<String>) -> Html {
    match error {
        Some(msg) => html! { <p class="field-error">{ msg }</p> },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct PresetButtonsProps {
    pub on_pick: Callback<u64>,
}

/// Quick-fill buttons for common salary amounts.
#[function_component(PresetButtons)]
pub fn preset_buttons(props: &PresetButtonsProps) -> Html {
    html! {
        <div class="presets">
            { PRESET_AMOUNTS.iter().map(|&amount| {
                let on_pick = props.on_pick.clone();
                html! {
                    <button type="button"
                        class="preset"
                        onclick={Callback::from(move |_| on_pick.emit(amount))}
                    >
                        { group_thousands(amount.into()) }
                    </button>
                }
            }).collect::<Html>() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SalaryFormProps {
    pub on_submit: Callback<SalaryDeclaration>,
}

#[function_component(SalaryForm)]
pub fn salary_form(props: &SalaryFormProps) -> Html {
    let currency = use_select_field(DEFAULT_CURRENCY);
    let period = use_select_field(DEFAULT_PERIOD);
    let holiday_policy = use_select_field(DEFAULT_HOLIDAY_POLICY);
    let amount_parser: Rc<dyn Fn(&str) -> Result<Decimal, String>> =
        Rc::new(|s: &str| parse_amount(s).map_err(|e| e.to_string()));
    let hours_parser: Rc<dyn Fn(&str) -> Result<Decimal, String>> =
        Rc::new(|s: &str| parse_working_hours(s).map_err(|e| e.to_string()));
    let amount = use_validated_input(DEFAULT_AMOUNT_TEXT, amount_parser);
    let working_hours = use_validated_input(DEFAULT_WORKING_HOURS_TEXT, hours_parser);
    let form_error = use_state(|| None::<String>);

    let on_preset = {
        let set_text = amount.set_text.clone();
        Callback::from(move |value: u64| set_text.emit(value.to_string()))
    };

    let onsubmit = {
        let input = SalaryFormInput {
            amount: amount.text.clone(),
            period: period.value.clone(),
            currency: currency.value.clone(),
            working_hours: working_hours.text.clone(),
            holiday_policy: holiday_policy.value.clone(),
        };
        let form_error = form_error.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate_form(&input) {
                Ok(declaration) => {
                    form_error.set(None);
                    on_submit.emit(declaration);
                }
                Err(err) => form_error.set(Some(err.to_string())),
            }
        })
    };

    html! {
        <form class="salary-form" {onsubmit}>
            <div class="form-group">
                <label for="currency">{ "Currency" }</label>
                <select id="currency" onchange={currency.on_change.clone()}>
                    { Currency::ALL.iter().map(|c| html! {
                        <option value={c.code()} selected={currency.value == c.code()}>
                            { format!("{} ({})", c.name(), c.symbol()) }
                        </option>
                    }).collect::<Html>() }
                </select>
            </div>

            <div class="form-group">
                <label for="amount">{ "Salary amount" }</label>
                <input id="amount"
                    type="text"
                    inputmode="decimal"
                    placeholder="e.g. 120000"
                    value={amount.text.clone()}
                    oninput={amount.on_text_input.clone()}
                    onchange={amount.on_commit.clone()}
                />
                <PresetButtons on_pick={on_preset} />
                { field_error(&amount.error) }
            </div>

            <div class="form-group">
                <label for="period">{ "Pay period" }</label>
                <select id="period" onchange={period.on_change.clone()}>
                    { Period::ALL.iter().map(|p| html! {
                        <option value={p.code()} selected={period.value == p.code()}>
                            { p.label() }
                        </option>
                    }).collect::<Html>() }
                </select>
            </div>

            <div class="form-group">
                <label for="working_hours">{ "Working hours per day" }</label>
                <input id="working_hours"
                    type="text"
                    inputmode="decimal"
                    value={working_hours.text.clone()}
                    oninput={working_hours.on_text_input.clone()}
                    onchange={working_hours.on_commit.clone()}
                />
                { field_error(&working_hours.error) }
            </div>

            <div class="form-group">
                <label for="holiday_policy">{ "Working days" }</label>
                <select id="holiday_policy" onchange={holiday_policy.on_change.clone()}>
                    { HolidayPolicy::ALL.iter().map(|p| html! {
                        <option value={p.code()} selected={holiday_policy.value == p.code()}>
                            { p.label() }
                        </option>
                    }).collect::<Html>() }
                </select>
            </div>

            if let Some(err) = &*form_error {
                <div class="current-error compact">{ err }</div>
            }

            <button type="submit" class="primary">{ "Start counting →" }</button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub percent: f64,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    html! {
        <div class="progress">
            <div class="progress-fill" style={format!("width: {:.2}%", props.percent)}></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EarningsDisplayProps {
    pub session: AccrualSession,
    pub sample: Sample,
    pub on_reset: Callback<()>,
}

/// Live readout of a running session.
#[function_component(EarningsDisplay)]
pub fn earnings_display(props: &EarningsDisplayProps) -> Html {
    let declaration = props.session.declaration();
    let currency = declaration.currency();
    let on_reset = props.on_reset.clone();

    html! {
        <div class="earnings">
            <div class="earnings-header">
                <h3>{ "Your earnings are growing" }</h3>
                <span class="muted">
                    { format!("{}: {}{}",
                              declaration.period().label(),
                              currency.symbol(),
                              group_thousands(declaration.amount())) }
                </span>
            </div>

            <div class="earnings-counter">
                <p class="muted">{ "Earned so far" }</p>
                <p class="counter">{ format_currency(props.sample.earnings, currency) }</p>
                <p class="muted">
                    { format!("{} per second", format_currency(declaration.per_second_rate(), currency)) }
                </p>
            </div>

            <div class="elapsed">
                <div class="elapsed-row">
                    <span>{ "Elapsed" }</span>
                    <span class="tabular">{ format_elapsed(props.sample.elapsed_ms) }</span>
                </div>
                <ProgressBar percent={progress_percent(props.sample.elapsed_ms, PROGRESS_HORIZON_MS)} />
            </div>

            <button class="secondary" onclick={Callback::from(move |_| on_reset.emit(()))}>
                { "← Start over" }
            </button>
        </div>
    }
}
