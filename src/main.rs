//! Main module for the real-time salary counter using Yew.
//! Owns the display session and the repeating tick that samples it.

use gloo_timers::callback::Interval;
use log::debug;
use salary_counter::{config::TICK_MS, AccrualSession, LiveCounter, SalaryDeclaration, Sample};
use yew::prelude::*;

mod components;
mod hooks;

use components::{EarningsDisplay, SalaryForm};

/// Wall-clock time in milliseconds since the epoch.
fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Primary application component: form until submitted, live counter after.
#[function_component(Main)]
fn main_component() -> Html {
    // At most one session and one Interval live here at any time.
    let counter = use_mut_ref(LiveCounter::<Interval>::new);
    let session = use_state(|| None::<AccrualSession>);
    let sample = use_state(|| Sample::ZERO);

    // Stop ticking if the component unmounts mid-session
    {
        let counter = counter.clone();
        use_effect_with((), move |_| {
            move || counter.borrow_mut().reset()
        });
    }

    let on_submit = {
        let counter = counter.clone();
        let session = session.clone();
        let sample = sample.clone();
        Callback::from(move |declaration: SalaryDeclaration| {
            let started = AccrualSession::start(declaration, now_ms());
            sample.set(Sample::ZERO);

            let sample_setter = sample.clone();
            counter.borrow_mut().start(started, move |s| {
                let s = *s;
                debug!("Creating {} ms tick", TICK_MS);
                Interval::new(TICK_MS, move || {
                    sample_setter.set(s.sample(now_ms()));
                })
            });
            session.set(Some(started));
        })
    };

    let on_reset = {
        let counter = counter.clone();
        let session = session.clone();
        let sample = sample.clone();
        Callback::from(move |_: ()| {
            counter.borrow_mut().reset();
            session.set(None);
            sample.set(Sample::ZERO);
        })
    };

    html! {
        <div class="app">
            <div class="card">
                <div class="card-header">
                    <h1>{ "Real-time Salary Counter" }</h1>
                    <p class="muted">{ "Watch what you earn, second by second." }</p>
                </div>
                <div class="card-content">
                    if let Some(active) = *session {
                        <EarningsDisplay session={active} sample={*sample} {on_reset} />
                    } else {
                        <SalaryForm {on_submit} />
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component]
pub fn App() -> Html {
    html! { <Main /> }
}

/// Entry point: installs the panic hook and console logger, then renders the App.
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    yew::Renderer::<App>::new().render();
}
