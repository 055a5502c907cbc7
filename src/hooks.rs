use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Holds the state and callbacks for a validated input field.
#[derive(Clone)]
pub struct ValidatedInput {
    /// The current text content of the input field.
    pub text: String,
    /// An optional error message if validation failed.
    pub error: Option<String>,
    /// Callback for the text input's `oninput` event. Updates the internal text state.
    pub on_text_input: Callback<InputEvent>,
    /// Callback to trigger parsing and validation of the current text.
    /// Wired to `onchange`, which fires when the field loses focus.
    pub on_commit: Callback<Event>,
    /// Replace the text programmatically (preset buttons) and clear any error.
    pub set_text: Callback<String>,
}

/// Custom hook to manage state for a validated input field.
#[hook]
pub fn use_validated_input<T: 'static>(
    initial_text: &'static str,
    parse_and_validate: Rc<dyn Fn(&str) -> Result<T, String>>,
) -> ValidatedInput {
    let text_state_handle: UseStateHandle<String> = use_state(|| initial_text.to_string());
    let error_state_handle: UseStateHandle<Option<String>> = use_state(|| None::<String>);

    let on_text_input = {
        let text_setter = text_state_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text_setter.set(input.value());
        })
    };

    let on_commit = {
        let error_setter = error_state_handle.clone();
        let parse_fn = parse_and_validate;

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let text = input.value();
            // An empty field is only an error once the form is submitted.
            if text.trim().is_empty() {
                error_setter.set(None);
                return;
            }
            error_setter.set(parse_fn(&text).err());
        })
    };

    let set_text = {
        let text_setter = text_state_handle.clone();
        let error_setter = error_state_handle.clone();
        Callback::from(move |new_text: String| {
            text_setter.set(new_text);
            error_setter.set(None);
        })
    };

    ValidatedInput {
        text: (*text_state_handle).clone(),
        error: (*error_state_handle).clone(),
        on_text_input,
        on_commit,
        set_text,
    }
}

/// Current value of a `<select>` plus its `onchange` callback.
#[derive(Clone, PartialEq)]
pub struct SelectField {
    pub value: String,
    pub on_change: Callback<Event>,
}

#[hook]
pub fn use_select_field(initial: &'static str) -> SelectField {
    let value = use_state(|| initial.to_string());
    let on_change = {
        let value = value.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            value.set(select.value());
        })
    };

    SelectField {
        value: (*value).clone(),
        on_change,
    }
}
