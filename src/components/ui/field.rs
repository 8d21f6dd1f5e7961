use crate::app_lib::theme::Theme;
use leptos::prelude::*;

/// Labelled text input. Uncontrolled: the route owns the value signal and
/// receives updates through `set`.
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    set: WriteSignal<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");

    view! {
        <div class="mb-5">
            <label class=Theme::LABEL for=id>
                {label}
            </label>
            <input
                id=id
                type=input_type
                class=Theme::INPUT
                placeholder=placeholder.unwrap_or("")
                autocomplete=autocomplete.unwrap_or("off")
                required=required
                on:input=move |event| set.set(event_target_value(&event))
            />
        </div>
    }
}
