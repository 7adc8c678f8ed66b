use crate::api::ApiError;
use leptos::*;

fn validation_items(error: &ApiError) -> Vec<String> {
    if error.code != "VALIDATION_ERROR" {
        return Vec::new();
    }
    error
        .details
        .as_ref()
        .and_then(|details| details.get("errors"))
        .and_then(|errors| errors.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// In-place error for failed loads. Validation failures list each message;
/// `on_retry` adds a "Try Again" button.
#[component]
pub fn InlineErrorMessage(
    error: Signal<Option<ApiError>>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded space-y-2 my-2" role="alert">
                <p class="font-semibold">{move || error.get().map(|e| e.error).unwrap_or_default()}</p>
                {move || {
                    let items = error.get().map(|e| validation_items(&e)).unwrap_or_default();
                    (items.len() > 1).then(|| view! {
                        <ul class="list-disc list-inside text-sm">
                            {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                        </ul>
                    })
                }}
                {on_retry.map(|retry| view! {
                    <button
                        type="button"
                        class="px-3 py-1 text-sm font-medium rounded bg-red-600 text-white hover:bg-red-700"
                        on:click=move |_| retry.call(())
                    >
                        "Try Again"
                    </button>
                })}
            </div>
        </Show>
    }
}
