use crate::components::layout::{ErrorMessage, SuccessMessage};
use leptos::*;

#[component]
pub fn BulkCreateForm(
    date_input: RwSignal<String>,
    pending: Signal<bool>,
    message: Signal<Option<String>>,
    error: Signal<Option<String>>,
    on_create: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg p-4 space-y-3">
            <div class="flex items-end gap-3">
                <div>
                    <label class="block text-sm font-medium text-gray-700">"Date"</label>
                    <input
                        type="date"
                        class="mt-1 border p-2 rounded"
                        prop:value=move || date_input.get()
                        on:input=move |ev| date_input.set(event_target_value(&ev))
                    />
                </div>
                <button
                    type="button"
                    class="bg-green-600 text-white px-4 py-2 rounded hover:bg-green-700 disabled:opacity-50"
                    disabled=move || pending.get()
                    on:click=move |_| on_create.call(())
                >
                    {move || if pending.get() { "Creating..." } else { "Create Attendance for All" }}
                </button>
            </div>
            <Show when=move || message.get().is_some()>
                <SuccessMessage message=message.get().unwrap_or_default() />
            </Show>
            <Show when=move || error.get().is_some()>
                <ErrorMessage message=error.get().unwrap_or_default() />
            </Show>
        </div>
    }
}

#[component]
pub fn DateFilter(
    value: Signal<String>,
    on_change: Callback<String>,
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex items-end gap-3 mb-6">
            <div>
                <label class="block text-sm font-medium text-gray-700">"Filter by date"</label>
                <input
                    type="date"
                    class="mt-1 border p-2 rounded"
                    prop:value=move || value.get()
                    on:change=move |ev| on_change.call(event_target_value(&ev))
                />
            </div>
            <button
                type="button"
                class="px-4 py-2 bg-gray-200 text-gray-800 rounded hover:bg-gray-300"
                on:click=move |_| on_reset.call(())
            >
                "Reset"
            </button>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn bulk_form_shows_created_count() {
        let html = render_to_string(move || {
            view! {
                <BulkCreateForm
                    date_input=create_rw_signal("2024-05-02".to_string())
                    pending=Signal::derive(|| false)
                    message=Signal::derive(|| Some("Attendance created for 10 employees.".to_string()))
                    error=Signal::derive(|| None)
                    on_create=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Create Attendance for All"));
        assert!(html.contains("Attendance created for 10 employees."));
    }

    #[test]
    fn bulk_form_disables_button_while_pending() {
        let html = render_to_string(move || {
            view! {
                <BulkCreateForm
                    date_input=create_rw_signal(String::new())
                    pending=Signal::derive(|| true)
                    message=Signal::derive(|| None)
                    error=Signal::derive(|| None)
                    on_create=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Creating..."));
        assert!(html.contains("disabled"));
    }
}
