use super::{
    form::{StatusPicker, TaskFields},
    utils::TaskForm,
};
use crate::{
    api::{ApiClient, UpdateTask},
    components::{error::InlineErrorMessage, layout::Layout},
    state::resource::{alert_on_error, ReloadToken},
    utils::{dialog, time::today_utc},
};
use leptos::{ev::SubmitEvent, *};
use leptos_router::use_params_map;

#[component]
pub fn EditTaskPage() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()))
    });
    view! {
        <Layout>
            <EditTaskPanel id=id />
        </Layout>
    }
}

#[component]
pub fn EditTaskPanel(id: Signal<Option<i64>>) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let form = create_rw_signal(TaskForm::for_day(today_utc()));
    let error = create_rw_signal(None::<String>);
    let reload = ReloadToken::new();

    let api_for_load = api.clone();
    let task = create_resource(
        move || (id.get(), reload.get()),
        move |(id, _)| {
            let api = api_for_load.clone();
            async move {
                match id {
                    Some(id) => api.get_task(id).await.map(Some),
                    None => Ok(None),
                }
            }
        },
    );

    create_effect(move |_| match task.get() {
        Some(Ok(Some(loaded))) => form.set(TaskForm::from_task(&loaded)),
        Some(Err(err)) => log::error!("Failed to load task: {}", err),
        _ => {}
    });
    let load_error = Signal::derive(move || task.get().and_then(|result| result.err()));
    let retry = Callback::new(move |_| reload.bump());

    let update_action = create_action(move |(id, update): &(i64, UpdateTask)| {
        let api = api.clone();
        let (id, update) = (*id, update.clone());
        async move { api.update_task(id, &update).await }
    });
    create_effect(move |_| {
        if let Some(result) = update_action.value().get() {
            match &result {
                Ok(()) => dialog::navigate_to("/tasks"),
                Err(err) => {
                    log::error!("Failed to update task: {}", err);
                    alert_on_error(&result);
                }
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(task_id) = id.get_untracked() else {
            return;
        };
        match form.with_untracked(TaskForm::to_update) {
            Ok(update) => {
                error.set(None);
                update_action.dispatch((task_id, update));
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    view! {
        <div class="p-6">
            <h1 class="text-2xl font-bold mb-4">"Edit Task"</h1>
            <InlineErrorMessage error=load_error on_retry=retry />
            <Show when=move || error.get().is_some()>
                <p class="text-red-500 mb-2">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <form class="flex flex-col gap-4 w-full max-w-md" on:submit=on_submit>
                <TaskFields form=form />
                <StatusPicker form=form />
                <button
                    type="submit"
                    class="bg-blue-600 text-white py-2 rounded disabled:bg-gray-400"
                    disabled=move || update_action.pending().get()
                >
                    "Update Task"
                </button>
            </form>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn edit_form_renders_status_choices() {
        let html = render_to_string(move || {
            view! { <EditTaskPanel id=Signal::derive(|| Some(3)) /> }
        });
        assert!(html.contains("Edit Task"));
        assert!(html.contains("Update Task"));
        assert!(html.contains("In Progress"));
    }
}
