use super::{
    form::{EmployeePicker, TaskFields},
    utils::{TaskForm, LOAD_FAILED_MESSAGE},
};
use crate::{
    api::{ApiClient, CreateTask},
    components::layout::Layout,
    state::session::use_session,
    utils::{dialog, time::today_utc},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn CreateTaskPage() -> impl IntoView {
    view! {
        <Layout>
            <CreateTaskPanel />
        </Layout>
    }
}

#[component]
pub fn CreateTaskPanel() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let session = use_session();
    let form = create_rw_signal(TaskForm::for_day(today_utc()));
    let error = create_rw_signal(None::<String>);

    let api_for_employees = api.clone();
    let employees_resource = create_resource(
        || (),
        move |_| {
            let api = api_for_employees.clone();
            async move { api.list_employees().await }
        },
    );
    let employees = Signal::derive(move || {
        employees_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let load_error = Signal::derive(move || {
        matches!(employees_resource.get(), Some(Err(_))).then(|| LOAD_FAILED_MESSAGE.to_string())
    });

    let submit_action = create_action(move |request: &CreateTask| {
        let api = api.clone();
        let request = request.clone();
        async move { api.create_task(&request).await }
    });
    let pending = submit_action.pending();

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(_) => dialog::navigate_to("/tasks"),
                Err(err) => {
                    log::error!("Failed to create task: {}", err);
                    error.set(Some(err.error));
                }
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match form.with_untracked(|f| f.to_create(session.hr_id())) {
            Ok(request) => {
                error.set(None);
                submit_action.dispatch(request);
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    let message = Signal::derive(move || error.get().or_else(|| load_error.get()));

    view! {
        <div class="flex justify-center mt-10">
            <div class="w-full max-w-md bg-white p-6 rounded-xl shadow-md">
                <h1 class="text-2xl font-bold mb-4 text-center">"Create Task"</h1>
                <Show when=move || message.get().is_some()>
                    <p class="text-red-500 mb-2">{move || message.get().unwrap_or_default()}</p>
                </Show>
                <form class="space-y-4" on:submit=on_submit>
                    <TaskFields form=form />
                    <EmployeePicker form=form employees=employees />
                    <button
                        type="submit"
                        class="w-full bg-indigo-600 text-white py-2 rounded disabled:bg-gray-400"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Creating..." } else { "Create Task" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
