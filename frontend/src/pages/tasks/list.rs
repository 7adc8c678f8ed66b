use super::utils::{edit_task_path, DELETE_CONFIRM_MESSAGE};
use crate::{
    api::{ApiClient, Task},
    components::{
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{Layout, LoadingSpinner},
    },
    state::{
        resource::{alert_on_error, load_state, run_mutation, LoadState, ReloadToken},
        session::use_session,
    },
    utils::time::format_iso_date,
};
use leptos::*;

const CELL: &str = "py-2 px-4 border";

#[component]
pub fn TaskTable(tasks: Vec<Task>, on_delete: Callback<i64>) -> impl IntoView {
    view! {
        <table class="w-full table-auto border-collapse border border-gray-300 shadow-md bg-white">
            <thead class="bg-gray-200">
                <tr>
                    {["ID", "Title", "Description", "Assigned Date", "Due Date", "Employee", "Status", "Actions"]
                        .into_iter()
                        .map(|label| view! { <th class=CELL>{label}</th> })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                {tasks
                    .into_iter()
                    .map(|task| {
                        let id = task.id;
                        let assignee = task.assignee_name();
                        let description = task
                            .description
                            .clone()
                            .filter(|d| !d.trim().is_empty())
                            .unwrap_or_else(|| "-".to_string());
                        view! {
                            <tr class="text-center hover:bg-gray-100" data-task-id=id>
                                <td class=CELL>{id}</td>
                                <td class=CELL>{task.task_title}</td>
                                <td class=CELL>{description}</td>
                                <td class=CELL>{format_iso_date(task.assigned_date)}</td>
                                <td class=CELL>{format_iso_date(task.due_date)}</td>
                                <td class=CELL>{assignee}</td>
                                <td class=CELL>{task.status.label()}</td>
                                <td class=CELL>
                                    <div class="flex justify-center gap-2">
                                        <a
                                            href=edit_task_path(id)
                                            class="bg-yellow-500 hover:bg-yellow-600 text-white px-3 py-1 rounded"
                                        >
                                            "Edit"
                                        </a>
                                        <button
                                            type="button"
                                            class="bg-red-500 hover:bg-red-600 text-white px-3 py-1 rounded"
                                            on:click=move |_| on_delete.call(id)
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
pub fn TasksPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let session = use_session();
    let hr_id = Signal::derive(move || session.state().with(|s| s.hr_id()));
    let reload = ReloadToken::new();

    let api_for_list = api.clone();
    let tasks = create_resource(
        move || (hr_id.get(), reload.get()),
        move |(hr_id, _)| {
            let api = api_for_list.clone();
            async move {
                match hr_id {
                    Some(id) => api.list_tasks_for_hr(id).await,
                    None => Ok(Vec::new()),
                }
            }
        },
    );

    let delete_action = create_action(move |id: &i64| {
        let api = api.clone();
        let id = *id;
        async move { run_mutation(api.delete_task(id), move || reload.bump()).await }
    });
    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            alert_on_error(&result);
        }
    });

    let pending_delete = create_rw_signal(None::<i64>);
    let on_delete = Callback::new(move |id: i64| pending_delete.set(Some(id)));
    let on_confirm = Callback::new(move |_| {
        if let Some(id) = pending_delete.get_untracked() {
            pending_delete.set(None);
            delete_action.dispatch(id);
        }
    });
    let on_cancel = Callback::new(move |_| pending_delete.set(None));
    let retry = Callback::new(move |_| reload.bump());

    view! {
        <Layout>
            <div class="flex justify-between items-center mb-4">
                <h1 class="text-2xl font-bold">"My Tasks"</h1>
                <a href="/create_task" class="bg-indigo-600 text-white px-4 py-2 rounded hover:bg-indigo-700">
                    "Create New Task"
                </a>
            </div>
            {move || match load_state(tasks.get()) {
                LoadState::Loading => view! { <LoadingSpinner /> }.into_view(),
                LoadState::Failed(err) => view! {
                    <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) on_retry=retry />
                }
                .into_view(),
                LoadState::Empty => view! { <EmptyState title="No tasks found." /> }.into_view(),
                LoadState::Ready(list) => view! { <TaskTable tasks=list on_delete=on_delete /> }.into_view(),
            }}
            <ConfirmDialog
                is_open=Signal::derive(move || pending_delete.get().is_some())
                title="Delete task"
                message=DELETE_CONFIRM_MESSAGE.to_string()
                on_confirm=on_confirm
                on_cancel=on_cancel
                confirm_label="Delete"
                destructive=true
            />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{hr_user, provide_session, task},
        ssr::render_to_string,
    };

    #[test]
    fn task_table_renders_rows_and_actions() {
        let html = render_to_string(move || {
            let mut second = task(2, "Onboarding");
            second.description = None;
            second.emp_full_name = None;
            view! { <TaskTable tasks=vec![task(1, "Quarterly review"), second] on_delete=Callback::new(|_| {}) /> }
        });
        assert_eq!(html.matches("data-task-id").count(), 2);
        assert!(html.contains("Quarterly review"));
        assert!(html.contains("href=\"/tasks/edit_task/1\""));
        assert!(html.contains("Evan Stone"));
        assert!(html.contains("2024-05-10"));
        assert!(html.contains("Pending"));
    }

    #[test]
    fn tasks_page_links_to_create_form() {
        let html = render_to_string(move || {
            provide_session(Some(hr_user(1)));
            view! { <TasksPage /> }
        });
        assert!(html.contains("My Tasks"));
        assert!(html.contains("href=\"/create_task\""));
        assert!(html.contains("animate-spin"));
    }
}
