use super::{
    components::{
        table::AttendanceGroups,
        toolbar::{BulkCreateForm, DateFilter},
    },
    utils::{visible_groups, DELETE_CONFIRM_MESSAGE},
    view_model::use_attendance_view_model,
};
use crate::{
    api::AttendanceUpdate,
    components::{
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{Layout, LoadingSpinner},
    },
    state::resource::{load_state, LoadState},
};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    view! {
        <Layout>
            <AttendancePanel />
        </Layout>
    }
}

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let vm = use_attendance_view_model();
    let query = vm.query;
    let records = vm.records;

    let on_create = {
        let vm = vm.clone();
        Callback::new(move |_| {
            vm.create_for_all();
        })
    };
    let on_filter = {
        let vm = vm.clone();
        Callback::new(move |raw: String| vm.set_filter(raw))
    };
    let on_reset = {
        let vm = vm.clone();
        Callback::new(move |_| vm.reset_filter())
    };
    let on_update = {
        let vm = vm.clone();
        Callback::new(move |(id, update): (i64, AttendanceUpdate)| vm.update(id, update))
    };
    let on_delete = {
        let vm = vm.clone();
        Callback::new(move |id: i64| vm.request_delete(id))
    };
    let on_confirm = {
        let vm = vm.clone();
        Callback::new(move |_| {
            vm.confirm_delete();
        })
    };
    let on_cancel = {
        let vm = vm.clone();
        Callback::new(move |_| vm.cancel_delete())
    };
    let retry = Callback::new(move |_| query.update(|q| *q = q.refresh()));
    let pending_delete = vm.pending_delete;

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">"Attendance Management"</h1>
            <BulkCreateForm
                date_input=vm.create_date_input
                pending=vm.bulk_action.pending().into()
                message=vm.bulk_message.into()
                error=vm.bulk_error.into()
                on_create=on_create
            />
            <DateFilter value=vm.filter_input.into() on_change=on_filter on_reset=on_reset />
            {move || match load_state(records.get()) {
                LoadState::Loading => view! { <LoadingSpinner /> }.into_view(),
                LoadState::Failed(err) => view! {
                    <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) on_retry=retry />
                }
                .into_view(),
                LoadState::Empty => view! { <EmptyState title="No attendance records found." /> }.into_view(),
                LoadState::Ready(list) => {
                    let groups = visible_groups(list, query.get_untracked().date);
                    if groups.is_empty() {
                        view! { <EmptyState title="No attendance records found." /> }.into_view()
                    } else {
                        view! { <AttendanceGroups groups=groups on_update=on_update on_delete=on_delete /> }
                            .into_view()
                    }
                }
            }}
            <ConfirmDialog
                is_open=Signal::derive(move || pending_delete.get().is_some())
                title="Delete attendance"
                message=DELETE_CONFIRM_MESSAGE.to_string()
                on_confirm=on_confirm
                on_cancel=on_cancel
                confirm_label="Delete"
                destructive=true
            />
        </div>
    }
}
