use super::utils::TaskForm;
use crate::api::{Employee, TaskStatus};
use leptos::*;

const INPUT_CLASS: &str = "border p-2 w-full rounded";

/// Title, description and both dates; shared by the create and edit screens.
#[component]
pub fn TaskFields(form: RwSignal<TaskForm>) -> impl IntoView {
    view! {
        <input
            type="text"
            placeholder="Task Title"
            class=INPUT_CLASS
            required
            prop:value=move || form.with(|f| f.task_title.clone())
            on:input=move |ev| form.update(|f| f.task_title = event_target_value(&ev))
        />
        <textarea
            placeholder="Description"
            class=INPUT_CLASS
            prop:value=move || form.with(|f| f.description.clone())
            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
        ></textarea>
        <label class="block">
            "Assigned Date"
            <input
                type="date"
                class=INPUT_CLASS
                required
                prop:value=move || form.with(|f| f.assigned_date.clone())
                on:input=move |ev| form.update(|f| f.assigned_date = event_target_value(&ev))
            />
        </label>
        <label class="block">
            "Due Date"
            <input
                type="date"
                class=INPUT_CLASS
                required
                prop:value=move || form.with(|f| f.due_date.clone())
                on:input=move |ev| form.update(|f| f.due_date = event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn EmployeePicker(form: RwSignal<TaskForm>, employees: Signal<Vec<Employee>>) -> impl IntoView {
    view! {
        <select
            class=INPUT_CLASS
            required
            prop:value=move || form.with(|f| f.employee_id.clone())
            on:change=move |ev| form.update(|f| f.employee_id = event_target_value(&ev))
        >
            <option value="">"Select Employee"</option>
            {move || {
                employees
                    .get()
                    .into_iter()
                    .map(|emp| view! { <option value=emp.id.to_string()>{emp.full_name}</option> })
                    .collect_view()
            }}
        </select>
    }
}

#[component]
pub fn StatusPicker(form: RwSignal<TaskForm>) -> impl IntoView {
    view! {
        <select
            class=INPUT_CLASS
            prop:value=move || form.with(|f| f.status.as_str().to_string())
            on:change=move |ev| {
                if let Some(status) = TaskStatus::parse(&event_target_value(&ev)) {
                    form.update(|f| f.status = status);
                }
            }
        >
            {TaskStatus::ALL
                .into_iter()
                .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                .collect_view()}
        </select>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::employee, ssr::render_to_string};
    use chrono::NaiveDate;

    fn blank_form() -> RwSignal<TaskForm> {
        create_rw_signal(TaskForm::for_day(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()))
    }

    #[test]
    fn employee_picker_lists_employees() {
        let html = render_to_string(move || {
            let employees = Signal::derive(|| vec![employee(1, "Aisha Rahman"), employee(2, "Tanvir Ahmed")]);
            view! { <EmployeePicker form=blank_form() employees=employees /> }
        });
        assert!(html.contains("Select Employee"));
        assert!(html.contains("value=\"2\""));
        assert!(html.contains("Tanvir Ahmed"));
    }

    #[test]
    fn status_picker_offers_every_status() {
        let html = render_to_string(move || view! { <StatusPicker form=blank_form() /> });
        assert!(html.contains("value=\"pending\""));
        assert!(html.contains("value=\"in-progress\""));
        assert!(html.contains("In Progress"));
        assert!(html.contains("value=\"completed\""));
    }

    #[test]
    fn task_fields_render_labels() {
        let html = render_to_string(move || view! { <TaskFields form=blank_form() /> });
        assert!(html.contains("Task Title"));
        assert!(html.contains("Assigned Date"));
        assert!(html.contains("Due Date"));
    }
}
