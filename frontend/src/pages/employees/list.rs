use super::utils::format_salary;
use crate::{
    api::{ApiClient, Employee},
    components::{
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{Layout, LoadingSpinner},
    },
    state::resource::{load_state, LoadState, ReloadToken},
    utils::time::format_short_date,
};
use leptos::*;

const CELL: &str = "py-2 px-2 border";

#[component]
pub fn EmployeeTable(employees: Vec<Employee>) -> impl IntoView {
    view! {
        <table class="w-full table-auto border-collapse border border-gray-300 shadow-md bg-white">
            <thead class="bg-gray-200">
                <tr>
                    {["ID", "Full Name", "Email", "Phone", "Age", "Gender", "Status", "Department", "Salary", "Created At"]
                        .into_iter()
                        .map(|label| view! { <th class="py-2 px-4 border">{label}</th> })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                {employees
                    .into_iter()
                    .map(|emp| {
                        let href = format!("/employees/{}", emp.id);
                        view! {
                            <tr class="text-center hover:bg-gray-100" data-employee-id=emp.id>
                                <td class=CELL>{emp.id}</td>
                                <td class=CELL>
                                    <a href=href class="text-blue-600 hover:underline">{emp.full_name}</a>
                                </td>
                                <td class=CELL>{emp.email}</td>
                                <td class=CELL>{emp.phone_number}</td>
                                <td class=CELL>{emp.age}</td>
                                <td class=CELL>{emp.gender}</td>
                                <td class=CELL>{emp.status.label()}</td>
                                <td class=CELL>{emp.department}</td>
                                <td class=CELL>{format_salary(emp.salary)}</td>
                                <td class=CELL>{format_short_date(emp.created_at)}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let reload = ReloadToken::new();
    let employees = create_resource(
        move || reload.get(),
        move |_| {
            let api = api.clone();
            async move { api.list_employees().await }
        },
    );

    let retry = Callback::new(move |_| reload.bump());

    view! {
        <Layout>
            <h1 class="text-2xl font-bold mb-4">"Employees"</h1>
            {move || match load_state(employees.get()) {
                LoadState::Loading => view! { <LoadingSpinner /> }.into_view(),
                LoadState::Failed(err) => view! {
                    <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) on_retry=retry />
                }
                .into_view(),
                LoadState::Empty => view! { <EmptyState title="No employees found." /> }.into_view(),
                LoadState::Ready(list) => view! { <EmployeeTable employees=list /> }.into_view(),
            }}
        </Layout>
    }
}
