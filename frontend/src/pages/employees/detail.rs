use super::utils::{capitalize, format_salary, initials};
use crate::{
    api::{ApiClient, Employee},
    components::{
        error::InlineErrorMessage,
        layout::{Layout, LoadingSpinner},
    },
    state::resource::ReloadToken,
    utils::time::format_long_date,
};
use leptos::*;
use leptos_router::use_params_map;

#[component]
fn DetailRow(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="flex justify-between items-center py-2 border-b">
            <span class="text-gray-600 font-medium">{label}</span>
            <span class="text-gray-900">{value}</span>
        </div>
    }
}

#[component]
pub fn EmployeeCard(employee: Employee) -> impl IntoView {
    let avatar = match employee.photo_url.clone() {
        Some(url) => view! {
            <img src=url alt=employee.full_name.clone() class="w-20 h-20 rounded-full object-cover" />
        }
        .into_view(),
        None => view! {
            <span class="text-2xl font-bold">{initials(&employee.full_name)}</span>
        }
        .into_view(),
    };

    view! {
        <div class="bg-white rounded-2xl shadow-xl overflow-hidden">
            <div class="bg-gradient-to-r from-blue-600 to-indigo-700 p-8 text-white">
                <div class="flex items-center space-x-6">
                    <div class="w-24 h-24 bg-white/20 rounded-full flex items-center justify-center">
                        {avatar}
                    </div>
                    <div>
                        <h1 class="text-3xl font-bold">{employee.full_name.clone()}</h1>
                        <p class="text-blue-100">{employee.department.clone()}</p>
                        <span class=format!(
                            "inline-block mt-2 px-3 py-1 rounded-full text-sm font-medium {}",
                            employee.status.badge_class()
                        )>
                            {employee.status.label()}
                        </span>
                    </div>
                </div>
            </div>
            <div class="p-8 grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="space-y-3">
                    <h2 class="text-xl font-semibold text-gray-800 border-b pb-2">"Personal Information"</h2>
                    <DetailRow label="Email" value=employee.email.clone() />
                    <DetailRow label="Phone" value=employee.phone_number.clone() />
                    <DetailRow label="Age" value=format!("{} years", employee.age) />
                    <DetailRow label="Gender" value=capitalize(&employee.gender.to_lowercase()) />
                </div>
                <div class="space-y-3">
                    <h2 class="text-xl font-semibold text-gray-800 border-b pb-2">"Employment Information"</h2>
                    <DetailRow label="Department" value=employee.department.clone() />
                    <DetailRow label="Salary" value=format_salary(employee.salary) />
                    <DetailRow label="Joined" value=format_long_date(employee.created_at) />
                    <DetailRow label="Last Updated" value=format_long_date(employee.updated_at) />
                </div>
            </div>
            <div class="px-8 pb-8 flex justify-end">
                <a href="/employees" class="px-6 py-2 border border-gray-300 text-gray-700 rounded-lg hover:bg-gray-50">
                    "Back to List"
                </a>
            </div>
        </div>
    }
}

#[component]
pub fn EmployeeDetailPanel(id: Signal<Option<i64>>) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let reload = ReloadToken::new();
    let employee = create_resource(
        move || (id.get(), reload.get()),
        move |(id, _)| {
            let api = api.clone();
            async move {
                match id {
                    Some(id) => api.get_employee(id).await.map(Some),
                    None => Ok(None),
                }
            }
        },
    );
    let retry = Callback::new(move |_| reload.bump());

    view! {
        <div class="max-w-4xl mx-auto">
            {move || match employee.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! {
                    <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) on_retry=retry />
                }
                .into_view(),
                Some(Ok(None)) => view! {
                    <div class="text-center py-12">
                        <h2 class="text-xl font-semibold text-gray-800">"Employee Not Found"</h2>
                        <p class="text-gray-600 mt-2">"The requested employee could not be found."</p>
                    </div>
                }
                .into_view(),
                Some(Ok(Some(found))) => view! { <EmployeeCard employee=found /> }.into_view(),
            }}
        </div>
    }
}

#[component]
pub fn EmployeeDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()))
    });
    view! {
        <Layout>
            <EmployeeDetailPanel id=id />
        </Layout>
    }
}
