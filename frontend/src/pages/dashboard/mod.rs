use crate::{components::layout::Layout, state::session::use_session};
use leptos::*;

const SHORTCUTS: [(&str, &str, &str); 3] = [
    ("/employees", "Employees", "Browse employee profiles"),
    ("/attendance", "Attendance", "Record and correct daily attendance"),
    ("/tasks", "Tasks", "Assign and track tasks"),
];

fn greeting(name: Option<String>) -> String {
    match name {
        Some(name) => format!("Welcome, {}", name),
        None => "Welcome".to_string(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let user = use_session().user();
    let heading = move || greeting(user.get().map(|u| u.display_name()));

    view! {
        <Layout>
            <h1 class="text-2xl font-bold mb-6">{heading}</h1>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {SHORTCUTS
                    .iter()
                    .map(|(href, title, description)| view! {
                        <a href=*href class="block bg-white p-6 rounded-xl shadow hover:shadow-md transition-shadow">
                            <h2 class="text-lg font-semibold text-gray-900">{*title}</h2>
                            <p class="mt-2 text-sm text-gray-500">{*description}</p>
                        </a>
                    })
                    .collect_view()}
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{hr_user, provide_session},
        ssr::render_to_string,
    };

    #[test]
    fn greeting_falls_back_without_user() {
        assert_eq!(greeting(None), "Welcome");
        assert_eq!(greeting(Some("Hana".into())), "Welcome, Hana");
    }

    #[test]
    fn dashboard_greets_current_hr_user() {
        let html = render_to_string(move || {
            provide_session(Some(hr_user(1)));
            view! { <DashboardPage /> }
        });
        assert!(html.contains("Welcome, Hana Reyes"));
        assert!(html.contains("Assign and track tasks"));
    }
}
