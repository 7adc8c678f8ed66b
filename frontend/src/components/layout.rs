use crate::{
    api::ApiClient,
    state::session::use_session,
    utils::dialog,
};
use leptos::*;
use leptos_router::RouterContext;

pub const NAV_LINKS: [(&str, &str); 6] = [
    ("/dashboard", "Dashboard"),
    ("/employees", "Employees"),
    ("/tasks", "Tasks"),
    ("/attendance", "Attendance"),
    ("/registration", "Registration"),
    ("/login", "Login"),
];

const LINK_CLASS: &str = "block px-4 py-2 rounded-md text-sm font-medium text-gray-300 hover:bg-gray-700 hover:text-white";
const ACTIVE_LINK_CLASS: &str = "block px-4 py-2 rounded-md text-sm font-medium bg-gray-900 text-white";

fn nav_link_class(href: &str, current_path: &str) -> &'static str {
    if is_active_path(href, current_path) {
        ACTIVE_LINK_CLASS
    } else {
        LINK_CLASS
    }
}

/// `/employees` stays active on `/employees/3`, but `/tasks` is not active on `/tasks-archive`.
fn is_active_path(href: &str, current_path: &str) -> bool {
    current_path == href
        || current_path
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let is_authenticated = session.is_authenticated();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let current_path = use_context::<RouterContext>()
        .map(|router| Signal::from(router.pathname()))
        .unwrap_or_else(|| Signal::derive(String::new));

    let logout_action = create_action(move |_: &()| {
        let api = api.clone();
        async move { session.logout(&api).await }
    });
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            dialog::navigate_to("/login");
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    };

    view! {
        <aside class="fixed inset-y-0 left-0 w-60 bg-gray-800 text-white flex flex-col">
            <div class="px-6 py-5 border-b border-gray-700">
                <h1 class="text-xl font-semibold">"Office Management"</h1>
            </div>
            <nav class="flex-1 px-2 py-4 space-y-1">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        let href = *href;
                        view! {
                            <a href=href class=move || nav_link_class(href, &current_path.get())>
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <Show when=move || is_authenticated.get()>
                <div class="px-2 py-4 border-t border-gray-700">
                    <button
                        type="button"
                        class="w-full text-left px-4 py-2 rounded-md text-sm font-medium text-gray-300 hover:bg-red-600 hover:text-white disabled:opacity-50"
                        on:click=on_logout
                        disabled=move || logout_pending.get()
                    >
                        "Logout"
                    </button>
                </div>
            </Show>
        </aside>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100">
            <Navbar/>
            <main class="ml-60 p-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-4" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{hr_user, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn navbar_renders_links_and_logout_when_authenticated() {
        let html = render_to_string(move || {
            provide_session(Some(hr_user(1)));
            view! { <Navbar /> }
        });
        assert!(html.contains("Office Management"));
        for (href, label) in NAV_LINKS {
            assert!(html.contains(&format!("href=\"{}\"", href)));
            assert!(html.contains(label));
        }
        assert!(html.contains("Logout"));
    }

    #[test]
    fn navbar_hides_logout_when_unauthenticated() {
        let html = render_to_string(move || {
            provide_session(None);
            view! { <Navbar /> }
        });
        assert!(html.contains("Dashboard"));
        assert!(!html.contains("Logout"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            provide_session(None);
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
        assert!(html.contains("Office Management"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error" />
                    <SuccessMessage message="ok" />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
    }
}
