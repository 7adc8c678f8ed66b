use crate::{components::layout::LoadingSpinner, state::session::use_session, utils::dialog};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardDecision {
    Wait,
    Render,
    Redirect,
}

fn guard_decision(is_authenticated: bool, probed: bool) -> GuardDecision {
    if is_authenticated {
        GuardDecision::Render
    } else if probed {
        GuardDecision::Redirect
    } else {
        GuardDecision::Wait
    }
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let is_authenticated = session.is_authenticated();
    let probed = session.probed();
    let decision = create_memo(move |_| guard_decision(is_authenticated.get(), probed.get()));
    create_effect(move |_| {
        if decision.get() == GuardDecision::Redirect {
            dialog::navigate_to("/login");
        }
    });
    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                if decision.get() == GuardDecision::Wait {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::RequireAuth;
    use crate::test_support::helpers::{hr_user, provide_pending_session, provide_session};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            provide_session(Some(hr_user(1)));
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_when_unauthenticated() {
        let html = render_to_string(move || {
            provide_session(None);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
        assert!(!html.contains("animate-spin"));
    }

    #[test]
    fn require_auth_shows_spinner_before_first_probe() {
        let html = render_to_string(move || {
            provide_pending_session();
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
        assert!(html.contains("animate-spin"));
    }
}
