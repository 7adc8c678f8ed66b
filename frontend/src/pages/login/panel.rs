use crate::{
    api::{ApiClient, LoginRequest},
    pages::login::utils,
    state::session::use_session,
    utils::dialog,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let session = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let login_action = create_action(move |request: &LoginRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { session.sign_in(&api, &request).await }
    });
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    dialog::navigate_to("/dashboard");
                }
                Err(err) => error.set(Some(err.error)),
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match utils::validate_credentials(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => {
                error.set(None);
                login_action.dispatch(request);
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    view! {
        <div class="flex items-center justify-center min-h-screen bg-gray-100">
            <div class="bg-white p-6 rounded-2xl shadow-md w-full max-w-md">
                <h1 class="text-2xl font-bold mb-4 text-center">"Sign In"</h1>
                <form class="space-y-4" on:submit=on_submit>
                    <input
                        type="email"
                        placeholder="Email"
                        class="border p-2 w-full rounded"
                        required
                        prop:value=email
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        class="border p-2 w-full rounded"
                        required
                        prop:value=password
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="text-red-500 text-sm">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button
                        type="submit"
                        class="w-full bg-blue-600 text-white py-2 rounded disabled:bg-gray-400"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
