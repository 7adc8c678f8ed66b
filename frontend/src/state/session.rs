use crate::api::{ApiClient, ApiError, HrUser, LoginRequest};
use leptos::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Unauthenticated,
    Authenticated,
}

/// What the session tracker currently believes.
///
/// `probed` turns true once the first answer arrives (probe result, logout
/// or a 401); before that consumers still see `Unauthenticated`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub status: SessionStatus,
    pub user: Option<HrUser>,
    pub probed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    ProbeSucceeded(HrUser),
    ProbeFailed,
    LoggedOut,
    Unauthorized,
}

impl SessionState {
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::ProbeSucceeded(user) => {
                self.status = SessionStatus::Authenticated;
                self.user = Some(user);
            }
            SessionEvent::ProbeFailed | SessionEvent::LoggedOut | SessionEvent::Unauthorized => {
                self.status = SessionStatus::Unauthenticated;
                self.user = None;
            }
        }
        self.probed = true;
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    pub fn hr_id(&self) -> Option<i64> {
        self.user.as_ref().map(|user| user.id)
    }
}

/// Session handle shared through context. Consumers only read; every write
/// goes through the probe, logout and the client's 401 hook.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(SessionState::default()),
        }
    }

    #[cfg(test)]
    pub fn with_state(state: SessionState) -> Self {
        Self {
            state: create_rw_signal(state),
        }
    }

    pub fn state(&self) -> Signal<SessionState> {
        self.state.into()
    }

    pub fn is_authenticated(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(SessionState::is_authenticated))
    }

    pub fn probed(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.probed))
    }

    pub fn user(&self) -> Signal<Option<HrUser>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.user.clone()))
    }

    pub fn hr_id(&self) -> Option<i64> {
        self.state.with_untracked(SessionState::hr_id)
    }

    /// Returns a client whose 401 responses drop this session.
    pub fn wire_client(&self, api: ApiClient) -> ApiClient {
        let session = *self;
        api.with_unauthorized_hook(move || session.dispatch(SessionEvent::Unauthorized))
    }

    pub async fn check_session(&self, api: &ApiClient) -> bool {
        match api.get_me().await {
            Ok(user) => {
                log::debug!("Session active for HR user {}", user.id);
                self.dispatch(SessionEvent::ProbeSucceeded(user));
                true
            }
            Err(err) => {
                log::debug!("Session probe failed: {}", err);
                self.dispatch(SessionEvent::ProbeFailed);
                false
            }
        }
    }

    /// Logs in, then confirms the cookie took by probing again.
    pub async fn sign_in(&self, api: &ApiClient, request: &LoginRequest) -> Result<(), ApiError> {
        api.login(request).await?;
        if self.check_session(api).await {
            Ok(())
        } else {
            Err(ApiError::unauthorized("Login failed. Please try again."))
        }
    }

    /// Always ends unauthenticated; the server result is only reported.
    pub async fn logout(&self, api: &ApiClient) -> Result<(), ApiError> {
        let result = api.logout().await;
        if let Err(err) = &result {
            log::error!("Logout request failed: {}", err);
        }
        self.dispatch(SessionEvent::LoggedOut);
        result
    }

    fn dispatch(&self, event: SessionEvent) {
        // The provider may already be gone when a late response lands.
        let _ = self.state.try_update(|state| state.apply(event));
    }
}

/// Creates the session, wires the API client to it and starts the first probe.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = SessionContext::new();
    let api = session.wire_client(use_context::<ApiClient>().unwrap_or_else(ApiClient::new));
    provide_context(session);
    provide_context(api.clone());

    spawn_local(async move {
        session.check_session(&api).await;
    });

    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(SessionContext::new)
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn me_json() -> serde_json::Value {
        json!({ "id": 7, "fullName": "Hana Reyes", "email": "hana@example.com" })
    }

    #[tokio::test]
    async fn check_session_tracks_probe_result() {
        let server = MockServer::start_async().await;
        let mut me = server
            .mock_async(|when, then| {
                when.method(GET).path("/hr/me");
                then.status(200).json_body(me_json());
            })
            .await;

        let runtime = create_runtime();
        let session = SessionContext::new();
        let api = ApiClient::new_with_base_url(server.base_url());

        assert!(session.check_session(&api).await);
        assert!(session.is_authenticated().get_untracked());
        assert_eq!(session.hr_id(), Some(7));

        me.delete_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/hr/me");
                then.status(500).body("oops");
            })
            .await;

        assert!(!session.check_session(&api).await);
        assert!(!session.is_authenticated().get_untracked());
        assert!(session.hr_id().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn check_session_is_false_on_network_error() {
        let runtime = create_runtime();
        let session = SessionContext::new();
        let api = ApiClient::new_with_base_url("http://127.0.0.1:1");

        assert!(!session.check_session(&api).await);
        assert!(session.probed().get_untracked());
        runtime.dispose();
    }

    #[tokio::test]
    async fn logout_clears_session_even_when_server_fails() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/hr/me");
                then.status(200).json_body(me_json());
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/hr/logout");
                then.status(500).json_body(json!({ "message": "boom" }));
            })
            .await;

        let runtime = create_runtime();
        let session = SessionContext::new();
        let api = ApiClient::new_with_base_url(server.base_url());
        session.check_session(&api).await;
        assert!(session.is_authenticated().get_untracked());

        let result = session.logout(&api).await;
        assert_eq!(result.unwrap_err().error, "boom");
        assert!(!session.is_authenticated().get_untracked());
        runtime.dispose();
    }

    #[tokio::test]
    async fn any_unauthorized_response_drops_the_session() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/hr/me");
                then.status(200).json_body(me_json());
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/hr/tasks/hr/7");
                then.status(401).json_body(json!({ "message": "Unauthorized" }));
            })
            .await;

        let runtime = create_runtime();
        let session = SessionContext::new();
        let api = session.wire_client(ApiClient::new_with_base_url(server.base_url()));
        session.check_session(&api).await;
        assert!(session.is_authenticated().get_untracked());

        let err = api.list_tasks_for_hr(7).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(!session.is_authenticated().get_untracked());
        runtime.dispose();
    }

    #[tokio::test]
    async fn sign_in_probes_after_login() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/hr/login");
                then.status(200).json_body(json!({ "message": "Logged in" }));
            })
            .await;
        let probe = server
            .mock_async(|when, then| {
                when.method(GET).path("/hr/me");
                then.status(200).json_body(me_json());
            })
            .await;

        let runtime = create_runtime();
        let session = SessionContext::new();
        let api = ApiClient::new_with_base_url(server.base_url());
        session
            .sign_in(
                &api,
                &LoginRequest {
                    email: "hana@example.com".into(),
                    password: "Secret!123".into(),
                },
            )
            .await
            .unwrap();

        probe.assert_async().await;
        assert_eq!(session.hr_id(), Some(7));
        runtime.dispose();
    }

    #[tokio::test]
    async fn sign_in_surfaces_login_error_without_probing() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/hr/login");
                then.status(401).json_body(json!({ "message": "Invalid credentials" }));
            })
            .await;
        let probe = server
            .mock_async(|when, then| {
                when.method(GET).path("/hr/me");
                then.status(200).json_body(me_json());
            })
            .await;

        let runtime = create_runtime();
        let session = SessionContext::new();
        let api = ApiClient::new_with_base_url(server.base_url());
        let err = session
            .sign_in(
                &api,
                &LoginRequest {
                    email: "hana@example.com".into(),
                    password: "wrong".into(),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.error, "Invalid credentials");
        assert_eq!(probe.hits_async().await, 0);
        assert!(!session.is_authenticated().get_untracked());
        runtime.dispose();
    }
}
