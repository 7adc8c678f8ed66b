use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::guard::RequireAuth,
    pages::{
        attendance::AttendancePage,
        dashboard::DashboardPage,
        employees::{EmployeeDetailPage, EmployeesPage},
        home::HomePage,
        login::LoginPage,
        registration::RegistrationPage,
        tasks::{CreateTaskPage, EditTaskPage, TasksPage},
    },
    state::session::SessionProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/registration",
    "/dashboard",
    "/employees",
    "/employees/:id",
    "/attendance",
    "/tasks",
    "/create_task",
    "/tasks/edit_task/:id",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/employees",
    "/employees/:id",
    "/attendance",
    "/tasks",
    "/create_task",
    "/tasks/edit_task/:id",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/registration"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    view! {
        <Title text="Office Management" />
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/registration" view=RegistrationPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/employees" view=ProtectedEmployees/>
                    <Route path="/employees/:id" view=ProtectedEmployeeDetail/>
                    <Route path="/attendance" view=ProtectedAttendance/>
                    <Route path="/tasks" view=ProtectedTasks/>
                    <Route path="/create_task" view=ProtectedCreateTask/>
                    <Route path="/tasks/edit_task/:id" view=ProtectedEditTask/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedEmployees() -> impl IntoView {
    view! { <RequireAuth><EmployeesPage/></RequireAuth> }
}

#[component]
fn ProtectedEmployeeDetail() -> impl IntoView {
    view! { <RequireAuth><EmployeeDetailPage/></RequireAuth> }
}

#[component]
fn ProtectedAttendance() -> impl IntoView {
    view! { <RequireAuth><AttendancePage/></RequireAuth> }
}

#[component]
fn ProtectedTasks() -> impl IntoView {
    view! { <RequireAuth><TasksPage/></RequireAuth> }
}

#[component]
fn ProtectedCreateTask() -> impl IntoView {
    view! { <RequireAuth><CreateTaskPage/></RequireAuth> }
}

#[component]
fn ProtectedEditTask() -> impl IntoView {
    view! { <RequireAuth><EditTaskPage/></RequireAuth> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layout::NAV_LINKS;
    use std::collections::HashSet;

    #[test]
    fn public_and_protected_routes_partition_all_routes() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        let public: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        assert!(protected.is_disjoint(&public));
        let union: HashSet<&str> = protected.union(&public).copied().collect();
        assert_eq!(union, all);
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn every_nav_link_targets_a_route() {
        for (href, _) in NAV_LINKS {
            assert!(
                ROUTE_PATHS.contains(&href),
                "nav link without route: {}",
                href
            );
        }
    }
}
