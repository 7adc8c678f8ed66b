#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

pub mod helpers {
    use crate::api::{
        AttendanceRecord, AttendanceStatus, Employee, EmployeeStatus, HrUser, Task, TaskStatus,
    };
    use crate::state::session::{SessionContext, SessionEvent, SessionState};
    use chrono::{NaiveDate, TimeZone, Utc};
    use leptos::*;

    pub fn hr_user(id: i64) -> HrUser {
        HrUser {
            id,
            full_name: Some("Hana Reyes".into()),
            email: Some("hana@example.com".into()),
            username: Some("hana".into()),
        }
    }

    pub fn employee(id: i64, full_name: &str) -> Employee {
        Employee {
            id,
            full_name: full_name.into(),
            age: 31,
            status: EmployeeStatus::Active,
            email: format!("employee{}@example.com", id),
            gender: "Female".into(),
            phone_number: "01700000000".into(),
            salary: Some(12345.0),
            department: "Engineering".into(),
            photo_url: None,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap(),
        }
    }

    pub fn attendance(id: i64, date: &str) -> AttendanceRecord {
        AttendanceRecord {
            id,
            emp_full_name: format!("Employee {}", id),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            status: AttendanceStatus::Present,
            check_in_time: Some("09:00:00".into()),
            check_out_time: None,
        }
    }

    pub fn task(id: i64, title: &str) -> Task {
        Task {
            id,
            task_title: title.into(),
            description: Some("Details".into()),
            assigned_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            status: TaskStatus::Pending,
            emp_full_name: Some("Evan Stone".into()),
            hr_full_name: Some("Hana Reyes".into()),
            employee: None,
            assigned_by: None,
        }
    }

    pub fn provide_session(user: Option<HrUser>) -> SessionContext {
        let mut state = SessionState::default();
        match user {
            Some(user) => state.apply(SessionEvent::ProbeSucceeded(user)),
            None => state.apply(SessionEvent::ProbeFailed),
        }
        let session = SessionContext::with_state(state);
        provide_context(session);
        session
    }

    pub fn provide_pending_session() -> SessionContext {
        let session = SessionContext::with_state(SessionState::default());
        provide_context(session);
        session
    }
}
