use crate::api::{ApiClient, ApiError, AttendanceRecord, AttendanceUpdate};
use crate::pages::attendance::utils::bulk_create_message;
use crate::state::resource::{alert_on_error, run_mutation};
use crate::utils::time::parse_date_input;
use chrono::NaiveDate;
use leptos::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttendanceQuery {
    pub date: Option<NaiveDate>,
    pub token: u32,
}

impl AttendanceQuery {
    pub fn with_date(self, date: Option<NaiveDate>) -> Self {
        Self {
            date,
            token: self.token.wrapping_add(1),
        }
    }

    /// Same filter, fresh fetch.
    pub fn refresh(self) -> Self {
        self.with_date(self.date)
    }
}

fn refresh(query: RwSignal<AttendanceQuery>) {
    let _ = query.try_update(|q| *q = q.refresh());
}

pub async fn load_records(
    api: &ApiClient,
    query: AttendanceQuery,
) -> Result<Vec<AttendanceRecord>, ApiError> {
    api.list_attendance(query.date).await
}

pub async fn update_record(
    api: &ApiClient,
    query: RwSignal<AttendanceQuery>,
    id: i64,
    update: &AttendanceUpdate,
) -> Result<(), ApiError> {
    run_mutation(api.update_attendance(id, update), move || refresh(query)).await
}

pub async fn delete_record(
    api: &ApiClient,
    query: RwSignal<AttendanceQuery>,
    id: i64,
) -> Result<(), ApiError> {
    run_mutation(api.delete_attendance(id), move || refresh(query)).await
}

/// Creates one record per employee and returns the confirmation text.
pub async fn create_for_date(
    api: &ApiClient,
    query: RwSignal<AttendanceQuery>,
    date: NaiveDate,
) -> Result<String, ApiError> {
    run_mutation(api.create_attendance_for_all(date), move || refresh(query))
        .await
        .map(|created| bulk_create_message(created.len()))
}

#[derive(Clone)]
pub struct AttendanceViewModel {
    pub api: ApiClient,
    pub query: RwSignal<AttendanceQuery>,
    pub records: Resource<AttendanceQuery, Result<Vec<AttendanceRecord>, ApiError>>,
    pub filter_input: RwSignal<String>,
    pub create_date_input: RwSignal<String>,
    pub update_action: Action<(i64, AttendanceUpdate), Result<(), ApiError>>,
    pub delete_action: Action<i64, Result<(), ApiError>>,
    pub bulk_action: Action<NaiveDate, Result<String, ApiError>>,
    pub pending_delete: RwSignal<Option<i64>>,
    pub bulk_message: RwSignal<Option<String>>,
    pub bulk_error: RwSignal<Option<String>>,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let query = create_rw_signal(AttendanceQuery::default());

        let api_for_list = api.clone();
        let records = create_resource(
            move || query.get(),
            move |q| {
                let api = api_for_list.clone();
                async move { load_records(&api, q).await }
            },
        );

        let api_for_update = api.clone();
        let update_action = create_action(move |(id, update): &(i64, AttendanceUpdate)| {
            let api = api_for_update.clone();
            let (id, update) = (*id, update.clone());
            async move { update_record(&api, query, id, &update).await }
        });

        let api_for_delete = api.clone();
        let delete_action = create_action(move |id: &i64| {
            let api = api_for_delete.clone();
            let id = *id;
            async move { delete_record(&api, query, id).await }
        });

        let api_for_bulk = api.clone();
        let bulk_action = create_action(move |date: &NaiveDate| {
            let api = api_for_bulk.clone();
            let date = *date;
            async move { create_for_date(&api, query, date).await }
        });

        create_effect(move |_| {
            if let Some(result) = update_action.value().get() {
                alert_on_error(&result);
            }
        });
        create_effect(move |_| {
            if let Some(result) = delete_action.value().get() {
                alert_on_error(&result);
            }
        });

        let vm = Self {
            api,
            query,
            records,
            filter_input: create_rw_signal(String::new()),
            create_date_input: create_rw_signal(String::new()),
            update_action,
            delete_action,
            bulk_action,
            pending_delete: create_rw_signal(None),
            bulk_message: create_rw_signal(None),
            bulk_error: create_rw_signal(None),
        };

        let for_bulk = vm.clone();
        create_effect(move |_| {
            if let Some(result) = for_bulk.bulk_action.value().get() {
                for_bulk.apply_bulk_result(&result);
            }
        });

        vm
    }

    pub fn set_filter(&self, raw: String) {
        let date = parse_date_input(&raw);
        self.filter_input.set(raw);
        self.query.update(|q| *q = q.with_date(date));
    }

    pub fn reset_filter(&self) {
        self.filter_input.set(String::new());
        self.query.update(|q| *q = q.with_date(None));
    }

    /// Returns the date sent to the server, or `None` when the input is blank.
    pub fn create_for_all(&self) -> Option<NaiveDate> {
        self.bulk_message.set(None);
        match parse_date_input(&self.create_date_input.get_untracked()) {
            Some(date) => {
                self.bulk_error.set(None);
                self.bulk_action.dispatch(date);
                Some(date)
            }
            None => {
                self.bulk_error.set(Some("Please select a date.".into()));
                None
            }
        }
    }

    pub fn apply_bulk_result(&self, result: &Result<String, ApiError>) {
        match result {
            Ok(message) => {
                self.bulk_message.set(Some(message.clone()));
                self.create_date_input.set(String::new());
            }
            Err(_) => alert_on_error(result),
        }
    }

    pub fn update(&self, id: i64, update: AttendanceUpdate) {
        self.update_action.dispatch((id, update));
    }

    pub fn request_delete(&self, id: i64) {
        self.pending_delete.set(Some(id));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    /// Returns the id whose delete was issued, if one was pending.
    pub fn confirm_delete(&self) -> Option<i64> {
        let id = self.pending_delete.get_untracked()?;
        self.pending_delete.set(None);
        self.delete_action.dispatch(id);
        Some(id)
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    match use_context::<AttendanceViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AttendanceViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}
