use chrono::NaiveDate;
use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, AttendanceRecord, AttendanceUpdate, CreateAttendanceForAll},
};
use crate::utils::time::format_iso_date;

fn attendance_params(date: Option<NaiveDate>) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(date) = date {
        params.push(("date", format_iso_date(date)));
    }
    params
}

impl ApiClient {
    pub async fn list_attendance(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let params = attendance_params(date);
        let mut request = self.request(Method::GET, "/hr/attendance").await;
        if !params.is_empty() {
            request = request.query(&params);
        }
        let response = self.send(request).await?;
        self.map_json_response(response, "Failed to fetch attendance")
            .await
    }

    pub async fn update_attendance(
        &self,
        id: i64,
        update: &AttendanceUpdate,
    ) -> Result<(), ApiError> {
        let request = self
            .request(Method::PATCH, &format!("/hr/attendance/update/{}", id))
            .await
            .json(update);
        let response = self.send(request).await?;
        self.map_empty_response(response, "Failed to update attendance")
            .await
    }

    pub async fn delete_attendance(&self, id: i64) -> Result<(), ApiError> {
        let request = self
            .request(Method::DELETE, &format!("/hr/attendance/delete/{}", id))
            .await;
        let response = self.send(request).await?;
        self.map_empty_response(response, "Failed to delete attendance")
            .await
    }

    /// Asks the server to materialize one record per known employee.
    pub async fn create_attendance_for_all(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let request = self
            .request(Method::POST, "/hr/attendance/create-for-all")
            .await
            .json(&CreateAttendanceForAll { date });
        let response = self.send(request).await?;
        self.map_json_response(response, "Error creating attendance")
            .await
    }
}
