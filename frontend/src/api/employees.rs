use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, Employee},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let request = self.request(Method::GET, "/hr/employees").await;
        let response = self.send(request).await?;
        self.map_json_response(response, "Failed to fetch employees")
            .await
    }

    pub async fn get_employee(&self, id: i64) -> Result<Employee, ApiError> {
        let request = self
            .request(Method::GET, &format!("/hr/employee/{}", id))
            .await;
        let response = self.send(request).await?;
        self.map_json_response(response, "Failed to fetch employee details")
            .await
    }
}
