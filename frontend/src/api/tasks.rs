use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, CreateTask, Task, UpdateTask},
};

impl ApiClient {
    pub async fn list_tasks_for_hr(&self, hr_id: i64) -> Result<Vec<Task>, ApiError> {
        let request = self
            .request(Method::GET, &format!("/hr/tasks/hr/{}", hr_id))
            .await;
        let response = self.send(request).await?;
        self.map_json_response(response, "Failed to fetch tasks").await
    }

    pub async fn get_task(&self, id: i64) -> Result<Task, ApiError> {
        let request = self.request(Method::GET, &format!("/hr/tasks/{}", id)).await;
        let response = self.send(request).await?;
        self.map_json_response(response, "Failed to fetch task").await
    }

    pub async fn create_task(&self, payload: &CreateTask) -> Result<Task, ApiError> {
        let request = self
            .request(Method::POST, "/hr/assign-task")
            .await
            .json(payload);
        let response = self.send(request).await?;
        self.map_json_response(response, "Failed to create task.").await
    }

    pub async fn update_task(&self, id: i64, payload: &UpdateTask) -> Result<(), ApiError> {
        let request = self
            .request(Method::PATCH, &format!("/hr/tasks/update/{}", id))
            .await
            .json(payload);
        let response = self.send(request).await?;
        self.map_empty_response(response, "Failed to update task. Check console for details.")
            .await
    }

    pub async fn delete_task(&self, id: i64) -> Result<(), ApiError> {
        let request = self
            .request(Method::DELETE, &format!("/hr/tasks/delete/{}", id))
            .await;
        let response = self.send(request).await?;
        self.map_empty_response(response, "Failed to delete task").await
    }
}
