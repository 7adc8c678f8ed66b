use crate::{
    api::{CreateTask, Task, TaskStatus, UpdateTask},
    utils::time::{format_iso_date, parse_date_input},
};
use chrono::NaiveDate;

pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this task?";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load HR or employees. Please login again.";
pub const MISSING_HR_MESSAGE: &str = "HR ID not found. Please login again.";
pub const MISSING_EMPLOYEE_MESSAGE: &str = "Please select an employee.";

pub fn edit_task_path(id: i64) -> String {
    format!("/tasks/edit_task/{}", id)
}

/// Raw form values as typed into the inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskForm {
    pub task_title: String,
    pub description: String,
    pub assigned_date: String,
    pub due_date: String,
    pub employee_id: String,
    pub status: TaskStatus,
}

impl TaskForm {
    pub fn for_day(today: NaiveDate) -> Self {
        Self {
            task_title: String::new(),
            description: String::new(),
            assigned_date: format_iso_date(today),
            due_date: format_iso_date(today),
            employee_id: String::new(),
            status: TaskStatus::Pending,
        }
    }

    pub fn from_task(task: &Task) -> Self {
        Self {
            task_title: task.task_title.clone(),
            description: task.description.clone().unwrap_or_default(),
            assigned_date: format_iso_date(task.assigned_date),
            due_date: format_iso_date(task.due_date),
            employee_id: task
                .employee
                .as_ref()
                .map(|e| e.id.to_string())
                .unwrap_or_default(),
            status: task.status,
        }
    }

    fn dates(&self) -> Result<(NaiveDate, NaiveDate), String> {
        match (
            parse_date_input(&self.assigned_date),
            parse_date_input(&self.due_date),
        ) {
            (Some(assigned), Some(due)) => Ok((assigned, due)),
            _ => Err("Please enter valid dates.".to_string()),
        }
    }

    pub fn to_create(&self, hr_id: Option<i64>) -> Result<CreateTask, String> {
        let hr_id = hr_id.ok_or_else(|| MISSING_HR_MESSAGE.to_string())?;
        let employee_id = self
            .employee_id
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| MISSING_EMPLOYEE_MESSAGE.to_string())?;
        let (assigned_date, due_date) = self.dates()?;
        Ok(CreateTask {
            task_title: self.task_title.trim().to_string(),
            description: self.description.clone(),
            assigned_date,
            due_date,
            employee_id,
            hr_id,
            status: TaskStatus::Pending,
        })
    }

    pub fn to_update(&self) -> Result<UpdateTask, String> {
        let (assigned_date, due_date) = self.dates()?;
        Ok(UpdateTask {
            task_title: self.task_title.trim().to_string(),
            description: self.description.clone(),
            assigned_date,
            due_date,
            status: self.status,
        })
    }
}
