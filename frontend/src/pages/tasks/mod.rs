pub mod create;
pub mod edit;
pub mod form;
pub mod list;
pub mod utils;

pub use create::CreateTaskPage;
pub use edit::EditTaskPage;
pub use list::TasksPage;
