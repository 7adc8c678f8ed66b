pub mod detail;
pub mod list;
pub mod utils;

pub use detail::EmployeeDetailPage;
pub use list::EmployeesPage;
