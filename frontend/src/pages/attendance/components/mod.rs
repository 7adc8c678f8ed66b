pub mod table;
pub mod toolbar;
