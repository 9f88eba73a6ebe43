pub mod absence;
pub mod employee;
pub mod line;
pub mod sheet;
pub mod summary;
