//! Department entity and category enum.

mod category;
mod model;

pub use category::DepartmentCategory;
pub use model::Department;
