pub mod location;
pub mod movement;
pub mod product;
pub mod report;

pub use location::{Location, NewLocation};
pub use movement::{Movement, MovementFormData, NewMovement};
pub use product::{NewProduct, Product, ProductOption};
pub use report::ReportRow;
