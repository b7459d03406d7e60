pub mod dvec2;
pub mod resolution;
