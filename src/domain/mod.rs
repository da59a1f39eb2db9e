pub mod brand;
pub mod price;
pub mod product;
