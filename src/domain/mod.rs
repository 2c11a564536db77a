pub mod errors;
pub mod fault;
pub mod order;
pub mod ports;
pub mod product;
pub mod user;
