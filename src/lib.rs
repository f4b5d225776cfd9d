pub mod components;
pub mod picker;
pub mod route;
pub mod views;
