pub mod app;
pub mod consts;
pub mod docs;
pub mod errors;
pub mod ui;
