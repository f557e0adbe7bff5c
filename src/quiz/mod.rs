pub mod consts;
pub mod models;
pub mod session;
