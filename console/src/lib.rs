pub mod api;
pub mod bucket;
pub mod console;
pub mod model;
pub mod store;
