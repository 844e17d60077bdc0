pub mod controller;
pub mod forward;
pub mod routes;
pub mod schema;
