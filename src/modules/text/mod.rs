pub mod controller;
pub mod prompts;
pub mod routes;
pub mod schema;
