pub mod gateway;
pub mod health;
pub mod script;
pub mod text;
