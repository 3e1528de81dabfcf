pub mod explain_handlers;
pub mod health;
pub mod info_handlers;
