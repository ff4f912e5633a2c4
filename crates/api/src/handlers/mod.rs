//! Request handlers, one module per resource.

pub mod categories;
pub mod forms;
pub mod health;
pub mod news;
pub mod profiles;
pub mod submissions;
