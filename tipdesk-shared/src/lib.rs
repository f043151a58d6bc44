//! Serializable models shared between the Tipdesk back-office clients
//! and the platform API.

pub mod models;
