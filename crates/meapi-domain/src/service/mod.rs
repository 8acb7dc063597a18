//! Domain Services - Pure logic shared by the views

pub mod fetch_lifecycle;
