//! Progress indicators for the chat surface

pub mod reporter;
