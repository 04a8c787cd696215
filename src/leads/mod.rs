//! Lead capture domain: draft record, formatting, validation and the
//! remote store. Everything here is DOM-free so it tests natively.

pub mod email;
pub mod form;
pub mod phone;
pub mod regions;
pub mod store;
pub mod submit;
