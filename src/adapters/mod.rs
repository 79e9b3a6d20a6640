// Adapters layer: concrete implementations of the domain ports (page elements, http, files).

pub mod dom;
pub mod http;
pub mod storage;
