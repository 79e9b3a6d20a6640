// Domain layer: search models and ports. Page elements, HTTP and files live in adapters.

pub mod model;
pub mod ports;
