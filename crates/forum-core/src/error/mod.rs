//! Domain errors

mod endpoint_error;

pub use endpoint_error::EndpointError;
