pub mod codes;
pub mod context;
pub mod envelope;

pub use context::RequestContext;
pub use envelope::ApiResponse;
