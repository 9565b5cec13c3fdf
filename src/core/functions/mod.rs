//! # Functions
//!
//! Sample functions, the trigger and binding model they are declared with,
//! and a local host that invokes them.

pub mod blob;
pub mod function;
pub mod host;
pub mod http;
pub mod registry;
pub mod samples;
pub mod schedule;
pub mod trigger;

pub use blob::{BlobStore, FsBlobStore, MemoryBlobStore};
pub use function::{Bindings, Context, FunctionDef, Handler, TimerInfo};
pub use host::Host;
pub use http::{HttpRequest, HttpResponse};
pub use registry::FunctionApp;
pub use schedule::Schedule;
pub use trigger::{BlobBinding, Direction, HttpMethod, Trigger};
