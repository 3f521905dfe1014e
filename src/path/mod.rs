mod registry;

pub use registry::{PathRegistry, DEFAULT_PATH};
