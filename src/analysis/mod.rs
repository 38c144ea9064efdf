pub mod authors;
pub mod labels;
pub mod pipeline;
pub mod registry;
pub mod resolver;
pub mod scoring;

pub use pipeline::ExportPipeline;
pub use registry::PrimaryRegistry;
