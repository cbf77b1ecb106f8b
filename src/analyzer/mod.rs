//! Page analysis: gray page in, ordered cells out.

pub mod params;
mod page;
mod pipeline;

pub use page::Page;
pub use params::PageParams;
pub use pipeline::PageAnalyzer;
