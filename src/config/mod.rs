//! JSON configuration of the `page_views` tool.

pub mod page;

pub use page::{load_config, PageOutputConfig, PageToolConfig};
