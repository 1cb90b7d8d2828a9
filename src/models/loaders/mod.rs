pub mod notebook_loader;
pub mod toml_loader;

pub use notebook_loader::load_notebook;
pub use toml_loader::{builtin_catalog, load_catalog, parse_catalog};
