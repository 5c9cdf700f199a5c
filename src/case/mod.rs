pub mod catalog;
pub mod loader;
pub mod types;

pub use catalog::Catalog;
pub use loader::{load_builtin, load_dir};
pub use types::{Case, Language, Sources};
