pub mod tools;

pub use self::tools::{core_dependencies, show_rust_core_dependencies};
