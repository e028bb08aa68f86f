pub mod diagnostic;
pub mod error;
pub mod model;
pub mod validate;
pub mod wasm;
