pub mod codec;
pub mod config;
pub mod dtype;
pub mod error;
pub mod generator;
pub mod tensor;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use generator::{MatrixGenerator, generate};
