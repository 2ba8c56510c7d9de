mod debug;
mod dims;
mod owned;

pub use dims::*;
pub use owned::*;
