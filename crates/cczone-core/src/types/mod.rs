mod verdict;
mod zone;

pub use verdict::*;
pub use zone::*;
