mod error;
mod shuffle;
mod shuffler;
mod source;
mod utils;

pub use error::Error;
pub use shuffle::{shuffle, shuffle_prefix};
pub use shuffler::{Options, SharedShuffler, Shuffler};
pub use source::{Scripted, Traced, UniformSource};
pub use utils::RngExt;

pub type Result<T> = std::result::Result<T, Error>;
