mod channel_function;
mod channel_storage;

pub use channel_function::*;
pub use channel_storage::*;
