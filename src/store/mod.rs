pub mod format;
pub mod decode;
pub mod loader;

pub use decode::{decode_store, DecodeOptions};
pub use loader::StoreLoader;
