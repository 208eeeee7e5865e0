pub mod dictionary;
pub mod loader;

pub use dictionary::EkegusiiDictionary;
pub use loader::EkegusiiLoader;
