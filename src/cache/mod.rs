mod catalog;
mod disk;

pub use catalog::SessionCatalog;
pub use disk::CacheStore;
