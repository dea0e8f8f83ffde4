mod cache;

pub use cache::CacheCommands;
