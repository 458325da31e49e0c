//! Concrete `ProductRepository` backends.

pub mod memory;
pub mod redis;

pub use memory::InMemoryProductRepository;
pub use redis::RedisProductRepository;
