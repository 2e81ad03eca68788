//! # Profile Infrastructure
//! 
//! Storage implementations (adapters) for the repository ports.

pub mod memory;

pub use memory::InMemoryUserRepository;
