//! In-memory adapters

pub mod user_repo_impl;

pub use user_repo_impl::InMemoryUserRepository;
