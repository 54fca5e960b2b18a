pub mod allocator;
pub mod application;
pub mod common;
pub mod errors;
pub mod summary;
pub mod vm;
pub mod vm_pool;
