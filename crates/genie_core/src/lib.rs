pub mod bcd;
pub mod buffer;
pub mod checksum;
pub mod core_api;
pub mod gen1;
pub mod layout;
pub mod storage;
pub mod text;
pub mod validate;

pub use buffer::SaveBuffer;
