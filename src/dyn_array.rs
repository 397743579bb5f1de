mod array;
mod bytes;
mod header;
mod inner;


pub use array::DynArr;
pub use bytes::ByteArr;
#[cfg(feature = "integrity_guard")]
pub use header::INTEGRITY_TAG;
pub use header::Header;
