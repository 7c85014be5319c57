pub mod serializer;
pub use serializer::{Placeholder, Resolve, Serializer};
