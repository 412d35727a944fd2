//! Request extractors that reject with [`AppError`](crate::AppError).

pub mod id_path;
pub mod pagination;
pub mod validated_json;

pub use id_path::IdPath;
pub use pagination::Pagination;
pub use validated_json::{ValidatedJson, decode_json};
