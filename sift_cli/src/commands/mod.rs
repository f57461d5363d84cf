mod decode;
mod encode;
mod fields;
mod operators;
mod validate;

pub use decode::decode_query;
pub use encode::encode_config;
pub use fields::list_fields;
pub use operators::list_operators;
pub use validate::validate_query;
