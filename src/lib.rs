pub mod convert;
pub mod error;
pub mod resize;
pub mod sizes;

pub use convert::convert_logo;
pub use error::ConvertError;
