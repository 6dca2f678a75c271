pub mod convert;
pub mod numeric;
pub mod string;

pub use convert::convert_filter;
pub use numeric::numeric_filter;
pub use string::{titleize_filter, upcase_first_filter};
