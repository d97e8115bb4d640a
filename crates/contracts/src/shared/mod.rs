pub mod html;
pub mod number_format;
