pub mod class;
pub mod whitespace;
pub mod word;

pub use class::{is_alpha, is_digit10, is_space};
pub use whitespace::{space_before, whitespace};
pub use word::word;
