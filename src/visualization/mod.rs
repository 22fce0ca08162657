pub mod viewport;
pub mod ascii;
