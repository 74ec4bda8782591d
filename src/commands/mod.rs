pub mod count;
pub mod pair;
