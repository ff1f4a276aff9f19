pub mod bwt;
pub mod fm;
pub mod sa;
