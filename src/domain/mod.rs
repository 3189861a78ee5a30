pub mod filter;
pub mod fis_no;
pub mod model;
pub mod normalize;
pub mod sample;
