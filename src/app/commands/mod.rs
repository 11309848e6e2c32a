pub mod copy;
pub mod reset;
pub mod review;
pub mod submit;
