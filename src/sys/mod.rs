pub mod config;
pub mod fixed;
pub mod float;
pub mod int;
pub mod libc;
pub mod trap;
