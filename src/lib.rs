pub mod bench;
pub mod error;
pub mod fib;
pub mod timer;
