pub mod bus;
pub mod echo;
