//! One module per Wine contract: its message types under `msg` and a facade
//! that builds those messages for a bound sender.
pub mod factory;
pub mod lp_token;
pub mod pair;
