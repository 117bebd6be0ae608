// src/common/mod.rs
//
// Types shared by every layer

pub mod result_state;

pub use result_state::ResultState;
