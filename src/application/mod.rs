// src/application/mod.rs
//
// Application Layer
//
// The observable state the UI renders from.
//
// RULES:
// - Slices are replaced, never mutated in place
// - The UI triggers operations and observes slices, nothing else
// - No backend access outside the use cases

pub mod slices;
pub mod state;


pub use slices::{BannersState, LoginScreenState, OperationSlice, RegisterScreenState, VenuesState};
pub use state::{AppSnapshot, AppStore};
