//! Command Handlers module
//!
//! Each handler runs one flow: validate the input, make exactly one call to
//! the account store, and return the outcome for presentation.

mod commands;
mod deposit_handler;
mod sign_up_handler;

#[cfg(test)]
mod tests;

pub use commands::*;
pub use deposit_handler::DepositHandler;
pub use sign_up_handler::SignUpHandler;
