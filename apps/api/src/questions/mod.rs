// Interview question generation from the static bank.

pub mod bank;
pub mod handlers;
pub mod selector;
