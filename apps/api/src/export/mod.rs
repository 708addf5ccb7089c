// Download formats for screening results and interview questions.

pub mod candidates;
pub mod handlers;
pub mod questions;
