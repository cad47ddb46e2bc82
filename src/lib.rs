pub mod error;
pub mod graphs;
pub mod input;
pub mod output;
pub mod search;
pub mod utility;
