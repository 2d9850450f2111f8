mod find_duplicates;
mod normalize_batch;

#[cfg(test)]
pub mod tests;

pub use self::{find_duplicates::*, normalize_batch::*};
