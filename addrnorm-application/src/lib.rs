#[macro_use]
extern crate log;

mod load_addresses;
mod load_results;
mod normalize_file;
mod record;
mod save_results;

pub mod prelude {
    pub use super::{
        load_addresses::*, load_results::*, normalize_file::*, record::CSV_HEADER, save_results::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use addrnorm_core::{entities::*, gateways::geocode::GeoCodingGateway, usecases};

#[cfg(test)]
pub(crate) mod tests;
