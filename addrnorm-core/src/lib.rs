pub mod gateways;
pub mod usecases;

pub mod entities {
    pub use addrnorm_entities::address::*;
}
