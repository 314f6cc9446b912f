//! Business parameters: the input record, calendar, validation and loaders

mod data;
mod month;
mod validate;
pub mod loader;

pub use data::{
    BusinessParameters, CupsPerDay, FixedCosts, GrowthRates, ProductLines, ProductionSetup,
    SeasonalCapacity,
};
pub use month::{Month, WORKING_DAYS};
pub use validate::{validate, MAX_SEASONAL_CAPACITY, MIN_SEASONAL_CAPACITY, MIX_RATIO_TOLERANCE};
