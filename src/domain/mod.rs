// Domain layer - Rate types and pure view derivations
pub mod change;
pub mod conversion;
pub mod csv_export;
pub mod currency;
pub mod dashboard;
pub mod date_range;
pub mod error;
pub mod rate;
pub mod series;
pub mod table;
