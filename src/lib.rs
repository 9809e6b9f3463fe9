// Library for tests to access modules

pub mod config;
pub mod models;
pub mod routes;
pub mod sensor;
pub mod sonarr_client;
pub mod store;
pub mod units;
pub mod version;
pub mod worker;
