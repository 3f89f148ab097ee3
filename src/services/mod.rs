pub mod collection;
pub mod country_service;
pub mod query;
pub mod scoring;
