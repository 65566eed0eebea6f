//! Domain types shared by the services, views and the live-search driver.

pub mod profile;
pub mod search;
