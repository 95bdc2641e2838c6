pub mod app;
pub mod calculator;
pub mod config;
pub mod error;
pub mod service;
pub mod store;
pub mod upstream;
pub mod utils;
pub mod worker;

pub mod schema {
    pub mod api;
    pub mod db;
    pub mod upstream;
}

pub mod api {
    pub mod endpoints;
}
