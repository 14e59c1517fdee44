pub mod error;
pub mod models {
    pub mod document;
    pub mod search;
}
pub mod db {
    pub mod fixture;
    pub mod store;
}
pub mod search {
    pub mod engine;
    pub mod query;
}

#[cfg(feature = "server")]
pub mod app;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod api {
    pub mod docs;
    pub mod errors;
    pub mod extract;
    pub mod health;
    pub mod search;
}
