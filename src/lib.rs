pub mod icon;
pub mod iconset;
pub mod logger;
pub mod manifest;
pub mod models;
