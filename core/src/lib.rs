pub mod catalog;
pub mod error;
pub mod prefs;
pub mod recommend;
pub mod storage;
pub mod types;
