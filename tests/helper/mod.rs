#![allow(dead_code)]

mod repository;

pub use repository::*;
