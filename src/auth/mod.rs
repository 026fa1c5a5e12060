pub mod controller;
pub mod dtos;
pub mod service;
