pub mod controller;
pub mod dtos;
pub mod enums;
pub mod generator;
pub mod models;
pub mod service;
