pub mod auth;
pub mod auth_api;
pub mod config;
pub mod db;
pub mod error_convert;
pub mod geo;
pub mod health;
pub mod openapi;
pub mod repo;
pub mod rest;
