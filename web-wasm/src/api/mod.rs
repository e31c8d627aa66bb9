//! Backend API client

pub mod backend;
