// Application layer - Use cases and gateway port
pub mod indicator_gateway;
pub mod indicator_service;
