pub mod auth;
pub mod credentials_request;
pub mod user_dto;
pub mod user_response;
