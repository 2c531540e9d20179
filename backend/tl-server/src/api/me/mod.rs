pub mod me;
pub mod update_password_request;
pub mod update_username_request;
