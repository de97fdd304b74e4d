use poem_openapi::{ApiResponse, Object, payload::Json};

use crate::presentation::http::requests::UserDto;

/// Body returned for business-rule rejections.
#[derive(Object, Debug)]
pub struct ErrorDto {
    pub status: u16,
    pub message: String,
}

impl ErrorDto {
    pub fn bad_request(message: String) -> Self {
        Self {
            status: 400,
            message,
        }
    }
}

#[derive(ApiResponse)]
pub enum UserResponse {
    /// The stored user, id populated.
    #[oai(status = 200)]
    Ok(Json<UserDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum UsersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<UserDto>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum DeleteUserResponse {
    /// The user was deleted.
    #[oai(status = 200)]
    Ok,
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),
}
