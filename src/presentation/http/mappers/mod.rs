use poem_openapi::types::Email;

use crate::{domain::models::User, presentation::http::requests::UserDto};

pub fn map_user(user: &User) -> UserDto {
    UserDto {
        id: user.id,
        email: Email(user.email.clone()),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        birth_date: user.birth_date,
        address: user.address.clone(),
        phone_number: user.phone_number.clone(),
    }
}

pub fn user_from_dto(dto: &UserDto) -> User {
    User {
        id: dto.id,
        email: dto.email.0.clone(),
        first_name: dto.first_name.clone(),
        last_name: dto.last_name.clone(),
        birth_date: dto.birth_date,
        address: dto.address.clone(),
        phone_number: dto.phone_number.clone(),
    }
}
