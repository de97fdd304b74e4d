use std::sync::Arc;

use poem_openapi::Tags;

use crate::application::usecases::{
    create_user::CreateUserUseCase, delete_user::DeleteUserUseCase,
    list_users_by_birth_date::ListUsersByBirthDateUseCase, update_user::UpdateUserUseCase,
};

#[derive(Clone)]
pub struct ApiState {
    pub create_user_usecase: Arc<CreateUserUseCase>,
    pub update_user_usecase: Arc<UpdateUserUseCase>,
    pub list_users_usecase: Arc<ListUsersByBirthDateUseCase>,
    pub delete_user_usecase: Arc<DeleteUserUseCase>,
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Users,
}
