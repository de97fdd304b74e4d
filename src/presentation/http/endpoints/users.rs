use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use poem::http::StatusCode;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use crate::{
    domain::{
        errors::DomainError,
        value_objects::{DEFAULT_PAGE_SIZE, PageRequest},
    },
    presentation::{
        http::{
            endpoints::root::{ApiState, EndpointsTags},
            mappers::{map_user, user_from_dto},
            requests::UserDto,
            responses::{DeleteUserResponse, ErrorDto, UserResponse, UsersResponse},
        },
        models::SortOrderKind,
    },
};

#[derive(Clone)]
pub struct UserEndpoints {
    state: Arc<ApiState>,
}

impl UserEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UserEndpoints {
    #[oai(path = "/v1/users", method = "post", tag = EndpointsTags::Users)]
    pub async fn create_user(&self, request: Json<UserDto>) -> poem::Result<UserResponse> {
        ensure_past(request.birth_date, "Birth date must be in the past")?;

        let user = user_from_dto(&request);
        match self.state.create_user_usecase.execute(user).await {
            Ok(created) => Ok(UserResponse::Ok(Json(map_user(&created)))),
            Err(DomainError::Other(err)) => Err(internal_error(err)),
            Err(err) => Ok(UserResponse::BadRequest(Json(ErrorDto::bad_request(
                err.to_string(),
            )))),
        }
    }

    #[oai(path = "/v1/users", method = "put", tag = EndpointsTags::Users)]
    pub async fn update_user(&self, request: Json<UserDto>) -> poem::Result<UserResponse> {
        if request.id.is_none() {
            return Err(poem::Error::from_string(
                "Id should be not empty",
                StatusCode::BAD_REQUEST,
            ));
        }
        ensure_past(request.birth_date, "Birth date must be in the past")?;

        let user = user_from_dto(&request);
        match self.state.update_user_usecase.execute(user).await {
            Ok(updated) => Ok(UserResponse::Ok(Json(map_user(&updated)))),
            Err(DomainError::Other(err)) => Err(internal_error(err)),
            Err(err) => Ok(UserResponse::BadRequest(Json(ErrorDto::bad_request(
                err.to_string(),
            )))),
        }
    }

    #[oai(path = "/v1/users/:id", method = "delete", tag = EndpointsTags::Users)]
    pub async fn delete_user(&self, id: Path<i32>) -> poem::Result<DeleteUserResponse> {
        match self.state.delete_user_usecase.execute(id.0).await {
            Ok(()) => Ok(DeleteUserResponse::Ok),
            Err(DomainError::Other(err)) => Err(internal_error(err)),
            Err(err) => Ok(DeleteUserResponse::BadRequest(Json(ErrorDto::bad_request(
                err.to_string(),
            )))),
        }
    }

    #[oai(path = "/v1/users", method = "get", tag = EndpointsTags::Users)]
    pub async fn get_users_by_birth_date_range(
        &self,
        from: Query<NaiveDate>,
        to: Query<NaiveDate>,
        page: Query<Option<u32>>,
        size: Query<Option<u32>>,
        sort: Query<Option<SortOrderKind>>,
    ) -> poem::Result<UsersResponse> {
        ensure_past(from.0, "The 'From' date must be past")?;
        ensure_past_or_present(to.0, "The 'To' date must be past or current")?;

        let page_request = PageRequest::new(
            page.0.unwrap_or(0),
            size.0.unwrap_or(DEFAULT_PAGE_SIZE),
            sort.0.map(Into::into),
        );
        match self
            .state
            .list_users_usecase
            .execute(from.0, to.0, page_request)
            .await
        {
            Ok(users) => Ok(UsersResponse::Ok(Json(users.iter().map(map_user).collect()))),
            Err(DomainError::Other(err)) => Err(internal_error(err)),
            Err(err) => Ok(UsersResponse::BadRequest(Json(ErrorDto::bad_request(
                err.to_string(),
            )))),
        }
    }
}

fn ensure_past(date: NaiveDate, message: &str) -> poem::Result<()> {
    if date < Utc::now().date_naive() {
        Ok(())
    } else {
        Err(poem::Error::from_string(message, StatusCode::BAD_REQUEST))
    }
}

fn ensure_past_or_present(date: NaiveDate, message: &str) -> poem::Result<()> {
    if date <= Utc::now().date_naive() {
        Ok(())
    } else {
        Err(poem::Error::from_string(message, StatusCode::BAD_REQUEST))
    }
}

fn internal_error(err: anyhow::Error) -> poem::Error {
    poem::Error::from_string(err.to_string(), StatusCode::INTERNAL_SERVER_ERROR)
}
