use chrono::NaiveDate;
use poem_openapi::Object;
use poem_openapi::types::Email;

/// External representation of a user, shared by request and response bodies.
#[derive(Object, Debug, Clone, PartialEq)]
#[oai(rename_all = "camelCase")]
pub struct UserDto {
    /// Assigned by the store; ignored on create, required on update.
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<i32>,
    pub email: Email,
    #[oai(validator(min_length = 1))]
    pub first_name: String,
    #[oai(validator(min_length = 1))]
    pub last_name: String,
    pub birth_date: NaiveDate,
    #[oai(skip_serializing_if_is_none)]
    pub address: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub phone_number: Option<String>,
}
