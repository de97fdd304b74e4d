pub mod create_user;
pub mod delete_user;
pub mod list_users_by_birth_date;
pub mod update_user;

#[cfg(test)]
pub mod fixtures;
