use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{AccountRole, UpsertUserParam},
};
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod upsert;
