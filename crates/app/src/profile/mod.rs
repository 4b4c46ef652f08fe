//! Profile

mod errors;
mod view;

pub use errors::ProfileError;
pub use view::{
    CHANGE_PASSWORD_FAILED, FIELDS_REQUIRED, LOAD_FAILED, MISSING_USER_ID, PASSWORD_CHANGED,
    PROFILE_UPDATED, ProfileView, UPDATE_FAILED,
};
