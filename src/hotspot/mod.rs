// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Hotspot user management
//!
//! Registration rules and the account operations the HTTP service and the
//! `hotspot-check` tool perform through [`RouterOsClient`](crate::routeros::RouterOsClient).

mod report;
mod service;
mod validation;

pub use report::{render_profile_list, render_user_table};
pub use service::{
    HotspotError, HotspotUser, PROFILE_PRINT, RegistrationOutcome, USER_ADD, USER_PRINT,
    list_profiles, list_users, register_account, registration_comment,
};
pub use validation::{MIN_PASSWORD_LEN, NewAccount, RegistrationForm, ValidationError};
