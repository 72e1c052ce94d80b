// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Hotspot account operations over a RouterOS session

use thiserror::Error;
use time::OffsetDateTime;
use time::macros::format_description;

use super::validation::NewAccount;
use crate::config::{HotspotConfig, RouterConfig};
use crate::routeros::{ClientError, Connector, Record, RemoteTrap, Response, RouterOsClient};

pub const USER_PRINT: &str = "/ip/hotspot/user/print";
pub const USER_ADD: &str = "/ip/hotspot/user/add";
pub const PROFILE_PRINT: &str = "/ip/hotspot/user/profile/print";

#[derive(Debug, Error)]
pub enum HotspotError {
    /// The router could not be talked to
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The router refused a query
    #[error(transparent)]
    Trap(#[from] RemoteTrap),
}

/// Hotspot user as listed by the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotspotUser {
    pub name: String,
    pub profile: Option<String>,
    pub comment: Option<String>,
}

impl HotspotUser {
    fn from_record(record: &Record) -> Option<Self> {
        Some(Self {
            name: record.get("name")?.clone(),
            profile: record.get("profile").cloned(),
            comment: record.get("comment").cloned(),
        })
    }
}

/// Outcome of one registration request that reached the router stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Created { username: String, profile: String },
    /// An account with that name already exists
    Duplicate,
    /// The router answered the add command with a trap
    Rejected(String),
    /// Every connect attempt failed
    Unreachable,
}

pub fn list_users<C: Connector>(
    client: &mut RouterOsClient<C>,
) -> Result<Vec<HotspotUser>, HotspotError> {
    let records = client.execute(USER_PRINT, &[])?.into_result()?;
    Ok(records.iter().filter_map(HotspotUser::from_record).collect())
}

pub fn list_profiles<C: Connector>(
    client: &mut RouterOsClient<C>,
) -> Result<Vec<String>, HotspotError> {
    let records = client.execute(PROFILE_PRINT, &[])?.into_result()?;
    Ok(records
        .into_iter()
        .filter_map(|mut r| r.remove("name"))
        .collect())
}

/// Connects, creates the account unless the name is taken, and disconnects
/// before returning.
///
/// # Errors
///
/// Returns an error when the session breaks mid-exchange or the user listing
/// is refused.
pub fn register_account<C: Connector>(
    client: &mut RouterOsClient<C>,
    router: &RouterConfig,
    hotspot: &HotspotConfig,
    account: &NewAccount,
) -> Result<RegistrationOutcome, HotspotError> {
    if let Err(e) = client.connect(
        &router.host,
        router.port,
        &router.username,
        &router.password,
    ) {
        tracing::error!("Router {} unreachable: {}", router.address(), e);
        return Ok(RegistrationOutcome::Unreachable);
    }

    let result = add_if_absent(client, hotspot, account);
    client.disconnect();
    result
}

fn add_if_absent<C: Connector>(
    client: &mut RouterOsClient<C>,
    hotspot: &HotspotConfig,
    account: &NewAccount,
) -> Result<RegistrationOutcome, HotspotError> {
    let users = list_users(client)?;
    if users.iter().any(|u| u.name == account.username) {
        tracing::info!("Hotspot user '{}' already exists", account.username);
        return Ok(RegistrationOutcome::Duplicate);
    }

    let comment = registration_comment(OffsetDateTime::now_utc());
    let mut attributes = vec![
        ("name", account.username.as_str()),
        ("password", account.password.as_str()),
        ("profile", hotspot.profile.as_str()),
    ];
    if let Some(server) = hotspot.server.as_deref() {
        attributes.push(("server", server));
    }
    attributes.push(("comment", comment.as_str()));

    match client.execute(USER_ADD, &attributes)? {
        Response::Done(_) => {
            tracing::info!(
                "Created hotspot user '{}' with profile '{}'",
                account.username,
                hotspot.profile
            );
            Ok(RegistrationOutcome::Created {
                username: account.username.clone(),
                profile: hotspot.profile.clone(),
            })
        }
        trap @ Response::Trap(_) => {
            let message = trap.trap_message().unwrap_or("Unknown error").to_string();
            tracing::warn!(
                "Router refused hotspot user '{}': {}",
                account.username,
                message
            );
            Ok(RegistrationOutcome::Rejected(message))
        }
    }
}

/// Comment stored on accounts created by the service
pub fn registration_comment(at: OffsetDateTime) -> String {
    let stamp = at
        .format(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ))
        .unwrap_or_default();
    format!("Added via web registration - {stamp}")
}
