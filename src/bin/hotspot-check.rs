// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Connectivity check for the configured router.
//!
//! Logs in with the same settings as the registration service and prints the
//! hotspot users and user profiles it can see.

use std::process::ExitCode;

use hotspot_register::hotspot::{list_profiles, list_users, render_profile_list, render_user_table};
use hotspot_register::{Config, RouterOsClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    setup_tracing();

    let config = Config::from_env();
    let router = &config.router;

    println!("Router:   {}", router.address());
    println!("Username: {}", router.username);
    println!();

    let mut client = RouterOsClient::new(config.client.clone());
    if let Err(e) = client.connect(&router.host, router.port, &router.username, &router.password)
    {
        println!("Failed to connect: {e}");
        println!();
        println!("Check that:");
        println!("  1. The router is reachable at {}", router.address());
        println!("  2. The API service is enabled (/ip service enable api)");
        println!("  3. The username and password are correct");
        println!("  4. No firewall rule drops traffic to port {}", router.port);
        return ExitCode::FAILURE;
    }
    println!("Connected.");
    println!();

    let status = match report(&mut client) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Query failed: {e}");
            ExitCode::FAILURE
        }
    };

    client.disconnect();
    status
}

fn report(client: &mut RouterOsClient) -> Result<(), hotspot_register::hotspot::HotspotError> {
    let users = list_users(client)?;
    println!("Hotspot users ({}):", users.len());
    print!("{}", render_user_table(&users));
    println!();

    let profiles = list_profiles(client)?;
    println!("Hotspot user profiles:");
    print!("{}", render_profile_list(&profiles));
    Ok(())
}

fn setup_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
