//! Account commands: the mock login flow.
//!
//! # Usage
//!
//! ```bash
//! royal account login Marcus
//! royal account logout
//! ```
//!
//! Login derives a `<name>@royal.com` address from the display name and
//! persists the identity, so later invocations (and checkout receipts)
//! see the signed-in customer.

use super::open_session;

/// Sign in with a display name.
pub fn login(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session()?;
    let customer = session.login(name)?;
    tracing::info!("Signed in as {} <{}>", customer.name, customer.email);
    Ok(())
}

/// Sign out, discarding the persisted identity.
pub fn logout() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session()?;
    match session.customer() {
        Some(customer) => {
            let name = customer.name.clone();
            session.logout();
            tracing::info!("Signed out {name}");
        }
        None => tracing::info!("No one is signed in"),
    }
    Ok(())
}
