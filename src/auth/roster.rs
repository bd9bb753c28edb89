//! The fixed demo roster and credential verification

use crate::auth::models::{Role, SessionUser};
use crate::error::Result;

/// Source data for a demo account
#[derive(Debug, Clone, Copy)]
pub struct DemoAccount {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub username: &'static str,
    pub password: &'static str,
    pub role: Role,
    pub phone: &'static str,
    pub location: &'static str,
    pub age: Option<&'static str>,
}

/// The three accounts the site ships with. Their credentials are shown on
/// the login page.
pub const DEMO_ACCOUNTS: [DemoAccount; 3] = [
    DemoAccount {
        id: "1",
        name: "Admin User",
        email: "admin@shatam.com",
        username: "admin",
        password: "admin123",
        role: Role::Admin,
        phone: "+91 98765 43210",
        location: "Mumbai, Maharashtra",
        age: None,
    },
    DemoAccount {
        id: "2",
        name: "John Caregiver",
        email: "john.caregiver@shatam.com",
        username: "caregiver",
        password: "care123",
        role: Role::Caregiver,
        phone: "+91 98765 43211",
        location: "Delhi, India",
        age: Some("28"),
    },
    DemoAccount {
        id: "3",
        name: "Mary Careseeker",
        email: "mary.careseeker@shatam.com",
        username: "careseeker",
        password: "seek123",
        role: Role::Careseeker,
        phone: "+91 98765 43212",
        location: "Bangalore, Karnataka",
        age: Some("45"),
    },
];

impl DemoAccount {
    fn projection(&self) -> SessionUser {
        SessionUser {
            id: self.id.to_string(),
            name: self.name.to_string(),
            email: self.email.to_string(),
            role: self.role,
            phone: self.phone.to_string(),
            location: self.location.to_string(),
            age: self.age.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone)]
struct RosterEntry {
    username: String,
    password_hash: String,
    user: SessionUser,
}

/// Immutable set of accounts that can log in
#[derive(Debug, Clone)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Build the demo roster, hashing each password with the given bcrypt cost
    pub fn demo(cost: u32) -> Result<Self> {
        let entries = DEMO_ACCOUNTS
            .iter()
            .map(|account| {
                Ok(RosterEntry {
                    username: account.username.to_string(),
                    password_hash: bcrypt::hash(account.password, cost)?,
                    user: account.projection(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Roster ready with {} accounts", entries.len());
        Ok(Self { entries })
    }

    /// Find the first account whose username or email equals `handle`, whose
    /// role equals `role` and whose password matches exactly.
    pub fn verify(&self, handle: &str, password: &str, role: Role) -> Option<SessionUser> {
        self.entries
            .iter()
            .filter(|entry| entry.username == handle || entry.user.email == handle)
            .filter(|entry| entry.user.role == role)
            .find(|entry| bcrypt::verify(password, &entry.password_hash).unwrap_or(false))
            .map(|entry| entry.user.clone())
    }

    /// Accounts with their login handles, in roster order
    pub fn accounts(&self) -> impl Iterator<Item = (&str, &SessionUser)> {
        self.entries
            .iter()
            .map(|entry| (entry.username.as_str(), &entry.user))
    }
}
