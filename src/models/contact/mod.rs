//! Contact records offered on the assignment screens.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A contact as supplied by the server for assignment to a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub position: String,
    /// Whether the contact has been moved into the selection on this screen
    #[serde(default, skip_serializing)]
    pub selected: bool,
}

/// The fields that can be searched from the filter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    FirstName,
    LastName,
    CompanyName,
    Position,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::LastName,
        ContactField::FirstName,
        ContactField::CompanyName,
        ContactField::Position,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::FirstName => "First name",
            ContactField::LastName => "Last name",
            ContactField::CompanyName => "Company",
            ContactField::Position => "Position",
        }
    }
}

impl Contact {
    pub fn new(id: i64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            company_name: String::new(),
            position: String::new(),
            selected: false,
        }
    }

    pub fn with_company(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = company_name.into();
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    /// Parse the JSON array the server embeds in the assignment page.
    pub fn list_from_json(json: &str) -> Result<Vec<Contact>> {
        serde_json::from_str(json).context("Failed to parse contact list")
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::CompanyName => &self.company_name,
            ContactField::Position => &self.position,
        }
    }

    /// "Last, First" as listed on the assignment screen. The comma is dropped
    /// when there's no first name.
    pub fn listing_name(&self) -> String {
        if self.first_name.is_empty() {
            self.last_name.clone()
        } else {
            format!("{}, {}", self.last_name, self.first_name)
        }
    }

    /// "First Last" as shown on the job form.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
