use crate::core::error::{MeetingError, Result};
use crate::models::field::Field;
use crate::models::user::{AccountType, UserFunction, UserStatus};
use crate::validation::params::{require, Validate};
use serde::Serialize;

/// Parameters for creating an enterprise user
///
/// Empty strings, a zero sort level and `None` are left out of the body so the
/// service applies its defaults (country `chinaPR`, root department, sort
/// level 10000, status normal, notifications sent).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOpts {
    /// Enterprise user name (1-64 characters)
    pub name: String,

    /// Platform account; generated by the service when empty
    #[serde(skip_serializing_if = "String::is_empty")]
    pub account: String,

    /// Third-party user ID, for App ID authentication
    #[serde(skip_serializing_if = "String::is_empty")]
    pub third_account: String,

    /// Country the phone number belongs to
    #[serde(skip_serializing_if = "String::is_empty")]
    pub country: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub dept_code: String,

    #[serde(rename = "desc", skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub english_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<UserFunction>,

    /// Phone number with country code, e.g. "+86xxxxxxxxxxx"
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_phone: Option<bool>,

    /// Generated by the service when empty
    #[serde(rename = "pwd", skip_serializing_if = "String::is_empty")]
    pub password: String,

    /// "0" suppresses the account-opening email and SMS
    #[serde(skip_serializing_if = "String::is_empty")]
    pub send_notify: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub signature: String,

    /// Address book order, 1-10000; lower sorts first
    #[serde(skip_serializing_if = "is_zero")]
    pub sort_level: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(skip)]
    pub token: String,
}

impl Validate for CreateOpts {
    fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("token", &self.token)
    }
}

/// Lookup key for a single user
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetOpts {
    #[serde(skip)]
    pub account: String,

    #[serde(rename = "accountType")]
    pub account_type: AccountType,

    #[serde(skip)]
    pub token: String,
}

impl Validate for GetOpts {
    fn validate(&self) -> Result<()> {
        if self.account.is_empty() || self.token.is_empty() {
            return Err(MeetingError::MissingAccountOrToken);
        }
        Ok(())
    }
}

/// Parameters for updating an enterprise user
///
/// `Field` members are only sent when set; `Field::Cleared` sends the empty
/// value so the service clears the attribute. Country, name, phone and sort
/// level cannot be cleared through this call and are left out when empty.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOpts {
    #[serde(skip)]
    pub account: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub country: String,

    #[serde(skip_serializing_if = "Field::is_unset")]
    pub dept_code: Field<String>,

    #[serde(rename = "desc", skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,

    #[serde(skip_serializing_if = "Field::is_unset")]
    pub email: Field<String>,

    #[serde(skip_serializing_if = "Field::is_unset")]
    pub english_name: Field<String>,

    #[serde(skip_serializing_if = "Field::is_unset")]
    pub hide_phone: Field<bool>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,

    #[serde(skip_serializing_if = "Field::is_unset")]
    pub signature: Field<String>,

    #[serde(skip_serializing_if = "is_zero")]
    pub sort_level: u32,

    #[serde(skip_serializing_if = "Field::is_unset")]
    pub status: Field<UserStatus>,

    #[serde(skip_serializing_if = "Field::is_unset")]
    pub title: Field<String>,

    /// Personal meeting ID
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub vmr_id: Field<String>,

    #[serde(skip)]
    pub token: String,
}

impl Validate for UpdateOpts {
    fn validate(&self) -> Result<()> {
        require("account", &self.account)?;
        require("token", &self.token)
    }
}

/// Options for batch deletion; the accounts travel separately as the body
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteOpts {
    #[serde(rename = "accountType", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,

    #[serde(skip)]
    pub token: String,
}

impl Validate for DeleteOpts {
    fn validate(&self) -> Result<()> {
        if self.token.is_empty() {
            return Err(MeetingError::MissingToken);
        }
        Ok(())
    }
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}
