//! Client for the enterprise user-management API of a cloud meeting service.
//!
//! ```no_run
//! use meeting_users::api::{client::ServiceClient, users};
//! use meeting_users::models::options::CreateOpts;
//! use std::time::Duration;
//!
//! # async fn run() -> meeting_users::core::error::Result<()> {
//! let client = ServiceClient::new("https://api.meeting.huaweicloud.com/v1", Duration::from_secs(30))?;
//! let user = users::create(&client, &CreateOpts {
//!     name: "Alice".to_string(),
//!     token: "access-token".to_string(),
//!     ..Default::default()
//! }).await?;
//! println!("{}", user.user_account);
//! # Ok(())
//! # }
//! ```

pub mod core {
    pub mod config;
    pub mod error;
    pub mod tracing_init;
}

pub mod api {
    pub mod client;
    pub mod urls;
    pub mod users;
}

pub mod models {
    pub mod field;
    pub mod options;
    pub mod user;
}

pub mod validation {
    pub mod params;
}

pub use crate::api::client::ServiceClient;
pub use crate::core::error::{MeetingError, Result};
pub use crate::models::field::Field;
pub use crate::models::user::{AccountType, User, UserFunction, UserStatus};
