//! Enterprise user management: create, get, update and batch delete.
//!
//! Every call is a single request. Required fields are checked before
//! anything is sent, and transport failures are returned unchanged.

use crate::api::client::ServiceClient;
use crate::api::urls::{delete_url, resource_url, root_url};
use crate::core::error::Result;
use crate::models::options::{CreateOpts, DeleteOpts, GetOpts, UpdateOpts};
use crate::models::user::User;
use crate::validation::params::Validate;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Url;
use serde::Serialize;
use tracing::info;

const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";
const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Create an enterprise user
pub async fn create(c: &ServiceClient, opts: &CreateOpts) -> Result<User> {
    opts.validate()?;

    let url = root_url(c)?;
    let user: User = c.post(url, opts, request_headers(&opts.token)?).await?;

    info!(account = %user.user_account, "Enterprise user created");
    Ok(user)
}

/// Fetch one user by account
pub async fn get(c: &ServiceClient, opts: &GetOpts) -> Result<User> {
    opts.validate()?;

    let mut url = resource_url(c, &opts.account)?;
    set_query(&mut url, opts)?;

    c.get(url, request_headers(&opts.token)?).await
}

/// Update an enterprise user; only set fields are sent
pub async fn update(c: &ServiceClient, opts: &UpdateOpts) -> Result<User> {
    opts.validate()?;

    let url = resource_url(c, &opts.account)?;
    let user: User = c.put(url, opts, request_headers(&opts.token)?).await?;

    info!(account = %opts.account, "Enterprise user updated");
    Ok(user)
}

/// Delete all listed accounts in one call.
///
/// The service reports no per-account result, so this either succeeds for the
/// whole list or fails.
pub async fn batch_delete(c: &ServiceClient, opts: &DeleteOpts, accounts: &[String]) -> Result<()> {
    opts.validate()?;

    let mut url = delete_url(c)?;
    set_query(&mut url, opts)?;

    c.post_no_content(url, accounts, request_headers(&opts.token)?)
        .await?;

    info!(count = accounts.len(), "Enterprise users deleted");
    Ok(())
}

fn request_headers(token: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

    let mut token = HeaderValue::from_str(token)?;
    token.set_sensitive(true);
    headers.insert(HeaderName::from_static(ACCESS_TOKEN_HEADER), token);

    Ok(headers)
}

/// Replace the URL query with the encoded parameters; an empty encoding leaves
/// no `?` behind
fn set_query<Q: Serialize + ?Sized>(url: &mut Url, params: &Q) -> Result<()> {
    let query = serde_urlencoded::to_string(params)?;
    if query.is_empty() {
        url.set_query(None);
    } else {
        url.set_query(Some(&query));
    }
    Ok(())
}
