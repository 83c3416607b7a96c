use crate::api::client::ServiceClient;
use crate::core::error::Result;
use reqwest::Url;

const ROOT_PATH: [&str; 4] = ["usg", "dcs", "corp", "member"];

/// Collection endpoint for enterprise users
pub fn root_url(c: &ServiceClient) -> Result<Url> {
    c.service_url(&ROOT_PATH)
}

/// Single user addressed by account
pub fn resource_url(c: &ServiceClient, account: &str) -> Result<Url> {
    let mut segments = ROOT_PATH.to_vec();
    segments.push(account);
    c.service_url(&segments)
}

pub fn delete_url(c: &ServiceClient) -> Result<Url> {
    let mut segments = ROOT_PATH.to_vec();
    segments.push("delete");
    c.service_url(&segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client() -> ServiceClient {
        ServiceClient::new("https://api.meeting.huaweicloud.com/v1", Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_root_url() {
        assert_eq!(
            root_url(&client()).unwrap().as_str(),
            "https://api.meeting.huaweicloud.com/v1/usg/dcs/corp/member"
        );
    }

    #[test]
    fn test_resource_url() {
        assert_eq!(
            resource_url(&client(), "alice@corp").unwrap().as_str(),
            "https://api.meeting.huaweicloud.com/v1/usg/dcs/corp/member/alice@corp"
        );
    }

    #[test]
    fn test_resource_url_escapes_separators() {
        assert_eq!(
            resource_url(&client(), "a/b?c").unwrap().as_str(),
            "https://api.meeting.huaweicloud.com/v1/usg/dcs/corp/member/a%2Fb%3Fc"
        );
    }

    #[test]
    fn test_delete_url() {
        assert_eq!(
            delete_url(&client()).unwrap().as_str(),
            "https://api.meeting.huaweicloud.com/v1/usg/dcs/corp/member/delete"
        );
    }
}
