use serde::{Deserialize, Serialize, Serializer};

/// Which identifier an account string refers to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccountType {
    /// Platform account, used with account/password authentication
    #[default]
    Native = 0,
    /// Third-party user ID, used with App ID authentication
    ThirdParty = 1,
}

impl Serialize for AccountType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// Enterprise user status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserStatus {
    #[default]
    Normal = 0,
    Disabled = 1,
}

impl Serialize for UserStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl UserStatus {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(UserStatus::Normal),
            1 => Some(UserStatus::Disabled),
            _ => None,
        }
    }
}

/// User function bits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFunction {
    /// Account occupies an intelligent collaborative whiteboard seat.
    /// Enabling fails server-side when the enterprise has no free seats.
    #[serde(default, skip_serializing_if = "is_false")]
    pub enable_room: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Enterprise user record as returned by create, get and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: Option<String>,
    pub user_account: String,
    pub name: String,
    pub english_name: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    /// SIP number assigned to the account
    pub sip_num: Option<String>,
    pub dept_code: Option<String>,
    pub dept_name: Option<String>,
    pub dept_name_path: Option<String>,
    pub user_type: Option<i32>,
    pub admin_type: Option<i32>,
    pub signature: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "desc")]
    pub description: Option<String>,
    /// Raw status code; the service may report codes this client does not know
    pub status: Option<i32>,
    pub sort_level: Option<u32>,
    pub hide_phone: Option<bool>,
    /// Personal meeting ID
    pub vmr_id: Option<String>,
    pub third_account: Option<String>,
    pub function: Option<UserFunction>,
}

impl User {
    /// Status as a known `UserStatus`, or `None` when absent or unrecognised
    pub fn known_status(&self) -> Option<UserStatus> {
        self.status.and_then(UserStatus::from_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_account_type_wire_values() {
        assert_eq!(serde_json::to_value(AccountType::Native).unwrap(), json!(0));
        assert_eq!(serde_json::to_value(AccountType::ThirdParty).unwrap(), json!(1));
    }

    #[test]
    fn test_user_function_omits_false_flag() {
        let body = serde_json::to_value(UserFunction::default()).unwrap();
        assert_eq!(body, json!({}));

        let body = serde_json::to_value(UserFunction { enable_room: true }).unwrap();
        assert_eq!(body, json!({"enableRoom": true}));
    }

    #[test]
    fn test_decode_user_record() {
        let user: User = serde_json::from_value(json!({
            "id": "a1b2c3",
            "userAccount": "alice",
            "name": "Alice",
            "englishName": "Alice",
            "phone": "+8613800000000",
            "country": "chinaPR",
            "email": "alice@example.com",
            "sipNum": "+99111283000001",
            "deptCode": "1",
            "deptName": "Root",
            "status": 0,
            "sortLevel": 10000,
            "hidePhone": false,
            "desc": "engineer",
            "function": {"enableRoom": true},
            "unknownKey": "ignored"
        }))
        .unwrap();

        assert_eq!(user.user_account, "alice");
        assert_eq!(user.description.as_deref(), Some("engineer"));
        assert_eq!(user.status, Some(0));
        assert_eq!(user.known_status(), Some(UserStatus::Normal));
        assert_eq!(user.sort_level, Some(10000));
        assert_eq!(user.function, Some(UserFunction { enable_room: true }));
        assert_eq!(user.title, None);
    }

    #[test]
    fn test_decode_minimal_record() {
        let user: User = serde_json::from_value(json!({"name": "Bob"})).unwrap();
        assert_eq!(user.name, "Bob");
        assert!(user.user_account.is_empty());
        assert!(user.function.is_none());
    }

    #[test]
    fn test_decode_keeps_unknown_status() {
        let user: User = serde_json::from_value(json!({"status": 7})).unwrap();
        assert_eq!(user.status, Some(7));
        assert_eq!(user.known_status(), None);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(UserStatus::from_code(1), Some(UserStatus::Disabled));
        assert_eq!(UserStatus::from_code(-1), None);
        assert_eq!(serde_json::to_value(UserStatus::Disabled).unwrap(), json!(1));
    }
}
