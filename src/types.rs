/// User identity resolved from an email address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserInfo {
    pub user_id: String,
    /// Display name: the profile's full name, or first and last name joined.
    pub username: String,
    pub user_email: String,
}
