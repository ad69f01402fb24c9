use crate::{wire, LookupError, UserInfo};

pub(crate) fn decode_user_info(body: &[u8]) -> Result<UserInfo, LookupError> {
    let profile = serde_json::from_slice::<wire::UserProfile>(body).map_err(|err| {
        LookupError::Decode(format!(
            "invalid user profile JSON: {err}; body: {}",
            String::from_utf8_lossy(body)
        ))
    })?;
    Ok(map_profile(profile))
}

fn map_profile(profile: wire::UserProfile) -> UserInfo {
    let username = match profile.full_name {
        Some(full_name) if !full_name.is_empty() => full_name,
        _ => format!("{} {}", profile.first_name, profile.last_name)
            .trim()
            .to_owned(),
    };

    UserInfo {
        user_id: profile.user_id,
        username,
        user_email: profile.email_address_primary,
    }
}
