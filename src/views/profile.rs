//! Profile page

use colored::Colorize;

use crate::api::{ProfileUpdate, Role, UserProfile};

/// Fields the user asked to change; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileChanges {
    pub username: Option<String>,
    pub role: Option<Role>,
    pub bio: Option<String>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.role.is_none() && self.bio.is_none()
    }

    /// Merge the changes onto the fetched profile
    ///
    /// An empty string clears an optional text field.
    pub fn apply(&self, profile: &UserProfile) -> ProfileUpdate {
        let mut update = ProfileUpdate::from(profile);
        if let Some(username) = &self.username {
            update.username = non_blank(username);
        }
        if let Some(role) = self.role {
            update.role = role;
        }
        if let Some(bio) = &self.bio {
            update.bio = non_blank(bio);
        }
        update
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Letter shown in place of a missing avatar
pub fn avatar_initial(profile: &UserProfile) -> char {
    profile
        .username
        .as_deref()
        .and_then(|name| name.trim().chars().next())
        .or_else(|| profile.email.chars().next())
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?')
}

/// Render the profile page
///
/// `base_url` turns the server-relative avatar path into a full URL.
pub fn render(profile: &UserProfile, base_url: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Profile".bold()));
    out.push_str(&format!("  Email     {}\n", profile.email));
    out.push_str(&format!(
        "  Username  {}\n",
        profile.username.as_deref().unwrap_or("-")
    ));
    out.push_str(&format!("  Role      {}\n", profile.role));
    out.push_str(&format!("  Bio       {}\n", profile.bio.as_deref().unwrap_or("-")));
    if let Some(created) = &profile.created_at {
        out.push_str(&format!("  Joined    {}\n", created));
    }
    let avatar = match &profile.avatar_url {
        Some(path) => avatar_link(base_url, path),
        None => format!("[{}]", avatar_initial(profile)),
    };
    out.push_str(&format!("  Avatar    {}", avatar));
    out
}

/// Absolute URL of an avatar path
///
/// The backend serves uploads from its root, outside the `/api` prefix.
pub fn avatar_link(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let root = base_url
        .trim_end_matches('/')
        .trim_end_matches("/api")
        .trim_end_matches('/');
    format!("{}/{}", root, path.trim_start_matches('/'))
}
