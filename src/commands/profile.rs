//! Profile handlers

use super::{to_json, AppContext};
use crate::cli::ProfileCommand;
use crate::error::{DashError, Result};
use crate::views::profile::{render, ProfileChanges};

/// Handle profile commands for the signed-in user
pub async fn handle_profile(ctx: &AppContext, command: ProfileCommand) -> Result<String> {
    let email = ctx.session()?.email.clone();
    let base_url = ctx.config.api.base_url.as_str();

    match command {
        ProfileCommand::Show { json } => {
            let profile = ctx.api.get_profile(&email).await?;
            if json {
                return to_json(&profile);
            }
            Ok(render(&profile, base_url))
        }
        ProfileCommand::Update {
            username,
            role,
            bio,
        } => {
            let changes = ProfileChanges {
                username,
                role,
                bio,
            };
            if changes.is_empty() {
                return Err(DashError::Validation(
                    "Nothing to update: pass --username, --role or --bio".to_string(),
                )
                .into());
            }

            let current = ctx.api.get_profile(&email).await?;
            let updated = ctx.api.update_profile(&changes.apply(&current)).await?;
            tracing::info!(email = %email, "Profile updated");
            Ok(format!("Profile saved\n\n{}", render(&updated, base_url)))
        }
        ProfileCommand::Avatar { file } => {
            let updated = ctx.api.upload_avatar(&email, &file).await?;
            tracing::info!(email = %email, "Avatar uploaded");
            Ok(format!("Avatar updated\n\n{}", render(&updated, base_url)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockDashboardApi, ProfileUpdate, Role};
    use crate::commands::test_support::context;
    use crate::test_utils::{assert_error_contains, profile};
    use std::path::{Path, PathBuf};

    #[tokio::test]
    async fn test_update_merges_onto_fetched_profile() {
        let mut api = MockDashboardApi::new();
        api.expect_get_profile().returning(|email| {
            let mut p = profile(email);
            p.username = Some("ada".into());
            p.bio = Some("old".into());
            Ok(p)
        });
        api.expect_update_profile()
            .withf(|update: &ProfileUpdate| {
                update.email == "ada@example.com"
                    && update.username.as_deref() == Some("ada")
                    && update.bio.as_deref() == Some("fresh")
                    && update.role == Role::User
            })
            .times(1)
            .returning(|update| {
                let mut p = profile(&update.email);
                p.bio = update.bio.clone();
                Ok(p)
            });
        let (ctx, _dir) = context(api, Some("ada@example.com"));

        let out = handle_profile(
            &ctx,
            ProfileCommand::Update {
                username: None,
                role: None,
                bio: Some("fresh".into()),
            },
        )
        .await
        .unwrap();
        assert!(out.contains("Profile saved"));
        assert!(out.contains("fresh"));
    }

    #[tokio::test]
    async fn test_update_without_changes_sends_nothing() {
        let mut api = MockDashboardApi::new();
        api.expect_get_profile().times(0);
        api.expect_update_profile().times(0);
        let (ctx, _dir) = context(api, Some("ada@example.com"));

        let result = handle_profile(
            &ctx,
            ProfileCommand::Update {
                username: None,
                role: None,
                bio: None,
            },
        )
        .await;
        assert_error_contains(result, "Nothing to update");
    }

    #[tokio::test]
    async fn test_show_json() {
        let mut api = MockDashboardApi::new();
        api.expect_get_profile().returning(|email| Ok(profile(email)));
        let (ctx, _dir) = context(api, Some("ada@example.com"));

        let out = handle_profile(&ctx, ProfileCommand::Show { json: true })
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["email"], "ada@example.com");
        assert_eq!(value["role"], "user");
    }

    #[tokio::test]
    async fn test_avatar_uploads_for_current_user() {
        let mut api = MockDashboardApi::new();
        api.expect_upload_avatar()
            .withf(|email: &str, file: &Path| {
                email == "ada@example.com" && file == Path::new("me.png")
            })
            .times(1)
            .returning(|email, _| {
                let mut p = profile(email);
                p.avatar_url = Some("/static/avatars/1.png".into());
                Ok(p)
            });
        let (ctx, _dir) = context(api, Some("ada@example.com"));

        let out = handle_profile(
            &ctx,
            ProfileCommand::Avatar {
                file: PathBuf::from("me.png"),
            },
        )
        .await
        .unwrap();
        assert!(out.contains("http://localhost:8000/static/avatars/1.png"));
    }
}
