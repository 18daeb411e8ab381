use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;

use crate::config::Config;
use crate::error::WebError;

/// What a bearer key is allowed to act as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Convenor,
    Class,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Convenor => "Convenor",
            Self::Class => "Class",
        }
    }
}

/// The authenticated caller, stored as a request extension by
/// [`require_auth`].
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub role: Role,
}

/// Bearer API keys mapped to the role they grant.
#[derive(Clone, Default)]
pub struct RoleKeys {
    keys: HashMap<String, Role>,
}

impl RoleKeys {
    pub fn from_config(config: &Config) -> Self {
        let mut keys = Self::default();
        keys.extend(&config.admin_api_keys, Role::Admin);
        keys.extend(&config.convenor_api_keys, Role::Convenor);
        keys.extend(&config.class_api_keys, Role::Class);
        keys
    }

    fn extend(&mut self, comma_separated: &str, role: Role) {
        for key in comma_separated.split(',').map(str::trim) {
            if !key.is_empty() {
                self.keys.insert(key.to_string(), role);
            }
        }
    }

    pub fn resolve(&self, key: &str) -> Option<Role> {
        self.keys.get(key).copied()
    }
}

/// The single capability check: every protected handler goes through this
/// instead of re-implementing its own role comparison.
pub fn require_role(actor: Actor, allowed: &[Role]) -> Result<(), WebError> {
    if allowed.contains(&actor.role) {
        Ok(())
    } else {
        tracing::warn!(role = actor.role.as_str(), "Rejected actor lacking required role");
        Err(WebError::Forbidden)
    }
}

/// Resolves the bearer key to an [`Actor`] and attaches it to the request.
pub async fn require_auth(
    State(keys): State<RoleKeys>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(WebError::Unauthorized)?;

    let role = keys.resolve(token).ok_or_else(|| {
        tracing::warn!("Invalid API key attempt");
        WebError::Unauthorized
    })?;

    req.extensions_mut().insert(Actor { role });

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> RoleKeys {
        let mut keys = RoleKeys::default();
        keys.extend("admin-1, admin-2", Role::Admin);
        keys.extend("class-1", Role::Class);
        keys.extend("", Role::Convenor);
        keys
    }

    #[test]
    fn test_resolve_known_keys() {
        let keys = keys();
        assert_eq!(keys.resolve("admin-1"), Some(Role::Admin));
        assert_eq!(keys.resolve("admin-2"), Some(Role::Admin));
        assert_eq!(keys.resolve("class-1"), Some(Role::Class));
    }

    #[test]
    fn test_resolve_unknown_key() {
        assert_eq!(keys().resolve("nope"), None);
        assert_eq!(keys().resolve(""), None);
    }

    #[test]
    fn test_require_role_accepts_listed_roles() {
        let actor = Actor { role: Role::Admin };
        assert!(require_role(actor, &[Role::Admin]).is_ok());
        assert!(require_role(actor, &[Role::Convenor, Role::Admin]).is_ok());
    }

    #[test]
    fn test_require_role_rejects_other_roles() {
        let actor = Actor { role: Role::Class };
        assert!(matches!(
            require_role(actor, &[Role::Admin, Role::Convenor]),
            Err(WebError::Forbidden)
        ));
    }
}
