use serde::{Deserialize, Serialize};

/// JWT claims issued by the identity provider.
///
/// The backend treats the token as an identity oracle: `sub` is the
/// employee id, `roles` carries the realm role names.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: usize,
}
