use std::fmt::{Debug, Formatter};

/// A signed-in user as reported by the identity provider.
#[derive(Clone, PartialEq)]
pub struct Identity {
    pub uid: String,
    pub email: String,
    pub id_token: String,
}

impl Debug for Identity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("uid", &self.uid)
            .field("email", &self.email)
            .field("id_token", &"<redacted>")
            .finish()
    }
}
