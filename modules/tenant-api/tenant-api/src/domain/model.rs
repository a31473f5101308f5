use credential_orchestrator_sdk::TenantIdentity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color {
    pub id: i32,
    pub name: String,
    /// Always `#RRGGBB`, upper-case.
    pub hexadecimal: String,
}

/// A validated create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewColor {
    pub name: String,
    pub hexadecimal: String,
}

/// A validated partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorPatch {
    pub name: Option<String>,
    pub hexadecimal: Option<String>,
}

impl ColorPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.hexadecimal.is_none()
    }
}

/// Result of a tenant-scoped operation plus the identity it ran under.
#[derive(Debug)]
pub struct Scoped<T> {
    pub tenant: TenantIdentity,
    pub value: T,
}
