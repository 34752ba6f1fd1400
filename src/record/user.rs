use serde::{Deserialize, Serialize};

use super::{Column, DateSpan, Entity, FieldManifest, FieldValue, RecordKind, Tone};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Member,
    Viewer,
    Guest,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
            Self::Viewer => "viewer",
            Self::Guest => "guest",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub created_at: String,
}

static USER_MANIFEST: FieldManifest = FieldManifest {
    searchable: &["name", "email"],
    filterable: &["role", "status"],
    sortable: &["name", "email", "role", "status", "createdAt"],
    columns: &[
        Column::plain("name", "Name"),
        Column::plain("email", "Email"),
        Column::plain("role", "Role"),
        Column::plain("status", "Status"),
        Column::plain("createdAt", "Created"),
    ],
};

impl Entity for User {
    const KIND: RecordKind = RecordKind::Users;

    fn manifest() -> &'static FieldManifest {
        &USER_MANIFEST
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Text(&self.id)),
            "name" => Some(FieldValue::Text(&self.name)),
            "email" => Some(FieldValue::Text(&self.email)),
            "role" => Some(FieldValue::Text(self.role.as_str())),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            "createdAt" => Some(FieldValue::Date(&self.created_at)),
            _ => None,
        }
    }

    fn date_span(&self) -> DateSpan<'_> {
        DateSpan::single(&self.created_at)
    }

    fn tone(&self) -> Tone {
        match self.status {
            UserStatus::Active => Tone::Success,
            UserStatus::Inactive => Tone::Error,
            UserStatus::Pending => Tone::Warning,
        }
    }
}
