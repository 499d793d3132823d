use crate::error::{CardError, CardResult};

/// Read-only view of one project as the data layer hands it over. The
/// renderer never mutates or writes back.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ProjectSnapshot {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub roles: Vec<RoleBadge>,
    #[serde(default)]
    pub stack: Vec<String>,
}

/// One open role on a project: `slug` keys the badge palette, `name` is the
/// label drawn inside the pill.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RoleBadge {
    pub slug: String,
    pub name: String,
}

/// Project lifecycle. Only `active` projects are publicly listed, so only
/// they get a preview card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Pending,
    Active,
    Hidden,
    Rejected,
}

impl ProjectSnapshot {
    pub fn validate(&self) -> CardResult<()> {
        if self.slug.trim().is_empty() {
            return Err(CardError::invalid("slug must be non-empty"));
        }
        if self.title.trim().is_empty() {
            return Err(CardError::invalid("title must be non-empty"));
        }
        for role in &self.roles {
            if role.name.trim().is_empty() {
                return Err(CardError::invalid(format!(
                    "role '{}' has an empty display name",
                    role.slug
                )));
            }
        }
        Ok(())
    }

    pub fn is_eligible(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}

/// Immutable input of one render call. Constructed only from an eligible
/// snapshot and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct RenderRequest {
    pub title: String,
    pub description: String,
    pub roles: Vec<RoleBadge>,
    pub stack: Vec<String>,
}

impl RenderRequest {
    /// Gate + conversion. Projects that are not publicly listed fail with
    /// the not-found outcome before any pixel work happens.
    pub fn from_snapshot(snapshot: &ProjectSnapshot) -> CardResult<Self> {
        snapshot.validate()?;
        if !snapshot.is_eligible() {
            tracing::debug!(
                slug = %snapshot.slug,
                status = ?snapshot.status,
                "project not eligible for a preview card"
            );
            return Err(CardError::not_found(format!(
                "project '{}' is not active",
                snapshot.slug
            )));
        }
        Ok(Self {
            title: snapshot.title.clone(),
            description: snapshot.description.clone(),
            roles: snapshot.roles.clone(),
            stack: snapshot.stack.clone(),
        })
    }
}
