use crate::shared::Result;

/// Maximum length for CI and relationship identifiers
const MAX_ID_LENGTH: usize = 255;

/// CI names are limited to 100 characters by the CMDB backend
const MAX_NAME_LENGTH: usize = 100;

/// CI and relationship types are limited to 50 characters by the CMDB backend
pub(crate) const MAX_TYPE_LENGTH: usize = 50;

/// NewType wrapper for a configuration item identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CiId(String);

impl CiId {
    pub fn new(id: String) -> Result<Self> {
        validate_identifier(&id, "CI id")?;
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CiId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared identifier rules for CIs, relationships and relationship endpoints.
pub(crate) fn validate_identifier(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("{} cannot be empty", what);
    }

    if value.len() > MAX_ID_LENGTH {
        anyhow::bail!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            what,
            value.len(),
            MAX_ID_LENGTH
        );
    }

    if value.chars().any(char::is_control) {
        anyhow::bail!("{} contains control characters", what);
    }

    Ok(())
}

/// Shared rules for the categorical `type` field.
pub(crate) fn validate_type_name(value: &str, what: &str) -> Result<()> {
    let length = value.chars().count();
    if length == 0 || length > MAX_TYPE_LENGTH {
        anyhow::bail!(
            "{} must be between 1 and {} characters (got {})",
            what,
            MAX_TYPE_LENGTH,
            length
        );
    }
    Ok(())
}

/// Configuration item (CI) tracked in the CMDB: a server, application, database, ...
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationItem {
    id: CiId,
    name: String,
    ci_type: String,
    description: String,
    tags: Vec<String>,
}

impl ConfigurationItem {
    pub fn new(
        id: String,
        name: String,
        ci_type: String,
        description: String,
        tags: Vec<String>,
    ) -> Result<Self> {
        let id = CiId::new(id)?;

        let name_length = name.chars().count();
        if name_length == 0 || name_length > MAX_NAME_LENGTH {
            anyhow::bail!(
                "CI '{}': name must be between 1 and {} characters (got {})",
                id,
                MAX_NAME_LENGTH,
                name_length
            );
        }

        validate_type_name(&ci_type, &format!("CI '{}': type", id))?;

        Ok(Self {
            id,
            name,
            ci_type,
            description,
            tags,
        })
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    pub fn ci_id(&self) -> &CiId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ci_type(&self) -> &str {
        &self.ci_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}
