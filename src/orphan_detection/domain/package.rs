use crate::shared::Result;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Maximum length for package versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// NewType wrapper for package name with validation
///
/// The original spelling is kept for display. Comparisons between names
/// coming from different tools go through [`PackageName::normalized`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        // Names end up as arguments to `pip uninstall`, so they must not look like flags
        if !name.starts_with(|c: char| c.is_ascii_alphanumeric()) {
            anyhow::bail!("Package name '{}' must start with a letter or digit", name);
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            anyhow::bail!(
                "Package name '{}' contains invalid characters. Only alphanumeric, hyphens, underscores, and dots are allowed.",
                name
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical comparison key: lowercase, with every run of `-`, `_` and `.`
    /// collapsed to a single `-`
    pub fn normalized(&self) -> String {
        normalize_name(&self.0)
    }

    /// Returns true if both names refer to the same distribution
    pub fn matches(&self, other: &str) -> bool {
        self.normalized() == normalize_name(other)
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalizes a raw distribution name (see [`PackageName::normalized`])
pub fn normalize_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut in_separator = false;
    for c in name.trim().chars() {
        if c == '-' || c == '_' || c == '.' {
            if !in_separator {
                normalized.push('-');
                in_separator = true;
            }
        } else {
            normalized.push(c.to_ascii_lowercase());
            in_separator = false;
        }
    }
    normalized
}

/// NewType wrapper for package version with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(version: String) -> Result<Self> {
        if version.is_empty() {
            anyhow::bail!("Package version cannot be empty");
        }

        if version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Package version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            );
        }

        if version.chars().any(|c| c.is_whitespace() || c.is_control()) {
            anyhow::bail!("Package version '{}' contains whitespace or control characters", version);
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An installed distribution as reported by the package manager
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    name: PackageName,
    version: Version,
    location: Option<String>,
}

impl Package {
    pub fn new(name: String, version: String) -> Result<Self> {
        Ok(Self {
            name: PackageName::new(name)?,
            version: Version::new(version)?,
            location: None,
        })
    }

    /// Attaches the site-packages directory the distribution is installed in
    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.location = location.filter(|l| !l.trim().is_empty());
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn package_name(&self) -> &PackageName {
        &self.name
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}
