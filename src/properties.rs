use crate::models::versions::ResolvedVersions;
use log::info;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::Path;
use tokio::fs::write;

/// Ordered list of `key=value` lines making up a gradle.properties file
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GradleProperties {
    entries: Vec<(String, String)>,
}

impl GradleProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry to the end of the file
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Writes the properties to `path` replacing anything that was
    /// already there.
    pub async fn write(&self, path: impl AsRef<Path>) -> io::Result<()> {
        write(path, self.to_string()).await?;
        info!("Config file written.");
        Ok(())
    }
}

impl Display for GradleProperties {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, (key, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

impl From<&ResolvedVersions> for GradleProperties {
    fn from(versions: &ResolvedVersions) -> Self {
        let mut properties = GradleProperties::new();
        properties.push("minecraft_version", &versions.minecraft_version);
        properties.push("yarn_mappings", &versions.yarn_mappings);
        if let Some(loom) = &versions.fabric_loom_version {
            properties.push("fabric_loom_version", loom);
        }
        properties
    }
}

#[cfg(test)]
mod test {
    use crate::models::versions::ResolvedVersions;
    use crate::properties::GradleProperties;
    use tokio::fs::{read_to_string, write};

    #[test]
    fn test_format() {
        let mut properties = GradleProperties::new();
        assert_eq!(properties.to_string(), "");

        properties.push("a", "1");
        properties.push("b.c", "-Xmx4G -Dx=y");
        assert_eq!(properties.to_string(), "a=1\nb.c=-Xmx4G -Dx=y");
    }

    #[test]
    fn test_from_versions() {
        let mut versions = ResolvedVersions {
            minecraft_version: "1.20.1".to_string(),
            yarn_mappings: "1.20.1+build.5".to_string(),
            fabric_loom_version: None,
        };
        assert_eq!(
            GradleProperties::from(&versions).to_string(),
            "minecraft_version=1.20.1\nyarn_mappings=1.20.1+build.5"
        );

        versions.fabric_loom_version = Some("1.7.2".to_string());
        assert_eq!(
            GradleProperties::from(&versions).to_string(),
            "minecraft_version=1.20.1\nyarn_mappings=1.20.1+build.5\nfabric_loom_version=1.7.2"
        );
    }

    /// Writing replaces the previous contents rather than merging
    #[tokio::test]
    async fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradle.properties");
        write(&path, "old=value\nother=thing\nmore=lines\n")
            .await
            .unwrap();

        let mut properties = GradleProperties::new();
        properties.push("minecraft_version", "1.20.1");
        properties.write(&path).await.unwrap();

        let contents = read_to_string(&path).await.unwrap();
        assert_eq!(contents, "minecraft_version=1.20.1");
    }
}
