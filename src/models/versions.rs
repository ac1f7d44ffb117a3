use serde::Deserialize;

/// Structure for a single entry of the yarn versions list from
/// https://meta.fabricmc.net/v2/versions/yarn/
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    /// The Minecraft version these mappings target
    #[serde(default)]
    pub game_version: String,
    pub build: Option<u32>,
    pub version: Option<String>,
}

/// Maven repository metadata (maven-metadata.xml) for a
/// single artifact
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MavenMetadata {
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub artifact_id: Option<String>,
    #[serde(default)]
    pub versioning: Option<Versioning>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Versioning {
    #[serde(default)]
    pub latest: Option<String>,
    /// Pointer to the latest non-snapshot release
    #[serde(default)]
    pub release: Option<String>,
}

/// The versions that end up in gradle.properties. Loom is only
/// resolved by the full properties generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersions {
    pub minecraft_version: String,
    pub yarn_mappings: String,
    pub fabric_loom_version: Option<String>,
}
