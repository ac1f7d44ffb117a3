use crate::models::errors::VersionsError;
use crate::models::versions::{MavenMetadata, VersionRecord};
use crate::utils::net::{get_json, get_text};
use log::debug;

/// Picks the record with the highest build number. Records only replace
/// the current pick when their build is strictly greater so the earliest
/// record wins a tie. A missing build sorts below any present one.
pub fn select_newest<'a, I>(records: I) -> Option<&'a VersionRecord>
where
    I: IntoIterator<Item = &'a VersionRecord>,
{
    records
        .into_iter()
        .fold(None::<&VersionRecord>, |newest, current| match newest {
            Some(newest) if current.build <= newest.build => Some(newest),
            _ => Some(current),
        })
}

/// Finds the version string of the newest mappings build that targets
/// exactly `game_version`.
pub fn newest_mappings<'a>(records: &'a [VersionRecord], game_version: &str) -> Option<&'a str> {
    let newest = select_newest(
        records
            .iter()
            .filter(|record| record.game_version == game_version),
    )?;
    newest.version.as_deref()
}

/// Loads the yarn versions list from `url` and resolves the newest
/// mappings version for `game_version`.
pub async fn get_yarn_mappings(
    client: &reqwest::Client,
    url: &str,
    game_version: &str,
) -> Result<String, VersionsError> {
    let records = get_json::<Vec<VersionRecord>>(client, url).await?;
    debug!("Loaded {} yarn mappings records", records.len());

    newest_mappings(&records, game_version)
        .map(str::to_string)
        .ok_or_else(|| VersionsError::UnknownVersion(game_version.to_string()))
}

/// Extracts `metadata.versioning.release` from a maven-metadata.xml
/// document.
pub fn parse_release(xml: &str) -> Result<String, VersionsError> {
    let metadata: MavenMetadata = quick_xml::de::from_str(xml)?;
    debug!(
        "Maven metadata for {}:{}",
        metadata.group_id.as_deref().unwrap_or("?"),
        metadata.artifact_id.as_deref().unwrap_or("?")
    );

    let versioning = metadata.versioning.ok_or(VersionsError::MissingRelease)?;
    if let Some(latest) = &versioning.latest {
        debug!("Latest published version: {latest}");
    }
    versioning.release.ok_or(VersionsError::MissingRelease)
}

/// Loads the fabric-loom maven metadata from `url` and returns the
/// current release version.
pub async fn get_loom_version(client: &reqwest::Client, url: &str) -> Result<String, VersionsError> {
    let xml = get_text(client, url).await?;
    parse_release(&xml)
}

#[cfg(test)]
mod test {
    use crate::models::errors::VersionsError;
    use crate::models::versions::VersionRecord;
    use crate::utils::versions::{newest_mappings, parse_release, select_newest};

    fn record(game_version: &str, build: Option<u32>, version: &str) -> VersionRecord {
        VersionRecord {
            game_version: game_version.to_string(),
            build,
            version: Some(version.to_string()),
        }
    }

    fn load_fixture() -> Vec<VersionRecord> {
        let contents = include_str!("../../test/yarn_versions.json");
        serde_json::from_str::<Vec<VersionRecord>>(contents).unwrap()
    }

    #[test]
    fn test_select_highest_build() {
        let records = [
            record("1.20.1", Some(2), "a"),
            record("1.20.1", Some(7), "b"),
            record("1.20.1", Some(4), "c"),
        ];
        let newest = select_newest(&records).unwrap();
        assert_eq!(newest.version.as_deref(), Some("b"));
    }

    /// Equal builds keep whichever record came first
    #[test]
    fn test_select_tie_keeps_first() {
        let records = [
            record("1.20.1", Some(1), "a"),
            record("1.20.1", Some(6), "first"),
            record("1.20.1", Some(6), "second"),
        ];
        let newest = select_newest(&records).unwrap();
        assert_eq!(newest.version.as_deref(), Some("first"));
    }

    #[test]
    fn test_select_empty() {
        let records: Vec<VersionRecord> = Vec::new();
        assert!(select_newest(&records).is_none());
    }

    #[test]
    fn test_select_missing_build() {
        let records = [
            record("1.20.1", None, "no-build"),
            record("1.20.1", Some(0), "zero"),
            record("1.20.1", None, "no-build-again"),
        ];
        let newest = select_newest(&records).unwrap();
        assert_eq!(newest.version.as_deref(), Some("zero"));

        let records = [record("1.20.1", None, "a"), record("1.20.1", None, "b")];
        let newest = select_newest(&records).unwrap();
        assert_eq!(newest.version.as_deref(), Some("a"));
    }

    #[test]
    fn test_newest_mappings() {
        let records = load_fixture();
        assert_eq!(
            newest_mappings(&records, "1.20.1"),
            Some("1.20.1+build.5")
        );
        assert_eq!(
            newest_mappings(&records, "1.19.4"),
            Some("1.19.4+build.9")
        );
        assert_eq!(newest_mappings(&records, "1.21.0"), None);
    }

    /// Matching is an exact string comparison
    #[test]
    fn test_newest_mappings_exact_match() {
        let records = load_fixture();
        assert_eq!(newest_mappings(&records, "1.20"), None);
        assert_eq!(newest_mappings(&records, " 1.20.1"), None);
    }

    #[test]
    fn test_newest_mappings_missing_version() {
        let records = [
            record("1.20.1", Some(1), "1.20.1+build.1"),
            VersionRecord {
                game_version: "1.20.1".to_string(),
                build: Some(2),
                version: None,
            },
        ];
        assert_eq!(newest_mappings(&records, "1.20.1"), None);
    }

    #[test]
    fn test_parse_release() {
        let xml = "<metadata><versioning><release>1.7.2</release></versioning></metadata>";
        assert_eq!(parse_release(xml).unwrap(), "1.7.2");

        let contents = include_str!("../../test/maven-metadata.xml");
        assert_eq!(parse_release(contents).unwrap(), "1.7.2");
    }

    #[test]
    fn test_parse_release_missing() {
        let xml = "<metadata><versioning><latest>1.8.0</latest></versioning></metadata>";
        assert!(matches!(
            parse_release(xml),
            Err(VersionsError::MissingRelease)
        ));

        let xml = "<metadata><groupId>net.fabricmc</groupId></metadata>";
        assert!(matches!(
            parse_release(xml),
            Err(VersionsError::MissingRelease)
        ));
    }
}
