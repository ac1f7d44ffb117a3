/// The application version from Cargo.toml
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
/// The User-Agent header passed when making requests (fabric-props/{VERSION})
pub const USER_AGENT: &str = concat!("fabric-props/", env!("CARGO_PKG_VERSION"));
/// The url containing the list of every yarn mappings build.
pub const YARN_VERSIONS_URL: &str = "https://meta.fabricmc.net/v2/versions/yarn/";
/// The maven metadata for the fabric-loom gradle plugin.
pub const LOOM_METADATA_URL: &str =
    "https://maven.fabricmc.net/net/fabricmc/fabric-loom/maven-metadata.xml";
/// File name of the generated properties, relative to the working directory
pub const PROPERTIES_FILE: &str = "gradle.properties";
/// JVM flags handed to the gradle daemon
pub const GRADLE_JVM_ARGS: &str = "-Xmx4G -XX:+HeapDumpOnOutOfMemoryError -Dfile.encoding=UTF-8";
/// Command started by the dev-run helper once the properties are written
pub const BUILD_COMMAND: &str = "gradle run";
