use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SFDX_PROJECT_FILE: &str = "sfdx-project.json";

/// The parts of `sfdx-project.json` this tool reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SfdxProject {
    pub package_directories: Vec<PackageDirectory>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sfdc_login_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_api_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageDirectory {
    pub path: String,

    #[serde(default)]
    pub default: bool,
}

impl SfdxProject {
    pub fn parse(contents: &str) -> Result<Self> {
        serde_json::from_str(contents)
            .map_err(|e| Error::ProjectConfigError(format!("Failed to parse {SFDX_PROJECT_FILE}: {e}")))
    }

    /// Read `sfdx-project.json` from the project root
    pub fn load(project_root: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(project_root.join(SFDX_PROJECT_FILE))?;
        Self::parse(&contents)
    }

    pub fn default_package_directory(&self) -> Option<&PackageDirectory> {
        self.package_directories.iter().find(|dir| dir.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_project() {
        let project = SfdxProject::parse(
            r#"{
                "packageDirectories": [
                    { "path": "force-app", "default": true },
                    { "path": "unpackaged" }
                ],
                "namespace": "",
                "sfdcLoginUrl": "https://login.salesforce.com",
                "sourceApiVersion": "44.0"
            }"#,
        )
        .unwrap();

        assert_eq!(project.package_directories.len(), 2);
        assert_eq!(project.default_package_directory().unwrap().path, "force-app");
        assert!(!project.package_directories[1].default);
        assert_eq!(project.source_api_version.as_deref(), Some("44.0"));
    }

    #[test]
    fn test_missing_package_directories_is_an_error() {
        let err = SfdxProject::parse(r#"{ "namespace": "" }"#).unwrap_err();
        assert!(matches!(err, Error::ProjectConfigError(_)));
        assert!(err.to_string().contains("packageDirectories"));
    }
}
