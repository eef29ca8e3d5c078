//! Tool catalog
//!
//! The store's rentable tools keyed by code. Codes are unique within a
//! catalog; inserting a second tool under an existing code is an error.
//! A catalog can be the built-in stock list or a TOML file:
//!
//! ```toml
//! [[tool]]
//! code = "LADW"
//! type = "ladder"
//! brand = "Werner"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use tooltime_schema::{SchemaError, ToolCode, ToolType};

use crate::paths;

/// Errors that can occur when building, loading or querying a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Another tool already uses this code.
    #[error("Tool code `{0}` is already in use.")]
    DuplicateCode(ToolCode),

    /// A tool was defined without a brand.
    #[error("Tool `{0}` has an empty brand.")]
    EmptyBrand(ToolCode),

    /// No tool with this code is in the catalog.
    #[error("No tool with code `{0}` in the catalog.")]
    UnknownTool(String),

    /// The requested code is not a well-formed tool code.
    #[error(transparent)]
    InvalidCode(#[from] SchemaError),

    /// An I/O error occurred while reading a catalog file.
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// The TOML content could not be deserialized into a catalog.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A tool that can be rented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Unique code identifying this tool.
    pub code: ToolCode,
    /// Kind of tool; fixes price and billing policy.
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    /// Manufacturer, free text.
    pub brand: String,
}

impl Tool {
    /// Create a tool.
    pub fn new(code: ToolCode, tool_type: ToolType, brand: impl Into<String>) -> Self {
        Self {
            code,
            tool_type,
            brand: brand.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "tool")]
    tools: Vec<Tool>,
}

/// The set of tools available for rental.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tools: BTreeMap<ToolCode, Tool>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The store's stock: a Stihl chainsaw, a Werner ladder, and DeWalt and
    /// Rigid jackhammers.
    pub fn standard() -> Self {
        const STOCK: [(&str, ToolType, &str); 4] = [
            ("CHNS", ToolType::Chainsaw, "Stihl"),
            ("LADW", ToolType::Ladder, "Werner"),
            ("JAKD", ToolType::Jackhammer, "DeWalt"),
            ("JAKR", ToolType::Jackhammer, "Rigid"),
        ];

        let tools = STOCK
            .into_iter()
            .filter_map(|(code, tool_type, brand)| {
                ToolCode::new(code)
                    .ok()
                    .map(|code| (code.clone(), Tool::new(code, tool_type, brand)))
            })
            .collect();

        Self { tools }
    }

    /// Parse a catalog from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed TOML (including invalid
    /// codes or unknown tool types), [`CatalogError::DuplicateCode`] if two
    /// entries share a code, and [`CatalogError::EmptyBrand`] for a blank
    /// brand.
    pub fn parse(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        let mut catalog = Self::new();
        for tool in file.tools {
            catalog.insert(tool)?;
        }
        Ok(catalog)
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, otherwise
    /// any error from [`Catalog::parse`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::parse(&content)?;
        info!(path = %path.display(), tools = catalog.len(), "loaded tool catalog");
        Ok(catalog)
    }

    /// Pick the catalog for this session.
    ///
    /// An explicit path wins. Otherwise `<home>/catalog.toml` is used when it
    /// exists, and the [standard](Catalog::standard) stock when it doesn't.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Catalog::load`] for the chosen file.
    pub fn resolve(explicit: Option<&Path>, home: Option<&Path>) -> Result<Self, CatalogError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if let Some(path) = home.map(paths::catalog_path).filter(|p| p.exists()) {
            return Self::load(&path);
        }
        debug!("using standard tool catalog");
        Ok(Self::standard())
    }

    /// Add a tool.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateCode`] if the code is taken and
    /// [`CatalogError::EmptyBrand`] if the brand is blank.
    pub fn insert(&mut self, tool: Tool) -> Result<(), CatalogError> {
        if tool.brand.trim().is_empty() {
            return Err(CatalogError::EmptyBrand(tool.code));
        }
        if self.tools.contains_key(&tool.code) {
            return Err(CatalogError::DuplicateCode(tool.code));
        }
        self.tools.insert(tool.code.clone(), tool);
        Ok(())
    }

    /// Look up a tool by its code.
    pub fn get(&self, code: &ToolCode) -> Option<&Tool> {
        self.tools.get(code)
    }

    /// Look up a tool by user-supplied code, in any case.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidCode`] if `code` is malformed and
    /// [`CatalogError::UnknownTool`] if no tool matches.
    pub fn find(&self, code: &str) -> Result<&Tool, CatalogError> {
        let code = ToolCode::new(code)?;
        self.get(&code)
            .ok_or_else(|| CatalogError::UnknownTool(code.to_string()))
    }

    /// Tools in code order.
    pub fn iter(&self) -> impl Iterator<Item = &Tool> {
        self.tools.values()
    }

    /// Number of tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the catalog has no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl FromStr for Catalog {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const EXAMPLE_CATALOG: &str = r#"
[[tool]]
code = "LADW"
type = "ladder"
brand = "Werner"

[[tool]]
code = "jakm"
type = "jackhammer"
brand = "Makita"
"#;

    #[test]
    fn test_standard_catalog() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 4);

        let jakr = catalog.find("JAKR").unwrap();
        assert_eq!(jakr.tool_type, ToolType::Jackhammer);
        assert_eq!(jakr.brand, "Rigid");

        let ladw = catalog.find("ladw").unwrap();
        assert_eq!(ladw.tool_type, ToolType::Ladder);
        assert_eq!(ladw.brand, "Werner");

        let codes: Vec<&str> = catalog.iter().map(|t| t.code.as_str()).collect();
        assert_eq!(codes, ["CHNS", "JAKD", "JAKR", "LADW"]);
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let mut catalog = Catalog::standard();
        let dup = Tool::new(ToolCode::new("chns").unwrap(), ToolType::Ladder, "Other");
        let err = catalog.insert(dup).unwrap_err();
        assert_eq!(err.to_string(), "Tool code `CHNS` is already in use.");
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_empty_brand_rejected() {
        let mut catalog = Catalog::new();
        let tool = Tool::new(ToolCode::new("X1").unwrap(), ToolType::Ladder, "  ");
        assert!(matches!(
            catalog.insert(tool),
            Err(CatalogError::EmptyBrand(_))
        ));
    }

    #[test]
    fn test_unknown_tool() {
        let catalog = Catalog::standard();
        assert!(matches!(
            catalog.find("DRIL"),
            Err(CatalogError::UnknownTool(code)) if code == "DRIL"
        ));
        assert!(matches!(
            catalog.find("no way"),
            Err(CatalogError::InvalidCode(_))
        ));
    }

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::parse(EXAMPLE_CATALOG).unwrap();
        assert_eq!(catalog.len(), 2);
        let jakm = catalog.find("JAKM").unwrap();
        assert_eq!(jakm.brand, "Makita");
        assert_eq!(jakm.tool_type, ToolType::Jackhammer);
    }

    #[test]
    fn test_parse_rejects_duplicates() {
        let doubled = format!("{EXAMPLE_CATALOG}\n[[tool]]\ncode = \"ladw\"\ntype = \"ladder\"\nbrand = \"Little Giant\"\n");
        assert!(matches!(
            Catalog::parse(&doubled),
            Err(CatalogError::DuplicateCode(_))
        ));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            Catalog::parse("this is not valid toml {{{"),
            Err(CatalogError::Parse(_))
        ));
        let bad_type = "[[tool]]\ncode = \"DRL1\"\ntype = \"drill\"\nbrand = \"Bosch\"\n";
        assert!(matches!(Catalog::parse(bad_type), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_parse_empty_file() {
        let catalog: Catalog = "".parse().unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_resolve_order() {
        let dir = tempdir().unwrap();
        let home = dir.path();

        // Nothing configured: standard stock
        let catalog = Catalog::resolve(None, Some(home)).unwrap();
        assert_eq!(catalog.len(), 4);
        let catalog = Catalog::resolve(None, None).unwrap();
        assert_eq!(catalog.len(), 4);

        // Home catalog present
        std::fs::write(paths::catalog_path(home), EXAMPLE_CATALOG).unwrap();
        let catalog = Catalog::resolve(None, Some(home)).unwrap();
        assert_eq!(catalog.len(), 2);

        // Explicit path beats home
        let explicit = home.join("other.toml");
        std::fs::write(&explicit, "[[tool]]\ncode = \"ONE\"\ntype = \"chainsaw\"\nbrand = \"Echo\"\n")
            .unwrap();
        let catalog = Catalog::resolve(Some(explicit.as_path()), Some(home)).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find("ONE").is_ok());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, EXAMPLE_CATALOG).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);

        let missing = Catalog::load(&dir.path().join("nope.toml"));
        let err = missing.unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
        // The io message is left to the error source
        assert_eq!(err.to_string(), "IO error");
        assert!(std::error::Error::source(&err).is_some());
    }
}
