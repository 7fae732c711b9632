//! Loading catalogs from TOML.

use std::{fs, path::Path};

use thiserror::Error;

use crate::Catalog;

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file could not be read.
    #[error("failed to read message catalog: {0}")]
    Io(#[from] std::io::Error),
    /// The document is not valid TOML or has values of the wrong type.
    #[error("invalid message catalog: {0}")]
    Parse(#[from] toml::de::Error),
    /// The requested locale has no table in the document.
    #[error("locale `{0}` not found in message catalog")]
    MissingLocale(String),
}

impl Catalog {
    /// Parses a `[ajaxful_rating.helper]` document.
    ///
    /// A document without that table yields the English defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed documents.
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let table: toml::Table = source.parse()?;
        helper_table(&table)
    }

    /// Parses a `[<locale>.ajaxful_rating.helper]` document, the layout of
    /// application-wide locale files.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingLocale`] if `locale` has no table and
    /// [`CatalogError::Parse`] for malformed documents.
    pub fn from_locale_toml_str(source: &str, locale: &str) -> Result<Self, CatalogError> {
        let table: toml::Table = source.parse()?;
        let scoped = table
            .get(locale)
            .and_then(toml::Value::as_table)
            .ok_or_else(|| CatalogError::MissingLocale(locale.to_owned()))?;
        helper_table(scoped)
    }

    /// Reads and parses a catalog file. See [`Catalog::from_toml_str`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Catalog::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

fn helper_table(table: &toml::Table) -> Result<Catalog, CatalogError> {
    let Some(helper) = table
        .get("ajaxful_rating")
        .and_then(|scope| scope.get("helper"))
    else {
        return Ok(Catalog::default());
    };
    Ok(helper.clone().try_into::<Catalog>()?)
}
