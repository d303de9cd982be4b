use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

pub const PAGES_DIR_NAME: &str = "pages";

pub const APP_DIR_NAME: &str = "app";

/// File name (without extension) that marks a route in the app router.
pub const APP_PAGE_NAME: &str = "page";

pub const PAGE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mdx"];

/// Immutable settings for one collection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Project root containing the routing directories.
    pub root: PathBuf,
    pub pages_dir: String,
    pub app_dir: String,
    pub app_page_name: String,
    /// Recognized source extensions, without the leading dot.
    pub page_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            pages_dir: PAGES_DIR_NAME.to_string(),
            app_dir: APP_DIR_NAME.to_string(),
            app_page_name: APP_PAGE_NAME.to_string(),
            page_extensions: PAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl Config {
    /// Default settings rooted at `root`.
    ///
    /// The root is canonicalized so that file paths in the output are always
    /// relative to a real directory.
    pub fn for_root(root: &Path) -> Result<Self> {
        let root = root
            .canonicalize()
            .with_context(|| format!("Project root not found: {}", root.display()))?;
        if !root.is_dir() {
            bail!("Project root is not a directory: {}", root.display());
        }

        let config = Self {
            root,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        for (label, name) in [
            ("pages directory", &self.pages_dir),
            ("app directory", &self.app_dir),
            ("app page name", &self.app_page_name),
        ] {
            if name.is_empty() || name.contains(['/', '\\']) {
                bail!("Invalid {}: \"{}\"", label, name);
            }
        }

        for ext in &self.page_extensions {
            if ext.is_empty() || ext.contains('.') {
                bail!("Invalid page extension: \"{}\"", ext);
            }
        }

        Ok(())
    }

    pub fn pages_path(&self) -> PathBuf {
        self.root.join(&self.pages_dir)
    }

    pub fn app_path(&self) -> PathBuf {
        self.root.join(&self.app_dir)
    }

    pub fn is_page_extension(&self, ext: &str) -> bool {
        self.page_extensions.iter().any(|e| e == ext)
    }

    /// True for `page.<ext>` with a recognized extension. Case-sensitive.
    pub fn is_app_page_file(&self, file_name: &str) -> bool {
        file_name
            .strip_prefix(self.app_page_name.as_str())
            .and_then(|rest| rest.strip_prefix('.'))
            .is_some_and(|ext| self.is_page_extension(ext))
    }
}
