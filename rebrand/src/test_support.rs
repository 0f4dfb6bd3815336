//! Test-only helpers: scratch site trees and Aquay markup samples.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

pub const DARK_NAVBAR_LOGO: &str = r#"<a id="w-node-_5c6ae061-b7f3-3993-0d6f-68cf6ad547cd-6ad547c9" href="../index.html" aria-current="page" class="w-inline-block w--current"><img src="../images/Aquay-Small-Dark.svg" alt=""></a>"#;

pub const WHITE_NAVBAR_LOGO: &str = r#"<a id="w-node-_1fb68cae-1399-1683-4f37-a3e2705aa34a-705aa346" href="index.html" class="w-inline-block"><img src="images/Aquay-Small-White.svg" alt=""></a>"#;

pub const HERO_LOGO: &str = r#"<img src="images/Aquay-Large-White.svg" alt="" class="hero-logo">"#;

pub const PURCHASE_BUTTON_DARK: &str = "<a href=\"https://mmra.re/purchaseaquay\" target=\"_blank\" class=\"button w-inline-block\">\n  <div>purchase aquay</div><img src=\"images/icon-arrow-right.svg\" alt=\"\">\n</a>";

pub const PURCHASE_BUTTON_WHITE: &str = "<a href=\"https://mmra.re/purchaseaquay\" target=\"_blank\" class=\"button white w-inline-block\">\n  <div>purchase aquay</div><img src=\"../images/icon-arrow-right-white.svg\" alt=\"\">\n</a>";

pub const FOOTER_LOGO: &str = r##"<a id="w-node-c8fec492-371b-c61c-6997-591d9743fdd1-9743fdcd" href="#" class="w-inline-block"><img src="../images/Aquay-Footer-White.svg" alt=""></a>"##;

pub const FOOTER_COPYRIGHT: &str = r#"Copyright – A <a href="https://mediumrare.shop/?ref=aquay" target="_blank" class="text-white">Medium Rare</a> Template"#;

pub const LOADER: &str = r#"<div class="loading-container"><img src="../images/loader.svg" loading="eager" alt="" class="loader"><img src="../images/Aquay-Small-Dark.svg" loading="eager" alt=""></div>"#;

/// A page carrying every piece of Aquay branding the built-in rules target.
pub fn aquay_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>Aquay - Webflow HTML Website Template</title>
  <meta content="Aquay is an elegant showcase for high-end property developments and real estate businesses including everything required to launch a tasteful web presence." name="description">
  <meta content="Aquay - Webflow HTML Website Template" property="og:title">
  <meta content="Aquay - Webflow HTML Website Template" property="twitter:title">
</head>
<body>
  {LOADER}
  <nav>
    {DARK_NAVBAR_LOGO}
    {WHITE_NAVBAR_LOGO}
    {PURCHASE_BUTTON_DARK}
    {PURCHASE_BUTTON_WHITE}
  </nav>
  <header>{HERO_LOGO}</header>
  <p>Nestled in the iconic heart of Greenwich, Aquay is an immersive sanctuary.</p>
  <footer>
    {FOOTER_LOGO}
    <div>{FOOTER_COPYRIGHT}</div>
  </footer>
</body>
</html>
"#
    )
}

/// A temporary site root that is removed on drop.
pub struct SiteFixture {
    dir: TempDir,
}

impl SiteFixture {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp site")?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `contents` at `rel`, creating parent directories.
    pub fn write(&self, rel: &str, contents: &str) -> Result<PathBuf> {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    pub fn read(&self, rel: &str) -> Result<String> {
        let path = self.path(rel);
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
    }
}
