//! Static desktop catalog: icons, chrome links, copy, timings, and billing configuration.
//!
//! The catalog is authored in `catalog/desktop.toml`, validated by the build script, and embedded
//! as JSON. It is presentation data; the only parts the interaction engine reads are the
//! activatable targets, the timings, the billing rate, and the cheat sequence.

use platform_host::LinkTarget;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{ActivatableTarget, TargetId};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/desktop_catalog_generated.rs"));
}

pub use generated::DESKTOP_CATALOG_JSON;

pub const SUPPORTED_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog json is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unsupported catalog schema version {0}")]
    UnsupportedSchema(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopTimings {
    pub click_intent_ms: u32,
    pub tooltip_arm_ms: u32,
    pub tooltip_offset_x: i32,
    pub tooltip_offset_y: i32,
    pub billing_tick_ms: u32,
    pub billing_popup_ms: u32,
    pub icon_flash_ms: u32,
    pub cheat_phase_two_ms: u32,
    pub cheat_end_ms: u32,
    pub clock_refresh_ms: u32,
}

impl Default for DesktopTimings {
    fn default() -> Self {
        Self {
            click_intent_ms: 400,
            tooltip_arm_ms: 600,
            tooltip_offset_x: 12,
            tooltip_offset_y: 16,
            billing_tick_ms: 1000,
            billing_popup_ms: 4000,
            icon_flash_ms: 200,
            cheat_phase_two_ms: 1000,
            cheat_end_ms: 2500,
            clock_refresh_ms: 10_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingConfig {
    pub title: String,
    #[serde(default)]
    pub button_label: String,
    pub hourly_rate: u32,
    pub currency: String,
    pub idle_remark: String,
    pub running_remark: String,
    pub closing_remarks: Vec<String>,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            title: "Billed time".to_string(),
            button_label: String::new(),
            hourly_rate: 500,
            currency: "EUR".to_string(),
            idle_remark: String::new(),
            running_remark: String::new(),
            closing_remarks: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheatConfig {
    pub sequence: Vec<u32>,
}

impl Default for CheatConfig {
    fn default() -> Self {
        Self {
            sequence: vec![38, 38, 40, 40, 37, 39, 37, 39, 66, 65],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconBadge {
    Free,
    Pro,
}

impl IconBadge {
    pub fn label(self) -> &'static str {
        match self {
            Self::Free => "GRATUIT",
            Self::Pro => "PRO",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Free => "icon-badge badge-free",
            Self::Pro => "icon-badge badge-pro",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupLayout {
    #[default]
    Grid,
    Column,
    Row,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconEntry {
    pub id: String,
    pub glyph: String,
    pub label: String,
    #[serde(default)]
    pub badge: Option<IconBadge>,
    pub url: String,
    #[serde(default)]
    pub tip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconGroup {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub layout: GroupLayout,
    pub icons: Vec<IconEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssistantEntry {
    pub id: String,
    pub glyph: String,
    pub label: String,
    pub subtitle: String,
    pub url: String,
    #[serde(default)]
    pub tip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinkEntry {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub glyph: Option<String>,
    /// Draws a separator before this entry in menus.
    #[serde(default)]
    pub separated: bool,
    /// Renders with the signature style in the footer.
    #[serde(default)]
    pub signature: bool,
}

impl LinkEntry {
    /// Signature links open beside the embedding page; every other link replaces it.
    pub fn link_target(&self) -> LinkTarget {
        if self.signature {
            LinkTarget::NewContext
        } else {
            LinkTarget::TopLevel
        }
    }

    pub fn html_target(&self) -> &'static str {
        self.link_target().as_html_target()
    }
}

/// Copy and links of the signed-in/signed-out affordances.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionChrome {
    pub login_label: String,
    pub logout_label: String,
    #[serde(default)]
    pub account_links: Vec<LinkEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WelcomeCopy {
    pub window_title: String,
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub hint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopCatalog {
    pub schema_version: u32,
    pub title: String,
    pub brand: String,
    pub status_text: String,
    pub timings: DesktopTimings,
    pub billing: BillingConfig,
    pub cheat: CheatConfig,
    pub upgrade_link: LinkEntry,
    #[serde(default)]
    pub session: SessionChrome,
    pub welcome: WelcomeCopy,
    pub assistant: AssistantEntry,
    #[serde(default)]
    pub taskbar_links: Vec<LinkEntry>,
    #[serde(default)]
    pub start_menu: Vec<LinkEntry>,
    #[serde(default)]
    pub footer_links: Vec<LinkEntry>,
    #[serde(default)]
    pub groups: Vec<IconGroup>,
}

impl Default for DesktopCatalog {
    fn default() -> Self {
        Self {
            schema_version: SUPPORTED_SCHEMA_VERSION,
            title: String::new(),
            brand: String::new(),
            status_text: String::new(),
            timings: DesktopTimings::default(),
            billing: BillingConfig::default(),
            cheat: CheatConfig::default(),
            upgrade_link: LinkEntry::default(),
            session: SessionChrome::default(),
            welcome: WelcomeCopy::default(),
            assistant: AssistantEntry::default(),
            taskbar_links: Vec::new(),
            start_menu: Vec::new(),
            footer_links: Vec::new(),
            groups: Vec::new(),
        }
    }
}

impl DesktopCatalog {
    /// Parses the catalog embedded at build time.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the embedded JSON does not match the catalog schema.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(DESKTOP_CATALOG_JSON)
    }

    /// Parses a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] for malformed JSON or an unsupported schema version.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(raw)?;
        if catalog.schema_version != SUPPORTED_SCHEMA_VERSION {
            return Err(CatalogError::UnsupportedSchema(catalog.schema_version));
        }
        Ok(catalog)
    }

    /// Activatable targets registered with the shell: every desktop icon plus the assistant
    /// button when one is configured.
    pub fn activatable_targets(&self) -> Vec<ActivatableTarget> {
        let mut targets: Vec<ActivatableTarget> = self
            .groups
            .iter()
            .flat_map(|group| group.icons.iter())
            .map(|icon| ActivatableTarget {
                id: TargetId::new(icon.id.clone()),
                url: icon.url.clone(),
                selectable: true,
            })
            .collect();
        if !self.assistant.id.is_empty() {
            targets.push(ActivatableTarget {
                id: TargetId::new(self.assistant.id.clone()),
                url: self.assistant.url.clone(),
                selectable: false,
            });
        }
        targets
    }

    pub fn icon(&self, id: &str) -> Option<&IconEntry> {
        self.groups
            .iter()
            .flat_map(|group| group.icons.iter())
            .find(|icon| icon.id == id)
    }

    pub fn closing_remark(&self, index: usize) -> Option<&str> {
        self.billing.closing_remarks.get(index).map(String::as_str)
    }
}
