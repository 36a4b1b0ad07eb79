use std::collections::HashMap;

use serde_json::Value;

use crate::error::RenderError;
use crate::render::Fragment;

pub const MOUNT_MAIN: &str = "main";
pub const MOUNT_NAV_MENU: &str = "navMenu";
pub const MOUNT_NAME: &str = "name";
pub const MOUNT_TITLE: &str = "title";

/// Accumulates fragment HTML per mount point id.
pub struct MountSet {
    slots: HashMap<String, String>,
}

impl MountSet {
    pub fn new(ids: &[&str]) -> MountSet {
        MountSet {
            slots: ids.iter().map(|id| (id.to_string(), String::new())).collect(),
        }
    }

    /// The mounts of the standard page shell.
    pub fn standard() -> MountSet {
        Self::new(&[MOUNT_MAIN, MOUNT_NAV_MENU, MOUNT_NAME, MOUNT_TITLE])
    }

    /// Append HTML to a mount. Unknown ids are an error the caller is
    /// expected to log and move past.
    pub fn append(&mut self, id: &str, html: &str) -> Result<(), RenderError> {
        match self.slots.get_mut(id) {
            Some(slot) => {
                slot.push_str(html);
                Ok(())
            }
            None => Err(RenderError::MissingMount(id.to_string())),
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.slots.get(id).map(|s| s.as_str())
    }

    /// Drain a mount's accumulated HTML, leaving it empty.
    pub fn take(&mut self, id: &str) -> Option<String> {
        self.slots.get_mut(id).map(std::mem::take)
    }
}

/// Route fragments into their mounts: navigation into the menu, hero
/// and sections into main, and the personal name and title into the
/// header slots. A fragment aimed at a missing mount is skipped with
/// a warning.
pub fn assemble(mounts: &mut MountSet, fragments: &[Fragment], tree: &Value) {
    let personal = tree.get("personal").cloned().unwrap_or_default();
    let name = personal.get("name").and_then(|v| v.as_str()).unwrap_or("");
    let title = personal.get("title").and_then(|v| v.as_str()).unwrap_or("");

    let mut slot = |id: &str, html: &str| {
        if let Err(e) = mounts.append(id, html) {
            log::warn!("Skipping fragment: {}", e);
        }
    };

    slot(MOUNT_NAME, name);
    slot(MOUNT_TITLE, title);

    for fragment in fragments {
        match fragment {
            Fragment::Nav(html) => slot(MOUNT_NAV_MENU, html),
            Fragment::Hero(html) => slot(MOUNT_MAIN, html),
            Fragment::Section { html, .. } => slot(MOUNT_MAIN, html),
        }
    }
}

/// Drop section fragments whose grid ended up with no content.
/// Sections with zero items render an empty grid by default; hosts
/// that prefer to hide them entirely run this pass first.
pub fn prune_empty_sections(fragments: Vec<Fragment>) -> Vec<Fragment> {
    fragments
        .into_iter()
        .filter(|fragment| match fragment {
            Fragment::Section { key, html } => {
                let marker = format!(r#"id="{}-grid">"#, key);
                match html.find(&marker) {
                    Some(idx) => {
                        let rest = &html[idx + marker.len()..];
                        !rest.trim_start().starts_with("</div>")
                    }
                    None => true,
                }
            }
            _ => true,
        })
        .collect()
}

/// Error panel shown in place of the page body when data loading
/// fails.
pub fn error_panel(message: &str) -> String {
    format!(
        r#"<div class="alert alert-danger" style="margin: 50px auto; max-width: 600px; text-align: center;">
    <h3>Error Loading Portfolio</h3>
    <p>{}</p>
    <p style="font-size: 12px; color: #666;">
        Check your data source configuration and ensure the file exists.
    </p>
</div>"#,
        message
    )
}

/// Wrap the mounted content in the complete HTML document: head with
/// a dynamic title, header with name and navigation, main content,
/// and a footer with the current year.
pub fn build_document(mounts: &MountSet, theme_class: &str, text_size_class: &str) -> String {
    let name = mounts.get(MOUNT_NAME).unwrap_or("");
    let title = mounts.get(MOUNT_TITLE).unwrap_or("");
    let nav = mounts.get(MOUNT_NAV_MENU).unwrap_or("");
    let main = mounts.get(MOUNT_MAIN).unwrap_or("");

    let page_title = if name.is_empty() && title.is_empty() {
        "Portfolio".to_string()
    } else {
        format!("{} - {}", name, title)
    };

    let mut body_class = String::from(theme_class);
    if !text_size_class.is_empty() {
        if !body_class.is_empty() {
            body_class.push(' ');
        }
        body_class.push_str(text_size_class);
    }

    let year = chrono::Utc::now().format("%Y");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{page_title}</title>
</head>
<body class="{body_class}">
<header class="site-header">
    <div class="header-info">
        <span id="name">{name}</span>
        <span id="title">{title}</span>
    </div>
    <button id="navToggle" class="nav-toggle" aria-label="Menu"><span></span><span></span><span></span></button>
    <nav><ul id="navMenu" class="nav-menu">{nav}</ul></nav>
</header>
<main id="main">{main}</main>
<footer class="site-footer">
    <p>&copy; {year} {name}</p>
</footer>
</body>
</html>"#,
        page_title = page_title,
        body_class = body_class,
        name = name,
        title = title,
        nav = nav,
        main = main,
        year = year,
    )
}
