use crate::ClientResult;

use forge_core::{AssetDescriptor, AssetRegistry, LifecycleStatus, escape_html};
use serde::Serialize;

pub const EMPTY_PLACEHOLDER: &str = r#"<p class="muted">No active outputs published yet.</p>"#;
pub const ERROR_PLACEHOLDER: &str = r#"<p class="muted">Failed to load assets. Check config.</p>"#;

const WEEKLY_BRIEF_ASSET_ID: &str = "NNASSET-0001-weekly-signal-brief";
const WEEKLY_BRIEF_HREF: &str = "../products/weekly_signal_brief/README.md";
const REGISTRY_HREF: &str = "../monetization/assets/registry.md";

/// Markup for the asset list plus the counter shown beside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedAssets {
    pub status: String,
    pub html: String,
    pub count: usize,
}

/// Render a fetch result. Errors render the error placeholder; an empty
/// filtered list renders the empty placeholder.
pub fn render_assets(result: &ClientResult<AssetRegistry>, show_drafts: bool) -> RenderedAssets {
    let registry = match result {
        Ok(registry) => registry,
        Err(_) => {
            return RenderedAssets {
                status: String::from("error"),
                html: String::from(ERROR_PLACEHOLDER),
                count: 0,
            };
        }
    };

    let visible = registry.visible(show_drafts);
    let status = format!("{} active", visible.len());

    if visible.is_empty() {
        return RenderedAssets {
            status,
            html: String::from(EMPTY_PLACEHOLDER),
            count: 0,
        };
    }

    RenderedAssets {
        status,
        html: visible.iter().copied().map(render_asset_card).collect(),
        count: visible.len(),
    }
}

/// One asset card. Every interpolated field is HTML-escaped.
pub fn render_asset_card(asset: &AssetDescriptor) -> String {
    let tag_class = if asset.lifecycle_status == LifecycleStatus::Active {
        "asset__tag asset__tag--active"
    } else {
        "asset__tag asset__tag--draft"
    };

    let field = |value: &Option<String>| escape_html(value.as_deref().unwrap_or(""));

    let name = escape_html(asset.display_name());
    let id = field(&asset.asset_id);
    let version = field(&asset.asset_version);
    let surface = field(&asset.surface_type);
    let value = field(&asset.value_type);
    let status = escape_html(asset.lifecycle_status.as_str());

    let primary_link = if asset.asset_id.as_deref() == Some(WEEKLY_BRIEF_ASSET_ID) {
        format!(r#"<a class="btn btn--primary" href="{WEEKLY_BRIEF_HREF}">Weekly Signal Brief</a>"#)
    } else {
        String::new()
    };

    format!(
        r#"
    <article class="asset">
      <div class="asset__top">
        <div>
          <h3 class="asset__name">{name}</h3>
          <div class="asset__meta">{id} • {version} • {surface}/{value}</div>
        </div>
        <span class="{tag_class}">{status}</span>
      </div>
      <div class="actions" style="margin-top:10px">
        {primary_link}
        <a class="btn btn--ghost" href="{REGISTRY_HREF}">Registry</a>
      </div>
    </article>
  "#
    )
}
