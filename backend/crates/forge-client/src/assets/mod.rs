pub(crate) mod asset_loader;
pub(crate) mod renderer;

pub use asset_loader::AssetLoader;
pub use renderer::{
    EMPTY_PLACEHOLDER, ERROR_PLACEHOLDER, RenderedAssets, render_asset_card, render_assets,
};
