//! forge-client library
//!
//! Client side of the forge landing page: local identity capture and relay,
//! asset listing, and email signup. The `forge` binary drives the same
//! operations from the command line.

pub mod assets;
pub mod client;
pub mod identity;
pub mod page;
pub mod signup;
pub mod status_line;
pub mod storage;


pub use assets::{AssetLoader, RenderedAssets, render_asset_card, render_assets};
pub use client::{ClientError, ClientResult, resolve_url};
pub use identity::{BindOutcome, IDENTITY_STORAGE_KEY, IdentityForm, IdentityRelay, IdentityStore};
pub use page::ForgePage;
pub use signup::{SIGNUP_TAG, SignupOutcome, SignupRelay, UtmParams};
pub use status_line::StatusLine;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError, StorageResult};
