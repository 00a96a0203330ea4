mod asset_registry;
mod identity_event;
mod identity_record;
mod lifecycle_status;
