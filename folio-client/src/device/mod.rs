//! Device identity: the stable per-installation identifier and its
//! durable storage.

mod identity;
mod store;

pub use identity::{DeviceIdentityStore, MIN_DEVICE_ID_LEN};
pub use store::{DEVICE_ID_KEY, DeviceStore, FileDeviceStore};
