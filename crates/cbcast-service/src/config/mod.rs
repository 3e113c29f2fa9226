//! Device profile loader (strict parsing).

pub mod schema;

use std::fs;

use cbcast_core::error::{CbError, Result};

pub use schema::{DeviceProfile, DeviceSection, RadioSection, SubscriptionSection};

pub fn load_from_file(path: &str) -> Result<DeviceProfile> {
    let s = fs::read_to_string(path)
        .map_err(|e| CbError::Io(format!("read profile failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<DeviceProfile> {
    let cfg: DeviceProfile = serde_yaml::from_str(s)
        .map_err(|e| CbError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
