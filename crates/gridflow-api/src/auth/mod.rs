// Authentication: credential persistence, device-flow login, and the
// per-request bearer authenticator with single-shot refresh.

pub mod bearer;
pub mod config;
pub mod device;
pub mod token;

pub use bearer::BearerAuth;
pub use config::AuthConfig;
pub use device::{DeviceCodeGrant, DeviceFlow};
pub use token::{AuthToken, TokenStore};
