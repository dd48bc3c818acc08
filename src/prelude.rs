pub use crate::base::{
    config::Config,
    types::{Err, Intent, RemoteCallFailed, Res, Void},
};
pub use anyhow::anyhow;
pub use tracing::{debug, error, info, instrument, warn};
