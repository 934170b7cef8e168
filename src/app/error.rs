//! Bootstrap errors.

use thiserror::Error;

use super::component::RenderError;
use crate::icon::IconError;

/// Error returned by application construction and bootstrap.
///
/// Everything here except the degraded-presentation path (which is only
/// logged, never returned) is fatal: the process has no usable application
/// instance and the configuration or host document must be fixed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootstrapError {
    /// No root component was supplied to the builder.
    #[error("application root definition is missing")]
    MissingRoot,
    /// The mount selector is not an id selector.
    #[error("unsupported mount selector \"{selector}\": expected an id selector like \"#app\"")]
    UnsupportedSelector { selector: String },
    /// The host document has no element with the configured id.
    #[error("mount target \"{selector}\" not found in host document")]
    MountTargetMissing { selector: String },
    /// Bootstrap was invoked on an application that is already mounted.
    #[error("application is already mounted")]
    AlreadyMounted,
    /// Populating the icon library or registering a component failed.
    #[error(transparent)]
    Component(#[from] IconError),
    /// The root component failed to render during mount.
    #[error("root component failed to render: {0}")]
    Render(#[from] RenderError),
}
