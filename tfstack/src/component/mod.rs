//! Per-component provider and backend resolution.
//!
//! A config directory holds one manifest and one file per account:
//!
//! ```text
//! config/
//! ├── provider_backend.yaml   # defaults + modules
//! └── accounts/
//!     ├── prod.yaml           # region + backend
//!     └── staging.yaml
//! ```
//!
//! [`ComponentResolver`] turns a component id into [`ResolvedVariables`]
//! ready to hand to the renderer.

pub mod resolver;
pub mod schema;
pub mod variables;

pub use resolver::{
    detect_component, detect_current_component, resolve_component, ComponentResolver,
    ACCOUNTS_DIR, MANIFEST_FILE,
};
pub use schema::{AccountConfig, Defaults, Manifest, ModuleConfig};
pub use variables::{BackendVars, ProviderVars, ResolvedVariables};
