//! Strata Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Strata, a
//! workflow wrapper that arranges terraform modules and helmfile charts into
//! a matrix of **components x stacks**.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           strata-cli (CLI)              │
//! │  (resolves config + stack/component)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (HousekeepingService, CleanService)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Driven: Filesystem, Diagnostics)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    strata-adapters (Infrastructure)     │
//! │ (LocalFilesystem, TracingDiagnostics)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (naming rules, working-dir layout)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use strata_core::domain::{layout, CliConfiguration, ConfigAndStacksInfo};
//!
//! let config = CliConfiguration::new("/repo", "components/terraform", "components/helmfile");
//! let info = ConfigAndStacksInfo {
//!     component: "vpc".into(),
//!     final_component: "vpc".into(),
//!     context_prefix: "tenant1-ue1-prod".into(),
//!     ..Default::default()
//! };
//!
//! let planfile = layout::terraform_planfile_path(&config, &info);
//! assert!(planfile.ends_with("vpc/tenant1-ue1-prod-vpc.planfile"));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CleanOptions, CleanReport, CleanService, HousekeepingService,
        ports::{Diagnostics, DirEntry, Filesystem},
    };
    pub use crate::domain::{
        CliConfiguration, ComponentKind, ComponentLayout, ConfigAndStacksInfo, layout, naming,
    };
    pub use crate::error::{StrataError, StrataResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
