//! # avproc-core
//!
//! Backend library for the avproc configuration console. Provides action
//! dispatch, configuration loading, and the SQLite version store —
//! independent of any UI framework.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use avproc_core::config::Config;
//! use avproc_core::dispatch::{config_payload, dispatch_action, load_payload};
//! use avproc_core::store;
//! use avproc_types::{Action, AppState};
//!
//! // 1. Seed state from the config file's defaults
//! let config = Config::load();
//! let mut state = AppState::new_with_defaults(&config.defaults());
//!
//! // 2. Open the version store
//! let conn = store::open_store(&config.store_path())?;
//!
//! // 3. Dispatch actions to mutate state
//! let result = dispatch_action(&Action::SelectLayout("5.1".into()), &mut state);
//!
//! // 4. React to the result flags:
//! //    result.curve_dirty  → recompute the PEQ curve (avproc-dsp)
//! //    result.config_dirty → offer "save"; store::save_config(&conn,
//! //                          &config_payload(&state)) persists a version
//! // 5. Loading a saved version: load_payload(&mut state,
//! //    &store::load_config(&conn, id)?)
//! ```
//!
//! ## Module Overview
//!
//! - [`dispatch`] — `dispatch_action()`, the single entry point for state
//!   mutation, plus the payload bridges between state and store
//! - [`config`] — TOML configuration loading (embedded defaults + user
//!   override)
//! - [`store`] — SQLite persistence of configuration versions

pub mod config;
pub mod dispatch;
pub mod store;

pub use config::Config;
pub use dispatch::{dispatch_action, DispatchResult};
