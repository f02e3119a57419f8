//! Credential list view-model with password strength classification
//!
//! This library holds the logic behind a password-manager list: a single
//! strength rule used both for the stored `strength` field and the live
//! meter, and a pure projection of a record snapshot into a searchable,
//! paginated page with per-tier counts. Persistence and authentication
//! live elsewhere; this crate only reads the snapshots they deliver.
//!
//! # Features
//!
//! - `async` (default): Enables the debounced meter and the snapshot feed
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_VAULT_PAGE_SIZE`: Initial page size, one of 5, 10, 20, 50 (default: 5)
//! - `PWD_VAULT_METER_DEBOUNCE_MS`: Strength meter debounce (default: 300)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_vault::{CredentialList, ViewConfig, classify, decode_snapshot};
//! use secrecy::SecretString;
//!
//! let config = ViewConfig::load().expect("Invalid configuration");
//! let mut list = CredentialList::new(config.default_page_size);
//!
//! let json = std::fs::read_to_string("snapshot.json").expect("Missing snapshot");
//! list.replace_snapshot(decode_snapshot(&json).expect("Invalid snapshot"));
//! list.set_search("mail");
//!
//! let view = list.view();
//! println!("{} of {} pages", view.pagination.current_page, view.pagination.page_count());
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! println!("Strength: {}", classify(&password));
//! ```

// Internal modules
mod config;
mod draft;
mod evaluator;
mod generator;
mod record;
mod sections;
mod session;
mod snapshot;
mod strength;
mod view;

#[cfg(feature = "async")]
mod feed;

// Public API
pub use config::{ConfigError, METER_DEBOUNCE_VAR, PAGE_SIZE_VAR, ViewConfig};
pub use draft::{CredentialDraft, CredentialUpdate, DraftError};
pub use evaluator::{classify, evaluate_password_strength, feedback};
pub use generator::{GeneratorError, GeneratorOptions, generate_password};
pub use record::{CredentialRecord, sort_newest_first};
pub use session::{CredentialList, ListError};
pub use snapshot::{SnapshotError, decode_snapshot, encode_snapshot, load_snapshot_from_path};
pub use strength::{MIN_LENGTH, PasswordEvaluation, PasswordStrength, Requirement, UnknownStrength};
pub use view::{
    ListView, PageItem, PageSize, PageSizeError, PageState, Pagination, StrengthCounts, derive,
    filter_records, page_numbers, paginate,
};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;

#[cfg(feature = "async")]
pub use feed::{FeedExit, run_snapshot_feed};
