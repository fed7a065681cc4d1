//! Order workflows
//!
//! # Create Flow
//!
//! ```text
//! create(input)
//!     ├─ 1. Validate productId / quantity      (fail → 400)
//!     ├─ 2. Confirm user via user service      (fail → 400)
//!     ├─ 3. Resolve product via product service (fail → 500)
//!     ├─ 4. total = price * quantity
//!     ├─ 5. Persist (single commit point)      (fail → 500)
//!     └─ 6. Return stored order
//! ```
//!
//! Update runs steps 1 and 3–6 against an existing id; the user is not
//! re-confirmed. Delete goes straight to the store.

pub mod money;
pub mod orchestrator;
pub mod validator;

pub use money::compute_total;
pub use orchestrator::{OrderOrchestrator, Stage};
pub use validator::{validate_create, validate_update};
