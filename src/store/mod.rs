//! In-memory Resource Store.
//!
//! Layout:
//! - `table.rs`: one id-keyed map plus its id counter
//! - `memory.rs`: the owner object holding every table
//! - `envelope.rs`: kind-tagged create/patch/record envelopes sent to the actor
//! - `traits.rs`: typed views over the envelopes
//! - `actor.rs`: the actor serializing all access, and its cloneable handle
//! - `seed.rs`: demo data loaded at start

pub mod actor;
pub mod envelope;
pub mod memory;
pub mod seed;
pub mod table;
pub mod traits;

pub use actor::{StoreHandle, spawn};
pub use envelope::{Resource, ResourceCreate, ResourceKind, ResourcePatch};
pub use memory::MemoryStore;
pub use traits::{ChildCreate, RecordPatch, StoredRecord};
