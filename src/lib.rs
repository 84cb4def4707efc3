//! strmap: a single-threaded, string-keyed chained hash map with a typed
//! facade, plus the small companions built on top of it: a dynamic array and
//! a dynamic object with per-instance method tables.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the only non-trivial engineering (bucket arrays, chains,
//!   rehashing) in one layer that can be reasoned about independently.
//! - Layers:
//!   - ChainMap<V, S>: structural map that owns its bucket array and entry
//!     storage; separate chaining, power-of-two sizing, load-factor doubling,
//!     rehash by stored per-entry hash.
//!   - StrMap<T, S>: public facade giving the get/set/remove vocabulary with
//!     overwrite semantics over ChainMap.
//!   - Object: name-indexed method dispatch and owned child objects, both
//!     held in StrMap instances.
//!   - Array<T>: growable buffer with splicing; not hash-related, included
//!     as the lower-layer companion utility.
//!
//! Constraints
//! - Single-threaded, synchronous: no operation suspends, retries, or
//!   yields; no atomics, no locks, no reference counting.
//! - Strict single ownership: a map owns its entries and bucket array, an
//!   object owns its method table and children.
//! - Keys are strings; each entry owns a copy of its key, made once and
//!   never recopied on overwrite.
//! - Allocation failure is a failure return (`MapError::Alloc`) and leaves
//!   the container in its previous state; key-not-found is `None`, never an
//!   error.
//!
//! Hasher and rehashing invariants
//! - Each entry stores its full 64-bit hash and relinking during growth uses
//!   the stored hash; keys are never hashed twice while an entry is live.
//! - The hash builder is pluggable (`S: BuildHasher`, default RandomState);
//!   exact hash bit-patterns are not a contract.
//!
//! Notes and non-goals
//! - No persistence, no thread-safety, no ordered iteration, no multi-value
//!   buckets. The bucket array never shrinks on remove.
//! - `Object::call` returns a discriminated `CallOutcome` so "no such
//!   method" is never conflated with "the method returned nothing".
//! - Child objects are owned (composition); dropping an object drops its
//!   children recursively. Non-owning association would need shared
//!   ownership, which this crate excludes.
//! - The payload slot on `Object` is owned; `take_payload` is the release
//!   hook for callers that want the value back.

mod array;
mod chain_map;
mod error;
mod object;
mod str_map;

// Public surface
pub use array::Array;
pub use chain_map::{ChainMap, Iter};
pub use error::MapError;
pub use object::{CallOutcome, Method, Object};
pub use str_map::StrMap;
