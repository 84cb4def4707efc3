//! Object: a dynamic object with a per-instance method table and an owned
//! child table, both backed by [`StrMap`].

use crate::error::MapError;
use crate::str_map::StrMap;
use std::any::Any;

/// A method bound to an object: a plain function pointer taking the receiver
/// and optional arguments. Function pointers are `Copy` and have no lifetime,
/// so a bound method trivially outlives any object it is bound to.
pub type Method = fn(&mut Object, Option<&Object>) -> Option<Box<dyn Any>>;

/// Result of [`Object::call`]. Distinguishes "no method bound under that
/// name" from "the method ran and returned nothing".
pub enum CallOutcome {
    /// No method is bound under the requested name.
    NotFound,
    /// The method ran; its (possibly empty) return value.
    Returned(Option<Box<dyn Any>>),
}

impl CallOutcome {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CallOutcome::NotFound)
    }

    /// The method's return value, or `None` when no method was bound.
    /// `Some(None)` means the method ran and returned nothing.
    pub fn into_returned(self) -> Option<Option<Box<dyn Any>>> {
        match self {
            CallOutcome::NotFound => None,
            CallOutcome::Returned(v) => Some(v),
        }
    }
}

impl core::fmt::Debug for CallOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CallOutcome::NotFound => f.write_str("NotFound"),
            CallOutcome::Returned(Some(_)) => f.write_str("Returned(Some(_))"),
            CallOutcome::Returned(None) => f.write_str("Returned(None)"),
        }
    }
}

/// A dynamic object: a name-indexed table of callable methods, an owned table
/// of named children, and an optional payload.
///
/// The method table is allocated lazily on the first [`add_method`]; an
/// object that never gains a method carries none. Children are owned
/// (composition): dropping an object drops its children recursively. The
/// payload is an owned slot; [`take_payload`] is the release hook for callers
/// that need the value back before the object goes away.
///
/// [`add_method`]: Object::add_method
/// [`take_payload`]: Object::take_payload
pub struct Object {
    methods: Option<StrMap<Method>>,
    children: StrMap<Object>,
    type_identifier: &'static str,
    payload: Option<Box<dyn Any>>,
}

impl Object {
    /// A fresh object: no methods, no children, no payload.
    pub fn new() -> Self {
        Self {
            methods: None,
            children: StrMap::new(),
            type_identifier: "object",
            payload: None,
        }
    }

    pub fn type_identifier(&self) -> &str {
        self.type_identifier
    }

    pub fn set_type_identifier(&mut self, id: &'static str) {
        self.type_identifier = id;
    }

    /// Bind `method` under `name`, creating the method table on first use.
    /// Rebinding an existing name overwrites it; last writer wins.
    pub fn add_method(&mut self, name: &str, method: Method) -> Result<(), MapError> {
        self.methods
            .get_or_insert_with(StrMap::new)
            .set(name, method)
    }

    /// Whether a method is bound under `name`. Safe to ask before any method
    /// was ever added.
    pub fn has_method(&self, name: &str) -> bool {
        match &self.methods {
            Some(table) => table.contains_key(name),
            None => false,
        }
    }

    /// Look up and invoke the method bound under `name`.
    pub fn call(&mut self, name: &str, args: Option<&Object>) -> CallOutcome {
        // Copy the fn pointer out so the table borrow ends before dispatch.
        let method = match self.methods.as_ref().and_then(|t| t.get(name)) {
            Some(&m) => m,
            None => return CallOutcome::NotFound,
        };
        CallOutcome::Returned(method(self, args))
    }

    /// Attach `child` under `name`, taking ownership. An existing child under
    /// the same name is dropped.
    pub fn add_child(&mut self, name: &str, child: Object) -> Result<(), MapError> {
        self.children.set(name, child)
    }

    pub fn child(&self, name: &str) -> Option<&Object> {
        self.children.get(name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Object> {
        self.children.get_mut(name)
    }

    /// Detach and return the child under `name`, if any.
    pub fn remove_child(&mut self, name: &str) -> Option<Object> {
        self.children.remove(name)
    }

    pub fn set_payload(&mut self, payload: Box<dyn Any>) {
        self.payload = Some(payload);
    }

    pub fn payload(&self) -> Option<&dyn Any> {
        self.payload.as_deref()
    }

    pub fn payload_mut(&mut self) -> Option<&mut dyn Any> {
        self.payload.as_deref_mut()
    }

    /// Take the payload back out. After this the object carries none; a
    /// payload still present when the object drops is dropped with it.
    pub fn take_payload(&mut self) -> Option<Box<dyn Any>> {
        self.payload.take()
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::new()
    }
}
