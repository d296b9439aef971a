// ============================================================================
// Opt — typed option builder
// ============================================================================

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::coerce::coerce;
use crate::error::Result;
use crate::value::{Kind, OptValue, Value};

/// Called with the freshly stored value after each successful coercion.
pub type Handler<T> = Arc<dyn Fn(&T) -> Result<()> + Send + Sync + 'static>;

type SlotHandler = Arc<dyn Fn(&Value) -> Result<()> + Send + Sync + 'static>;

pub struct Opt<T: OptValue> {
    long_name: String,
    short_name: Option<char>,
    description: String,
    default_value: T,
    handler: Option<Handler<T>>,
}

impl<T: OptValue> Opt<T> {
    pub fn new(name: &str, default_value: T) -> Self {
        Opt {
            long_name: name.to_string(),
            short_name: None,
            description: String::new(),
            default_value,
            handler: None,
        }
    }

    pub fn short(mut self, c: char) -> Self {
        self.short_name = Some(c);
        self
    }

    pub fn description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    pub fn default_value(mut self, v: T) -> Self {
        self.default_value = v;
        self
    }

    /// Attach a handler. Returning an error from it fails the parse; the
    /// value it was given has already been stored.
    pub fn handler<F>(mut self, func: F) -> Self
    where
        F: Fn(&T) -> Result<()> + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(func));
        self
    }

    pub(crate) fn long_name(&self) -> &str {
        &self.long_name
    }

    pub(crate) fn short_name(&self) -> Option<char> {
        self.short_name
    }

    pub(crate) fn into_descriptor(self) -> Descriptor {
        let handler = self.handler.map(|typed| {
            let erased: SlotHandler = Arc::new(move |v: &Value| match T::from_value(v) {
                Some(t) => typed(t),
                None => Ok(()),
            });
            erased
        });
        Descriptor {
            long_name: self.long_name,
            short_name: self.short_name,
            description: self.description,
            present: false,
            value: self.default_value.into_value(),
            handler,
        }
    }
}

impl Opt<bool> {
    /// Value-less flag, `false` until seen.
    pub fn flag(name: &str) -> Self {
        Opt::new(name, false)
    }
}

impl Opt<i64> {
    pub fn int(name: &str, default_value: i64) -> Self {
        Opt::new(name, default_value)
    }
}

impl Opt<u64> {
    pub fn uint(name: &str, default_value: u64) -> Self {
        Opt::new(name, default_value)
    }
}

impl Opt<String> {
    pub fn string(name: &str, default_value: &str) -> Self {
        Opt::new(name, default_value.to_string())
    }
}

// ============================================================================
// OptId — stable handle to a registered option
// ============================================================================

/// Returned by [`OptParser::add`](crate::OptParser::add); reads the option
/// back from the parser that issued it.
pub struct OptId<T> {
    index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> OptId<T> {
    pub(crate) fn new(index: usize) -> Self {
        OptId {
            index,
            _marker: PhantomData,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T> Clone for OptId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for OptId<T> {}

impl<T> PartialEq for OptId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for OptId<T> {}

impl<T> fmt::Debug for OptId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptId({})", self.index)
    }
}

// ============================================================================
// Descriptor — type-erased option slot owned by the registry
// ============================================================================

pub struct Descriptor {
    long_name: String,
    short_name: Option<char>,
    description: String,
    present: bool,
    value: Value,
    handler: Option<SlotHandler>,
}

impl Descriptor {
    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    pub fn short_name(&self) -> Option<char> {
        self.short_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    pub fn kind(&self) -> Kind {
        self.value.kind()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub(crate) fn mark_present(&mut self) {
        self.present = true;
    }

    /// Coerce `raw` into this slot's kind, store it, then run the handler.
    /// On a coercion failure the stored value is left untouched.
    pub(crate) fn apply(&mut self, raw: Option<&str>) -> Result<()> {
        self.value = coerce(self.kind(), raw)?;
        match &self.handler {
            Some(handler) => handler(&self.value),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("long_name", &self.long_name)
            .field("short_name", &self.short_name)
            .field("present", &self.present)
            .field("value", &self.value)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}
