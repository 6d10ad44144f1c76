use crate::error::PrintError;
use crate::sink::{Stream, Tree};
use crate::value::Value;
use std::io;
use std::mem;

/// Where a context is in its lifetime.
///
/// A context starts `Initial`, becomes `Intermediate` once anything has been
/// written into it and ends `Terminal` when it is closed. A terminal context
/// never reopens: further writes and closes are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Initial,
    Intermediate,
    Terminal,
}

/// Receives the value of a child context when the child closes.
pub trait Parent {
    /// What `end_array`/`end_object` hands back to continue the chain.
    type Context: ?Sized;

    fn accept(&mut self, value: Value);

    fn context(&mut self) -> &mut Self::Context;
}

/// An open JSON array.
///
/// Closing happens through [`ArrayContext::end_array`] or when the context is
/// dropped, whichever comes first.
pub struct ArrayContext<P: Parent> {
    parent: P,
    items: Vec<Value>,
    state: State,
}

impl<P: Parent> ArrayContext<P> {
    pub(crate) fn new(parent: P) -> Self {
        Self {
            parent,
            items: Vec::new(),
            state: State::Initial,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn number(&mut self, value: i64) -> &mut Self {
        self.push(Value::Number(value));
        self
    }

    pub fn string(&mut self, value: &str) -> &mut Self {
        self.push(Value::String(value.to_string()));
        self
    }

    pub fn boolean(&mut self, value: bool) -> &mut Self {
        self.push(Value::Bool(value));
        self
    }

    pub fn null(&mut self) -> &mut Self {
        self.push(Value::Null);
        self
    }

    /// Opens a nested array. It lands in this array when it closes.
    pub fn begin_array(&mut self) -> ArrayContext<&mut Self> {
        self.mark_written();
        ArrayContext::new(self)
    }

    /// Opens a nested object. It lands in this array when it closes.
    pub fn begin_object(&mut self) -> ObjectContext<&mut Self> {
        self.mark_written();
        ObjectContext::new(self)
    }

    /// Closes the array and returns the enclosing context.
    pub fn end_array(&mut self) -> &mut P::Context {
        self.close();
        self.parent.context()
    }

    fn mark_written(&mut self) {
        if self.state == State::Initial {
            self.state = State::Intermediate;
        }
    }

    fn push(&mut self, value: Value) {
        if self.state == State::Terminal {
            log::trace!("Ignoring a write into a closed array.");
            return;
        }
        self.mark_written();
        self.items.push(value);
    }

    fn close(&mut self) {
        if self.state == State::Terminal {
            return;
        }
        self.state = State::Terminal;
        let items = mem::take(&mut self.items);
        log::trace!("Closing array with {} items.", items.len());
        self.parent.accept(Value::Array(items));
    }
}

impl<P: Parent> Drop for ArrayContext<P> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<P: Parent> Parent for &mut ArrayContext<P> {
    type Context = ArrayContext<P>;

    fn accept(&mut self, value: Value) {
        self.push(value);
    }

    fn context(&mut self) -> &mut ArrayContext<P> {
        &mut **self
    }
}

/// An open JSON object. Values are written through the slot returned by
/// [`ObjectContext::key`].
pub struct ObjectContext<P: Parent> {
    parent: P,
    entries: Vec<(String, Value)>,
    state: State,
}

impl<P: Parent> ObjectContext<P> {
    pub(crate) fn new(parent: P) -> Self {
        Self {
            parent,
            entries: Vec::new(),
            state: State::Initial,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Starts a `"key":value` pair. The key is bound to `null` until the
    /// returned slot receives a value. Repeated keys are kept as written.
    pub fn key(&mut self, key: &str) -> ValueSlot<'_, P> {
        let index = if self.state == State::Terminal {
            log::trace!("Ignoring key {key:?} on a closed object.");
            None
        } else {
            self.state = State::Intermediate;
            self.entries.push((key.to_string(), Value::Null));
            Some(self.entries.len() - 1)
        };
        ValueSlot {
            object: self,
            index,
        }
    }

    /// Closes the object and returns the enclosing context.
    pub fn end_object(&mut self) -> &mut P::Context {
        self.close();
        self.parent.context()
    }

    fn set(&mut self, index: Option<usize>, value: Value) {
        if self.state == State::Terminal {
            return;
        }
        if let Some((_, slot)) = index.and_then(|i| self.entries.get_mut(i)) {
            *slot = value;
        }
    }

    fn close(&mut self) {
        if self.state == State::Terminal {
            return;
        }
        self.state = State::Terminal;
        let entries = mem::take(&mut self.entries);
        log::trace!("Closing object with {} entries.", entries.len());
        self.parent.accept(Value::Object(entries));
    }
}

impl<P: Parent> Drop for ObjectContext<P> {
    fn drop(&mut self) {
        self.close();
    }
}

/// The value position after a key. It accepts exactly one value; dropping it
/// unused leaves the key mapped to `null`.
pub struct ValueSlot<'a, P: Parent> {
    object: &'a mut ObjectContext<P>,
    index: Option<usize>,
}

impl<'a, P: Parent> ValueSlot<'a, P> {
    pub fn number(self, value: i64) -> &'a mut ObjectContext<P> {
        self.write(Value::Number(value))
    }

    pub fn string(self, value: &str) -> &'a mut ObjectContext<P> {
        self.write(Value::String(value.to_string()))
    }

    pub fn boolean(self, value: bool) -> &'a mut ObjectContext<P> {
        self.write(Value::Bool(value))
    }

    pub fn null(self) -> &'a mut ObjectContext<P> {
        self.write(Value::Null)
    }

    pub fn begin_array(self) -> ArrayContext<Self> {
        ArrayContext::new(self)
    }

    pub fn begin_object(self) -> ObjectContext<Self> {
        ObjectContext::new(self)
    }

    fn write(self, value: Value) -> &'a mut ObjectContext<P> {
        self.object.set(self.index, value);
        self.object
    }
}

impl<P: Parent> Parent for ValueSlot<'_, P> {
    type Context = ObjectContext<P>;

    fn accept(&mut self, value: Value) {
        self.object.set(self.index, value);
    }

    fn context(&mut self) -> &mut ObjectContext<P> {
        &mut *self.object
    }
}

/// Starts a top-level array written to `out` once it closes.
pub fn print_array<W: io::Write + ?Sized>(out: &mut W) -> ArrayContext<Stream<'_, W>> {
    ArrayContext::new(Stream::new(out))
}

/// Starts a top-level object written to `out` once it closes.
pub fn print_object<W: io::Write + ?Sized>(out: &mut W) -> ObjectContext<Stream<'_, W>> {
    ObjectContext::new(Stream::new(out))
}

/// Starts a top-level array kept in memory; read it back with
/// [`ArrayContext::into_value`].
pub fn build_array() -> ArrayContext<Tree> {
    ArrayContext::new(Tree::default())
}

/// Starts a top-level object kept in memory; read it back with
/// [`ObjectContext::into_value`].
pub fn build_object() -> ObjectContext<Tree> {
    ObjectContext::new(Tree::default())
}

impl<W: io::Write + ?Sized> ArrayContext<Stream<'_, W>> {
    /// Closes the array and reports whether it reached the stream.
    pub fn finish(mut self) -> Result<(), PrintError> {
        self.close();
        self.parent.take_error().map_or(Ok(()), |e| Err(e.into()))
    }
}

impl<W: io::Write + ?Sized> ObjectContext<Stream<'_, W>> {
    /// Closes the object and reports whether it reached the stream.
    pub fn finish(mut self) -> Result<(), PrintError> {
        self.close();
        self.parent.take_error().map_or(Ok(()), |e| Err(e.into()))
    }
}

impl ArrayContext<Tree> {
    pub fn into_value(mut self) -> Value {
        self.close();
        self.parent.take_value()
    }
}

impl ObjectContext<Tree> {
    pub fn into_value(mut self) -> Value {
        self.close();
        self.parent.take_value()
    }
}
