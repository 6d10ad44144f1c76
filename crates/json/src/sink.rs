use crate::context::Parent;
use crate::value::Value;
use std::io;

/// Root of a printer bound to a byte stream.
///
/// The finished top-level value is written in one pass when the outermost
/// context closes. A write failure during an implicit close cannot be
/// returned, so it is logged and kept until [`Stream::take_error`] or the
/// context's `finish` collects it.
pub struct Stream<'w, W: io::Write + ?Sized> {
    out: &'w mut W,
    error: Option<io::Error>,
}

impl<'w, W: io::Write + ?Sized> Stream<'w, W> {
    pub(crate) fn new(out: &'w mut W) -> Self {
        Self { out, error: None }
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

impl<W: io::Write + ?Sized> Parent for Stream<'_, W> {
    type Context = Self;

    fn accept(&mut self, value: Value) {
        if let Err(e) = write!(self.out, "{value}") {
            log::warn!("Failed to write JSON output: {e}");
            self.error = Some(e);
        }
    }

    fn context(&mut self) -> &mut Self {
        self
    }
}

/// Root of a printer that keeps the finished value in memory.
#[derive(Debug, Default)]
pub struct Tree {
    value: Option<Value>,
}

impl Tree {
    pub(crate) fn take_value(&mut self) -> Value {
        self.value.take().unwrap_or_default()
    }
}

impl Parent for Tree {
    type Context = Self;

    fn accept(&mut self, value: Value) {
        self.value = Some(value);
    }

    fn context(&mut self) -> &mut Self {
        self
    }
}
