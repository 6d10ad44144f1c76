//! A streaming JSON printer whose contexts enforce legal call sequences.
//!
//! Each open container is a context value: [`ArrayContext`] accepts scalars
//! and nested containers, [`ObjectContext`] only accepts keys, and the
//! [`ValueSlot`] returned by a key accepts exactly one value. A nested context
//! mutably borrows its parent, so the parent cannot be written to until the
//! child is closed, either explicitly or by going out of scope.
//!
//! ```
//! use cartograph_json::print_array;
//!
//! let mut out = Vec::new();
//! {
//!     let mut json = print_array(&mut out);
//!     json.number(5)
//!         .number(6)
//!         .begin_array()
//!         .number(7)
//!         .end_array()
//!         .number(8)
//!         .string("bingo!");
//! }
//! assert_eq!(String::from_utf8(out).unwrap(), r#"[5,6,[7],8,"bingo!"]"#);
//! ```
//!
//! Contents are buffered as a [`Value`] tree and serialized once, when the
//! outermost context closes. The same contexts can build a tree in memory
//! with [`build_array`] and [`build_object`].

mod context;
mod error;
mod sink;
mod value;


pub use context::{
    build_array, build_object, print_array, print_object, ArrayContext, ObjectContext, Parent,
    State, ValueSlot,
};
pub use error::PrintError;
pub use sink::{Stream, Tree};
pub use value::{write_json_string, Value};
