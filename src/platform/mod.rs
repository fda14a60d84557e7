//! Platform abstraction layer
//!
//! The raw input capture is an external collaborator. The arena only sees it
//! through `InputSource`; `InputState` is a ready-made implementation that
//! turns press/release events into held and pressed-this-frame queries.

pub mod input;

pub use input::{InputSource, InputState, Key, MouseButton};
