//! Primitive Components
//!
//! Basic building blocks like buttons, inputs, etc.

pub mod button;
pub mod checkbox;
pub mod select;
pub mod text_input;
