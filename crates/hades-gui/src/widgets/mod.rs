//! Widget handlers.
//!
//! Each widget is a method on [`Gui`](crate::Gui) declared inside a window scope.
//! A handler allocates its id, asks the window's layout cursor for a rect, skips
//! hit-testing and drawing when the rect is outside the visible clip, and draws
//! inside a clip scope of its own.

mod button;
mod edit_field;
mod image;
mod list_box;
mod radio;
mod tab;
mod text;
