//! User interface rendering layer with component-based architecture.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Output buffer, highlighting, wrapping
//! - [`theme`]: Light and dark palettes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use theme::{Theme, ThemeSet};
pub use viewmodel::{
    Body, DetailsContent, DetailsScreen, DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo,
    SearchScreen, UIViewModel,
};
