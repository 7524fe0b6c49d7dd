//! Material 3 UI Library
//!
//! This crate provides a Material Design 3 component library built on GPUI,
//! together with the interactive gallery application that documents it.

pub mod app;
pub mod assets;
pub mod components;
pub mod error;
pub mod eventing;
pub mod floating;
pub mod gallery;
pub mod helpers;
pub mod i18n;
pub mod overlay;
pub mod registry;
pub mod state;
pub mod theme;
pub mod utils;
