//! Runtime resolution of OpenGL and OpenGL ES entry points.
//!
//! Platform loaders (EGL, GLX, WGL, CGL, a libretro `get_proc_address` callback)
//! hand out GL functions by name. This crate walks a static map of every entry
//! point it knows, asks the loader for each one and stores the answer in a typed
//! slot. Missing symbols stay null: an extension the driver lacks is not an
//! error, a symbol the context's version guarantees is.
//!
//! ```no_run
//! # use std::ffi::c_void;
//! # fn get_proc_address(_: &str) -> *const c_void { std::ptr::null() }
//! use gl_dispatch::{GlSymbols, GlVersion, LoadOptions, Symbol, VersionType};
//!
//! let version = GlVersion::from_version(VersionType::ES, 3, 0);
//! let symbols = GlSymbols::load(&version, LoadOptions::default(), get_proc_address)?;
//!
//! unsafe {
//! 	symbols.ClearColor(0.0, 0.0, 0.0, 1.0);
//! 	if symbols.is_loaded(Symbol::EGLImageTargetTexture2DOES) {
//! 		// zero-copy path
//! 	}
//! }
//! # Ok::<(), gl_dispatch::ResolveError>(())
//! ```
//!
//! Code that prefers free functions, like the `gl` crate offers, can install a table
//! process-wide and call through [`facade`].

pub mod facade;
mod function_mapping;
mod log;
pub mod mock;
pub mod resolver;
pub mod symbols;
pub mod table;
pub mod version;


pub use resolver::{ErrorHandling, ResolveError, Resolution};
pub use symbols::{Slot, Symbol, SymbolEntry, SYMBOL_COUNT, SYMBOL_MAP};
pub use table::{GlSymbols, LoadOptions, ProcAddressFn};
pub use version::{GlExtension, GlVersion, Profile, VersionType};

use self::log::*;
