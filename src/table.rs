//! Context-owned dispatch table.

use std::{
	ffi::{c_char, c_void, CStr},
	fmt,
};

use enum_map::EnumMap;
use gl::types::*;

use crate::{
	debug, error,
	function_mapping::gl_manifest,
	resolver::{resolve_entries, resolve_symbols, ErrorHandling, ResolveError, Resolution, SlotStore},
	symbols::*,
	version::{GlVersion, Profile, VersionType},
};


/// Platform loader with a C ABI, such as `eglGetProcAddress` or a libretro
/// `get_proc_address` callback
pub type ProcAddressFn = unsafe extern "C" fn(*const c_char) -> *const c_void;

#[derive(Copy, Clone, Debug, Default)]
pub struct LoadOptions {
	pub error_handling: ErrorHandling,
	/// Only query symbols the context's API and profile can expose; the rest are reset to null
	pub api_filter: bool,
}

/// One slot per [`Symbol`], owned by whoever owns the GL context.
///
/// Every GL function in the manifest is callable as a method carrying its name,
/// e.g. `symbols.BindBuffer(gl::ARRAY_BUFFER, vbo)`. Those methods are unsafe for
/// the same reasons calling GL is: the context the table was resolved against must
/// be current and the arguments valid.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct GlSymbols {
	slots: EnumMap<Symbol, Slot>,
}

impl GlSymbols {
	pub fn new() -> Self {
		Self::default()
	}

	/// Resolve a new table for a context of `version`
	pub fn load<F>(version: &GlVersion, options: LoadOptions, proc_address: F) -> Result<Self, ResolveError>
	where
		F: FnMut(&'static str) -> *const c_void,
	{
		let mut symbols = Self::new();
		symbols.resolve_for(version, options, proc_address)?;
		Ok(symbols)
	}

	pub fn resolve<F>(&mut self, proc_address: F) -> Resolution
	where
		F: FnMut(&'static str) -> *const c_void,
	{
		resolve_symbols(SYMBOL_MAP, self, proc_address)
	}

	/// [`Self::resolve`], then check the result against what `version` guarantees
	pub fn resolve_for<F>(
		&mut self,
		version: &GlVersion,
		options: LoadOptions,
		proc_address: F,
	) -> Result<Resolution, ResolveError>
	where
		F: FnMut(&'static str) -> *const c_void,
	{
		let resolution = if options.api_filter {
			let (wanted, foreign): (Vec<_>, Vec<_>) =
				SYMBOL_MAP.iter().partition(|entry| entry.requirement.applies_to(version));

			for entry in &foreign {
				self.store(entry.symbol, Slot::NULL);
			}

			let mut resolution = resolve_symbols(wanted, self, proc_address);
			resolution.skipped = foreign.iter().map(|entry| entry.symbol).collect();
			resolution
		} else {
			self.resolve(proc_address)
		};

		debug!("{} of {} symbols loaded for {}", self.loaded_count(), SYMBOL_COUNT, version);
		resolution.check(version, options.error_handling)?;
		Ok(resolution)
	}

	/// Resolve through a C loader. A null loader is rejected and leaves every slot untouched.
	///
	/// # Safety
	/// `loader` must be safe to call with any nul-terminated symbol name.
	pub unsafe fn resolve_with_c_loader(&mut self, loader: Option<ProcAddressFn>) -> Result<Resolution, ResolveError> {
		let loader = match loader {
			Some(loader) => loader,
			None => {
				error!("attempted to resolve symbols without a proc address function");
				return Err(ResolveError::NoProcAddress)
			},
		};

		Ok(resolve_entries(SYMBOL_MAP, self, |entry| loader(entry.c_name().as_ptr())))
	}

	pub fn clear(&mut self) {
		self.slots = EnumMap::default();
		debug!("cleared all symbols");
	}

	pub fn address(&self, symbol: Symbol) -> Slot {
		self.slots[symbol]
	}

	pub fn is_loaded(&self, symbol: Symbol) -> bool {
		!self.slots[symbol].is_null()
	}

	pub fn loaded_count(&self) -> usize {
		self.slots.values().filter(|slot| !slot.is_null()).count()
	}

	/// Read the context's version, profile and extensions through this table.
	///
	/// # Safety
	/// The context this table was resolved against must be current.
	pub unsafe fn query_version(&self) -> Option<GlVersion> {
		if !self.is_loaded(Symbol::GetString) {
			return None
		}

		let version = gl_string(self.GetString(gl::VERSION))?;
		let reported = GlVersion::parse(&version, [])?;

		let mut extensions = Vec::new();
		if reported.at_least(Some((3, 0)), Some((3, 0)))
			&& self.is_loaded(Symbol::GetStringi)
			&& self.is_loaded(Symbol::GetIntegerv)
		{
			let mut count: GLint = 0;
			self.GetIntegerv(gl::NUM_EXTENSIONS, &mut count);
			for i in 0..count.max(0) as GLuint {
				extensions.extend(gl_string(self.GetStringi(gl::EXTENSIONS, i)));
			}
		} else if let Some(list) = gl_string(self.GetString(gl::EXTENSIONS)) {
			extensions.extend(list.split_whitespace().map(str::to_owned));
		}

		let parsed = GlVersion::parse(&version, extensions.iter().map(String::as_str))?;
		if parsed.ty != VersionType::GL
			|| !parsed.at_least(Some((3, 2)), None)
			|| !self.is_loaded(Symbol::GetIntegerv)
		{
			return Some(parsed)
		}

		let mut mask: GLint = 0;
		self.GetIntegerv(gl::CONTEXT_PROFILE_MASK, &mut mask);
		let mask = mask as GLenum;
		Some(if mask & gl::CONTEXT_CORE_PROFILE_BIT != 0 {
			parsed.with_profile(Profile::Core)
		} else if mask & gl::CONTEXT_COMPATIBILITY_PROFILE_BIT != 0 {
			parsed.with_profile(Profile::Compatibility)
		} else {
			parsed
		})
	}
}

impl SlotStore for GlSymbols {
	fn store(&mut self, symbol: Symbol, slot: Slot) {
		self.slots[symbol] = slot;
	}
}

impl fmt::Debug for GlSymbols {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("GlSymbols")
			.field("loaded", &self.loaded_count())
			.field("total", &SYMBOL_COUNT)
			.finish()
	}
}

unsafe fn gl_string(ptr: *const GLubyte) -> Option<String> {
	if ptr.is_null() {
		None
	} else {
		CStr::from_ptr(ptr as *const c_char).to_str().ok().map(str::to_owned)
	}
}

pub(crate) fn unresolved(symbol: Symbol) -> ! {
	error!(fatal: "{} called before it was resolved", symbol)
}

macro_rules! dispatch_methods {
	($($name:ident($($arg:ident: $ty:ty),*) [$($ret:ty)?] gl: $gl:expr, es: $es:expr, ext: [$($ext:ident),*], ext_api: $ext_api:expr, removed_gl: $removed_gl:expr;)*) => {
		paste::paste! {
			#[allow(non_snake_case, clippy::too_many_arguments)]
			impl GlSymbols {
				$(
					#[doc = concat!("Call `gl", stringify!($name), "` through this table")]
					#[inline]
					pub unsafe fn $name(&self, $($arg: $ty),*) $(-> $ret)? {
						let slot = self.slots[Symbol::$name];
						if slot.is_null() {
							unresolved(Symbol::$name)
						}
						let f = std::mem::transmute::<*const c_void, [<PFNGL $name:upper PROC>]>(slot.as_ptr());
						f($($arg),*)
					}
				)*
			}
		}
	};
}

gl_manifest!(dispatch_methods);
