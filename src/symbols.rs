use std::{
	ffi::{c_void, CStr},
	fmt,
	ptr::{self, NonNull},
};

use enum_map::Enum;
use gl::types::*;

use crate::{
	function_mapping::gl_manifest,
	version::{ext, GlExtension, GlVersion, Profile, VersionType},
};


/// Resolved address of a single entry point, null if the driver did not provide it
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Slot(Option<NonNull<c_void>>);

// SAFETY: a slot holds the address of driver code, never of data
unsafe impl Send for Slot {}
unsafe impl Sync for Slot {}

impl Slot {
	pub const NULL: Self = Self(None);

	pub fn from_ptr(ptr: *const c_void) -> Self {
		Self(NonNull::new(ptr as *mut c_void))
	}

	pub fn as_ptr(self) -> *const c_void {
		match self.0 {
			Some(ptr) => ptr.as_ptr() as *const c_void,
			None => ptr::null(),
		}
	}

	pub fn is_null(self) -> bool {
		self.0.is_none()
	}
}

/// Versions and extensions that guarantee an entry point is exposed
#[derive(Debug)]
pub struct Requirement {
	pub gl: Option<(u8, u8)>,
	pub es: Option<(u8, u8)>,
	pub extensions: &'static [&'static GlExtension],
	/// The only API whose contexts expose the symbol through `extensions`
	pub extension_api: Option<VersionType>,
	/// Desktop version from which core profile contexts drop the symbol
	pub removed_gl: Option<(u8, u8)>,
}

impl Requirement {
	fn past_removal(&self, version: &GlVersion) -> bool {
		version.ty == VersionType::GL && version.at_least(self.removed_gl, None)
	}

	fn dropped_by(&self, version: &GlVersion) -> bool {
		self.past_removal(version) && version.profile == Some(Profile::Core)
	}

	fn via_extension(&self, version: &GlVersion) -> bool {
		self.extension_api.map_or(true, |api| api == version.ty)
			&& self.extensions.iter().any(|e| version.has_extension(e))
	}

	/// The context version alone guarantees the symbol, so a driver lacking it is broken.
	///
	/// Past their removal, compatibility entry points are only guaranteed by a
	/// context known to be a compatibility profile.
	pub fn is_core(&self, version: &GlVersion) -> bool {
		version.at_least(self.gl, self.es)
			&& (!self.past_removal(version) || version.profile == Some(Profile::Compatibility))
	}

	pub fn is_available(&self, version: &GlVersion) -> bool {
		!self.dropped_by(version) && (version.at_least(self.gl, self.es) || self.via_extension(version))
	}

	/// Whether any context of this API and profile could expose the symbol
	pub fn applies_to(&self, version: &GlVersion) -> bool {
		if self.dropped_by(version) {
			return false
		}

		let extension = !self.extensions.is_empty() && self.extension_api.map_or(true, |api| api == version.ty);
		extension
			|| match version.ty {
				VersionType::GL => self.gl.is_some(),
				VersionType::ES => self.es.is_some(),
			}
	}
}

impl fmt::Display for Requirement {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut options = Vec::new();
		if let Some((major, minor)) = self.gl {
			options.push(format!("OpenGL {major}.{minor}"));
		}
		if let Some((major, minor)) = self.es {
			options.push(format!("OpenGL ES {major}.{minor}"));
		}
		options.extend(self.extensions.iter().map(|e| match self.extension_api {
			Some(VersionType::GL) => format!("GL_{} on OpenGL", e.name),
			Some(VersionType::ES) => format!("GL_{} on OpenGL ES", e.name),
			None => format!("GL_{}", e.name),
		}));

		write!(f, "{}", options.join(" or "))?;
		if let Some((major, minor)) = self.removed_gl {
			write!(f, ", not in OpenGL {major}.{minor}+ core profiles")?;
		}
		Ok(())
	}
}

#[derive(Debug)]
pub struct SymbolEntry {
	pub symbol: Symbol,
	pub name: &'static str,
	c_name: &'static str,
	pub requirement: Requirement,
}

impl SymbolEntry {
	/// [`Self::name`] as a C string, for platform loaders taking `const char *`
	pub fn c_name(&self) -> &'static CStr {
		// SAFETY: generated as `concat!(name, "\0")` from an identifier, which cannot contain a nul
		unsafe { CStr::from_bytes_with_nul_unchecked(self.c_name.as_bytes()) }
	}
}

macro_rules! declare_symbols {
	($($name:ident($($arg:ident: $ty:ty),*) [$($ret:ty)?] gl: $gl:expr, es: $es:expr, ext: [$($ext:ident),*], ext_api: $ext_api:expr, removed_gl: $removed_gl:expr;)*) => {
		/// Every resolvable entry point, named without the `gl` prefix
		#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Enum)]
		pub enum Symbol {
			$($name,)*
		}

		pub const SYMBOL_COUNT: usize = [$(stringify!($name)),*].len();

		paste::paste! {
			$(
				#[doc = concat!("Signature of `gl", stringify!($name), "`")]
				pub type [<PFNGL $name:upper PROC>] = unsafe extern "system" fn($($ty),*) $(-> $ret)?;
			)*
		}

		/// Name to slot map, in [`Symbol`] order
		pub static SYMBOL_MAP: &[SymbolEntry] = &[
			$(
				SymbolEntry {
					symbol: Symbol::$name,
					name: concat!("gl", stringify!($name)),
					c_name: concat!("gl", stringify!($name), "\0"),
					requirement: Requirement {
						gl: $gl,
						es: $es,
						extensions: &[$(&ext::$ext),*],
						extension_api: $ext_api,
						removed_gl: $removed_gl,
					},
				},
			)*
		];
	};
}

gl_manifest!(declare_symbols);

impl Symbol {
	pub fn entry(self) -> &'static SymbolEntry {
		&SYMBOL_MAP[self.into_usize()]
	}

	pub fn name(self) -> &'static str {
		self.entry().name
	}

	pub fn requirement(self) -> &'static Requirement {
		&self.entry().requirement
	}

	pub fn from_name(name: &str) -> Option<Self> {
		SYMBOL_MAP.iter().find(|e| e.name == name).map(|e| e.symbol)
	}

	pub fn iter() -> impl Iterator<Item = Symbol> {
		SYMBOL_MAP.iter().map(|e| e.symbol)
	}
}

impl fmt::Display for Symbol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
