use std::fmt;

#[cfg(test)]
mod test;

#[derive(Clone, Debug)]
pub struct GlVersion {
	pub ty: VersionType,
	pub major: u8,
	pub minor: u8,
	/// Desktop context profile, `None` when unknown
	pub profile: Option<Profile>,
	pub extensions: Vec<&'static GlExtension>,
}

impl GlVersion {
	pub fn at_least(&self, gl: Option<(u8, u8)>, es: Option<(u8, u8)>) -> bool {
		match (self.ty, (self.major, self.minor), gl, es) {
			(VersionType::GL, (ma, mi), Some((rma, rmi)), _)
				if ma > rma || (ma == rma && mi >= rmi) =>
				true,
			(VersionType::ES, (ma, mi), _, Some((rma, rmi)))
				if ma > rma || (ma == rma && mi >= rmi) =>
				true,
			_ => false,
		}
	}

	pub fn has_extension(&self, extension: &GlExtension) -> bool {
		self.extensions.iter().any(|e| *e == extension)
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VersionType {
	GL,
	ES,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Profile {
	Core,
	Compatibility,
}

#[derive(Debug)]
pub struct GlExtension {
	pub name: &'static str,
	pub unlock_gl: Option<(u8, u8)>,
	pub unlock_es: Option<(u8, u8)>,
	pub provided_str: &'static str,
}

impl PartialEq for GlExtension {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name
	}
}

impl GlVersion {
	pub fn new(ty: VersionType, major: u8, minor: u8, extensions: &[&'static GlExtension]) -> Self {
		let mut list = ext::version_extensions(ty, major, minor);
		for extension in extensions {
			if !list.contains(extension) {
				list.push(extension);
			}
		}

		Self {
			ty,
			major,
			minor,
			profile: (ty == VersionType::GL && list.contains(&&ext::ARB_compatibility))
				.then_some(Profile::Compatibility),
			extensions: list,
		}
	}

	pub fn with_profile(mut self, profile: Profile) -> Self {
		self.profile = Some(profile);
		self
	}

	pub fn from_extensions(extensions: &[&'static GlExtension]) -> Self {
		Self::new(VersionType::GL, 0, 0, extensions)
	}

	pub fn from_version(ty: VersionType, major: u8, minor: u8) -> Self {
		Self::new(ty, major, minor, &[])
	}

	pub fn clear() -> Self {
		Self::new(VersionType::GL, 0, 0, &[])
	}

	/// Parse a `GL_VERSION` string and an extension list as reported by a driver.
	///
	/// Desktop drivers report `"<major>.<minor>[.<release>] [vendor info]"`, ES
	/// drivers prefix that with `"OpenGL ES "` (or `"OpenGL ES-CM "` / `"OpenGL ES-CL "`
	/// for 1.x). A `(Core Profile)` or `(Compatibility Profile)` note sets the profile.
	/// Extension names may carry the `GL_` prefix; unknown extensions are skipped.
	pub fn parse<'a>(version: &str, extensions: impl IntoIterator<Item = &'a str>) -> Option<Self> {
		let version = version.trim();

		let (ty, numbers) = match version.strip_prefix("OpenGL ES") {
			Some(rest) => {
				let rest = rest
					.strip_prefix("-CM")
					.or_else(|| rest.strip_prefix("-CL"))
					.unwrap_or(rest);
				(VersionType::ES, rest.trim_start())
			},
			None => (VersionType::GL, version),
		};

		let numbers = numbers.split(|c: char| c.is_whitespace()).next()?;
		let mut parts = numbers.split('.');
		let major = parts.next()?.parse::<u8>().ok()?;
		let minor = parts
			.next()?
			.chars()
			.take_while(|c| c.is_ascii_digit())
			.collect::<String>()
			.parse::<u8>()
			.ok()?;

		let known = extensions
			.into_iter()
			.filter_map(|name| ext::lookup(name.trim()))
			.collect::<Vec<_>>();

		let parsed = Self::new(ty, major, minor, &known);
		Some(match ty {
			VersionType::GL if version.contains("Core Profile") => parsed.with_profile(Profile::Core),
			VersionType::GL if version.contains("Compatibility Profile") => {
				parsed.with_profile(Profile::Compatibility)
			},
			_ => parsed,
		})
	}
}

impl fmt::Display for GlVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match (self.ty, self.profile) {
			(VersionType::ES, _) => write!(f, "OpenGL ES {}.{}", self.major, self.minor),
			(VersionType::GL, None) => write!(f, "OpenGL {}.{}", self.major, self.minor),
			(VersionType::GL, Some(Profile::Core)) => write!(f, "OpenGL {}.{} core", self.major, self.minor),
			(VersionType::GL, Some(Profile::Compatibility)) => {
				write!(f, "OpenGL {}.{} compatibility", self.major, self.minor)
			},
		}
	}
}

pub mod ext {
	use super::{GlExtension, VersionType};

	macro_rules! extensions {
		($($name:ident($(gl $gl_major:literal . $gl_minor:literal)? $(,)? $(es $es_major:literal . $es_minor:literal)?);)*) => {
			$(
				#[allow(unused, non_upper_case_globals)]
				pub const $name: GlExtension = GlExtension {
					name: stringify!($name),
					unlock_gl: extensions!(opt| $(($gl_major, $gl_minor))?),
					unlock_es: extensions!(opt| $(($es_major, $es_minor))?),
					provided_str: concat!(
						"GL_", stringify!($name)
						$(, concat!(" or OpenGL ", $gl_major, ".", $gl_minor))?
						$(, concat!(" or OpenGL ES ", $es_major, ".", $es_minor))?
					),
				};
			)*

			pub static ALL: &[&GlExtension] = &[$(&$name,)*];

			pub(crate) fn version_extensions(ty: VersionType, major: u8, minor: u8) -> Vec<&'static GlExtension> {
				let mut extensions = Vec::new();
				$(
					match (ty, major, minor) {
						$((VersionType::GL, major, minor) if major > $gl_major || (major == $gl_major && minor >= $gl_minor)
							=> extensions.push(&$name),)?
						$((VersionType::ES, major, minor) if major > $es_major || (major == $es_major && minor >= $es_minor)
							=> extensions.push(&$name),)?
						_ => {},
					}
				)*

				extensions
			}
		};
		(opt| ) => { None };
		(opt| $($expr:tt)+) => { Some($($expr)+) };
	}

	extensions! {
		ARB_buffer_storage(gl 4 . 4);
		ARB_clip_control(gl 4 . 5);
		ARB_compatibility();
		ARB_compute_shader(gl 4 . 3);
		ARB_direct_state_access(gl 4 . 5);
		KHR_debug(gl 4 . 3, es 3 . 2);
		EXT_discard_framebuffer();
		OES_EGL_image();
		OES_mapbuffer();
		OES_vertex_array_object();
	}

	pub fn lookup(name: &str) -> Option<&'static GlExtension> {
		let name = name.strip_prefix("GL_").unwrap_or(name);
		ALL.iter().copied().find(|e| e.name == name)
	}
}
