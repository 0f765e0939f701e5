use super::{
	ext::{self, ARB_buffer_storage, ARB_compatibility, ARB_compute_shader, KHR_debug, OES_EGL_image},
	GlVersion, Profile, VersionType,
};

#[test]
fn missing_extension() {
	let version = GlVersion::clear();
	assert!(!version.has_extension(&ARB_buffer_storage));
}

#[test]
fn old_gl_version() {
	let version = GlVersion::from_version(VersionType::GL, 3, 1);
	assert!(!version.at_least(Some((3, 2)), None));
	assert!(version.at_least(Some((3, 1)), None));
	assert!(version.at_least(Some((2, 9)), None));
}

#[test]
fn extension_present() {
	let version = GlVersion::from_extensions(&[&ARB_buffer_storage]);
	assert!(version.has_extension(&ARB_buffer_storage));
	assert!(!version.has_extension(&KHR_debug));
}

#[test]
fn version_unlocks_extension() {
	let version = GlVersion::from_version(VersionType::GL, 4, 6);
	assert!(version.has_extension(&ARB_buffer_storage));
	assert!(version.has_extension(&KHR_debug));
	assert!(!version.has_extension(&OES_EGL_image));
}

#[test]
fn es_version_met_gl() {
	let version = GlVersion::from_version(VersionType::ES, 4, 6);
	assert!(!version.at_least(Some((3, 2)), None));
	assert!(version.at_least(Some((3, 2)), Some((3, 0))));
	assert!(!version.has_extension(&ARB_buffer_storage));
}

#[test]
fn no_duplicate_extensions() {
	let version = GlVersion::new(VersionType::GL, 4, 6, &[&ARB_buffer_storage]);
	let count = version.extensions.iter().filter(|e| e.name == "ARB_buffer_storage").count();
	assert_eq!(count, 1);
}

#[test]
fn parse_desktop() {
	let version = GlVersion::parse("4.6.0 NVIDIA 535.113.01", []).unwrap();
	assert_eq!(version.ty, VersionType::GL);
	assert_eq!((version.major, version.minor), (4, 6));

	let version = GlVersion::parse("3.3 (Core Profile) Mesa 23.1.4", []).unwrap();
	assert_eq!((version.major, version.minor), (3, 3));
	assert_eq!(version.profile, Some(Profile::Core));

	let version = GlVersion::parse("4.6 (Compatibility Profile) Mesa 23.1.4", []).unwrap();
	assert_eq!(version.profile, Some(Profile::Compatibility));

	let version = GlVersion::parse("4.1 Metal - 83.1", []).unwrap();
	assert_eq!(version.profile, None);
}

#[test]
fn compatibility_extension_sets_profile() {
	let version = GlVersion::parse("3.1 Mesa 23.1.4", ["GL_ARB_compatibility"]).unwrap();
	assert_eq!(version.profile, Some(Profile::Compatibility));

	let version = GlVersion::new(VersionType::ES, 3, 1, &[&ARB_compatibility]);
	assert_eq!(version.profile, None);
}

#[test]
fn desktop_extension_not_unlocked_by_es() {
	assert!(!GlVersion::from_version(VersionType::ES, 3, 1).has_extension(&ARB_compute_shader));
	assert!(!GlVersion::from_version(VersionType::ES, 3, 2).has_extension(&ARB_compute_shader));
	assert!(GlVersion::from_version(VersionType::GL, 4, 3).has_extension(&ARB_compute_shader));
}

#[test]
fn parse_es() {
	let version = GlVersion::parse("OpenGL ES 3.2 Mesa 23.1.4", []).unwrap();
	assert_eq!(version.ty, VersionType::ES);
	assert_eq!((version.major, version.minor), (3, 2));

	let version = GlVersion::parse("OpenGL ES-CM 1.1", []).unwrap();
	assert_eq!(version.ty, VersionType::ES);
	assert_eq!((version.major, version.minor), (1, 1));
}

#[test]
fn parse_garbage() {
	assert!(GlVersion::parse("", []).is_none());
	assert!(GlVersion::parse("OpenGL ES", []).is_none());
	assert!(GlVersion::parse("four point six", []).is_none());
	assert!(GlVersion::parse("4", []).is_none());
}

#[test]
fn parse_extensions() {
	let version = GlVersion::parse(
		"OpenGL ES 2.0",
		["GL_OES_EGL_image", "GL_EXT_texture_format_BGRA8888", "KHR_debug"],
	)
	.unwrap();
	assert!(version.has_extension(&OES_EGL_image));
	assert!(version.has_extension(&KHR_debug));
	assert_eq!(version.extensions.len(), 2);
}

#[test]
fn lookup() {
	assert_eq!(ext::lookup("GL_ARB_buffer_storage"), Some(&ARB_buffer_storage));
	assert_eq!(ext::lookup("ARB_buffer_storage"), Some(&ARB_buffer_storage));
	assert_eq!(ext::lookup("GL_ARB_sparse_texture"), None);
}

#[test]
fn display() {
	assert_eq!(GlVersion::from_version(VersionType::GL, 3, 3).to_string(), "OpenGL 3.3");
	assert_eq!(GlVersion::from_version(VersionType::ES, 2, 0).to_string(), "OpenGL ES 2.0");
	assert_eq!(
		GlVersion::from_version(VersionType::GL, 4, 1).with_profile(Profile::Core).to_string(),
		"OpenGL 4.1 core"
	);
	assert_eq!(KHR_debug.provided_str, "GL_KHR_debug or OpenGL 4.3 or OpenGL ES 3.2");
}
