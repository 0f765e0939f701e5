use std::ffi::c_void;

use crate::{
	facade,
	mock::MockDriver,
	symbols::Symbol,
	table::GlSymbols,
	test::{stub_driver, take_calls, test_harness, test_lock},
	version::{ext::OES_EGL_image, GlVersion, VersionType},
};

#[test]
fn load_with_driver() {
	let driver = MockDriver::new(GlVersion::from_version(VersionType::ES, 2, 0));
	test_harness(driver, |driver| {
		for symbol in Symbol::iter() {
			assert_eq!(facade::address(symbol), driver.address_of(symbol));
		}
		assert!(facade::is_loaded(Symbol::BindBuffer));
		assert!(!facade::is_loaded(Symbol::EGLImageTargetTexture2DOES));
	})
}

#[test]
fn calls_go_through_slot() {
	test_harness(stub_driver(GlVersion::from_version(VersionType::GL, 2, 1)), |_| unsafe {
		take_calls();
		facade::ClearColor(0.0, 0.0, 0.0, 1.0);
		facade::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, 3);

		assert_eq!(
			take_calls(),
			vec!["glClearColor(0, 0, 0, 1)".to_string(), "glBindBuffer(0x8893, 3)".to_string()]
		);
	})
}

#[test]
#[should_panic(expected = "glEGLImageTargetTexture2DOES called before it was resolved")]
fn missing_extension_call() {
	test_harness(MockDriver::new(GlVersion::from_version(VersionType::ES, 3, 0)), |_| unsafe {
		facade::EGLImageTargetTexture2DOES(gl::TEXTURE_2D, std::ptr::null());
	})
}

#[test]
fn reload_replaces_slots() {
	let first = MockDriver::new(GlVersion::new(VersionType::ES, 2, 0, &[&OES_EGL_image]));
	test_harness(first, |_| {
		assert!(facade::is_loaded(Symbol::EGLImageTargetTexture2DOES));

		let second = MockDriver::new(GlVersion::from_version(VersionType::ES, 2, 0)).with_base(0x5000_0000);
		let resolution = facade::load_with(|s| second.get_proc_address(s));

		assert!(!facade::is_loaded(Symbol::EGLImageTargetTexture2DOES));
		assert!(resolution.missing.contains(&Symbol::EGLImageTargetTexture2DOES));
		assert_eq!(facade::address(Symbol::Clear), second.address_of(Symbol::Clear));
	})
}

#[test]
fn loader_may_use_facade() {
	test_lock(|| {
		let driver = MockDriver::new(GlVersion::from_version(VersionType::ES, 2, 0));
		let resolution = facade::load_with(|s| {
			facade::clear();
			driver.get_proc_address(s)
		});

		assert!(resolution.resolved.contains(&Symbol::Clear));
		assert_eq!(facade::address(Symbol::Clear), driver.address_of(Symbol::Clear));

		facade::clear();
	})
}

#[test]
fn install_table() {
	test_lock(|| {
		let driver = MockDriver::new(GlVersion::from_version(VersionType::GL, 3, 3))
			.provide(Symbol::EGLImageTargetTexture2DOES, 0x99 as *const c_void);
		let mut symbols = GlSymbols::new();
		symbols.resolve(|s| driver.get_proc_address(s));

		facade::load_from(&symbols);
		for symbol in Symbol::iter() {
			assert_eq!(facade::address(symbol), symbols.address(symbol));
		}

		facade::clear();
		assert!(Symbol::iter().all(|symbol| !facade::is_loaded(symbol)));
	})
}
