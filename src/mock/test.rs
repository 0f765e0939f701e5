use std::ffi::c_void;

use super::MockDriver;
use crate::{
	symbols::Symbol,
	version::{ext::KHR_debug, GlVersion, Profile, VersionType},
};

#[test]
fn advertises_by_version() {
	let driver = MockDriver::new(GlVersion::from_version(VersionType::ES, 2, 0));

	assert!(driver.advertises(Symbol::BindBuffer));
	assert!(!driver.advertises(Symbol::BindVertexArray));
	assert!(!driver.advertises(Symbol::Begin));
	assert!(!driver.get_proc_address("glBindBuffer").is_null());
	assert!(driver.get_proc_address("glBindVertexArray").is_null());
}

#[test]
fn advertises_by_extension() {
	let driver = MockDriver::new(GlVersion::new(VersionType::GL, 2, 1, &[&KHR_debug]));

	assert!(driver.advertises(Symbol::DebugMessageCallback));
	assert!(!driver.advertises(Symbol::DebugMessageCallbackKHR));
	assert!(!driver.advertises(Symbol::DispatchCompute));
}

#[test]
fn es_debug_extension_uses_suffixed_names() {
	let driver = MockDriver::new(GlVersion::new(VersionType::ES, 3, 0, &[&KHR_debug]));

	assert!(driver.advertises(Symbol::DebugMessageCallbackKHR));
	assert!(driver.advertises(Symbol::DebugMessageControlKHR));
	assert!(!driver.advertises(Symbol::DebugMessageCallback));
	assert!(driver.get_proc_address("glDebugMessageCallback").is_null());
}

#[test]
fn core_profile_drops_fixed_function() {
	let core = MockDriver::new(GlVersion::from_version(VersionType::GL, 3, 2).with_profile(Profile::Core));
	let compat = MockDriver::new(GlVersion::from_version(VersionType::GL, 3, 2).with_profile(Profile::Compatibility));

	assert!(!core.advertises(Symbol::Begin));
	assert!(!core.advertises(Symbol::ClientActiveTexture));
	assert!(core.advertises(Symbol::ActiveTexture));
	assert!(compat.advertises(Symbol::Begin));
}

#[test]
fn distinct_addresses() {
	let driver = MockDriver::new(GlVersion::from_version(VersionType::GL, 4, 6));

	let mut addresses = Symbol::iter()
		.filter(|symbol| driver.advertises(*symbol))
		.map(|symbol| driver.address_of(symbol).as_ptr() as usize)
		.collect::<Vec<_>>();
	let count = addresses.len();
	addresses.sort_unstable();
	addresses.dedup();

	assert_eq!(addresses.len(), count);
}

#[test]
fn base_moves_addresses() {
	let version = GlVersion::from_version(VersionType::GL, 3, 3);
	let a = MockDriver::new(version.clone());
	let b = MockDriver::new(version).with_base(0x2000_0000);

	assert_ne!(a.address_of(Symbol::Clear), b.address_of(Symbol::Clear));
	assert_eq!(
		b.address_of(Symbol::Clear).as_ptr() as usize - 0x2000_0000,
		a.address_of(Symbol::Clear).as_ptr() as usize - 0x1000_0000,
	);
}

#[test]
fn hide_and_provide() {
	let driver = MockDriver::new(GlVersion::from_version(VersionType::GL, 3, 3))
		.hide(Symbol::Clear)
		.provide(Symbol::BindVertexArrayOES, 0x42 as *const c_void);

	assert!(!driver.advertises(Symbol::Clear));
	assert!(driver.address_of(Symbol::Clear).is_null());
	assert_eq!(driver.address_of(Symbol::BindVertexArrayOES).as_ptr() as usize, 0x42);

	let driver = driver.provide(Symbol::Clear, 0x43 as *const c_void);
	assert_eq!(driver.get_proc_address("glClear") as usize, 0x43);
}

#[test]
fn counts_queries() {
	let driver = MockDriver::new(GlVersion::clear());

	assert_eq!(driver.queries(), 0);
	assert!(driver.get_proc_address("glClear").is_null());
	assert!(driver.get_proc_address("glNotAFunction").is_null());
	assert_eq!(driver.queries(), 2);
}
