use std::{collections::HashMap, ptr};

use super::{resolve_entries, resolve_symbols, ErrorHandling, ResolveError, Resolution, SlotStore};
use crate::{
	symbols::{Slot, Symbol, SYMBOL_MAP},
	test::init_logger,
	version::{GlVersion, VersionType},
};

#[derive(Default)]
struct Recorder(HashMap<Symbol, Slot>);

impl SlotStore for Recorder {
	fn store(&mut self, symbol: Symbol, slot: Slot) {
		self.0.insert(symbol, slot);
	}
}

#[test]
fn queries_every_entry_once() {
	init_logger();
	let mut slots = Recorder::default();
	let mut queried = Vec::new();

	let resolution = resolve_symbols(SYMBOL_MAP, &mut slots, |name| {
		queried.push(name);
		ptr::null()
	});

	assert_eq!(queried.len(), SYMBOL_MAP.len());
	assert_eq!(slots.0.len(), SYMBOL_MAP.len());
	assert!(resolution.resolved.is_empty());
	assert_eq!(resolution.missing.len(), SYMBOL_MAP.len());
}

#[test]
fn custom_map() {
	init_logger();
	let mut slots = Recorder::default();
	let entries = [Symbol::BufferStorage, Symbol::BindBuffer].map(Symbol::entry);

	// glBufferStorage fails, glBindBuffer resolves
	let resolution = resolve_symbols(entries, &mut slots, |name| match name {
		"glBindBuffer" => 0x1000 as *const _,
		_ => ptr::null(),
	});

	assert_eq!(slots.0.len(), 2);
	assert!(slots.0[&Symbol::BufferStorage].is_null());
	assert_eq!(slots.0[&Symbol::BindBuffer].as_ptr() as usize, 0x1000);
	assert_eq!(resolution.resolved, vec![Symbol::BindBuffer]);
	assert_eq!(resolution.missing, vec![Symbol::BufferStorage]);

	let resolution = resolve_symbols(entries, &mut slots, |name| match name {
		"glBindBuffer" => 0x2000 as *const _,
		_ => ptr::null(),
	});

	assert!(slots.0[&Symbol::BufferStorage].is_null());
	assert_eq!(slots.0[&Symbol::BindBuffer].as_ptr() as usize, 0x2000);
	assert_eq!(resolution.resolved, vec![Symbol::BindBuffer]);
}

#[test]
fn lookup_sees_entry() {
	init_logger();
	let mut slots = Recorder::default();

	resolve_entries(SYMBOL_MAP, &mut slots, |entry| {
		assert_eq!(entry.c_name().to_bytes(), entry.name.as_bytes());
		0x10 as *const _
	});

	assert!(slots.0.values().all(|slot| !slot.is_null()));
}

#[test]
fn check_missing_core() {
	init_logger();
	let version = GlVersion::from_version(VersionType::GL, 2, 1);
	let resolution = Resolution {
		resolved: vec![Symbol::Clear],
		missing: vec![Symbol::BindBuffer, Symbol::BufferStorage, Symbol::GenBuffers],
		skipped: vec![],
	};

	assert_eq!(resolution.missing_core(&version), vec![Symbol::BindBuffer, Symbol::GenBuffers]);

	let err = resolution.check(&version, ErrorHandling::FailOnMissingCore).unwrap_err();
	assert_eq!(
		err,
		ResolveError::MissingCore {
			version: "OpenGL 2.1".into(),
			symbols: vec!["glBindBuffer", "glGenBuffers"],
		}
	);
	assert_eq!(
		err.to_string(),
		"OpenGL 2.1 driver did not provide core symbols: glBindBuffer, glGenBuffers"
	);

	assert_eq!(resolution.check(&version, ErrorHandling::WarnOnMissingCore), Ok(()));
	assert_eq!(resolution.check(&version, ErrorHandling::DoNotCheck), Ok(()));
}

#[test]
fn check_missing_extension() {
	init_logger();
	let version = GlVersion::from_version(VersionType::GL, 2, 1);
	let resolution = Resolution {
		resolved: vec![Symbol::BindBuffer],
		missing: vec![Symbol::BufferStorage, Symbol::DebugMessageCallback],
		skipped: vec![],
	};

	assert!(resolution.missing_core(&version).is_empty());
	assert_eq!(resolution.check(&version, ErrorHandling::FailOnMissingCore), Ok(()));
}
