//! Process-wide slots and free functions carrying the GL names, used like the `gl`
//! crate. Loads are serialized against each other but not against GL calls in
//! flight on other threads.

use std::{
	ffi::c_void,
	ptr,
	sync::{
		atomic::{AtomicPtr, Ordering},
		Mutex, MutexGuard,
	},
};

use enum_map::Enum;
use gl::types::*;

use crate::{
	debug,
	function_mapping::gl_manifest,
	resolver::{resolve_entries, Resolution, SlotStore},
	symbols::*,
	table::{unresolved, GlSymbols},
};

#[cfg(test)]
mod test;

#[allow(clippy::declare_interior_mutable_const)]
const NULL_SLOT: AtomicPtr<c_void> = AtomicPtr::new(ptr::null_mut());

static SLOTS: [AtomicPtr<c_void>; SYMBOL_COUNT] = [NULL_SLOT; SYMBOL_COUNT];
static LOAD_LOCK: Mutex<()> = Mutex::new(());

struct GlobalSlots<'a> {
	_guard: MutexGuard<'a, ()>,
}

impl GlobalSlots<'_> {
	fn lock() -> Self {
		Self {
			_guard: LOAD_LOCK.lock().unwrap_or_else(|p| p.into_inner()),
		}
	}
}

impl SlotStore for GlobalSlots<'_> {
	fn store(&mut self, symbol: Symbol, slot: Slot) {
		SLOTS[symbol.into_usize()].store(slot.as_ptr() as *mut c_void, Ordering::Release);
	}
}

/// Resolve every symbol into the process-wide slots.
///
/// `proc_address` runs before the slots are locked, so it may itself call into
/// this module.
pub fn load_with<F>(mut proc_address: F) -> Resolution
where
	F: FnMut(&'static str) -> *const c_void,
{
	let addresses = SYMBOL_MAP.iter().map(|entry| proc_address(entry.name)).collect::<Vec<_>>();

	let mut slots = GlobalSlots::lock();
	resolve_entries(SYMBOL_MAP, &mut slots, |entry| addresses[entry.symbol.into_usize()])
}

/// Copy a context-owned table into the process-wide slots, e.g. on make-current
pub fn load_from(symbols: &GlSymbols) {
	let mut slots = GlobalSlots::lock();
	for symbol in Symbol::iter() {
		slots.store(symbol, symbols.address(symbol));
	}
	debug!("installed {} symbols process-wide", symbols.loaded_count());
}

pub fn clear() {
	let mut slots = GlobalSlots::lock();
	for symbol in Symbol::iter() {
		slots.store(symbol, Slot::NULL);
	}
	debug!("cleared process-wide symbols");
}

pub fn address(symbol: Symbol) -> Slot {
	Slot::from_ptr(SLOTS[symbol.into_usize()].load(Ordering::Acquire))
}

pub fn is_loaded(symbol: Symbol) -> bool {
	!address(symbol).is_null()
}

macro_rules! facade_functions {
	($($name:ident($($arg:ident: $ty:ty),*) [$($ret:ty)?] gl: $gl:expr, es: $es:expr, ext: [$($ext:ident),*], ext_api: $ext_api:expr, removed_gl: $removed_gl:expr;)*) => {
		paste::paste! {
			$(
				#[doc = concat!("Call `gl", stringify!($name), "` through the process-wide slot")]
				#[allow(non_snake_case, clippy::too_many_arguments)]
				#[inline]
				pub unsafe fn $name($($arg: $ty),*) $(-> $ret)? {
					let slot = address(Symbol::$name);
					if slot.is_null() {
						unresolved(Symbol::$name)
					}
					let f = std::mem::transmute::<*const c_void, [<PFNGL $name:upper PROC>]>(slot.as_ptr());
					f($($arg),*)
				}
			)*
		}
	};
}

gl_manifest!(facade_functions);
