//! Mock GL driver for exercising resolution without a GL context.

use std::{cell::Cell, collections::HashMap, ffi::c_void, ptr};

use enum_map::Enum;

use crate::{
	symbols::{Slot, Symbol},
	trace,
	version::GlVersion,
};

#[cfg(test)]
mod test;

const DEFAULT_BASE: usize = 0x1000_0000;
const ADDRESS_STRIDE: usize = 0x10;

/// Answers `get_proc_address` queries the way a driver for `version` would.
///
/// Every symbol available under the driver's version and extensions gets a
/// distinct fake address derived from the driver's base address. Those addresses
/// are only meant for comparison and must never be called; use
/// [`MockDriver::provide`] to hand out real functions.
pub struct MockDriver {
	version: GlVersion,
	base: usize,
	hidden: Vec<Symbol>,
	provided: HashMap<Symbol, Slot>,
	queries: Cell<usize>,
}

impl MockDriver {
	pub fn new(version: GlVersion) -> Self {
		Self {
			version,
			base: DEFAULT_BASE,
			hidden: Vec::new(),
			provided: HashMap::new(),
			queries: Cell::new(0),
		}
	}

	pub fn with_base(mut self, base: usize) -> Self {
		self.base = base;
		self
	}

	/// Withhold a symbol even if the driver's version guarantees it
	pub fn hide(mut self, symbol: Symbol) -> Self {
		self.provided.remove(&symbol);
		self.hidden.push(symbol);
		self
	}

	/// Answer queries for `symbol` with `address`, whatever the driver's version
	pub fn provide(mut self, symbol: Symbol, address: *const c_void) -> Self {
		self.hidden.retain(|s| *s != symbol);
		self.provided.insert(symbol, Slot::from_ptr(address));
		self
	}

	pub fn version(&self) -> &GlVersion {
		&self.version
	}

	pub fn advertises(&self, symbol: Symbol) -> bool {
		self.provided.contains_key(&symbol)
			|| (!self.hidden.contains(&symbol) && symbol.requirement().is_available(&self.version))
	}

	pub fn address_of(&self, symbol: Symbol) -> Slot {
		if let Some(slot) = self.provided.get(&symbol) {
			*slot
		} else if self.advertises(symbol) {
			Slot::from_ptr((self.base + (symbol.into_usize() + 1) * ADDRESS_STRIDE) as *const c_void)
		} else {
			Slot::NULL
		}
	}

	pub fn get_proc_address(&self, name: &str) -> *const c_void {
		self.queries.set(self.queries.get() + 1);

		match Symbol::from_name(name) {
			Some(symbol) => {
				let slot = self.address_of(symbol);
				trace!("{} -> {:?}", name, slot.as_ptr());
				slot.as_ptr()
			},
			None => {
				trace!("{} is not a known symbol", name);
				ptr::null()
			},
		}
	}

	pub fn queries(&self) -> usize {
		self.queries.get()
	}
}
