//! Generic resolution of a symbol map into slots.

use std::ffi::c_void;

use thiserror::Error;

use crate::{
	debug, error,
	symbols::{Slot, Symbol, SymbolEntry},
	version::GlVersion,
	warning,
};

#[cfg(test)]
mod test;

pub trait SlotStore {
	fn store(&mut self, symbol: Symbol, slot: Slot);
}

/// What to do when a symbol guaranteed by the context version did not resolve
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ErrorHandling {
	/// Fail with [`ResolveError::MissingCore`]
	#[default]
	FailOnMissingCore,
	/// Log the missing symbols and carry on with null slots
	WarnOnMissingCore,
	DoNotCheck,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
	#[error("{version} driver did not provide core symbols: {}", .symbols.join(", "))]
	MissingCore {
		version: String,
		symbols: Vec<&'static str>,
	},
	#[error("no proc address function was supplied")]
	NoProcAddress,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
	pub resolved: Vec<Symbol>,
	/// Queried but returned null
	pub missing: Vec<Symbol>,
	/// Not queried because the context's API cannot expose them, reset to null
	pub skipped: Vec<Symbol>,
}

impl Resolution {
	pub fn missing_core(&self, version: &GlVersion) -> Vec<Symbol> {
		self.missing
			.iter()
			.copied()
			.filter(|symbol| symbol.requirement().is_core(version))
			.collect()
	}

	pub fn check(&self, version: &GlVersion, error_handling: ErrorHandling) -> Result<(), ResolveError> {
		if error_handling == ErrorHandling::DoNotCheck {
			return Ok(())
		}

		let missing = self.missing_core(version);
		if missing.is_empty() {
			return Ok(())
		}

		let symbols = missing.iter().map(|symbol| symbol.name()).collect::<Vec<_>>();

		match error_handling {
			ErrorHandling::FailOnMissingCore => {
				error!("{} driver did not provide core symbols {:?}", version, symbols);
				Err(ResolveError::MissingCore {
					version: version.to_string(),
					symbols,
				})
			},
			_ => {
				warning!("{} driver did not provide core symbols {:?}", version, symbols);
				Ok(())
			},
		}
	}
}

/// Query `lookup` once per entry and store each result, null or not, into `slots`.
///
/// Entries are independent of each other; running this again overwrites every
/// slot the entries cover.
pub fn resolve_entries<I, S, F>(entries: I, slots: &mut S, mut lookup: F) -> Resolution
where
	I: IntoIterator<Item = &'static SymbolEntry>,
	S: SlotStore + ?Sized,
	F: FnMut(&'static SymbolEntry) -> *const c_void,
{
	let mut resolution = Resolution::default();

	for entry in entries {
		let slot = Slot::from_ptr(lookup(entry));
		slots.store(entry.symbol, slot);

		if slot.is_null() {
			resolution.missing.push(entry.symbol);
		} else {
			resolution.resolved.push(entry.symbol);
		}
	}

	debug!(
		"resolved {} symbol(s), {} missing",
		resolution.resolved.len(),
		resolution.missing.len()
	);

	resolution
}

/// [`resolve_entries`] with a loader taking the symbol name, the shape of
/// `gl::load_with` and most windowing libraries' `get_proc_address`
pub fn resolve_symbols<I, S, F>(entries: I, slots: &mut S, mut proc_address: F) -> Resolution
where
	I: IntoIterator<Item = &'static SymbolEntry>,
	S: SlotStore + ?Sized,
	F: FnMut(&'static str) -> *const c_void,
{
	resolve_entries(entries, slots, |entry| proc_address(entry.name))
}
